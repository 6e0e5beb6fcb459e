//! The countdown's tick resource.
//!
//! bubbletea-rs delivers timers as one-shot `tick` commands, so a repeating
//! one-second tick is a chain: every accepted [`TickMsg`] schedules the next
//! one. A [`TickHandle`] owns that chain. While the countdown holds a handle
//! the chain continues; once the handle is dropped no tick it scheduled is
//! ever accepted again, even one that is already in flight.
//!
//! Each handle carries the widget id and a generation tag. A tick is accepted
//! only if both match the handle the widget currently holds, so a handle
//! dropped by Pause and replaced by Start never lets its old tick through.

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

/// How often the countdown ticks. Each tick removes one second.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

static LAST_ID: AtomicI64 = AtomicI64::new(0);

#[cfg(test)]
thread_local! {
    static LIVE_HANDLES: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

/// Number of tick handles alive on this thread.
#[cfg(test)]
pub(crate) fn live_handles() -> usize {
    LIVE_HANDLES.with(|n| n.get())
}

/// Returns a process-unique widget id, starting at 1.
pub(crate) fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Message delivered once per interval while a countdown is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickMsg {
    /// Id of the widget that scheduled the tick.
    pub id: i64,
    /// Generation of the handle that scheduled the tick.
    pub(crate) tag: u64,
}

impl TickMsg {
    /// Returns the generation tag this tick was scheduled under.
    pub fn tag(&self) -> u64 {
        self.tag
    }
}

/// Exclusive ownership of the running countdown's tick chain.
///
/// Deliberately neither `Clone` nor `Copy`: the countdown holds at most one,
/// and releasing it means dropping it.
#[derive(Debug)]
pub struct TickHandle {
    id: i64,
    tag: u64,
    interval: Duration,
}

impl TickHandle {
    /// Acquires a handle for widget `id` under generation `tag`.
    pub(crate) fn acquire(id: i64, tag: u64, interval: Duration) -> Self {
        log::trace!("countdown {id}: tick handle {tag} acquired");
        #[cfg(test)]
        LIVE_HANDLES.with(|n| n.set(n.get() + 1));
        Self { id, tag, interval }
    }

    /// The generation this handle schedules ticks under.
    pub fn tag(&self) -> u64 {
        self.tag
    }

    /// Whether `msg` was scheduled by this handle.
    pub fn owns(&self, msg: &TickMsg) -> bool {
        msg.id == self.id && msg.tag == self.tag
    }

    /// Schedules the next tick one interval from now.
    pub fn schedule(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(self.interval, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        log::trace!("countdown {}: tick handle {} released", self.id, self.tag);
        #[cfg(test)]
        LIVE_HANDLES.with(|n| n.set(n.get() - 1));
    }
}
