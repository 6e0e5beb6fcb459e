//! Countdown state machine.

use super::entry;
use super::error::{parse_duration, DurationError};
use super::keymap::KeyMap;
use super::ticker::{next_id, TickHandle, TickMsg, TICK_INTERVAL};
use super::view::Styles;
use crate::help;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};

/// Where the countdown is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// Nothing counting: no duration set yet, reset, or finished.
    #[default]
    Idle,
    /// Ticking once per second.
    Running,
    /// Stopped mid-countdown with the remaining time kept.
    Paused,
}

/// A countdown timer widget.
///
/// All state changes go through [`set_duration`](Model::set_duration),
/// [`start`](Model::start), [`pause`](Model::pause), [`reset`](Model::reset)
/// and tick delivery in [`update`](Model::update). The tick handle is held
/// exactly while the state is [`RunState::Running`].
///
/// ```rust
/// use bubbletea_countdown::countdown::{Model, RunState};
///
/// let mut countdown = Model::new();
/// countdown.set_duration("65").unwrap();
/// assert_eq!(countdown.display(), "01 | 05");
///
/// let _tick = countdown.start();
/// assert_eq!(countdown.state(), RunState::Running);
///
/// countdown.pause();
/// assert_eq!(countdown.start_label(), "Resume");
/// ```
#[derive(Debug)]
pub struct Model {
    id: i64,
    duration: Option<u64>,
    time_left: u64,
    state: RunState,
    ticker: Option<TickHandle>,
    // Generation of the most recently acquired tick handle.
    tag: u64,

    /// Duration entry field.
    pub entry: entry::Model,
    /// Control bindings.
    pub keymap: KeyMap,
    /// Renders the control line.
    pub help: help::Model,
    /// Readout and caption styles.
    pub styles: Styles,
    /// Whether [`view`](Model::view) includes the control line.
    pub show_help: bool,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// Creates an idle countdown with no duration set.
    pub fn new() -> Self {
        Self {
            id: next_id(),
            duration: None,
            time_left: 0,
            state: RunState::Idle,
            ticker: None,
            tag: 0,
            entry: entry::Model::new(),
            keymap: KeyMap::default(),
            help: help::Model::new(),
            styles: Styles::default(),
            show_help: true,
        }
    }

    /// Sets the entry placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.entry.placeholder = placeholder.into();
        self
    }

    /// Limits how many characters the entry takes.
    pub fn with_char_limit(mut self, limit: usize) -> Self {
        self.entry.char_limit = limit;
        self
    }

    /// Replaces the control bindings.
    ///
    /// The start binding's description follows the run state ("start" or
    /// "resume") unless it is set to something else.
    pub fn with_keymap(mut self, keymap: KeyMap) -> Self {
        self.keymap = keymap;
        self.sync_labels();
        self
    }

    /// Replaces the readout styles.
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Shows or hides the control line.
    pub fn with_show_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    /// Unique id of this countdown; ticks carry it.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The last accepted duration in seconds, if any.
    pub fn duration(&self) -> Option<u64> {
        self.duration
    }

    /// Remaining whole seconds.
    pub fn time_left(&self) -> u64 {
        self.time_left
    }

    /// Current run state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Whether the countdown is ticking.
    pub fn running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Whether the countdown is paused.
    pub fn paused(&self) -> bool {
        self.state == RunState::Paused
    }

    /// Whether a tick handle is currently held.
    pub fn ticking(&self) -> bool {
        self.ticker.is_some()
    }

    /// The held tick handle, if running.
    pub fn tick_handle(&self) -> Option<&TickHandle> {
        self.ticker.as_ref()
    }

    /// Takes `input` as the new duration.
    ///
    /// A positive whole number becomes both the duration and the remaining
    /// time, stops any running countdown and leaves the widget idle.
    /// Anything else changes nothing.
    pub fn set_duration(&mut self, input: &str) -> Result<u64, DurationError> {
        let secs = parse_duration(input)?;
        self.release_ticker();
        self.duration = Some(secs);
        self.time_left = secs;
        self.transition(RunState::Idle);
        Ok(secs)
    }

    /// Runs [`set_duration`](Model::set_duration) with the entry's text.
    pub fn submit(&mut self) -> Result<u64, DurationError> {
        let input = self.entry.value().to_string();
        self.set_duration(&input)
    }

    /// Starts or resumes the countdown.
    ///
    /// Does nothing when no time is left. Returns the command for the first
    /// tick when a new tick handle was acquired.
    pub fn start(&mut self) -> Option<Cmd> {
        if self.time_left == 0 {
            return None;
        }
        self.transition(RunState::Running);
        if self.ticker.is_some() {
            return None;
        }
        self.tag += 1;
        let handle = TickHandle::acquire(self.id, self.tag, TICK_INTERVAL);
        let cmd = handle.schedule();
        self.ticker = Some(handle);
        Some(cmd)
    }

    /// Pauses a running countdown. No effect in any other state.
    pub fn pause(&mut self) {
        if self.state != RunState::Running {
            return;
        }
        self.release_ticker();
        self.transition(RunState::Paused);
    }

    /// Stops the countdown and restores the last set duration (or zero).
    pub fn reset(&mut self) {
        self.release_ticker();
        self.time_left = self.duration.unwrap_or(0);
        self.transition(RunState::Idle);
    }

    // One second passes. Only called for ticks owned by the held handle.
    fn tick(&mut self) -> Option<Cmd> {
        if self.time_left <= 1 {
            self.time_left = 0;
            self.release_ticker();
            self.transition(RunState::Idle);
            log::debug!("countdown {}: finished", self.id);
            return None;
        }
        self.time_left -= 1;
        self.ticker.as_ref().map(TickHandle::schedule)
    }

    fn release_ticker(&mut self) {
        self.ticker = None;
    }

    fn transition(&mut self, next: RunState) {
        if self.state != next {
            log::debug!(
                "countdown {}: {:?} -> {:?} ({}s left)",
                self.id,
                self.state,
                next,
                self.time_left
            );
        }
        self.state = next;
        self.sync_labels();
    }

    fn sync_labels(&mut self) {
        let label = self.start_label();
        self.keymap.set_start_label(label);
    }

    /// Label for the start control: "Resume" while paused, else "Start".
    pub fn start_label(&self) -> &'static str {
        if self.state == RunState::Paused {
            "Resume"
        } else {
            "Start"
        }
    }

    /// Handles ticks and key presses.
    ///
    /// Ticks from other countdowns or from a released handle are ignored.
    /// Key presses edit the entry while focused; the control bindings work
    /// regardless of focus. Invalid entries on Set are dropped silently.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(tick) = msg.downcast_ref::<TickMsg>() {
            let owned = self.ticker.as_ref().is_some_and(|h| h.owns(tick));
            if !owned {
                return None;
            }
            return self.tick();
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.entry.handle_key(key_msg) {
                return None;
            }
            if self.keymap.set.matches(key_msg) {
                let _ = self.submit();
                return None;
            }
            if self.keymap.start.matches(key_msg) {
                return self.start();
            }
            if self.keymap.pause.matches(key_msg) {
                self.pause();
                return None;
            }
            if self.keymap.reset.matches(key_msg) {
                self.reset();
                return None;
            }
        }

        None
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.entry.focus();
        None
    }

    fn blur(&mut self) {
        self.entry.blur();
    }

    fn focused(&self) -> bool {
        self.entry.focused()
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = Model::new();
        model.entry.focus();
        (model, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
