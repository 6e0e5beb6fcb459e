#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-countdown/")]

//! # bubbletea-countdown
//!
//! A countdown timer component for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications.
//!
//! ## Overview
//!
//! The user types a number of seconds, sets it, and then starts, pauses,
//! resumes or restarts a countdown rendered as `MM | SS`. The component
//! follows the Elm Architecture like every bubbletea-rs model: `update()`
//! consumes messages and may return a command, `view()` renders a string.
//!
//! The one-second tick is a bubbletea-rs `tick` command owned by the
//! countdown. It exists only while the countdown is running and is dropped on
//! pause, restart, completion, a new Set, and when the component is dropped.
//!
//! ## Components
//!
//! - [`countdown`]: the countdown widget itself
//! - [`key`]: key bindings used by the controls
//! - [`help`]: renders the control line from key bindings
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_countdown::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     countdown: Countdown,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut countdown = countdown_new();
//!         countdown.focus();
//!         (Self { countdown }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.countdown.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("{}\n\nctrl+c to quit", self.countdown.view())
//!     }
//! }
//! ```
//!
//! ## Logging
//!
//! State transitions are reported through the [`log`](https://docs.rs/log)
//! facade at `debug` level and tick handle lifetimes at `trace` level.
//! Install any logger in the host application to see them.

pub mod countdown;
pub mod help;
pub mod key;

use bubbletea_rs::Cmd;

/// Components that can receive keyboard focus.
///
/// A focused countdown routes typed digits into its duration entry. The
/// control bindings work either way.
///
/// ```rust
/// use bubbletea_countdown::prelude::*;
///
/// let mut countdown = countdown_new();
/// countdown.focus();
/// assert!(countdown.focused());
/// countdown.blur();
/// assert!(!countdown.focused());
/// ```
pub trait Component {
    /// Gives the component focus. May return a command to run.
    fn focus(&mut self) -> Option<Cmd>;

    /// Takes focus away.
    fn blur(&mut self);

    /// Whether the component has focus.
    fn focused(&self) -> bool;
}

pub use countdown::{
    format_time, new as countdown_new, parse_duration, DurationError, KeyMap as CountdownKeyMap,
    Model as Countdown, RunState, Styles as CountdownStyles, TickHandle, TickMsg as CountdownTickMsg,
};
pub use help::Model as HelpModel;
pub use key::{matches, Binding, Help as KeyHelp, KeyPress};

/// Common imports.
pub mod prelude {
    pub use crate::countdown::{
        format_time, new as countdown_new, parse_duration, DurationError,
        KeyMap as CountdownKeyMap, Model as Countdown, RunState, Styles as CountdownStyles,
        TickMsg as CountdownTickMsg,
    };
    pub use crate::help::{KeyMap as HelpKeyMap, Model as HelpModel};
    pub use crate::key::{matches, Binding, Help as KeyHelp, KeyPress};
    pub use crate::Component;
}
