//! Countdown timer component for Bubble Tea applications.
//!
//! The user types a number of seconds, sets it, then starts, pauses, resumes
//! and restarts a countdown that is shown as `MM | SS`.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_countdown::countdown::{Model, RunState};
//!
//! let mut countdown = Model::new();
//!
//! // Invalid input is ignored.
//! assert!(countdown.set_duration("-3").is_err());
//! assert_eq!(countdown.time_left(), 0);
//!
//! countdown.set_duration("90").unwrap();
//! assert_eq!(countdown.display(), "01 | 30");
//!
//! // Start hands back the command that delivers the first tick.
//! let cmd = countdown.start();
//! assert!(cmd.is_some());
//! assert_eq!(countdown.state(), RunState::Running);
//!
//! countdown.reset();
//! assert_eq!(countdown.state(), RunState::Idle);
//! assert_eq!(countdown.time_left(), 90);
//! ```
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//! use bubbletea_countdown::countdown::Model as Countdown;
//! use bubbletea_countdown::Component;
//!
//! struct App {
//!     countdown: Countdown,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut countdown = Countdown::new();
//!         countdown.focus();
//!         (Self { countdown }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.countdown.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.countdown.view()
//!     }
//! }
//! ```
//!
//! # Keys
//!
//! | Key | Action |
//! |-----|--------|
//! | digits, `backspace` | edit the duration (while focused) |
//! | `enter` | set |
//! | `s` / `space` | start, or resume when paused |
//! | `p` | pause |
//! | `r` | restart |

pub mod entry;
pub mod error;
pub mod keymap;
pub mod model;
pub mod ticker;
pub mod view;


pub use error::{parse_duration, DurationError};
pub use keymap::KeyMap;
pub use model::{Model, RunState};
pub use ticker::{TickHandle, TickMsg, TICK_INTERVAL};
pub use view::{format_time, Styles};

/// Creates an idle countdown with no duration set.
pub fn new() -> Model {
    Model::new()
}
