//! Key bindings for the countdown controls.

use crate::help;
use crate::key::{Binding, KeyPress};
use crossterm::event::KeyCode;

/// The four countdown controls.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Take the entered duration.
    pub set: Binding,
    /// Start, or resume when paused.
    pub start: Binding,
    /// Pause a running countdown.
    pub pause: Binding,
    /// Go back to the last set duration.
    pub reset: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            set: Binding::new(vec![KeyPress::from(KeyCode::Enter)]).with_help("enter", "set"),
            start: Binding::new(vec![
                KeyPress::from(KeyCode::Char('s')),
                KeyPress::from(KeyCode::Char(' ')),
            ])
            .with_help("s", "start"),
            pause: Binding::new(vec![KeyPress::from(KeyCode::Char('p'))]).with_help("p", "pause"),
            reset: Binding::new(vec![KeyPress::from(KeyCode::Char('r'))])
                .with_help("r", "restart"),
        }
    }
}

impl KeyMap {
    /// Relabels the start binding, keeping its key text.
    ///
    /// A description other than "start" or "resume" was set by the caller
    /// and is left alone.
    pub(crate) fn set_start_label(&mut self, label: &str) {
        let help = self.start.help();
        if help.desc != "start" && help.desc != "resume" {
            return;
        }
        let key = help.key.clone();
        self.start.set_help(key, label.to_lowercase());
    }
}

impl help::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.set, &self.start, &self.pause, &self.reset]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![vec![&self.set], vec![&self.start, &self.pause, &self.reset]]
    }
}
