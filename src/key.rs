//! Type-safe key bindings for the countdown components.
//!
//! A [`Binding`] groups one or more [`KeyPress`] values under a single action
//! and carries the short help text rendered by the [`help`](crate::help)
//! module. Components keep their bindings in a keymap struct and test incoming
//! `KeyMsg` values with [`Binding::matches`].
//!
//! ```rust
//! use bubbletea_countdown::key::{Binding, KeyPress};
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let pause = Binding::new(vec![KeyPress::from(KeyCode::Char('p'))]).with_help("p", "pause");
//!
//! let msg = KeyMsg {
//!     key: KeyCode::Char('p'),
//!     modifiers: KeyModifiers::NONE,
//! };
//! assert!(pause.matches(&msg));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key combination: a key code plus its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key itself.
    pub code: KeyCode,
    /// Modifiers that must be held.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

impl KeyPress {
    /// Reports whether `msg` is this key combination.
    ///
    /// Shift is ignored for character keys because terminals already fold it
    /// into the reported character.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        match self.code {
            KeyCode::Char(_) => {
                self.modifiers.difference(KeyModifiers::SHIFT)
                    == msg.modifiers.difference(KeyModifiers::SHIFT)
            }
            _ => self.modifiers == msg.modifiers,
        }
    }
}

/// Help text shown for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// How the key is displayed, e.g. `"enter"`.
    pub key: String,
    /// What the key does, e.g. `"set"`.
    pub desc: String,
}

/// A named action bound to one or more key presses.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates an enabled binding with no help text.
    pub fn new(keys: Vec<KeyPress>) -> Self {
        Self {
            keys,
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text, consuming and returning the binding.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.set_help(key, desc);
        self
    }

    /// Sets the help text in place.
    pub fn set_help(&mut self, key: impl Into<String>, desc: impl Into<String>) {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
    }

    /// Returns the help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Returns the key presses this binding responds to.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Enables or disables the binding. Disabled bindings never match and
    /// are hidden from help.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether the binding is enabled and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Reports whether `msg` triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// Reports whether `msg` triggers any of `bindings`.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_binding_matches_any_key() {
        let binding = Binding::new(vec![
            KeyPress::from(KeyCode::Char('s')),
            KeyPress::from(KeyCode::Char(' ')),
        ]);

        assert!(binding.matches(&key(KeyCode::Char('s'), KeyModifiers::NONE)));
        assert!(binding.matches(&key(KeyCode::Char(' '), KeyModifiers::NONE)));
        assert!(!binding.matches(&key(KeyCode::Char('x'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_modifiers_must_match() {
        let binding = Binding::new(vec![KeyPress::from((
            KeyCode::Char('r'),
            KeyModifiers::CONTROL,
        ))]);

        assert!(binding.matches(&key(KeyCode::Char('r'), KeyModifiers::CONTROL)));
        assert!(!binding.matches(&key(KeyCode::Char('r'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_shift_ignored_for_chars() {
        let binding = Binding::new(vec![KeyPress::from(KeyCode::Char('S'))]);
        assert!(binding.matches(&key(KeyCode::Char('S'), KeyModifiers::SHIFT)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut binding = Binding::new(vec![KeyPress::from(KeyCode::Enter)]).with_help("enter", "set");
        binding.set_enabled(false);

        assert!(!binding.enabled());
        assert!(!binding.matches(&key(KeyCode::Enter, KeyModifiers::NONE)));
        assert_eq!(binding.help().desc, "set");
    }

    #[test]
    fn test_empty_binding_is_disabled() {
        let binding = Binding::new(vec![]);
        assert!(!binding.enabled());
    }

    #[test]
    fn test_matches_any_of() {
        let a = Binding::new(vec![KeyPress::from(KeyCode::Char('a'))]);
        let b = Binding::new(vec![KeyPress::from(KeyCode::Char('b'))]);
        let msg = key(KeyCode::Char('b'), KeyModifiers::NONE);

        assert!(matches(&msg, &[&a, &b]));
        assert!(!matches(&msg, &[&a]));
    }
}
