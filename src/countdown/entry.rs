//! Numeric entry field for the countdown duration.
//!
//! The entry only collects text; it never changes the countdown by itself.
//! The countdown reads [`Model::value`] when Set is pressed.

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;

/// Characters a number field lets through.
fn is_numeric_char(ch: char) -> bool {
    ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | 'e' | 'E')
}

/// Duration entry state.
#[derive(Debug, Clone)]
pub struct Model {
    value: String,
    focus: bool,
    /// Shown dimmed while the entry is empty.
    pub placeholder: String,
    /// Maximum number of characters. Zero means unlimited.
    pub char_limit: usize,
    /// Printed before the value.
    pub prompt: String,
    /// Style of the prompt.
    pub prompt_style: Style,
    /// Style of the entered text.
    pub text_style: Style,
    /// Style of the placeholder.
    pub placeholder_style: Style,
    /// Drawn after the value while focused.
    pub cursor_style: Style,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            value: String::new(),
            focus: false,
            placeholder: "seconds".to_string(),
            char_limit: 10,
            prompt: "> ".to_string(),
            prompt_style: Style::new(),
            text_style: Style::new(),
            placeholder_style: Style::new().foreground(Color::from("240")),
            cursor_style: Style::new().reverse(true),
        }
    }
}

impl Model {
    /// Creates an empty, blurred entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current raw text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the text, keeping only characters a number field accepts and
    /// honoring the character limit.
    pub fn set_value(&mut self, value: &str) {
        self.value.clear();
        for ch in value.chars() {
            self.insert(ch);
        }
    }

    /// Empties the entry.
    pub fn reset(&mut self) {
        self.value.clear();
    }

    /// Whether the entry accepts typing.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Lets the entry accept typing.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Stops the entry from accepting typing.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    fn insert(&mut self, ch: char) -> bool {
        if !is_numeric_char(ch) {
            return false;
        }
        if self.char_limit > 0 && self.value.chars().count() >= self.char_limit {
            return false;
        }
        self.value.push(ch);
        true
    }

    /// Applies an editing key. Returns `true` when the key was consumed.
    ///
    /// Blurred entries consume nothing. Keys that are not part of a number
    /// are left for the caller so they can act as bindings. Digits, `+`, `-`,
    /// `.`, `e` and `E` are always taken while focused, so bindings on those
    /// keys only fire when the entry is blurred.
    pub fn handle_key(&mut self, msg: &KeyMsg) -> bool {
        if !self.focus {
            return false;
        }
        if msg.modifiers.contains(KeyModifiers::CONTROL)
            || msg.modifiers.contains(KeyModifiers::ALT)
        {
            if msg.key == KeyCode::Char('u') && msg.modifiers.contains(KeyModifiers::CONTROL) {
                self.reset();
                return true;
            }
            return false;
        }
        match msg.key {
            KeyCode::Char(ch) if is_numeric_char(ch) => {
                self.insert(ch);
                true
            }
            KeyCode::Backspace => {
                self.value.pop();
                true
            }
            _ => false,
        }
    }

    /// Renders the prompt and the value, or the placeholder when empty.
    pub fn view(&self) -> String {
        let prompt = self.prompt_style.clone().inline(true).render(&self.prompt);
        let body = if self.value.is_empty() {
            self.placeholder_style
                .clone()
                .inline(true)
                .render(&self.placeholder)
        } else {
            self.text_style.clone().inline(true).render(&self.value)
        };
        if self.focus {
            let cursor = self.cursor_style.clone().inline(true).render(" ");
            format!("{}{}{}", prompt, body, cursor)
        } else {
            format!("{}{}", prompt, body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lipgloss_extras::lipgloss;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_new_is_empty_and_blurred() {
        let entry = Model::new();
        assert_eq!(entry.value(), "");
        assert!(!entry.focused());
    }

    #[test]
    fn test_blurred_entry_ignores_keys() {
        let mut entry = Model::new();
        assert!(!entry.handle_key(&key(KeyCode::Char('5'))));
        assert_eq!(entry.value(), "");
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut entry = Model::new();
        entry.focus();

        for ch in ['6', '5', '0'] {
            assert!(entry.handle_key(&key(KeyCode::Char(ch))));
        }
        assert_eq!(entry.value(), "650");

        assert!(entry.handle_key(&key(KeyCode::Backspace)));
        assert_eq!(entry.value(), "65");
    }

    #[test]
    fn test_letters_are_left_for_bindings() {
        let mut entry = Model::new();
        entry.focus();

        assert!(!entry.handle_key(&key(KeyCode::Char('s'))));
        assert!(!entry.handle_key(&key(KeyCode::Enter)));
        assert_eq!(entry.value(), "");
    }

    #[test]
    fn test_sign_and_fraction_are_typeable() {
        let mut entry = Model::new();
        entry.focus();
        for ch in "-2.5".chars() {
            entry.handle_key(&key(KeyCode::Char(ch)));
        }
        assert_eq!(entry.value(), "-2.5");
    }

    #[test]
    fn test_exponent_keys_are_consumed_while_focused() {
        let mut entry = Model::new();
        entry.focus();
        assert!(entry.handle_key(&key(KeyCode::Char('e'))));
        assert!(entry.handle_key(&key(KeyCode::Char('E'))));
        assert_eq!(entry.value(), "eE");

        entry.blur();
        assert!(!entry.handle_key(&key(KeyCode::Char('e'))));
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut entry = Model::new();
        entry.focus();
        entry.set_value("120");

        let consumed = entry.handle_key(&KeyMsg {
            key: KeyCode::Char('u'),
            modifiers: KeyModifiers::CONTROL,
        });
        assert!(consumed);
        assert_eq!(entry.value(), "");
    }

    #[test]
    fn test_set_value_filters_and_limits() {
        let mut entry = Model::new();
        entry.char_limit = 3;
        entry.set_value("1a2b34");
        assert_eq!(entry.value(), "123");
    }

    #[test]
    fn test_view_shows_placeholder_when_empty() {
        let mut entry = Model::new();
        assert_eq!(lipgloss::strip_ansi(&entry.view()), "> seconds");

        entry.set_value("42");
        assert_eq!(lipgloss::strip_ansi(&entry.view()), "> 42");
    }
}
