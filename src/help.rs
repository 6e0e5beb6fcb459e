//! Help line for key bindings.
//!
//! The countdown renders its controls (Set, Start/Resume, Pause, Restart)
//! through this module. Any type implementing [`KeyMap`] can be rendered,
//! either as a single line ([`Model::short_help_view`]) or as columns
//! ([`Model::full_help_view`]).
//!
//! ```rust
//! use bubbletea_countdown::help::{KeyMap, Model};
//! use bubbletea_countdown::key::{Binding, KeyPress};
//! use crossterm::event::KeyCode;
//!
//! struct Controls {
//!     pause: Binding,
//! }
//!
//! impl KeyMap for Controls {
//!     fn short_help(&self) -> Vec<&Binding> {
//!         vec![&self.pause]
//!     }
//!     fn full_help(&self) -> Vec<Vec<&Binding>> {
//!         vec![vec![&self.pause]]
//!     }
//! }
//!
//! let controls = Controls {
//!     pause: Binding::new(vec![KeyPress::from(KeyCode::Char('p'))]).with_help("p", "pause"),
//! };
//! let line = Model::new().view(&controls);
//! assert!(line.contains("pause"));
//! ```

use crate::key;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Key bindings that can be displayed by the help view.
pub trait KeyMap {
    /// Bindings for the compact, single-line view.
    fn short_help(&self) -> Vec<&key::Binding>;
    /// Bindings grouped into columns for the expanded view.
    fn full_help(&self) -> Vec<Vec<&key::Binding>>;
}

/// Styles for the help view.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Truncation marker.
    pub ellipsis: Style,
    /// Key text in the short view.
    pub short_key: Style,
    /// Description text in the short view.
    pub short_desc: Style,
    /// Separator between short view items.
    pub short_separator: Style,
    /// Key text in the full view.
    pub full_key: Style,
    /// Description text in the full view.
    pub full_desc: Style,
    /// Separator between full view columns.
    pub full_separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        use lipgloss::AdaptiveColor;

        let key_style = Style::new().foreground(AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        });
        let desc_style = Style::new().foreground(AdaptiveColor {
            Light: "#B2B2B2",
            Dark: "#4A4A4A",
        });
        let sep_style = Style::new().foreground(AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        });

        Self {
            ellipsis: sep_style.clone(),
            short_key: key_style.clone(),
            short_desc: desc_style.clone(),
            short_separator: sep_style.clone(),
            full_key: key_style,
            full_desc: desc_style,
            full_separator: sep_style,
        }
    }
}

/// Help view state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Render the full, column-based view instead of the short line.
    pub show_all: bool,
    /// Maximum rendered width. Zero means unlimited.
    pub width: usize,
    /// Separator between items in the short view.
    pub short_separator: String,
    /// Separator between columns in the full view.
    pub full_separator: String,
    /// Appended when the view is truncated to `width`.
    pub ellipsis: String,
    /// Colors for keys, descriptions and separators.
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            show_all: false,
            width: 0,
            short_separator: " • ".to_string(),
            full_separator: "    ".to_string(),
            ellipsis: "…".to_string(),
            styles: Styles::default(),
        }
    }
}

impl Model {
    /// Creates a help view with default styles and unlimited width.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Renders `keymap` in the current mode.
    pub fn view<K: KeyMap>(&self, keymap: &K) -> String {
        if self.show_all {
            self.full_help_view(keymap.full_help())
        } else {
            self.short_help_view(keymap.short_help())
        }
    }

    /// Renders bindings on one line, skipping disabled ones and truncating
    /// with the ellipsis when `width` would be exceeded.
    pub fn short_help_view(&self, bindings: Vec<&key::Binding>) -> String {
        let separator = self
            .styles
            .short_separator
            .clone()
            .inline(true)
            .render(&self.short_separator);

        let mut out = String::new();
        let mut total_width = 0;

        for binding in bindings.into_iter().filter(|b| b.enabled()) {
            let sep = if total_width > 0 { separator.as_str() } else { "" };
            let help = binding.help();
            let item = format!(
                "{}{} {}",
                sep,
                self.styles.short_key.clone().inline(true).render(&help.key),
                self.styles.short_desc.clone().inline(true).render(&help.desc)
            );
            let item_width = lipgloss::width_visible(&item);

            if let Some(tail) = self.truncation_tail(total_width, item_width) {
                out.push_str(&tail);
                break;
            }

            total_width += item_width;
            out.push_str(&item);
        }
        out
    }

    /// Renders each group as a column of `key desc` rows.
    pub fn full_help_view(&self, groups: Vec<Vec<&key::Binding>>) -> String {
        let separator = self
            .styles
            .full_separator
            .clone()
            .inline(true)
            .render(&self.full_separator);

        let mut columns: Vec<String> = Vec::new();
        let mut total_width = 0;

        for group in groups.iter().filter(|g| should_render_column(g)) {
            let rows: Vec<String> = group
                .iter()
                .filter(|b| b.enabled())
                .map(|b| {
                    let help = b.help();
                    format!(
                        "{} {}",
                        self.styles.full_key.clone().inline(true).render(&help.key),
                        self.styles.full_desc.clone().inline(true).render(&help.desc)
                    )
                })
                .collect();
            let column = rows.join("\n");
            let column_width = lipgloss::width_visible(&column);

            if let Some(tail) = self.truncation_tail(total_width, column_width) {
                if !tail.is_empty() {
                    columns.push(tail);
                }
                break;
            }

            total_width += column_width;
            columns.push(column);
        }

        let mut parts: Vec<&str> = Vec::new();
        for (i, column) in columns.iter().enumerate() {
            if i > 0 {
                parts.push(separator.as_str());
            }
            parts.push(column.as_str());
        }

        lipgloss::join_horizontal(lipgloss::TOP, &parts)
    }

    // Returns Some(tail) when an item of `item_width` no longer fits. The
    // tail is the ellipsis if that still fits, otherwise empty.
    fn truncation_tail(&self, total_width: usize, item_width: usize) -> Option<String> {
        if self.width == 0 || total_width + item_width <= self.width {
            return None;
        }
        let tail = format!(
            " {}",
            self.styles
                .ellipsis
                .clone()
                .inline(true)
                .render(&self.ellipsis)
        );
        if total_width + lipgloss::width_visible(&tail) < self.width {
            Some(tail)
        } else {
            Some(String::new())
        }
    }
}

/// Whether any binding in the column is enabled.
pub fn should_render_column(bindings: &[&key::Binding]) -> bool {
    bindings.iter().any(|b| b.enabled())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{Binding, KeyPress};
    use crossterm::event::KeyCode;

    struct Controls {
        set: Binding,
        start: Binding,
        hidden: Binding,
    }

    impl Controls {
        fn new() -> Self {
            let mut hidden =
                Binding::new(vec![KeyPress::from(KeyCode::Char('x'))]).with_help("x", "hidden");
            hidden.set_enabled(false);
            Self {
                set: Binding::new(vec![KeyPress::from(KeyCode::Enter)]).with_help("enter", "set"),
                start: Binding::new(vec![KeyPress::from(KeyCode::Char('s'))])
                    .with_help("s", "start"),
                hidden,
            }
        }
    }

    impl KeyMap for Controls {
        fn short_help(&self) -> Vec<&Binding> {
            vec![&self.set, &self.start, &self.hidden]
        }

        fn full_help(&self) -> Vec<Vec<&Binding>> {
            vec![vec![&self.set], vec![&self.start], vec![&self.hidden]]
        }
    }

    #[test]
    fn test_short_view_lists_enabled_bindings() {
        let view = lipgloss::strip_ansi(&Model::new().view(&Controls::new()));

        assert!(view.contains("enter set"));
        assert!(view.contains("s start"));
        assert!(view.contains(" • "));
        assert!(!view.contains("hidden"));
    }

    #[test]
    fn test_full_view_renders_columns() {
        let mut help = Model::new();
        help.show_all = true;
        let view = lipgloss::strip_ansi(&help.view(&Controls::new()));

        assert!(view.contains("enter set"));
        assert!(view.contains("s start"));
        assert!(!view.contains("hidden"));
    }

    #[test]
    fn test_short_view_truncates_to_width() {
        let help = Model::new().with_width(12);
        let view = lipgloss::strip_ansi(&help.view(&Controls::new()));

        assert!(view.contains("enter set"));
        assert!(!view.contains("start"));
    }

    #[test]
    fn test_empty_keymap_renders_nothing() {
        let help = Model::new();
        assert_eq!(help.short_help_view(vec![]), "");
    }

    #[test]
    fn test_should_render_column() {
        let controls = Controls::new();
        assert!(should_render_column(&[&controls.set]));
        assert!(!should_render_column(&[&controls.hidden]));
    }
}
