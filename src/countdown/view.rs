//! Rendering for the countdown.

use super::model::Model;
use lipgloss_extras::prelude::*;

/// Formats whole seconds as `MM | SS`.
///
/// Minutes are not wrapped into hours, so long countdowns show three or more
/// minute digits.
///
/// ```rust
/// use bubbletea_countdown::countdown::format_time;
///
/// assert_eq!(format_time(65), "01 | 05");
/// assert_eq!(format_time(0), "00 | 00");
/// assert_eq!(format_time(6000), "100 | 00");
/// ```
pub fn format_time(secs: u64) -> String {
    format!("{:02} | {:02}", secs / 60, secs % 60)
}

/// Styles for the countdown view.
#[derive(Debug, Clone)]
pub struct Styles {
    /// The heading above the entry.
    pub title: Style,
    /// The `MM | SS` readout.
    pub display: Style,
    /// The `min  sec` line under the readout.
    pub caption: Style,
    /// The readout while paused.
    pub paused: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            title: Style::new().bold(true),
            display: Style::new().bold(true).foreground(Color::from("212")),
            caption: Style::new().foreground(Color::from("243")),
            paused: Style::new().foreground(Color::from("247")),
        }
    }
}

impl Model {
    /// The remaining time as `MM | SS`.
    pub fn display(&self) -> String {
        format_time(self.time_left())
    }

    /// Renders the entry, the readout, its caption and the control line.
    pub fn view(&self) -> String {
        let readout_style = if self.paused() {
            &self.styles.paused
        } else {
            &self.styles.display
        };
        let readout = self.display();
        // "min" sits over the minutes, "sec" is right-aligned under the seconds.
        let sec_pad = readout.len().saturating_sub("min".len() + "sec".len());
        let caption = format!("min{}sec", " ".repeat(sec_pad));

        let mut lines = vec![
            self.styles
                .title
                .clone()
                .inline(true)
                .render("Enter time in seconds"),
            self.entry.view(),
            String::new(),
            readout_style.clone().inline(true).render(&readout),
            self.styles.caption.clone().inline(true).render(&caption),
        ];

        if self.show_help {
            lines.push(String::new());
            lines.push(self.help.view(&self.keymap));
        }

        lines.join("\n")
    }
}
