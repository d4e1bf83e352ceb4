//! Grid styles.

use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Styles used when painting the grid.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Header labels.
    pub header: Style,
    /// Column separators and the rules above and below the body.
    pub border: Style,
    /// The remove control.
    pub remove: Style,
    /// The remove control while focused.
    pub remove_focused: Style,
    /// The add control.
    pub add: Style,
    /// The add control while focused.
    pub add_focused: Style,
}

impl Default for Styles {
    fn default() -> Self {
        use lipgloss::AdaptiveColor;

        let border = AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        };
        let danger = AdaptiveColor {
            Light: "#D70000",
            Dark: "#FF5F5F",
        };
        let accent = AdaptiveColor {
            Light: "#5A56E0",
            Dark: "#7571F9",
        };

        Self {
            header: Style::new().bold(true),
            border: Style::new().foreground(border),
            remove: Style::new().foreground(danger.clone()),
            remove_focused: Style::new().foreground(danger).bold(true).reverse(true),
            add: Style::new().foreground(accent.clone()),
            add_focused: Style::new().foreground(accent).bold(true).reverse(true),
        }
    }
}
