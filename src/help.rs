//! Key binding help line rendered under the grid.
//!
//! The help model renders any [`KeyMap`] either as a single line of
//! `key description` pairs or as columns of related bindings. Disabled
//! bindings are skipped, and output wider than [`Model::width`] is cut off
//! with an ellipsis.
//!
//! ```rust
//! use bubbletea_datagrid::help::Model as Help;
//! use bubbletea_datagrid::grid::GridKeyMap;
//!
//! let keys = GridKeyMap::default();
//! let help = Help::new().with_width(60);
//! assert!(!help.view(&keys).is_empty());
//! ```

use crate::key::{Binding, KeyMap};
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Styles for the help view.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Ellipsis shown when the help is truncated.
    pub ellipsis: Style,
    /// Key labels in the short view.
    pub short_key: Style,
    /// Descriptions in the short view.
    pub short_desc: Style,
    /// Separator between short view items.
    pub short_separator: Style,
    /// Key labels in the full view.
    pub full_key: Style,
    /// Descriptions in the full view.
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
    /// Show the multi-column view instead of the single line.
    pub show_all: bool,
    /// Maximum width in columns; 0 disables truncation.
    pub width: usize,
    /// Separator between short view items.
    pub short_separator: String,
    /// Separator between full view columns.
    pub full_separator: String,
    /// Marker appended when output is truncated.
    pub ellipsis: String,
    /// Styles.
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
    /// Creates a help model in short mode without a width limit.
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

    /// Renders bindings on a single line.
    pub fn short_help_view(&self, bindings: Vec<&Binding>) -> String {
        let separator = self
            .styles
            .short_separator
            .clone()
            .inline(true)
            .render(&self.short_separator);

        let mut out = String::new();
        let mut total_width = 0;
        for kb in bindings.iter().filter(|b| b.enabled()) {
            let sep = if total_width > 0 { separator.as_str() } else { "" };
            let help = kb.help();
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

    /// Renders groups of bindings as side-by-side columns.
    pub fn full_help_view(&self, groups: Vec<Vec<&Binding>>) -> String {
        let separator = self
            .styles
            .full_separator
            .clone()
            .inline(true)
            .render(&self.full_separator);

        let mut columns: Vec<String> = Vec::new();
        let mut total_width = 0;
        for group in groups.iter().filter(|g| g.iter().any(|b| b.enabled())) {
            let col = group
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
                .collect::<Vec<_>>()
                .join("\n");

            let sep_width = if columns.is_empty() {
                0
            } else {
                lipgloss::width_visible(&separator)
            };
            let widest = col.lines().map(lipgloss::width_visible).max().unwrap_or(0);
            let col_width = widest + sep_width;
            if let Some(tail) = self.truncation_tail(total_width, col_width) {
                if !tail.is_empty() {
                    columns.push(tail);
                }
                break;
            }
            total_width += col_width;
            columns.push(col);
        }

        let mut parts: Vec<&str> = Vec::new();
        for (i, col) in columns.iter().enumerate() {
            if i > 0 {
                parts.push(separator.as_str());
            }
            parts.push(col.as_str());
        }
        lipgloss::join_horizontal(lipgloss::TOP, &parts)
    }

    fn truncation_tail(&self, total_width: usize, item_width: usize) -> Option<String> {
        if self.width == 0 || total_width + item_width <= self.width {
            return None;
        }
        let tail = format!(
            " {}",
            self.styles.ellipsis.clone().inline(true).render(&self.ellipsis)
        );
        if total_width + lipgloss::width_visible(&tail) < self.width {
            Some(tail)
        } else {
            Some(String::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    struct Keys {
        a: Binding,
        b: Binding,
        off: Binding,
    }

    impl KeyMap for Keys {
        fn short_help(&self) -> Vec<&Binding> {
            vec![&self.a, &self.off, &self.b]
        }
        fn full_help(&self) -> Vec<Vec<&Binding>> {
            vec![vec![&self.a], vec![&self.off], vec![&self.b]]
        }
    }

    fn keys() -> Keys {
        let mut off = Binding::new(vec![KeyCode::Char('z')]).with_help("z", "hidden");
        off.set_enabled(false);
        Keys {
            a: Binding::new(vec![KeyCode::Tab]).with_help("tab", "next"),
            b: Binding::new(vec![KeyCode::Enter]).with_help("enter", "activate"),
            off,
        }
    }

    #[test]
    fn test_short_view_skips_disabled() {
        let view = lipgloss::strip_ansi(&Model::new().view(&keys()));
        assert_eq!(view, "tab next • enter activate");
    }

    #[test]
    fn test_short_view_truncates() {
        let help = Model::new().with_width(12);
        let view = lipgloss::strip_ansi(&help.view(&keys()));
        assert!(view.starts_with("tab next"));
        assert!(!view.contains("enter"));
        assert!(view.ends_with('…'));
    }

    #[test]
    fn test_full_view_measures_widest_line() {
        use crate::grid::GridKeyMap;

        let mut help = Model::new().with_width(80);
        help.show_all = true;
        let view = lipgloss::strip_ansi(&help.view(&GridKeyMap::default()));
        assert!(view.contains("add row"));
        assert!(view.contains("remove row"));
        assert!(!view.contains('…'));
        assert!(view.lines().all(|l| lipgloss::width_visible(l) <= 80));
    }

    #[test]
    fn test_full_view_has_columns() {
        let mut help = Model::new();
        help.show_all = true;
        let view = lipgloss::strip_ansi(&help.view(&keys()));
        assert!(view.contains("tab next"));
        assert!(view.contains("enter activate"));
        assert!(!view.contains("hidden"));
    }
}
