//! Key bindings for moving around the grid and changing its rows.
//!
//! - **Navigation**: `tab`/`shift+tab` (next/previous element), `↑`/`↓`
//!   (same column, adjacent row)
//! - **Editing**: `enter` commits a cell and moves on; `esc` inside a cell
//!   reverts it (see [`crate::input::KeyMap`])
//! - **Rows**: `ctrl+n` appends a row, `ctrl+x` removes the focused row,
//!   `enter`/`space` on a control activates it
//! - **Help**: `f1` toggles the full help
//!
//! ```rust
//! use bubbletea_datagrid::grid::GridKeyMap;
//! use bubbletea_datagrid::key::KeyMap;
//!
//! let keys = GridKeyMap::default();
//! assert_eq!(keys.short_help().len(), 5);
//! ```

use crate::key::{self, Binding};
use crossterm::event::{KeyCode, KeyModifiers};

/// Grid key bindings.
#[derive(Debug, Clone)]
pub struct GridKeyMap {
    /// Focus the next element.
    pub next: Binding,
    /// Focus the previous element.
    pub prev: Binding,
    /// Same column, row above.
    pub up: Binding,
    /// Same column, row below.
    pub down: Binding,
    /// Commit the focused cell and move on.
    pub commit: Binding,
    /// Press the focused remove or add control.
    pub activate: Binding,
    /// Append an empty row.
    pub add_row: Binding,
    /// Remove the focused row.
    pub remove_row: Binding,
    /// Toggle the full help.
    pub toggle_help: Binding,
}

impl Default for GridKeyMap {
    fn default() -> Self {
        Self {
            next: Binding::new(vec![KeyCode::Tab]).with_help("tab", "next"),
            prev: Binding::new(vec![(KeyCode::BackTab, KeyModifiers::SHIFT)])
                .with_help("shift+tab", "prev"),
            up: Binding::new(vec![KeyCode::Up]).with_help("↑", "row up"),
            down: Binding::new(vec![KeyCode::Down]).with_help("↓", "row down"),
            commit: Binding::new(vec![KeyCode::Enter]).with_help("enter", "commit"),
            activate: Binding::new(vec![KeyCode::Enter, KeyCode::Char(' ')])
                .with_help("enter/space", "press"),
            add_row: key::new_binding(vec![
                key::with_keys_str(&["ctrl+n"]),
                key::with_help("ctrl+n", "add row"),
            ]),
            remove_row: key::new_binding(vec![
                key::with_keys_str(&["ctrl+x"]),
                key::with_help("ctrl+x", "remove row"),
            ]),
            toggle_help: Binding::new(vec![KeyCode::F(1)]).with_help("f1", "more"),
        }
    }
}

impl key::KeyMap for GridKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.next,
            &self.add_row,
            &self.remove_row,
            &self.activate,
            &self.toggle_help,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.next, &self.prev, &self.up, &self.down],
            vec![&self.commit, &self.activate],
            vec![&self.add_row, &self.remove_row, &self.toggle_help],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bubbletea_rs::KeyMsg;

    fn press(key: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg { key, modifiers }
    }

    #[test]
    fn test_default_bindings() {
        let k = GridKeyMap::default();
        assert!(k.add_row.matches(&press(KeyCode::Char('n'), KeyModifiers::CONTROL)));
        assert!(!k.add_row.matches(&press(KeyCode::Char('n'), KeyModifiers::NONE)));
        assert!(k.remove_row.matches(&press(KeyCode::Char('x'), KeyModifiers::CONTROL)));
        assert!(k.prev.matches(&press(KeyCode::BackTab, KeyModifiers::SHIFT)));
        assert!(k.prev.matches(&press(KeyCode::BackTab, KeyModifiers::NONE)));
        assert!(k.activate.matches(&press(KeyCode::Char(' '), KeyModifiers::NONE)));
        assert!(!k.commit.matches(&press(KeyCode::Char(' '), KeyModifiers::NONE)));
    }

    #[test]
    fn test_full_help_groups() {
        use crate::key::KeyMap;
        let k = GridKeyMap::default();
        let groups = k.full_help();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[2][0].help().desc, "add row");
    }
}
