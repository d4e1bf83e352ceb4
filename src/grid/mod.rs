//! Editable data grid.
//!
//! The grid shows a [`Table`] of three-field rows as three editable text
//! columns plus a remove control per row, with an "Add New +" control in the
//! footer. Cell editors keep a local draft and write it back to the table
//! when they lose focus. Appending a row moves focus into the new row's
//! first cell once the row has been rendered.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_datagrid::grid::{self, Field, Row};
//!
//! let mut grid = grid::new();
//! assert_eq!(grid.rows().len(), 2);
//!
//! let _cmd = grid.append_row();
//! let _ = grid.view();
//! let _cmd = grid.post_render();
//! assert!(grid.focused_target().is_some());
//!
//! grid.update_cell(2, Field::Two, "XX").unwrap();
//! grid.remove_row(0).unwrap();
//! assert_eq!(
//!     grid.rows(),
//!     &[Row::new("one", "two", "three"), Row::new("", "XX", "")][..]
//! );
//! ```
//!
//! # Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_datagrid::grid;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     grid: grid::Model,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut grid = grid::new();
//!         let cmd = grid.focus();
//!         (Self { grid }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.grid.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.grid.view()
//!     }
//! }
//! ```

pub mod columns;
pub mod elements;
pub mod error;
pub mod focus;
pub mod keys;
pub mod nav;
pub mod render;
pub mod store;
pub mod style;

pub use columns::{Column, ColumnKind, COLUMNS, FIRST_EDITABLE_COLUMN};
pub use error::{GridError, Result};
pub use focus::{CellPos, FocusIntent};
pub use keys::GridKeyMap;
pub use nav::Target;
pub use store::{Field, Row, Table};
pub use style::Styles;

use crate::help;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg, WindowSizeMsg};
use elements::{Editors, MountEvent};
use focus::Coordinator;
use render::{GridView, Layout};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, warn};

static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed) + 1
}

const DEFAULT_WIDTH: usize = 80;

/// Delivered after the render that follows an append. Resolves the pending
/// focus transfer of the grid with the matching id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostRenderMsg {
    /// Id of the grid that asked for it.
    pub id: usize,
}

/// The grid component.
#[derive(Debug, Clone)]
pub struct Model {
    /// Styles.
    pub styles: Styles,
    /// Key bindings.
    pub key_map: GridKeyMap,
    /// Help line under the grid.
    pub help: help::Model,

    id: usize,
    table: Table,
    view: GridView,
    editors: Editors,
    coordinator: Coordinator,
    focus: Option<Target>,
    width: usize,
}

/// Creates a grid holding the seed rows.
pub fn new() -> Model {
    Model::new()
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// Creates an unfocused grid holding the seed rows, 80 columns wide.
    pub fn new() -> Self {
        let mut grid = Self {
            styles: Styles::default(),
            key_map: GridKeyMap::default(),
            help: help::Model::new().with_width(DEFAULT_WIDTH),
            id: next_id(),
            table: Table::seed(),
            view: GridView::default(),
            editors: Editors::default(),
            coordinator: Coordinator::new(),
            focus: None,
            width: DEFAULT_WIDTH,
        };
        grid.rerender();
        grid
    }

    /// Replaces the rows.
    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.table = Table::new(rows);
        self.coordinator.cancel();
        self.rerender();
        self
    }

    /// Sets the width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.set_width(width);
        self
    }

    /// Sets the styles.
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Sets the key bindings.
    pub fn with_key_map(mut self, key_map: GridKeyMap) -> Self {
        self.key_map = key_map;
        self
    }

    /// Grid id, carried by its [`PostRenderMsg`].
    pub fn id(&self) -> usize {
        self.id
    }

    /// The current table.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The current rows.
    pub fn rows(&self) -> &[Row] {
        self.table.rows()
    }

    /// The pending focus intent.
    pub fn focus_intent(&self) -> FocusIntent {
        self.coordinator.intent()
    }

    /// The element holding keyboard focus, if any.
    pub fn focused_target(&self) -> Option<Target> {
        self.focus
    }

    /// The editor at `pos`, if one is mounted.
    pub fn cell(&self, pos: CellPos) -> Option<&crate::input::Model> {
        self.editors.get(pos)
    }

    /// Current width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Sets the width and lays the columns out again.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
        self.help.width = width;
        self.rerender();
    }

    /// Appends an empty row and asks for focus to move into it after the
    /// next render.
    ///
    /// Returns the command that delivers the [`PostRenderMsg`]. Callers that
    /// drive the grid without a program call [`Model::post_render`] after
    /// rendering instead.
    pub fn append_row(&mut self) -> Cmd {
        self.table = self.table.append_row();
        debug!(rows = self.table.len(), "row appended");
        self.coordinator.request();
        self.rerender();
        let id = self.id;
        Box::pin(async move { Some(Box::new(PostRenderMsg { id }) as Msg) })
    }

    /// Sets `field` of row `index`. Cancels a pending focus transfer.
    ///
    /// # Errors
    ///
    /// [`GridError::RowOutOfRange`] if `index` is not a row; the table and
    /// the focus intent are left as they were.
    pub fn update_cell(&mut self, index: usize, field: Field, value: impl Into<String>) -> Result<()> {
        self.table = self
            .table
            .update_cell(index, field, value)
            .inspect_err(|err| warn!(%err, "update_cell rejected"))?;
        debug!(row = index, %field, "cell updated");
        self.coordinator.cancel();
        self.rerender();
        Ok(())
    }

    /// Removes row `index`. Cancels a pending focus transfer.
    ///
    /// # Errors
    ///
    /// [`GridError::RowOutOfRange`] if `index` is not a row; the table and
    /// the focus intent are left as they were.
    pub fn remove_row(&mut self, index: usize) -> Result<()> {
        self.table = self
            .table
            .remove_row(index)
            .inspect_err(|err| warn!(%err, "remove_row rejected"))?;
        debug!(row = index, rows = self.table.len(), "row removed");
        self.coordinator.cancel();
        self.rerender();
        Ok(())
    }

    /// Resolves a pending focus transfer after a render.
    ///
    /// Focuses the first editable cell of the last row if an append is
    /// pending and its editor is mounted, then returns to idle. Does nothing
    /// when idle.
    pub fn post_render(&mut self) -> Option<Cmd> {
        let id = self.coordinator.after_render(self.table.len())?;
        let Some(pos) = self.editors.find(id) else {
            debug!(id = id.0, "focus target vanished before transfer");
            return None;
        };
        debug!(row = pos.row, col = pos.col, "focus moved to appended row");
        self.set_focus(Some(Target::Cell(pos)))
    }

    fn rerender(&mut self) {
        self.view = render::derive(&self.table, &COLUMNS);
        let layout = Layout::new(self.width, &COLUMNS);
        for event in self.editors.reconcile(&self.view, &layout) {
            match event {
                MountEvent::Mounted(pos, id) => self.coordinator.mounted(pos, id),
                MountEvent::Unmounted(pos) => self.coordinator.unmounted(pos),
            }
        }
        self.clamp_focus();
    }

    fn clamp_focus(&mut self) {
        let len = self.table.len();
        match self.focus {
            Some(target) if !target.exists(len) => {
                self.focus = match target {
                    Target::Remove(_) if len > 0 => Some(Target::Remove(len - 1)),
                    _ => Some(Target::Add),
                };
            }
            _ => {}
        }
    }

    /// Blurs the focused editor and writes its draft back to the table.
    fn leave_cell(&mut self) {
        let Some(Target::Cell(pos)) = self.focus else {
            return;
        };
        let Some(editor) = self.editors.get_mut(pos) else {
            return;
        };
        editor.blur();
        let value = editor.commit();
        let Some(field) = COLUMNS.get(pos.col).and_then(Column::field) else {
            return;
        };
        if let Err(err) = self.update_cell(pos.row, field, value) {
            debug!(%err, "commit dropped");
        }
    }

    fn set_focus(&mut self, target: Option<Target>) -> Option<Cmd> {
        if self.focus == target {
            return None;
        }
        self.leave_cell();
        self.focus = target;
        match target {
            Some(Target::Cell(pos)) => self.editors.get_mut(pos)?.focus(),
            _ => None,
        }
    }

    fn press_add(&mut self) -> Option<Cmd> {
        self.set_focus(Some(Target::Add));
        Some(self.append_row())
    }

    fn press_remove(&mut self, row: usize) -> Option<Cmd> {
        // focus moves to the control first so a draft in the row commits
        self.set_focus(Some(Target::Remove(row)));
        if let Err(err) = self.remove_row(row) {
            debug!(%err, "remove ignored");
        }
        None
    }

    fn handle_key(&mut self, msg: &KeyMsg) -> Option<Option<Cmd>> {
        let len = self.table.len();
        let current = self.focus?;

        if self.key_map.add_row.matches(msg) {
            return Some(self.press_add());
        }
        if self.key_map.remove_row.matches(msg) {
            return Some(match current.row() {
                Some(row) => self.press_remove(row),
                None => None,
            });
        }
        if self.key_map.next.matches(msg) {
            return Some(self.set_focus(Some(nav::next(Some(current), len))));
        }
        if self.key_map.prev.matches(msg) {
            return Some(self.set_focus(Some(nav::prev(Some(current), len))));
        }
        if self.key_map.up.matches(msg) {
            return Some(self.set_focus(Some(nav::up(current, len))));
        }
        if self.key_map.down.matches(msg) {
            return Some(self.set_focus(Some(nav::down(current, len))));
        }
        if self.key_map.toggle_help.matches(msg) {
            self.help.show_all = !self.help.show_all;
            return Some(None);
        }

        match current {
            Target::Cell(_) if self.key_map.commit.matches(msg) => {
                Some(self.set_focus(Some(nav::next(Some(current), len))))
            }
            Target::Remove(row) if self.key_map.activate.matches(msg) => {
                Some(self.press_remove(row))
            }
            Target::Add if self.key_map.activate.matches(msg) => Some(self.press_add()),
            _ => None,
        }
    }

    /// Focuses the first cell, or the add control of an empty grid.
    pub fn focus(&mut self) -> Option<Cmd> {
        if self.focus.is_some() {
            return None;
        }
        self.set_focus(Some(nav::next(None, self.table.len())))
    }

    /// Commits the focused cell and drops focus.
    pub fn blur(&mut self) {
        self.set_focus(None);
    }

    /// Whether any element of the grid has focus.
    pub fn focused(&self) -> bool {
        self.focus.is_some()
    }

    /// Handles a message.
    ///
    /// Key presses drive navigation and row changes while the grid is
    /// focused; anything else is forwarded to the focused cell editor.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(post) = msg.downcast_ref::<PostRenderMsg>() {
            if post.id != self.id {
                return None;
            }
            return self.post_render();
        }

        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            self.set_width(size.width as usize);
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if let Some(cmd) = self.handle_key(key_msg) {
                return cmd;
            }
        }

        match self.focus {
            Some(Target::Cell(pos)) => self.editors.get_mut(pos)?.update(&msg),
            _ => None,
        }
    }

    /// Renders the grid and its help line.
    pub fn view(&self) -> String {
        let layout = Layout::new(self.width, &COLUMNS);
        let grid = render::paint(&self.view, &layout, &self.styles, self.focus, &self.editors);
        format!("{}\n\n{}", grid, self.help.view(&self.key_map))
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        Model::focus(self)
    }

    fn blur(&mut self) {
        Model::blur(self)
    }

    fn focused(&self) -> bool {
        Model::focused(self)
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let mut grid = new();
        let cmd = grid.focus();
        (grid, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        Model::update(self, msg)
    }

    fn view(&self) -> String {
        Model::view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn ctrl(c: char) -> Msg {
        Box::new(KeyMsg {
            key: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
        })
    }

    fn focused_grid() -> Model {
        let mut grid = new();
        let _ = grid.focus();
        grid
    }

    #[test]
    fn test_new_grid_is_seeded_and_idle() {
        let grid = new();
        assert_eq!(grid.rows(), Table::seed().rows());
        assert_eq!(grid.focus_intent(), FocusIntent::Idle);
        assert_eq!(grid.focused_target(), None);
        assert_eq!(grid.coordinator.mounted_count(), 6);
    }

    #[test]
    fn test_append_then_post_render_focuses_new_row() {
        let mut grid = new();
        let _cmd = grid.append_row();
        assert_eq!(grid.rows().len(), 3);
        assert_eq!(grid.rows()[2], Row::default());
        assert_eq!(grid.focus_intent(), FocusIntent::PendingFocus);

        let _ = grid.post_render();
        assert_eq!(grid.focus_intent(), FocusIntent::Idle);
        let pos = CellPos::new(2, FIRST_EDITABLE_COLUMN);
        assert_eq!(grid.focused_target(), Some(Target::Cell(pos)));
        assert!(grid.cell(pos).unwrap().focused());

        // a second post-render is a no-op
        assert!(grid.post_render().is_none());
        assert_eq!(grid.focused_target(), Some(Target::Cell(pos)));
    }

    #[test]
    fn test_update_between_append_and_render_cancels_focus() {
        let mut grid = new();
        let _cmd = grid.append_row();
        grid.update_cell(0, Field::One, "x").unwrap();
        assert_eq!(grid.focus_intent(), FocusIntent::Idle);
        assert!(grid.post_render().is_none());
        assert_eq!(grid.focused_target(), None);
    }

    #[test]
    fn test_remove_between_append_and_render_cancels_focus() {
        let mut grid = new();
        let _cmd = grid.append_row();
        grid.remove_row(2).unwrap();
        assert_eq!(grid.focus_intent(), FocusIntent::Idle);
        let _ = grid.post_render();
        assert_eq!(grid.focused_target(), None);
    }

    #[test]
    fn test_rejected_operations_change_nothing() {
        let mut grid = new();
        let _cmd = grid.append_row();
        assert_eq!(
            grid.update_cell(9, Field::One, "x"),
            Err(GridError::RowOutOfRange { index: 9, len: 3 })
        );
        assert_eq!(
            grid.remove_row(3),
            Err(GridError::RowOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(grid.rows().len(), 3);
        assert_eq!(grid.focus_intent(), FocusIntent::PendingFocus);
    }

    #[test]
    fn test_typing_then_tab_commits() {
        let mut grid = focused_grid();
        let first = CellPos::new(0, 0);
        assert_eq!(grid.focused_target(), Some(Target::Cell(first)));

        grid.update(key(KeyCode::Char('!')));
        assert_eq!(grid.rows()[0].one, "ONE");
        assert_eq!(grid.cell(first).unwrap().value(), "ONE!");

        grid.update(key(KeyCode::Tab));
        assert_eq!(grid.rows()[0].one, "ONE!");
        assert_eq!(
            grid.focused_target(),
            Some(Target::Cell(CellPos::new(0, 1)))
        );
    }

    #[test]
    fn test_ctrl_n_commits_and_appends() {
        let mut grid = focused_grid();
        grid.update(key(KeyCode::Char('?')));
        let cmd = grid.update(ctrl('n'));
        assert!(cmd.is_some());
        assert_eq!(grid.rows()[0].one, "ONE?");
        assert_eq!(grid.rows().len(), 3);
        assert_eq!(grid.focused_target(), Some(Target::Add));

        let id = grid.id();
        grid.update(Box::new(PostRenderMsg { id }));
        assert_eq!(
            grid.focused_target(),
            Some(Target::Cell(CellPos::new(2, 0)))
        );
    }

    #[test]
    fn test_post_render_for_other_grid_is_ignored() {
        let mut grid = new();
        let _cmd = grid.append_row();
        let other = grid.id() + 1000;
        grid.update(Box::new(PostRenderMsg { id: other }));
        assert_eq!(grid.focus_intent(), FocusIntent::PendingFocus);
    }

    #[test]
    fn test_ctrl_x_removes_focused_row() {
        let mut grid = focused_grid();
        grid.update(key(KeyCode::Down));
        grid.update(ctrl('x'));
        assert_eq!(grid.rows(), &[Row::new("ONE", "TWO", "THREE")][..]);
        assert_eq!(grid.focused_target(), Some(Target::Remove(0)));

        grid.update(ctrl('x'));
        assert!(grid.rows().is_empty());
        assert_eq!(grid.focused_target(), Some(Target::Add));
        assert_eq!(grid.coordinator.mounted_count(), 0);
    }

    #[test]
    fn test_space_on_add_control_appends() {
        let mut grid = focused_grid();
        grid.update(Box::new(KeyMsg {
            key: KeyCode::BackTab,
            modifiers: KeyModifiers::SHIFT,
        }));
        assert_eq!(grid.focused_target(), Some(Target::Add));
        assert!(grid.update(key(KeyCode::Char(' '))).is_some());
        assert_eq!(grid.rows().len(), 3);
    }

    #[test]
    fn test_esc_reverts_draft() {
        let mut grid = focused_grid();
        grid.update(key(KeyCode::Backspace));
        grid.update(key(KeyCode::Esc));
        grid.update(key(KeyCode::Tab));
        assert_eq!(grid.rows()[0].one, "ONE");
    }

    #[test]
    fn test_unfocused_grid_ignores_keys() {
        let mut grid = new();
        assert!(grid.update(ctrl('n')).is_none());
        assert_eq!(grid.rows().len(), 2);
    }

    #[test]
    fn test_window_size_relayouts() {
        let mut grid = new();
        grid.update(Box::new(WindowSizeMsg {
            width: 40,
            height: 20,
        }));
        assert_eq!(grid.width(), 40);
        let first = lipgloss_extras::lipgloss::strip_ansi(&grid.view());
        let header = first.lines().next().unwrap();
        assert_eq!(unicode_width::UnicodeWidthStr::width(header), 40);
    }

    #[test]
    fn test_help_toggles() {
        let mut grid = focused_grid();
        assert!(!grid.help.show_all);
        grid.update(key(KeyCode::F(1)));
        assert!(grid.help.show_all);
    }
}
