#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-datagrid/")]

//! # bubbletea-datagrid
//!
//! An editable data grid component for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications.
//!
//! The grid shows rows of three text fields as editable columns, with a
//! remove control on every row and an "Add New +" control below the last
//! row. Cells are edited in place: each keeps a local draft and writes it back
//! to the table when it loses focus. A freshly added row receives focus in
//! its first cell as soon as it is on screen.
//!
//! ## Components
//!
//! - [`grid`]: the grid itself, its table store and focus handling
//! - [`input`]: the single-line cell editor
//! - [`cursor`]: the blinking caret used by the editor
//! - [`help`]: the key binding help line
//! - [`key`]: type-safe key bindings
//!
//! ## Focus Management
//!
//! Focusable components implement [`Component`]:
//!
//! ```rust
//! use bubbletea_datagrid::prelude::*;
//! use bubbletea_rs::Cmd;
//!
//! fn handle_focus<T: Component>(component: &mut T) {
//!     let _cmd: Option<Cmd> = component.focus();
//!     assert!(component.focused());
//!     component.blur();
//!     assert!(!component.focused());
//! }
//!
//! handle_focus(&mut DataGrid::new());
//! handle_focus(&mut CellInput::default());
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_datagrid::prelude::*;
//! use bubbletea_rs::{Cmd, KeyMsg, Model, Msg};
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! struct App {
//!     grid: DataGrid,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut grid = DataGrid::new().with_width(100);
//!         let cmd = grid.focus();
//!         (Self { grid }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(k) = msg.downcast_ref::<KeyMsg>() {
//!             if k.key == KeyCode::Char('c') && k.modifiers.contains(KeyModifiers::CONTROL) {
//!                 return Some(bubbletea_rs::quit());
//!             }
//!         }
//!         self.grid.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.grid.view()
//!     }
//! }
//! ```
//!
//! ## Logging
//!
//! The crate logs through [`tracing`](https://docs.rs/tracing): table
//! mutations and focus transfers at `debug`, editor mounts at `trace`,
//! rejected operations at `warn`. It never installs a subscriber.
//!
//! ## Features
//!
//! - `clipboard-support` (default): `ctrl+v` pastes from the system clipboard.

pub mod cursor;
pub mod grid;
pub mod help;
pub mod input;
pub mod key;

use bubbletea_rs::Cmd;

/// Components that can take keyboard focus.
///
/// `focus()` may return a command, typically the first caret blink.
/// `blur()` must leave the component in a state where it ignores key input.
///
/// ```rust
/// use bubbletea_datagrid::prelude::*;
///
/// let mut cell = CellInput::default();
/// assert!(!cell.focused());
///
/// let _cmd = cell.focus();
/// assert!(cell.focused());
///
/// cell.blur();
/// assert!(!cell.focused());
/// ```
pub trait Component {
    /// Gives the component focus.
    fn focus(&mut self) -> Option<Cmd>;

    /// Takes focus away from the component.
    fn blur(&mut self);

    /// Whether the component has focus.
    fn focused(&self) -> bool;
}

pub use cursor::Model as Cursor;
pub use grid::{
    Field, FocusIntent, GridError, GridKeyMap, Model as DataGrid, PostRenderMsg, Row,
    Styles as GridStyles, Table,
};
pub use help::Model as HelpModel;
pub use input::{CellState, Model as CellInput, PasteErrMsg, PasteMsg};
pub use key::{Binding, Help as KeyHelp, KeyMap, KeyPress};

/// Common imports.
///
/// ```rust
/// use bubbletea_datagrid::prelude::*;
///
/// let grid = DataGrid::new();
/// assert_eq!(grid.rows()[0], Row::new("ONE", "TWO", "THREE"));
/// ```
pub mod prelude {
    pub use crate::cursor::Model as Cursor;
    pub use crate::grid::{
        CellPos, Field, FocusIntent, GridError, GridKeyMap, Model as DataGrid, PostRenderMsg, Row,
        Styles as GridStyles, Table, Target,
    };
    pub use crate::help::Model as HelpModel;
    pub use crate::input::{new as cell_input_new, CellState, Model as CellInput};
    pub use crate::key::{
        matches, matches_binding, new_binding, with_disabled, with_help, with_keys, Binding,
        Help as KeyHelp, KeyMap, KeyPress,
    };
    pub use crate::Component;
}
