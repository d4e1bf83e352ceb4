//! Single-line cell editor with commit-on-blur semantics.
//!
//! Every editable grid cell is backed by one of these editors. The editor
//! keeps two values:
//!
//! - the **committed** value, i.e. what the table currently holds for the cell
//! - the **draft**, i.e. what the user is typing
//!
//! Keystrokes only touch the draft. When the editor loses focus the owner
//! calls [`Model::commit`] and writes the returned draft back to the table.
//! If the table value changes for some other reason (a row above was removed
//! and this position now shows a different row), [`Model::sync`] resets the
//! draft to the new committed value.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_datagrid::input::{new, CellState};
//!
//! let mut cell = new("ONE");
//! let _ = cell.focus();
//! cell.set_value("ONE!");
//! assert_eq!(cell.state(), CellState::Draft);
//!
//! cell.blur();
//! assert_eq!(cell.commit(), "ONE!");
//! assert_eq!(cell.state(), CellState::Committed);
//! ```

pub mod editing;
pub mod keymap;
pub mod model;
pub mod types;
pub mod view;


pub use keymap::{default_key_map, KeyMap};
pub use model::{new, paste, Model};
pub use types::{CellState, PasteErrMsg, PasteMsg};
