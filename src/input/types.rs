//! Messages and state types for the cell editor.

use bubbletea_rs::Msg;

/// Clipboard contents to insert at the caret.
#[derive(Debug, Clone)]
pub struct PasteMsg(pub String);

/// Clipboard read failure.
#[derive(Debug, Clone)]
pub struct PasteErrMsg(pub String);

/// Local state of a cell editor relative to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// The draft equals the committed value.
    Committed,
    /// The draft has diverged and will be written back on blur.
    Draft,
}

impl From<PasteMsg> for Msg {
    fn from(msg: PasteMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<PasteErrMsg> for Msg {
    fn from(msg: PasteErrMsg) -> Self {
        Box::new(msg) as Msg
    }
}
