//! Cell editor model and its draft/committed lifecycle.

use super::keymap::{default_key_map, KeyMap};
#[cfg(feature = "clipboard-support")]
use super::types::PasteMsg;
use super::types::{CellState, PasteErrMsg};
use crate::cursor::{new as cursor_new, Model as Cursor};
use crate::Component;
use bubbletea_rs::{Cmd, Msg};
use lipgloss_extras::prelude::*;
use std::time::Duration;

/// Editor state for one grid cell.
///
/// The draft is stored as a `Vec<char>` so caret arithmetic is per character
/// rather than per byte.
///
/// # Examples
///
/// ```rust
/// use bubbletea_datagrid::input::{new, CellState};
///
/// let mut cell = new("two");
/// assert_eq!(cell.value(), "two");
/// assert_eq!(cell.committed(), "two");
///
/// cell.set_value("XX");
/// assert_eq!(cell.state(), CellState::Draft);
///
/// cell.revert();
/// assert_eq!(cell.value(), "two");
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// Last clipboard error, if any.
    pub err: Option<String>,
    /// Style of the text.
    pub text_style: Style,
    /// Text shown while the cell is empty and unfocused.
    pub placeholder: String,
    /// Style of the placeholder.
    pub placeholder_style: Style,
    /// The caret.
    pub cursor: Cursor,
    /// Editing bindings.
    pub key_map: KeyMap,

    pub(super) committed: String,
    pub(super) value: Vec<char>,
    pub(super) focus: bool,
    pub(super) pos: usize,
    pub(super) width: usize,
    pub(super) offset: usize,
    pub(super) offset_right: usize,
}

/// Creates an unfocused editor whose draft and committed value are `committed`.
pub fn new(committed: impl Into<String>) -> Model {
    let committed = committed.into();
    let value: Vec<char> = committed.chars().collect();
    let len = value.len();
    Model {
        err: None,
        text_style: Style::new(),
        placeholder: String::new(),
        placeholder_style: Style::new().foreground(Color::from("240")),
        cursor: cursor_new(),
        key_map: default_key_map(),
        committed,
        value,
        focus: false,
        pos: len,
        width: 0,
        offset: 0,
        offset_right: len,
    }
}

impl Default for Model {
    fn default() -> Self {
        new("")
    }
}

/// Reads the system clipboard and delivers a [`PasteMsg`] or [`PasteErrMsg`].
pub fn paste() -> Cmd {
    bubbletea_rs::tick(Duration::from_nanos(1), |_| {
        #[cfg(feature = "clipboard-support")]
        {
            use clipboard::{ClipboardContext, ClipboardProvider};
            let res: Result<String, String> = (|| {
                let mut ctx: ClipboardContext = ClipboardProvider::new()
                    .map_err(|e| format!("failed to open clipboard: {}", e))?;
                ctx.get_contents()
                    .map_err(|e| format!("failed to read clipboard: {}", e))
            })();
            match res {
                Ok(s) => Box::new(PasteMsg(s)) as Msg,
                Err(e) => Box::new(PasteErrMsg(e)) as Msg,
            }
        }
        #[cfg(not(feature = "clipboard-support"))]
        {
            Box::new(PasteErrMsg("clipboard support not enabled".to_string())) as Msg
        }
    })
}

impl Model {
    /// The current draft.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// The value the table holds for this cell, as last seen by the editor.
    pub fn committed(&self) -> &str {
        &self.committed
    }

    /// Whether the draft has diverged from the committed value.
    pub fn state(&self) -> CellState {
        if self.value.iter().copied().eq(self.committed.chars()) {
            CellState::Committed
        } else {
            CellState::Draft
        }
    }

    /// Replaces the draft.
    pub fn set_value(&mut self, s: &str) {
        self.value = s.chars().collect();
        if self.pos > self.value.len() || !self.focus {
            self.pos = self.value.len();
        }
        self.handle_overflow();
    }

    /// Accepts the draft as the new committed value and returns it, ready to
    /// be written back to the table.
    pub fn commit(&mut self) -> String {
        self.committed = self.value();
        self.committed.clone()
    }

    /// Discards the draft.
    pub fn revert(&mut self) {
        let committed = self.committed.clone();
        self.set_value(&committed);
    }

    /// Reconciles the editor with the table value for its position.
    ///
    /// Returns `true` if the committed value changed underneath the editor,
    /// in which case the draft is reset to it. A value equal to what the editor
    /// last committed leaves the draft alone.
    pub fn sync(&mut self, committed: &str) -> bool {
        if self.committed == committed {
            return false;
        }
        self.committed = committed.to_string();
        self.value = committed.chars().collect();
        self.pos = self.value.len();
        self.offset = 0;
        self.handle_overflow();
        true
    }

    /// Caret position in characters.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the caret, clamped to the draft length.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
        self.handle_overflow();
    }

    /// Moves the caret to the start.
    pub fn cursor_start(&mut self) {
        self.set_cursor(0);
    }

    /// Moves the caret to the end.
    pub fn cursor_end(&mut self) {
        self.set_cursor(self.value.len());
    }

    /// Sets the visible width in terminal columns. Zero means unbounded.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
        self.handle_overflow();
    }

    /// Visible width in terminal columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Sets the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = placeholder.to_string();
    }

    /// Whether the editor has focus.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Gives the editor focus and places the caret at the end of the draft.
    pub fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        self.cursor_end();
        self.cursor.focus()
    }

    /// Removes focus. The draft is kept until the owner commits or reverts it.
    pub fn blur(&mut self) {
        self.focus = false;
        self.cursor.blur();
    }

    /// Id of the editor, shared with its caret.
    pub fn id(&self) -> usize {
        self.cursor.id()
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
