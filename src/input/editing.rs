//! Key handling, caret movement and horizontal scrolling for the cell editor.

use super::model::{paste, Model};
use super::types::{PasteErrMsg, PasteMsg};
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use unicode_width::UnicodeWidthChar;

fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

impl Model {
    /// Applies a message to the draft.
    ///
    /// Unfocused editors ignore everything. Key presses edit the draft or move
    /// the caret, paste messages insert text, and blink ticks are forwarded to
    /// the caret.
    ///
    /// ```rust
    /// use bubbletea_datagrid::input::new;
    /// use bubbletea_rs::{KeyMsg, Msg};
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let mut cell = new("");
    /// let _ = cell.focus();
    /// let msg: Msg = Box::new(KeyMsg { key: KeyCode::Char('h'), modifiers: KeyModifiers::NONE });
    /// cell.update(&msg);
    /// assert_eq!(cell.value(), "h");
    /// ```
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.key_map.paste.matches(key_msg) {
                return Some(paste());
            }
            if self.key_map.revert.matches(key_msg) {
                self.revert();
                return None;
            }
            if !self.handle_deletion_keys(key_msg) && !self.handle_movement_keys(key_msg) {
                self.handle_character_input(key_msg);
            }
        }

        if let Some(PasteMsg(text)) = msg.downcast_ref::<PasteMsg>() {
            // single line: newlines from the clipboard become spaces
            let chars: Vec<char> = text
                .trim_end_matches(['\r', '\n'])
                .chars()
                .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                .collect();
            self.insert_runes(chars);
        }

        if let Some(PasteErrMsg(err)) = msg.downcast_ref::<PasteErrMsg>() {
            self.err = Some(err.clone());
        }

        let cmd = self.cursor.update(msg);
        self.handle_overflow();
        cmd
    }

    fn handle_deletion_keys(&mut self, key_msg: &KeyMsg) -> bool {
        let km = &self.key_map;
        if km.delete_word_backward.matches(key_msg) {
            self.delete_word_backward();
        } else if km.delete_character_backward.matches(key_msg) {
            if self.pos > 0 {
                self.value.remove(self.pos - 1);
                self.pos -= 1;
            }
        } else if km.delete_character_forward.matches(key_msg) {
            if self.pos < self.value.len() {
                self.value.remove(self.pos);
            }
        } else if km.delete_after_cursor.matches(key_msg) {
            self.value.truncate(self.pos);
        } else if km.delete_before_cursor.matches(key_msg) {
            self.value.drain(..self.pos);
            self.offset = 0;
            self.pos = 0;
        } else if km.delete_word_forward.matches(key_msg) {
            self.delete_word_forward();
        } else {
            return false;
        }
        true
    }

    fn handle_movement_keys(&mut self, key_msg: &KeyMsg) -> bool {
        let km = &self.key_map;
        if km.word_backward.matches(key_msg) {
            self.word_backward();
        } else if km.character_backward.matches(key_msg) {
            self.set_cursor(self.pos.saturating_sub(1));
        } else if km.word_forward.matches(key_msg) {
            self.word_forward();
        } else if km.character_forward.matches(key_msg) {
            self.set_cursor(self.pos + 1);
        } else if km.line_start.matches(key_msg) {
            self.cursor_start();
        } else if km.line_end.matches(key_msg) {
            self.cursor_end();
        } else {
            return false;
        }
        true
    }

    fn handle_character_input(&mut self, key_msg: &KeyMsg) {
        if let KeyCode::Char(ch) = key_msg.key {
            if !key_msg.modifiers.contains(KeyModifiers::CONTROL)
                && !key_msg.modifiers.contains(KeyModifiers::ALT)
            {
                self.insert_runes(vec![ch]);
            }
        }
    }

    pub(super) fn insert_runes(&mut self, runes: Vec<char>) {
        let n = runes.len();
        self.value.splice(self.pos..self.pos, runes);
        self.pos += n;
        self.handle_overflow();
    }

    fn delete_word_backward(&mut self) {
        if self.pos == 0 {
            return;
        }
        let end = self.pos;
        let mut start = end;
        while start > 0 && self.value[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !self.value[start - 1].is_whitespace() {
            start -= 1;
        }
        self.value.drain(start..end);
        self.pos = start;
    }

    fn delete_word_forward(&mut self) {
        let start = self.pos;
        let end = self.next_word_boundary();
        self.value.drain(start..end);
    }

    fn word_backward(&mut self) {
        let mut i = self.pos;
        while i > 0 && self.value[i - 1].is_whitespace() {
            i -= 1;
        }
        while i > 0 && !self.value[i - 1].is_whitespace() {
            i -= 1;
        }
        self.set_cursor(i);
    }

    fn word_forward(&mut self) {
        let i = self.next_word_boundary();
        self.set_cursor(i);
    }

    fn next_word_boundary(&self) -> usize {
        let mut i = self.pos;
        while i < self.value.len() && self.value[i].is_whitespace() {
            i += 1;
        }
        while i < self.value.len() && !self.value[i].is_whitespace() {
            i += 1;
        }
        i
    }

    fn span_width(&self, from: usize, to: usize) -> usize {
        self.value[from..to].iter().map(|&c| char_width(c)).sum()
    }

    /// Columns the caret occupies: the width of the character under it, or
    /// one column past the end.
    pub(super) fn caret_width(&self) -> usize {
        self.value
            .get(self.pos)
            .map_or(1, |&c| char_width(c).max(1))
    }

    /// Recomputes the visible window `[offset, offset_right)` so the caret
    /// and the character under it stay on screen.
    pub(super) fn handle_overflow(&mut self) {
        self.pos = self.pos.min(self.value.len());
        let len = self.value.len();
        let caret = self.caret_width();

        if self.width == 0 || self.span_width(0, len) < self.width {
            self.offset = 0;
            self.offset_right = len;
            return;
        }

        if self.pos < self.offset {
            self.offset = self.pos;
        }
        self.offset = self.offset.min(len);
        while self.offset < self.pos && self.span_width(self.offset, self.pos) + caret > self.width {
            self.offset += 1;
        }

        let mut right = self.offset;
        let mut used = 0;
        while right < len {
            let w = char_width(self.value[right]);
            if used + w > self.width {
                break;
            }
            used += w;
            right += 1;
        }
        self.offset_right = right;
    }
}
