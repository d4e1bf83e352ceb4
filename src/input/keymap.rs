//! Key bindings for the cell editor.

use crate::key::{new_binding, with_help, with_keys_str, Binding};

/// Editing bindings handled inside a focused cell.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move one character right.
    pub character_forward: Binding,
    /// Move one character left.
    pub character_backward: Binding,
    /// Move one word right.
    pub word_forward: Binding,
    /// Move one word left.
    pub word_backward: Binding,
    /// Delete the previous word.
    pub delete_word_backward: Binding,
    /// Delete the next word.
    pub delete_word_forward: Binding,
    /// Delete from the caret to the end.
    pub delete_after_cursor: Binding,
    /// Delete from the start to the caret.
    pub delete_before_cursor: Binding,
    /// Delete one character backward.
    pub delete_character_backward: Binding,
    /// Delete one character forward.
    pub delete_character_forward: Binding,
    /// Jump to the start.
    pub line_start: Binding,
    /// Jump to the end.
    pub line_end: Binding,
    /// Paste from the clipboard.
    pub paste: Binding,
    /// Throw the draft away and show the committed value again.
    pub revert: Binding,
}

/// Default editing bindings (emacs-style, as in most terminal line editors).
pub fn default_key_map() -> KeyMap {
    KeyMap {
        character_forward: new_binding(vec![with_keys_str(&["right", "ctrl+f"])]),
        character_backward: new_binding(vec![with_keys_str(&["left", "ctrl+b"])]),
        word_forward: new_binding(vec![with_keys_str(&["alt+right", "ctrl+right", "alt+f"])]),
        word_backward: new_binding(vec![with_keys_str(&["alt+left", "ctrl+left", "alt+b"])]),
        delete_word_backward: new_binding(vec![with_keys_str(&["alt+backspace", "ctrl+w"])]),
        delete_word_forward: new_binding(vec![with_keys_str(&["alt+delete", "alt+d"])]),
        delete_after_cursor: new_binding(vec![with_keys_str(&["ctrl+k"])]),
        delete_before_cursor: new_binding(vec![with_keys_str(&["ctrl+u"])]),
        delete_character_backward: new_binding(vec![with_keys_str(&["backspace", "ctrl+h"])]),
        delete_character_forward: new_binding(vec![with_keys_str(&["delete", "ctrl+d"])]),
        line_start: new_binding(vec![with_keys_str(&["home", "ctrl+a"])]),
        line_end: new_binding(vec![with_keys_str(&["end", "ctrl+e"])]),
        paste: new_binding(vec![with_keys_str(&["ctrl+v"])]),
        revert: new_binding(vec![with_keys_str(&["esc"]), with_help("esc", "revert cell")]),
    }
}
