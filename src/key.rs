//! Type-safe key bindings shared by every component in the crate.
//!
//! A [`Binding`] groups one or more key presses under a single action and
//! carries the help text shown by the [`help`](crate::help) component. Bindings
//! can be built from crossterm key codes directly or from the familiar string
//! notation (`"ctrl+n"`, `"shift+tab"`, `"f1"`).
//!
//! ```rust
//! use bubbletea_datagrid::key::{self, Binding};
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let add = key::new_binding(vec![
//!     key::with_keys_str(&["ctrl+n"]),
//!     key::with_help("ctrl+n", "add row"),
//! ]);
//! let next = Binding::new(vec![KeyCode::Tab]).with_help("tab", "next cell");
//!
//! let msg = KeyMsg { key: KeyCode::Char('n'), modifiers: KeyModifiers::CONTROL };
//! assert!(key::matches_binding(&msg, &add));
//! assert!(!next.matches(&msg));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key itself.
    pub code: KeyCode,
    /// Modifiers that must accompany the key.
    pub mods: KeyModifiers,
}

impl KeyPress {
    /// Creates a key press without modifiers.
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }

    /// Returns true if the incoming key message is this key press.
    ///
    /// Shift is ignored for characters and back-tab because terminals already
    /// encode it in the key code (`'G'`, `BackTab`) and report it inconsistently.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        match self.code {
            KeyCode::Char(_) | KeyCode::BackTab => {
                self.mods.difference(KeyModifiers::SHIFT)
                    == msg.modifiers.difference(KeyModifiers::SHIFT)
            }
            _ => self.mods == msg.modifiers,
        }
    }
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self::new(code)
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self { code, mods }
    }
}

/// Help text for a binding: the short key label and what it does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Key label, e.g. `"ctrl+n"`.
    pub key: String,
    /// Action description, e.g. `"add row"`.
    pub desc: String,
}

/// A named action bound to one or more key presses.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from key codes or `(code, modifiers)` pairs.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Attaches help text.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Replaces the key presses of this binding.
    pub fn set_keys(&mut self, keys: Vec<KeyPress>) {
        self.keys = keys;
    }

    /// The key presses that trigger this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// The help text of this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Enables or disables the binding. Disabled bindings never match and are
    /// hidden from help.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether the binding is enabled and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Returns true if `msg` triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// Option applied by [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

/// Builds a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        opt(&mut binding);
    }
    binding
}

/// Sets the keys of a binding.
pub fn with_keys(keys: Vec<KeyPress>) -> BindingOpt {
    Box::new(move |b| b.set_keys(keys))
}

/// Sets the keys of a binding from string notation. Unknown names are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let parsed: Vec<KeyPress> = keys.iter().filter_map(|k| parse_key(k)).collect();
    with_keys(parsed)
}

/// Sets the help text of a binding.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    Box::new(move |b| b.help = help)
}

/// Creates the binding in the disabled state.
pub fn with_disabled() -> BindingOpt {
    Box::new(|b| b.disabled = true)
}

/// Returns true if `msg` triggers `binding`.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(msg)
}

/// Returns true if `msg` triggers any of `bindings`.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Parses string notation such as `"ctrl+n"`, `"alt+backspace"` or `"f1"`.
pub fn parse_key(s: &str) -> Option<KeyPress> {
    let mut mods = KeyModifiers::NONE;
    let mut parts: Vec<&str> = s.split('+').collect();
    // "ctrl++" style: a trailing empty part means the key is '+'
    let last = match parts.pop()? {
        "" => "+",
        other => other,
    };
    for part in parts {
        match part {
            "ctrl" => mods |= KeyModifiers::CONTROL,
            "alt" => mods |= KeyModifiers::ALT,
            "shift" => mods |= KeyModifiers::SHIFT,
            "" => {}
            _ => return None,
        }
    }

    let code = match last {
        "enter" => KeyCode::Enter,
        "tab" if mods.contains(KeyModifiers::SHIFT) => KeyCode::BackTab,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "esc" => KeyCode::Esc,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" => KeyCode::PageUp,
        "pgdown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        f if f.len() > 1 && f.starts_with('f') => KeyCode::F(f[1..].parse().ok()?),
        c => {
            let mut chars = c.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(ch)
        }
    };

    Some(KeyPress { code, mods })
}

/// Implemented by key maps that want to be rendered by the help component.
pub trait KeyMap {
    /// Bindings for the single-line help view.
    fn short_help(&self) -> Vec<&Binding>;
    /// Columns of bindings for the full help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_parse_key_with_modifiers() {
        assert_eq!(
            parse_key("ctrl+n"),
            Some(KeyPress::from((KeyCode::Char('n'), KeyModifiers::CONTROL)))
        );
        assert_eq!(
            parse_key("alt+backspace"),
            Some(KeyPress::from((KeyCode::Backspace, KeyModifiers::ALT)))
        );
        assert_eq!(parse_key("f1"), Some(KeyPress::new(KeyCode::F(1))));
        assert_eq!(parse_key("f"), Some(KeyPress::new(KeyCode::Char('f'))));
        assert_eq!(
            parse_key("shift+tab").map(|k| k.code),
            Some(KeyCode::BackTab)
        );
        assert_eq!(parse_key("hyper+x"), None);
        assert_eq!(parse_key("nonsense"), None);
    }

    #[test]
    fn test_binding_matches_exact_modifiers() {
        let b = new_binding(vec![with_keys_str(&["ctrl+x"])]);
        assert!(b.matches(&key(KeyCode::Char('x'), KeyModifiers::CONTROL)));
        assert!(!b.matches(&key(KeyCode::Char('x'), KeyModifiers::NONE)));
        assert!(!b.matches(&key(
            KeyCode::Char('x'),
            KeyModifiers::CONTROL | KeyModifiers::ALT
        )));
    }

    #[test]
    fn test_back_tab_ignores_shift() {
        let b = new_binding(vec![with_keys_str(&["shift+tab"])]);
        assert!(b.matches(&key(KeyCode::BackTab, KeyModifiers::SHIFT)));
        assert!(b.matches(&key(KeyCode::BackTab, KeyModifiers::NONE)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = Binding::new(vec![KeyCode::Enter]).with_help("enter", "activate");
        assert!(b.enabled());
        b.set_enabled(false);
        assert!(!b.enabled());
        assert!(!b.matches(&key(KeyCode::Enter, KeyModifiers::NONE)));

        let b = new_binding(vec![with_keys_str(&["enter"]), with_disabled()]);
        assert!(!b.enabled());
    }

    #[test]
    fn test_matches_any() {
        let a = Binding::new(vec![KeyCode::Up]);
        let b = Binding::new(vec![KeyCode::Down]);
        assert!(matches(&key(KeyCode::Down, KeyModifiers::NONE), &[&a, &b]));
        assert!(!matches(&key(KeyCode::Left, KeyModifiers::NONE), &[&a, &b]));
    }
}
