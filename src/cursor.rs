//! Blinking caret used by the cell editor.
//!
//! The caret is a sub-component: the owning editor forwards messages to
//! [`Model::update`] and splices [`Model::view`] into its own rendering. Every
//! caret gets a unique id so that blink ticks scheduled by one cell never
//! toggle the caret of another cell.
//!
//! ```rust
//! use bubbletea_datagrid::cursor;
//!
//! let mut caret = cursor::new();
//! let _blink = caret.focus();
//! caret.set_char("a");
//! assert!(caret.focused());
//! assert!(!caret.view().is_empty());
//! ```

use bubbletea_rs::{tick, Cmd, Msg};
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed)
}

const DEFAULT_BLINK_SPEED: Duration = Duration::from_millis(530);

/// Starts the blink loop of whichever caret is focused.
#[derive(Debug, Clone)]
pub struct InitialBlinkMsg;

/// Toggles a specific caret.
#[derive(Debug, Clone)]
pub struct BlinkMsg {
    /// Id of the caret this tick belongs to.
    pub id: usize,
    /// Sequence tag; ticks with an outdated tag are ignored.
    pub tag: usize,
}

/// How the caret is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Alternates between block and plain text.
    Blink,
    /// Always drawn as a block.
    Static,
    /// Never drawn.
    Hide,
}

/// Caret state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Time between blink toggles.
    pub blink_speed: Duration,
    /// Style of the block when the caret is shown.
    pub style: Style,
    /// Style of the underlying character when the caret is hidden.
    pub text_style: Style,

    char: String,
    id: usize,
    focus: bool,
    // true while the block is *not* drawn
    hidden: bool,
    blink_tag: usize,
    mode: Mode,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            blink_speed: DEFAULT_BLINK_SPEED,
            style: Style::new(),
            text_style: Style::new(),
            char: " ".to_string(),
            id: next_id(),
            focus: false,
            hidden: true,
            blink_tag: 0,
            mode: Mode::Blink,
        }
    }
}

impl Model {
    /// Creates an unfocused blinking caret.
    pub fn new() -> Self {
        Self::default()
    }

    /// Unique id of this caret.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Handles blink messages addressed to this caret.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if !self.focus || self.mode != Mode::Blink {
            return None;
        }

        if msg.downcast_ref::<InitialBlinkMsg>().is_some() {
            return self.blink_cmd();
        }

        if let Some(blink) = msg.downcast_ref::<BlinkMsg>() {
            if blink.id != self.id || blink.tag != self.blink_tag {
                return None;
            }
            self.hidden = !self.hidden;
            return self.blink_cmd();
        }

        None
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Changes the mode, returning a command that restarts blinking if needed.
    pub fn set_mode(&mut self, mode: Mode) -> Option<Cmd> {
        self.mode = mode;
        self.hidden = mode == Mode::Hide || !self.focus;
        if mode == Mode::Blink && self.focus {
            return self.blink_cmd();
        }
        None
    }

    fn blink_cmd(&mut self) -> Option<Cmd> {
        if self.mode != Mode::Blink {
            return None;
        }
        self.blink_tag += 1;
        let (id, tag) = (self.id, self.blink_tag);
        Some(tick(self.blink_speed, move |_| {
            Box::new(BlinkMsg { id, tag }) as Msg
        }))
    }

    /// Shows the caret and starts blinking.
    pub fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        self.hidden = self.mode == Mode::Hide;
        self.blink_cmd()
    }

    /// Hides the caret.
    pub fn blur(&mut self) {
        self.focus = false;
        self.hidden = true;
    }

    /// Whether the caret is focused.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Sets the character drawn under the caret.
    pub fn set_char(&mut self, s: &str) {
        self.char = s.to_string();
    }

    /// Renders the caret over its character.
    pub fn view(&self) -> String {
        if self.mode == Mode::Hide || self.hidden {
            return self.text_style.clone().inline(true).render(&self.char);
        }
        self.style
            .clone()
            .inline(true)
            .reverse(true)
            .render(&self.char)
    }
}

/// Command that kicks off blinking for the focused caret.
pub fn blink() -> Cmd {
    tick(Duration::from_millis(0), |_| Box::new(InitialBlinkMsg) as Msg)
}

/// Creates a new caret. Equivalent to `Model::new()`.
pub fn new() -> Model {
    Model::new()
}
