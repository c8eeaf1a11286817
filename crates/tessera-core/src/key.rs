//! Named-key table.
//!
//! Raw terminal input is decoded by crossterm and then folded into a fixed set
//! of named tokens (`UP`, `PAGE-DOWN`, `BACKSPACE`, ...) plus literal printable
//! characters. Widgets match on [`Key`] values; drivers that store key names in
//! text (help lines, prompts) use [`Key::name`] and [`Key::parse`], which
//! round-trip every token.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::borrow::Cow;
use std::fmt;

/// A decoded key press.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// `UP`
    Up,
    /// `DOWN`
    Down,
    /// `LEFT`
    Left,
    /// `RIGHT`
    Right,
    /// `ENTER`
    Enter,
    /// `SPACE`, the only printable character with a name of its own.
    Space,
    /// `HOME`
    Home,
    /// `END`
    End,
    /// `PAGE-UP`
    PageUp,
    /// `PAGE-DOWN`
    PageDown,
    /// `DELETE`: remove the character under the cursor.
    Delete,
    /// `BACKSPACE`: remove the character before the cursor.
    Backspace,
    /// `ESCAPE`
    Escape,
    /// `TAB`
    Tab,
    /// `BACKTAB` (Shift+Tab)
    BackTab,
    /// `INSERT`
    Insert,
    /// `F1`..`F255`
    Function(u8),
    /// `CTRL-<c>`; the character is stored lowercase.
    Ctrl(char),
    /// A literal character.
    Char(char),
}

impl Key {
    /// Fold a crossterm key event into a named key.
    ///
    /// Release events and keys without a token (media keys, lone modifiers,
    /// caps lock, ...) yield `None`.
    pub fn from_event(event: KeyEvent) -> Option<Key> {
        if event.kind == KeyEventKind::Release {
            return None;
        }
        let key = match event.code {
            KeyCode::Char(c) if event.modifiers.contains(KeyModifiers::CONTROL) => {
                Key::Ctrl(c.to_ascii_lowercase())
            }
            KeyCode::Char(c) => Key::from_char(c),
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Enter => Key::Enter,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Delete => Key::Delete,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Esc => Key::Escape,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Insert => Key::Insert,
            KeyCode::F(n) => Key::Function(n),
            _ => return None,
        };
        Some(key)
    }

    /// The key for a literal character. Space maps to [`Key::Space`] and the
    /// control characters terminals send for Enter, Tab, Backspace and Escape
    /// map to their named keys.
    pub fn from_char(c: char) -> Key {
        match c {
            ' ' => Key::Space,
            '\n' | '\r' => Key::Enter,
            '\t' => Key::Tab,
            '\x7f' | '\x08' => Key::Backspace,
            '\x1b' => Key::Escape,
            c => Key::Char(c),
        }
    }

    /// The token for this key: `"PAGE-UP"`, `"CTRL-F"`, `"F5"`, or the
    /// character itself for literals.
    pub fn name(&self) -> Cow<'static, str> {
        let name = match self {
            Key::Up => "UP",
            Key::Down => "DOWN",
            Key::Left => "LEFT",
            Key::Right => "RIGHT",
            Key::Enter => "ENTER",
            Key::Space => "SPACE",
            Key::Home => "HOME",
            Key::End => "END",
            Key::PageUp => "PAGE-UP",
            Key::PageDown => "PAGE-DOWN",
            Key::Delete => "DELETE",
            Key::Backspace => "BACKSPACE",
            Key::Escape => "ESCAPE",
            Key::Tab => "TAB",
            Key::BackTab => "BACKTAB",
            Key::Insert => "INSERT",
            Key::Function(n) => return Cow::Owned(format!("F{n}")),
            Key::Ctrl(c) => return Cow::Owned(format!("CTRL-{}", c.to_ascii_uppercase())),
            Key::Char(c) => return Cow::Owned(c.to_string()),
        };
        Cow::Borrowed(name)
    }

    /// Parse a token produced by [`Key::name`]. A single character parses as
    /// the literal key for that character.
    pub fn parse(token: &str) -> Option<Key> {
        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Some(Key::from_char(c));
        }
        let key = match token {
            "UP" => Key::Up,
            "DOWN" => Key::Down,
            "LEFT" => Key::Left,
            "RIGHT" => Key::Right,
            "ENTER" => Key::Enter,
            "SPACE" => Key::Space,
            "HOME" => Key::Home,
            "END" => Key::End,
            "PAGE-UP" => Key::PageUp,
            "PAGE-DOWN" => Key::PageDown,
            "DELETE" => Key::Delete,
            "BACKSPACE" => Key::Backspace,
            "ESCAPE" => Key::Escape,
            "TAB" => Key::Tab,
            "BACKTAB" => Key::BackTab,
            "INSERT" => Key::Insert,
            _ => {
                if let Some(rest) = token.strip_prefix("CTRL-") {
                    let mut rest = rest.chars();
                    return match (rest.next(), rest.next()) {
                        (Some(c), None) => Some(Key::Ctrl(c.to_ascii_lowercase())),
                        _ => None,
                    };
                }
                let n = token.strip_prefix('F')?.parse::<u8>().ok()?;
                Key::Function(n)
            }
        };
        Some(key)
    }

    /// The character this key inserts into a text buffer, if any.
    pub fn printable(&self) -> Option<char> {
        match self {
            Key::Space => Some(' '),
            Key::Char(c) if !c.is_control() => Some(*c),
            _ => None,
        }
    }

    /// Whether this key is a named token rather than a literal character.
    pub fn is_named(&self) -> bool {
        self.printable().is_none()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Key::from_char(c)
    }
}
