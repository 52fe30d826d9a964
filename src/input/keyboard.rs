//! Parsed key presses.
//!
//! The parser reports every key it can identify, including ones the editor
//! has no binding for (Home, function keys, Alt chords). Deciding what a key
//! means is left to [`InputEvent::from_key`](crate::input::InputEvent::from_key).

use bitflags::bitflags;

bitflags! {
    /// Modifier keys held during a key press.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        const SHIFT = 0b0000_0001;
        const ALT = 0b0000_0010;
        const CTRL = 0b0000_0100;
    }
}

/// Identity of a key, independent of modifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// DEL (0x7f) or BS (0x08).
    Backspace,
    /// CR.
    Enter,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Tab,
    Delete,
    Insert,
    /// F1 to F12.
    F(u8),
    Char(char),
    /// A lone ESC that was not the start of a sequence.
    Esc,
    /// NUL, sent by Ctrl-Space.
    Null,
}

/// A decoded key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    #[must_use]
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// A key with no modifiers held.
    #[must_use]
    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::empty())
    }

    /// An unmodified character key.
    #[must_use]
    pub fn char(c: char) -> Self {
        Self::key(KeyCode::Char(c))
    }

    /// Ctrl plus a letter, as sent by the control bytes 0x01 to 0x1a.
    #[must_use]
    pub fn ctrl_char(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CTRL)
    }

    /// Check if this is exactly Ctrl plus `letter`, with no other modifier.
    #[must_use]
    pub fn is_ctrl(&self, letter: char) -> bool {
        self.code == KeyCode::Char(letter) && self.modifiers == KeyModifiers::CTRL
    }

    /// Check if this is Ctrl-C.
    #[must_use]
    pub fn is_ctrl_c(&self) -> bool {
        self.is_ctrl('c')
    }

    /// The character typed, if this is a character key with no modifiers.
    #[must_use]
    pub fn plain_char(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(c) if self.modifiers.is_empty() => Some(c),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_letters() {
        let event = KeyEvent::ctrl_char('k');
        assert!(event.is_ctrl('k'));
        assert!(!event.is_ctrl('j'));
        assert!(!event.is_ctrl_c());
        assert!(KeyEvent::ctrl_char('c').is_ctrl_c());
    }

    #[test]
    fn test_extra_modifier_is_not_plain_ctrl() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CTRL | KeyModifiers::ALT);
        assert!(!event.is_ctrl_c());
    }

    #[test]
    fn test_plain_char() {
        assert_eq!(KeyEvent::char('x').plain_char(), Some('x'));
        assert_eq!(KeyEvent::ctrl_char('x').plain_char(), None);
        assert_eq!(KeyEvent::key(KeyCode::Enter).plain_char(), None);
        let alt = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT);
        assert_eq!(alt.plain_char(), None);
    }
}
