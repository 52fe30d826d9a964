//! Byte parser for terminal key input.
//!
//! Turns raw bytes read from a raw-mode terminal into [`KeyEvent`]s.
//! Supports control characters, CSI and SS3 cursor keys (with modifier
//! parameters), `~`-terminated editing keys and UTF-8 text.

// Parser has many match arms for different terminal sequences
#![allow(clippy::match_same_arms)]
// Self is used for consistency with other methods even when not needed
#![allow(clippy::unused_self)]

use crate::input::keyboard::{KeyCode, KeyEvent, KeyModifiers};

/// Error type for input parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Input buffer is empty.
    Empty,
    /// Incomplete escape or UTF-8 sequence (need more bytes).
    Incomplete,
    /// A complete escape sequence with no key meaning; holds every byte of it.
    UnrecognizedSequence(Vec<u8>),
    /// Invalid UTF-8 lead or continuation byte at the start of the input.
    InvalidUtf8,
}

/// Result of parsing input: the key and the number of bytes consumed.
pub type ParseResult = Result<(KeyEvent, usize), ParseError>;

/// Longest escape sequence accepted before it is reported as unrecognized.
pub const MAX_SEQUENCE_LEN: usize = 32;

/// Parser for terminal key input.
#[derive(Clone, Debug, Default)]
pub struct InputParser {
    _private: (),
}

impl InputParser {
    /// Create a new input parser.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse bytes into a key event.
    ///
    /// Returns the event and number of bytes consumed, or an error.
    /// Call repeatedly on the remaining input until `Err(ParseError::Empty)`
    /// or `Err(ParseError::Incomplete)` is returned.
    pub fn parse(&mut self, input: &[u8]) -> ParseResult {
        let Some(&first) = input.first() else {
            return Err(ParseError::Empty);
        };

        match first {
            0x1b => self.parse_escape(input),
            0x00 => Ok((KeyEvent::key(KeyCode::Null), 1)),
            // Checked before the Ctrl+letter range they fall in.
            0x08 => Ok((KeyEvent::key(KeyCode::Backspace), 1)),
            0x09 => Ok((KeyEvent::key(KeyCode::Tab), 1)),
            0x0d => Ok((KeyEvent::key(KeyCode::Enter), 1)),
            0x01..=0x1a => {
                let c = (first - 1 + b'a') as char;
                Ok((KeyEvent::ctrl_char(c), 1))
            }
            0x1c..=0x1f => Err(ParseError::UnrecognizedSequence(vec![first])),
            0x7f => Ok((KeyEvent::key(KeyCode::Backspace), 1)),
            0x20..=0x7e => Ok((KeyEvent::char(first as char), 1)),
            0x80..=0xff => self.parse_utf8(input),
        }
    }

    /// Parse an escape sequence.
    fn parse_escape(&mut self, input: &[u8]) -> ParseResult {
        if input.len() == 1 {
            // Could be just Escape or start of sequence
            return Err(ParseError::Incomplete);
        }

        match input[1] {
            b'[' => self.parse_csi(input),
            b'O' => self.parse_ss3(input),
            // Alt+key: ESC <char>
            0x20..=0x7e => {
                let c = input[1] as char;
                Ok((KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT), 2))
            }
            _ => Ok((KeyEvent::key(KeyCode::Esc), 1)),
        }
    }

    /// Parse a CSI sequence (ESC [ ...).
    fn parse_csi(&mut self, input: &[u8]) -> ParseResult {
        // Find the final byte (0x40-0x7e)
        let end = match input[2..].iter().position(|b| (0x40..=0x7e).contains(b)) {
            Some(offset) => offset + 2,
            None if input.len() >= MAX_SEQUENCE_LEN => {
                return Err(ParseError::UnrecognizedSequence(
                    input[..MAX_SEQUENCE_LEN].to_vec(),
                ));
            }
            None => return Err(ParseError::Incomplete),
        };

        let sequence = &input[..=end];
        let params = &input[2..end];
        let consumed = end + 1;

        let code = match input[end] {
            b'A' => KeyCode::Up,
            b'B' => KeyCode::Down,
            b'C' => KeyCode::Right,
            b'D' => KeyCode::Left,
            b'H' => KeyCode::Home,
            b'F' => KeyCode::End,
            b'~' => return self.parse_tilde_key(params, sequence),
            _ => return Err(ParseError::UnrecognizedSequence(sequence.to_vec())),
        };

        let modifiers = parse_modifiers(params)
            .ok_or_else(|| ParseError::UnrecognizedSequence(sequence.to_vec()))?;
        Ok((KeyEvent::new(code, modifiers), consumed))
    }

    /// Parse tilde key sequences (Insert, Delete, Page Up/Down, F5+).
    fn parse_tilde_key(&mut self, params: &[u8], sequence: &[u8]) -> ParseResult {
        let unrecognized = || ParseError::UnrecognizedSequence(sequence.to_vec());

        let s = std::str::from_utf8(params).map_err(|_| unrecognized())?;
        let num: u8 = s
            .split(';')
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(unrecognized)?;
        let modifiers = parse_modifiers(params).ok_or_else(unrecognized)?;

        let code = match num {
            1 | 7 => KeyCode::Home,
            2 => KeyCode::Insert,
            3 => KeyCode::Delete,
            4 | 8 => KeyCode::End,
            5 => KeyCode::PageUp,
            6 => KeyCode::PageDown,
            15 => KeyCode::F(5),
            17 => KeyCode::F(6),
            18 => KeyCode::F(7),
            19 => KeyCode::F(8),
            20 => KeyCode::F(9),
            21 => KeyCode::F(10),
            23 => KeyCode::F(11),
            24 => KeyCode::F(12),
            _ => return Err(unrecognized()),
        };

        Ok((KeyEvent::new(code, modifiers), sequence.len()))
    }

    /// Parse SS3 sequences (ESC O ...).
    fn parse_ss3(&mut self, input: &[u8]) -> ParseResult {
        if input.len() < 3 {
            return Err(ParseError::Incomplete);
        }

        let code = match input[2] {
            b'P' => KeyCode::F(1),
            b'Q' => KeyCode::F(2),
            b'R' => KeyCode::F(3),
            b'S' => KeyCode::F(4),
            b'A' => KeyCode::Up,
            b'B' => KeyCode::Down,
            b'C' => KeyCode::Right,
            b'D' => KeyCode::Left,
            b'H' => KeyCode::Home,
            b'F' => KeyCode::End,
            b'M' => KeyCode::Enter,
            _ => return Err(ParseError::UnrecognizedSequence(input[..3].to_vec())),
        };

        Ok((KeyEvent::key(code), 3))
    }

    /// Parse a UTF-8 character sequence.
    fn parse_utf8(&self, input: &[u8]) -> ParseResult {
        let first = input[0];

        let expected_len = if first & 0b1110_0000 == 0b1100_0000 {
            2
        } else if first & 0b1111_0000 == 0b1110_0000 {
            3
        } else if first & 0b1111_1000 == 0b1111_0000 {
            4
        } else {
            return Err(ParseError::InvalidUtf8);
        };

        if input.len() < expected_len {
            // Reject early when the bytes seen so far cannot continue.
            if input[1..].iter().any(|b| b & 0b1100_0000 != 0b1000_0000) {
                return Err(ParseError::InvalidUtf8);
            }
            return Err(ParseError::Incomplete);
        }

        let s = std::str::from_utf8(&input[..expected_len]).map_err(|_| ParseError::InvalidUtf8)?;
        let c = s.chars().next().ok_or(ParseError::InvalidUtf8)?;

        Ok((KeyEvent::char(c), expected_len))
    }
}

/// Decode the xterm modifier parameter from `1;N` style CSI params.
///
/// `N = 1 + shift + 2*alt + 4*ctrl`. Empty or single-number params carry no
/// modifiers; `None` means the params are malformed.
fn parse_modifiers(params: &[u8]) -> Option<KeyModifiers> {
    if params.is_empty() {
        return Some(KeyModifiers::empty());
    }
    let s = std::str::from_utf8(params).ok()?;
    let mut parts = s.split(';');
    let first = parts.next()?;
    if !first.is_empty() && first.parse::<u16>().is_err() {
        return None;
    }
    let Some(modifier) = parts.next() else {
        return Some(KeyModifiers::empty());
    };
    let n = modifier.parse::<u8>().ok()?.saturating_sub(1);

    let mut mods = KeyModifiers::empty();
    if n & 1 != 0 {
        mods |= KeyModifiers::SHIFT;
    }
    if n & 2 != 0 {
        mods |= KeyModifiers::ALT;
    }
    if n & 4 != 0 {
        mods |= KeyModifiers::CTRL;
    }
    Some(mods)
}
