//! Editor input events.
//!
//! [`InputEvent`] is the closed set of things the session reacts to. Key
//! events from the parser are classified into it by [`InputEvent::from_key`]
//! and [`InputDecoder`] does the whole bytes-to-events step for a stream.

use crate::input::keyboard::{KeyCode, KeyEvent};
use crate::input::parser::{InputParser, ParseError};
use unicode_width::UnicodeWidthChar;

/// An input event delivered to the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// A character to insert; Enter arrives as `'\n'` and Tab as `'\t'`.
    Printable(char),
    /// Delete the character before each cursor.
    Backspace,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// Add a cursor above every cursor (Ctrl-K).
    CloneUp,
    /// Add a cursor below every cursor (Ctrl-J).
    CloneDown,
    /// The terminal changed size.
    Resize { width: u16, height: u16 },
    /// Ctrl-C: leave the editor.
    Interrupt,
    /// Bytes that map to no action.
    Unhandled(Vec<u8>),
}

impl InputEvent {
    /// Classify a parsed key. `raw` holds the bytes the key was parsed from
    /// and is kept for [`InputEvent::Unhandled`].
    #[must_use]
    pub fn from_key(key: KeyEvent, raw: &[u8]) -> Self {
        if key.is_ctrl_c() {
            return Self::Interrupt;
        }
        if key.is_ctrl('j') {
            return Self::CloneDown;
        }
        if key.is_ctrl('k') {
            return Self::CloneUp;
        }
        if let Some(c) = key.plain_char() {
            return if c.width() == Some(1) {
                Self::Printable(c)
            } else {
                Self::Unhandled(raw.to_vec())
            };
        }
        match key.code {
            KeyCode::Backspace => Self::Backspace,
            KeyCode::Enter => Self::Printable('\n'),
            KeyCode::Tab => Self::Printable('\t'),
            KeyCode::Up => Self::ArrowUp,
            KeyCode::Down => Self::ArrowDown,
            KeyCode::Left => Self::ArrowLeft,
            KeyCode::Right => Self::ArrowRight,
            _ => Self::Unhandled(raw.to_vec()),
        }
    }

    /// Check if this is the interrupt event.
    #[must_use]
    pub fn is_interrupt(&self) -> bool {
        matches!(self, Self::Interrupt)
    }
}

/// Incremental decoder from raw bytes to [`InputEvent`]s.
///
/// Bytes of a sequence split across reads are held back until the rest
/// arrives or [`flush`](Self::flush) gives up on them.
#[derive(Debug, Default)]
pub struct InputDecoder {
    parser: InputParser,
    pending: Vec<u8>,
}

impl InputDecoder {
    /// Create an empty decoder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk of bytes and return every complete event in it.
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<InputEvent> {
        self.pending.extend_from_slice(bytes);

        let mut events = Vec::new();
        let mut offset = 0;
        while offset < self.pending.len() {
            let rest = &self.pending[offset..];
            match self.parser.parse(rest) {
                Ok((key, consumed)) => {
                    events.push(InputEvent::from_key(key, &rest[..consumed]));
                    offset += consumed;
                }
                Err(ParseError::UnrecognizedSequence(seq)) => {
                    offset += seq.len().max(1);
                    events.push(InputEvent::Unhandled(seq));
                }
                Err(ParseError::InvalidUtf8) => {
                    events.push(InputEvent::Unhandled(vec![rest[0]]));
                    offset += 1;
                }
                Err(ParseError::Incomplete | ParseError::Empty) => break,
            }
        }
        self.pending.drain(..offset);
        events
    }

    /// Give up on held-back bytes, reporting them as unhandled.
    pub fn flush(&mut self) -> Option<InputEvent> {
        if self.pending.is_empty() {
            None
        } else {
            Some(InputEvent::Unhandled(std::mem::take(&mut self.pending)))
        }
    }

    /// Check if bytes are held back waiting for the rest of a sequence.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}
