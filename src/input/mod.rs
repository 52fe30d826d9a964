//! Keyboard input: byte parsing, event classification and the producer
//! thread feeding the session.

mod event;
mod keyboard;
mod parser;
mod reader;

pub use event::{InputDecoder, InputEvent};
pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
pub use parser::{InputParser, MAX_SEQUENCE_LEN, ParseError, ParseResult};
pub use reader::{SizeProbe, run_input_loop, spawn_input_thread};
