//! Fuzz target for the key input parser and decoder.
//!
//! Arbitrary bytes from the terminal must never panic, and every parse step
//! must consume at least one byte.

#![no_main]

use libfuzzer_sys::fuzz_target;
use ten::input::{InputDecoder, InputParser, ParseError};

fuzz_target!(|data: &[u8]| {
    let mut parser = InputParser::new();
    let mut remaining = data;

    while !remaining.is_empty() {
        match parser.parse(remaining) {
            Ok((_event, consumed)) => {
                assert!(consumed > 0 && consumed <= remaining.len());
                remaining = &remaining[consumed..];
            }
            Err(ParseError::UnrecognizedSequence(seq)) => {
                assert!(!seq.is_empty() && seq.len() <= remaining.len());
                remaining = &remaining[seq.len()..];
            }
            Err(ParseError::InvalidUtf8) => remaining = &remaining[1..],
            Err(ParseError::Incomplete | ParseError::Empty) => break,
        }
    }

    // Feeding in two halves must not lose bytes either.
    let mid = data.len() / 2;
    let mut decoder = InputDecoder::new();
    let mut events = decoder.feed(&data[..mid]);
    events.extend(decoder.feed(&data[mid..]));
    events.extend(decoder.flush());
    assert!(events.len() <= data.len());
    assert!(!decoder.has_pending());
});
