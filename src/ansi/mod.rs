//! ANSI escape sequence generation.

pub mod output;
pub mod sequences;

pub use output::AnsiWriter;
pub use sequences::*;

use crate::style::TextAttributes;
use std::io::{self, Write};

/// Write a u32 as decimal digits without formatting overhead.
#[inline]
fn write_u32_decimal(w: &mut impl Write, n: u32) -> io::Result<()> {
    if n < 10 {
        return w.write_all(&[b'0' + n as u8]);
    }
    if n < 100 {
        return w.write_all(&[b'0' + (n / 10) as u8, b'0' + (n % 10) as u8]);
    }

    let mut buf = [0u8; 10];
    let mut i = buf.len();
    let mut val = n;
    while val > 0 {
        i -= 1;
        buf[i] = b'0' + (val % 10) as u8;
        val /= 10;
    }
    w.write_all(&buf[i..])
}

/// Write the SGR sequence that turns on `attrs`.
///
/// Writes nothing for an empty set.
pub fn write_attributes(w: &mut impl Write, attrs: TextAttributes) -> io::Result<()> {
    let mut codes: [&str; 4] = [""; 4];
    let mut count = 0;

    if attrs.contains(TextAttributes::BOLD) {
        codes[count] = "1";
        count += 1;
    }
    if attrs.contains(TextAttributes::DIM) {
        codes[count] = "2";
        count += 1;
    }
    if attrs.contains(TextAttributes::UNDERLINE) {
        codes[count] = "4";
        count += 1;
    }
    if attrs.contains(TextAttributes::INVERSE) {
        codes[count] = "7";
        count += 1;
    }

    if count == 0 {
        return Ok(());
    }

    w.write_all(b"\x1b[")?;
    for (i, code) in codes[..count].iter().enumerate() {
        if i > 0 {
            w.write_all(b";")?;
        }
        w.write_all(code.as_bytes())?;
    }
    w.write_all(b"m")
}

/// Write absolute cursor positioning (0-based row/col).
pub fn write_cursor_position(w: &mut impl Write, row: u32, col: u32) -> io::Result<()> {
    w.write_all(b"\x1b[")?;
    write_u32_decimal(w, row + 1)?;
    w.write_all(b";")?;
    write_u32_decimal(w, col + 1)?;
    w.write_all(b"H")
}
