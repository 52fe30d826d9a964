//! Input producer thread.
//!
//! One thread owns the input stream, decodes it and pushes events into an
//! ordered channel; the session is the only consumer.

use crate::event::{LogLevel, emit_log};
use crate::input::event::{InputDecoder, InputEvent};
use std::io::{self, Read};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

/// Reports the current terminal size as `(width, height)`.
pub type SizeProbe = Box<dyn FnMut() -> Option<(u16, u16)> + Send>;

const READ_CHUNK: usize = 1024;

/// Spawn the input thread.
///
/// With a `size_probe`, an empty read is taken as a read timeout (raw mode
/// with `VMIN=0`): held-back bytes are flushed and the size is polled, and a
/// change is sent as [`InputEvent::Resize`]. Without one, an empty read is
/// end of input.
///
/// The thread stops after forwarding [`InputEvent::Interrupt`], at end of
/// input, or once the receiver is dropped.
pub fn spawn_input_thread<R>(
    reader: R,
    tx: Sender<InputEvent>,
    size_probe: Option<SizeProbe>,
) -> io::Result<JoinHandle<io::Result<()>>>
where
    R: Read + Send + 'static,
{
    thread::Builder::new()
        .name("ten-input".to_string())
        .spawn(move || run_input_loop(reader, &tx, size_probe))
}

/// Body of the input thread; runs on the caller's thread.
pub fn run_input_loop<R: Read>(
    mut reader: R,
    tx: &Sender<InputEvent>,
    mut size_probe: Option<SizeProbe>,
) -> io::Result<()> {
    let mut decoder = InputDecoder::new();
    let mut buf = [0u8; READ_CHUNK];
    let mut last_size = size_probe.as_mut().and_then(|probe| probe());

    loop {
        let n = match reader.read(&mut buf) {
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e)
                if size_probe.is_some()
                    && matches!(
                        e.kind(),
                        io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut
                    ) =>
            {
                0
            }
            Err(e) => {
                emit_log(LogLevel::Error, &format!("input read failed: {e}"));
                return Err(e);
            }
        };

        if n == 0 {
            if let Some(event) = decoder.flush() {
                if tx.send(event).is_err() {
                    return Ok(());
                }
            }
            let Some(probe) = size_probe.as_mut() else {
                emit_log(LogLevel::Debug, "input reached end of stream");
                return Ok(());
            };
            if let Some(size) = probe() {
                if last_size != Some(size) {
                    last_size = Some(size);
                    let (width, height) = size;
                    if tx.send(InputEvent::Resize { width, height }).is_err() {
                        return Ok(());
                    }
                }
            }
            continue;
        }

        for event in decoder.feed(&buf[..n]) {
            let interrupt = event.is_interrupt();
            if tx.send(event).is_err() || interrupt {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::io::Cursor;
    use std::sync::mpsc;

    /// Reader that returns scripted chunks, with empty chunks as timeouts.
    struct ScriptedReader {
        chunks: VecDeque<Vec<u8>>,
    }

    impl ScriptedReader {
        fn new(chunks: &[&[u8]]) -> Self {
            Self {
                chunks: chunks.iter().map(|c| c.to_vec()).collect(),
            }
        }
    }

    impl Read for ScriptedReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.chunks.pop_front() {
                Some(chunk) => {
                    buf[..chunk.len()].copy_from_slice(&chunk);
                    Ok(chunk.len())
                }
                // End of script: interrupt so the loop terminates.
                None => {
                    buf[0] = 0x03;
                    Ok(1)
                }
            }
        }
    }

    #[test]
    fn test_stops_at_eof() {
        let (tx, rx) = mpsc::channel();
        run_input_loop(Cursor::new(b"hi".to_vec()), &tx, None).unwrap();
        drop(tx);
        let events: Vec<_> = rx.iter().collect();
        assert_eq!(
            events,
            vec![InputEvent::Printable('h'), InputEvent::Printable('i')]
        );
    }

    #[test]
    fn test_stops_after_interrupt() {
        let (tx, rx) = mpsc::channel();
        run_input_loop(Cursor::new(b"a\x03b".to_vec()), &tx, None).unwrap();
        drop(tx);
        let events: Vec<_> = rx.iter().collect();
        assert_eq!(events, vec![InputEvent::Printable('a'), InputEvent::Interrupt]);
    }

    #[test]
    fn test_stops_when_receiver_dropped() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        run_input_loop(Cursor::new(b"abc".to_vec()), &tx, None).unwrap();
    }

    #[test]
    fn test_eof_flushes_partial_sequence() {
        let (tx, rx) = mpsc::channel();
        run_input_loop(Cursor::new(b"\x1b[".to_vec()), &tx, None).unwrap();
        drop(tx);
        let events: Vec<_> = rx.iter().collect();
        assert_eq!(events, vec![InputEvent::Unhandled(b"\x1b[".to_vec())]);
    }

    #[test]
    fn test_timeout_polls_size_changes() {
        let sizes = vec![(80, 24), (80, 24), (100, 30)];
        let mut sizes = sizes.into_iter();
        let probe: SizeProbe = Box::new(move || sizes.next().or(Some((100, 30))));

        let (tx, rx) = mpsc::channel();
        let reader = ScriptedReader::new(&[b"x", b"", b"", b""]);
        run_input_loop(reader, &tx, Some(probe)).unwrap();
        drop(tx);

        let events: Vec<_> = rx.iter().collect();
        assert_eq!(
            events,
            vec![
                InputEvent::Printable('x'),
                InputEvent::Resize {
                    width: 100,
                    height: 30
                },
                InputEvent::Interrupt,
            ]
        );
    }

    #[test]
    fn test_timeout_flushes_lone_escape() {
        let probe: SizeProbe = Box::new(|| None);
        let (tx, rx) = mpsc::channel();
        let reader = ScriptedReader::new(&[&[0x1b], b""]);
        run_input_loop(reader, &tx, Some(probe)).unwrap();
        drop(tx);

        let events: Vec<_> = rx.iter().collect();
        assert_eq!(
            events,
            vec![InputEvent::Unhandled(vec![0x1b]), InputEvent::Interrupt]
        );
    }

    #[test]
    fn test_spawned_thread_delivers_in_order() {
        let (tx, rx) = mpsc::channel();
        let handle = spawn_input_thread(Cursor::new(b"ab\x03".to_vec()), tx, None).unwrap();
        let events: Vec<_> = rx.iter().collect();
        handle.join().unwrap().unwrap();
        assert_eq!(events.len(), 3);
        assert!(events[2].is_interrupt());
    }
}
