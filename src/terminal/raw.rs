//! Raw mode terminal handling.
//!
//! Raw mode turns off line buffering, echo and signal generation so every
//! key press (including Ctrl-C) reaches the editor as bytes. Reads time out
//! after a short interval instead of blocking forever, which lets the input
//! thread notice terminal resizes between key presses.
//!
//! # Safety
//! This module uses unsafe code for FFI calls to libc termios functions.

#![allow(unsafe_code)]
#![allow(clippy::borrow_as_ptr)]

use std::io;
use std::os::unix::io::{AsRawFd, RawFd};

/// Read timeout used by [`enable_raw_mode`], in tenths of a second.
pub const DEFAULT_READ_TIMEOUT: u8 = 1;

/// Saved terminal state for restoration.
#[derive(Debug)]
pub struct RawModeGuard {
    fd: RawFd,
    original: libc::termios,
}

impl RawModeGuard {
    /// Enter raw mode on the given file descriptor with the default read
    /// timeout.
    ///
    /// Returns a guard that will restore the terminal state when dropped.
    pub fn new<F: AsRawFd>(fd: &F) -> io::Result<Self> {
        Self::with_read_timeout(fd, DEFAULT_READ_TIMEOUT)
    }

    /// Enter raw mode; `read(2)` returns after `deciseconds` with no input.
    pub fn with_read_timeout<F: AsRawFd>(fd: &F, deciseconds: u8) -> io::Result<Self> {
        let fd = fd.as_raw_fd();
        let original = get_termios(fd)?;

        let mut raw = original;
        make_raw(&mut raw, deciseconds);
        set_termios(fd, &raw)?;

        Ok(Self { fd, original })
    }

    fn restore(&self) -> io::Result<()> {
        set_termios(self.fd, &self.original)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Rewrite `termios` flags for raw input.
///
/// Enter arrives as CR (ICRNL off) and Ctrl-C as byte 3 (ISIG off).
fn make_raw(termios: &mut libc::termios, deciseconds: u8) {
    termios.c_iflag &= !(libc::BRKINT | libc::ICRNL | libc::INPCK | libc::ISTRIP | libc::IXON);
    termios.c_oflag &= !libc::OPOST;
    termios.c_cflag |= libc::CS8;
    termios.c_lflag &= !(libc::ECHO | libc::ICANON | libc::IEXTEN | libc::ISIG);
    termios.c_cc[libc::VMIN] = 0;
    termios.c_cc[libc::VTIME] = deciseconds;
}

/// Enter raw mode for stdin.
///
/// Returns a guard that restores the terminal when dropped.
pub fn enable_raw_mode() -> io::Result<RawModeGuard> {
    RawModeGuard::new(&io::stdin())
}

/// Check if the given file descriptor is a TTY.
#[must_use]
pub fn is_tty<F: AsRawFd>(fd: &F) -> bool {
    // SAFETY: isatty is safe to call with any fd
    unsafe { libc::isatty(fd.as_raw_fd()) == 1 }
}

/// Get the terminal size as `(columns, rows)`.
///
/// Zero dimensions are reported as an error.
pub fn terminal_size() -> io::Result<(u16, u16)> {
    let mut size: libc::winsize = unsafe { std::mem::zeroed() };

    // SAFETY: ioctl with TIOCGWINSZ is safe when passed a valid winsize struct
    let result = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut size) };

    if result == -1 {
        Err(io::Error::last_os_error())
    } else if size.ws_col == 0 || size.ws_row == 0 {
        Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "terminal reported zero dimensions",
        ))
    } else {
        Ok((size.ws_col, size.ws_row))
    }
}

fn get_termios(fd: RawFd) -> io::Result<libc::termios> {
    let mut termios: libc::termios = unsafe { std::mem::zeroed() };

    // SAFETY: tcgetattr is safe when passed a valid termios struct
    let result = unsafe { libc::tcgetattr(fd, &mut termios) };

    if result == -1 {
        Err(io::Error::last_os_error())
    } else {
        Ok(termios)
    }
}

fn set_termios(fd: RawFd, termios: &libc::termios) -> io::Result<()> {
    // SAFETY: tcsetattr is safe when passed a valid termios struct
    let result = unsafe { libc::tcsetattr(fd, libc::TCSAFLUSH, termios) };

    if result == -1 {
        Err(io::Error::last_os_error())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::os::unix::io::FromRawFd;

    fn create_pipe() -> io::Result<(File, File)> {
        let mut fds = [0i32; 2];
        let result = unsafe { libc::pipe(fds.as_mut_ptr()) };
        if result == -1 {
            return Err(io::Error::last_os_error());
        }
        // SAFETY: pipe() succeeded, so fds are valid
        let read_file = unsafe { File::from_raw_fd(fds[0]) };
        let write_file = unsafe { File::from_raw_fd(fds[1]) };
        Ok((read_file, write_file))
    }

    #[test]
    fn test_make_raw_clears_line_discipline() {
        let mut termios: libc::termios = unsafe { std::mem::zeroed() };
        termios.c_iflag = libc::ICRNL | libc::IXON;
        termios.c_lflag = libc::ECHO | libc::ICANON | libc::ISIG;
        termios.c_oflag = libc::OPOST;

        make_raw(&mut termios, 3);

        assert_eq!(termios.c_iflag & (libc::ICRNL | libc::IXON), 0);
        assert_eq!(termios.c_lflag & (libc::ECHO | libc::ICANON | libc::ISIG), 0);
        assert_eq!(termios.c_oflag & libc::OPOST, 0);
        assert_ne!(termios.c_cflag & libc::CS8, 0);
        assert_eq!(termios.c_cc[libc::VMIN], 0);
        assert_eq!(termios.c_cc[libc::VTIME], 3);
    }

    #[test]
    fn test_is_tty_pipe_returns_false() {
        let (read_fd, write_fd) = create_pipe().expect("Failed to create pipe");
        assert!(!is_tty(&read_fd));
        assert!(!is_tty(&write_fd));
    }

    #[test]
    fn test_raw_mode_guard_new_on_pipe_fails() {
        let (read_fd, _write_fd) = create_pipe().expect("Failed to create pipe");
        assert!(RawModeGuard::new(&read_fd).is_err());
    }

    #[test]
    fn test_get_termios_with_invalid_fd_fails() {
        assert!(get_termios(-1).is_err());
    }

    #[test]
    fn test_terminal_size_valid_dimensions() {
        // Fails without a TTY; only the success shape is checked.
        if let Ok((cols, rows)) = terminal_size() {
            assert!(cols > 0);
            assert!(rows > 0);
        }
    }
}
