//! `ten` binary: run the editor on the controlling terminal.
//!
//! Starts in raw mode on the alternate screen with one empty line and quits
//! on Ctrl-C. Settings come from `TEN_*` environment variables; see
//! [`ten::config`].

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Mutex;
use std::sync::mpsc;

use ten::input::{SizeProbe, spawn_input_thread};
use ten::terminal::{enable_raw_mode, is_tty, terminal_size};
use ten::{EditorConfig, LogLevel, Renderer, RendererOptions, Session, emit_log, set_log_callback};

fn install_log_file(path: &Path) -> io::Result<()> {
    let file: Mutex<File> = Mutex::new(OpenOptions::new().create(true).append(true).open(path)?);
    set_log_callback(move |level, message| {
        if let Ok(mut file) = file.lock() {
            let _ = writeln!(file, "[{level}] {message}");
        }
    });
    Ok(())
}

fn run(config: EditorConfig) -> ten::Result<()> {
    if !is_tty(&io::stdin()) || !is_tty(&io::stdout()) {
        return Err(io::Error::other("ten needs an interactive terminal").into());
    }

    let (width, height) = terminal_size()?;
    let mut session = Session::new(config.clone(), u32::from(width), u32::from(height))?;

    let _raw = enable_raw_mode()?;
    let options = RendererOptions {
        use_alt_screen: config.use_alt_screen,
        hide_cursor: true,
    };
    let mut renderer = Renderer::new(io::stdout(), u32::from(width), u32::from(height), options)?;

    let (tx, rx) = mpsc::channel();
    let probe: SizeProbe = Box::new(|| terminal_size().ok());
    // Not joined: the thread may sit in a read until the process exits.
    let _input = spawn_input_thread(io::stdin(), tx, Some(probe))?;

    let result = session.run(&rx, &mut renderer);
    renderer.cleanup()?;
    result
}

fn main() -> ExitCode {
    let config = match EditorConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("ten: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(path) = &config.log_file {
        if let Err(err) = install_log_file(path) {
            eprintln!("ten: cannot open log file {}: {err}", path.display());
            return ExitCode::FAILURE;
        }
    }

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            emit_log(LogLevel::Error, &err.to_string());
            eprintln!("ten: {err}");
            ExitCode::FAILURE
        }
    }
}
