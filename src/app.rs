//! The editing session: event dispatch, frame drawing and the main loop.
//!
//! A [`Session`] is the only owner of the [`Editor`]. The main loop takes
//! events from the input channel in order, applies each one fully, and
//! draws a frame once the queue is drained.

use crate::config::{EditorConfig, UnhandledInputPolicy};
use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_event, emit_log};
use crate::grid::{CellGrid, Surface};
use crate::input::InputEvent;
use crate::layout::{self, Layout};
use crate::renderer::Renderer;
use crate::style::Style;
use crate::text::{DocumentView, Editor};
use std::io::Write;
use std::sync::mpsc::Receiver;

/// Whether the session keeps running after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Editor state plus everything needed to present it.
#[derive(Debug)]
pub struct Session {
    editor: Editor,
    view: DocumentView,
    config: EditorConfig,
    width: u32,
    height: u32,
    too_small: bool,
}

impl Session {
    /// Start an empty session on a `width` x `height` screen.
    ///
    /// A screen below the minimum size is an error here; later resizes
    /// below it only show a notice.
    pub fn new(config: EditorConfig, width: u32, height: u32) -> Result<Self> {
        Self::with_editor(Editor::new(), config, width, height)
    }

    /// Start a session on existing editor state.
    pub fn with_editor(
        editor: Editor,
        config: EditorConfig,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        layout::check_size(width, height, &config)?;
        emit_log(LogLevel::Info, &format!("session started at {width}x{height}"));
        Ok(Self {
            editor,
            view: DocumentView::new(),
            config,
            width,
            height,
            too_small: false,
        })
    }

    /// The editor being driven.
    #[must_use]
    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// The current viewport.
    #[must_use]
    pub fn view(&self) -> &DocumentView {
        &self.view
    }

    /// Screen size as `(width, height)`.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Check if the screen is below the minimum size.
    #[must_use]
    pub fn is_too_small(&self) -> bool {
        self.too_small
    }

    /// Apply one event.
    pub fn handle(&mut self, event: InputEvent) -> Result<Flow> {
        match event {
            InputEvent::Printable('\n') => self.editor.insert_newline(),
            InputEvent::Printable(ch) => self.editor.insert_char(ch),
            InputEvent::Backspace => self.editor.delete_backward(),
            InputEvent::ArrowUp => self.editor.move_up(),
            InputEvent::ArrowDown => self.editor.move_down(),
            InputEvent::ArrowLeft => self.editor.move_left(),
            InputEvent::ArrowRight => self.editor.move_right(),
            InputEvent::CloneUp => self.editor.clone_up(),
            InputEvent::CloneDown => self.editor.clone_down(),
            InputEvent::Resize { width, height } => {
                self.resize(u32::from(width), u32::from(height));
            }
            InputEvent::Interrupt => return Ok(Flow::Exit),
            InputEvent::Unhandled(bytes) => match self.config.unhandled_input {
                UnhandledInputPolicy::Ignore => {
                    emit_log(LogLevel::Warn, &format!("ignoring unhandled input {bytes:?}"));
                }
                UnhandledInputPolicy::Fatal => return Err(Error::UnhandledInput(bytes)),
            },
        }
        Ok(Flow::Continue)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        match layout::check_size(width, height, &self.config) {
            Ok(()) => {
                if self.too_small {
                    emit_log(LogLevel::Info, "terminal large enough again");
                }
                self.too_small = false;
                emit_log(LogLevel::Info, &format!("resized to {width}x{height}"));
            }
            Err(err) => {
                self.too_small = true;
                emit_log(LogLevel::Warn, &err.to_string());
            }
        }
    }

    /// Status line text for the current state.
    #[must_use]
    pub fn status_text(&self) -> String {
        let cursors = self.editor.cursors();
        let primary = cursors.primary();
        let noun = if cursors.len() == 1 { "cursor" } else { "cursors" };
        format!(
            " ten  {} lines  {} {noun}  {}:{}",
            self.editor.document().len(),
            cursors.len(),
            primary.row + 1,
            primary.col + 1
        )
    }

    /// Draw the whole screen into `grid`, scrolling to the primary cursor.
    pub fn draw(&mut self, grid: &mut CellGrid) {
        grid.clear();
        let (width, height) = (grid.width(), grid.height());
        let line_count = self.editor.document().len();

        let layout = match Layout::compute(width, height, line_count, &self.config) {
            Ok(layout) => layout,
            Err(err) => {
                grid.draw_text(0, 0, &err.to_string(), Style::NONE);
                return;
            }
        };

        self.view
            .scroll_to(self.editor.cursors().primary().row, layout.text.height);

        if let Some(gutter) = layout.gutter {
            layout::draw_gutter(
                &mut grid.region(gutter),
                self.view.start_line,
                line_count,
                Style::dim(),
            );
        }

        self.view.draw(
            self.editor.document(),
            self.editor.cursors(),
            &mut grid.region(layout.text),
        );

        if let Some(status) = layout.status {
            let text = self.status_text();
            let mut region = grid.region(status);
            region.fill(Style::inverse());
            region.draw_text(0, 0, &text, Style::inverse());
        }

        emit_event(
            "frame",
            &format!(
                "lines={} cursors={}",
                line_count,
                self.editor.cursors().len()
            ),
        );
    }

    /// Draw a frame and present it.
    pub fn render<W: Write>(&mut self, renderer: &mut Renderer<W>) -> Result<()> {
        self.draw(renderer.buffer());
        renderer.present()?;
        Ok(())
    }

    fn dispatch<W: Write>(
        &mut self,
        event: InputEvent,
        renderer: &mut Renderer<W>,
    ) -> Result<Flow> {
        if let InputEvent::Resize { width, height } = event {
            renderer.resize(u32::from(width), u32::from(height))?;
        }
        self.handle(event)
    }

    /// Run until an interrupt arrives or the input channel closes.
    ///
    /// Events already queued are applied before the next frame is drawn,
    /// and the last batch is drawn before returning.
    pub fn run<W: Write>(
        &mut self,
        events: &Receiver<InputEvent>,
        renderer: &mut Renderer<W>,
    ) -> Result<()> {
        self.render(renderer)?;

        while let Ok(event) = events.recv() {
            let mut flow = self.dispatch(event, renderer)?;
            while flow == Flow::Continue {
                let Ok(event) = events.try_recv() else {
                    break;
                };
                flow = self.dispatch(event, renderer)?;
            }
            // The batch is drawn even when it ends in an interrupt.
            self.render(renderer)?;
            if flow == Flow::Exit {
                break;
            }
        }

        emit_log(LogLevel::Info, "session finished");
        Ok(())
    }
}
