//! Rendering seam between prompt state machines and the terminal.
//!
//! Prompts never draw directly; every transition hands a frame to a
//! [`Render`] implementation. [`TermRenderer`] paints frames on stderr with
//! in-place repaints, and the engine's tests substitute a recording
//! implementation.

use crate::paginate::Page;
use crate::settings;
use crossterm::cursor::{MoveToColumn, MoveUp};
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use std::io::{self, IsTerminal, Write};

/// Frame consumer for prompt output.
pub trait Render {
    /// Paint the question plus the paginated choice window.
    fn select_frame(&mut self, message: &str, page: &Page, total_lines: usize) -> io::Result<()>;

    /// Paint the question, the in-progress draft line, and any rejection
    /// message from the previous submission.
    fn text_frame(
        &mut self,
        message: &str,
        draft: &str,
        rejection: Option<&str>,
    ) -> io::Result<()>;

    /// Paint the final answered line after a run resolves.
    fn submitted(&mut self, message: &str, answer: &str) -> io::Result<()>;
}

/// Crossterm stderr renderer with in-place frame repaints.
#[derive(Debug)]
pub struct TermRenderer {
    color: bool,
    /// Rows painted by the previous frame, for the MoveUp/Clear repaint.
    previous_rows: usize,
}

impl TermRenderer {
    pub fn new(color: bool) -> Self {
        Self {
            color: color && io::stderr().is_terminal(),
            previous_rows: 0,
        }
    }

    fn clear_previous(&mut self, stderr: &mut io::Stderr) -> io::Result<()> {
        if self.previous_rows > 0 {
            stderr.queue(MoveUp(self.previous_rows as u16))?;
        }
        stderr.queue(MoveToColumn(0))?;
        stderr.queue(Clear(ClearType::FromCursorDown))?;
        Ok(())
    }

    fn write_message(&self, stderr: &mut io::Stderr, message: &str) -> io::Result<()> {
        if self.color {
            stderr.queue(PrintStyledContent(
                settings::GLYPH_SECTION_BULLET
                    .with(settings::COLOR_SECTION_BULLET)
                    .bold(),
            ))?;
            stderr.queue(Print(" "))?;
            stderr.queue(PrintStyledContent(
                message.with(settings::COLOR_MESSAGE).bold(),
            ))?;
        } else {
            stderr.queue(Print(format!(
                "{} {message}",
                settings::GLYPH_SECTION_BULLET
            )))?;
        }
        Ok(())
    }
}

impl Render for TermRenderer {
    fn select_frame(&mut self, message: &str, page: &Page, total_lines: usize) -> io::Result<()> {
        let mut stderr = io::stderr();
        self.clear_previous(&mut stderr)?;

        self.write_message(&mut stderr, message)?;
        let mut rows = 1usize;

        for line in &page.window {
            stderr.queue(Print("\r\n"))?;
            stderr.queue(Print(line))?;
            rows += 1;
        }

        if total_lines > page.window.len() {
            stderr.queue(Print("\r\n"))?;
            if self.color {
                stderr.queue(PrintStyledContent(
                    settings::MORE_CHOICES_HINT.with(settings::COLOR_HINT),
                ))?;
            } else {
                stderr.queue(Print(settings::MORE_CHOICES_HINT))?;
            }
            rows += 1;
        }

        stderr.flush()?;
        self.previous_rows = rows.saturating_sub(1);
        Ok(())
    }

    fn text_frame(
        &mut self,
        message: &str,
        draft: &str,
        rejection: Option<&str>,
    ) -> io::Result<()> {
        let mut stderr = io::stderr();
        self.clear_previous(&mut stderr)?;

        self.write_message(&mut stderr, message)?;
        let mut rows = 1usize;

        if let Some(rejection) = rejection {
            stderr.queue(Print("\r\n"))?;
            if self.color {
                stderr.queue(PrintStyledContent(
                    format!("{}{rejection}", settings::INDENT_1)
                        .with(settings::COLOR_REJECTION),
                ))?;
            } else {
                stderr.queue(Print(format!("{}{rejection}", settings::INDENT_1)))?;
            }
            rows += 1;
        }

        stderr.queue(Print("\r\n"))?;
        stderr.queue(Print(format!("{}{draft}", settings::TEXT_PROMPT_SYMBOL)))?;
        rows += 1;

        stderr.flush()?;
        self.previous_rows = rows.saturating_sub(1);
        Ok(())
    }

    fn submitted(&mut self, message: &str, answer: &str) -> io::Result<()> {
        let mut stderr = io::stderr();
        self.clear_previous(&mut stderr)?;

        let marker = settings::answered_marker(self.color);
        // Multi-line answers collapse to their first line in the summary row.
        let summary = answer.lines().next().unwrap_or_default();
        if self.color {
            stderr.queue(PrintStyledContent(
                marker.with(settings::COLOR_SECTION_BULLET).bold(),
            ))?;
            stderr.queue(Print(" "))?;
            stderr.queue(PrintStyledContent(message.with(settings::COLOR_MESSAGE)))?;
            stderr.queue(Print(" "))?;
            stderr.queue(PrintStyledContent(summary.with(settings::COLOR_ANSWER)))?;
        } else {
            stderr.queue(Print(format!("{marker} {message} {summary}")))?;
        }
        stderr.queue(Print("\r\n"))?;

        stderr.flush()?;
        self.previous_rows = 0;
        Ok(())
    }
}

/// Renderer that discards every frame.
///
/// Useful when a caller only wants the resolved answer, and in tests that
/// exercise state machines without asserting on frames.
#[derive(Debug, Default)]
pub struct NullRender;

impl Render for NullRender {
    fn select_frame(&mut self, _message: &str, _page: &Page, _total: usize) -> io::Result<()> {
        Ok(())
    }

    fn text_frame(&mut self, _message: &str, _draft: &str, _rejection: Option<&str>) -> io::Result<()> {
        Ok(())
    }

    fn submitted(&mut self, _message: &str, _answer: &str) -> io::Result<()> {
        Ok(())
    }
}
