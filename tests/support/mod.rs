//! Shared test support: a frame-recording renderer for driving prompts with
//! scripted events and asserting on what would have been drawn.

use promptline::paginate::Page;
use promptline::render::Render;
use std::io;

/// One recorded frame, mirroring the `Render` trait surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Select {
        message: String,
        window: Vec<String>,
        scroll_offset: usize,
        total_lines: usize,
    },
    Text {
        message: String,
        draft: String,
        rejection: Option<String>,
    },
    Submitted {
        message: String,
        answer: String,
    },
}

/// Renderer that records every frame instead of drawing it.
#[derive(Debug, Default)]
pub struct RecordingRender {
    pub frames: Vec<Frame>,
}

impl RecordingRender {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent frame; panics when nothing was rendered.
    pub fn last(&self) -> &Frame {
        self.frames.last().expect("no frames recorded")
    }

    /// Windows of every select frame, in render order.
    pub fn select_windows(&self) -> Vec<&[String]> {
        self.frames
            .iter()
            .filter_map(|frame| match frame {
                Frame::Select { window, .. } => Some(window.as_slice()),
                _ => None,
            })
            .collect()
    }

    /// Rejection messages of every text frame that carried one.
    pub fn rejections(&self) -> Vec<&str> {
        self.frames
            .iter()
            .filter_map(|frame| match frame {
                Frame::Text {
                    rejection: Some(rejection),
                    ..
                } => Some(rejection.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Render for RecordingRender {
    fn select_frame(&mut self, message: &str, page: &Page, total_lines: usize) -> io::Result<()> {
        self.frames.push(Frame::Select {
            message: message.to_string(),
            window: page.window.clone(),
            scroll_offset: page.scroll_offset,
            total_lines,
        });
        Ok(())
    }

    fn text_frame(&mut self, message: &str, draft: &str, rejection: Option<&str>) -> io::Result<()> {
        self.frames.push(Frame::Text {
            message: message.to_string(),
            draft: draft.to_string(),
            rejection: rejection.map(str::to_string),
        });
        Ok(())
    }

    fn submitted(&mut self, message: &str, answer: &str) -> io::Result<()> {
        self.frames.push(Frame::Submitted {
            message: message.to_string(),
            answer: answer.to_string(),
        });
        Ok(())
    }
}
