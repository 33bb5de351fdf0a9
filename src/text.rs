//! Free-text prompt.
//!
//! Echoes keystrokes as a draft line and resolves a submitted line through
//! the filter/validate pipeline. Rejection is not failure: the prompt clears
//! the draft, shows the rejection message, and waits for the next submission.

use crate::error::ConfigError;
use crate::events::{InputSource, Key, KeyPress, PromptEvent};
use crate::pipeline::{Outcome, Pipeline};
use crate::prompt::PromptConfig;
use crate::render::Render;
use crate::settings;
use std::io;
use tracing::debug;

/// Line-oriented input prompt with an async transform chain.
pub struct TextPrompt {
    message: String,
    pipeline: Pipeline,
    /// Display-only mirror of the line being typed. The submitted `Line`
    /// event carries the authoritative text.
    draft: String,
}

impl TextPrompt {
    /// Build the prompt; fails when the config carries selection-only fields.
    pub fn new(config: PromptConfig) -> Result<Self, ConfigError> {
        if config.choices.is_some() {
            return Err(ConfigError::Invalid(
                "text prompt does not take a `choices` list".into(),
            ));
        }
        Ok(Self {
            message: config.message,
            pipeline: Pipeline::new(config.filter, config.validate),
            draft: String::new(),
        })
    }

    /// The question shown to the user.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Total rejections recorded across this prompt's lifetime.
    pub fn rejections(&self) -> u32 {
        self.pipeline.rejections()
    }

    /// Mirror one keypress into the draft; returns true when it changed.
    fn edit_draft(&mut self, key: &KeyPress) -> bool {
        match (key.name, key.ctrl) {
            (Key::Char(ch), false) => {
                self.draft.push(ch);
                true
            }
            (Key::Backspace, false) => self.draft.pop().is_some(),
            _ => false,
        }
    }

    /// Drive the prompt to resolution over an event source.
    ///
    /// Each `Line` event runs one filter/validate cycle; the caller must not
    /// emit further events while a cycle is in flight. The run resolves with
    /// the first accepted (filtered) value.
    pub async fn run(
        &mut self,
        source: &mut InputSource,
        out: &mut dyn Render,
    ) -> io::Result<String> {
        let mut input = source.attach();
        let mut rejection: Option<String> = None;

        out.text_frame(&self.message, &self.draft, rejection.as_deref())?;

        while let Some(event) = input.next().await {
            match event {
                PromptEvent::Key(key) => {
                    if self.edit_draft(&key) {
                        out.text_frame(&self.message, &self.draft, rejection.as_deref())?;
                    }
                }
                PromptEvent::Line(raw) => match self.pipeline.process(&raw).await {
                    Outcome::Accepted(value) => {
                        debug!(rejections = self.pipeline.rejections(), "text prompt resolved");
                        out.submitted(&self.message, &value)?;
                        return Ok(value);
                    }
                    Outcome::Rejected { message, rejections } => {
                        debug!(rejections, "text prompt re-prompting");
                        rejection = Some(
                            message
                                .unwrap_or_else(|| settings::DEFAULT_REJECTION_MESSAGE.into()),
                        );
                        self.draft.clear();
                        out.text_frame(&self.message, &self.draft, rejection.as_deref())?;
                    }
                },
            }
        }

        Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "event source closed before submission",
        ))
    }
}

impl std::fmt::Debug for TextPrompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextPrompt")
            .field("message", &self.message)
            .field("draft", &self.draft)
            .field("pipeline", &self.pipeline)
            .finish()
    }
}
