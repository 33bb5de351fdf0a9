//! Selection prompt state machine.
//!
//! Combines a [`ChoiceList`], the pure paginator, and keypress/line events
//! into one `Active -> Submitted` machine. Movement wraps modulo the
//! selectable subsequence; line-offset math works in rendered lines so
//! multi-line labels never desynchronize pagination from the cursor.

use crate::choice::{Choice, ChoiceList};
use crate::error::ConfigError;
use crate::events::{InputSource, Key, KeyPress, PromptEvent};
use crate::paginate::{paginate, Page};
use crate::prompt::{DefaultValue, PromptConfig};
use crate::render::Render;
use crate::settings;
use std::io;
use tracing::debug;

/// Lifecycle of one prompt run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptState {
    Active,
    Submitted,
}

/// Interactive list picker resolving to one choice value per run.
#[derive(Debug)]
pub struct SelectPrompt {
    message: String,
    choices: ChoiceList,
    /// Index into the selectable subsequence.
    cursor: usize,
    page_size: usize,
    state: PromptState,
}

impl SelectPrompt {
    /// Build the prompt, normalizing choices and resolving the default.
    ///
    /// Fails when `choices` is missing, empty, or has no selectable entry.
    /// An unmatched or out-of-range default silently falls back to index 0.
    pub fn new(config: PromptConfig) -> Result<Self, ConfigError> {
        let choices = ChoiceList::new(config.choices)?;
        let cursor = resolve_default(&choices, config.default.as_ref());
        Ok(Self {
            message: config.message,
            choices,
            cursor,
            page_size: config.page_size.unwrap_or(settings::DEFAULT_PAGE_SIZE),
            state: PromptState::Active,
        })
    }

    /// The question shown to the user.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Current cursor index into the selectable subsequence.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PromptState {
        self.state
    }

    /// Reset the cursor to the first selectable entry.
    ///
    /// The machine never resets itself between runs; callers that want a
    /// fresh cursor after `Submitted` call this explicitly.
    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    /// Apply one keypress; returns true when the cursor moved.
    ///
    /// Unrecognized keys cause no transition. Keys after submission are
    /// ignored.
    pub fn handle_key(&mut self, key: &KeyPress) -> bool {
        if self.state == PromptState::Submitted {
            return false;
        }

        let len = self.choices.selectable_len();
        let next = match (key.name, key.ctrl) {
            (Key::Down, false) | (Key::Char('n'), true) | (Key::Char('j'), false) => {
                Some((self.cursor + 1) % len)
            }
            (Key::Up, false) | (Key::Char('p'), true) | (Key::Char('k'), false) => {
                Some((self.cursor + len - 1) % len)
            }
            (Key::Char(digit @ '1'..='9'), false) => self.choices.shortcut(digit),
            _ => None,
        };

        match next {
            Some(cursor) if cursor != self.cursor => {
                debug!(from = self.cursor, to = cursor, "cursor moved");
                self.cursor = cursor;
                true
            }
            _ => false,
        }
    }

    /// Transition to `Submitted` and return the active choice's value.
    pub fn submit(&mut self) -> String {
        self.state = PromptState::Submitted;
        let answer = self
            .choices
            .selectable_value(self.cursor)
            .unwrap_or_default()
            .to_string();
        debug!(cursor = self.cursor, "selection submitted");
        answer
    }

    /// Render every choice to terminal lines, pointer included.
    ///
    /// Multi-line labels contribute one rendered line per label line; only
    /// the first line of the active choice carries the pointer.
    pub fn rendered_lines(&self) -> Vec<String> {
        let active_raw = self.choices.raw_index_of(self.cursor);
        let mut lines = Vec::new();
        for (raw_index, choice) in self.choices.iter().enumerate() {
            let active = active_raw == Some(raw_index);
            for (line_index, label_line) in choice.name().split('\n').enumerate() {
                let prefix = if active && line_index == 0 {
                    settings::POINTER
                } else {
                    " "
                };
                let suffix = match choice {
                    Choice::Disabled { .. } if line_index == 0 => settings::DISABLED_SUFFIX,
                    _ => "",
                };
                lines.push(format!("{prefix} {label_line}{suffix}"));
            }
        }
        lines
    }

    /// Visual-line offset of the active choice, fed to the paginator.
    ///
    /// Counts rendered lines cumulatively through the end of the active
    /// choice, minus one — so `["a\n\n", "b\n\n"]` yields 2 for the first
    /// entry and 5 for the second.
    pub fn line_offset(&self) -> usize {
        let Some(active_raw) = self.choices.raw_index_of(self.cursor) else {
            return 0;
        };
        let total: usize = self
            .choices
            .iter()
            .take(active_raw + 1)
            .map(|choice| choice.name().split('\n').count())
            .sum();
        total.saturating_sub(1)
    }

    /// Compute the current visible window.
    pub fn page(&self) -> Page {
        paginate(&self.rendered_lines(), self.line_offset(), self.page_size)
    }

    /// Drive the prompt to resolution over an event source.
    ///
    /// Attaches to the source for the duration of the run and re-renders on
    /// every transition. The cursor is retained across runs; callers reset it
    /// explicitly when they want a fresh start.
    pub async fn run(
        &mut self,
        source: &mut InputSource,
        out: &mut dyn Render,
    ) -> io::Result<String> {
        self.state = PromptState::Active;
        let total_lines = self.rendered_lines().len();
        let mut input = source.attach();

        out.select_frame(&self.message, &self.page(), total_lines)?;

        while let Some(event) = input.next().await {
            match event {
                PromptEvent::Key(key) => {
                    if self.handle_key(&key) {
                        out.select_frame(&self.message, &self.page(), total_lines)?;
                    }
                }
                PromptEvent::Line(_) => {
                    let answer = self.submit();
                    out.submitted(&self.message, &answer)?;
                    return Ok(answer);
                }
            }
        }

        Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "event source closed before submission",
        ))
    }
}

/// Resolve the configured default into a concrete cursor index.
fn resolve_default(choices: &ChoiceList, default: Option<&DefaultValue>) -> usize {
    match default {
        Some(DefaultValue::Index(index)) if *index < choices.selectable_len() => *index,
        Some(DefaultValue::Value(value)) => choices.position_of_value(value).unwrap_or(0),
        _ => 0,
    }
}
