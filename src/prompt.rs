//! Prompt construction input.
//!
//! A [`PromptConfig`] describes one prompt run: the question, optional
//! choices, default resolution input, and the filter/validate hooks. It is
//! consumed by [`crate::select::SelectPrompt`] or [`crate::text::TextPrompt`]
//! and is immutable for the duration of a run.

use crate::choice::RawChoice;
use crate::pipeline::{FilterFn, Transform, ValidateFn, Verdict};

/// Default selection, resolved once at prompt construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultValue {
    /// Cursor index into the selectable subsequence.
    Index(usize),
    /// Matched against selectable values.
    Value(String),
}

/// Builder-style configuration for one prompt run.
pub struct PromptConfig {
    pub(crate) message: String,
    pub(crate) choices: Option<Vec<RawChoice>>,
    pub(crate) default: Option<DefaultValue>,
    pub(crate) filter: Option<FilterFn>,
    pub(crate) validate: Option<ValidateFn>,
    pub(crate) page_size: Option<usize>,
}

impl PromptConfig {
    /// Start a config with the question shown to the user.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            choices: None,
            default: None,
            filter: None,
            validate: None,
            page_size: None,
        }
    }

    /// Supply raw choices (required for selection prompts).
    pub fn choices<I, C>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<RawChoice>,
    {
        self.choices = Some(choices.into_iter().map(Into::into).collect());
        self
    }

    /// Pre-select by cursor index; out-of-range falls back to 0 silently.
    pub fn default_index(mut self, index: usize) -> Self {
        self.default = Some(DefaultValue::Index(index));
        self
    }

    /// Pre-select by value; an unmatched value falls back to 0 silently.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(DefaultValue::Value(value.into()));
        self
    }

    /// Transform the submitted value before validation.
    pub fn filter<F>(mut self, filter: F) -> Self
    where
        F: FnMut(String) -> Transform<String> + Send + 'static,
    {
        self.filter = Some(Box::new(filter));
        self
    }

    /// Accept or reject the filtered value.
    pub fn validate<F>(mut self, validate: F) -> Self
    where
        F: FnMut(&str) -> Transform<Verdict> + Send + 'static,
    {
        self.validate = Some(Box::new(validate));
        self
    }

    /// Override the visible window height in rendered lines.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// The question shown to the user.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Debug for PromptConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptConfig")
            .field("message", &self.message)
            .field("choices", &self.choices)
            .field("default", &self.default)
            .field("filter", &self.filter.is_some())
            .field("validate", &self.validate.is_some())
            .field("page_size", &self.page_size)
            .finish()
    }
}
