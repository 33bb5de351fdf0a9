//! Choice normalization and addressing for selection prompts.
//!
//! Raw choice input (bare strings or `{name, value, disabled}` records) is
//! normalized once at construction into an ordered list of tagged entries.
//! Cursor movement and shortcut digits address only the selectable
//! subsequence; disabled entries stay visible but unreachable.

use crate::error::ConfigError;
use serde::Deserialize;

/// Raw choice data as supplied by callers (or deserialized from JSON).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RawChoice {
    /// A bare value doubling as its own display label.
    Bare(String),
    /// An explicit record; `name` falls back to `value` and vice versa.
    Record {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        value: Option<String>,
        #[serde(default)]
        disabled: bool,
    },
}

impl From<&str> for RawChoice {
    fn from(s: &str) -> Self {
        Self::Bare(s.to_string())
    }
}

impl From<String> for RawChoice {
    fn from(s: String) -> Self {
        Self::Bare(s)
    }
}

/// One normalized entry in a choice list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// Reachable by cursor movement; carries the answer payload.
    Selectable { name: String, value: String },
    /// Rendered for display only; never reachable by the cursor.
    Disabled { name: String },
}

impl Choice {
    /// Display label, which may contain embedded newlines.
    pub fn name(&self) -> &str {
        match self {
            Self::Selectable { name, .. } | Self::Disabled { name } => name,
        }
    }

    /// Whether this entry can hold the cursor.
    pub fn is_selectable(&self) -> bool {
        matches!(self, Self::Selectable { .. })
    }
}

/// Ordered, normalized choice sequence.
///
/// Invariant: contains at least one selectable entry.
#[derive(Debug, Clone)]
pub struct ChoiceList {
    entries: Vec<Choice>,
    /// Raw indices of the selectable entries, in display order.
    selectable: Vec<usize>,
}

impl ChoiceList {
    /// Normalize raw choices, failing when none are usable.
    ///
    /// `None`, an empty list, and an all-disabled list all fail: a selection
    /// prompt with nothing to select is a construction error, not a runtime
    /// condition.
    pub fn new(raw: Option<Vec<RawChoice>>) -> Result<Self, ConfigError> {
        let raw = raw.ok_or_else(|| {
            ConfigError::Invalid("selection prompt requires a `choices` list".into())
        })?;
        if raw.is_empty() {
            return Err(ConfigError::Invalid(
                "selection prompt requires a non-empty `choices` list".into(),
            ));
        }

        let mut entries = Vec::with_capacity(raw.len());
        for choice in raw {
            entries.push(normalize(choice)?);
        }

        let selectable: Vec<usize> = entries
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_selectable())
            .map(|(idx, _)| idx)
            .collect();
        if selectable.is_empty() {
            return Err(ConfigError::Invalid(
                "`choices` must contain at least one selectable entry".into(),
            ));
        }

        Ok(Self {
            entries,
            selectable,
        })
    }

    /// Total entry count, disabled entries included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Choice> {
        self.entries.iter()
    }

    /// Entry by raw display index.
    pub fn get(&self, raw_index: usize) -> Option<&Choice> {
        self.entries.get(raw_index)
    }

    /// Number of selectable entries (the cursor's modulus).
    pub fn selectable_len(&self) -> usize {
        self.selectable.len()
    }

    /// Selectable entry by cursor index.
    pub fn selectable(&self, cursor: usize) -> Option<&Choice> {
        self.selectable
            .get(cursor)
            .and_then(|raw| self.entries.get(*raw))
    }

    /// Answer value of the selectable entry at `cursor`.
    pub fn selectable_value(&self, cursor: usize) -> Option<&str> {
        match self.selectable(cursor) {
            Some(Choice::Selectable { value, .. }) => Some(value),
            _ => None,
        }
    }

    /// Raw display index of the selectable entry at `cursor`.
    pub fn raw_index_of(&self, cursor: usize) -> Option<usize> {
        self.selectable.get(cursor).copied()
    }

    /// Cursor index whose entry carries `value`, if any.
    pub fn position_of_value(&self, value: &str) -> Option<usize> {
        self.selectable.iter().position(|raw| {
            matches!(&self.entries[*raw], Choice::Selectable { value: v, .. } if v == value)
        })
    }

    /// Cursor index addressed by a shortcut digit 1-9.
    ///
    /// Digit `n` addresses the n-th selectable entry; out-of-range digits
    /// address nothing.
    pub fn shortcut(&self, digit: char) -> Option<usize> {
        let n = digit.to_digit(10)?;
        if !(1..=9).contains(&n) {
            return None;
        }
        let cursor = (n - 1) as usize;
        (cursor < self.selectable.len()).then_some(cursor)
    }
}

fn normalize(raw: RawChoice) -> Result<Choice, ConfigError> {
    match raw {
        RawChoice::Bare(value) => Ok(Choice::Selectable {
            name: value.clone(),
            value,
        }),
        RawChoice::Record {
            name,
            value,
            disabled,
        } => {
            let label = name.clone().or_else(|| value.clone());
            let Some(label) = label else {
                return Err(ConfigError::Invalid(
                    "`choices` records need a `name` or a `value`".into(),
                ));
            };
            if disabled {
                Ok(Choice::Disabled { name: label })
            } else {
                Ok(Choice::Selectable {
                    value: value.unwrap_or_else(|| label.clone()),
                    name: label,
                })
            }
        }
    }
}
