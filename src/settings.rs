//! Centralized, hardcoded UI settings for the prompt surfaces.
//!
//! This is the single place to tweak prompt strings, glyphs, colors,
//! and timing behavior.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Layout / glyphs
// ---------------------------------------------------------------------------

pub const INDENT_1: &str = "  ";

/// Marker prefixed to the active choice's first rendered line.
pub const POINTER: &str = "▶";
pub const DISABLED_SUFFIX: &str = " (disabled)";

pub const GLYPH_SECTION_BULLET: &str = "•";
pub const GLYPH_ANSWERED: &str = "✔";
pub const GLYPH_ANSWERED_PLAIN: &str = "*";

// ---------------------------------------------------------------------------
// Prompt strings
// ---------------------------------------------------------------------------

pub const TEXT_PROMPT_SYMBOL: &str = "> ";
pub const MORE_CHOICES_HINT: &str = "(move up and down to reveal more choices)";
pub const DEFAULT_REJECTION_MESSAGE: &str = "invalid answer, try again";

// ---------------------------------------------------------------------------
// Behavior defaults
// ---------------------------------------------------------------------------

/// Visible window height, in rendered lines, when no page size is configured.
pub const DEFAULT_PAGE_SIZE: usize = 7;

pub const EVENT_POLL_MS: u64 = 80;

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_MESSAGE: Color = Color::White;
pub const COLOR_ANSWER: Color = Color::Cyan;
pub const COLOR_HINT: Color = Color::DarkGrey;
pub const COLOR_REJECTION: Color = Color::Red;
pub const COLOR_SECTION_BULLET: Color = Color::Green;

/// Answered-checkmark glyph, honoring plain-text mode.
pub fn answered_marker(color: bool) -> &'static str {
    if color {
        GLYPH_ANSWERED
    } else {
        GLYPH_ANSWERED_PLAIN
    }
}
