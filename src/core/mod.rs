//! Core domain types
//!
//! Words, feedback patterns and pattern validation. Everything here is pure:
//! no I/O, no shared state.

mod pattern;
mod word;

pub use pattern::{Pattern, PatternError, Tile, check_pattern, is_pattern_well_formed};
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;
