//! Feedback pattern calculation, representation and validation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (letter not in word, `.`)
//! - 1 = Present (letter in word, wrong position, `O`)
//! - 2 = Correct (letter in correct position, `G`)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::{WORD_LENGTH, Word};
use std::fmt;
use thiserror::Error;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Right letter, right position (green)
    Correct,
    /// Letter occurs elsewhere in the solution (orange/yellow)
    Present,
    /// Letter does not occur, or all its occurrences are already accounted for
    Absent,
}

impl Tile {
    /// Text marker used by the interactive protocol
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'O',
            Self::Absent => '.',
        }
    }

    /// Parse an upper-case text marker
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' => Some(Self::Correct),
            'O' => Some(Self::Present),
            '.' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Emoji used for terminal display
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }
}

/// Feedback pattern for a guess
///
/// Represents the per-position tiles as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns). Values are only
/// ever built from tiles, so every value has exactly one text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

/// Why a pattern string was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern should have exactly {expected} characters, received {found}", expected = WORD_LENGTH)]
    WrongLength { found: usize },
    #[error(
        "pattern should only contain 'G', 'O' and '.', received '{character}' at position {}",
        .position + 1
    )]
    InvalidCharacter { character: char, position: usize },
}

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Build a pattern from per-position tiles
    #[must_use]
    pub fn from_tiles(tiles: [Tile; WORD_LENGTH]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for tile in tiles {
            pattern += tile.digit() * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(pattern)
    }

    /// Decode the per-position tiles
    #[must_use]
    pub fn tiles(self) -> [Tile; WORD_LENGTH] {
        let mut tiles = [Tile::Absent; WORD_LENGTH];
        let mut val = self.0;
        for tile in &mut tiles {
            *tile = match val % 3 {
                2 => Tile::Correct,
                1 => Tile::Present,
                _ => Tile::Absent,
            };
            val /= 3;
        }
        tiles
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Calculate the pattern `guess` produces when `answer` is the solution
    ///
    /// # Algorithm
    /// 1. First pass: every exact match is `Correct` and consumes that
    ///    solution slot.
    /// 2. Second pass: every other guess letter takes the earliest
    ///    unconsumed solution slot holding the same letter and is
    ///    `Present`; with no such slot it stays `Absent`.
    ///
    /// A repeated guess letter therefore only scores as many non-absent tiles
    /// as the solution has copies of it.
    ///
    /// # Examples
    /// ```
    /// use wordle_gain::core::{Pattern, Word};
    ///
    /// let answer = Word::new("raise").unwrap();
    /// let guess = Word::new("erase").unwrap();
    /// assert_eq!(Pattern::calculate(&guess, &answer).to_string(), ".OOGG");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut tiles = [Tile::Absent; WORD_LENGTH];
        let mut unconsumed: [Option<u8>; WORD_LENGTH] =
            std::array::from_fn(|i| Some(answer.char_at(i)));

        // First pass: exact matches
        for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                tiles[i] = Tile::Correct;
                unconsumed[i] = None;
            }
        }

        // Second pass: misplaced letters against what is left
        for (i, &g) in guess.chars().iter().enumerate() {
            if tiles[i] == Tile::Correct {
                continue;
            }
            if let Some(slot) = unconsumed.iter().position(|&slot| slot == Some(g)) {
                tiles[i] = Tile::Present;
                unconsumed[slot] = None;
            }
        }

        Self::from_tiles(tiles)
    }

    /// Count the number of correct tiles
    #[must_use]
    pub fn count_correct(self) -> usize {
        self.tiles().iter().filter(|&&t| t == Tile::Correct).count()
    }

    /// Count the number of present tiles
    #[must_use]
    pub fn count_present(self) -> usize {
        self.tiles().iter().filter(|&&t| t == Tile::Present).count()
    }

    /// Convert pattern to emoji string, e.g. "🟩🟨⬜⬜⬜"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.tiles().iter().map(|t| t.emoji()).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.tiles().iter().map(|t| t.symbol()).collect();
        f.write_str(&text)
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    /// Parse user input: surrounding whitespace is ignored and markers are
    /// accepted in either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        check_pattern(&s.trim().to_uppercase())
    }
}

/// Validate a pattern string in the `G`/`O`/`.` text form
///
/// Markers must already be upper-case.
///
/// # Errors
/// Returns the first problem found: a wrong length, or the first character
/// that is not one of the three markers.
pub fn check_pattern(text: &str) -> Result<Pattern, PatternError> {
    let found = text.chars().count();
    if found != WORD_LENGTH {
        return Err(PatternError::WrongLength { found });
    }

    let mut tiles = [Tile::Absent; WORD_LENGTH];
    for (position, (tile, character)) in tiles.iter_mut().zip(text.chars()).enumerate() {
        *tile = Tile::from_symbol(character).ok_or(PatternError::InvalidCharacter {
            character,
            position,
        })?;
    }

    Ok(Pattern::from_tiles(tiles))
}

/// Whether `text` is a well-formed pattern string
///
/// # Examples
/// ```
/// use wordle_gain::core::is_pattern_well_formed;
///
/// assert!(is_pattern_well_formed("GO..."));
/// assert!(!is_pattern_well_formed("GGO"));
/// ```
#[must_use]
pub fn is_pattern_well_formed(text: &str) -> bool {
    check_pattern(text).is_ok()
}
