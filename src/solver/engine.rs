//! Solver state machine
//!
//! A [`Solver`] owns the set of dictionary words still consistent with all
//! feedback seen so far. The set only ever shrinks.
//!
//! ```text
//! Active --apply_feedback--> Active | Solved | Exhausted
//! ```

use super::entropy::select_best_guess;
use crate::core::{Pattern, Word};
use crate::wordlists::Dictionary;
use thiserror::Error;

/// Precomputed best first guess for the built-in dictionary
pub const OPENING_WORD: &str = "raise";

/// Where a solver is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverState {
    /// More than one candidate remains
    Active,
    /// Exactly one candidate remains
    Solved,
    /// No candidate is consistent with the feedback
    Exhausted,
}

/// Errors raised by solver operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("already solved, the answer is '{solution}'")]
    AlreadySolved { solution: Word },
    #[error("no candidates remain, earlier feedback was contradictory")]
    NoCandidates,
    #[error("feedback {pattern} for '{guess}' is not consistent with any remaining word")]
    ContradictoryFeedback { guess: Word, pattern: Pattern },
    #[error("opening word '{word}' is not in the dictionary")]
    UnknownOpening { word: Word },
}

/// Entropy-gain solver over a shared dictionary
///
/// Cloning is cheap relative to scoring and gives an independent snapshot
/// of the candidate set.
#[derive(Debug, Clone)]
pub struct Solver<'a> {
    dictionary: &'a Dictionary,
    opening: Option<&'a Word>,
    candidates: Vec<&'a Word>,
}

impl<'a> Solver<'a> {
    /// Create a solver whose first guess is [`OPENING_WORD`]
    ///
    /// A dictionary without that word gets no shortcut.
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        let opening = dictionary.find(OPENING_WORD);
        if opening.is_none() {
            log::debug!("'{OPENING_WORD}' not in dictionary, first guess will be scored");
        }
        Self::build(dictionary, opening)
    }

    /// Create a solver with a custom opening word
    ///
    /// `None` disables the shortcut, so the first guess is scored like any
    /// other.
    ///
    /// # Errors
    /// [`SolverError::UnknownOpening`] if the word is not in the dictionary.
    /// Feedback for such a word may rule nothing out, which would leave the
    /// shortcut active on every turn.
    pub fn with_opening(
        dictionary: &'a Dictionary,
        opening: Option<&Word>,
    ) -> Result<Self, SolverError> {
        let opening = match opening {
            Some(word) => Some(
                dictionary
                    .find(word.text())
                    .ok_or_else(|| SolverError::UnknownOpening { word: word.clone() })?,
            ),
            None => None,
        };
        Ok(Self::build(dictionary, opening))
    }

    fn build(dictionary: &'a Dictionary, opening: Option<&'a Word>) -> Self {
        Self {
            dictionary,
            opening,
            candidates: dictionary.words().iter().collect(),
        }
    }

    /// The dictionary guesses are drawn from
    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    #[must_use]
    pub fn state(&self) -> SolverState {
        match self.candidates.len() {
            0 => SolverState::Exhausted,
            1 => SolverState::Solved,
            _ => SolverState::Active,
        }
    }

    /// True iff exactly one candidate remains
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state() == SolverState::Solved
    }

    /// The answer, once solved
    #[must_use]
    pub fn solution(&self) -> Option<&'a Word> {
        match self.candidates.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// Words still consistent with every piece of feedback, in dictionary order
    #[must_use]
    pub fn remaining_candidates(&self) -> &[&'a Word] {
        &self.candidates
    }

    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.candidates.len()
    }

    /// The guess expected to eliminate the most candidates
    ///
    /// While the candidate set is still the whole dictionary the opening word
    /// is returned without scoring. Otherwise every dictionary word is scored
    /// against the candidates; a guess need not be a possible answer.
    ///
    /// # Errors
    /// [`SolverError::AlreadySolved`] once a single candidate remains and
    /// [`SolverError::NoCandidates`] after contradictory feedback.
    pub fn best_guess(&self) -> Result<Word, SolverError> {
        if let Some(solution) = self.solution() {
            return Err(SolverError::AlreadySolved {
                solution: solution.clone(),
            });
        }

        if self.candidates.is_empty() {
            return Err(SolverError::NoCandidates);
        }

        if self.candidates.len() == self.dictionary.len()
            && let Some(opening) = self.opening
        {
            log::debug!("Opening with '{opening}'");
            return Ok(opening.clone());
        }

        let (best, gain) = select_best_guess(self.dictionary.words(), &self.candidates)
            .ok_or(SolverError::NoCandidates)?;

        log::debug!(
            "Best guess '{best}' (gain {gain:.4}) over {} candidates",
            self.candidates.len()
        );
        Ok(best.clone())
    }

    /// Keep only the candidates that would have produced `pattern` for `guess`
    ///
    /// Returns the new state.
    ///
    /// # Errors
    /// [`SolverError::ContradictoryFeedback`] if no candidate survives. The
    /// solver is then [`SolverState::Exhausted`].
    pub fn apply_feedback(
        &mut self,
        guess: &Word,
        pattern: Pattern,
    ) -> Result<SolverState, SolverError> {
        let before = self.candidates.len();
        self.candidates
            .retain(|&candidate| Pattern::calculate(guess, candidate) == pattern);

        log::debug!(
            "'{guess}' {pattern}: {before} -> {} candidates",
            self.candidates.len()
        );

        if self.candidates.is_empty() {
            return Err(SolverError::ContradictoryFeedback {
                guess: guess.clone(),
                pattern,
            });
        }

        Ok(self.state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: [&str; 8] = [
        "crate", "grate", "irate", "trace", "raise", "clock", "slate", "plate",
    ];

    fn dictionary() -> Dictionary {
        Dictionary::from_strs(&WORDS).unwrap()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn feedback(solver: &mut Solver<'_>, guess: &str, answer: &str) -> SolverState {
        let guess = word(guess);
        let pattern = Pattern::calculate(&guess, &word(answer));
        solver.apply_feedback(&guess, pattern).unwrap()
    }

    #[test]
    fn starts_with_full_dictionary() {
        let dictionary = dictionary();
        let solver = Solver::new(&dictionary);

        assert_eq!(solver.remaining_count(), WORDS.len());
        assert_eq!(solver.state(), SolverState::Active);
        assert!(!solver.is_solved());
        assert!(solver.solution().is_none());
    }

    #[test]
    fn first_guess_is_opening_word() {
        let dictionary = dictionary();
        let solver = Solver::new(&dictionary);

        // Scoring would pick "crate" here
        assert_eq!(solver.best_guess().unwrap().text(), "raise");
    }

    #[test]
    fn first_guess_without_shortcut_is_scored() {
        let dictionary = dictionary();
        let solver = Solver::with_opening(&dictionary, None).unwrap();

        assert_eq!(solver.best_guess().unwrap().text(), "crate");
    }

    #[test]
    fn custom_opening_word_from_dictionary() {
        let dictionary = dictionary();
        let solver = Solver::with_opening(&dictionary, Some(&word("PLATE"))).unwrap();

        assert_eq!(solver.best_guess().unwrap().text(), "plate");
    }

    #[test]
    fn opening_word_outside_dictionary_is_rejected() {
        let dictionary = dictionary();
        let err = Solver::with_opening(&dictionary, Some(&word("fuzzy"))).unwrap_err();

        assert_eq!(
            err,
            SolverError::UnknownOpening {
                word: word("fuzzy")
            }
        );
    }

    #[test]
    fn opening_word_is_only_asked_once() {
        let dictionary = dictionary();
        let mut solver = Solver::with_opening(&dictionary, Some(&word("clock"))).unwrap();

        let state = feedback(&mut solver, "clock", "plate");
        assert_eq!(state, SolverState::Active);
        assert!(solver.remaining_count() < WORDS.len());
        assert_ne!(solver.best_guess().unwrap().text(), "clock");
    }

    #[test]
    fn missing_default_opening_disables_shortcut() {
        let dictionary = Dictionary::from_strs(&["crate", "grate", "clock"]).unwrap();
        let solver = Solver::new(&dictionary);

        assert_ne!(solver.best_guess().unwrap().text(), OPENING_WORD);
    }

    #[test]
    fn feedback_filters_candidates() {
        let dictionary = dictionary();
        let mut solver = Solver::new(&dictionary);

        let state = feedback(&mut solver, "raise", "grate");
        assert_eq!(state, SolverState::Active);

        let remaining: Vec<&str> = solver
            .remaining_candidates()
            .iter()
            .map(|w| w.text())
            .collect();
        assert_eq!(remaining, ["crate", "grate", "trace"]);
    }

    #[test]
    fn second_guess_is_scored_over_whole_dictionary() {
        let dictionary = dictionary();
        let mut solver = Solver::new(&dictionary);
        feedback(&mut solver, "raise", "grate");

        assert_eq!(solver.best_guess().unwrap().text(), "crate");
    }

    #[test]
    fn solves_when_one_candidate_remains() {
        let dictionary = dictionary();
        let mut solver = Solver::new(&dictionary);

        let state = feedback(&mut solver, "raise", "clock");
        assert_eq!(state, SolverState::Solved);
        assert!(solver.is_solved());
        assert_eq!(solver.solution().map(Word::text), Some("clock"));

        let err = solver.best_guess().unwrap_err();
        assert_eq!(
            err,
            SolverError::AlreadySolved {
                solution: word("clock")
            }
        );
    }

    #[test]
    fn contradictory_feedback_exhausts_solver() {
        let dictionary = dictionary();
        let mut solver = Solver::new(&dictionary);

        let guess = word("fuzzy");
        let err = solver.apply_feedback(&guess, Pattern::PERFECT).unwrap_err();

        assert!(matches!(err, SolverError::ContradictoryFeedback { .. }));
        assert_eq!(solver.state(), SolverState::Exhausted);
        assert_eq!(solver.remaining_count(), 0);
        assert_eq!(solver.best_guess().unwrap_err(), SolverError::NoCandidates);
    }

    #[test]
    fn filtering_is_idempotent() {
        let dictionary = dictionary();
        let mut solver = Solver::new(&dictionary);

        let guess = word("raise");
        let pattern = Pattern::calculate(&guess, &word("grate"));
        solver.apply_feedback(&guess, pattern).unwrap();
        let once = solver.remaining_count();
        solver.apply_feedback(&guess, pattern).unwrap();

        assert_eq!(solver.remaining_count(), once);
    }

    #[test]
    fn clones_are_independent() {
        let dictionary = dictionary();
        let mut solver = Solver::new(&dictionary);
        let snapshot = solver.clone();

        feedback(&mut solver, "raise", "clock");

        assert_eq!(snapshot.remaining_count(), WORDS.len());
        assert_eq!(solver.remaining_count(), 1);
    }

    #[test]
    fn single_word_dictionary_starts_solved() {
        let dictionary = Dictionary::from_strs(&["raise"]).unwrap();
        let solver = Solver::new(&dictionary);

        assert!(solver.is_solved());
        assert!(solver.best_guess().is_err());
    }
}
