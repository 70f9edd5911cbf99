//! Word solving command
//!
//! Plays the solver against a known target and records every turn.

use crate::core::{Pattern, Word};
use crate::solver::Solver;
use crate::solver::entropy::{GuessMetrics, calculate_metrics};
use anyhow::{Context, Result, bail};

/// Configuration for solving a word
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub target: String,
    /// Give up after this many guesses
    pub max_turns: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_turns: 12,
        }
    }
}

/// A single guess in the solution path
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub guess: Word,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub metrics: GuessMetrics,
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: Word,
    pub steps: Vec<GuessStep>,
    /// The single remaining candidate, if the solver got there
    pub solution: Option<Word>,
}

impl SolveResult {
    /// Guesses needed to narrow the candidates down to one word
    #[must_use]
    pub fn turns(&self) -> usize {
        self.steps.len()
    }

    /// Guesses needed to actually enter the answer
    ///
    /// One more than [`turns`](Self::turns) unless the last guess already
    /// was the answer.
    #[must_use]
    pub fn guesses_to_win(&self) -> usize {
        match self.steps.last() {
            Some(step) if step.pattern.is_perfect() => self.steps.len(),
            _ => self.steps.len() + 1,
        }
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solution.is_some()
    }
}

/// Solve a specific word, starting from a fresh solver
///
/// # Errors
///
/// Returns an error if the target is not a valid word or is missing from
/// the solver's dictionary.
pub fn solve_word(config: &SolveConfig, mut solver: Solver<'_>) -> Result<SolveResult> {
    let target = Word::new(config.target.as_str())
        .with_context(|| format!("invalid target word '{}'", config.target))?;

    if !solver.dictionary().contains(&target) {
        bail!("target word '{target}' is not in the dictionary");
    }

    let mut steps = Vec::new();

    while !solver.is_solved() && steps.len() < config.max_turns {
        let guess = solver.best_guess()?;
        let candidates_before = solver.remaining_count();
        let metrics = calculate_metrics(&guess, solver.remaining_candidates());

        let pattern = Pattern::calculate(&guess, &target);
        solver
            .apply_feedback(&guess, pattern)
            .with_context(|| format!("solving '{target}'"))?;

        steps.push(GuessStep {
            guess,
            pattern,
            candidates_before,
            candidates_after: solver.remaining_count(),
            metrics,
        });
    }

    if !solver.is_solved() {
        log::warn!(
            "'{target}' unsolved after {} turns, {} candidates left",
            steps.len(),
            solver.remaining_count()
        );
    }

    Ok(SolveResult {
        solution: solver.solution().cloned(),
        target,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Dictionary;

    fn small_dictionary() -> Dictionary {
        Dictionary::from_strs(&[
            "crate", "grate", "irate", "trace", "raise", "clock", "slate", "plate",
        ])
        .unwrap()
    }

    #[test]
    fn solve_word_succeeds() {
        let dictionary = small_dictionary();
        let result = solve_word(&SolveConfig::new("grate".into()), Solver::new(&dictionary)).unwrap();

        assert!(result.is_solved());
        assert_eq!(result.solution.as_ref().map(Word::text), Some("grate"));
        assert_eq!(result.steps[0].guess.text(), "raise");
        assert!(result.turns() <= 6);
    }

    #[test]
    fn solve_records_shrinking_history() {
        let dictionary = small_dictionary();
        let result = solve_word(&SolveConfig::new("trace".into()), Solver::new(&dictionary)).unwrap();

        assert!(!result.steps.is_empty());
        assert_eq!(result.steps[0].candidates_before, 8);
        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
        for pair in result.steps.windows(2) {
            assert_eq!(pair[0].candidates_after, pair[1].candidates_before);
        }
    }

    #[test]
    fn one_turn_when_opening_isolates_target() {
        let dictionary = small_dictionary();
        let result = solve_word(&SolveConfig::new("raise".into()), Solver::new(&dictionary)).unwrap();

        assert_eq!(result.turns(), 1);
        assert!(result.steps[0].pattern.is_perfect());
        assert_eq!(result.guesses_to_win(), 1);
    }

    #[test]
    fn guesses_to_win_adds_final_entry() {
        let dictionary = small_dictionary();
        let result = solve_word(&SolveConfig::new("clock".into()), Solver::new(&dictionary)).unwrap();

        // "raise" leaves only "clock", which still has to be typed in
        assert_eq!(result.turns(), 1);
        assert_eq!(result.guesses_to_win(), 2);
    }

    #[test]
    fn invalid_target_returns_error() {
        let dictionary = small_dictionary();

        assert!(solve_word(&SolveConfig::new("toolong".into()), Solver::new(&dictionary)).is_err());
        let err = solve_word(&SolveConfig::new("zebra".into()), Solver::new(&dictionary)).unwrap_err();
        assert!(err.to_string().contains("not in the dictionary"));
    }

    #[test]
    fn respects_turn_limit() {
        let dictionary = small_dictionary();
        let mut config = SolveConfig::new("plate".into());
        config.max_turns = 0;

        let result = solve_word(&config, Solver::new(&dictionary)).unwrap();
        assert!(!result.is_solved());
        assert!(result.steps.is_empty());
    }
}
