//! Wordle Gain
//!
//! A Wordle solver that always asks the word with the largest expected
//! entropy reduction over the words still consistent with the feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_gain::core::{Pattern, Word};
//! use wordle_gain::solver::Solver;
//! use wordle_gain::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::embedded();
//! let mut solver = Solver::new(dictionary);
//!
//! let answer = Word::new("clock").unwrap();
//! while !solver.is_solved() {
//!     let guess = solver.best_guess().unwrap();
//!     let pattern = Pattern::calculate(&guess, &answer);
//!     solver.apply_feedback(&guess, pattern).unwrap();
//! }
//! assert_eq!(solver.solution(), Some(&answer));
//! ```

// Core domain types
pub mod core;

// Scoring and the solver state machine
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod log;
