//! Entropy-gain scoring
//!
//! Ranks guesses by how much their feedback is expected to shrink the
//! candidate set. This is the expensive part of solving: every dictionary
//! word is scored against every remaining candidate.

mod calculator;
mod selector;

pub use calculator::{GuessMetrics, calculate_metrics, pattern_histogram, score_guess};
pub(crate) use calculator::spread;
pub use selector::{rank_guesses, select_best_guess};
