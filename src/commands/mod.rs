//! Command implementations

pub mod analyze;
pub mod play;
pub mod solve;
pub mod sweep;

pub use analyze::{AnalysisResult, analyze_word, top_guesses};
pub use play::{PlayOutcome, run_play};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
pub use sweep::{SweepConfig, SweepStatistics, run_sweep};
