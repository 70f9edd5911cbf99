//! Expected information gain of a guess
//!
//! Given a guess and the current candidate set, measures how much the
//! feedback is expected to narrow the candidates down.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Display metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Expected entropy reduction, as ranked by [`score_guess`]
    pub gain: f64,
    /// Shannon entropy of the pattern distribution in bits
    pub entropy_bits: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Worst-case remaining candidates
    pub max_partition: usize,
    /// Number of distinct patterns the guess can produce
    pub partitions: usize,
}

/// Expected entropy reduction of `guess` against `candidates`
///
/// Each candidate is taken as equally likely to be the solution. With `N`
/// candidates and `k` the size of a pattern bucket:
///
/// ```text
/// spread(n) = -n · [p ln p + (1 - p) ln(1 - p)],   p = 1 / n
/// gain      = spread(N) - Σ spread(k) · k / N       over buckets with k ≥ 2
/// ```
///
/// Singleton buckets isolate their candidate and contribute nothing. The
/// baseline is `spread(N)`, not `ln N`; rankings depend on that choice.
///
/// Returns `0.0` for fewer than two candidates, where there is nothing
/// left to learn.
///
/// # Examples
/// ```
/// use wordle_gain::core::Word;
/// use wordle_gain::solver::entropy::score_guess;
///
/// let candidates = [Word::new("raise").unwrap(), Word::new("clock").unwrap()];
/// let refs: Vec<&Word> = candidates.iter().collect();
///
/// let splits = score_guess(&refs, &Word::new("raise").unwrap());
/// let blind = score_guess(&refs, &Word::new("fuzzy").unwrap());
/// assert!(splits > blind);
/// assert!(blind.abs() < 1e-12);
/// ```
#[must_use]
pub fn score_guess(candidates: &[&Word], guess: &Word) -> f64 {
    if candidates.len() < 2 {
        return 0.0;
    }

    let total = candidates.len() as f64;

    // Summed in sorted order so equal histograms give bit-identical scores
    let mut buckets: Vec<usize> = pattern_histogram(guess, candidates)
        .into_values()
        .filter(|&count| count > 1)
        .collect();
    buckets.sort_unstable();

    let residual: f64 = buckets
        .into_iter()
        .map(|count| {
            let k = count as f64;
            spread(k) * k / total
        })
        .sum();

    spread(total) - residual
}

/// `-n · [p ln p + (1 - p) ln(1 - p)]` with `p = 1 / n`, for `n ≥ 2`
///
/// The baseline a guess can at most remove from `n` candidates.
pub(crate) fn spread(n: f64) -> f64 {
    let p = n.recip();
    -n * (p * p.ln() + (1.0 - p) * (1.0 - p).ln())
}

/// Group candidates by the pattern `guess` produces against them
#[must_use]
pub fn pattern_histogram(guess: &Word, candidates: &[&Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        let pattern = Pattern::calculate(guess, candidate);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Calculate display metrics for a guess
///
/// Empty candidate sets give all-zero metrics.
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[&Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            gain: 0.0,
            entropy_bits: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
            partitions: 0,
        };
    }

    let histogram = pattern_histogram(guess, candidates);
    let total = candidates.len() as f64;

    let entropy_bits: f64 = histogram
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum();

    let expected_remaining: f64 = histogram
        .values()
        .map(|&count| {
            let count = count as f64;
            count * count / total
        })
        .sum();

    GuessMetrics {
        gain: score_guess(candidates, guess),
        entropy_bits,
        expected_remaining,
        max_partition: histogram.values().copied().max().unwrap_or(0),
        partitions: histogram.len(),
    }
}
