//! Formatting utilities for terminal output

use crate::solver::entropy::spread;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for a gain score relative to the best possible for `candidates`
///
/// A guess that isolates every candidate scores the full baseline, so that
/// is the right end of the bar.
#[must_use]
pub fn gain_bar(gain: f64, candidates: usize, width: usize) -> String {
    let max = if candidates < 2 {
        0.0
    } else {
        spread(candidates as f64)
    };
    create_progress_bar(gain, max, width)
}

/// Percentage of `part` in `total`, zero for an empty total
#[must_use]
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_clamps_out_of_range() {
        assert_eq!(create_progress_bar(150.0, 100.0, 4), "████");
        assert_eq!(create_progress_bar(-1.0, 100.0, 4), "░░░░");
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn gain_bar_full_for_perfect_split() {
        // Two candidates top out at ln 4 (about 1.386)
        assert_eq!(gain_bar(1.5, 2, 8), "████████");
        assert_eq!(gain_bar(0.0, 2, 8), "░░░░░░░░");
    }

    #[test]
    fn gain_bar_uses_scoring_baseline() {
        // A guess that isolates all three candidates scores exactly the baseline
        let words = ["crate", "clock", "fuzzy"].map(|w| crate::core::Word::new(w).unwrap());
        let refs: Vec<&crate::core::Word> = words.iter().collect();
        let gain = crate::solver::entropy::score_guess(&refs, &words[0]);

        assert_eq!(gain_bar(gain, 3, 8), "████████");
        assert_eq!(gain_bar(spread(3.0) / 2.0, 3, 8), "████░░░░");
        assert_eq!(gain_bar(1.0, 1, 8), "░░░░░░░░");
    }

    #[test]
    fn percentage_of_empty_total() {
        assert!((percentage(1, 4) - 25.0).abs() < 1e-12);
        assert!(percentage(3, 0).abs() < f64::EPSILON);
    }
}
