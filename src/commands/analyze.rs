//! Word analysis command
//!
//! Scores a single opening word against the whole dictionary, or lists the
//! best openers.

use crate::core::Word;
use crate::solver::entropy::{GuessMetrics, calculate_metrics, rank_guesses};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result, bail};

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: Word,
    pub metrics: GuessMetrics,
    /// 1-based rank among all dictionary words as an opener
    pub rank: usize,
    pub total_candidates: usize,
}

/// Analyze how well `word` splits the full dictionary
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-ASCII)
/// - The word is not in the dictionary
pub fn analyze_word(word: &str, dictionary: &Dictionary) -> Result<AnalysisResult> {
    let word = Word::new(word).with_context(|| format!("invalid word '{word}'"))?;
    if !dictionary.contains(&word) {
        bail!("word '{word}' is not in the dictionary");
    }

    let candidates: Vec<&Word> = dictionary.words().iter().collect();
    let metrics = calculate_metrics(&word, &candidates);

    let ranked = rank_guesses(dictionary.words(), &candidates, dictionary.len());
    let rank = ranked
        .iter()
        .position(|(w, _)| *w == &word)
        .map_or(dictionary.len(), |i| i + 1);

    Ok(AnalysisResult {
        word,
        metrics,
        rank,
        total_candidates: candidates.len(),
    })
}

/// The `n` best opening words with their metrics, best first
#[must_use]
pub fn top_guesses(dictionary: &Dictionary, n: usize) -> Vec<(Word, GuessMetrics)> {
    let candidates: Vec<&Word> = dictionary.words().iter().collect();

    rank_guesses(dictionary.words(), &candidates, n)
        .into_iter()
        .map(|(word, _)| (word.clone(), calculate_metrics(word, &candidates)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_dictionary() -> Dictionary {
        Dictionary::from_strs(&[
            "crate", "grate", "irate", "trace", "raise", "clock", "slate", "plate",
        ])
        .unwrap()
    }

    #[test]
    fn analyze_valid_word() {
        let dictionary = small_dictionary();
        let result = analyze_word("CRATE", &dictionary).unwrap();

        assert_eq!(result.word.text(), "crate");
        assert_eq!(result.rank, 1);
        assert_eq!(result.total_candidates, 8);
        assert!(result.metrics.gain > 0.0);
        assert!(result.metrics.expected_remaining < 8.0);
    }

    #[test]
    fn analyze_ranks_below_leader() {
        let dictionary = small_dictionary();
        let result = analyze_word("raise", &dictionary).unwrap();
        assert!(result.rank > 1);
        assert!(result.rank <= 8);
    }

    #[test]
    fn analyze_rejects_unknown_and_invalid() {
        let dictionary = small_dictionary();

        let err = analyze_word("zebra", &dictionary).unwrap_err();
        assert!(err.to_string().contains("not in the dictionary"));

        assert!(analyze_word("toolong", &dictionary).is_err());
        assert!(analyze_word("ab1de", &dictionary).is_err());
    }

    #[test]
    fn top_guesses_sorted_best_first() {
        let dictionary = small_dictionary();
        let top = top_guesses(&dictionary, 3);

        assert_eq!(top.len(), 3);
        assert_eq!(top[0].0.text(), "crate");
        assert!(top.windows(2).all(|w| w[0].1.gain >= w[1].1.gain));
    }

    #[test]
    fn top_guesses_capped_by_dictionary_size() {
        let dictionary = small_dictionary();
        assert_eq!(top_guesses(&dictionary, 50).len(), 8);
    }
}
