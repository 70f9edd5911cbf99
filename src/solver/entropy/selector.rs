//! Word selection by expected information gain
//!
//! Scores every guess independently in parallel, then reduces with a stable
//! tie-break: equal scores go to the word that comes first in the pool.

use super::calculator::score_guess;
use crate::core::Word;
use rayon::prelude::*;
use std::cmp::Ordering;

type Scored<'a> = (usize, &'a Word, f64);

/// Select the guess with the highest expected gain
///
/// Returns the word and its score, or `None` if the guess pool is empty.
///
/// # Examples
/// ```
/// use wordle_gain::core::Word;
/// use wordle_gain::solver::entropy::select_best_guess;
///
/// let pool = vec![Word::new("fuzzy").unwrap(), Word::new("crate").unwrap()];
/// let candidates = vec![Word::new("crate").unwrap(), Word::new("grate").unwrap()];
/// let refs: Vec<&Word> = candidates.iter().collect();
///
/// let (best, gain) = select_best_guess(&pool, &refs).unwrap();
/// assert_eq!(best.text(), "crate");
/// assert!(gain > 0.0);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &'a [Word],
    candidates: &[&Word],
) -> Option<(&'a Word, f64)> {
    guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, guess)| (index, guess, score_guess(candidates, guess)))
        .reduce_with(|a, b| if ranks_before(&b, &a) { b } else { a })
        .map(|(_, word, score)| (word, score))
}

/// The `n` best guesses, best first
///
/// Ordered by score descending, then by pool position.
#[must_use]
pub fn rank_guesses<'a>(
    guess_pool: &'a [Word],
    candidates: &[&Word],
    n: usize,
) -> Vec<(&'a Word, f64)> {
    let mut scored: Vec<Scored<'a>> = guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, guess)| (index, guess, score_guess(candidates, guess)))
        .collect();

    scored.sort_by(compare);
    scored.truncate(n);
    scored.into_iter().map(|(_, word, score)| (word, score)).collect()
}

/// Higher score first; earlier pool position on ties
fn compare(a: &Scored<'_>, b: &Scored<'_>) -> Ordering {
    b.2.total_cmp(&a.2).then_with(|| a.0.cmp(&b.0))
}

fn ranks_before(a: &Scored<'_>, b: &Scored<'_>) -> bool {
    compare(a, b) == Ordering::Less
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    const POOL: [&str; 8] = [
        "crate", "grate", "irate", "trace", "raise", "clock", "slate", "plate",
    ];

    #[test]
    fn selects_highest_gain() {
        let pool = words(&["fuzzy", "clock", "crane"]);
        let candidates = words(&["crate", "grate", "irate", "trace", "raise", "clock"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let (best, gain) = select_best_guess(&pool, &refs).unwrap();
        assert_eq!(best.text(), "crane");
        assert!((gain - 2.241_269_132_824_531).abs() < 1e-9);
    }

    #[test]
    fn ties_go_to_earliest_pool_word() {
        // crate, grate, irate and trace all score the same against the pool
        let pool = words(&POOL);
        let refs: Vec<&Word> = pool.iter().collect();

        let (best, gain) = select_best_guess(&pool, &refs).unwrap();
        assert_eq!(best.text(), "crate");
        assert!((gain - 2.321_014_109_491_548_6).abs() < 1e-9);

        let mut reordered = POOL;
        reordered.reverse();
        let pool = words(&reordered);
        let (best, _) = select_best_guess(&pool, &refs).unwrap();
        assert_eq!(best.text(), "trace");
    }

    #[test]
    fn selection_is_deterministic() {
        let pool = words(&POOL);
        let refs: Vec<&Word> = pool.iter().collect();

        for _ in 0..10 {
            let (best, _) = select_best_guess(&pool, &refs).unwrap();
            assert_eq!(best.text(), "crate");
        }
    }

    #[test]
    fn returns_none_on_empty_guess_pool() {
        let candidates = words(&["slate"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        assert!(select_best_guess(&[], &refs).is_none());
    }

    #[test]
    fn rank_orders_by_score_then_position() {
        let pool = words(&POOL);
        let refs: Vec<&Word> = pool.iter().collect();

        let ranked = rank_guesses(&pool, &refs, 6);
        let texts: Vec<&str> = ranked.iter().map(|(w, _)| w.text()).collect();
        assert_eq!(texts, ["crate", "grate", "irate", "trace", "raise", "slate"]);
        assert!(ranked.windows(2).all(|pair| pair[0].1 >= pair[1].1));
    }

    #[test]
    fn rank_agrees_with_select() {
        let pool = words(&POOL);
        let candidates = words(&["crate", "plate", "slate"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let (best, gain) = select_best_guess(&pool, &refs).unwrap();
        let ranked = rank_guesses(&pool, &refs, 1);
        assert_eq!(ranked, vec![(best, gain)]);
    }
}
