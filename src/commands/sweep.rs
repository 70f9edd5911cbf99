//! Sweep the dictionary - aggregate solver statistics
//!
//! Runs an independent solver against every dictionary word (or a subset) in
//! parallel and summarizes how many turns each one needed.

use super::solve::{SolveConfig, solve_word};
use crate::core::Word;
use crate::solver::Solver;
use crate::wordlists::Dictionary;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// How many of the easiest and hardest words to report
const EXTREMES: usize = 10;

/// Which words to sweep and how
#[derive(Debug, Clone, Default)]
pub struct SweepConfig {
    /// Only the first `limit` dictionary words
    pub limit: Option<usize>,
    /// A random sample of this many words (takes precedence over `limit`)
    pub sample: Option<usize>,
    /// Seed for the random sample; drawn at random when absent
    pub seed: Option<u64>,
    /// Opening word handed to every solver; must be a dictionary word
    pub opening: Option<Word>,
    pub show_progress: bool,
}

/// Statistics from sweeping the dictionary
#[derive(Debug)]
pub struct SweepStatistics {
    pub total_words: usize,
    pub solved: usize,
    /// Targets that could not be narrowed down within the turn limit
    pub failed: Vec<String>,
    /// turns -> number of words
    pub distribution: BTreeMap<usize, usize>,
    pub average_turns: f64,
    pub min_turns: usize,
    pub max_turns: usize,
    pub easiest: Vec<(String, usize)>,
    pub hardest: Vec<(String, usize)>,
    pub duration: Duration,
    /// Seed used for sampling, so the run can be repeated
    pub seed: Option<u64>,
}

/// Run the solver against the configured set of target words
///
/// # Errors
///
/// Returns an error if the opening word is not in the dictionary, the
/// progress bar template is invalid or a solver run fails unexpectedly.
pub fn run_sweep(dictionary: &Dictionary, config: &SweepConfig) -> Result<SweepStatistics> {
    let (targets, seed) = select_targets(dictionary, config);

    let progress = if config.show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let fresh = Solver::with_opening(dictionary, config.opening.as_ref())?;
    let start = Instant::now();

    let results: Vec<(String, Option<usize>)> = targets
        .par_iter()
        .map(|&target| {
            let result = solve_word(&SolveConfig::new(target.text().to_string()), fresh.clone());
            progress.inc(1);
            result.map(|r| (target.text().to_string(), r.is_solved().then(|| r.turns())))
        })
        .collect::<Result<_>>()?;

    progress.finish_with_message("Complete!");

    Ok(summarize(results, start.elapsed(), seed))
}

fn select_targets<'a>(
    dictionary: &'a Dictionary,
    config: &SweepConfig,
) -> (Vec<&'a Word>, Option<u64>) {
    let words = dictionary.words();

    if let Some(amount) = config.sample {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut sample: Vec<&Word> = words.choose_multiple(&mut rng, amount).collect();
        // Report in dictionary order regardless of draw order
        sample.sort_by_key(|w| dictionary.position(w));
        return (sample, Some(seed));
    }

    let limit = config.limit.unwrap_or(words.len());
    (words.iter().take(limit).collect(), None)
}

fn summarize(
    results: Vec<(String, Option<usize>)>,
    duration: Duration,
    seed: Option<u64>,
) -> SweepStatistics {
    let total_words = results.len();
    let mut failed = Vec::new();
    let mut solved: Vec<(String, usize)> = Vec::new();

    for (word, turns) in results {
        match turns {
            Some(turns) => solved.push((word, turns)),
            None => failed.push(word),
        }
    }

    let mut distribution = BTreeMap::new();
    for (_, turns) in &solved {
        *distribution.entry(*turns).or_insert(0) += 1;
    }

    let total_turns: usize = solved.iter().map(|(_, t)| t).sum();
    let average_turns = if solved.is_empty() {
        0.0
    } else {
        total_turns as f64 / solved.len() as f64
    };

    // Stable: equal turn counts keep dictionary order
    solved.sort_by_key(|(_, turns)| *turns);

    SweepStatistics {
        total_words,
        solved: solved.len(),
        failed,
        distribution,
        average_turns,
        min_turns: solved.first().map_or(0, |(_, t)| *t),
        max_turns: solved.last().map_or(0, |(_, t)| *t),
        easiest: solved.iter().take(EXTREMES).cloned().collect(),
        hardest: solved.iter().rev().take(EXTREMES).cloned().collect(),
        duration,
        seed,
    }
}
