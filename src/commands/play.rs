//! Interactive mode
//!
//! Suggests a guess, reads the feedback pattern the game showed, and repeats
//! until a single word is left.

use crate::core::{PatternError, check_pattern};
use crate::solver::{Solver, SolverError};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Print at most this many remaining words
const SHOW_REMAINING: usize = 30;

/// How an interactive session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    Solved { solution: String, attempts: usize },
    Quit,
}

/// Run an interactive session over the given input and output
///
/// Malformed patterns are reported and asked for again. Feedback that no
/// remaining word could produce is rejected and the turn is repeated.
/// `undo` steps back one turn and `quit` (or end of input) leaves.
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn run_play<R: BufRead, W: Write>(
    mut solver: Solver<'_>,
    mut input: R,
    mut out: W,
) -> Result<PlayOutcome> {
    writeln!(out, "Pattern rule: 'G' for green, 'O' for orange and '.' for no match")?;
    writeln!(out, "Example: 'GO..O' means Green, Orange, Blank, Blank, Orange.")?;
    writeln!(out, "Commands: 'undo' to take back the last pattern, 'quit' to exit.")?;

    let mut undo_stack: Vec<Solver<'_>> = Vec::new();

    loop {
        if let Some(solution) = solver.solution() {
            let attempts = undo_stack.len();
            writeln!(
                out,
                "\n{} {}",
                "Solution:".bright_green().bold(),
                solution.text().to_uppercase().bright_white().bold()
            )?;
            writeln!(out, "Attempts: {attempts}")?;
            return Ok(PlayOutcome::Solved {
                solution: solution.text().to_string(),
                attempts,
            });
        }

        let guess = solver.best_guess()?;
        writeln!(
            out,
            "\nTurn {}: suggest you ask {}",
            undo_stack.len() + 1,
            guess.text().to_uppercase().bright_yellow().bold()
        )?;

        let pattern = loop {
            write!(out, "Input pattern (e.g. G.O..): ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                return Ok(PlayOutcome::Quit);
            }

            let entry = line.trim().to_uppercase();
            match entry.as_str() {
                "QUIT" | "Q" | "EXIT" => return Ok(PlayOutcome::Quit),
                "UNDO" | "U" => break None,
                _ => match check_pattern(&entry) {
                    Ok(pattern) => break Some(pattern),
                    Err(e) => report_malformed(&mut out, &e)?,
                },
            }
        };

        let Some(pattern) = pattern else {
            match undo_stack.pop() {
                Some(previous) => {
                    solver = previous;
                    writeln!(out, "Undone, back to turn {}", undo_stack.len() + 1)?;
                }
                None => writeln!(out, "Nothing to undo")?,
            }
            continue;
        };

        let snapshot = solver.clone();
        match solver.apply_feedback(&guess, pattern) {
            Ok(_) => {
                undo_stack.push(snapshot);
                writeln!(out, "Got pattern: {} {}", pattern, pattern.to_emoji())?;
                print_remaining(&mut out, &solver)?;
            }
            Err(e @ SolverError::ContradictoryFeedback { .. }) => {
                solver = snapshot;
                writeln!(out, "{} {e}", "**".red().bold())?;
                writeln!(out, "Check the pattern and enter it again.")?;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn report_malformed<W: Write>(out: &mut W, error: &PatternError) -> Result<()> {
    writeln!(out, "{}", "** Invalid Pattern **".red().bold())?;
    writeln!(out, "{}\n", capitalize(&error.to_string()))?;
    Ok(())
}

fn print_remaining<W: Write>(out: &mut W, solver: &Solver<'_>) -> Result<()> {
    let remaining = solver.remaining_candidates();
    writeln!(out, "Number of possible words remaining: {}", remaining.len())?;

    if remaining.len() <= SHOW_REMAINING {
        let words: Vec<&str> = remaining.iter().map(|w| w.text()).collect();
        writeln!(out, "Valid words remaining: {}", words.join(", "))?;
    }
    Ok(())
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
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

    fn play(dictionary: &Dictionary, script: &str) -> (PlayOutcome, String) {
        let mut out = Vec::new();
        let outcome = run_play(Solver::new(dictionary), script.as_bytes(), &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn solves_in_one_turn() {
        let dictionary = small_dictionary();
        // RAISE against CLOCK
        let (outcome, transcript) = play(&dictionary, ".....\n");

        assert_eq!(
            outcome,
            PlayOutcome::Solved {
                solution: "clock".to_string(),
                attempts: 1
            }
        );
        assert!(transcript.contains("RAISE"));
        assert!(transcript.contains("Valid words remaining: clock"));
    }

    #[test]
    fn lowercase_input_is_accepted() {
        let dictionary = small_dictionary();
        // RAISE against GRATE, then CRATE against GRATE
        let (outcome, _) = play(&dictionary, "oo..g\n.gggg\n");

        assert_eq!(
            outcome,
            PlayOutcome::Solved {
                solution: "grate".to_string(),
                attempts: 2
            }
        );
    }

    #[test]
    fn malformed_pattern_reprompts() {
        let dictionary = small_dictionary();
        let (outcome, transcript) = play(&dictionary, "GGO\n....k\n.....\n");

        assert!(matches!(outcome, PlayOutcome::Solved { .. }));
        assert!(transcript.contains("received 3"));
        assert!(transcript.contains("received 'K'"));
    }

    #[test]
    fn contradictory_pattern_is_rejected() {
        let dictionary = small_dictionary();
        // No word in the dictionary gives RAISE all-present
        let (outcome, transcript) = play(&dictionary, "OOOOO\n.....\n");

        assert!(transcript.contains("not consistent"));
        assert_eq!(
            outcome,
            PlayOutcome::Solved {
                solution: "clock".to_string(),
                attempts: 1
            }
        );
    }

    #[test]
    fn undo_restores_previous_turn() {
        let dictionary = small_dictionary();
        let (outcome, transcript) = play(&dictionary, "undo\nOO..G\nundo\n.....\n");

        assert!(transcript.contains("Nothing to undo"));
        assert!(transcript.contains("Undone, back to turn 1"));
        assert_eq!(
            outcome,
            PlayOutcome::Solved {
                solution: "clock".to_string(),
                attempts: 1
            }
        );
    }

    #[test]
    fn quit_and_end_of_input() {
        let dictionary = small_dictionary();

        assert_eq!(play(&dictionary, "quit\n").0, PlayOutcome::Quit);
        assert_eq!(play(&dictionary, "").0, PlayOutcome::Quit);
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("pattern should"), "Pattern should");
        assert_eq!(capitalize(""), "");
    }
}
