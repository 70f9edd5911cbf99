//! Wordle Gain - CLI
//!
//! Interactive helper and batch tools for the entropy-gain Wordle solver.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_gain::{
    commands::{
        PlayOutcome, SolveConfig, SweepConfig, analyze_word, run_play, run_sweep, solve_word,
        top_guesses,
    },
    core::Word,
    output::{print_analysis_result, print_solve_result, print_sweep_statistics, print_top_guesses},
    solver::{OPENING_WORD, Solver},
    wordlists::Dictionary,
};

#[derive(Parser)]
#[command(
    name = "wordle_gain",
    about = "Wordle solver that asks the word with the largest expected entropy reduction",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: built-in dictionary)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Opening word used while nothing has been ruled out [default: raise]
    #[arg(short = 'o', long, global = true)]
    opening: Option<String>,

    /// Score the first guess like any other instead of using the opening word
    #[arg(long, global = true, conflicts_with = "opening")]
    no_opening: bool,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short = 'v', long = "verbose-log", global = true)]
    verbose_log: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default): suggests guesses and reads back patterns
    Play,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show per-turn metrics
        #[arg(long)]
        verbose: bool,

        /// Give up after this many turns
        #[arg(short = 't', long, default_value = "12")]
        max_turns: usize,
    },

    /// Run the solver against every dictionary word
    Sweep {
        /// Only the first N dictionary words
        #[arg(short, long)]
        limit: Option<usize>,

        /// A random sample of N words instead
        #[arg(short, long, conflicts_with = "limit")]
        sample: Option<usize>,

        /// Seed for the random sample
        #[arg(long, requires = "sample")]
        seed: Option<u64>,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Analyze a word as an opener, or list the best openers
    Analyze {
        /// Word to analyze (omit to list the best openers)
        word: Option<String>,

        /// How many openers to list
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    wordle_gain::log::init_logger(cli.verbose_log);

    let loaded;
    let dictionary = match &cli.wordlist {
        Some(path) => {
            loaded = Dictionary::load(path)
                .with_context(|| format!("loading word list {}", path.display()))?;
            &loaded
        }
        None => Dictionary::embedded(),
    };

    let opening = opening_word(&cli, dictionary)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(dictionary, opening),
        Commands::Solve {
            word,
            verbose,
            max_turns,
        } => {
            let config = SolveConfig { target: word, max_turns };
            let solver = Solver::with_opening(dictionary, opening.as_ref())?;
            let result = solve_word(&config, solver)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Sweep {
            limit,
            sample,
            seed,
            no_progress,
        } => {
            println!("\nSweeping {} dictionary words", dictionary.len());
            let config = SweepConfig {
                limit,
                sample,
                seed,
                opening,
                show_progress: !no_progress,
            };
            let stats = run_sweep(dictionary, &config)?;
            print_sweep_statistics(&stats);
            Ok(())
        }
        Commands::Analyze { word, top } => {
            match word {
                Some(word) => print_analysis_result(&analyze_word(&word, dictionary)?),
                None => print_top_guesses(&top_guesses(dictionary, top), dictionary.len()),
            }
            Ok(())
        }
    }
}

/// Resolve the opening word from the command line
///
/// An explicit `--opening` must be a dictionary word. The default is
/// dropped quietly for word lists that do not contain it.
fn opening_word(cli: &Cli, dictionary: &Dictionary) -> Result<Option<Word>> {
    if cli.no_opening {
        return Ok(None);
    }

    let Some(text) = &cli.opening else {
        let opening = dictionary.find(OPENING_WORD).cloned();
        if opening.is_none() {
            log::info!("'{OPENING_WORD}' not in word list, first guess will be scored");
        }
        return Ok(opening);
    };

    let word = Word::new(text.as_str()).with_context(|| format!("invalid opening word '{text}'"))?;
    if !dictionary.contains(&word) {
        bail!("opening word '{word}' is not in the dictionary");
    }
    Ok(Some(word))
}

fn run_play_command(dictionary: &Dictionary, opening: Option<Word>) -> Result<()> {
    let solver = Solver::with_opening(dictionary, opening.as_ref())?;
    let outcome = run_play(solver, io::stdin().lock(), io::stdout())?;

    if outcome == PlayOutcome::Quit {
        println!("Bye.");
    }
    Ok(())
}
