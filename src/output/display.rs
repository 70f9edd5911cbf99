//! Display functions for command results

use super::formatters::{create_progress_bar, gain_bar, percentage};
use crate::commands::{AnalysisResult, SolveResult, SweepStatistics};
use crate::core::Word;
use crate::solver::entropy::GuessMetrics;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {} {}",
            i + 1,
            step.guess.text().to_uppercase(),
            step.pattern,
            step.pattern.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Gain:       {:.4}", step.metrics.gain);
            println!("  Entropy:    {:.3} bits", step.metrics.entropy_bits);
            println!(
                "  Expected:   {:.1} candidates",
                step.metrics.expected_remaining
            );

            if step.candidates_after > 0 {
                let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                    reduction.log2()
                );
            }
        }
    }

    println!();
    match &result.solution {
        Some(solution) => println!(
            "{}",
            format!(
                "✅ Narrowed to {} in {} turns, answer entered on guess {}",
                solution.text().to_uppercase(),
                result.turns(),
                result.guesses_to_win()
            )
            .green()
            .bold()
        ),
        None => println!(
            "{}",
            format!("❌ Not solved after {} turns", result.turns())
                .red()
                .bold()
        ),
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GAIN ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let metrics = &result.metrics;
    let bar = gain_bar(metrics.gain, result.total_candidates, 30);

    println!("\n📊 Against {} dictionary words:", result.total_candidates);
    println!(
        "   Gain:        [{}] {}",
        bar.green(),
        format!("{:.4}", metrics.gain).bright_yellow()
    );
    println!("   Rank:        #{} of {}", result.rank, result.total_candidates);
    println!("   Entropy:     {:.3} bits", metrics.entropy_bits);
    println!(
        "   Expected:    {:.1} candidates remain",
        metrics.expected_remaining
    );
    println!(
        "   Worst case:  {} candidates ({} patterns)",
        metrics.max_partition, metrics.partitions
    );
}

/// Print a ranked list of opening words
pub fn print_top_guesses(top: &[(Word, GuessMetrics)], total_candidates: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BEST OPENING WORDS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    for (i, (word, metrics)) in top.iter().enumerate() {
        println!(
            "{:3}. {} [{}] {:.4}  {:6.1} expected  {:4} worst",
            i + 1,
            word.text().to_uppercase().bright_yellow(),
            gain_bar(metrics.gain, total_candidates, 20).green(),
            metrics.gain,
            metrics.expected_remaining,
            metrics.max_partition
        );
    }
}

/// Print aggregate statistics from a dictionary sweep
pub fn print_sweep_statistics(stats: &SweepStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Sweep Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", percentage(stats.solved, stats.total_words)).green()
    );
    if !stats.failed.is_empty() {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed.len(),
            format!(
                "({:.1}%)",
                percentage(stats.failed.len(), stats.total_words)
            )
            .red()
        );
        println!("  Failed words:        {}", stats.failed.join(", "));
    }
    println!(
        "  Average turns:       {}",
        format!("{:.3}", stats.average_turns).bright_yellow().bold()
    );
    println!(
        "  Best / worst:        {} / {}",
        stats.min_turns, stats.max_turns
    );
    println!(
        "  Total time:          {:.2}s",
        stats.duration.as_secs_f64()
    );
    if stats.total_words > 0 {
        println!(
            "  Time per word:       {:.1}ms",
            stats.duration.as_millis() as f64 / stats.total_words as f64
        );
    }
    if let Some(seed) = stats.seed {
        println!("  Sample seed:         {seed}");
    }

    println!("\n📈 {}", "Turn Distribution".bright_cyan().bold());
    let max_count = stats.distribution.values().copied().max().unwrap_or(0);
    for (turns, &count) in &stats.distribution {
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!(
            "  {turns:2} turns: {} {count:5} ({:5.1}%)",
            bar.green(),
            percentage(count, stats.solved)
        );
    }

    print_word_list("🟢 Easiest", &stats.easiest);
    print_word_list("🔴 Hardest", &stats.hardest);
}

fn print_word_list(title: &str, words: &[(String, usize)]) {
    if words.is_empty() {
        return;
    }

    println!("\n{} {}", title, "words".bright_cyan().bold());
    let line: Vec<String> = words
        .iter()
        .map(|(word, turns)| format!("{} ({turns})", word.to_uppercase()))
        .collect();
    println!("  {}", line.join(", "));
}
