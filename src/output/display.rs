//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{BuildResult, ScoreResult, TreeStatistics, VerifyReport};
use crate::core::CodeSpace;
use colored::Colorize;

/// Print a short build summary to stderr, keeping stdout for the tree
pub fn print_build_summary(result: &BuildResult, space: &CodeSpace) {
    let tree = &result.tree;
    eprintln!(
        "{} {} for {} ({} evaluation)",
        "✅".green(),
        "Decision tree built".green().bold(),
        space.rules(),
        result.evaluation
    );
    eprintln!(
        "   Nodes: {}   Final guesses: {}   First guess: {}   Time: {:.2}s",
        tree.len().to_string().bright_yellow(),
        tree.final_count(),
        space.render(tree.root().guess()).bright_yellow().bold(),
        result.duration.as_secs_f64()
    );
}

/// Print tree statistics
pub fn print_statistics(stats: &TreeStatistics, space: &CodeSpace) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DECISION TREE STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Tree:".bright_cyan().bold());
    println!("   Rules:            {}", space.rules());
    println!("   Nodes:            {}", stats.nodes);
    println!("   Final guesses:    {}", stats.finals);
    println!("   Secrets:          {}", stats.secrets);

    println!("\n🎯 {}", "Guesses per secret:".bright_cyan().bold());
    println!(
        "   Average:          {}",
        format!("{:.3}", stats.average_guesses).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        stats.min_guesses.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        stats.max_guesses.to_string().yellow()
    );

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in stats.min_guesses..=stats.max_guesses {
        let count = stats.distribution.get(&guess_count).copied().unwrap_or(0);
        let pct = (count as f64 / stats.secrets as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count:2}: {} {count:6} ({pct:5.1}%)", bar.green());
    }

    let shown: Vec<String> = stats
        .worst_secrets
        .iter()
        .take(10)
        .map(|&code| space.render(code))
        .collect();
    println!(
        "\n⚠️  {} {}{}",
        "Hardest secrets:".yellow().bold(),
        shown.join(" "),
        if stats.worst_secrets.len() > shown.len() {
            format!(" … ({} total)", stats.worst_secrets.len())
        } else {
            String::new()
        }
    );
}

/// Print the outcome of verifying a tree
pub fn print_verify_report(report: &VerifyReport, space: &CodeSpace) {
    if report.is_valid() {
        println!(
            "{}",
            format!("✅ All {} secrets are solved by the tree", report.checked)
                .green()
                .bold()
        );
        return;
    }

    println!(
        "{}",
        format!(
            "❌ {} of {} secrets are not solved",
            report.failures.len(),
            report.checked
        )
        .red()
        .bold()
    );
    for (secret, error) in report.failures.iter().take(20) {
        println!("   {}: {error}", space.render(*secret).bright_red());
    }
}

/// Print the score of two codes
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "{} vs {}: {} (exact {}, color only {})",
        result.first.bright_yellow(),
        result.second.bright_yellow(),
        result.score.to_string().bold(),
        result.score.exact(),
        result.score.color_only()
    );
}
