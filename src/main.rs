//! Logik decision-tree generator - CLI
//!
//! With no arguments, builds the classic 5-peg/8-color minimax tree and prints
//! it to stdout.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use logik::{
    commands::{build_tree, compute_statistics, generate, score_codes, verify_tree},
    core::{CodeSpace, Rules},
    output::{print_build_summary, print_score_result, print_statistics, print_verify_report},
    solver::Evaluation,
};
use std::io::{self, BufWriter};

#[derive(Parser)]
#[command(
    name = "logik",
    about = "Minimax decision-tree generator for the 5-peg/8-color Logik game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Evaluation of already played guesses: stale (default) or fresh
    #[arg(short, long, global = true, default_value = "stale")]
    evaluation: Evaluation,

    /// Hide progress bars and summaries
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the decision tree and print it (default)
    Generate,

    /// Build the tree and report how many guesses each secret takes
    Stats,

    /// Build the tree and check that it solves every secret
    Verify,

    /// Score one code against another
    Score {
        /// First code, e.g. 01234
        first: String,

        /// Second code
        second: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let space = CodeSpace::new(Rules::CLASSIC);

    // Default to Generate if no command given
    let command = cli.command.unwrap_or(Commands::Generate);

    match command {
        Commands::Generate => run_generate_command(&space, cli.evaluation, cli.quiet),
        Commands::Stats => run_stats_command(&space, cli.evaluation, cli.quiet),
        Commands::Verify => run_verify_command(&space, cli.evaluation, cli.quiet),
        Commands::Score { first, second } => run_score_command(&space, &first, &second),
    }
}

fn run_generate_command(space: &CodeSpace, evaluation: Evaluation, quiet: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let result = generate(space, evaluation, !quiet, &mut out)
        .context("Failed to generate the decision tree")?;

    if !quiet {
        print_build_summary(&result, space);
    }
    Ok(())
}

fn run_stats_command(space: &CodeSpace, evaluation: Evaluation, quiet: bool) -> Result<()> {
    let result = build_tree(space, evaluation, !quiet)?;
    if !quiet {
        print_build_summary(&result, space);
    }

    let stats = compute_statistics(&result.tree, space, !quiet)?;
    print_statistics(&stats, space);
    Ok(())
}

fn run_verify_command(space: &CodeSpace, evaluation: Evaluation, quiet: bool) -> Result<()> {
    let result = build_tree(space, evaluation, !quiet)?;
    if !quiet {
        print_build_summary(&result, space);
    }

    let report = verify_tree(&result.tree, space, !quiet);
    print_verify_report(&report, space);

    if !report.is_valid() {
        bail!("{} secrets are not solved by the tree", report.failures.len());
    }
    Ok(())
}

fn run_score_command(space: &CodeSpace, first: &str, second: &str) -> Result<()> {
    let result = score_codes(space, first, second)?;
    print_score_result(&result);
    Ok(())
}
