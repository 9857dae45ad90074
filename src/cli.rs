//! CLI argument parsing for the tracker.
//!
//! The CLI is intentionally thin: both commands feed the same session loop,
//! so the core transitions stay independent of how input arrives.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "tastebud",
    version,
    about = "In-memory food-idea tracker with a weighted random picker",
    after_help = "Commands:\n  session              Interactive prompt (state lives for the session)\n  run --script <PATH>  Apply a scripted action sequence\n\nExamples:\n  tastebud session\n  tastebud run --script plan.txt\n  tastebud run --script plan.txt --seed 7 --json\n  echo 'add tacos' | tastebud run --json",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Session(SessionArgs),
    Run(RunArgs),
}

/// Interactive session on stdin/stdout.
#[derive(Parser, Debug)]
#[command(about = "Start an interactive tracker session")]
pub struct SessionArgs {
    /// Seed the random picker for a reproducible session
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,
}

/// Scripted batch run, mainly for tests and demos.
#[derive(Parser, Debug)]
#[command(about = "Apply a scripted action sequence")]
pub struct RunArgs {
    /// Script file of one action per line; reads stdin when omitted
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Seed the random picker for a reproducible run
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Suppress the transcript and print a final state snapshot as JSON
    #[arg(long)]
    pub json: bool,
}
