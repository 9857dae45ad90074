use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

mod app;
mod cli;
mod picker;
mod render;
mod session;
mod store;
mod view;

use app::App;
use cli::{Command, RootArgs, RunArgs, SessionArgs};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = RootArgs::parse();
    match args.command {
        Command::Session(args) => cmd_session(args),
        Command::Run(args) => cmd_run(args),
    }
}

fn cmd_session(args: SessionArgs) -> Result<()> {
    let mut app = App::default();
    let mut rng = picker_rng(args.seed);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session::run(&mut app, &mut rng, stdin.lock(), &mut stdout, true)
}

fn cmd_run(args: RunArgs) -> Result<()> {
    let mut app = App::default();
    let mut rng = picker_rng(args.seed);
    match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("open script {}", path.display()))?;
            drive(&mut app, &mut rng, BufReader::new(file), args.json)
        }
        None => {
            let stdin = io::stdin();
            drive(&mut app, &mut rng, stdin.lock(), args.json)
        }
    }
}

fn drive<R: Rng, I: BufRead>(app: &mut App, rng: &mut R, input: I, json: bool) -> Result<()> {
    if json {
        session::run(app, rng, input, &mut io::sink(), false)?;
        let snapshot = Snapshot {
            ideas: app.store.ideas(),
            stats: app.stats(),
        };
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        let mut stdout = io::stdout();
        session::run(app, rng, input, &mut stdout, false)?;
    }
    Ok(())
}

/// Machine-readable end-of-run state for `run --json`.
#[derive(Serialize)]
struct Snapshot<'a> {
    ideas: &'a [store::FoodIdea],
    stats: view::Stats,
}

fn picker_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
