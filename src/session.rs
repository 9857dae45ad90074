//! The line-oriented session loop.
//!
//! Each input line parses to one user action, applies synchronously to the
//! `App`, and renders its feedback before the next line is read. The same
//! loop drives the interactive prompt and scripted batch runs.

use crate::app::App;
use crate::picker::PickerMode;
use crate::render;
use anyhow::{anyhow, Result};
use rand::Rng;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// One parsed user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    Add(String),
    Mode(PickerMode),
    Pick,
    Rate(u8),
    Tried(u64),
    Delete(u64),
    Search(String),
    Filter(u8),
    List,
    Stats,
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Parse one input line. Blank lines parse to `None`; malformed input is an
/// error the loop reports without aborting the session.
pub fn parse_cmd(line: &str) -> Result<Option<Cmd>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };
    let cmd = match verb {
        "add" => Cmd::Add(rest.to_string()),
        "mode" => match rest {
            "discover" => Cmd::Mode(PickerMode::Discover),
            "favorites" => Cmd::Mode(PickerMode::Favorites),
            _ => return Err(anyhow!("mode must be 'discover' or 'favorites'")),
        },
        "pick" => Cmd::Pick,
        "rate" => Cmd::Rate(parse_arg(rest, "rate <1-5>")?),
        "tried" => Cmd::Tried(parse_arg(rest, "tried <id>")?),
        "delete" => Cmd::Delete(parse_arg(rest, "delete <id>")?),
        "search" => Cmd::Search(rest.to_string()),
        "filter" => {
            let rating: u8 = parse_arg(rest, "filter <0-5>")?;
            if rating > 5 {
                return Err(anyhow!("filter must be 0-5 (0 shows all ratings)"));
            }
            Cmd::Filter(rating)
        }
        "list" => Cmd::List,
        "stats" => Cmd::Stats,
        "help" => Cmd::Help,
        "quit" | "exit" => Cmd::Quit,
        other => return Err(anyhow!("unknown command '{other}' (try 'help')")),
    };
    Ok(Some(cmd))
}

fn parse_arg<T: FromStr>(raw: &str, usage: &str) -> Result<T> {
    raw.parse().map_err(|_| anyhow!("usage: {usage}"))
}

fn apply<R: Rng, W: Write>(app: &mut App, cmd: Cmd, rng: &mut R, out: &mut W) -> Result<Flow> {
    match cmd {
        Cmd::Add(name) => {
            // Blank names are silently ignored, matching the store contract.
            if let Some(idea) = app.add(&name) {
                writeln!(out, "added #{} {}", idea.id, idea.name)?;
            }
        }
        Cmd::Mode(mode) => {
            app.mode = mode;
            writeln!(out, "picker mode: {}", mode.label())?;
        }
        Cmd::Pick => {
            let mode = app.mode;
            match app.pick(rng) {
                Some(idea) => {
                    let line = render::picked_line(idea, mode);
                    writeln!(out, "{line}")?;
                    if app.awaiting_rating() {
                        writeln!(out, "{}", render::RATE_PROMPT)?;
                    }
                }
                None => writeln!(out, "{}", render::no_candidates_notice(mode))?,
            }
        }
        Cmd::Rate(rating) => match app.rate_current(rating) {
            Ok(Some(idea)) => writeln!(
                out,
                "rated #{} {} {} ({rating}/5)",
                idea.id,
                idea.name,
                render::stars(rating)
            )?,
            Ok(None) => writeln!(out, "nothing to rate - discover something first")?,
            Err(err) => writeln!(out, "{err}")?,
        },
        Cmd::Tried(id) => match app.toggle_tried(id) {
            Some(idea) => {
                let state = if idea.tried { "tried" } else { "not tried" };
                writeln!(out, "#{} {} is now {state}", idea.id, idea.name)?;
            }
            None => writeln!(out, "no idea with id {id}")?,
        },
        Cmd::Delete(id) => {
            if app.delete(id) {
                writeln!(out, "deleted #{id}")?;
            } else {
                writeln!(out, "no idea with id {id}")?;
            }
        }
        Cmd::Search(term) => {
            app.search_term = term;
            if app.search_term.is_empty() {
                writeln!(out, "search cleared")?;
            } else {
                writeln!(out, "searching for '{}'", app.search_term)?;
            }
        }
        Cmd::Filter(rating) => {
            app.filter_rating = rating;
            if rating == 0 {
                writeln!(out, "rating filter off")?;
            } else {
                writeln!(out, "showing only {rating}-rated ideas")?;
            }
        }
        Cmd::List => {
            let visible = app.visible();
            writeln!(out, "your food ideas ({} shown)", visible.len())?;
            for idea in visible {
                writeln!(out, "{}", render::idea_line(idea))?;
            }
        }
        Cmd::Stats => {
            for line in render::stats_lines(&app.stats()) {
                writeln!(out, "{line}")?;
            }
        }
        Cmd::Help => writeln!(out, "{}", render::HELP)?,
        Cmd::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

/// Drive a session over any line source and sink. Interactive sessions get
/// a banner and a prompt; scripted runs read until `quit` or end of input.
pub fn run<R, I, W>(app: &mut App, rng: &mut R, input: I, out: &mut W, interactive: bool) -> Result<()>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    if interactive {
        writeln!(out, "{}", render::WELCOME)?;
    }
    let mut lines = input.lines();
    loop {
        if interactive {
            write!(out, "> ")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        match parse_cmd(&line) {
            Ok(None) => {}
            Ok(Some(cmd)) => {
                if apply(app, cmd, rng, out)? == Flow::Quit {
                    break;
                }
            }
            Err(err) => writeln!(out, "{err}")?,
        }
    }
    Ok(())
}
