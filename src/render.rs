//! Plain-text rendering for the session transcript.

use crate::picker::PickerMode;
use crate::store::FoodIdea;
use crate::view::Stats;

pub const WELCOME: &str = "tastebud - type 'help' for commands, 'quit' to leave";

pub const RATE_PROMPT: &str = "how was it? rate 1-5 with 'rate <n>'";

pub const HELP: &str = "\
commands:
  add <name>             save a food idea
  mode discover          pick from unrated ideas (uniform)
  mode favorites         pick from rated ideas (weighted by rating)
  pick                   serve a random idea in the current mode
  rate <1-5>             rate the idea you just discovered
  tried <id>             toggle the tried mark
  delete <id>            remove an idea for good
  search <term>          filter the list by name (bare 'search' clears)
  filter <0-5>           filter the list by rating (0 shows all)
  list                   show the filtered list
  stats                  totals and average rating
  quit                   end the session";

pub fn no_candidates_notice(mode: PickerMode) -> &'static str {
    match mode {
        PickerMode::Discover => "no unrated ideas left - add more to keep discovering",
        PickerMode::Favorites => "no rated ideas yet - discover and rate something first",
    }
}

pub fn stars(rating: u8) -> String {
    "*".repeat(usize::from(rating))
}

pub fn picked_line(idea: &FoodIdea, mode: PickerMode) -> String {
    match mode {
        PickerMode::Discover => format!("your food adventure: {} (#{})", idea.name, idea.id),
        PickerMode::Favorites => {
            let mut line = format!("from your favorites: {} (#{})", idea.name, idea.id);
            if let Some(rating) = idea.rating {
                line.push_str(&format!(" - previously rated {} ({rating}/5)", stars(rating)));
            }
            line
        }
    }
}

/// One list row: tried mark, id, name, rating, creation date.
pub fn idea_line(idea: &FoodIdea) -> String {
    let mark = if idea.tried { "x" } else { " " };
    let rating = match idea.rating {
        Some(rating) => format!(" {} ({rating}/5)", stars(rating)),
        None => String::new(),
    };
    format!(
        "[{mark}] #{} {}{rating} (added {})",
        idea.id, idea.name, idea.date_added
    )
}

pub fn stats_lines(stats: &Stats) -> Vec<String> {
    let avg = match stats.avg_rating {
        Some(avg) => format!("{avg:.1}"),
        None => "n/a".to_string(),
    };
    vec![
        format!("total ideas: {}", stats.total),
        format!("tried: {}", stats.tried),
        format!("avg rating: {avg}"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn idea(rating: Option<u8>, tried: bool) -> FoodIdea {
        FoodIdea {
            id: 7,
            name: "mochi donuts".to_string(),
            rating,
            tried,
            date_added: NaiveDate::from_ymd_opt(2026, 2, 3).expect("valid date"),
        }
    }

    #[test]
    fn idea_line_shows_rating_and_tried_mark() {
        let line = idea_line(&idea(Some(3), true));
        assert_eq!(line, "[x] #7 mochi donuts *** (3/5) (added 2026-02-03)");

        let line = idea_line(&idea(None, false));
        assert_eq!(line, "[ ] #7 mochi donuts (added 2026-02-03)");
    }

    #[test]
    fn favorites_picked_line_includes_the_previous_rating() {
        let line = picked_line(&idea(Some(5), true), PickerMode::Favorites);
        assert!(line.contains("previously rated ***** (5/5)"));

        let line = picked_line(&idea(None, false), PickerMode::Discover);
        assert_eq!(line, "your food adventure: mochi donuts (#7)");
    }

    #[test]
    fn stats_lines_render_a_missing_average_as_na() {
        let lines = stats_lines(&Stats {
            total: 0,
            tried: 0,
            avg_rating: None,
        });
        assert_eq!(lines, vec!["total ideas: 0", "tried: 0", "avg rating: n/a"]);

        let lines = stats_lines(&Stats {
            total: 4,
            tried: 2,
            avg_rating: Some(3.5),
        });
        assert_eq!(lines[2], "avg rating: 3.5");
    }
}
