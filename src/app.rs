//! Application state for one session.
//!
//! The original tracker kept its list and mode flags as implicit global UI
//! state; here everything lives in an explicit `App` value threaded through
//! the session loop, with the transitions as methods. No global or static
//! state exists.

use crate::picker::{self, PickerMode};
use crate::store::{FoodIdea, Store};
use crate::view::{self, Stats};
use anyhow::Result;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct App {
    pub store: Store,
    pub mode: PickerMode,
    /// Id of the most recent pick, if any.
    current_pick: Option<u64>,
    /// True after a discover pick until a rating arrives.
    awaiting_rating: bool,
    pub search_term: String,
    /// 0 shows all ratings.
    pub filter_rating: u8,
}

impl Default for App {
    fn default() -> Self {
        Self {
            store: Store::default(),
            mode: PickerMode::Discover,
            current_pick: None,
            awaiting_rating: false,
            search_term: String::new(),
            filter_rating: 0,
        }
    }
}

impl App {
    pub fn add(&mut self, name: &str) -> Option<&FoodIdea> {
        self.store.add(name)
    }

    /// Run the picker in the current mode. Discover picks open a rating
    /// prompt; a pending prompt never blocks another pick, the new pick
    /// simply replaces it.
    pub fn pick<R: Rng>(&mut self, rng: &mut R) -> Option<&FoodIdea> {
        let id = picker::pick(self.store.ideas(), self.mode, rng)?.id;
        self.current_pick = Some(id);
        self.awaiting_rating = self.mode == PickerMode::Discover;
        self.store.get(id)
    }

    /// Rate the idea currently awaiting a rating. Returns `Ok(None)` when
    /// nothing is awaiting one; an out-of-range rating errors and leaves the
    /// prompt open.
    pub fn rate_current(&mut self, rating: u8) -> Result<Option<&FoodIdea>> {
        if !self.awaiting_rating {
            return Ok(None);
        }
        let Some(id) = self.current_pick else {
            return Ok(None);
        };
        self.store.rate(id, rating)?;
        self.current_pick = None;
        self.awaiting_rating = false;
        Ok(self.store.get(id))
    }

    /// Flip the tried flag; returns the idea so the caller can report the
    /// new state, or `None` for a missing id (the store no-ops).
    pub fn toggle_tried(&mut self, id: u64) -> Option<&FoodIdea> {
        self.store.toggle_tried(id);
        self.store.get(id)
    }

    /// Delete an idea; reports whether it existed. Deleting the pending
    /// pick closes the rating prompt.
    pub fn delete(&mut self, id: u64) -> bool {
        let existed = self.store.get(id).is_some();
        self.store.remove(id);
        if self.current_pick == Some(id) {
            self.current_pick = None;
            self.awaiting_rating = false;
        }
        existed
    }

    /// The filtered projection for display, in insertion order.
    pub fn visible(&self) -> Vec<&FoodIdea> {
        view::filter(self.store.ideas(), &self.search_term, self.filter_rating)
    }

    pub fn stats(&self) -> Stats {
        view::stats(self.store.ideas())
    }

    pub fn awaiting_rating(&self) -> bool {
        self.awaiting_rating
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    #[test]
    fn discover_pick_opens_a_rating_prompt() {
        let mut app = App::default();
        let id = app.add("tacos").expect("stored").id;

        let picked = app.pick(&mut rng()).expect("one candidate").id;
        assert_eq!(picked, id);
        assert!(app.awaiting_rating());

        let rated = app
            .rate_current(4)
            .expect("in range")
            .expect("prompt was open");
        assert_eq!(rated.rating, Some(4));
        assert!(rated.tried);
        assert!(!app.awaiting_rating());
    }

    #[test]
    fn favorites_pick_opens_no_prompt() {
        let mut app = App::default();
        let id = app.add("ramen").expect("stored").id;
        app.pick(&mut rng()).expect("candidate");
        app.rate_current(5).expect("in range");

        app.mode = PickerMode::Favorites;
        assert_eq!(app.pick(&mut rng()).expect("rated candidate").id, id);
        assert!(!app.awaiting_rating());
    }

    #[test]
    fn rate_without_a_pending_pick_does_nothing() {
        let mut app = App::default();
        app.add("pho").expect("stored");
        assert!(app.rate_current(3).expect("in range").is_none());
        assert_eq!(app.store.ideas()[0].rating, None);
    }

    #[test]
    fn out_of_range_rating_keeps_the_prompt_open() {
        let mut app = App::default();
        app.add("bao").expect("stored");
        app.pick(&mut rng()).expect("candidate");

        assert!(app.rate_current(6).is_err());
        assert!(app.awaiting_rating(), "bad rating must not consume the prompt");

        app.rate_current(2).expect("in range").expect("still open");
    }

    #[test]
    fn a_new_pick_replaces_a_pending_prompt() {
        let mut app = App::default();
        app.add("tacos").expect("stored");
        app.add("ramen").expect("stored");

        let mut rng = rng();
        app.pick(&mut rng).expect("candidates");
        let second = app.pick(&mut rng).expect("prompt does not block").id;

        let rated = app
            .rate_current(5)
            .expect("in range")
            .expect("prompt open")
            .id;
        assert_eq!(rated, second, "rating applies to the latest pick");
    }

    #[test]
    fn deleting_the_pending_pick_closes_the_prompt() {
        let mut app = App::default();
        let id = app.add("tacos").expect("stored").id;
        app.pick(&mut rng()).expect("candidate");

        assert!(app.delete(id));
        assert!(!app.awaiting_rating());
        assert!(app.rate_current(3).expect("in range").is_none());
    }

    #[test]
    fn delete_reports_whether_the_id_existed() {
        let mut app = App::default();
        let id = app.add("pho").expect("stored").id;
        assert!(!app.delete(999));
        assert_eq!(app.store.ideas().len(), 1);
        assert!(app.delete(id));
        assert!(app.store.ideas().is_empty());
    }

    #[test]
    fn visible_applies_session_filters() {
        let mut app = App::default();
        app.add("spicy ramen").expect("stored");
        app.add("mild tacos").expect("stored");

        app.search_term = "ramen".to_string();
        let visible = app.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "spicy ramen");
    }
}
