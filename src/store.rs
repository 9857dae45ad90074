//! The in-memory food-idea store.
//!
//! An append-ordered list with point mutation and point deletion by id.
//! Ids are assigned monotonically at creation and never reused within a
//! session, so the store cannot hold two records with the same id.

use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use serde::Serialize;

pub const RATING_MIN: u8 = 1;
pub const RATING_MAX: u8 = 5;

/// A single tracked food suggestion.
#[derive(Debug, Clone, Serialize)]
pub struct FoodIdea {
    pub id: u64,
    pub name: String,
    /// 1-5 once rated, `None` while not yet rated.
    pub rating: Option<u8>,
    pub tried: bool,
    /// Creation stamp, display-only.
    pub date_added: NaiveDate,
}

impl FoodIdea {
    /// Selection weight: equals the rating once rated. Only favorites-mode
    /// selection reads weights, and its candidates are always rated.
    pub fn weight(&self) -> u32 {
        u32::from(self.rating.unwrap_or(RATING_MIN))
    }
}

#[derive(Debug, Default, Clone)]
pub struct Store {
    ideas: Vec<FoodIdea>,
    next_id: u64,
}

impl Store {
    /// Append a new idea. Blank input is ignored, not an error: the
    /// returned value is `None` and the store is left unchanged.
    pub fn add(&mut self, name: &str) -> Option<&FoodIdea> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        self.next_id += 1;
        let idea = FoodIdea {
            id: self.next_id,
            name: name.to_string(),
            rating: None,
            tried: false,
            date_added: Local::now().date_naive(),
        };
        tracing::debug!(id = idea.id, name = %idea.name, "idea added");
        self.ideas.push(idea);
        self.ideas.last()
    }

    /// Set a rating on the matching idea. Rating implies tried. An
    /// out-of-range rating is rejected; a missing id is a no-op.
    pub fn rate(&mut self, id: u64, rating: u8) -> Result<()> {
        if !(RATING_MIN..=RATING_MAX).contains(&rating) {
            return Err(anyhow!(
                "rating must be between {RATING_MIN} and {RATING_MAX}, got {rating}"
            ));
        }
        if let Some(idea) = self.ideas.iter_mut().find(|idea| idea.id == id) {
            idea.rating = Some(rating);
            idea.tried = true;
            tracing::debug!(id, rating, "idea rated");
        }
        Ok(())
    }

    /// Flip the tried flag. A missing id is a no-op; the tried flag stays
    /// independent of the rating here (toggling never clears a rating).
    pub fn toggle_tried(&mut self, id: u64) {
        if let Some(idea) = self.ideas.iter_mut().find(|idea| idea.id == id) {
            idea.tried = !idea.tried;
            tracing::debug!(id, tried = idea.tried, "tried flag toggled");
        }
    }

    /// Remove the matching idea permanently. A missing id is a no-op.
    pub fn remove(&mut self, id: u64) {
        let before = self.ideas.len();
        self.ideas.retain(|idea| idea.id != id);
        if self.ideas.len() != before {
            tracing::debug!(id, "idea removed");
        }
    }

    pub fn get(&self, id: u64) -> Option<&FoodIdea> {
        self.ideas.iter().find(|idea| idea.id == id)
    }

    /// All ideas in insertion order.
    pub fn ideas(&self) -> &[FoodIdea] {
        &self.ideas
    }
}
