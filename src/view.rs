//! Derived projections over the store: search/rating filtering and
//! aggregate statistics. Both are read-only and preserve insertion order.

use crate::store::FoodIdea;
use serde::Serialize;

/// Ideas whose name contains `search_term` case-insensitively and whose
/// rating matches `filter_rating` (0 matches everything).
pub fn filter<'a>(
    ideas: &'a [FoodIdea],
    search_term: &str,
    filter_rating: u8,
) -> Vec<&'a FoodIdea> {
    let needle = search_term.to_lowercase();
    ideas
        .iter()
        .filter(|idea| {
            let matches_search = idea.name.to_lowercase().contains(&needle);
            let matches_rating = filter_rating == 0 || idea.rating == Some(filter_rating);
            matches_search && matches_rating
        })
        .collect()
}

/// Aggregate stats over the whole store. `avg_rating` is absent (not zero)
/// while no idea is rated.
#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    pub total: usize,
    pub tried: usize,
    pub avg_rating: Option<f64>,
}

pub fn stats(ideas: &[FoodIdea]) -> Stats {
    let ratings: Vec<u8> = ideas.iter().filter_map(|idea| idea.rating).collect();
    let avg_rating = if ratings.is_empty() {
        None
    } else {
        Some(ratings.iter().map(|&r| f64::from(r)).sum::<f64>() / ratings.len() as f64)
    };
    Stats {
        total: ideas.len(),
        tried: ideas.iter().filter(|idea| idea.tried).count(),
        avg_rating,
    }
}
