//! Random selection over the store.
//!
//! Discover mode draws uniformly from the unrated ideas; favorites mode
//! draws from the rated ideas with probability proportional to rating via
//! cumulative-weight sampling. An empty candidate set yields no selection.

use crate::store::FoodIdea;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickerMode {
    Discover,
    Favorites,
}

impl PickerMode {
    pub fn label(&self) -> &'static str {
        match self {
            PickerMode::Discover => "discover",
            PickerMode::Favorites => "favorites",
        }
    }
}

/// Candidate set for a mode: discover sees only rating-absent ideas,
/// favorites only rated ones. Tried-but-unrated ideas stay eligible for
/// discover; candidacy depends on the rating alone.
pub fn candidates(ideas: &[FoodIdea], mode: PickerMode) -> Vec<&FoodIdea> {
    ideas
        .iter()
        .filter(|idea| match mode {
            PickerMode::Discover => idea.rating.is_none(),
            PickerMode::Favorites => idea.rating.is_some(),
        })
        .collect()
}

/// Pick one idea in the given mode, or `None` when nothing is eligible.
pub fn pick<'a, R: Rng>(
    ideas: &'a [FoodIdea],
    mode: PickerMode,
    rng: &mut R,
) -> Option<&'a FoodIdea> {
    let candidates = candidates(ideas, mode);
    if candidates.is_empty() {
        return None;
    }
    let picked = match mode {
        PickerMode::Discover => candidates[rng.gen_range(0..candidates.len())],
        PickerMode::Favorites => weighted_pick(&candidates, rng),
    };
    tracing::debug!(id = picked.id, mode = mode.label(), "picked idea");
    Some(picked)
}

/// Cumulative-weight sampling: a rating-r idea is r times as likely to be
/// chosen as a rating-1 idea. Draw in [0, W), walk the running sum, return
/// the first candidate whose sum exceeds the draw.
fn weighted_pick<'a, R: Rng>(candidates: &[&'a FoodIdea], rng: &mut R) -> &'a FoodIdea {
    let total: u32 = candidates.iter().map(|idea| idea.weight()).sum();
    let draw = rng.gen_range(0..total);
    let mut running = 0u32;
    for idea in candidates {
        running += idea.weight();
        if draw < running {
            return idea;
        }
    }
    // draw < total, so the walk always returns inside the loop
    candidates[candidates.len() - 1]
}
