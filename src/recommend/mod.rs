//! Combined Recommendation Builder
//!
//! Composes the selector and the activity recommender into one
//! recommendation: next words, activity, inferred difficulty, a
//! human-readable reason, and an estimated duration. Also picks the word
//! of the day for the home view.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::activity::recommend_activity;
use crate::priority::{needs_more_exposure, score_catalog, PriorityWeights};
use crate::selector::WordSelector;
use crate::types::{Difficulty, LearnerProfile, Recommendation, Word, WordOfTheDay};

// ==================== Constants ====================

/// Words per recommendation.
pub const DEFAULT_WORD_COUNT: usize = 5;

/// Assumed time budget when the caller does not supply one.
pub const DEFAULT_AVAILABLE_MINUTES: u32 = 15;

/// Substitute span when the profile has none recorded.
const FALLBACK_ATTENTION_SPAN: u32 = 15;

/// Mean selected-word exposure below this reads as an easy set.
const EASY_EXPOSURE_CEILING: f64 = 3.0;

/// Below this, medium; past it, hard.
const MEDIUM_EXPOSURE_CEILING: f64 = 8.0;

// ==================== Builder ====================

/// Build the full recommendation for one learner.
///
/// The selected-word list drives the difficulty estimate; an empty catalog
/// propagates to an empty list and defaults the difficulty to easy rather
/// than averaging over nothing.
pub fn build_recommendation(
    catalog: &[Word],
    profile: &LearnerProfile,
    selector: &mut WordSelector,
    weights: &PriorityWeights,
    available_minutes: u32,
    now: DateTime<Utc>,
) -> Recommendation {
    let next_words =
        selector.select_weighted(catalog, profile, DEFAULT_WORD_COUNT, weights, now);
    let recommended_activity =
        recommend_activity(profile.learning_style, profile.attention_span, available_minutes);

    let difficulty = infer_difficulty(&next_words);

    let needing_exposure = next_words
        .iter()
        .filter(|w| w.exposure_count < weights.exposure_floor)
        .count();
    let interest_match = next_words
        .iter()
        .filter(|w| profile.interests.iter().any(|i| i == &w.category))
        .count();

    let mut reason = format!("Selected based on {}'s learning needs. ", profile.name);
    if needing_exposure > 0 {
        reason.push_str(&format!("{} word(s) need more practice. ", needing_exposure));
    }
    if interest_match > 0 {
        reason.push_str(&format!("{} word(s) match interests. ", interest_match));
    }
    reason.push_str(&format!(
        "Best activity: {} (suits {} learning style).",
        recommended_activity.as_str(),
        profile.learning_style.as_str()
    ));

    let attention_span = if profile.attention_span == 0 {
        FALLBACK_ATTENTION_SPAN
    } else {
        profile.attention_span
    };
    let estimated_duration = available_minutes.min(attention_span);

    debug!(
        child = %profile.id,
        words = next_words.len(),
        activity = recommended_activity.as_str(),
        difficulty = difficulty.as_str(),
        "built recommendation"
    );

    Recommendation {
        next_words,
        recommended_activity,
        difficulty,
        reason,
        estimated_duration,
    }
}

fn infer_difficulty(selected: &[Word]) -> Difficulty {
    if selected.is_empty() {
        return Difficulty::Easy;
    }
    let avg = selected.iter().map(|w| w.exposure_count as f64).sum::<f64>()
        / selected.len() as f64;
    if avg < EASY_EXPOSURE_CEILING {
        Difficulty::Easy
    } else if avg < MEDIUM_EXPOSURE_CEILING {
        Difficulty::Medium
    } else {
        Difficulty::Hard
    }
}

// ==================== Word of the Day ====================

/// The single highest-priority word right now. Ties resolve to the
/// earliest catalog entry. Empty catalog yields `None`.
pub fn word_of_the_day(
    catalog: &[Word],
    profile: &LearnerProfile,
    weights: &PriorityWeights,
    now: DateTime<Utc>,
) -> Option<WordOfTheDay> {
    let scores = score_catalog(catalog, profile, weights, now);
    let (best_idx, best_score) = scores
        .iter()
        .enumerate()
        .fold(None::<(usize, u32)>, |best, (i, &s)| match best {
            Some((_, top)) if top >= s => best,
            _ => Some((i, s)),
        })?;

    let word = catalog[best_idx].clone();
    let mut clauses: Vec<&str> = Vec::new();
    if needs_more_exposure(&word) {
        clauses.push("it needs more practice");
    }
    if profile.interests.iter().any(|i| i == &word.category) {
        clauses.push("it matches an interest");
    }
    if word.last_practiced.is_none() {
        clauses.push("it's brand new");
    }
    let reason = if clauses.is_empty() {
        format!("{} is ready for review today.", word.text)
    } else {
        format!("{} is today's pick: {}.", word.text, clauses.join(" and "))
    };

    Some(WordOfTheDay {
        word,
        priority_score: best_score,
        reason,
    })
}

// ==================== Tests ====================
