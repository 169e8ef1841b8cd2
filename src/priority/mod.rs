//! Word Priority Scorer
//!
//! Assigns a non-negative integer priority to a word for a given learner.
//! Higher score means higher urgency to present the word next.
//!
//! Additive factors:
//! - Exposure insufficiency: children need 6-12 exposures for retention
//! - Interest alignment: word category matches the learner's interests
//! - Non-mastery
//! - Level-appropriate difficulty: ordinal equals min(3, level/2 + 1)
//! - Spacing effect: re-exposure 3-7 days after the last practice is the
//!   optimal retention window; never-practiced words get a smaller fixed
//!   bonus instead
//!
//! Reference:
//! - Childers & Tomasello (2002) on exposure counts for early vocabulary.
//! - Cepeda et al. (2006) on distributed-practice spacing.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::types::{LearnerProfile, Word};

// ==================== Constants ====================

/// Bonus when exposures are below the retention floor.
const LOW_EXPOSURE_BONUS: u32 = 10;

/// Bonus when exposures sit inside the 6-12 retention band.
const MID_EXPOSURE_BONUS: u32 = 5;

/// Bonus when the word category matches a learner interest.
const INTEREST_BONUS: u32 = 8;

/// Bonus for words not yet mastered.
const UNMASTERED_BONUS: u32 = 7;

/// Bonus when word difficulty matches the learner's level band.
const LEVEL_MATCH_BONUS: u32 = 6;

/// Bonus when the last practice falls in the optimal spacing window.
const SPACING_BONUS: u32 = 5;

/// Bonus for words never practiced at all.
const NEVER_PRACTICED_BONUS: u32 = 4;

/// Exposures below this always need repetition.
const EXPOSURE_FLOOR: u32 = 6;

/// Exposures past this stop contributing urgency.
const EXPOSURE_CEILING: u32 = 12;

/// Inclusive optimal spacing window, whole days since last practice.
const SPACING_MIN_DAYS: i64 = 3;
const SPACING_MAX_DAYS: i64 = 7;

// ==================== Weights ====================

/// Tunable scoring constants. The defaults reproduce the production
/// weights; they are empirical, not derived, so treat them as parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityWeights {
    pub low_exposure: u32,
    pub mid_exposure: u32,
    pub interest: u32,
    pub unmastered: u32,
    pub level_match: u32,
    pub spacing: u32,
    pub never_practiced: u32,
    pub exposure_floor: u32,
    pub exposure_ceiling: u32,
    pub spacing_min_days: i64,
    pub spacing_max_days: i64,
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            low_exposure: LOW_EXPOSURE_BONUS,
            mid_exposure: MID_EXPOSURE_BONUS,
            interest: INTEREST_BONUS,
            unmastered: UNMASTERED_BONUS,
            level_match: LEVEL_MATCH_BONUS,
            spacing: SPACING_BONUS,
            never_practiced: NEVER_PRACTICED_BONUS,
            exposure_floor: EXPOSURE_FLOOR,
            exposure_ceiling: EXPOSURE_CEILING,
            spacing_min_days: SPACING_MIN_DAYS,
            spacing_max_days: SPACING_MAX_DAYS,
        }
    }
}

impl PriorityWeights {
    /// Largest score any word can reach under these weights.
    pub fn max_score(&self) -> u32 {
        self.low_exposure
            + self.interest
            + self.unmastered
            + self.level_match
            + self.spacing.max(self.never_practiced)
    }
}

// ==================== Scoring ====================

/// Whether a word still needs repetition before retention is plausible.
pub fn needs_more_exposure(word: &Word) -> bool {
    word.exposure_count < EXPOSURE_FLOOR
        || (!word.mastered && word.exposure_count < EXPOSURE_CEILING)
}

/// Difficulty ordinal the learner's level maps to: min(3, level/2 + 1).
pub fn target_ordinal(level: u32) -> u32 {
    (level / 2 + 1).min(3)
}

/// Priority of one word for one learner. Pure; `now` is the only clock
/// input, so fixed arguments give a fixed score.
pub fn word_priority(
    word: &Word,
    profile: &LearnerProfile,
    weights: &PriorityWeights,
    now: DateTime<Utc>,
) -> u32 {
    let mut priority = 0;

    if word.exposure_count < weights.exposure_floor {
        priority += weights.low_exposure;
    } else if word.exposure_count < weights.exposure_ceiling {
        priority += weights.mid_exposure;
    }

    if profile.interests.iter().any(|i| i == &word.category) {
        priority += weights.interest;
    }

    if !word.mastered {
        priority += weights.unmastered;
    }

    if word.difficulty.ordinal() == target_ordinal(profile.level) {
        priority += weights.level_match;
    }

    match word.last_practiced {
        Some(last) => {
            // Whole days; a future timestamp yields a negative count and
            // falls outside the window.
            let days_since = (now - last).num_days();
            if (weights.spacing_min_days..=weights.spacing_max_days).contains(&days_since) {
                priority += weights.spacing;
            }
        }
        None => priority += weights.never_practiced,
    }

    priority
}

/// Score the whole catalog in parallel. Output order matches input order.
pub fn score_catalog(
    catalog: &[Word],
    profile: &LearnerProfile,
    weights: &PriorityWeights,
    now: DateTime<Utc>,
) -> Vec<u32> {
    catalog
        .par_iter()
        .map(|word| word_priority(word, profile, weights, now))
        .collect()
}

// ==================== Tests ====================
