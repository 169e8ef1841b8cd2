//! Parent Insights and Progress Summary
//!
//! Plain-language takeaways for the parent dashboard, plus the aggregate
//! numbers behind it: mastery counts, active vs passive vocabulary, and
//! per-category progress.

use std::collections::{BTreeMap, HashSet};

use crate::priority::PriorityWeights;
use crate::types::{
    CategoryProgress, EngagementLevel, LearnerProfile, LearningSession, ProgressSummary, Word,
};

// ==================== Constants ====================

/// Trailing sessions examined for the engagement-trend insight.
const TREND_WINDOW: usize = 3;

/// Mean trend weight at or above this reads as excellent engagement.
const TREND_PRAISE_THRESHOLD: f64 = 2.5;

/// Below this, suggest shorter or more physical sessions.
const TREND_CONCERN_THRESHOLD: f64 = 1.5;

// ==================== Insights ====================

/// Personalized insight strings for the parent dashboard.
pub fn parent_insights(
    profile: &LearnerProfile,
    catalog: &[Word],
    recent_sessions: &[LearningSession],
) -> Vec<String> {
    let mut insights = Vec::new();

    // Vocabulary growth
    if !catalog.is_empty() {
        let mastered = catalog.iter().filter(|w| w.mastered).count();
        let percent = (mastered as f64 / catalog.len() as f64 * 100.0).round();
        insights.push(format!(
            "{} knows {} words confidently! That's {}% of the curriculum.",
            profile.name, mastered, percent
        ));
    }

    // Learning style match
    insights.push(format!(
        "{} learns best through {} activities. {}",
        profile.name,
        profile.learning_style.as_str(),
        style_suggestion(profile)
    ));

    // Exposure tracking
    let exposure_floor = PriorityWeights::default().exposure_floor;
    let needing_more = catalog
        .iter()
        .filter(|w| w.exposure_count < exposure_floor)
        .count();
    if needing_more > 0 {
        insights.push(format!(
            "{} words need more repetition. Remember, 6-12 exposures are ideal for long-term retention!",
            needing_more
        ));
    }

    // Engagement trend
    if recent_sessions.len() >= TREND_WINDOW {
        let window = &recent_sessions[recent_sessions.len() - TREND_WINDOW..];
        let avg = window
            .iter()
            .map(|s| trend_weight(s.engagement_level))
            .sum::<f64>()
            / TREND_WINDOW as f64;

        if avg >= TREND_PRAISE_THRESHOLD {
            insights.push(format!(
                "Engagement is excellent! {} is really enjoying the learning activities.",
                profile.name
            ));
        } else if avg < TREND_CONCERN_THRESHOLD {
            insights.push(
                "Try shorter sessions or more physical activities to boost engagement."
                    .to_string(),
            );
        }
    }

    // Best time recommendation
    if let Some(time) = profile.preferred_time_of_day {
        insights.push(format!(
            "{} focuses best in the {}. Try to schedule learning sessions then!",
            profile.name,
            time.as_str()
        ));
    }

    insights
}

fn style_suggestion(profile: &LearnerProfile) -> &'static str {
    use crate::types::LearningStyle::*;
    match profile.learning_style {
        Kinesthetic => "Try incorporating more movement and hands-on experiences!",
        Visual => "Try picture books and matching games together!",
        Auditory => "Try songs, rhymes, and reading aloud together!",
        Mixed => "Try mixing pictures, sounds, and hands-on play!",
    }
}

fn trend_weight(level: EngagementLevel) -> f64 {
    match level {
        EngagementLevel::High => 3.0,
        EngagementLevel::Medium => 2.0,
        EngagementLevel::Low => 1.0,
    }
}

// ==================== Progress Summary ====================

/// Aggregate catalog and session history into dashboard numbers.
pub fn progress_summary(catalog: &[Word], sessions: &[LearningSession]) -> ProgressSummary {
    let total_words = catalog.len() as u32;
    let mastered_words = catalog.iter().filter(|w| w.mastered).count() as u32;

    let average_exposures_per_word = if catalog.is_empty() {
        0.0
    } else {
        catalog.iter().map(|w| w.exposure_count as f64).sum::<f64>() / catalog.len() as f64
    };

    let active_ids: HashSet<&str> = sessions
        .iter()
        .flat_map(|s| s.words_used_actively.iter().map(String::as_str))
        .collect();
    let encountered_ids: HashSet<&str> = sessions
        .iter()
        .flat_map(|s| s.words_encountered.iter().map(String::as_str))
        .collect();
    let active_vocabulary = active_ids.len() as u32;
    let passive_vocabulary = encountered_ids.difference(&active_ids).count() as u32;

    // BTreeMap keeps category order stable across calls.
    let mut per_category: BTreeMap<&str, (u32, u32)> = BTreeMap::new();
    for word in catalog {
        let entry = per_category.entry(word.category.as_str()).or_insert((0, 0));
        entry.1 += 1;
        if word.mastered {
            entry.0 += 1;
        }
    }
    let category_progress = per_category
        .into_iter()
        .map(|(category, (mastered, total))| CategoryProgress {
            category: category.to_string(),
            mastered,
            total,
            progress: if total == 0 {
                0.0
            } else {
                mastered as f64 / total as f64
            },
        })
        .collect();

    ProgressSummary {
        total_words,
        mastered_words,
        average_exposures_per_word,
        active_vocabulary,
        passive_vocabulary,
        category_progress,
    }
}

// ==================== Tests ====================
