//! Session Analyzer and Level-Up Evaluator
//!
//! Consumes completed session records: splits vocabulary into active
//! (produced by the child) and passive (only recognized), scores
//! engagement 0-100, and decides difficulty progression from the trailing
//! session window.

use std::collections::HashSet;

use tracing::debug;

use crate::types::{LearnerProfile, LearningSession, SessionAnalysis};

// ==================== Constants ====================

/// Ideal session length in minutes; longer sessions do not score extra.
const IDEAL_SESSION_MINUTES: f64 = 15.0;

/// Engagement score weights: active use, duration, reported engagement.
const ACTIVE_RATIO_WEIGHT: f64 = 40.0;
const DURATION_WEIGHT: f64 = 30.0;
const ENGAGEMENT_WEIGHT: f64 = 30.0;

/// Trailing sessions examined for level-up.
const LEVEL_UP_WINDOW: usize = 5;

/// Sessions in the window that must show medium/high engagement.
const LEVEL_UP_REQUIRED: usize = 4;

// ==================== Analyzer ====================

/// Split one session's vocabulary into active/passive and score
/// engagement. Deterministic and total.
pub fn analyze_session(session: &LearningSession) -> SessionAnalysis {
    let active_words = session.words_used_actively.clone();
    let active_set: HashSet<&str> = active_words.iter().map(String::as_str).collect();
    let passive_words: Vec<String> = session
        .words_encountered
        .iter()
        .filter(|w| !active_set.contains(w.as_str()))
        .cloned()
        .collect();

    let active_ratio =
        active_words.len() as f64 / session.words_encountered.len().max(1) as f64;
    let duration_bonus = (session.duration as f64 / IDEAL_SESSION_MINUTES).min(1.0);
    let engagement_bonus = session.engagement_level.bonus();

    // Active lists are not guaranteed to be a subset of encountered lists,
    // so the ratio can pass 1; cap the score at the contract bound.
    let engagement_score = (active_ratio * ACTIVE_RATIO_WEIGHT
        + duration_bonus * DURATION_WEIGHT
        + engagement_bonus * ENGAGEMENT_WEIGHT)
        .round()
        .min(100.0) as u32;

    SessionAnalysis {
        active_words,
        passive_words,
        engagement_score,
    }
}

// ==================== Level-Up ====================

/// Should the learner advance a difficulty level. Requires a full
/// trailing window of sessions; at most one low-engagement session is
/// tolerated in it.
pub fn should_level_up(profile: &LearnerProfile, recent_sessions: &[LearningSession]) -> bool {
    if recent_sessions.len() < LEVEL_UP_WINDOW {
        return false;
    }

    let window = &recent_sessions[recent_sessions.len() - LEVEL_UP_WINDOW..];
    let qualifying = window
        .iter()
        .filter(|s| s.engagement_level.is_engaged())
        .count();

    debug!(child = %profile.id, qualifying, window = LEVEL_UP_WINDOW, "level-up check");

    qualifying >= LEVEL_UP_REQUIRED
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EngagementLevel, LearningStyle};
    use chrono::{DateTime, Utc};

    fn date() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn session(
        duration: u32,
        encountered: &[&str],
        active: &[&str],
        level: EngagementLevel,
    ) -> LearningSession {
        LearningSession {
            id: "s1".to_string(),
            child_id: "c1".to_string(),
            date: date(),
            duration,
            words_encountered: encountered.iter().map(|s| s.to_string()).collect(),
            words_used_actively: active.iter().map(|s| s.to_string()).collect(),
            engagement_level: level,
            activities_completed: vec!["matching".to_string()],
        }
    }

    fn profile() -> LearnerProfile {
        LearnerProfile {
            id: "c1".to_string(),
            name: "Maya".to_string(),
            interests: vec![],
            level: 1,
            learning_style: LearningStyle::Mixed,
            attention_span: 15,
            preferred_time_of_day: None,
        }
    }

    fn sessions_with_levels(levels: &[EngagementLevel]) -> Vec<LearningSession> {
        levels
            .iter()
            .map(|&l| session(15, &["a"], &["a"], l))
            .collect()
    }

    #[test]
    fn test_reference_session_scores_80() {
        // ratio 0.5, duration bonus 1.0, high engagement:
        // round(0.5*40 + 30 + 30) = 80
        let s = session(15, &["a", "b", "c", "d"], &["a", "b"], EngagementLevel::High);
        let analysis = analyze_session(&s);
        assert_eq!(analysis.engagement_score, 80);
        assert_eq!(analysis.active_words, vec!["a", "b"]);
        assert_eq!(analysis.passive_words, vec!["c", "d"]);
    }

    #[test]
    fn test_empty_encountered_list_is_guarded() {
        let s = session(15, &[], &[], EngagementLevel::Low);
        let analysis = analyze_session(&s);
        assert_eq!(analysis.engagement_score, (30.0 + 0.4 * 30.0_f64).round() as u32);
        assert!(analysis.active_words.is_empty());
        assert!(analysis.passive_words.is_empty());
    }

    #[test]
    fn test_long_session_duration_bonus_caps() {
        let short = session(15, &["a", "b"], &["a"], EngagementLevel::Medium);
        let long = session(90, &["a", "b"], &["a"], EngagementLevel::Medium);
        assert_eq!(
            analyze_session(&short).engagement_score,
            analyze_session(&long).engagement_score
        );
    }

    #[test]
    fn test_score_clamped_to_100() {
        // Active words that never appear in the encountered list push the
        // raw ratio past 1.
        let s = session(15, &["a"], &["x", "y", "z"], EngagementLevel::High);
        assert_eq!(analyze_session(&s).engagement_score, 100);
    }

    #[test]
    fn test_level_up_needs_five_sessions() {
        use EngagementLevel::*;
        let sessions = sessions_with_levels(&[High, High, High, High]);
        assert!(!should_level_up(&profile(), &sessions));
    }

    #[test]
    fn test_level_up_tolerates_one_low() {
        use EngagementLevel::*;
        let sessions = sessions_with_levels(&[High, High, Medium, High, Low]);
        assert!(should_level_up(&profile(), &sessions));
    }

    #[test]
    fn test_level_up_rejects_two_lows() {
        use EngagementLevel::*;
        let sessions = sessions_with_levels(&[High, Low, Low, Medium, High]);
        assert!(!should_level_up(&profile(), &sessions));
    }

    #[test]
    fn test_level_up_looks_at_trailing_window_only() {
        use EngagementLevel::*;
        // Old lows, strong recent window.
        let sessions = sessions_with_levels(&[Low, Low, High, High, Medium, High, High]);
        assert!(should_level_up(&profile(), &sessions));
    }
}
