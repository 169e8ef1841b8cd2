//! Activity Recommender
//!
//! Maps learning style, attention span, and available time to one activity
//! category. Three duration bands, first match wins; styles without a
//! band-specific activity fall through to the band default.

use crate::types::{Activity, LearningStyle};

// ==================== Constants ====================

/// Sessions under this many minutes get quick, low-setup activities.
const SHORT_SESSION_MINUTES: u32 = 10;

/// Upper bound of the medium band.
const MEDIUM_SESSION_MINUTES: u32 = 20;

// ==================== Recommender ====================

/// Pick the best activity for the style and time budget. Pure and total.
pub fn recommend_activity(
    style: LearningStyle,
    attention_span: u32,
    available_minutes: u32,
) -> Activity {
    // Short session
    if available_minutes < SHORT_SESSION_MINUTES || attention_span < SHORT_SESSION_MINUTES {
        return match style {
            LearningStyle::Kinesthetic => Activity::Actions,
            LearningStyle::Auditory => Activity::Pronunciation,
            LearningStyle::Visual => Activity::Matching,
            LearningStyle::Mixed => Activity::ISpy,
        };
    }

    // Medium session
    if available_minutes < MEDIUM_SESSION_MINUTES || attention_span < MEDIUM_SESSION_MINUTES {
        return match style {
            LearningStyle::Kinesthetic => Activity::Charades,
            LearningStyle::Auditory => Activity::Story,
            _ => Activity::Scavenger,
        };
    }

    // Long session
    match style {
        LearningStyle::Kinesthetic => Activity::Scavenger,
        _ => Activity::Story,
    }
}

// ==================== Tests ====================
