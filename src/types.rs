//! Common Types
//!
//! Shared data structures used across all engine modules.
//!
//! Wire payloads arriving from the backend API use snake_case field names
//! and live in [`crate::wire`]; everything here is the canonical in-memory
//! model, serialized camelCase for the client views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==================== Enums ====================

/// Difficulty tier of a vocabulary word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Ordinal used when matching a word against the learner's level band.
    pub fn ordinal(&self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        match ordinal {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Medium),
            3 => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// How the child learns best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningStyle {
    Visual,
    Auditory,
    Kinesthetic,
    Mixed,
}

impl LearningStyle {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "visual" => Some(LearningStyle::Visual),
            "auditory" => Some(LearningStyle::Auditory),
            "kinesthetic" => Some(LearningStyle::Kinesthetic),
            "mixed" => Some(LearningStyle::Mixed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LearningStyle::Visual => "visual",
            LearningStyle::Auditory => "auditory",
            LearningStyle::Kinesthetic => "kinesthetic",
            LearningStyle::Mixed => "mixed",
        }
    }
}

/// Coarse engagement label assigned to a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementLevel {
    Low,
    Medium,
    High,
}

impl EngagementLevel {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(EngagementLevel::Low),
            "medium" => Some(EngagementLevel::Medium),
            "high" => Some(EngagementLevel::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EngagementLevel::Low => "low",
            EngagementLevel::Medium => "medium",
            EngagementLevel::High => "high",
        }
    }

    /// Weight of this level in the session engagement score.
    pub fn bonus(&self) -> f64 {
        match self {
            EngagementLevel::High => 1.0,
            EngagementLevel::Medium => 0.7,
            EngagementLevel::Low => 0.4,
        }
    }

    /// Medium or high counts toward level-up eligibility.
    pub fn is_engaged(&self) -> bool {
        matches!(self, EngagementLevel::Medium | EngagementLevel::High)
    }
}

/// Part of the day the child focuses best in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "morning" => Some(TimeOfDay::Morning),
            "afternoon" => Some(TimeOfDay::Afternoon),
            "evening" => Some(TimeOfDay::Evening),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
        }
    }
}

/// Closed set of activity categories the recommender can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    Actions,
    Pronunciation,
    Matching,
    ISpy,
    Charades,
    Story,
    Scavenger,
}

impl Activity {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "actions" => Some(Activity::Actions),
            "pronunciation" => Some(Activity::Pronunciation),
            "matching" => Some(Activity::Matching),
            "ispy" => Some(Activity::ISpy),
            "charades" => Some(Activity::Charades),
            "story" => Some(Activity::Story),
            "scavenger" => Some(Activity::Scavenger),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Activity::Actions => "actions",
            Activity::Pronunciation => "pronunciation",
            Activity::Matching => "matching",
            Activity::ISpy => "ispy",
            Activity::Charades => "charades",
            Activity::Story => "story",
            Activity::Scavenger => "scavenger",
        }
    }
}

// ==================== Domain Records ====================

/// A vocabulary item as the engine sees it.
///
/// `exposure_count` is monotonically non-decreasing over a learner's
/// history; `mastered` is set externally once mastery criteria are met.
/// The engine never mutates either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub id: String,
    /// Display text.
    pub text: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub exposure_count: u32,
    pub mastered: bool,
    pub last_practiced: Option<DateTime<Utc>>,
}

/// The child's learning state. Created and mutated outside this engine;
/// scoring is a pure function of profile + word catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerProfile {
    pub id: String,
    pub name: String,
    /// Category labels the child gravitates toward.
    pub interests: Vec<String>,
    pub level: u32,
    pub learning_style: LearningStyle,
    /// Minutes.
    pub attention_span: u32,
    pub preferred_time_of_day: Option<TimeOfDay>,
}

/// A completed activity record. Immutable once created; consumed only
/// for analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningSession {
    pub id: String,
    pub child_id: String,
    pub date: DateTime<Utc>,
    /// Minutes.
    pub duration: u32,
    /// Word ids shown to the child.
    pub words_encountered: Vec<String>,
    /// Word ids the child spoke or acted out.
    pub words_used_actively: Vec<String>,
    pub engagement_level: EngagementLevel,
    pub activities_completed: Vec<String>,
}

// ==================== Engine Outputs ====================

/// Ephemeral output of the combined recommendation builder. Computed on
/// demand, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub next_words: Vec<Word>,
    pub recommended_activity: Activity,
    pub difficulty: Difficulty,
    pub reason: String,
    /// Minutes.
    pub estimated_duration: u32,
}

/// Highest-priority word for today, with its score and a short reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordOfTheDay {
    pub word: Word,
    pub priority_score: u32,
    pub reason: String,
}

/// Active/passive vocabulary split and engagement score for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionAnalysis {
    pub active_words: Vec<String>,
    pub passive_words: Vec<String>,
    /// 0..=100.
    pub engagement_score: u32,
}

/// Aggregate progress over the whole catalog and session history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub total_words: u32,
    pub mastered_words: u32,
    pub average_exposures_per_word: f64,
    /// Words the child has produced at least once.
    pub active_vocabulary: u32,
    /// Words encountered but never produced.
    pub passive_vocabulary: u32,
    pub category_progress: Vec<CategoryProgress>,
}

/// Mastery progress within one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProgress {
    pub category: String,
    pub mastered: u32,
    pub total: u32,
    /// mastered / total, 0.0 when the category is empty.
    pub progress: f64,
}

// ==================== Tests ====================
