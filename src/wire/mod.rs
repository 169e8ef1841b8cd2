//! Wire Adapter
//!
//! The backend API speaks snake_case JSON; the engine's canonical model
//! (and the client views it serializes to) is camelCase. All renaming and
//! label parsing happens here so the domain types stay in one shape.
//!
//! Inbound conversions are fallible: unknown labels and malformed
//! timestamps surface as [`WireError`]. Numeric fields are clamped, not
//! rejected, to keep the engine total over hostile payloads.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::activity::recommend_activity;
use crate::sanitize::{clamp_count, clamp_minutes};
use crate::types::{
    Difficulty, EngagementLevel, LearnerProfile, LearningSession, LearningStyle, Recommendation,
    TimeOfDay, Word, WordOfTheDay,
};

// ==================== Errors ====================

#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),
    #[error("unknown learning style: {0}")]
    UnknownLearningStyle(String),
    #[error("unknown engagement level: {0}")]
    UnknownEngagementLevel(String),
    #[error("unknown time of day: {0}")]
    UnknownTimeOfDay(String),
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, WireError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| WireError::InvalidTimestamp(raw.to_string()))
}

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ==================== Inbound DTOs ====================

/// Vocabulary word as the backend sends it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordDto {
    pub id: String,
    pub word: String,
    pub category: String,
    pub difficulty: String,
    pub mastered: bool,
    pub exposure_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_practiced: Option<String>,
}

impl TryFrom<WordDto> for Word {
    type Error = WireError;

    fn try_from(dto: WordDto) -> Result<Self, Self::Error> {
        let difficulty = Difficulty::from_str(&dto.difficulty)
            .ok_or(WireError::UnknownDifficulty(dto.difficulty))?;
        let last_practiced = dto
            .last_practiced
            .as_deref()
            .map(parse_timestamp)
            .transpose()?;
        Ok(Word {
            id: dto.id,
            text: dto.word,
            category: dto.category,
            difficulty,
            exposure_count: clamp_count(dto.exposure_count),
            mastered: dto.mastered,
            last_practiced,
        })
    }
}

impl From<&Word> for WordDto {
    fn from(word: &Word) -> Self {
        WordDto {
            id: word.id.clone(),
            word: word.text.clone(),
            category: word.category.clone(),
            difficulty: word.difficulty.as_str().to_string(),
            mastered: word.mastered,
            exposure_count: word.exposure_count as i64,
            last_practiced: word.last_practiced.map(format_timestamp),
        }
    }
}

/// Child profile as the backend sends it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearnerProfileDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub interests: Vec<String>,
    pub level: i64,
    pub learning_style: String,
    pub attention_span: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_time_of_day: Option<String>,
}

impl TryFrom<LearnerProfileDto> for LearnerProfile {
    type Error = WireError;

    fn try_from(dto: LearnerProfileDto) -> Result<Self, Self::Error> {
        let learning_style = LearningStyle::from_str(&dto.learning_style)
            .ok_or(WireError::UnknownLearningStyle(dto.learning_style))?;
        let preferred_time_of_day = match dto.preferred_time_of_day {
            Some(raw) => {
                Some(TimeOfDay::from_str(&raw).ok_or(WireError::UnknownTimeOfDay(raw))?)
            }
            None => None,
        };
        Ok(LearnerProfile {
            id: dto.id,
            name: dto.name,
            interests: dto.interests,
            level: clamp_count(dto.level),
            learning_style,
            attention_span: clamp_minutes(dto.attention_span),
            preferred_time_of_day,
        })
    }
}

/// Completed learning session as the backend sends it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningSessionDto {
    pub id: String,
    pub child_id: String,
    pub date: String,
    pub duration: f64,
    #[serde(default)]
    pub words_encountered: Vec<String>,
    #[serde(default)]
    pub words_used_actively: Vec<String>,
    pub engagement_level: String,
    #[serde(default)]
    pub activities_completed: Vec<String>,
}

impl TryFrom<LearningSessionDto> for LearningSession {
    type Error = WireError;

    fn try_from(dto: LearningSessionDto) -> Result<Self, Self::Error> {
        let engagement_level = EngagementLevel::from_str(&dto.engagement_level)
            .ok_or(WireError::UnknownEngagementLevel(dto.engagement_level))?;
        Ok(LearningSession {
            id: dto.id,
            child_id: dto.child_id,
            date: parse_timestamp(&dto.date)?,
            duration: clamp_minutes(dto.duration),
            words_encountered: dto.words_encountered,
            words_used_actively: dto.words_used_actively,
            engagement_level,
            activities_completed: dto.activities_completed,
        })
    }
}

// ==================== Outbound DTOs ====================

/// Recommendation payload: the wire carries word ids, not full records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationDto {
    pub next_words: Vec<String>,
    pub recommended_activity: String,
    pub difficulty: String,
    pub reason: String,
    pub estimated_duration: i64,
}

impl From<&Recommendation> for RecommendationDto {
    fn from(rec: &Recommendation) -> Self {
        RecommendationDto {
            next_words: rec.next_words.iter().map(|w| w.id.clone()).collect(),
            recommended_activity: rec.recommended_activity.as_str().to_string(),
            difficulty: rec.difficulty.as_str().to_string(),
            reason: rec.reason.clone(),
            estimated_duration: rec.estimated_duration as i64,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordOfTheDayDto {
    pub word_id: String,
    pub word: String,
    pub reason: String,
    pub priority_score: i64,
}

impl From<&WordOfTheDay> for WordOfTheDayDto {
    fn from(wotd: &WordOfTheDay) -> Self {
        WordOfTheDayDto {
            word_id: wotd.word.id.clone(),
            word: wotd.word.text.clone(),
            reason: wotd.reason.clone(),
            priority_score: wotd.priority_score as i64,
        }
    }
}

/// Next-activity payload for the home view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextActivityDto {
    pub recommended_activity: String,
    pub learning_style: String,
    pub attention_span: i64,
    pub reason: String,
}

impl NextActivityDto {
    pub fn from_profile(profile: &LearnerProfile, available_minutes: u32) -> Self {
        let activity = recommend_activity(
            profile.learning_style,
            profile.attention_span,
            available_minutes,
        );
        NextActivityDto {
            recommended_activity: activity.as_str().to_string(),
            learning_style: profile.learning_style.as_str().to_string(),
            attention_span: profile.attention_span as i64,
            reason: format!(
                "{} suits {}'s {} learning style.",
                activity.as_str(),
                profile.name,
                profile.learning_style.as_str()
            ),
        }
    }
}

// ==================== Tests ====================
