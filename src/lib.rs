//! # wordworld-algo - Adaptive Learning Engine
//!
//! Pure Rust implementation of the WordWorld vocabulary app's adaptive
//! learning logic:
//!
//! - **Word Priority Scorer** - urgency score per word from exposure,
//!   interest, mastery, level fit, and the spacing effect
//! - **Next-Word Selector** - ranked learning set with a shuffled variety
//!   bucket to prevent boredom
//! - **Activity Recommender** - learning-style and time-budget aware
//!   activity choice
//! - **Session Analyzer** - active/passive vocabulary split and a 0-100
//!   engagement score
//! - **Level-Up Evaluator** - difficulty progression from recent sessions
//!
//! ## Design goals
//!
//! - **Pure functions** - no I/O, no shared state; the clock and the RNG
//!   are the only nondeterminism, and both are injected
//! - **Total over hostile inputs** - wire payloads are clamped or rejected
//!   at the boundary, never inside the scoring path
//! - **Tunable constants** - the empirical scoring weights live in
//!   [`PriorityWeights`] rather than being buried in the scorer
//!
//! ## Module structure
//!
//! - [`types`] - canonical domain model and enums
//! - [`priority`] - word priority scoring ([`word_priority`], batch scoring)
//! - [`selector`] - next-word selection ([`WordSelector`])
//! - [`activity`] - activity recommendation decision table
//! - [`recommend`] - combined recommendation builder and word of the day
//! - [`session`] - session analysis and level-up evaluation
//! - [`insights`] - parent-facing insight strings and progress summary
//! - [`sanitize`] - numeric input clamping
//! - [`wire`] - snake_case backend DTOs and fallible conversions
//!
//! ## Usage example
//!
//! ```rust
//! use chrono::Utc;
//! use wordworld_algo::{build_recommendation, PriorityWeights, WordSelector};
//!
//! # let catalog = Vec::new();
//! # let profile = wordworld_algo::LearnerProfile {
//! #     id: "c1".into(), name: "Maya".into(), interests: vec![],
//! #     level: 1, learning_style: wordworld_algo::LearningStyle::Mixed,
//! #     attention_span: 15, preferred_time_of_day: None,
//! # };
//! let mut selector = WordSelector::new();
//! let rec = build_recommendation(
//!     &catalog,
//!     &profile,
//!     &mut selector,
//!     &PriorityWeights::default(),
//!     15,
//!     Utc::now(),
//! );
//! ```

// ============================================================================
// Module declarations
// ============================================================================

pub mod activity;
pub mod insights;
pub mod priority;
pub mod recommend;
pub mod sanitize;
pub mod selector;
pub mod session;
pub mod types;
pub mod wire;

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export the canonical domain model.
pub use types::*;

/// Re-export the scorer and its tunable weights.
pub use priority::{needs_more_exposure, score_catalog, word_priority, PriorityWeights};

/// Re-export the selector.
pub use selector::WordSelector;

/// Re-export the activity recommender.
pub use activity::recommend_activity;

/// Re-export the recommendation builder.
pub use recommend::{
    build_recommendation, word_of_the_day, DEFAULT_AVAILABLE_MINUTES, DEFAULT_WORD_COUNT,
};

/// Re-export session analysis.
pub use session::{analyze_session, should_level_up};

/// Re-export parent-facing aggregation.
pub use insights::{parent_insights, progress_summary};

/// Re-export the wire boundary error.
pub use wire::WireError;
