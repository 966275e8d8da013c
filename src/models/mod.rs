use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub mod omdb;

pub use omdb::{OmdbDetail, OmdbSearchHit, OmdbSearchResponse};

/// Canonical emotion taxonomy
///
/// Every raw label a classification model can emit resolves to exactly one of
/// these categories; anything unrecognized resolves to `Neutral`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Love,
    Sadness,
    Anger,
    Fear,
    Surprise,
    Neutral,
}

impl Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Emotion::Joy => "joy",
            Emotion::Love => "love",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Surprise => "surprise",
            Emotion::Neutral => "neutral",
        };
        write!(f, "{}", name)
    }
}

/// Coarse confidence bucket derived from a model score, for user-facing messaging
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
    VeryLow,
}

impl ConfidenceTier {
    /// Buckets a confidence score: high >= 0.8, medium >= 0.6, low >= 0.4
    pub fn for_score(score: f32) -> Self {
        if score >= 0.8 {
            ConfidenceTier::High
        } else if score >= 0.6 {
            ConfidenceTier::Medium
        } else if score >= 0.4 {
            ConfidenceTier::Low
        } else {
            ConfidenceTier::VeryLow
        }
    }
}

impl Display for ConfidenceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ConfidenceTier::High => "high",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::Low => "low",
            ConfidenceTier::VeryLow => "very_low",
        };
        write!(f, "{}", name)
    }
}

/// Result of classifying one piece of mood text
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EmotionReading {
    /// Label as emitted by the model, before normalization
    pub raw_label: Option<String>,
    pub confidence: f32,
    pub emotion: Emotion,
    pub tier: ConfidenceTier,
}

impl EmotionReading {
    /// Zero-confidence neutral reading, used for empty input and degraded classification
    pub fn neutral() -> Self {
        Self {
            raw_label: None,
            confidence: 0.0,
            emotion: Emotion::Neutral,
            tier: ConfidenceTier::VeryLow,
        }
    }
}

/// A catalog search hit; only the identifier matters for detail lookups
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogHit {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
}

/// A movie candidate hydrated from the catalog
///
/// `imdb_id` is the identity key: two records sharing it are the same movie
/// regardless of any other field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub genre: String,
    pub director: String,
    pub plot: String,
    pub poster: String,
    pub rating: String,
    pub link: String,
}

/// One recommendation cycle's output
#[derive(Debug, Clone, Serialize)]
pub struct Recommendations {
    pub emotion: Emotion,
    pub raw_label: Option<String>,
    pub confidence: f32,
    pub tier: ConfidenceTier,
    /// Set when the detection confidence is too weak to trust the emotion
    pub low_confidence: bool,
    pub genres: Vec<String>,
    pub movies: Vec<Movie>,
    pub generated_at: DateTime<Utc>,
}

impl Recommendations {
    /// True when aggregation produced nothing; a valid outcome, not a failure
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
