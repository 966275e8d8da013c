use chrono::Utc;

use crate::models::{ConfidenceTier, Recommendations};
use crate::services::emotion::EmotionDetector;
use crate::services::recommend::Recommender;

/// Wires mood detection and recommendation into one cycle
///
/// Never fails: every upstream failure has already degraded into a weaker
/// reading or a smaller candidate pool by the time it reaches this layer. An
/// empty movie list means "no recommendations found", which the caller
/// surfaces as an outcome, not an error.
pub struct MoodPipeline {
    detector: EmotionDetector,
    recommender: Recommender,
}

impl MoodPipeline {
    pub fn new(detector: EmotionDetector, recommender: Recommender) -> Self {
        Self {
            detector,
            recommender,
        }
    }

    /// Runs one recommendation cycle for a mood description
    pub async fn run(&self, text: &str, count: usize) -> Recommendations {
        let reading = self.detector.detect(text).await;

        let low_confidence = matches!(
            reading.tier,
            ConfidenceTier::Low | ConfidenceTier::VeryLow
        );

        tracing::info!(
            emotion = %reading.emotion,
            confidence = reading.confidence,
            tier = %reading.tier,
            low_confidence,
            "Mood classified"
        );

        let genres = self.recommender.genres_for(reading.emotion);
        let movies = self.recommender.recommend(reading.emotion, count).await;

        if movies.is_empty() {
            tracing::info!(emotion = %reading.emotion, "No recommendations found");
        } else {
            tracing::info!(
                emotion = %reading.emotion,
                recommended = movies.len(),
                "Recommendations ready"
            );
        }

        Recommendations {
            emotion: reading.emotion,
            raw_label: reading.raw_label,
            confidence: reading.confidence,
            tier: reading.tier,
            low_confidence,
            genres: genres.iter().map(|g| g.to_string()).collect(),
            movies,
            generated_at: Utc::now(),
        }
    }
}
