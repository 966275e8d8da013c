use std::collections::HashMap;

use crate::config::Config;
use crate::models::{ConfidenceTier, Emotion, EmotionReading};
use crate::services::classify::{LexiconClassifier, SentimentClassifier, TextClassifier};

/// Raw model vocabulary collapsed into the canonical taxonomy
///
/// Matching is case-insensitive; anything absent from this table is neutral.
const RAW_LABELS: &[(&str, Emotion)] = &[
    ("joy", Emotion::Joy),
    ("happiness", Emotion::Joy),
    ("positive", Emotion::Joy),
    ("trust", Emotion::Joy),
    ("love", Emotion::Love),
    ("sadness", Emotion::Sadness),
    ("grief", Emotion::Sadness),
    ("negative", Emotion::Sadness),
    ("anger", Emotion::Anger),
    ("rage", Emotion::Anger),
    ("frustration", Emotion::Anger),
    ("fear", Emotion::Fear),
    ("anxiety", Emotion::Fear),
    ("worry", Emotion::Fear),
    ("surprise", Emotion::Surprise),
    ("amazement", Emotion::Surprise),
    ("anticipation", Emotion::Surprise),
    ("neutral", Emotion::Neutral),
    ("disgust", Emotion::Neutral),
];

/// Detects an emotion from free-text mood descriptions
///
/// Wraps whichever classification model is available and funnels its raw
/// labels through the normalization table. Classification never fails from
/// the caller's perspective: empty input and model errors both degrade to a
/// zero-confidence neutral reading.
pub struct EmotionDetector {
    model: Box<dyn TextClassifier>,
    labels: HashMap<&'static str, Emotion>,
}

impl EmotionDetector {
    pub fn new(model: Box<dyn TextClassifier>) -> Self {
        Self {
            model,
            labels: RAW_LABELS.iter().copied().collect(),
        }
    }

    /// Loads the primary emotion model, falling back to the coarser sentiment
    /// model when it is unavailable
    pub fn load(config: &Config) -> Self {
        match LexiconClassifier::load(config.emotion_lexicon_path.as_deref()) {
            Ok(model) => {
                tracing::info!(model = model.name(), "Emotion model loaded");
                Self::new(Box::new(model))
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Emotion model unavailable, falling back to sentiment model"
                );
                Self::new(Box::new(SentimentClassifier::new()))
            }
        }
    }

    /// Maps a raw model label to its canonical emotion
    pub fn normalize(&self, raw_label: &str) -> Emotion {
        self.labels
            .get(raw_label.to_lowercase().as_str())
            .copied()
            .unwrap_or(Emotion::Neutral)
    }

    /// Classifies mood text into a normalized emotion reading
    pub async fn detect(&self, text: &str) -> EmotionReading {
        let text = text.trim();
        if text.is_empty() {
            return EmotionReading::neutral();
        }

        match self.model.classify(text).await {
            Ok(prediction) => {
                let raw_label = prediction.label.to_lowercase();
                let emotion = self.normalize(&raw_label);
                tracing::debug!(
                    raw_label = %raw_label,
                    emotion = %emotion,
                    score = prediction.score,
                    "Text classified"
                );
                EmotionReading {
                    raw_label: Some(raw_label),
                    confidence: prediction.score,
                    emotion,
                    tier: ConfidenceTier::for_score(prediction.score),
                }
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    model = self.model.name(),
                    "Classification failed, degrading to neutral"
                );
                EmotionReading::neutral()
            }
        }
    }
}
