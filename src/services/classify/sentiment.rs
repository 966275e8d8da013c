//! Two-class sentiment model (fallback)
//!
//! Used when the primary emotion lexicon cannot be loaded. Emits only
//! `positive`/`negative`, which the normalization table collapses into the
//! joy/sadness categories.

use std::collections::HashSet;

use crate::error::AppResult;
use crate::services::classify::{Prediction, TextClassifier};

const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "love",
    "amazing",
    "wonderful",
    "happy",
    "fantastic",
    "awesome",
    "best",
    "excited",
    "glad",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "hate",
    "horrible",
    "worst",
    "sad",
    "angry",
    "disappointed",
    "poor",
    "scared",
    "lonely",
];

pub struct SentimentClassifier {
    positive: HashSet<&'static str>,
    negative: HashSet<&'static str>,
}

impl SentimentClassifier {
    pub fn new() -> Self {
        Self {
            positive: POSITIVE_WORDS.iter().copied().collect(),
            negative: NEGATIVE_WORDS.iter().copied().collect(),
        }
    }
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl TextClassifier for SentimentClassifier {
    async fn classify(&self, text: &str) -> AppResult<Prediction> {
        let mut positive_hits = 0usize;
        let mut negative_hits = 0usize;

        for token in text.split_whitespace() {
            let token = token
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            if self.positive.contains(token.as_str()) {
                positive_hits += 1;
            }
            if self.negative.contains(token.as_str()) {
                negative_hits += 1;
            }
        }

        let total = positive_hits + negative_hits;
        let positive_share = if total == 0 {
            0.5
        } else {
            positive_hits as f32 / total as f32
        };

        // Score is the winning class's share of all hits
        let prediction = if positive_share >= 0.5 {
            Prediction {
                label: "positive".to_string(),
                score: positive_share,
            }
        } else {
            Prediction {
                label: "negative".to_string(),
                score: 1.0 - positive_share,
            }
        };

        Ok(prediction)
    }

    fn name(&self) -> &'static str {
        "sentiment-lexicon"
    }
}
