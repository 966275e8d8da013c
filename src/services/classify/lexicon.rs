//! Keyword-lexicon emotion model (primary)
//!
//! Scores text by counting token hits against per-label word lists. The label
//! with the most hits wins; the score is that label's share of all hits. Ships
//! with a built-in lexicon, which `EMOTION_LEXICON_PATH` can override.

use std::collections::{BTreeMap, HashSet};

use crate::error::{AppError, AppResult};
use crate::services::classify::{Prediction, TextClassifier};

const DEFAULT_LEXICON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/emotion_lexicon.json"));

pub struct LexiconClassifier {
    /// Label -> lowercased word set, in stable label order for tie-breaking
    labels: Vec<(String, HashSet<String>)>,
}

impl LexiconClassifier {
    /// Loads the lexicon from `path`, or the built-in lexicon when `None`
    pub fn load(path: Option<&str>) -> AppResult<Self> {
        let raw = match path {
            Some(path) => std::fs::read_to_string(path).map_err(|e| {
                AppError::Model(format!("failed to read lexicon {}: {}", path, e))
            })?,
            None => DEFAULT_LEXICON.to_string(),
        };
        Self::from_json(&raw)
    }

    fn from_json(raw: &str) -> AppResult<Self> {
        let table: BTreeMap<String, Vec<String>> = serde_json::from_str(raw)
            .map_err(|e| AppError::Model(format!("invalid lexicon: {}", e)))?;

        if table.is_empty() {
            return Err(AppError::Model("lexicon has no labels".to_string()));
        }

        let labels = table
            .into_iter()
            .map(|(label, words)| {
                let words = words.into_iter().map(|w| w.to_lowercase()).collect();
                (label.to_lowercase(), words)
            })
            .collect();

        Ok(Self { labels })
    }

    fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
        text.split_whitespace()
            .map(|t| {
                t.trim_matches(|c: char| !c.is_alphanumeric())
                    .to_lowercase()
            })
            .filter(|t| !t.is_empty())
    }
}

#[async_trait::async_trait]
impl TextClassifier for LexiconClassifier {
    async fn classify(&self, text: &str) -> AppResult<Prediction> {
        let tokens: Vec<String> = Self::tokens(text).collect();

        let mut top: Option<(&str, usize)> = None;
        let mut total_hits = 0usize;

        for (label, words) in &self.labels {
            let hits = tokens.iter().filter(|t| words.contains(*t)).count();
            total_hits += hits;
            if hits > 0 && top.map_or(true, |(_, best)| hits > best) {
                top = Some((label, hits));
            }
        }

        let prediction = match top {
            Some((label, hits)) => Prediction {
                label: label.to_string(),
                score: hits as f32 / total_hits as f32,
            },
            // No lexicon hit at all: the model has no evidence either way
            None => Prediction {
                label: "neutral".to_string(),
                score: 0.0,
            },
        };

        Ok(prediction)
    }

    fn name(&self) -> &'static str {
        "emotion-lexicon"
    }
}
