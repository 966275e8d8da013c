use crate::error::AppResult;

pub mod lexicon;
pub mod sentiment;

pub use lexicon::LexiconClassifier;
pub use sentiment::SentimentClassifier;

/// Top prediction from a classification model
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    pub score: f32,
}

/// Capability shared by all text-classification models
///
/// The emotion detector depends only on this trait, so the primary emotion
/// model and the coarser sentiment fallback are interchangeable at runtime.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait TextClassifier: Send + Sync {
    /// Returns the single best prediction for the given text
    async fn classify(&self, text: &str) -> AppResult<Prediction>;

    /// Model name for logging and debugging
    fn name(&self) -> &'static str;
}
