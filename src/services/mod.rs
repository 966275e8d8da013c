pub mod catalog;
pub mod classify;
pub mod emotion;
pub mod genres;
pub mod pipeline;
pub mod recommend;
pub mod search;

pub use catalog::{MovieCatalog, OmdbCatalog};
pub use classify::TextClassifier;
pub use emotion::EmotionDetector;
pub use genres::GenreMap;
pub use pipeline::MoodPipeline;
pub use recommend::Recommender;
pub use search::{GenreSource, KeywordSearch};
