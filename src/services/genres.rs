use std::collections::HashMap;

use crate::models::Emotion;

/// Genres for the neutral mood, and the fallback for any unmapped emotion
const NEUTRAL_GENRES: &[&str] = &["Action", "Adventure", "Comedy", "Drama"];

/// Emotion -> genre policy table
///
/// List order is the quota-distribution order during aggregation, not a
/// display ranking.
const GENRE_TABLE: &[(Emotion, &[&str])] = &[
    (
        Emotion::Joy,
        &["Comedy", "Romance", "Family", "Animation", "Musical"],
    ),
    (Emotion::Love, &["Romance", "Comedy", "Family", "Drama"]),
    (
        Emotion::Sadness,
        &["Drama", "Animation", "Biography", "Romance"],
    ),
    (
        Emotion::Anger,
        &["Comedy", "Adventure", "Action", "Thriller"],
    ),
    (
        Emotion::Fear,
        &["Family", "Fantasy", "Adventure", "Animation"],
    ),
    (
        Emotion::Surprise,
        &["Mystery", "Adventure", "Thriller", "Sci-Fi"],
    ),
    (Emotion::Neutral, NEUTRAL_GENRES),
];

/// Maps canonical emotions to the genres worth searching for them
pub struct GenreMap {
    table: HashMap<Emotion, &'static [&'static str]>,
}

impl GenreMap {
    pub fn new() -> Self {
        Self {
            table: GENRE_TABLE.iter().copied().collect(),
        }
    }

    /// Genres for an emotion, in quota-distribution order
    pub fn genres_for(&self, emotion: Emotion) -> &'static [&'static str] {
        self.table.get(&emotion).copied().unwrap_or(NEUTRAL_GENRES)
    }
}

impl Default for GenreMap {
    fn default() -> Self {
        Self::new()
    }
}
