//! Per-genre candidate search over the movie catalog
//!
//! A genre is searched through a handful of keyword variants, and every hit
//! is hydrated into a full detail record before it counts toward the limit.
//! Individual search or detail failures degrade the result set instead of
//! propagating; aggregation must never abort because one lookup failed.

use std::collections::HashMap;
use std::sync::Arc;

use crate::models::Movie;
use crate::services::catalog::MovieCatalog;

/// Keyword variants tried per genre, in order; only the first
/// `KEYWORDS_PER_GENRE` are used
const GENRE_KEYWORDS: &[(&str, &[&str])] = &[
    ("Comedy", &["funny", "laugh", "humor", "comedy"]),
    ("Romance", &["love", "romantic", "romance"]),
    ("Drama", &["drama", "emotional", "story"]),
    ("Action", &["action", "adventure", "hero"]),
    ("Thriller", &["thriller", "suspense", "mystery"]),
    ("Horror", &["horror", "scary", "fear"]),
    ("Sci-Fi", &["science", "fiction", "future", "space"]),
    ("Fantasy", &["fantasy", "magic", "adventure"]),
    ("Animation", &["animated", "cartoon", "family"]),
    ("Family", &["family", "kids", "children"]),
    ("Musical", &["musical", "music", "song"]),
    ("Biography", &["biography", "true", "story"]),
    ("Mystery", &["mystery", "detective", "crime"]),
];

const KEYWORDS_PER_GENRE: usize = 3;

/// Source of movie candidates for a single genre
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait GenreSource: Send + Sync {
    /// Best-effort: returns up to `limit` hydrated records, possibly none
    async fn search_genre(&self, genre: &str, limit: usize) -> Vec<Movie>;
}

/// Genre search over keyword variants against a catalog backend
pub struct KeywordSearch {
    catalog: Arc<dyn MovieCatalog>,
    keywords: HashMap<&'static str, &'static [&'static str]>,
}

impl KeywordSearch {
    pub fn new(catalog: Arc<dyn MovieCatalog>) -> Self {
        Self {
            catalog,
            keywords: GENRE_KEYWORDS.iter().copied().collect(),
        }
    }

    fn keywords_for(&self, genre: &str) -> Vec<String> {
        match self.keywords.get(genre) {
            Some(variants) => variants
                .iter()
                .take(KEYWORDS_PER_GENRE)
                .map(|k| k.to_string())
                .collect(),
            None => vec![genre.to_lowercase()],
        }
    }
}

#[async_trait::async_trait]
impl GenreSource for KeywordSearch {
    async fn search_genre(&self, genre: &str, limit: usize) -> Vec<Movie> {
        let mut movies = Vec::new();

        for keyword in self.keywords_for(genre) {
            if movies.len() >= limit {
                break;
            }

            let hits = match self.catalog.search(&keyword).await {
                Ok(hits) => hits,
                Err(e) => {
                    tracing::warn!(
                        genre = %genre,
                        keyword = %keyword,
                        error = %e,
                        "Keyword search failed"
                    );
                    continue;
                }
            };

            for hit in hits {
                if movies.len() >= limit {
                    break;
                }

                match self.catalog.detail(&hit.imdb_id).await {
                    Ok(movie) => movies.push(movie),
                    Err(e) => {
                        tracing::debug!(
                            imdb_id = %hit.imdb_id,
                            error = %e,
                            "Skipping candidate, detail fetch failed"
                        );
                    }
                }
            }
        }

        tracing::debug!(
            genre = %genre,
            gathered = movies.len(),
            limit,
            provider = self.catalog.name(),
            "Genre search finished"
        );

        movies
    }
}
