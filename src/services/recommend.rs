//! Recommendation aggregation
//!
//! Pulls candidates for every genre mapped to the detected emotion, removes
//! cross-genre duplicates, and samples the requested number uniformly at
//! random, so genre order never decides which movies surface when the unique
//! pool exceeds the requested count.

use std::collections::HashSet;
use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Emotion, Movie};
use crate::services::genres::GenreMap;
use crate::services::search::GenreSource;

pub struct Recommender {
    genres: GenreMap,
    source: Arc<dyn GenreSource>,
}

impl Recommender {
    pub fn new(source: Arc<dyn GenreSource>) -> Self {
        Self {
            genres: GenreMap::new(),
            source,
        }
    }

    /// Genres that will be searched for an emotion, in search order
    pub fn genres_for(&self, emotion: Emotion) -> &'static [&'static str] {
        self.genres.genres_for(emotion)
    }

    /// Recommends up to `count` unique movies for an emotion
    ///
    /// Returns fewer than `count` (possibly none) when the unique candidate
    /// pool is too small; an empty result is valid, not an error.
    pub async fn recommend(&self, emotion: Emotion, count: usize) -> Vec<Movie> {
        let pool = self.gather(emotion, count).await;
        sample(pool, count, &mut rand::thread_rng())
    }

    /// Collects the deduplicated candidate pool for an emotion
    async fn gather(&self, emotion: Emotion, count: usize) -> Vec<Movie> {
        let genres = self.genres.genres_for(emotion);
        // Over-fetch so dedup and sampling can still fill `count`
        let quota = count / genres.len() + 1;

        tracing::info!(
            emotion = %emotion,
            count,
            quota,
            genres = ?genres,
            "Gathering candidates"
        );

        let mut pool: Vec<Movie> = Vec::new();
        for genre in genres {
            let movies = self.source.search_genre(genre, quota).await;
            tracing::debug!(genre = %genre, results = movies.len(), "Genre contribution");
            pool.extend(movies);
        }

        // First occurrence wins; later duplicates are dropped regardless of content
        let mut seen = HashSet::new();
        pool.retain(|movie| seen.insert(movie.imdb_id.clone()));

        tracing::info!(unique = pool.len(), "Candidate pool assembled");

        pool
    }
}

/// Uniform random selection of up to `count` movies from the pool
fn sample<R: Rng>(mut pool: Vec<Movie>, count: usize, rng: &mut R) -> Vec<Movie> {
    pool.shuffle(rng);
    pool.truncate(count);
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::search::MockGenreSource;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tokio_test::block_on;

    fn movie(id: &str, title: &str) -> Movie {
        Movie {
            imdb_id: id.to_string(),
            title: title.to_string(),
            year: "2000".to_string(),
            genre: "N/A".to_string(),
            director: "N/A".to_string(),
            plot: "N/A".to_string(),
            poster: "N/A".to_string(),
            rating: "N/A".to_string(),
            link: format!("https://www.imdb.com/title/{id}/"),
        }
    }

    fn recommender(source: MockGenreSource) -> Recommender {
        Recommender::new(Arc::new(source))
    }

    #[test]
    fn test_quota_is_floor_count_over_genres_plus_one() {
        // count=3 across joy's 5 genres: floor(3/5) + 1 = 1 per genre
        let mut source = MockGenreSource::new();
        source
            .expect_search_genre()
            .withf(|_, limit| *limit == 1)
            .times(5)
            .returning(|_, _| Vec::new());

        let movies = block_on(recommender(source).recommend(Emotion::Joy, 3));
        assert!(movies.is_empty());
    }

    #[test]
    fn test_quota_overfetches_when_count_exceeds_genres() {
        // count=10 across love's 4 genres: floor(10/4) + 1 = 3 per genre
        let mut source = MockGenreSource::new();
        source
            .expect_search_genre()
            .withf(|_, limit| *limit == 3)
            .times(4)
            .returning(|_, _| Vec::new());

        block_on(recommender(source).recommend(Emotion::Love, 10));
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let mut source = MockGenreSource::new();
        source
            .expect_search_genre()
            .returning(|genre, _| match genre {
                "Action" => vec![movie("tt001", "First Title")],
                "Adventure" => vec![movie("tt001", "Different Title")],
                _ => Vec::new(),
            });

        let recommender = recommender(source);
        let pool = block_on(recommender.gather(Emotion::Neutral, 4));

        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].imdb_id, "tt001");
        assert_eq!(pool[0].title, "First Title");
    }

    #[test]
    fn test_output_never_repeats_an_id() {
        let mut source = MockGenreSource::new();
        source.expect_search_genre().returning(|genre, _| {
            vec![movie("tt900", genre), movie(&format!("tt-{genre}"), genre)]
        });

        let movies = block_on(recommender(source).recommend(Emotion::Joy, 10));

        let mut ids: Vec<&str> = movies.iter().map(|m| m.imdb_id.as_str()).collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn test_size_law_pool_smaller_than_count() {
        let mut source = MockGenreSource::new();
        source
            .expect_search_genre()
            .returning(|genre, _| match genre {
                "Drama" => vec![movie("tt100", "A"), movie("tt101", "B")],
                _ => Vec::new(),
            });

        let movies = block_on(recommender(source).recommend(Emotion::Sadness, 5));
        assert_eq!(movies.len(), 2);
    }

    #[test]
    fn test_size_law_pool_larger_than_count() {
        let mut source = MockGenreSource::new();
        source
            .expect_search_genre()
            .returning(|genre, _| vec![movie(&format!("tt-{genre}"), genre)]);

        // Joy maps to 5 genres, so the unique pool has 5 movies
        let movies = block_on(recommender(source).recommend(Emotion::Joy, 3));
        assert_eq!(movies.len(), 3);
    }

    #[test]
    fn test_empty_pool_is_a_valid_result() {
        let mut source = MockGenreSource::new();
        source.expect_search_genre().returning(|_, _| Vec::new());

        let movies = block_on(recommender(source).recommend(Emotion::Fear, 3));
        assert!(movies.is_empty());
    }

    #[test]
    fn test_sample_is_a_subset_of_the_pool() {
        let pool: Vec<Movie> = (0..10)
            .map(|i| movie(&format!("tt{i:03}"), "Movie"))
            .collect();
        let ids: HashSet<String> = pool.iter().map(|m| m.imdb_id.clone()).collect();

        let mut rng = StdRng::seed_from_u64(42);
        let picked = sample(pool, 4, &mut rng);

        assert_eq!(picked.len(), 4);
        for movie in &picked {
            assert!(ids.contains(&movie.imdb_id));
        }
    }

    #[test]
    fn test_sample_returns_whole_pool_when_short() {
        let pool = vec![movie("tt001", "A"), movie("tt002", "B")];
        let mut rng = StdRng::seed_from_u64(7);

        let picked = sample(pool, 5, &mut rng);
        assert_eq!(picked.len(), 2);
    }
}
