//! Movie catalog abstraction and the OMDb implementation
//!
//! The catalog exposes the two operations the rest of the pipeline needs:
//! keyword search returning candidate identifiers, and detail lookup by
//! identifier. OMDb reports failures in-band with `"Response": "False"`, so a
//! miss is distinguished from a transport error.

use reqwest::Client as HttpClient;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{CatalogHit, Movie, OmdbDetail, OmdbSearchResponse};

/// Trait for movie catalog backends
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Searches the catalog by keyword, returning candidate identifiers
    async fn search(&self, keyword: &str) -> AppResult<Vec<CatalogHit>>;

    /// Fetches the full record for one catalog identifier
    async fn detail(&self, imdb_id: &str) -> AppResult<Movie>;

    /// Backend name for logging and debugging
    fn name(&self) -> &'static str;
}

#[derive(Clone)]
pub struct OmdbCatalog {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl OmdbCatalog {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.omdb_api_key.clone(), config.omdb_api_url.clone())
    }

    /// Converts an OMDb detail payload to our model
    fn convert_detail(&self, detail: OmdbDetail) -> AppResult<Movie> {
        let imdb_id = detail
            .imdb_id
            .ok_or_else(|| AppError::ExternalApi("OMDb response missing IMDb ID".to_string()))?;

        Ok(Movie {
            link: format!("https://www.imdb.com/title/{}/", imdb_id),
            imdb_id,
            title: detail.title,
            year: detail.year,
            genre: detail.genre,
            director: detail.director,
            plot: detail.plot,
            poster: detail.poster,
            rating: detail.imdb_rating,
        })
    }
}

#[async_trait::async_trait]
impl MovieCatalog for OmdbCatalog {
    async fn search(&self, keyword: &str) -> AppResult<Vec<CatalogHit>> {
        if keyword.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search keyword cannot be empty".to_string(),
            ));
        }

        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("s", keyword),
                ("type", "movie"),
                ("page", "1"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "OMDb API returned status {}: {}",
                status, body
            )));
        }

        let body: OmdbSearchResponse = response.json().await?;

        if !body.is_success() {
            // "Movie not found!" and friends: a miss, not a failure
            tracing::debug!(
                keyword = %keyword,
                error = ?body.error,
                "OMDb search returned no results"
            );
            return Ok(Vec::new());
        }

        let hits: Vec<CatalogHit> = body.search.into_iter().map(CatalogHit::from).collect();

        tracing::info!(
            keyword = %keyword,
            results = hits.len(),
            provider = "omdb",
            "Keyword search completed"
        );

        Ok(hits)
    }

    async fn detail(&self, imdb_id: &str) -> AppResult<Movie> {
        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("i", imdb_id),
                ("plot", "short"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "OMDb API returned status {}: {}",
                status, body
            )));
        }

        let detail: OmdbDetail = response.json().await?;

        if !detail.is_success() {
            return Err(AppError::ExternalApi(format!(
                "OMDb detail lookup failed for {}: {}",
                imdb_id,
                detail.error.unwrap_or_else(|| "unknown error".to_string())
            )));
        }

        self.convert_detail(detail)
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_catalog() -> OmdbCatalog {
        OmdbCatalog::new("test_key".to_string(), "http://test.local/".to_string())
    }

    fn detail_payload() -> OmdbDetail {
        serde_json::from_str(
            r#"{
                "Title": "Paddington",
                "Year": "2014",
                "Genre": "Animation, Adventure, Comedy",
                "Director": "Paul King",
                "Plot": "A young bear travels to London.",
                "Poster": "https://example.com/paddington.jpg",
                "imdbRating": "7.3",
                "imdbID": "tt1109624",
                "Response": "True"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_convert_detail_success() {
        let catalog = create_test_catalog();
        let movie = catalog.convert_detail(detail_payload()).unwrap();

        assert_eq!(movie.imdb_id, "tt1109624");
        assert_eq!(movie.title, "Paddington");
        assert_eq!(movie.year, "2014");
        assert_eq!(movie.rating, "7.3");
        assert_eq!(movie.link, "https://www.imdb.com/title/tt1109624/");
    }

    #[test]
    fn test_convert_detail_missing_id() {
        let catalog = create_test_catalog();
        let mut detail = detail_payload();
        detail.imdb_id = None;

        let result = catalog.convert_detail(detail);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("missing IMDb ID"));
    }

    #[tokio::test]
    async fn test_search_rejects_empty_keyword() {
        let catalog = create_test_catalog();
        let result = catalog.search("  ").await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }
}
