//! OMDb API wire types
//!
//! OMDb signals failure in-band: HTTP 200 with `"Response": "False"` and an
//! `Error` message. Absent fields come back as the literal string "N/A".

use serde::Deserialize;

fn na() -> String {
    "N/A".to_string()
}

/// Response envelope for keyword search (`?s=...`)
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbSearchResponse {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Search", default)]
    pub search: Vec<OmdbSearchHit>,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl OmdbSearchResponse {
    pub fn is_success(&self) -> bool {
        self.response == "True"
    }
}

/// A single search result; only the identifier is needed downstream
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbSearchHit {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title", default = "na")]
    pub title: String,
    #[serde(rename = "Year", default = "na")]
    pub year: String,
}

/// Full movie detail (`?i=...`)
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbDetail {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
    #[serde(rename = "imdbID", default)]
    pub imdb_id: Option<String>,
    #[serde(rename = "Title", default = "na")]
    pub title: String,
    #[serde(rename = "Year", default = "na")]
    pub year: String,
    #[serde(rename = "Genre", default = "na")]
    pub genre: String,
    #[serde(rename = "Director", default = "na")]
    pub director: String,
    #[serde(rename = "Plot", default = "na")]
    pub plot: String,
    #[serde(rename = "Poster", default = "na")]
    pub poster: String,
    #[serde(rename = "imdbRating", default = "na")]
    pub imdb_rating: String,
}

impl OmdbDetail {
    pub fn is_success(&self) -> bool {
        self.response == "True"
    }
}

impl From<OmdbSearchHit> for crate::models::CatalogHit {
    fn from(hit: OmdbSearchHit) -> Self {
        Self {
            imdb_id: hit.imdb_id,
            title: hit.title,
            year: hit.year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_deserialization() {
        let json = r#"{
            "Search": [
                {"Title": "Inception", "Year": "2010", "imdbID": "tt1375666", "Type": "movie", "Poster": "https://example.com/p.jpg"},
                {"Title": "Inception: The Cobol Job", "Year": "2010", "imdbID": "tt5295894", "Type": "movie", "Poster": "N/A"}
            ],
            "totalResults": "2",
            "Response": "True"
        }"#;

        let response: OmdbSearchResponse = serde_json::from_str(json).unwrap();
        assert!(response.is_success());
        assert_eq!(response.search.len(), 2);
        assert_eq!(response.search[0].imdb_id, "tt1375666");
        assert_eq!(response.search[0].title, "Inception");
        assert_eq!(response.search[1].year, "2010");
    }

    #[test]
    fn test_search_response_no_results() {
        let json = r#"{"Response": "False", "Error": "Movie not found!"}"#;

        let response: OmdbSearchResponse = serde_json::from_str(json).unwrap();
        assert!(!response.is_success());
        assert!(response.search.is_empty());
        assert_eq!(response.error, Some("Movie not found!".to_string()));
    }

    #[test]
    fn test_detail_deserialization() {
        let json = r#"{
            "Title": "Inception",
            "Year": "2010",
            "Genre": "Action, Adventure, Sci-Fi",
            "Director": "Christopher Nolan",
            "Plot": "A thief who steals corporate secrets.",
            "Poster": "https://example.com/poster.jpg",
            "imdbRating": "8.8",
            "imdbID": "tt1375666",
            "Response": "True"
        }"#;

        let detail: OmdbDetail = serde_json::from_str(json).unwrap();
        assert!(detail.is_success());
        assert_eq!(detail.imdb_id, Some("tt1375666".to_string()));
        assert_eq!(detail.genre, "Action, Adventure, Sci-Fi");
        assert_eq!(detail.imdb_rating, "8.8");
    }

    #[test]
    fn test_detail_missing_fields_default_to_na() {
        let json = r#"{"Title": "Obscure Film", "imdbID": "tt0000001", "Response": "True"}"#;

        let detail: OmdbDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.director, "N/A");
        assert_eq!(detail.plot, "N/A");
        assert_eq!(detail.imdb_rating, "N/A");
    }

    #[test]
    fn test_search_hit_to_catalog_hit() {
        let hit = OmdbSearchHit {
            imdb_id: "tt1375666".to_string(),
            title: "Inception".to_string(),
            year: "2010".to_string(),
        };

        let catalog_hit: crate::models::CatalogHit = hit.into();
        assert_eq!(catalog_hit.imdb_id, "tt1375666");
        assert_eq!(catalog_hit.title, "Inception");
    }

    #[test]
    fn test_detail_error_response() {
        let json = r#"{"Response": "False", "Error": "Incorrect IMDb ID."}"#;

        let detail: OmdbDetail = serde_json::from_str(json).unwrap();
        assert!(!detail.is_success());
        assert_eq!(detail.imdb_id, None);
    }
}
