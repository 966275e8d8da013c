use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// OMDb API key
    pub omdb_api_key: String,

    /// OMDb API base URL
    #[serde(default = "default_omdb_api_url")]
    pub omdb_api_url: String,

    /// Path to an emotion lexicon file overriding the built-in model
    #[serde(default)]
    pub emotion_lexicon_path: Option<String>,
}

fn default_omdb_api_url() -> String {
    "http://www.omdbapi.com/".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config: Config = envy::from_iter(vec![(
            "OMDB_API_KEY".to_string(),
            "test_key".to_string(),
        )])
        .unwrap();

        assert_eq!(config.omdb_api_key, "test_key");
        assert_eq!(config.omdb_api_url, "http://www.omdbapi.com/");
        assert_eq!(config.emotion_lexicon_path, None);
    }

    #[test]
    fn test_config_missing_key_fails() {
        let result = envy::from_iter::<_, Config>(vec![]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_overrides() {
        let config: Config = envy::from_iter(vec![
            ("OMDB_API_KEY".to_string(), "k".to_string()),
            (
                "OMDB_API_URL".to_string(),
                "http://localhost:9999/".to_string(),
            ),
            (
                "EMOTION_LEXICON_PATH".to_string(),
                "/tmp/lexicon.json".to_string(),
            ),
        ])
        .unwrap();

        assert_eq!(config.omdb_api_url, "http://localhost:9999/");
        assert_eq!(
            config.emotion_lexicon_path,
            Some("/tmp/lexicon.json".to_string())
        );
    }
}
