use std::path::PathBuf;
use std::time::Duration;

use story_core::{API_ENDPOINT, DEFAULT_QUERY, SEARCH_KEY};
use story_engine::FetchSettings;

/// Compiled-in application settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_endpoint: String,
    /// Directory holding the preference file.
    pub state_dir: PathBuf,
    pub log_path: PathBuf,
    pub preference_key: String,
    pub default_query: String,
    pub clock_interval: Duration,
    pub fetch: FetchSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        let state_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            api_endpoint: API_ENDPOINT.to_string(),
            log_path: state_dir.join("story_search.log"),
            state_dir,
            preference_key: SEARCH_KEY.to_string(),
            default_query: DEFAULT_QUERY.to_string(),
            clock_interval: Duration::from_secs(1),
            fetch: FetchSettings::default(),
        }
    }
}
