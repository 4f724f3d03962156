//! YouTube suggestions from Google's suggest endpoint with the `yt` dataset.

use serde_json::Value;

use crate::config::SuggestConfig;
use crate::engine::{extract_opensearch, SuggestionEngine};
use crate::types::Engine;

pub struct YouTubeEngine;

impl SuggestionEngine for YouTubeEngine {
    fn engine_type(&self) -> Engine {
        Engine::YouTube
    }

    fn endpoint(&self) -> &'static str {
        "https://suggestqueries.google.com/complete/search"
    }

    fn params(&self, query: &str, config: &SuggestConfig) -> Vec<(&'static str, String)> {
        vec![
            ("client", "youtube".to_owned()),
            ("ds", "yt".to_owned()),
            ("q", query.to_owned()),
            ("hl", config.language.clone()),
        ]
    }

    fn extract(&self, payload: &Value) -> Option<Vec<String>> {
        extract_opensearch(payload)
    }
}
