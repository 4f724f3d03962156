//! Google suggestions via the Firefox client of `complete/search`.
//!
//! Payload: `["query", ["suggestion", ...], ...]`.

use serde_json::Value;

use crate::config::SuggestConfig;
use crate::engine::{extract_opensearch, SuggestionEngine};
use crate::types::Engine;

/// Google suggest profile. Also used for unknown engine identifiers.
pub struct GoogleEngine;

impl SuggestionEngine for GoogleEngine {
    fn engine_type(&self) -> Engine {
        Engine::Google
    }

    fn endpoint(&self) -> &'static str {
        "https://www.google.com/complete/search"
    }

    fn params(&self, query: &str, config: &SuggestConfig) -> Vec<(&'static str, String)> {
        vec![
            ("client", "firefox".to_owned()),
            ("q", query.to_owned()),
            ("hl", config.language.clone()),
        ]
    }

    fn extract(&self, payload: &Value) -> Option<Vec<String>> {
        extract_opensearch(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_layout() {
        let req = GoogleEngine.request("rust async", &SuggestConfig::default());
        assert_eq!(
            req.url_with_callback("jsonp_1_2"),
            "https://www.google.com/complete/search?client=firefox&q=rust+async&hl=zh-CN&callback=jsonp_1_2"
        );
    }

    #[test]
    fn language_comes_from_config() {
        let config = SuggestConfig {
            language: "en".into(),
            ..Default::default()
        };
        let req = GoogleEngine.request("rust", &config);
        assert!(req.url().ends_with("&hl=en"));
    }

    #[test]
    fn extracts_suggestions() {
        let payload = json!(["rust", ["rust lang", "rustup", "rust book"]]);
        assert_eq!(
            GoogleEngine.extract(&payload),
            Some(vec![
                "rust lang".to_owned(),
                "rustup".to_owned(),
                "rust book".to_owned()
            ])
        );
    }

    #[test]
    fn short_array_is_mismatch() {
        assert_eq!(GoogleEngine.extract(&json!(["rust"])), None);
    }

    #[test]
    fn engine_type_is_google() {
        assert_eq!(GoogleEngine.engine_type(), Engine::Google);
    }
}
