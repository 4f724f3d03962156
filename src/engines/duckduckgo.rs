//! DuckDuckGo suggestions from `duckduckgo.com/ac/`.
//!
//! The endpoint answers with `[{"phrase": "..."}, ...]`. With `type=list`
//! it may instead answer in the OpenSearch list shape, which is accepted
//! as well.

use serde_json::Value;

use crate::config::SuggestConfig;
use crate::engine::{extract_opensearch, SuggestionEngine};
use crate::types::Engine;

pub struct DuckDuckGoEngine;

impl SuggestionEngine for DuckDuckGoEngine {
    fn engine_type(&self) -> Engine {
        Engine::DuckDuckGo
    }

    fn endpoint(&self) -> &'static str {
        "https://duckduckgo.com/ac/"
    }

    fn params(&self, query: &str, _config: &SuggestConfig) -> Vec<(&'static str, String)> {
        vec![("q", query.to_owned()), ("type", "list".to_owned())]
    }

    fn extract(&self, payload: &Value) -> Option<Vec<String>> {
        let items = payload.as_array()?;
        if items.first().is_some_and(Value::is_string) {
            return extract_opensearch(payload);
        }
        Some(
            items
                .iter()
                .filter_map(|item| item.get("phrase").and_then(Value::as_str))
                .map(str::to_owned)
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_layout() {
        let req = DuckDuckGoEngine.request("rust", &SuggestConfig::default());
        assert_eq!(
            req.url_with_callback("jsonp_1_1"),
            "https://duckduckgo.com/ac/?q=rust&type=list&callback=jsonp_1_1"
        );
    }

    #[test]
    fn extracts_phrases() {
        let payload = json!([{"phrase": "x"}, {"phrase": "y"}]);
        assert_eq!(
            DuckDuckGoEngine.extract(&payload),
            Some(vec!["x".to_owned(), "y".to_owned()])
        );
    }

    #[test]
    fn skips_items_without_phrase() {
        let payload = json!([{"phrase": "x"}, {"other": 1}, null, {"phrase": 3}]);
        assert_eq!(DuckDuckGoEngine.extract(&payload), Some(vec!["x".to_owned()]));
    }

    #[test]
    fn accepts_list_shape() {
        let payload = json!(["rust", ["rust lang", "rustlings"]]);
        assert_eq!(
            DuckDuckGoEngine.extract(&payload),
            Some(vec!["rust lang".to_owned(), "rustlings".to_owned()])
        );
    }

    #[test]
    fn non_array_is_mismatch() {
        assert_eq!(DuckDuckGoEngine.extract(&json!({"phrase": "x"})), None);
        assert_eq!(DuckDuckGoEngine.extract(&json!("x")), None);
    }

    #[test]
    fn empty_array_is_empty_list() {
        assert_eq!(DuckDuckGoEngine.extract(&json!([])), Some(vec![]));
    }
}
