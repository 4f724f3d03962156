//! Bing suggestions from the OpenSearch `osjson.aspx` endpoint.
//!
//! Bing names its callback parameter `JsonCallback` and only wraps the
//! response when `JsonType=callback` is sent.

use serde_json::Value;

use crate::config::SuggestConfig;
use crate::engine::{extract_opensearch, SuggestionEngine};
use crate::types::Engine;

pub struct BingEngine;

impl SuggestionEngine for BingEngine {
    fn engine_type(&self) -> Engine {
        Engine::Bing
    }

    fn endpoint(&self) -> &'static str {
        "https://api.bing.com/osjson.aspx"
    }

    fn callback_param(&self) -> &'static str {
        "JsonCallback"
    }

    fn params(&self, query: &str, _config: &SuggestConfig) -> Vec<(&'static str, String)> {
        vec![
            ("query", query.to_owned()),
            ("JsonType", "callback".to_owned()),
        ]
    }

    fn extract(&self, payload: &Value) -> Option<Vec<String>> {
        extract_opensearch(payload)
    }
}
