//! Baidu suggestions from `suggestion.baidu.com/su`.
//!
//! Payload: `{q: "query", p: false, s: ["suggestion", ...]}`, usually as a
//! JavaScript object literal with bare keys. The callback parameter is `cb`.

use serde_json::Value;

use crate::config::SuggestConfig;
use crate::engine::{strings, SuggestionEngine};
use crate::types::Engine;

pub struct BaiduEngine;

impl SuggestionEngine for BaiduEngine {
    fn engine_type(&self) -> Engine {
        Engine::Baidu
    }

    fn endpoint(&self) -> &'static str {
        "https://suggestion.baidu.com/su"
    }

    fn callback_param(&self) -> &'static str {
        "cb"
    }

    fn params(&self, query: &str, _config: &SuggestConfig) -> Vec<(&'static str, String)> {
        vec![("wd", query.to_owned())]
    }

    fn extract(&self, payload: &Value) -> Option<Vec<String>> {
        payload
            .get("s")
            .and_then(Value::as_array)
            .map(|items| strings(items))
    }
}
