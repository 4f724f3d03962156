//! Trait definition for per-engine suggestion profiles.
//!
//! Each engine implements [`SuggestionEngine`] to describe how a request
//! is built and how its payload is turned into suggestion strings. The
//! implementations are stateless; [`crate::engines::profile`] maps an
//! [`Engine`] to its static profile.

use serde_json::Value;

use crate::channel::RequestDescriptor;
use crate::config::SuggestConfig;
use crate::types::Engine;

/// Static description of one engine's suggestion endpoint.
pub trait SuggestionEngine: Send + Sync {
    /// Returns which [`Engine`] variant this profile represents.
    fn engine_type(&self) -> Engine;

    /// Absolute endpoint URL.
    fn endpoint(&self) -> &'static str;

    /// Query parameter that carries the callback identifier.
    fn callback_param(&self) -> &'static str {
        RequestDescriptor::DEFAULT_CALLBACK_PARAM
    }

    /// Engine-specific query parameters, in the order they are sent.
    fn params(&self, query: &str, config: &SuggestConfig) -> Vec<(&'static str, String)>;

    /// Extract suggestions from a raw payload.
    ///
    /// Returns `None` when the payload does not have this engine's
    /// response shape.
    fn extract(&self, payload: &Value) -> Option<Vec<String>>;

    /// Build the request descriptor for `query`.
    fn request(&self, query: &str, config: &SuggestConfig) -> RequestDescriptor {
        self.params(query, config).into_iter().fold(
            RequestDescriptor::new(self.endpoint()).callback_param(self.callback_param()),
            |req, (key, value)| req.param(key, value),
        )
    }
}

/// Collect the string elements of a JSON array, skipping anything else.
pub(crate) fn strings(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| item.as_str().map(str::to_owned))
        .collect()
}

/// OpenSearch suggestion shape: `[query, [suggestion, ...], ...]`.
pub(crate) fn extract_opensearch(payload: &Value) -> Option<Vec<String>> {
    match payload.as_array()?.as_slice() {
        [_, suggestions, ..] => suggestions.as_array().map(|items| strings(items)),
        _ => None,
    }
}
