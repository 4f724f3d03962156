//! The suggestion adapter: validate → dispatch → extract → return.

use crate::channel::Channel;
use crate::config::SuggestConfig;
use crate::engines;
use crate::error::SuggestError;
use crate::types::Engine;

/// Fetches suggestions through a [`Channel`].
///
/// Calls are independent: nothing is shared between concurrent calls
/// except whatever the channel itself owns.
pub struct Suggester<C> {
    channel: C,
    config: SuggestConfig,
}

impl<C: Channel> Suggester<C> {
    /// Create a suggester with the default configuration.
    pub fn new(channel: C) -> Self {
        Self::with_config(channel, SuggestConfig::default())
    }

    pub fn with_config(channel: C, config: SuggestConfig) -> Self {
        Self { channel, config }
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    pub fn config(&self) -> &SuggestConfig {
        &self.config
    }

    /// Fetch suggestions for `query` from `engine`.
    ///
    /// A blank query yields an empty list without touching the channel. A
    /// payload that does not match the engine's response shape also yields
    /// an empty list; it is not an error.
    ///
    /// # Errors
    ///
    /// Returns the channel's [`SuggestError`] if the request fails.
    pub async fn fetch(&self, query: &str, engine: Engine) -> Result<Vec<String>, SuggestError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let profile = engines::profile(engine);
        let request = profile.request(query, &self.config);
        tracing::trace!(query, %engine, "fetching suggestions");

        let payload = self.channel.request(&request).await?;

        match profile.extract(&payload) {
            Some(suggestions) => {
                tracing::debug!(%engine, count = suggestions.len(), "suggestions extracted");
                Ok(suggestions)
            }
            None => {
                tracing::debug!(%engine, "payload does not match the engine's response shape");
                Ok(Vec::new())
            }
        }
    }

    /// Suggestions for `query` from the engine named `engine_id`.
    ///
    /// Unknown identifiers select Google. Never fails: channel errors are
    /// logged at warn level and produce an empty list.
    pub async fn suggest(&self, query: &str, engine_id: &str) -> Vec<String> {
        let engine = Engine::from_id(engine_id);
        match self.fetch(query, engine).await {
            Ok(suggestions) => suggestions,
            Err(err) => {
                tracing::warn!(engine = %engine, error = %err, "failed to fetch suggestions");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::RequestDescriptor;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    /// Returns a canned payload (or a transport error) and records requests.
    struct MockChannel {
        response: Option<Value>,
        requests: Mutex<Vec<RequestDescriptor>>,
    }

    impl MockChannel {
        fn returning(payload: Value) -> Self {
            Self {
                response: Some(payload),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                response: None,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<RequestDescriptor> {
            self.requests.lock().expect("lock").clone()
        }
    }

    impl Channel for MockChannel {
        async fn request(&self, request: &RequestDescriptor) -> Result<Value, SuggestError> {
            self.requests.lock().expect("lock").push(request.clone());
            self.response
                .clone()
                .ok_or_else(|| SuggestError::Transport("mock transport failure".into()))
        }
    }

    #[tokio::test]
    async fn blank_query_skips_channel() {
        let suggester = Suggester::new(MockChannel::returning(json!(["q", ["x"]])));
        for query in ["", "   ", "\t\n"] {
            assert!(suggester.suggest(query, "google").await.is_empty());
        }
        assert!(suggester.channel().requests().is_empty());
    }

    #[tokio::test]
    async fn opensearch_payload_is_extracted() {
        let suggester = Suggester::new(MockChannel::returning(json!(["rust", ["x", "y"]])));
        assert_eq!(suggester.suggest("rust", "bing").await, vec!["x", "y"]);
    }

    #[tokio::test]
    async fn shape_mismatch_is_empty_ok() {
        let suggester = Suggester::new(MockChannel::returning(json!({})));
        let result = suggester.fetch("rust", Engine::Baidu).await;
        assert!(result.expect("mismatch is not an error").is_empty());
    }

    #[tokio::test]
    async fn channel_error_surfaces_from_fetch() {
        let suggester = Suggester::new(MockChannel::failing());
        let err = suggester.fetch("rust", Engine::Google).await.unwrap_err();
        assert!(err.to_string().contains("mock transport failure"));
    }

    #[tokio::test]
    async fn channel_error_collapses_in_suggest() {
        let suggester = Suggester::new(MockChannel::failing());
        assert!(suggester.suggest("rust", "duckduckgo").await.is_empty());
        assert_eq!(suggester.channel().requests().len(), 1);
    }

    #[tokio::test]
    async fn request_uses_engine_profile() {
        let suggester = Suggester::new(MockChannel::returning(json!({"s": []})));
        suggester.suggest("rust", "baidu").await;
        let requests = suggester.channel().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].base_url(), "https://suggestion.baidu.com/su");
        assert_eq!(requests[0].callback_param_name(), "cb");
    }

    #[tokio::test]
    async fn unknown_engine_uses_google_request() {
        let suggester = Suggester::new(MockChannel::returning(json!(["q", []])));
        suggester.suggest("rust", "yahoo").await;
        suggester.suggest("rust", "google").await;
        let requests = suggester.channel().requests();
        assert_eq!(requests[0], requests[1]);
        assert_eq!(requests[0].base_url(), "https://www.google.com/complete/search");
    }

    #[tokio::test]
    async fn query_is_sent_untrimmed() {
        let suggester = Suggester::new(MockChannel::returning(json!(["q", []])));
        suggester.suggest(" rust ", "duckduckgo").await;
        let requests = suggester.channel().requests();
        assert_eq!(requests[0].params()[0], ("q".to_owned(), " rust ".to_owned()));
    }
}
