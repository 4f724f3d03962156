//! Direct HTTP channel for hosts that can read cross-origin responses.
//!
//! Sends the request parameters without a callback and accepts either a
//! plain JSON body or a JSONP-wrapped one (some endpoints always wrap).

use serde_json::Value;

use super::{Channel, RequestDescriptor};
use crate::config::SuggestConfig;
use crate::error::SuggestError;
use crate::http;
use crate::jsonp;

/// Plain HTTP GET channel.
pub struct HttpChannel {
    client: reqwest::Client,
}

impl HttpChannel {
    /// # Errors
    ///
    /// Returns an error if `config` is invalid or the client cannot be built.
    pub fn new(config: &SuggestConfig) -> Result<Self, SuggestError> {
        Ok(Self::with_client(http::build_client(config)?))
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Channel for HttpChannel {
    async fn request(&self, request: &RequestDescriptor) -> Result<Value, SuggestError> {
        let url = request.url();
        tracing::trace!(%url, "direct suggestion request");

        let body = http::get_text(&self.client, &url)
            .await
            .map_err(|err| match err {
                SuggestError::Transport(cause) => SuggestError::Transport(format!(
                    "request to {} failed: {cause}",
                    request.base_url()
                )),
                other => other,
            })?;

        jsonp::decode_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_default_config() {
        assert!(HttpChannel::new(&SuggestConfig::default()).is_ok());
    }

    #[test]
    fn channel_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpChannel>();
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_transport_error() {
        let channel = HttpChannel::new(&SuggestConfig {
            timeout_seconds: 1,
            ..Default::default()
        })
        .expect("client");
        // Port 9 (discard) on loopback is closed in test environments.
        let req = RequestDescriptor::new("http://127.0.0.1:9/complete").param("q", "x");

        let err = channel.request(&req).await.unwrap_err();
        assert!(matches!(err, SuggestError::Transport(_)));
        assert!(err
            .to_string()
            .contains("request to http://127.0.0.1:9/complete failed"));
    }
}
