//! Shared HTTP client with User-Agent rotation for suggestion requests.
//!
//! Provides a configured [`reqwest::Client`] with browser-like headers,
//! cookie support, and rotating User-Agent strings. Suggestion endpoints
//! answer differently (or not at all) to obvious bot User-Agents.

use crate::config::SuggestConfig;
use crate::error::SuggestError;
use rand::seq::SliceRandom;
use std::time::Duration;

/// Realistic browser User-Agent strings, rotated per client.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:133.0) Gecko/20100101 Firefox/133.0",
];

/// Build a [`reqwest::Client`] configured for suggestion endpoints.
///
/// The client has:
/// - Cookie store enabled
/// - Timeout from config
/// - Random User-Agent from built-in rotation list (or custom if configured)
/// - Brotli and gzip decompression
///
/// # Errors
///
/// Returns [`SuggestError::Config`] if the configuration is invalid, or
/// [`SuggestError::Transport`] if the client cannot be constructed.
pub fn build_client(config: &SuggestConfig) -> Result<reqwest::Client, SuggestError> {
    config.validate()?;

    let ua = match config.user_agent {
        Some(ref custom) => custom.clone(),
        None => random_user_agent().to_owned(),
    };

    reqwest::Client::builder()
        .cookie_store(true)
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| SuggestError::Transport(format!("failed to build HTTP client: {e}")))
}

/// Select a random User-Agent string from the rotation list.
pub fn random_user_agent() -> &'static str {
    let mut rng = rand::thread_rng();
    USER_AGENTS
        .choose(&mut rng)
        .copied()
        // SAFETY: USER_AGENTS is a non-empty const array, choose only returns None on empty slices
        .unwrap_or(USER_AGENTS[0])
}

/// Issue a GET and return the response body as text.
///
/// Non-2xx statuses are reported as transport failures, like a script
/// element whose source fails to load.
pub(crate) async fn get_text(client: &reqwest::Client, url: &str) -> Result<String, SuggestError> {
    let response = client
        .get(url)
        .header("Accept", "application/json, text/javascript, */*;q=0.1")
        .send()
        .await
        .map_err(|e| SuggestError::Transport(format!("request failed: {e}")))?
        .error_for_status()
        .map_err(|e| SuggestError::Transport(format!("HTTP error: {e}")))?;

    let body = response
        .text()
        .await
        .map_err(|e| SuggestError::Transport(format!("response read failed: {e}")))?;

    tracing::debug!(bytes = body.len(), "suggestion response received");
    Ok(body)
}
