//! # engine-suggest
//!
//! Engine-agnostic search autocomplete.
//!
//! Fetches query suggestions from Google, Bing, Baidu, DuckDuckGo and
//! YouTube and normalises each engine's response shape into one ordered
//! list of strings.
//!
//! ## Design
//!
//! - A [`Channel`] performs one request and resolves with the raw payload.
//!   [`JsonpChannel`] delivers the payload through a uniquely named
//!   one-shot callback; [`HttpChannel`] reads the body directly.
//! - Per-engine profiles ([`SuggestionEngine`]) build the request and
//!   extract suggestions from the payload.
//! - [`get_suggestions`] never fails: an empty list means "no suggestions
//!   available now", whether the query was blank, the network failed or
//!   the engine changed its format.
//!
//! ## Logging
//!
//! Query text is logged only at trace level. Channel failures are logged
//! at warn level with the engine and the underlying error.

pub mod channel;
pub mod config;
pub mod engine;
pub mod engines;
pub mod error;
pub mod http;
pub mod jsonp;
pub mod suggest;
pub mod types;

pub use channel::{
    AnyChannel, CallbackRegistry, Channel, HttpChannel, HttpScriptLoader, JsonpChannel,
    RequestDescriptor, ScriptLoader,
};
pub use config::{SuggestConfig, Transport};
pub use engine::SuggestionEngine;
pub use error::{Result, SuggestError};
pub use suggest::Suggester;
pub use types::Engine;

/// Fetch suggestions for `query` from the engine named `engine_id`.
///
/// `engine_id` is one of `google`, `bing`, `baidu`, `duckduckgo` or
/// `youtube`; anything else selects Google. Uses
/// [`SuggestConfig::default()`].
///
/// # Examples
///
/// ```no_run
/// # async fn example() {
/// let suggestions = engine_suggest::get_suggestions("rust async", "duckduckgo").await;
/// for s in &suggestions {
///     println!("{s}");
/// }
/// # }
/// ```
pub async fn get_suggestions(query: &str, engine_id: &str) -> Vec<String> {
    get_suggestions_with(query, engine_id, &SuggestConfig::default()).await
}

/// Fetch suggestions with an explicit configuration.
///
/// Builds the channel named by `config.transport`. An invalid
/// configuration is logged and yields an empty list.
pub async fn get_suggestions_with(
    query: &str,
    engine_id: &str,
    config: &SuggestConfig,
) -> Vec<String> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let channel = match AnyChannel::from_config(config) {
        Ok(channel) => channel,
        Err(err) => {
            tracing::warn!(engine = engine_id, error = %err, "failed to build suggestion channel");
            return Vec::new();
        }
    };

    Suggester::with_config(channel, config.clone())
        .suggest(query, engine_id)
        .await
}
