//! Cross-origin request channels.
//!
//! A [`Channel`] performs one request described by a [`RequestDescriptor`]
//! and resolves with the raw JSON payload. Two implementations exist:
//!
//! - [`JsonpChannel`] — callback-wrapped requests. Each call registers a
//!   uniquely named one-shot callback in a [`CallbackRegistry`], loads the
//!   response script through a [`ScriptLoader`] and resolves when the
//!   script invokes that callback.
//! - [`HttpChannel`] — direct HTTP GET; the body is plain JSON or a JSONP
//!   wrapper that is stripped.
//!
//! [`AnyChannel`] picks one of them from [`SuggestConfig::transport`].

pub mod direct;
pub mod registry;
pub mod script;

pub use direct::HttpChannel;
pub use registry::{CallbackRegistry, PendingCall};
pub use script::{HttpScriptLoader, JsonpChannel, ScriptLoader};

use std::future::Future;
use std::sync::Arc;

use serde_json::Value;
use url::form_urlencoded;

use crate::config::{SuggestConfig, Transport};
use crate::error::SuggestError;

/// A single outbound request: endpoint, ordered parameters and the name
/// of the query parameter that carries the callback identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    base_url: String,
    params: Vec<(String, String)>,
    callback_param: String,
}

impl RequestDescriptor {
    /// Query parameter carrying the callback identifier unless overridden.
    pub const DEFAULT_CALLBACK_PARAM: &'static str = "callback";

    /// Start a descriptor for `base_url` with no parameters.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            params: Vec::new(),
            callback_param: Self::DEFAULT_CALLBACK_PARAM.to_owned(),
        }
    }

    /// Add a parameter. Keys are unique: setting an existing key replaces
    /// its value in place.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.params.push((key, value)),
        }
        self
    }

    /// Override the callback parameter name.
    pub fn callback_param(mut self, name: impl Into<String>) -> Self {
        self.callback_param = name.into();
        self
    }

    /// Replace the endpoint, keeping parameters and callback name.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn callback_param_name(&self) -> &str {
        &self.callback_param
    }

    /// The request URL without a callback parameter.
    pub fn url(&self) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter())
            .finish();
        join_query(&self.base_url, &query)
    }

    /// The request URL with `callback_param=callback_id` appended.
    ///
    /// A parameter that shares the callback parameter's name is dropped.
    pub fn url_with_callback(&self, callback_id: &str) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter().filter(|(k, _)| *k != self.callback_param))
            .append_pair(&self.callback_param, callback_id)
            .finish();
        join_query(&self.base_url, &query)
    }
}

/// Append `query` to `base`, using `&` when `base` already has a query string.
fn join_query(base: &str, query: &str) -> String {
    if query.is_empty() {
        return base.to_owned();
    }
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{base}{separator}{query}")
}

/// A request/response exchange with a suggestion endpoint.
///
/// Implementations must clean up everything they register for a call on
/// every exit path, including when the returned future is dropped.
pub trait Channel: Send + Sync {
    /// Perform `request` and resolve with the raw payload.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestError::Transport`] if the endpoint cannot be reached
    /// and [`SuggestError::Parse`] if the response carries no payload.
    fn request(
        &self,
        request: &RequestDescriptor,
    ) -> impl Future<Output = Result<Value, SuggestError>> + Send;
}

impl<C: Channel> Channel for Arc<C> {
    fn request(
        &self,
        request: &RequestDescriptor,
    ) -> impl Future<Output = Result<Value, SuggestError>> + Send {
        (**self).request(request)
    }
}

/// Channel selected at runtime from [`SuggestConfig::transport`].
pub enum AnyChannel {
    Direct(HttpChannel),
    Jsonp(JsonpChannel<HttpScriptLoader>),
}

impl AnyChannel {
    /// Build the channel named by `config.transport`.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestError::Config`] for an invalid config, or
    /// [`SuggestError::Transport`] if the HTTP client cannot be built.
    pub fn from_config(config: &SuggestConfig) -> Result<Self, SuggestError> {
        Ok(match config.transport {
            Transport::Direct => Self::Direct(HttpChannel::new(config)?),
            Transport::Jsonp => Self::Jsonp(JsonpChannel::from_config(config)?),
        })
    }

    pub fn transport(&self) -> Transport {
        match self {
            Self::Direct(_) => Transport::Direct,
            Self::Jsonp(_) => Transport::Jsonp,
        }
    }
}

impl Channel for AnyChannel {
    async fn request(&self, request: &RequestDescriptor) -> Result<Value, SuggestError> {
        match self {
            Self::Direct(channel) => channel.request(request).await,
            Self::Jsonp(channel) => channel.request(request).await,
        }
    }
}
