//! Callback-wrapped (JSONP) channel.
//!
//! The response to a JSONP request is a script whose only effect is to call
//! the function named in the callback parameter. [`JsonpChannel`] registers
//! that function in its [`CallbackRegistry`], mounts the script source for
//! the duration of the call, loads it through a [`ScriptLoader`] and runs
//! it by dispatching the decoded invocation back into the registry.

use std::future::Future;
use std::sync::Arc;

use serde_json::Value;

use super::{CallbackRegistry, Channel, RequestDescriptor};
use crate::config::SuggestConfig;
use crate::error::SuggestError;
use crate::http;
use crate::jsonp;

/// Host-side loader for a script source.
///
/// Implementations fetch the script at `src` and return its text. A failed
/// load is a [`SuggestError::Transport`].
pub trait ScriptLoader: Send + Sync {
    fn load(&self, src: &str) -> impl Future<Output = Result<String, SuggestError>> + Send;
}

/// Loads scripts over HTTP with the shared [`reqwest::Client`] setup.
pub struct HttpScriptLoader {
    client: reqwest::Client,
}

impl HttpScriptLoader {
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

impl ScriptLoader for HttpScriptLoader {
    async fn load(&self, src: &str) -> Result<String, SuggestError> {
        http::get_text(&self.client, src).await
    }
}

/// JSONP channel over any [`ScriptLoader`].
pub struct JsonpChannel<L> {
    loader: L,
    registry: Arc<CallbackRegistry>,
}

impl<L: ScriptLoader> JsonpChannel<L> {
    /// Create a channel with its own registry.
    pub fn new(loader: L) -> Self {
        Self::with_registry(loader, Arc::new(CallbackRegistry::new()))
    }

    /// Create a channel that registers its callbacks in `registry`.
    pub fn with_registry(loader: L, registry: Arc<CallbackRegistry>) -> Self {
        Self { loader, registry }
    }

    pub fn registry(&self) -> &Arc<CallbackRegistry> {
        &self.registry
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }
}

impl JsonpChannel<HttpScriptLoader> {
    /// Create an HTTP-backed JSONP channel.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid or the client cannot be built.
    pub fn from_config(config: &SuggestConfig) -> Result<Self, SuggestError> {
        Ok(Self::new(HttpScriptLoader::new(config)?))
    }
}

impl<L: ScriptLoader> Channel for JsonpChannel<L> {
    async fn request(&self, request: &RequestDescriptor) -> Result<Value, SuggestError> {
        let call = self.registry.register();
        let src = request.url_with_callback(call.id());
        tracing::trace!(%src, "mounting JSONP script");
        call.mount_script(&src);

        // An early return drops `call`, which releases the binding and the script.
        let script = self.loader.load(&src).await.map_err(|err| match err {
            SuggestError::Transport(cause) => SuggestError::Transport(format!(
                "JSONP request to {} failed: {cause}",
                request.base_url()
            )),
            other => other,
        })?;

        let invocation = jsonp::parse_invocation(&script)?;
        if !self.registry.invoke(&invocation.callee, invocation.payload) {
            tracing::debug!(
                callee = %invocation.callee,
                expected = %call.id(),
                "script invoked a callback other than its own"
            );
        }

        call.settle().await
    }
}
