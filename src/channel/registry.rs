//! In-memory callback registry for callback-wrapped requests.
//!
//! Each in-flight call owns one entry: a one-shot sender keyed by a
//! process-unique callback identifier, plus the script source mounted for
//! it. Invoking the callback and tearing the call down both go through
//! one release step, which removes the binding and the
//! mounted script under a single lock. Whichever path removes the entry
//! first performs the call's terminal transition; every later attempt
//! finds nothing and does nothing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;
use tokio::sync::oneshot;

use crate::error::SuggestError;

/// Monotonic sequence shared by every registry in the process.
static NEXT_CALLBACK: AtomicU64 = AtomicU64::new(0);

/// Generate a callback identifier unique within this process.
///
/// The millisecond prefix keeps identifiers distinct across restarts; the
/// sequence number alone guarantees uniqueness among concurrent calls.
pub fn next_callback_id() -> String {
    let seq = NEXT_CALLBACK.fetch_add(1, Ordering::Relaxed);
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!("jsonp_{millis}_{seq}")
}

#[derive(Default)]
struct RegistryState {
    callbacks: HashMap<String, oneshot::Sender<Value>>,
    /// Mounted script source per callback identifier.
    scripts: HashMap<String, String>,
}

/// Registry of pending callbacks and their mounted scripts.
#[derive(Default)]
pub struct CallbackRegistry {
    state: Mutex<RegistryState>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fresh one-shot callback and return the call that owns it.
    pub fn register(self: &Arc<Self>) -> PendingCall {
        let id = next_callback_id();
        let (tx, rx) = oneshot::channel();
        self.lock().callbacks.insert(id.clone(), tx);
        tracing::trace!(callback = %id, "callback registered");
        PendingCall {
            id,
            registry: Arc::clone(self),
            receiver: Some(rx),
        }
    }

    /// Invoke the callback bound to `callback_id` with `payload`.
    ///
    /// The binding and its mounted script are removed before the payload is
    /// delivered. Returns `false` if nothing is bound to `callback_id` (it
    /// was never registered or has already settled) or the owning call is
    /// gone.
    pub fn invoke(&self, callback_id: &str, payload: Value) -> bool {
        let id = callback_id.strip_prefix("window.").unwrap_or(callback_id);
        match self.release(id) {
            Some(tx) => tx.send(payload).is_ok(),
            None => {
                tracing::debug!(callback = %id, "invocation of unbound callback ignored");
                false
            }
        }
    }

    /// Whether a callback is currently bound to `callback_id`.
    pub fn is_registered(&self, callback_id: &str) -> bool {
        self.lock().callbacks.contains_key(callback_id)
    }

    /// The script source mounted for `callback_id`, if any.
    pub fn mounted_script(&self, callback_id: &str) -> Option<String> {
        self.lock().scripts.get(callback_id).cloned()
    }

    /// Number of callbacks currently bound.
    pub fn pending_count(&self) -> usize {
        self.lock().callbacks.len()
    }

    /// Number of scripts currently mounted.
    pub fn mounted_count(&self) -> usize {
        self.lock().scripts.len()
    }

    fn mount(&self, callback_id: &str, src: &str) {
        let mut state = self.lock();
        if state.callbacks.contains_key(callback_id) {
            state.scripts.insert(callback_id.to_owned(), src.to_owned());
        }
    }

    /// Remove the binding and mounted script for `callback_id`.
    fn release(&self, callback_id: &str) -> Option<oneshot::Sender<Value>> {
        let mut state = self.lock();
        let sender = state.callbacks.remove(callback_id)?;
        state.scripts.remove(callback_id);
        Some(sender)
    }

    fn lock(&self) -> MutexGuard<'_, RegistryState> {
        // Entries stay consistent across a panic; each operation is a single map update.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// One in-flight call. Dropping it releases whatever is still registered.
pub struct PendingCall {
    id: String,
    registry: Arc<CallbackRegistry>,
    receiver: Option<oneshot::Receiver<Value>>,
}

impl PendingCall {
    /// The callback identifier the remote script must invoke.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Record `src` as the transport resource owned by this call.
    pub fn mount_script(&self, src: &str) {
        self.registry.mount(&self.id, src);
    }

    /// Finish the call and take its payload.
    ///
    /// Releases anything still registered, then yields the payload if the
    /// callback was invoked.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestError::Parse`] if the callback was never invoked.
    pub async fn settle(mut self) -> Result<Value, SuggestError> {
        let receiver = self.receiver.take();
        self.registry.release(&self.id);
        match receiver {
            Some(rx) => rx.await.map_err(|_| {
                SuggestError::Parse(format!("response never invoked callback {}", self.id))
            }),
            None => Err(SuggestError::Parse(format!(
                "callback {} already settled",
                self.id
            ))),
        }
    }
}

impl Drop for PendingCall {
    fn drop(&mut self) {
        if self.registry.release(&self.id).is_some() {
            tracing::trace!(callback = %self.id, "pending call dropped before settling");
        }
    }
}
