//! Error types for the engine-suggest crate.
//!
//! These errors never reach callers of [`crate::get_suggestions`]; the
//! adapter logs them and collapses them into an empty suggestion list.
//! They are public for callers that drive a [`crate::Channel`] or
//! [`crate::Suggester::fetch`] directly.

/// Errors that can occur while fetching suggestions.
#[derive(Debug, thiserror::Error)]
pub enum SuggestError {
    /// The request could not be delivered or the endpoint answered with
    /// a failure status.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body was not a JSON document or a JSONP invocation
    /// carrying one.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid suggestion configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for engine-suggest results.
pub type Result<T> = std::result::Result<T, SuggestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_transport() {
        let err = SuggestError::Transport("JSONP request to https://x.test failed".into());
        assert_eq!(
            err.to_string(),
            "transport error: JSONP request to https://x.test failed"
        );
    }

    #[test]
    fn display_parse() {
        let err = SuggestError::Parse("no callback invocation".into());
        assert_eq!(err.to_string(), "parse error: no callback invocation");
    }

    #[test]
    fn display_config() {
        let err = SuggestError::Config("timeout_seconds must be greater than 0".into());
        assert_eq!(
            err.to_string(),
            "config error: timeout_seconds must be greater than 0"
        );
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SuggestError>();
    }
}
