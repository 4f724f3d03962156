//! Suggestion configuration with sensible defaults.
//!
//! [`SuggestConfig`] controls the transport used to reach the engines,
//! request timeouts, the User-Agent and the interface language sent to
//! engines that accept one.

use serde::{Deserialize, Serialize};

use crate::error::SuggestError;

/// Which [`crate::Channel`] implementation [`crate::get_suggestions_with`] uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// Plain HTTP GET; the body is read directly.
    #[default]
    Direct,
    /// Callback-wrapped (JSONP) request; the payload is delivered through
    /// a uniquely named one-shot callback.
    Jsonp,
}

/// Configuration for suggestion requests.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides. Deserializes with per-field defaults so hosts can
/// embed it in their own config files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// HTTP request timeout in seconds.
    pub timeout_seconds: u64,
    /// Custom User-Agent string. If `None`, rotates through a built-in list
    /// of realistic browser User-Agents.
    pub user_agent: Option<String>,
    /// Interface language (`hl`) sent to Google and YouTube.
    pub language: String,
    /// Channel used by [`crate::get_suggestions_with`].
    pub transport: Transport,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 8,
            user_agent: None,
            language: "zh-CN".to_owned(),
            transport: Transport::Direct,
        }
    }
}

impl SuggestConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `timeout_seconds` must be greater than 0
    /// - `language` must not be blank
    /// - `user_agent`, when set, must not be blank
    pub fn validate(&self) -> Result<(), SuggestError> {
        if self.timeout_seconds == 0 {
            return Err(SuggestError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.language.trim().is_empty() {
            return Err(SuggestError::Config("language must not be empty".into()));
        }
        if matches!(self.user_agent.as_deref(), Some(ua) if ua.trim().is_empty()) {
            return Err(SuggestError::Config(
                "user_agent must not be empty when set".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = SuggestConfig::default();
        assert_eq!(config.timeout_seconds, 8);
        assert!(config.user_agent.is_none());
        assert_eq!(config.language, "zh-CN");
        assert_eq!(config.transport, Transport::Direct);
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(SuggestConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = SuggestConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn blank_language_rejected() {
        let config = SuggestConfig {
            language: "  ".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("language"));
    }

    #[test]
    fn blank_user_agent_rejected() {
        let config = SuggestConfig {
            user_agent: Some(String::new()),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("user_agent"));
    }

    #[test]
    fn custom_user_agent() {
        let config = SuggestConfig {
            user_agent: Some("CustomBot/1.0".into()),
            ..Default::default()
        };
        assert_eq!(config.user_agent.as_deref(), Some("CustomBot/1.0"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn deserializes_partial_config_with_defaults() {
        let config: SuggestConfig =
            serde_json::from_str(r#"{"transport":"jsonp","language":"en"}"#).expect("deserialize");
        assert_eq!(config.transport, Transport::Jsonp);
        assert_eq!(config.language, "en");
        assert_eq!(config.timeout_seconds, 8);
    }
}
