//! Engine identification.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Search engines that engine-suggest can query for suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// Google — the default for unknown or omitted identifiers.
    #[default]
    Google,
    /// Bing — OpenSearch JSON suggestions.
    Bing,
    /// Baidu — object payload with an `s` array.
    Baidu,
    /// DuckDuckGo — array of `{phrase}` objects.
    DuckDuckGo,
    /// YouTube — Google's suggest endpoint with the YouTube dataset.
    YouTube,
}

impl Engine {
    /// Resolve an engine identifier such as `"bing"`.
    ///
    /// Matching ignores case and surrounding whitespace. Unknown identifiers
    /// resolve to [`Engine::Google`].
    pub fn from_id(id: &str) -> Self {
        let id = id.trim();
        Self::all()
            .iter()
            .copied()
            .find(|engine| engine.id().eq_ignore_ascii_case(id))
            .unwrap_or_default()
    }

    /// The stable lowercase identifier callers pass to select this engine.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Bing => "bing",
            Self::Baidu => "baidu",
            Self::DuckDuckGo => "duckduckgo",
            Self::YouTube => "youtube",
        }
    }

    /// Returns the human-readable name of this engine.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Bing => "Bing",
            Self::Baidu => "Baidu",
            Self::DuckDuckGo => "DuckDuckGo",
            Self::YouTube => "YouTube",
        }
    }

    /// Returns all available engine variants.
    pub fn all() -> &'static [Engine] {
        &[
            Self::Google,
            Self::Bing,
            Self::Baidu,
            Self::DuckDuckGo,
            Self::YouTube,
        ]
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Engine {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_id(s))
    }
}
