//! Suggestion engine profiles.
//!
//! Each module provides a stateless struct implementing
//! [`crate::engine::SuggestionEngine`] for one engine's suggest endpoint.

pub mod baidu;
pub mod bing;
pub mod duckduckgo;
pub mod google;
pub mod youtube;

pub use baidu::BaiduEngine;
pub use bing::BingEngine;
pub use duckduckgo::DuckDuckGoEngine;
pub use google::GoogleEngine;
pub use youtube::YouTubeEngine;

use crate::engine::SuggestionEngine;
use crate::types::Engine;

/// The static profile for `engine`.
pub fn profile(engine: Engine) -> &'static dyn SuggestionEngine {
    match engine {
        Engine::Google => &GoogleEngine,
        Engine::Bing => &BingEngine,
        Engine::Baidu => &BaiduEngine,
        Engine::DuckDuckGo => &DuckDuckGoEngine,
        Engine::YouTube => &YouTubeEngine,
    }
}
