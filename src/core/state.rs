//! # Application State
//!
//! Core business state for promptdeck. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── navigator: Navigator          // card history + generator + random source
//! ├── last_direction: Option<Direction> // how we reached the current card
//! ├── last_outcome: Option<Outcome> // what the last navigation did
//! ├── status_message: String        // status bar text
//! ├── brand_link: String            // opened by a long press on the brand
//! └── used_fallback: bool           // topics document failed to load
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::action::Outcome;
use crate::core::config::ResolvedConfig;
use crate::core::generator::Generator;
use crate::core::navigator::{Direction, Navigator};
use crate::core::pools::LoadedPools;
use crate::core::random::{RandomSource, StdRandom};

/// Random source type held by the running app.
pub type DeckRandom = Box<dyn RandomSource + Send>;

pub const FALLBACK_NOTICE: &str = "Using fallback topics";

pub struct App {
    pub navigator: Navigator<DeckRandom>,
    pub last_direction: Option<Direction>,
    pub last_outcome: Option<Outcome>,
    pub status_message: String,
    pub brand_link: String,
    pub used_fallback: bool,
}

impl App {
    pub fn new(loaded: LoadedPools, rng: DeckRandom, brand_link: String) -> Self {
        let status_message = if loaded.used_fallback {
            FALLBACK_NOTICE.to_string()
        } else {
            String::new()
        };
        Self {
            navigator: Navigator::new(Generator::new(loaded.pools), rng),
            last_direction: None,
            last_outcome: None,
            status_message,
            brand_link,
            used_fallback: loaded.used_fallback,
        }
    }

    pub fn from_config(loaded: LoadedPools, config: &ResolvedConfig) -> Self {
        let rng: DeckRandom = match config.seed {
            Some(seed) => Box::new(StdRandom::seeded(seed)),
            None => Box::new(StdRandom::from_entropy()),
        };
        Self::new(loaded, rng, config.brand_link.clone())
    }

    /// "3 / 7" style counter; None on landing.
    pub fn progress_label(&self) -> Option<String> {
        self.navigator
            .position()
            .map(|p| format!("{} / {}", p + 1, self.navigator.history().len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{CliOverrides, DeckConfig, resolve};
    use crate::core::pools::Pools;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert!(app.navigator.is_landing());
        assert!(app.last_direction.is_none());
        assert!(app.last_outcome.is_none());
        assert!(app.status_message.is_empty());
        assert!(!app.used_fallback);
        assert!(app.progress_label().is_none());
    }

    #[test]
    fn test_fallback_sets_notice() {
        let loaded = LoadedPools {
            pools: Pools::fallback(),
            used_fallback: true,
        };
        let cli = CliOverrides {
            seed: Some(1),
            ..Default::default()
        };
        let app = App::from_config(loaded, &resolve(&DeckConfig::default(), &cli));
        assert!(app.used_fallback);
        assert_eq!(app.status_message, FALLBACK_NOTICE);
    }
}
