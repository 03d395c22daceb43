//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::pools::{LoadedPools, Pools};
use crate::core::random::StdRandom;
use crate::core::state::App;

/// Two options per would-you-rather side, one story, one hot-take subject.
pub fn scenario_pools() -> Pools {
    Pools {
        would_you_rather_good: vec!["A".into(), "B".into()],
        would_you_rather_bad: vec!["C".into(), "D".into()],
        tell_a_story: vec!["S1".into()],
        hot_take_subjects: vec!["T1".into()],
    }
}

/// Creates a test App over `scenario_pools()` with a fixed seed.
pub fn test_app() -> App {
    let loaded = LoadedPools {
        pools: scenario_pools(),
        used_fallback: false,
    };
    App::new(
        loaded,
        Box::new(StdRandom::seeded(42)),
        "https://example.com".to_string(),
    )
}
