//! # Card Generator
//!
//! Turns the pools plus a random source into one card per call.
//!
//! ```text
//! r ∈ [0, 0.45)             would-you-rather  (good or bad pool, 50/50)
//! r ∈ [0.45, 0.80)          tell-a-story      (if any stories exist)
//! otherwise                 hot-take          (empty text if no subjects)
//! ```
//!
//! The would-you-rather branch yields `None` when the chosen side has fewer
//! than two options. Callers decide what to do about that; see
//! `Navigator::advance`.

use log::debug;

use crate::core::card::{Card, CardKind};
use crate::core::pools::Pools;
use crate::core::random::RandomSource;

pub const WOULD_YOU_RATHER_CUTOFF: f64 = 0.45;
pub const TELL_A_STORY_CUTOFF: f64 = 0.80;
pub const GOOD_SIDE_CUTOFF: f64 = 0.5;

/// Redraws allowed when looking for a second distinct option.
const MAX_DISTINCT_DRAWS: usize = 64;

pub const OPTION_SEPARATOR: &str = "\n\n— or —\n\n";

pub struct Generator {
    pools: Pools,
}

impl Generator {
    pub fn new(pools: Pools) -> Self {
        Self { pools }
    }

    pub fn pools(&self) -> &Pools {
        &self.pools
    }

    /// Produces one card, or `None` if the would-you-rather side was too small.
    pub fn generate(&self, rng: &mut impl RandomSource) -> Option<Card> {
        let r = rng.next_f64();

        if r < WOULD_YOU_RATHER_CUTOFF {
            self.would_you_rather(rng)
        } else if r < TELL_A_STORY_CUTOFF && !self.pools.tell_a_story.is_empty() {
            let pool = &self.pools.tell_a_story;
            let idx = rng.pick_index(pool.len());
            Some(Card::new(CardKind::TellAStory, pool[idx].clone()))
        } else {
            let pool = &self.pools.hot_take_subjects;
            if pool.is_empty() {
                return Some(Card::new(CardKind::HotTake, ""));
            }
            let idx = rng.pick_index(pool.len());
            Some(Card::new(CardKind::HotTake, format!("about {}", pool[idx])))
        }
    }

    fn would_you_rather(&self, rng: &mut impl RandomSource) -> Option<Card> {
        let use_good = rng.next_f64() < GOOD_SIDE_CUTOFF;
        let pool = if use_good {
            &self.pools.would_you_rather_good
        } else {
            &self.pools.would_you_rather_bad
        };

        if pool.len() < 2 {
            debug!(
                "Would-you-rather {} pool has {} entries, no card",
                if use_good { "good" } else { "bad" },
                pool.len()
            );
            return None;
        }

        let i = rng.pick_index(pool.len());
        let mut j = rng.pick_index(pool.len());
        let mut redraws = 1;
        while j == i {
            if redraws == MAX_DISTINCT_DRAWS {
                j = (i + 1) % pool.len();
                break;
            }
            j = rng.pick_index(pool.len());
            redraws += 1;
        }

        Some(Card::new(
            CardKind::WouldYouRather,
            format!("{}{}{}", pool[i], OPTION_SEPARATOR, pool[j]),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::{SequenceRandom, StdRandom};
    use crate::test_support::scenario_pools;
    use std::collections::HashMap;

    fn generate_with(values: Vec<f64>) -> Option<Card> {
        let generator = Generator::new(scenario_pools());
        generator.generate(&mut SequenceRandom::new(values))
    }

    #[test]
    fn test_would_you_rather_good_side() {
        let card = generate_with(vec![0.1, 0.2, 0.0, 0.75]).unwrap();
        assert_eq!(card.kind, CardKind::WouldYouRather);
        assert_eq!(card.title, "Would you rather");
        assert_eq!(card.text, "A\n\n— or —\n\nB");
    }

    #[test]
    fn test_would_you_rather_bad_side() {
        let card = generate_with(vec![0.1, 0.7, 0.75, 0.0]).unwrap();
        assert_eq!(card.text, "D\n\n— or —\n\nC");
    }

    #[test]
    fn test_would_you_rather_redraws_until_distinct() {
        let mut rng = SequenceRandom::new(vec![0.1, 0.2, 0.0, 0.1, 0.3, 0.9]);
        let card = Generator::new(scenario_pools()).generate(&mut rng).unwrap();
        assert_eq!(card.text, "A\n\n— or —\n\nB");
        assert_eq!(rng.draws(), 6);
    }

    #[test]
    fn test_degenerate_source_still_terminates() {
        // After the second value, every draw lands on index 0
        let mut rng = SequenceRandom::new(vec![0.1, 0.2]);
        rng.extend(std::iter::repeat_n(0.0, 200));
        let card = Generator::new(scenario_pools()).generate(&mut rng).unwrap();
        assert_eq!(card.text, "A\n\n— or —\n\nB");
    }

    #[test]
    fn test_tell_a_story() {
        let card = generate_with(vec![0.6, 0.0]).unwrap();
        assert_eq!(card.kind, CardKind::TellAStory);
        assert_eq!(card.title, "Tell a story");
        assert_eq!(card.text, "S1");
    }

    #[test]
    fn test_hot_take() {
        let card = generate_with(vec![0.9, 0.0]).unwrap();
        assert_eq!(card.kind, CardKind::HotTake);
        assert_eq!(card.title, "Hot take");
        assert_eq!(card.text, "about T1");
    }

    #[test]
    fn test_empty_story_pool_falls_to_hot_take() {
        let pools = Pools {
            tell_a_story: vec![],
            ..scenario_pools()
        };
        let card = Generator::new(pools)
            .generate(&mut SequenceRandom::new(vec![0.6, 0.0]))
            .unwrap();
        assert_eq!(card.kind, CardKind::HotTake);
        assert_eq!(card.text, "about T1");
    }

    #[test]
    fn test_empty_hot_take_pool_gives_empty_text() {
        let card = Generator::new(Pools::default())
            .generate(&mut SequenceRandom::new(vec![0.95]))
            .unwrap();
        assert_eq!(card.kind, CardKind::HotTake);
        assert_eq!(card.text, "");
    }

    #[test]
    fn test_small_would_you_rather_pool_yields_none() {
        let pools = Pools {
            would_you_rather_good: vec!["only".into()],
            ..scenario_pools()
        };
        let generator = Generator::new(pools);
        assert!(generator.generate(&mut SequenceRandom::new(vec![0.1, 0.2])).is_none());
        // The bad side is still usable
        assert!(generator.generate(&mut SequenceRandom::new(vec![0.1, 0.8, 0.0, 0.6])).is_some());
    }

    #[test]
    fn test_options_come_from_one_side() {
        let generator = Generator::new(scenario_pools());
        let mut rng = StdRandom::seeded(11);
        for _ in 0..2000 {
            let Some(card) = generator.generate(&mut rng) else { continue };
            if card.kind != CardKind::WouldYouRather {
                continue;
            }
            let (left, right) = card.text.split_once(OPTION_SEPARATOR).unwrap();
            assert_ne!(left, right);
            let good = ["A", "B"];
            let bad = ["C", "D"];
            let same_side = (good.contains(&left) && good.contains(&right))
                || (bad.contains(&left) && bad.contains(&right));
            assert!(same_side, "mixed sides: {left} / {right}");
        }
    }

    #[test]
    fn test_category_distribution() {
        let generator = Generator::new(scenario_pools());
        let mut rng = StdRandom::seeded(2024);
        let n = 100_000;
        let mut counts: HashMap<CardKind, usize> = HashMap::new();
        for _ in 0..n {
            let card = generator.generate(&mut rng).unwrap();
            *counts.entry(card.kind).or_default() += 1;
        }
        let share = |kind| counts.get(&kind).copied().unwrap_or(0) as f64 / n as f64;
        assert!((share(CardKind::WouldYouRather) - 0.45).abs() < 0.01);
        assert!((share(CardKind::TellAStory) - 0.35).abs() < 0.01);
        assert!((share(CardKind::HotTake) - 0.20).abs() < 0.01);
    }
}
