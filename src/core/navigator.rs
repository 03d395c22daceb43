//! # History Navigator
//!
//! Keeps every card shown this session and a cursor into them.
//!
//! ```text
//!  landing   0      1      2      3
//!    ●  ─── [c0] ─ [c1] ─ [c2] ─ [c3]
//!                           ▲
//!                        position
//! ```
//!
//! - `advance()` moves right. Past the end it generates a new card.
//! - `retreat()` moves left. From the first card (or landing) it lands.
//! - Returning to landing keeps history; the next `advance()` replays `c0`.
//!
//! History is append-only. Cards are never edited once stored.

use log::{debug, warn};

use crate::core::card::{Card, PALETTE};
use crate::core::generator::Generator;
use crate::core::random::RandomSource;

/// Total generation attempts per `advance()` before giving up.
pub const MAX_GENERATION_ATTEMPTS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// What the renderer should show after a navigation call.
#[derive(Debug, PartialEq)]
pub enum Step<'a> {
    Card { card: &'a Card, direction: Direction },
    Landing,
    /// Generation kept failing; nothing changed.
    Unavailable,
}

pub struct Navigator<R: RandomSource> {
    generator: Generator,
    rng: R,
    history: Vec<Card>,
    /// None = landing.
    position: Option<usize>,
}

impl<R: RandomSource> Navigator<R> {
    pub fn new(generator: Generator, rng: R) -> Self {
        Self {
            generator,
            rng,
            history: Vec::new(),
            position: None,
        }
    }

    pub fn history(&self) -> &[Card] {
        &self.history
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Position with landing reported as `-1`.
    pub fn position_index(&self) -> isize {
        self.position.map_or(-1, |p| p as isize)
    }

    pub fn is_landing(&self) -> bool {
        self.position.is_none()
    }

    pub fn current(&self) -> Option<&Card> {
        self.position.and_then(|p| self.history.get(p))
    }

    pub fn generator(&self) -> &Generator {
        &self.generator
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    pub fn advance(&mut self) -> Step<'_> {
        let next = self.position.map_or(0, |p| p + 1);

        if next < self.history.len() {
            self.position = Some(next);
            debug!("Replaying card {} of {}", next + 1, self.history.len());
            return Step::Card {
                card: &self.history[next],
                direction: Direction::Forward,
            };
        }

        let Some(card) = self.generate_with_retry() else {
            return Step::Unavailable;
        };

        self.history.push(card);
        let index = self.history.len() - 1;
        self.position = Some(index);
        debug!(
            "Generated card {} ({})",
            index + 1,
            self.history[index].kind
        );
        Step::Card {
            card: &self.history[index],
            direction: Direction::Forward,
        }
    }

    pub fn retreat(&mut self) -> Step<'_> {
        match self.position {
            None | Some(0) => {
                self.position = None;
                Step::Landing
            }
            Some(p) => {
                self.position = Some(p - 1);
                Step::Card {
                    card: &self.history[p - 1],
                    direction: Direction::Backward,
                }
            }
        }
    }

    /// Back to landing without touching history.
    pub fn reset_to_landing(&mut self) {
        self.position = None;
    }

    fn generate_with_retry(&mut self) -> Option<Card> {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            if let Some(mut card) = self.generator.generate(&mut self.rng) {
                card.color = Some(PALETTE[self.rng.pick_index(PALETTE.len())]);
                return Some(card);
            }
            warn!(
                "Generation attempt {}/{} produced no card",
                attempt, MAX_GENERATION_ATTEMPTS
            );
        }
        None
    }
}
