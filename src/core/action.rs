//! # Actions
//!
//! Everything that can happen in promptdeck becomes an `Action`.
//! User swipes up or presses Down? That's `Action::Advance`.
//! User holds the brand label? That's `Action::BrandLongPress`.
//!
//! The `update()` function takes the current state and an action,
//! mutates it, and returns an `Effect` describing any I/O the adapter must do.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::navigator::{Direction, Step};
use crate::core::state::App;

pub const UNAVAILABLE_NOTICE: &str = "No card available";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Advance,
    Retreat,
    ResetToLanding,
    BrandLongPress,
    Quit,
}

/// Side effects the adapter performs after `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    OpenLink(String),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Advance => {
            let outcome = Outcome::from(&app.navigator.advance());
            apply_outcome(app, outcome);
            Effect::None
        }
        Action::Retreat => {
            let outcome = Outcome::from(&app.navigator.retreat());
            apply_outcome(app, outcome);
            Effect::None
        }
        Action::ResetToLanding => {
            app.navigator.reset_to_landing();
            apply_outcome(app, Outcome::Landing);
            Effect::None
        }
        Action::BrandLongPress => {
            info!("Brand long-press, link {}", app.brand_link);
            app.status_message = format!("Open {}", app.brand_link);
            Effect::OpenLink(app.brand_link.clone())
        }
        Action::Quit => Effect::Quit,
    }
}

/// Result of the last navigation, recorded on `App::last_outcome`.
///
/// A `Step` without the borrow, so `app` can be mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A card is now showing, reached in this direction.
    Card(Direction),
    Landing,
    /// Nothing moved.
    Unavailable,
}

impl From<&Step<'_>> for Outcome {
    fn from(step: &Step<'_>) -> Self {
        match step {
            Step::Card { direction, .. } => Outcome::Card(*direction),
            Step::Landing => Outcome::Landing,
            Step::Unavailable => Outcome::Unavailable,
        }
    }
}

fn apply_outcome(app: &mut App, outcome: Outcome) {
    app.last_outcome = Some(outcome);
    match outcome {
        Outcome::Card(direction) => {
            app.last_direction = Some(direction);
            app.status_message.clear();
        }
        Outcome::Landing => {
            app.last_direction = Some(Direction::Backward);
            app.status_message.clear();
        }
        Outcome::Unavailable => {
            app.status_message = UNAVAILABLE_NOTICE.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pools::{LoadedPools, Pools};
    use crate::core::random::SequenceRandom;
    use crate::test_support::{scenario_pools, test_app};

    #[test]
    fn test_advance_shows_card_forward() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Advance), Effect::None);
        assert!(app.navigator.current().is_some());
        assert_eq!(app.last_direction, Some(Direction::Forward));
        assert_eq!(app.last_outcome, Some(Outcome::Card(Direction::Forward)));
        assert_eq!(app.progress_label().as_deref(), Some("1 / 1"));
    }

    #[test]
    fn test_retreat_to_landing() {
        let mut app = test_app();
        update(&mut app, Action::Advance);
        update(&mut app, Action::Retreat);
        assert!(app.navigator.is_landing());
        assert_eq!(app.last_direction, Some(Direction::Backward));
    }

    #[test]
    fn test_reset_keeps_history() {
        let mut app = test_app();
        update(&mut app, Action::Advance);
        update(&mut app, Action::Advance);
        update(&mut app, Action::ResetToLanding);
        assert!(app.navigator.is_landing());
        assert_eq!(app.navigator.history().len(), 2);
    }

    #[test]
    fn test_unavailable_sets_status() {
        let pools = Pools {
            would_you_rather_bad: vec![],
            ..scenario_pools()
        };
        let loaded = LoadedPools {
            pools,
            used_fallback: false,
        };
        // Always would-you-rather, always the empty bad side
        let rng = Box::new(SequenceRandom::new(vec![0.3, 0.9]));
        let mut app = App::new(loaded, rng, "https://example.com".into());
        update(&mut app, Action::Advance);
        assert_eq!(app.status_message, UNAVAILABLE_NOTICE);
        assert_eq!(app.last_outcome, Some(Outcome::Unavailable));
        assert!(app.navigator.is_landing());

        // A later successful move clears the notice
        update(&mut app, Action::Retreat);
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn test_unavailable_after_card_keeps_card_and_direction() {
        let pools = Pools {
            would_you_rather_good: vec!["solo".into()],
            ..scenario_pools()
        };
        let loaded = LoadedPools {
            pools,
            used_fallback: false,
        };
        // tell-a-story S1 with accent 0, then would-you-rather good side forever
        let mut rng = SequenceRandom::new(vec![0.6, 0.0, 0.0]);
        rng.extend([0.1; 2 * crate::core::navigator::MAX_GENERATION_ATTEMPTS]);
        let mut app = App::new(loaded, Box::new(rng), "https://example.com".into());

        update(&mut app, Action::Advance);
        let first = app.navigator.current().cloned();
        assert_eq!(app.last_outcome, Some(Outcome::Card(Direction::Forward)));

        update(&mut app, Action::Advance);
        assert_eq!(app.last_outcome, Some(Outcome::Unavailable));
        assert_eq!(app.status_message, UNAVAILABLE_NOTICE);
        assert_eq!(app.navigator.current().cloned(), first);
        assert_eq!(app.navigator.history().len(), 1);
    }

    #[test]
    fn test_brand_long_press_opens_link() {
        let mut app = test_app();
        let effect = update(&mut app, Action::BrandLongPress);
        assert_eq!(effect, Effect::OpenLink("https://example.com".to_string()));
        assert!(app.status_message.contains("https://example.com"));
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
