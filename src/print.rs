//! # Print Mode
//!
//! Non-interactive output for `--print N`: advances the deck N times and
//! writes each card to a writer, either as plain text or as an HTML fragment
//! with the card text escaped.

use std::io::{self, Write};

use crate::core::action::{Action, Outcome, update};
use crate::core::card::{Card, escape_html};
use crate::core::state::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintFormat {
    Plain,
    Html,
}

pub fn render_plain(card: &Card) -> String {
    format!("[{}] {}\n{}\n", card.kind.slug(), card.title, card.text)
}

pub fn render_html(card: &Card) -> String {
    format!(
        "<div class=\"card\">\n  <div class=\"type\">{}</div>\n  <div class=\"text\" style=\"color: {}\">{}</div>\n</div>\n",
        escape_html(card.kind.slug()),
        card.accent().hex(),
        escape_html(&card.text)
    )
}

/// Advances `count` times, writing every card shown. Returns how many were written.
///
/// An advance that produced no card writes the status notice and is not counted.
pub fn run(app: &mut App, count: usize, format: PrintFormat, out: &mut impl Write) -> io::Result<usize> {
    let mut written = 0;
    for _ in 0..count {
        update(app, Action::Advance);
        let card = match (app.last_outcome, app.navigator.current()) {
            (Some(Outcome::Card(_)), Some(card)) => card,
            _ => {
                writeln!(out, "{}", app.status_message)?;
                continue;
            }
        };
        let rendered = match format {
            PrintFormat::Plain => render_plain(card),
            PrintFormat::Html => render_html(card),
        };
        if written > 0 && format == PrintFormat::Plain {
            writeln!(out)?;
        }
        out.write_all(rendered.as_bytes())?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::UNAVAILABLE_NOTICE;
    use crate::core::card::{CardKind, PALETTE};
    use crate::core::navigator::MAX_GENERATION_ATTEMPTS;
    use crate::core::pools::{LoadedPools, Pools};
    use crate::core::random::SequenceRandom;
    use crate::test_support::{scenario_pools, test_app};

    #[test]
    fn test_render_plain() {
        let card = Card::new(CardKind::HotTake, "about vinyl");
        assert_eq!(render_plain(&card), "[hot-take] Hot take\nabout vinyl\n");
    }

    #[test]
    fn test_render_html_escapes_text() {
        let mut card = Card::new(CardKind::WouldYouRather, "<a> & b\n\n— or —\n\nc");
        card.color = Some(PALETTE[3]);
        let html = render_html(&card);
        assert!(html.contains("<div class=\"type\">would-you-rather</div>"));
        assert!(html.contains("color: #9ff8e6"));
        assert!(html.contains("&lt;a&gt; &amp; b<br><br>— or —<br><br>c"));
    }

    #[test]
    fn test_run_writes_requested_cards() {
        let mut app = test_app();
        let mut out = Vec::new();
        let written = run(&mut app, 3, PrintFormat::Plain, &mut out).unwrap();
        assert_eq!(written, 3);
        assert_eq!(app.navigator.history().len(), 3);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches('[').count(), 3);
    }

    #[test]
    fn test_run_zero_is_empty() {
        let mut app = test_app();
        let mut out = Vec::new();
        assert_eq!(run(&mut app, 0, PrintFormat::Html, &mut out).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_does_not_repeat_card_when_none_available() {
        let loaded = LoadedPools {
            pools: Pools {
                would_you_rather_good: vec!["solo".into()],
                ..scenario_pools()
            },
            used_fallback: false,
        };
        // tell-a-story S1, then every attempt lands on the one-entry good side
        let mut rng = SequenceRandom::new(vec![0.6, 0.0, 0.0]);
        rng.extend([0.1; 2 * MAX_GENERATION_ATTEMPTS]);
        let mut app = App::new(loaded, Box::new(rng), "https://example.com".into());

        let mut out = Vec::new();
        let written = run(&mut app, 2, PrintFormat::Plain, &mut out).unwrap();
        assert_eq!(written, 1);
        assert_eq!(app.navigator.history().len(), 1);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("S1").count(), 1);
        assert!(text.ends_with(&format!("{UNAVAILABLE_NOTICE}\n")));
    }
}
