//! # CardView Component
//!
//! Draws one card as a rounded box centered in the main area: the kind as
//! the box title, the prompt text centered inside in the card's accent.
//!
//! `offset` moves the box vertically (positive is down). It carries both the
//! entry slide after navigation and the live position while a drag is held.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

use crate::core::card::Card;
use crate::tui::component::Component;
use crate::tui::sanitize::display_lines;

const MAX_CARD_WIDTH: u16 = 64;
/// Border plus one row of padding above and below the text.
const VERTICAL_CHROME: u16 = 4;
/// Border plus two columns of padding on each side.
const HORIZONTAL_CHROME: u16 = 6;

pub struct CardView<'a> {
    pub card: &'a Card,
    pub offset: i32,
}

impl<'a> CardView<'a> {
    pub fn new(card: &'a Card, offset: i32) -> Self {
        Self { card, offset }
    }

    fn paragraph(&self) -> Paragraph<'a> {
        let (r, g, b) = self.card.accent().rgb;
        let text_style = Style::default().fg(Color::Rgb(r, g, b));
        let lines: Vec<Line> = display_lines(&self.card.text)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, text_style)))
            .collect();
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
    }

    /// Box position inside `area` for the current text and offset.
    fn card_rect(&self, area: Rect, text_height: u16) -> Rect {
        let width = area.width.min(MAX_CARD_WIDTH);
        let height = text_height.saturating_add(VERTICAL_CHROME).min(area.height);
        let x = area.x + (area.width - width) / 2;

        let free = (area.height - height) as i32;
        let y = (free / 2 + self.offset).clamp(0, free);
        Rect::new(x, area.y + y as u16, width, height)
    }
}

impl Component for CardView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = self.paragraph();
        let text_width = area.width.min(MAX_CARD_WIDTH).saturating_sub(HORIZONTAL_CHROME).max(1);
        let text_height = paragraph.line_count(text_width) as u16;

        let rect = self.card_rect(area, text_height);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                format!(" {} ", self.card.kind.slug()),
                Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
            ))
            .padding(Padding::new(2, 2, 1, 1));

        let inner = block.inner(rect);
        frame.render_widget(block, rect);
        frame.render_widget(paragraph, inner);
    }
}
