//! # Landing Page Component
//!
//! Shown before the first card and whenever the user backs out past it.
//! The arrow hint pulses while the landing page is idle.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::title_bar::BRAND_COLOR;

pub struct LandingPage {
    pub brand_label: String,
    /// 0.0..=1.0 animation phase for the arrow.
    pub pulse: f32,
}

impl LandingPage {
    pub fn new(brand_label: String, pulse: f32) -> Self {
        Self { brand_label, pulse }
    }
}

impl Component for LandingPage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let arrow_style = if self.pulse > 0.5 {
            Style::default().fg(BRAND_COLOR).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(BRAND_COLOR).add_modifier(Modifier::DIM)
        };

        let text_lines = vec![
            Line::from(Span::styled("↑", arrow_style)),
            Line::from(""),
            Line::from(Span::styled(
                self.brand_label.as_str(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Swipe up or press ↓ for a prompt",
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                format!("v{}", env!("CARGO_PKG_VERSION")),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let text_height = text_lines.len() as u16;
        let [text_area] = Layout::vertical([Constraint::Length(text_height)])
            .flex(Flex::Center)
            .areas(area);

        let paragraph = Paragraph::new(text_lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, text_area);
    }
}
