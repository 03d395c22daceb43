//! # TitleBar Component
//!
//! Top status bar: the brand label on the left, then the position in the
//! session history and any status message.
//!
//! 1. **On a card with status**: `" promptdeck  3 / 7 | No card available"`
//! 2. **On a card**: `" promptdeck  3 / 7"`
//! 3. **Landing**: `" promptdeck"`
//!
//! The brand label doubles as the long-press target. `TitleBar::brand_area`
//! gives the exact cells it occupies so the event loop can hit-test presses.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub const BRAND_COLOR: Color = Color::Rgb(0xff, 0x4f, 0xd8);

pub struct TitleBar {
    pub brand_label: String,
    /// "3 / 7"; None on landing.
    pub progress: Option<String>,
    pub status_message: String,
    /// Brand is being held down.
    pub brand_pressed: bool,
}

impl TitleBar {
    pub fn new(
        brand_label: String,
        progress: Option<String>,
        status_message: String,
        brand_pressed: bool,
    ) -> Self {
        Self {
            brand_label,
            progress,
            status_message,
            brand_pressed,
        }
    }

    /// Cells covered by the brand label within a title bar drawn at `area`.
    pub fn brand_area(area: Rect, brand_label: &str) -> Rect {
        let width = (brand_label.chars().count() as u16).min(area.width.saturating_sub(1));
        Rect::new(area.x.saturating_add(1), area.y, width, area.height.min(1))
    }

    fn line(&self) -> Line<'_> {
        let mut brand_style = Style::default().fg(BRAND_COLOR).add_modifier(Modifier::BOLD);
        if self.brand_pressed {
            brand_style = brand_style.add_modifier(Modifier::REVERSED);
        }

        let mut spans = vec![Span::raw(" "), Span::styled(self.brand_label.as_str(), brand_style)];
        if let Some(progress) = &self.progress {
            spans.push(Span::styled(
                format!("  {progress}"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                self.status_message.as_str(),
                Style::default().fg(Color::Yellow),
            ));
        }
        Line::from(spans)
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.line(), area);
    }
}
