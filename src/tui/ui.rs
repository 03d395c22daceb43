use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CardView, LandingPage, TitleBar};

const FOOTER_HINT: &str = "↓/space next · ↑ back · home landing · q quit";

/// Splits the screen into title bar, main area and footer.
pub fn screen_areas(area: Rect) -> [Rect; 3] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Min(0), Length(1)]).areas(area)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &TuiState) {
    let [title_area, main_area, footer_area] = screen_areas(frame.area());

    let mut title_bar = TitleBar::new(
        tui.brand_label.clone(),
        app.progress_label(),
        app.status_message.clone(),
        tui.long_press.is_pending(),
    );
    title_bar.render(frame, title_area);

    match app.navigator.current() {
        Some(card) => CardView::new(card, tui.card_offset).render(frame, main_area),
        None => LandingPage::new(tui.brand_label.clone(), tui.pulse_value).render(frame, main_area),
    }

    let footer = Paragraph::new(FOOTER_HINT)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, footer_area);
}

/// Whether a pointer at (col, row) lands on the brand label.
pub fn hit_test_brand(col: u16, row: u16, frame_area: Rect, brand_label: &str) -> bool {
    let [title_area, _, _] = screen_areas(frame_area);
    let brand = TitleBar::brand_area(title_area, brand_label);
    col >= brand.x && col < brand.x + brand.width && row >= brand.y && row < brand.y + brand.height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(app: &App, tui: &TuiState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_landing() {
        let app = test_app();
        let tui = TuiState::new("promptdeck".to_string(), 3, 500);
        let text = screen_text(&app, &tui);
        assert!(text.contains("Swipe up or press"));
        assert!(text.contains("q quit"));
    }

    #[test]
    fn test_draw_card_after_advance() {
        let mut app = test_app();
        update(&mut app, Action::Advance);
        let tui = TuiState::new("promptdeck".to_string(), 3, 500);
        let text = screen_text(&app, &tui);
        let card = app.navigator.current().unwrap();
        assert!(text.contains(card.kind.slug()));
        assert!(text.contains("1 / 1"));
        assert!(!text.contains("Swipe up or press"));
    }

    #[test]
    fn test_hit_test_brand() {
        let area = Rect::new(0, 0, 80, 24);
        assert!(hit_test_brand(1, 0, area, "promptdeck"));
        assert!(hit_test_brand(10, 0, area, "promptdeck"));
        assert!(!hit_test_brand(0, 0, area, "promptdeck"));
        assert!(!hit_test_brand(11, 0, area, "promptdeck"));
        assert!(!hit_test_brand(3, 1, area, "promptdeck"));
    }
}
