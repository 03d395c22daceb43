//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse input into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Input
//!
//! | Input                          | Card view        | Landing          |
//! |--------------------------------|------------------|------------------|
//! | `↓` / `Space` / `j`            | advance          | advance          |
//! | `↑` / `k`                      | retreat          | (stays)          |
//! | drag up past threshold         | advance          | advance          |
//! | drag down past threshold       | retreat          | nothing          |
//! | wheel down / wheel up          | advance / retreat| advance / nothing|
//! | hold brand label               | long-press link  | long-press link  |
//! | `Home`                         | landing          | (stays)          |
//! | `q` / `Esc` / `Ctrl+C`         | quit             | quit             |
//!
//! ## Redraw Strategy
//!
//! - **Animating** (landing pulse, slide-in, drag, brand held): draws every ~40ms.
//! - **Idle** (a settled card): sleeps up to 500ms, only redraws on events
//!   or terminal resize.

mod component;
mod components;
mod event;
mod gesture;
mod sanitize;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, Outcome, update};
use crate::core::config::ResolvedConfig;
use crate::core::navigator::Direction;
use crate::core::state::App;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::gesture::{DragTracker, LongPress, Swipe};

/// Rows a card travels during its slide-in.
const SLIDE_ROWS: f32 = 2.0;
const SLIDE_DURATION: Duration = Duration::from_millis(160);
/// Largest offset a held drag can push the card.
const MAX_DRAG_OFFSET: i32 = 6;

/// Short entry animation after a navigation.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    direction: Direction,
    started: Instant,
}

impl Transition {
    pub fn new(direction: Direction, started: Instant) -> Self {
        Self { direction, started }
    }

    pub fn is_active(&self, now: Instant) -> bool {
        now.duration_since(self.started) < SLIDE_DURATION
    }

    /// Vertical offset at `now`: forward cards rise from below, backward ones drop from above.
    pub fn offset(&self, now: Instant) -> i32 {
        let elapsed = now.duration_since(self.started).as_secs_f32();
        let remaining = (1.0 - elapsed / SLIDE_DURATION.as_secs_f32()).max(0.0);
        let rows = (SLIDE_ROWS * remaining).round() as i32;
        match self.direction {
            Direction::Forward => rows,
            Direction::Backward => -rows,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub brand_label: String,
    pub drag: DragTracker,
    pub long_press: LongPress,
    pub transition: Option<Transition>,
    // Animation state
    pub pulse_value: f32,
    pub card_offset: i32,
}

impl TuiState {
    pub fn new(brand_label: String, drag_threshold_rows: u16, long_press_ms: u64) -> Self {
        Self {
            brand_label,
            drag: DragTracker::new(drag_threshold_rows),
            long_press: LongPress::new(Duration::from_millis(long_press_ms)),
            transition: None,
            pulse_value: 0.0,
            card_offset: 0,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(
            config.brand_label.clone(),
            config.drag_threshold_rows,
            config.long_press_ms,
        )
    }

    fn is_animating(&self, app: &App, now: Instant) -> bool {
        app.navigator.is_landing()
            || self.drag.is_dragging()
            || self.long_press.is_pending()
            || self.transition.is_some_and(|t| t.is_active(now))
    }

    /// Slide-in offset plus any live drag, clamped.
    fn compute_card_offset(&self, now: Instant) -> i32 {
        let slide = self.transition.map_or(0, |t| t.offset(now));
        let drag = self.drag.offset().clamp(-MAX_DRAG_OFFSET, MAX_DRAG_OFFSET);
        slide + drag
    }
}

/// Maps one input event to a core action, updating drag and long-press state on the way.
pub fn action_for(
    app: &App,
    tui: &mut TuiState,
    event: TuiEvent,
    frame_area: Rect,
    now: Instant,
) -> Option<Action> {
    let landing = app.navigator.is_landing();
    match event {
        TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::Next | TuiEvent::WheelDown => Some(Action::Advance),
        TuiEvent::Prev => Some(Action::Retreat),
        TuiEvent::WheelUp if landing => None,
        TuiEvent::WheelUp => Some(Action::Retreat),
        TuiEvent::Home => Some(Action::ResetToLanding),
        TuiEvent::PointerDown(col, row) => {
            // The brand label never starts a swipe
            if ui::hit_test_brand(col, row, frame_area, &tui.brand_label) {
                tui.long_press.press(now);
            } else {
                tui.drag.begin(row);
            }
            None
        }
        TuiEvent::PointerDrag(_, row) => {
            tui.long_press.cancel();
            tui.drag.update(row);
            None
        }
        TuiEvent::PointerUp(_, _) => {
            tui.long_press.cancel();
            match tui.drag.end() {
                Some(Swipe::Up) => Some(Action::Advance),
                Some(Swipe::Down) if !landing => Some(Action::Retreat),
                _ => None,
            }
        }
        TuiEvent::Resize => None,
    }
}

/// Slide-in for the card the last navigation brought on screen, if any.
fn transition_for(app: &App, now: Instant) -> Option<Transition> {
    match app.last_outcome {
        Some(Outcome::Card(direction)) => Some(Transition::new(direction, now)),
        _ => None,
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(mut app: App, config: &ResolvedConfig) -> std::io::Result<()> {
    let mut tui = TuiState::from_config(config);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => guard,
        Err(e) => {
            ratatui::restore();
            return Err(e);
        }
    };

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    let result = loop {
        let now = Instant::now();

        if tui.long_press.poll(now) {
            let effect = update(&mut app, Action::BrandLongPress);
            apply_effect(&effect);
            needs_redraw = true;
        }

        let animating = tui.is_animating(&app, now);
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            tui.pulse_value = (elapsed * 4.0).sin() * 0.5 + 0.5;
            tui.card_offset = tui.compute_card_offset(now);
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &tui)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~25fps), long when idle
        let timeout = if animating {
            Duration::from_millis(40)
        } else {
            Duration::from_millis(500)
        };
        let first_event = match poll_event_timeout(timeout) {
            Ok(event) => event,
            Err(e) => break Err(e),
        };

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let frame_area = terminal.get_frame().area();
            let now = Instant::now();
            let Some(action) = action_for(&app, &mut tui, event, frame_area, now) else {
                continue;
            };

            let moves = matches!(action, Action::Advance | Action::Retreat);
            let effect = update(&mut app, action);
            if effect == Effect::Quit {
                should_quit = true;
                break;
            }
            apply_effect(&effect);

            if moves {
                tui.transition = transition_for(&app, now).or(tui.transition);
            }
        }

        if should_quit {
            break Ok(());
        }
    };

    info!(
        "Session ended with {} cards in history",
        app.navigator.history().len()
    );
    ratatui::restore();
    result
}

fn apply_effect(effect: &Effect) {
    match effect {
        Effect::OpenLink(url) => debug!("Brand link requested: {}", url),
        Effect::None | Effect::Quit => {}
    }
}
