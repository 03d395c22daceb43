use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    Next,
    Prev,
    Home,

    // TUI-local events (drag and long-press tracking)
    PointerDown(u16, u16),
    PointerDrag(u16, u16),
    PointerUp(u16, u16),
    WheelUp,
    WheelDown,
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO).ok().flatten()
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> std::io::Result<Option<TuiEvent>> {
    if event::poll(timeout)? {
        Ok(map_event(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translates a raw crossterm event. Unhandled input maps to `None`.
pub fn map_event(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => map_key(key_event),
        Event::Mouse(mouse_event) => map_mouse(mouse_event),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Only presses; some terminals also report repeats and releases
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(TuiEvent::Prev),
        (_, KeyCode::Down) | (_, KeyCode::Char(' ')) | (_, KeyCode::Char('j')) => {
            Some(TuiEvent::Next)
        }
        (_, KeyCode::Home) => Some(TuiEvent::Home),
        _ => None,
    }
}

fn map_mouse(mouse_event: MouseEvent) -> Option<TuiEvent> {
    let (col, row) = (mouse_event.column, mouse_event.row);
    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(TuiEvent::PointerDown(col, row)),
        MouseEventKind::Drag(MouseButton::Left) => Some(TuiEvent::PointerDrag(col, row)),
        MouseEventKind::Up(MouseButton::Left) => Some(TuiEvent::PointerUp(col, row)),
        MouseEventKind::ScrollUp => Some(TuiEvent::WheelUp),
        MouseEventKind::ScrollDown => Some(TuiEvent::WheelDown),
        _ => None,
    }
}
