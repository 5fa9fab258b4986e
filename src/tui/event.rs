use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Shell-level
    Quit,
    Resize,

    // Routed to the front-most view first
    Back,    // Esc, Backspace, Left
    Confirm, // Enter
    Char(char),
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !matches!(event::poll(timeout), Ok(true)) {
        return None;
    }
    match event::read() {
        Ok(Event::Key(key_event)) => {
            // Release events would double every keystroke on some terminals
            if key_event.kind == KeyEventKind::Release {
                return None;
            }
            log::trace!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            map_key(key_event.modifiers, key_event.code)
        }
        Ok(Event::Resize(_, _)) => Some(TuiEvent::Resize),
        Ok(_) => None,
        Err(e) => {
            log::warn!("Failed to read terminal event: {}", e);
            None
        }
    }
}

fn map_key(modifiers: KeyModifiers, code: KeyCode) -> Option<TuiEvent> {
    match (modifiers, code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char(c)) => Some(TuiEvent::Char(c)),
        (_, KeyCode::Esc) | (_, KeyCode::Backspace) | (_, KeyCode::Left) => Some(TuiEvent::Back),
        (_, KeyCode::Enter) => Some(TuiEvent::Confirm),
        _ => None,
    }
}
