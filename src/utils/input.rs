use crate::controls::scrubber::{PointerButton, PointerEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,
    TogglePlayPause,
    ToggleMute,
    ToggleHelp,
    CloseOverlay,
    Pointer(PointerEvent),
    None,
}

pub fn map_key(ev: KeyEvent, help_open: bool) -> Action {
    if ev.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') | KeyCode::Char('C') = ev.code {
            return Action::Quit;
        }
    }

    if help_open {
        return match ev.code {
            KeyCode::Esc => Action::CloseOverlay,
            KeyCode::Char('?') => Action::ToggleHelp,
            _ => Action::None,
        };
    }

    match ev.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char(' ') | KeyCode::Enter => Action::TogglePlayPause,
        KeyCode::Char('m') | KeyCode::Char('M') => Action::ToggleMute,
        KeyCode::Char('?') => Action::ToggleHelp,
        _ => Action::None,
    }
}

pub fn map_mouse(ev: MouseEvent) -> Action {
    let x = ev.column as f64;
    let y = ev.row as f64;
    match ev.kind {
        MouseEventKind::Down(b) => Action::Pointer(PointerEvent::press(pointer_button(b), x, y)),
        MouseEventKind::Drag(_) | MouseEventKind::Moved => Action::Pointer(PointerEvent::moved(x, y)),
        MouseEventKind::Up(b) => Action::Pointer(PointerEvent::release(pointer_button(b), x, y)),
        _ => Action::None,
    }
}

fn pointer_button(b: MouseButton) -> PointerButton {
    match b {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
    }
}
