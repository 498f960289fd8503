//! Event handling utilities
//!
//! Maps terminal key and mouse events onto [`Action`]s. Mouse events are
//! resolved against the [`HitMap`] of the last drawn frame.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::action::Action;
use super::state::{AppState, Mount, Screen, SectionId, UserStatus};
use crate::ui::{HitMap, Target};

/// Columns moved per arrow key or wheel notch
pub const SCROLL_STEP: i32 = 4;

/// Map a key press to actions
pub fn map_key(key: KeyEvent, state: &AppState) -> Vec<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // The alert is modal
    if state.notice.is_some() {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => vec![Action::NoticeDismiss],
            _ => Vec::new(),
        };
    }

    if let Screen::Directions(_) = state.screen {
        return match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Enter => vec![Action::NavigateBack],
            KeyCode::Char('q') => vec![Action::Quit],
            _ => Vec::new(),
        };
    }

    if state.mount == Mount::Dashboard && state.status != UserStatus::LoggedIn {
        return match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                vec![Action::StatusButtonPressed(UserStatus::LoggedIn)]
            }
            KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
            _ => Vec::new(),
        };
    }

    if ctrl {
        return key_with_control(key.code, state.mount).into_iter().collect();
    }

    match key.code {
        KeyCode::Tab => return vec![Action::FocusNext],
        KeyCode::BackTab => return vec![Action::FocusPrev],
        KeyCode::Esc if state.mount == Mount::Planner => return vec![Action::Quit],
        _ => {}
    }

    match state.focus.section() {
        Some(section) => section_key(key.code, section),
        None => field_key(key.code),
    }
    .into_iter()
    .collect()
}

/// Ctrl combinations available while the form is shown
fn key_with_control(key: KeyCode, mount: Mount) -> Option<Action> {
    match key {
        KeyCode::Char('o') => Some(Action::FormToggleOrigin),
        KeyCode::Char('l') if mount == Mount::Dashboard => {
            Some(Action::StatusButtonPressed(UserStatus::LoggedOut))
        }
        KeyCode::Char('a') => Some(Action::FormCursorHome),
        KeyCode::Char('e') => Some(Action::FormCursorEnd),
        _ => None,
    }
}

/// Keys while a text field has focus
fn field_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Enter => Some(Action::FormSubmit),
        KeyCode::Char(c) => Some(Action::FormInsert(c)),
        KeyCode::Backspace => Some(Action::FormBackspace),
        KeyCode::Delete => Some(Action::FormDelete),
        KeyCode::Left => Some(Action::FormCursorLeft),
        KeyCode::Right => Some(Action::FormCursorRight),
        KeyCode::Home => Some(Action::FormCursorHome),
        KeyCode::End => Some(Action::FormCursorEnd),
        _ => None,
    }
}

/// Vim-style keys while a scrollable section has focus
fn section_key(key: KeyCode, section: SectionId) -> Option<Action> {
    let delta = match key {
        KeyCode::Char('h') | KeyCode::Left => -SCROLL_STEP,
        KeyCode::Char('l') | KeyCode::Right => SCROLL_STEP,
        KeyCode::Char('g') | KeyCode::Home => -i32::from(u16::MAX),
        KeyCode::Char('G') | KeyCode::End => i32::from(u16::MAX),
        KeyCode::Char('q') => return Some(Action::Quit),
        _ => return None,
    };
    Some(Action::ScrollBy { section, delta })
}

/// Map a mouse event to actions
pub fn map_mouse(event: MouseEvent, state: &AppState, hits: &HitMap) -> Vec<Action> {
    let target = hits.target_at(event.column, event.row);

    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => press(target, event.column, state),
        MouseEventKind::Drag(MouseButton::Left) => match state.grabbed_section() {
            Some(section) if target == Some(Target::Section(section)) => {
                vec![Action::ScrollDrag { section, x: event.column }]
            }
            // Leaving the container ends the drag
            Some(section) => vec![Action::ScrollRelease { section }],
            None => Vec::new(),
        },
        MouseEventKind::Moved => match state.grabbed_section() {
            Some(section) if target != Some(Target::Section(section)) => {
                vec![Action::ScrollRelease { section }]
            }
            _ => Vec::new(),
        },
        MouseEventKind::Up(_) => {
            state.grabbed_section().map(|section| Action::ScrollRelease { section }).into_iter().collect()
        }
        MouseEventKind::ScrollLeft | MouseEventKind::ScrollUp => wheel(target, -SCROLL_STEP),
        MouseEventKind::ScrollRight | MouseEventKind::ScrollDown => wheel(target, SCROLL_STEP),
        _ => Vec::new(),
    }
}

fn press(target: Option<Target>, column: u16, state: &AppState) -> Vec<Action> {
    if state.notice.is_some() {
        return match target {
            Some(Target::Notice) => vec![Action::NoticeDismiss],
            _ => Vec::new(),
        };
    }

    let action = match target {
        Some(Target::Background) => Action::BackgroundClicked,
        // Disabled buttons swallow the click
        Some(Target::StatusButton(status)) if status == state.status => return Vec::new(),
        Some(Target::StatusButton(status)) => Action::StatusButtonPressed(status),
        Some(Target::Field(field)) => Action::FormFocus(field),
        Some(Target::OriginToggle) => Action::FormToggleOrigin,
        Some(Target::Submit) => Action::FormSubmit,
        Some(Target::Section(section)) => Action::ScrollGrab { section, x: column },
        Some(Target::Back) => Action::NavigateBack,
        Some(Target::Notice) => Action::NoticeDismiss,
        None => return Vec::new(),
    };
    vec![action]
}

fn wheel(target: Option<Target>, delta: i32) -> Vec<Action> {
    match target {
        Some(Target::Section(section)) => vec![Action::ScrollBy { section, delta }],
        _ => Vec::new(),
    }
}
