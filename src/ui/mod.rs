//! UI rendering components
//!
//! Views read `&AppState` and report what they drew through a [`HitMap`],
//! which the input layer uses to turn pointer events into actions.

pub mod background;
pub mod cards;
pub mod directions;
pub mod icons;
pub mod info;
pub mod layout;
pub mod loading;
pub mod menu;
pub mod quick_nav;
pub mod section;
pub mod status_button;

pub use layout::{HitMap, Target};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::app::state::{AppState, Mount, Screen, UserStatus};
use crate::theme::Theme;
use status_button::SIGN_IN;

/// Draw the whole frame
pub fn draw(frame: &mut Frame, state: &AppState, theme: &Theme) -> HitMap {
    let mut hits = HitMap::default();
    let area = frame.area();
    let [main, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    match &state.screen {
        Screen::Directions(plan) => directions::draw(frame, main, plan, theme, &mut hits),
        Screen::Dashboard => match state.mount {
            Mount::Dashboard => draw_dashboard(frame, main, state, theme, &mut hits),
            Mount::Planner => draw_planner(frame, main, state, theme, &mut hits),
        },
    }

    draw_status_bar(frame, status_area, state, theme);
    loading::draw(frame, status_area, state, theme);

    if let Some(message) = &state.notice {
        draw_notice(frame, area, message, theme, &mut hits);
    }
    hits
}

/// Backdrop plus either the lock screen or the signed-in menu
fn draw_dashboard(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme, hits: &mut HitMap) {
    background::draw(frame, area, theme, hits);
    match state.status {
        UserStatus::LoggedIn => menu::draw(frame, area, state, theme, hits),
        UserStatus::LoggingIn | UserStatus::LoggedOut => {
            draw_lock_screen(frame, area, state, theme, hits)
        }
    }
}

fn draw_lock_screen(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    theme: &Theme,
    hits: &mut HitMap,
) {
    let [_, info_area, hint_area, button_row, _] = Layout::vertical([
        Constraint::Percentage(30),
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    info::draw(frame, info_area, state, theme, Alignment::Center, true);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Tap anywhere to start",
            Style::default().fg(theme.fg_muted),
        )))
        .alignment(Alignment::Center),
        hint_area,
    );

    let width = SIGN_IN.width().min(button_row.width);
    let button_area =
        Rect { x: button_row.x + (button_row.width - width) / 2, width, ..button_row };
    status_button::draw(frame, button_area, &SIGN_IN, state.status, theme, hits);
}

/// The trip planner mounted on its own
fn draw_planner(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme, hits: &mut HitMap) {
    frame.render_widget(Block::default().style(Style::default().bg(theme.bg_primary)), area);
    let popup = layout::centered(area, 72, quick_nav::HEIGHT + 2);
    let block = Block::default()
        .title(" Plan a trip ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);
    quick_nav::draw(frame, inner, state, theme, hits);
}

/// Presentation class on the left, key hints on the right
fn draw_status_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let hints = match (&state.screen, state.mount, state.status) {
        (Screen::Directions(_), _, _) => "Esc back · q quit",
        (Screen::Dashboard, Mount::Planner, _) => "Tab focus · Enter plan · Esc quit",
        (Screen::Dashboard, Mount::Dashboard, UserStatus::LoggedIn) => {
            "Tab focus · ←/→ scroll · Ctrl+L sign out · Ctrl+C quit"
        }
        (Screen::Dashboard, Mount::Dashboard, _) => "Enter sign in · q quit",
    };

    let class = state.status.presentation_class();
    let [left, right] =
        Layout::horizontal([Constraint::Length(class.chars().count() as u16 + 3), Constraint::Min(0)])
            .areas(area);

    let class_color = match state.status {
        UserStatus::LoggedIn => theme.success,
        UserStatus::LoggingIn => theme.warning,
        UserStatus::LoggedOut => theme.fg_muted,
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("● ", Style::default().fg(class_color)),
            Span::styled(class, Style::default().fg(theme.fg_secondary)),
        ])),
        left,
    );
    // Leave the last two cells for the spinner
    let right = Rect { width: right.width.saturating_sub(2), ..right };
    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(theme.fg_muted)))
            .alignment(Alignment::Right),
        right,
    );
}

fn draw_notice(frame: &mut Frame, area: Rect, message: &str, theme: &Theme, hits: &mut HitMap) {
    let popup = layout::centered(area, 48, 6);
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(" Alert ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.warning))
        .style(Style::default().bg(theme.bg_secondary));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines = vec![
        Line::from(Span::styled(message.to_string(), Style::default().fg(theme.fg_primary))),
        Line::default(),
        Line::from(Span::styled(
            "[Enter] OK",
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
    hits.register(popup, Target::Notice);
}
