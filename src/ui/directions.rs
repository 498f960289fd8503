//! Screen reached after a trip plan is submitted

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::layout::{HitMap, Target, centered};
use crate::services::PlanRequest;
use crate::theme::Theme;

const WIDTH: u16 = 50;
const HEIGHT: u16 = 8;

pub fn draw(frame: &mut Frame, area: Rect, plan: &PlanRequest, theme: &Theme, hits: &mut HitMap) {
    frame.render_widget(Block::default().style(Style::default().bg(theme.bg_primary)), area);

    let popup = centered(area, WIDTH, HEIGHT);
    let block = Block::default()
        .title(" Directions ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_focused));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let label = Style::default().fg(theme.fg_muted);
    let value = Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD);
    let start = if plan.start.is_empty() { "Current location" } else { &plan.start };
    let end = if plan.end.is_empty() { "-" } else { &plan.end };

    let lines = vec![
        Line::from(vec![Span::styled("From  ", label), Span::styled(start.to_string(), value)]),
        Line::from(vec![Span::styled("To    ", label), Span::styled(end.to_string(), value)]),
        Line::default(),
        Line::from(Span::styled("Route planning requested.", Style::default().fg(theme.success))),
        Line::default(),
        Line::from(Span::styled("[Esc] Back to dashboard", Style::default().fg(theme.accent_primary))),
    ];
    frame.render_widget(Paragraph::new(lines), inner);

    if inner.height >= 6 {
        hits.register(Rect { y: inner.y + 5, height: 1, ..inner }, Target::Back);
    }
}
