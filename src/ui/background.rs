//! Full-screen backdrop; clicking it while signed out signs in

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Paragraph},
};

use super::layout::{HitMap, Target, center_text};
use crate::theme::Theme;

/// Road vanishing into the horizon, drawn along the bottom edge
const ROAD: &[&str] = &[
    "‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾/  ¦  \\‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾",
    "                          /    ¦    \\                          ",
    "                        /      ¦      \\                        ",
    "                      /        ¦        \\                      ",
];

/// Draw the backdrop and register it beneath everything else
pub fn draw(frame: &mut Frame, area: Rect, theme: &Theme, hits: &mut HitMap) {
    frame.render_widget(Block::default().style(Style::default().bg(theme.bg_primary)), area);
    hits.register(area, Target::Background);

    let height = ROAD.len() as u16;
    if area.height <= height * 3 {
        return;
    }
    let road_area = Rect { y: area.bottom() - height, height, ..area };
    let lines: Vec<Line> = ROAD
        .iter()
        .map(|row| Line::styled(center_text(row, area.width), Style::default().fg(theme.border)))
        .collect();
    frame.render_widget(Paragraph::new(lines), road_area);
}
