//! Busy spinner

use ratatui::{Frame, layout::Rect, style::Style, text::Span, widgets::Paragraph};

use crate::app::state::AppState;
use crate::theme::Theme;

pub const FRAMES: [&str; 6] = ["◜", "◠", "◝", "◞", "◡", "◟"];

pub fn frame_glyph(frame: usize) -> &'static str {
    FRAMES[frame % FRAMES.len()]
}

/// Draw the spinner in the right-most cell of `area` while anything is pending
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    if !state.is_busy() || area.width < 2 || area.height == 0 {
        return;
    }
    let cell = Rect { x: area.right() - 2, width: 2, height: 1, ..area };
    let span = Span::styled(frame_glyph(state.spinner_frame), Style::default().fg(theme.accent_primary));
    frame.render_widget(Paragraph::new(span), cell);
}
