//! Trip planner form: destination, optional start location, submit

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::icons;
use super::layout::{HitMap, Target};
use crate::app::form::{Field, Submission, TextField};
use crate::app::state::{AppState, Focus};
use crate::theme::Theme;

/// Rows used by the form: bordered inputs plus a status line
pub const HEIGHT: u16 = 4;

const BUTTON_WIDTH: u16 = 5;

const DESTINATION_PLACEHOLDER: &str = "Where would you like to go?";
const ORIGIN_PLACEHOLDER: &str = "Start location";

/// Draw the form and register its controls
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme, hits: &mut HitMap) {
    let form = &state.quick_nav;
    let [inputs_area, status_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);

    let mut constraints = vec![Constraint::Min(12), Constraint::Length(BUTTON_WIDTH)];
    if form.origin_visible {
        constraints.push(Constraint::Min(12));
    }
    constraints.push(Constraint::Length(BUTTON_WIDTH));
    let columns = Layout::horizontal(constraints).spacing(1).split(inputs_area);

    draw_input(
        frame,
        columns[0],
        &form.destination,
        DESTINATION_PLACEHOLDER,
        state.focus == Focus::Destination,
        theme,
    );
    hits.register(columns[0], Target::Field(Field::Destination));

    let toggle = if form.origin_visible { "arrow-left" } else { "arrow-right" };
    draw_button(frame, columns[1], icons::glyph(toggle), theme.accent_secondary, theme);
    hits.register(columns[1], Target::OriginToggle);

    let submit_area = if form.origin_visible {
        draw_input(
            frame,
            columns[2],
            &form.origin,
            ORIGIN_PLACEHOLDER,
            state.focus == Focus::Origin,
            theme,
        );
        hits.register(columns[2], Target::Field(Field::Origin));
        columns[3]
    } else {
        columns[2]
    };
    let submit_color = if form.is_submitting() { theme.fg_muted } else { theme.success };
    draw_button(frame, submit_area, icons::glyph("check"), submit_color, theme);
    hits.register(submit_area, Target::Submit);

    frame.render_widget(Paragraph::new(status_line(&form.submission, theme)), status_area);
}

fn status_line(submission: &Submission, theme: &Theme) -> Line<'static> {
    match submission {
        Submission::Idle => Line::from(Span::styled(
            "Enter to plan · Ctrl+O start location",
            Style::default().fg(theme.fg_muted),
        )),
        Submission::Submitting(_) => {
            Line::from(Span::styled("Planning route…", Style::default().fg(theme.info)))
        }
        Submission::Failed(msg) => {
            Line::from(Span::styled(format!("⚠ {msg}"), Style::default().fg(theme.error)))
        }
    }
}

fn draw_input(
    frame: &mut Frame,
    area: Rect,
    field: &TextField,
    placeholder: &str,
    focused: bool,
    theme: &Theme,
) {
    let border = if focused { theme.border_focused } else { theme.border };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text_style = Style::default().fg(theme.fg_primary);
    let line = if field.is_empty() && !focused {
        Line::from(Span::styled(placeholder.to_string(), Style::default().fg(theme.fg_muted)))
    } else if focused {
        build_line_with_cursor(&field.value, field.cursor, text_style, theme)
    } else {
        Line::from(Span::styled(field.value.clone(), text_style))
    };

    let skip = horizontal_skip(field.cursor, inner.width);
    frame.render_widget(Paragraph::new(line).scroll((0, skip)), inner);
}

/// Columns to hide on the left so the cursor stays visible
fn horizontal_skip(cursor: usize, width: u16) -> u16 {
    let width = usize::from(width);
    if width == 0 || cursor < width {
        0
    } else {
        u16::try_from(cursor + 1 - width).unwrap_or(u16::MAX)
    }
}

fn draw_button(frame: &mut Frame, area: Rect, glyph: &str, color: Color, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let label = Line::from(Span::styled(
        glyph.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .centered();
    frame.render_widget(Paragraph::new(label), inner);
}

/// Build a line with a visible cursor
fn build_line_with_cursor(
    text: &str,
    cursor_pos: usize,
    base_style: Style,
    theme: &Theme,
) -> Line<'static> {
    let chars: Vec<char> = text.chars().collect();
    let mut spans = Vec::new();

    if cursor_pos > 0 {
        let before: String = chars.iter().take(cursor_pos).collect();
        spans.push(Span::styled(before, base_style));
    }

    // Space when the cursor sits past the end
    let cursor_char = chars.get(cursor_pos).copied().unwrap_or(' ');
    let cursor_style = Style::default().fg(theme.bg_primary).bg(theme.cursor);
    spans.push(Span::styled(cursor_char.to_string(), cursor_style));

    if cursor_pos + 1 < chars.len() {
        let after: String = chars.iter().skip(cursor_pos + 1).collect();
        spans.push(Span::styled(after, base_style));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cursor_line_keeps_all_text() {
        let theme = Theme::default();
        let line = build_line_with_cursor("Bondi", 2, Style::default(), &theme);
        assert_eq!(line.to_string(), "Bondi");
        let at_end = build_line_with_cursor("Bondi", 5, Style::default(), &theme);
        assert_eq!(at_end.to_string(), "Bondi ");
    }

    #[test]
    fn skip_keeps_cursor_in_view() {
        assert_eq!(horizontal_skip(3, 10), 0);
        assert_eq!(horizontal_skip(10, 10), 1);
        assert_eq!(horizontal_skip(25, 10), 16);
        assert_eq!(horizontal_skip(5, 0), 0);
    }

    #[test]
    fn failed_submission_shows_error() {
        let line = status_line(&Submission::Failed("planner rejected".into()), &Theme::default());
        assert_eq!(line.to_string(), "⚠ planner rejected");
    }
}
