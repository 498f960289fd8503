//! Titled menu sections: a horizontally scrolling card strip, or a static
//! block of cards wrapped into rows

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::icons;
use super::layout::{HitMap, Target, pad_line};
use crate::app::scroll::{DragScroll, Viewport};
use crate::app::state::SectionId;
use crate::theme::Theme;

/// Columns between neighbouring cards
pub const CARD_GAP: u16 = 2;

/// A pre-rendered card of fixed width
#[derive(Debug, Clone)]
pub struct Card {
    pub lines: Vec<Line<'static>>,
    pub width: u16,
}

impl Card {
    /// Wrap `content` in a rounded border `inner_width` columns wide
    pub fn boxed(content: Vec<Line<'static>>, inner_width: u16, border: Style) -> Self {
        let bar = "─".repeat(usize::from(inner_width));
        let mut lines = Vec::with_capacity(content.len() + 2);
        lines.push(Line::from(Span::styled(format!("╭{bar}╮"), border)));
        for line in content {
            let mut spans = vec![Span::styled("│", border)];
            spans.extend(pad_line(line, inner_width).spans);
            spans.push(Span::styled("│", border));
            lines.push(Line::from(spans));
        }
        lines.push(Line::from(Span::styled(format!("╰{bar}╯"), border)));
        Self { lines, width: inner_width + 2 }
    }

    pub fn height(&self) -> u16 {
        self.lines.len() as u16
    }
}

/// Lay cards side by side into one wide block of lines
///
/// Returns the lines and the total content width.
pub fn strip(cards: &[Card], gap: u16) -> (Vec<Line<'static>>, u16) {
    let height = cards.iter().map(|c| c.lines.len()).max().unwrap_or(0);
    let mut rows: Vec<Vec<Span<'static>>> = vec![Vec::new(); height];

    for (i, card) in cards.iter().enumerate() {
        for (row, spans) in rows.iter_mut().enumerate() {
            if i > 0 && gap > 0 {
                spans.push(Span::raw(" ".repeat(usize::from(gap))));
            }
            let used = match card.lines.get(row) {
                Some(line) => {
                    spans.extend(line.spans.iter().cloned());
                    line.width()
                }
                None => 0,
            };
            let pad = usize::from(card.width).saturating_sub(used);
            if pad > 0 {
                spans.push(Span::raw(" ".repeat(pad)));
            }
        }
    }

    let gaps = gap.saturating_mul(cards.len().saturating_sub(1) as u16);
    let width = cards.iter().fold(gaps, |acc, c| acc.saturating_add(c.width));
    (rows.into_iter().map(Line::from).collect(), width)
}

/// How many cards `card_width` wide fit side by side in `width` columns
///
/// Always at least one, so a card wider than the area still gets a row.
pub fn cards_per_row(card_width: u16, width: u16, gap: u16) -> usize {
    let per_row = width.saturating_add(gap) / card_width.saturating_add(gap).max(1);
    usize::from(per_row.max(1))
}

/// Rows of cards needed to show `count` cards in `width` columns
pub fn wrapped_rows(count: usize, card_width: u16, width: u16, gap: u16) -> u16 {
    count.div_ceil(cards_per_row(card_width, width, gap)) as u16
}

/// Stack strips of cards so no row is wider than `width`
pub fn flow(cards: &[Card], width: u16, gap: u16) -> Vec<Line<'static>> {
    let card_width = cards.iter().map(|c| c.width).max().unwrap_or(0);
    cards
        .chunks(cards_per_row(card_width, width, gap))
        .flat_map(|row| strip(row, gap).0)
        .collect()
}

/// Section header plus content
pub struct SectionProps<'a> {
    pub id: SectionId,
    pub icon: &'static str,
    pub title: &'a str,
    /// Drag-scroll state; `None` wraps the cards into rows
    pub scroll: Option<&'a DragScroll>,
    pub focused: bool,
}

/// Total rows needed for a section whose cards are `card_height` tall
pub fn height_for(card_height: u16) -> u16 {
    card_height + 1
}

/// Total rows needed for a static section of `count` wrapped cards
pub fn wrapped_height_for(
    count: usize,
    card_width: u16,
    card_height: u16,
    width: u16,
) -> u16 {
    height_for(card_height.saturating_mul(wrapped_rows(count, card_width, width, CARD_GAP)))
}

/// Draw a section and register its content region
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    props: &SectionProps<'_>,
    cards: &[Card],
    theme: &Theme,
    hits: &mut HitMap,
) {
    let [title_area, content_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    let title_style = if props.focused {
        Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD)
    };
    let mut title = vec![
        Span::styled(icons::glyph(props.icon), Style::default().fg(theme.accent_secondary)),
        Span::raw(" "),
        Span::styled(props.title.to_string(), title_style),
    ];
    if let Some(scroll) = props.scroll {
        let hint = if scroll.is_grabbing() {
            "  ◂ grabbing ▸"
        } else if scroll.max_scroll() > 0 {
            "  ◂ drag ▸"
        } else {
            ""
        };
        title.push(Span::styled(hint, Style::default().fg(theme.fg_muted)));
    }
    frame.render_widget(Paragraph::new(Line::from(title)), title_area);

    hits.register(content_area, Target::Section(props.id));
    match props.scroll {
        Some(scroll) => {
            let (lines, content_width) = strip(cards, CARD_GAP);
            frame.render_widget(Paragraph::new(lines).scroll((0, scroll.offset())), content_area);
            hits.measure(props.id, Viewport::new(content_width, content_area.width));
        }
        None => {
            let lines = flow(cards, content_area.width, CARD_GAP);
            frame.render_widget(Paragraph::new(lines), content_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn card(text: &str, inner: u16) -> Card {
        Card::boxed(vec![Line::from(text.to_string())], inner, Style::default())
    }

    #[test]
    fn boxed_card_has_border() {
        let c = card("hi", 4);
        assert_eq!(c.width, 6);
        assert_eq!(c.height(), 3);
        assert_eq!(c.lines[0].to_string(), "╭────╮");
        assert_eq!(c.lines[1].to_string(), "│hi  │");
        assert_eq!(c.lines[2].to_string(), "╰────╯");
    }

    #[test]
    fn strip_joins_cards_with_gap() {
        let (lines, width) = strip(&[card("a", 1), card("b", 1)], 2);
        assert_eq!(width, 8);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].to_string(), "│a│  │b│");
    }

    #[test]
    fn strip_pads_shorter_cards() {
        let tall = Card::boxed(
            vec![Line::from("x"), Line::from("y")],
            1,
            Style::default(),
        );
        let (lines, _) = strip(&[tall, card("b", 1)], 1);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3].to_string(), "╰─╯    ");
    }

    #[test]
    fn flow_wraps_cards_that_do_not_fit() {
        let cards = [card("a", 1), card("b", 1), card("c", 1)];
        // Two 3-wide cards and a gap need 8 columns
        let lines = flow(&cards, 9, 2);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1].to_string(), "│a│  │b│");
        assert_eq!(lines[4].to_string(), "│c│");
    }

    #[test]
    fn flow_keeps_one_card_per_row_when_narrow() {
        let lines = flow(&[card("wide", 8), card("b", 1)], 4, 2);
        assert_eq!(lines.len(), 6);
        assert_eq!(cards_per_row(10, 4, 2), 1);
    }

    #[test]
    fn wrapped_height_counts_every_row() {
        // Four 32-wide trip cards in 96 columns: two per row
        assert_eq!(wrapped_rows(4, 32, 96, CARD_GAP), 2);
        assert_eq!(wrapped_height_for(4, 32, 4, 96), 9);
        assert_eq!(wrapped_rows(4, 32, 140, CARD_GAP), 1);
        assert_eq!(wrapped_rows(0, 32, 96, CARD_GAP), 0);
    }

    #[test]
    fn empty_strip() {
        let (lines, width) = strip(&[], 2);
        assert!(lines.is_empty());
        assert_eq!(width, 0);
    }
}
