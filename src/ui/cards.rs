//! Card builders for forecast days, past trips, and attractions

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::icons;
use super::layout::{center_text, truncate};
use super::section::Card;
use crate::data::{Attraction, ForecastDay, Trip};
use crate::theme::Theme;

pub const FORECAST_INNER_WIDTH: u16 = 9;
pub const TRIP_INNER_WIDTH: u16 = 30;
pub const ATTRACTION_INNER_WIDTH: u16 = 30;

/// Description lines shown per attraction
const ATTRACTION_LINES: usize = 3;

/// Rendered height of each card kind, borders included
pub const FORECAST_HEIGHT: u16 = 5;
pub const TRIP_HEIGHT: u16 = 4;
pub const ATTRACTION_HEIGHT: u16 = ATTRACTION_LINES as u16 + 3;

/// Temperature, icon, and day name for one forecast day
pub fn forecast_card(day: &ForecastDay, theme: &Theme) -> Card {
    let width = FORECAST_INNER_WIDTH;
    let icon_style = Style::default().fg(theme.weather_color(day.weather));
    let content = vec![
        Line::from(Span::styled(
            center_text(&format!("{}°F", day.temperature), width),
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            center_text(&format!("{} {}", icons::glyph(day.weather.icon()), day.weather.label()), width),
            icon_style,
        )),
        Line::from(Span::styled(
            center_text(day.name, width),
            Style::default().fg(theme.fg_secondary),
        )),
    ];
    Card::boxed(content, width, Style::default().fg(theme.border))
}

pub fn forecast_cards(days: &[ForecastDay], theme: &Theme) -> Vec<Card> {
    days.iter().map(|day| forecast_card(day, theme)).collect()
}

/// Title and route of a past trip
pub fn trip_card(trip: &Trip, theme: &Theme) -> Card {
    let width = usize::from(TRIP_INNER_WIDTH);
    let content = vec![
        Line::from(Span::styled(
            truncate(trip.title, width),
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate(trip.description, width),
            Style::default().fg(theme.fg_muted),
        )),
    ];
    Card::boxed(content, TRIP_INNER_WIDTH, Style::default().fg(theme.border))
}

pub fn trip_cards(trips: &[Trip], theme: &Theme) -> Vec<Card> {
    trips.iter().map(|trip| trip_card(trip, theme)).collect()
}

/// Title with its icon, followed by a wrapped description
pub fn attraction_card(attraction: &Attraction, theme: &Theme) -> Card {
    let width = usize::from(ATTRACTION_INNER_WIDTH);
    let glyph = icons::glyph(attraction.icon);
    let title = truncate(attraction.title, width.saturating_sub(2));

    let mut content = vec![Line::from(vec![
        Span::styled(glyph, Style::default().fg(theme.accent_secondary)),
        Span::raw(" "),
        Span::styled(title, Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD)),
    ])];

    let body = description_lines(attraction.description, width, ATTRACTION_LINES);
    let body_style = Style::default().fg(theme.fg_secondary);
    content.extend(body.into_iter().map(|l| Line::from(Span::styled(l, body_style))));

    Card::boxed(content, ATTRACTION_INNER_WIDTH, Style::default().fg(theme.border))
}

pub fn attraction_cards(attractions: &[Attraction], theme: &Theme) -> Vec<Card> {
    attractions.iter().map(|a| attraction_card(a, theme)).collect()
}

/// Wrap `text` to `width`, keeping at most `max` lines and marking overflow
fn description_lines(text: &str, width: usize, max: usize) -> Vec<String> {
    let wrapped = textwrap::wrap(text, width);
    let overflow = wrapped.len() > max;
    let mut lines: Vec<String> = wrapped.into_iter().take(max).map(|c| c.into_owned()).collect();
    if overflow {
        if let Some(last) = lines.last_mut() {
            let mut cut = truncate(last, width.saturating_sub(1));
            if !cut.ends_with('…') {
                cut.push('…');
            }
            *last = cut;
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{WeatherType, attractions, past_trips};
    use pretty_assertions::assert_eq;

    #[test]
    fn forecast_card_shows_temperature_and_day() {
        let day = ForecastDay { id: 1, name: "Mon", temperature: 14, weather: WeatherType::Sunny };
        let card = forecast_card(&day, &Theme::default());
        assert_eq!(card.height(), FORECAST_HEIGHT);
        let text: Vec<String> = card.lines.iter().map(|l| l.to_string()).collect();
        assert!(text[1].contains("14°F"));
        assert!(text[2].contains("☼ Sunny"));
        assert!(text[3].contains("Mon"));
    }

    #[test]
    fn every_card_matches_its_declared_height() {
        let theme = Theme::default();
        for trip in past_trips() {
            assert_eq!(trip_card(trip, &theme).height(), TRIP_HEIGHT);
        }
        for attraction in attractions() {
            assert!(attraction_card(attraction, &theme).height() <= ATTRACTION_HEIGHT);
        }
    }

    #[test]
    fn long_descriptions_are_cut() {
        let text = "one two three four five six seven eight nine ten";
        let lines = description_lines(text, 10, 2);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with('…'));
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
    }

    #[test]
    fn short_descriptions_are_untouched() {
        assert_eq!(description_lines("Bondi", 10, 3), vec!["Bondi".to_string()]);
    }
}
