//! Clock, current weather and greeting

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::icons;
use crate::app::state::{AppState, WeatherView};
use crate::data::WeatherType;
use crate::theme::Theme;

/// Text shown in place of a temperature that could not be fetched
pub const FALLBACK_TEMPERATURE: &str = "--°C";

/// Spans describing the current weather
pub fn weather_spans(view: &WeatherView, theme: &Theme) -> Vec<Span<'static>> {
    let muted = Style::default().fg(theme.fg_muted);
    match view {
        WeatherView::Locating => vec![Span::styled("locating…", muted)],
        WeatherView::Fetching => vec![Span::styled("…°C", muted)],
        WeatherView::Ready(snapshot) => {
            let kind = WeatherType::from_condition(&snapshot.condition);
            let icon_style = kind
                .map(|k| Style::default().fg(theme.weather_color(k)))
                .unwrap_or(muted);
            let glyph = kind.map(|k| icons::glyph(k.icon())).unwrap_or("•");
            vec![
                Span::styled(glyph, icon_style),
                Span::raw(" "),
                Span::styled(
                    format!("{:.1}°C", snapshot.temperature_c),
                    Style::default().fg(theme.fg_primary),
                ),
                Span::styled(format!(" {}", snapshot.condition), muted),
            ]
        }
        WeatherView::Unavailable(_) => vec![
            Span::styled(FALLBACK_TEMPERATURE, muted),
            Span::styled(" weather unavailable", muted),
        ],
        WeatherView::LocationDenied(_) => vec![Span::styled(FALLBACK_TEMPERATURE, muted)],
    }
}

/// Clock followed by the weather
pub fn info_line(state: &AppState, theme: &Theme) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            state.clock.format(),
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  │  ", Style::default().fg(theme.border)),
    ];
    spans.extend(weather_spans(&state.weather, theme));
    Line::from(spans)
}

pub fn greeting(name: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(icons::glyph("hand-peace"), Style::default().fg(theme.accent_primary)),
        Span::raw(" "),
        Span::styled(format!("G'day, {name}!"), Style::default().fg(theme.fg_secondary)),
    ])
}

/// Draw the info line, optionally with the greeting beneath
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    theme: &Theme,
    alignment: Alignment,
    with_greeting: bool,
) {
    let mut lines = vec![info_line(state, theme)];
    if with_greeting {
        lines.push(greeting(&state.display_name, theme));
    }
    frame.render_widget(Paragraph::new(lines).alignment(alignment), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::clock::ClockReading;
    use crate::services::WeatherSnapshot;
    use pretty_assertions::assert_eq;

    fn text(spans: Vec<Span<'static>>) -> String {
        Line::from(spans).to_string()
    }

    #[test]
    fn ready_weather_shows_temperature_and_condition() {
        let view = WeatherView::Ready(WeatherSnapshot {
            condition: "Clouds".into(),
            temperature_c: 18.44,
        });
        assert_eq!(text(weather_spans(&view, &Theme::default())), "☁ 18.4°C Clouds");
    }

    #[test]
    fn unknown_condition_gets_bullet() {
        let view = WeatherView::Ready(WeatherSnapshot {
            condition: "Ash".into(),
            temperature_c: 3.0,
        });
        assert!(text(weather_spans(&view, &Theme::default())).starts_with("• 3.0°C"));
    }

    #[test]
    fn failures_use_fallback() {
        let theme = Theme::default();
        for view in [
            WeatherView::Unavailable("timeout".into()),
            WeatherView::LocationDenied("denied".into()),
        ] {
            assert!(text(weather_spans(&view, &theme)).starts_with(FALLBACK_TEMPERATURE));
        }
    }

    #[test]
    fn info_line_starts_with_clock() {
        let mut state = AppState::default();
        state.clock = ClockReading::new(13, 5, 0);
        assert!(info_line(&state, &Theme::default()).to_string().starts_with("1:05"));
    }

    #[test]
    fn greeting_uses_name() {
        assert!(greeting("Sam", &Theme::default()).to_string().ends_with("G'day, Sam!"));
    }
}
