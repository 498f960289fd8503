//! Signed-in dashboard: info header, trip planner and content sections

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
};

use super::cards;
use super::info;
use super::layout::HitMap;
use super::quick_nav;
use super::section::{self, SectionProps};
use super::status_button::{self, SIGN_OUT};
use crate::app::state::{AppState, Focus, SectionId};
use crate::data;
use crate::theme::Theme;

pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme, hits: &mut HitMap) {
    let area = area.inner(Margin { horizontal: 2, vertical: 0 });
    let trips = data::past_trips();
    let trips_height = section::wrapped_height_for(
        trips.len(),
        cards::TRIP_INNER_WIDTH + 2,
        cards::TRIP_HEIGHT,
        area.width,
    );
    let [header, form, forecast, trips_area, attractions] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(quick_nav::HEIGHT),
        Constraint::Length(section::height_for(cards::FORECAST_HEIGHT)),
        Constraint::Length(trips_height),
        Constraint::Min(section::height_for(cards::ATTRACTION_HEIGHT)),
    ])
    .areas(area);

    let [info_area, button_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(SIGN_OUT.width())])
            .areas(header);
    info::draw(frame, info_area, state, theme, Alignment::Left, true);
    status_button::draw(frame, button_area, &SIGN_OUT, state.status, theme, hits);

    quick_nav::draw(frame, form, state, theme, hits);

    section::draw(
        frame,
        forecast,
        &SectionProps {
            id: SectionId::Forecast,
            icon: "sun",
            title: "How's it look out there?",
            scroll: Some(&state.forecast_scroll),
            focused: state.focus == Focus::Forecast,
        },
        &cards::forecast_cards(&state.forecast, theme),
        theme,
        hits,
    );

    section::draw(
        frame,
        trips_area,
        &SectionProps {
            id: SectionId::Trips,
            icon: "history",
            title: "Your past trips",
            scroll: None,
            focused: false,
        },
        &cards::trip_cards(trips, theme),
        theme,
        hits,
    );

    section::draw(
        frame,
        attractions,
        &SectionProps {
            id: SectionId::Attractions,
            icon: "camera",
            title: "Popular spots around you",
            scroll: Some(&state.attractions_scroll),
            focused: state.focus == Focus::Attractions,
        },
        &cards::attraction_cards(data::attractions(), theme),
        theme,
        hits,
    );
}
