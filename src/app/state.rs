//! Application state definitions
//!
//! `AppState` is owned by the [`Store`](super::store::Store) and handed to the
//! views as a shared reference. Only the reducer mutates it.

use crate::app::clock::ClockReading;
use crate::app::form::QuickNavState;
use crate::app::scroll::DragScroll;
use crate::config::SubmitPolicy;
use crate::data::ForecastDay;
use crate::services::{PlanRequest, WeatherSnapshot};

/// Sign-in status shared by every view of the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UserStatus {
    LoggedIn,
    /// Defined for an intermediate sign-in step; no control transitions into it
    LoggingIn,
    #[default]
    LoggedOut,
}

impl UserStatus {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::LoggedIn => "Logged In",
            Self::LoggingIn => "Logging In",
            Self::LoggedOut => "Logged Out",
        }
    }

    /// Presentation class for the root view: the label lowercased, whitespace runs as hyphens
    pub fn presentation_class(&self) -> String {
        self.label().split_whitespace().collect::<Vec<_>>().join("-").to_lowercase()
    }
}

/// Which top-level view was mounted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mount {
    /// The full dashboard
    #[default]
    Dashboard,
    /// The trip planner form on its own
    Planner,
}

/// Which screen is currently displayed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Dashboard,
    /// Where a trip plan submission lands
    Directions(PlanRequest),
}

/// Horizontal sections that host a drag-scroll container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Forecast,
    Trips,
    Attractions,
}

/// Which element receives keyboard input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Destination,
    Origin,
    Forecast,
    Attractions,
}

impl Focus {
    /// Next focusable element, skipping the origin field when it is hidden
    pub fn next(self, origin_visible: bool, mount: Mount) -> Self {
        Self::cycle(self, origin_visible, mount, 1)
    }

    /// Previous focusable element
    pub fn prev(self, origin_visible: bool, mount: Mount) -> Self {
        Self::cycle(self, origin_visible, mount, -1)
    }

    fn cycle(self, origin_visible: bool, mount: Mount, step: isize) -> Self {
        let mut order = vec![Self::Destination];
        if origin_visible {
            order.push(Self::Origin);
        }
        if mount == Mount::Dashboard {
            order.extend([Self::Forecast, Self::Attractions]);
        }

        let len = order.len() as isize;
        let current = order.iter().position(|f| *f == self).unwrap_or(0) as isize;
        order[(current + step).rem_euclid(len) as usize]
    }

    /// The scrollable section this focus refers to, if any
    pub fn section(self) -> Option<SectionId> {
        match self {
            Self::Forecast => Some(SectionId::Forecast),
            Self::Attractions => Some(SectionId::Attractions),
            Self::Destination | Self::Origin => None,
        }
    }
}

/// What the weather snapshot currently knows
#[derive(Debug, Clone, Default, PartialEq)]
pub enum WeatherView {
    /// Waiting for a position fix
    #[default]
    Locating,
    /// Position known, request in flight
    Fetching,
    Ready(WeatherSnapshot),
    /// The provider request failed; a neutral fallback is shown
    Unavailable(String),
    /// No position available; the feature stays off for the session
    LocationDenied(String),
}

impl WeatherView {
    /// Whether a request for this snapshot is outstanding
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Locating | Self::Fetching)
    }
}

/// Full application state
#[derive(Debug)]
pub struct AppState {
    /// Which top-level view this process shows
    pub mount: Mount,

    /// Current screen
    pub screen: Screen,

    /// Shared sign-in status
    pub status: UserStatus,

    /// Most recent clock sample
    pub clock: ClockReading,

    /// Weather snapshot
    pub weather: WeatherView,

    /// User-facing alert, dismissed explicitly
    pub notice: Option<String>,

    /// Name used in the greeting
    pub display_name: String,

    /// Week forecast, generated once per mount
    pub forecast: Vec<ForecastDay>,

    /// Trip planner form
    pub quick_nav: QuickNavState,

    /// What a form submission waits for before navigating
    pub submit_policy: SubmitPolicy,

    /// Drag-scroll state of the forecast strip
    pub forecast_scroll: DragScroll,

    /// Drag-scroll state of the attractions strip
    pub attractions_scroll: DragScroll,

    /// Keyboard focus
    pub focus: Focus,

    /// Spinner animation frame
    pub spinner_frame: usize,
}

impl AppState {
    pub fn new(mount: Mount, display_name: impl Into<String>, forecast: Vec<ForecastDay>) -> Self {
        Self {
            mount,
            screen: Screen::default(),
            status: UserStatus::default(),
            clock: ClockReading::default(),
            weather: WeatherView::default(),
            notice: None,
            display_name: display_name.into(),
            forecast,
            quick_nav: QuickNavState::default(),
            submit_policy: SubmitPolicy::default(),
            forecast_scroll: DragScroll::default(),
            attractions_scroll: DragScroll::default(),
            focus: Focus::default(),
            spinner_frame: 0,
        }
    }

    /// Use a different submission policy
    pub fn with_submit_policy(mut self, policy: SubmitPolicy) -> Self {
        self.submit_policy = policy;
        self
    }

    /// Drag-scroll state of a section; the trips list is not scrollable
    pub fn scroll(&self, section: SectionId) -> Option<&DragScroll> {
        match section {
            SectionId::Forecast => Some(&self.forecast_scroll),
            SectionId::Attractions => Some(&self.attractions_scroll),
            SectionId::Trips => None,
        }
    }

    /// Mutable drag-scroll state of a section
    pub fn scroll_mut(&mut self, section: SectionId) -> Option<&mut DragScroll> {
        match section {
            SectionId::Forecast => Some(&mut self.forecast_scroll),
            SectionId::Attractions => Some(&mut self.attractions_scroll),
            SectionId::Trips => None,
        }
    }

    /// The section currently being dragged, if any
    pub fn grabbed_section(&self) -> Option<SectionId> {
        [SectionId::Forecast, SectionId::Attractions]
            .into_iter()
            .find(|id| self.scroll(*id).is_some_and(DragScroll::is_grabbing))
    }

    /// Whether the loading spinner should be shown
    pub fn is_busy(&self) -> bool {
        self.status == UserStatus::LoggingIn
            || (self.mount == Mount::Dashboard && self.weather.is_pending())
            || self.quick_nav.is_submitting()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Mount::Dashboard, "Guest", Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn initial_status_is_logged_out() {
        assert_eq!(AppState::default().status, UserStatus::LoggedOut);
    }

    #[test]
    fn presentation_class_is_hyphenated_lowercase() {
        assert_eq!(UserStatus::LoggedOut.presentation_class(), "logged-out");
        assert_eq!(UserStatus::LoggedIn.presentation_class(), "logged-in");
        assert_eq!(UserStatus::LoggingIn.presentation_class(), "logging-in");
    }

    #[test]
    fn focus_skips_hidden_origin() {
        let next = Focus::Destination.next(false, Mount::Dashboard);
        assert_eq!(next, Focus::Forecast);

        let next = Focus::Destination.next(true, Mount::Dashboard);
        assert_eq!(next, Focus::Origin);
    }

    #[test]
    fn focus_wraps_around() {
        assert_eq!(Focus::Attractions.next(false, Mount::Dashboard), Focus::Destination);
        assert_eq!(Focus::Destination.prev(false, Mount::Dashboard), Focus::Attractions);
    }

    #[test]
    fn planner_mount_only_cycles_form_fields() {
        assert_eq!(Focus::Destination.next(true, Mount::Planner), Focus::Origin);
        assert_eq!(Focus::Origin.next(true, Mount::Planner), Focus::Destination);
        assert_eq!(Focus::Destination.next(false, Mount::Planner), Focus::Destination);
    }

    #[test]
    fn trips_section_has_no_scroll_state() {
        let state = AppState::default();
        assert!(state.scroll(SectionId::Trips).is_none());
        assert!(state.scroll(SectionId::Forecast).is_some());
    }

    #[test]
    fn busy_while_weather_is_pending() {
        let mut state = AppState::default();
        assert!(state.is_busy());

        state.weather = WeatherView::Unavailable("offline".into());
        assert!(!state.is_busy());

        state.status = UserStatus::LoggingIn;
        assert!(state.is_busy());
    }

    #[test]
    fn planner_mount_ignores_weather_for_busy() {
        let state = AppState::new(Mount::Planner, "Guest", Vec::new());
        assert!(!state.is_busy());
    }
}
