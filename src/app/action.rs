//! Actions and effects
//!
//! Everything that can change [`AppState`](super::state::AppState) is an
//! [`Action`]. Async work requested by the reducer is an [`Effect`]; its
//! outcome comes back as a `*Did*` action.

use crate::app::clock::ClockReading;
use crate::app::form::Field;
use crate::app::scroll::Viewport;
use crate::app::state::{SectionId, UserStatus};
use crate::services::{Coordinates, PlanRequest, WeatherSnapshot};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // ===== Status =====
    /// A status button targeting this status was activated
    StatusButtonPressed(UserStatus),
    /// The lock-screen background was clicked
    BackgroundClicked,

    // ===== Clock =====
    ClockTick(ClockReading),

    // ===== Weather =====
    /// Mount the weather snapshot: locate, then fetch once
    WeatherMount,
    LocationDidResolve(Coordinates),
    LocationDidFail(String),
    WeatherDidLoad(WeatherSnapshot),
    WeatherDidError(String),
    NoticeDismiss,

    // ===== Scroll =====
    ScrollGrab { section: SectionId, x: u16 },
    ScrollDrag { section: SectionId, x: u16 },
    /// Pointer released, or left the section
    ScrollRelease { section: SectionId },
    ScrollBy { section: SectionId, delta: i32 },
    ViewportMeasured { section: SectionId, viewport: Viewport },

    // ===== Form =====
    FormInsert(char),
    FormBackspace,
    FormDelete,
    FormCursorLeft,
    FormCursorRight,
    FormCursorHome,
    FormCursorEnd,
    FormToggleOrigin,
    FormFocus(Field),
    FormSubmit,
    PlanDidSubmit,
    PlanDidFail(String),

    // ===== Navigation =====
    FocusNext,
    FocusPrev,
    /// Leave the directions screen
    NavigateBack,

    // ===== Global =====
    /// Spinner animation tick
    Tick,
    Quit,
}

/// Async work requested by the reducer
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ResolveLocation,
    FetchWeather(Coordinates),
    SubmitPlan(PlanRequest),
}

impl Action {
    /// Short form for logs
    pub fn summary(&self) -> String {
        match self {
            Action::WeatherDidLoad(snapshot) => {
                format!(
                    "WeatherDidLoad {{ {:.1}°C, {} }}",
                    snapshot.temperature_c, snapshot.condition
                )
            }
            Action::WeatherDidError(e) | Action::PlanDidFail(e) | Action::LocationDidFail(e) => {
                let msg = if e.chars().count() > 40 {
                    format!("{}...", e.chars().take(37).collect::<String>())
                } else {
                    e.clone()
                };
                let name = format!("{:?}", self);
                let name = name.split('(').next().unwrap_or_default().to_string();
                format!("{name}({msg:?})")
            }
            // Keystrokes stay out of the log
            Action::FormInsert(_) => "FormInsert".to_string(),
            _ => format!("{:?}", self),
        }
    }
}
