//! Reducer: (state, action) -> state change + effects
//!
//! The only place `AppState` is written. No I/O happens here; async work is
//! returned as [`Effect`]s for the app to run.

use crate::app::action::{Action, Effect};
use crate::app::form::{Field, Submission};
use crate::app::state::{AppState, Focus, Screen, UserStatus, WeatherView};
use crate::config::SubmitPolicy;

/// Outcome of a single dispatch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DispatchResult {
    /// Whether the state changed and the view should be redrawn
    pub changed: bool,
    /// Async work to start
    pub effects: Vec<Effect>,
}

impl DispatchResult {
    pub fn unchanged() -> Self {
        Self::default()
    }

    pub fn changed() -> Self {
        Self { changed: true, effects: Vec::new() }
    }

    pub fn changed_with(effects: Vec<Effect>) -> Self {
        Self { changed: true, effects }
    }

    fn from_changed(changed: bool) -> Self {
        Self { changed, effects: Vec::new() }
    }
}

/// Apply `action` to `state`
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult {
    match action {
        // ===== Status =====
        Action::StatusButtonPressed(target) => set_status(state, target),

        Action::BackgroundClicked => {
            if state.status == UserStatus::LoggedOut {
                set_status(state, UserStatus::LoggedIn)
            } else {
                DispatchResult::unchanged()
            }
        }

        // ===== Clock =====
        Action::ClockTick(reading) => {
            let changed = state.clock != reading;
            state.clock = reading;
            DispatchResult::from_changed(changed)
        }

        // ===== Weather =====
        Action::WeatherMount => {
            state.weather = WeatherView::Locating;
            DispatchResult::changed_with(vec![Effect::ResolveLocation])
        }

        Action::LocationDidResolve(coordinates) => {
            if state.weather != WeatherView::Locating {
                return DispatchResult::unchanged();
            }
            state.weather = WeatherView::Fetching;
            DispatchResult::changed_with(vec![Effect::FetchWeather(coordinates)])
        }

        Action::LocationDidFail(msg) => {
            state.weather = WeatherView::LocationDenied(msg.clone());
            state.notice = Some(msg);
            DispatchResult::changed()
        }

        Action::WeatherDidLoad(snapshot) => {
            state.weather = WeatherView::Ready(snapshot);
            DispatchResult::changed()
        }

        Action::WeatherDidError(msg) => {
            state.weather = WeatherView::Unavailable(msg);
            DispatchResult::changed()
        }

        Action::NoticeDismiss => DispatchResult::from_changed(state.notice.take().is_some()),

        // ===== Scroll =====
        Action::ScrollGrab { section, x } => match state.scroll_mut(section) {
            Some(scroll) => {
                scroll.grab(x);
                DispatchResult::changed()
            }
            None => DispatchResult::unchanged(),
        },

        Action::ScrollDrag { section, x } => {
            DispatchResult::from_changed(state.scroll_mut(section).is_some_and(|s| s.drag(x)))
        }

        Action::ScrollRelease { section } => {
            DispatchResult::from_changed(state.scroll_mut(section).is_some_and(|s| s.release()))
        }

        Action::ScrollBy { section, delta } => DispatchResult::from_changed(
            state.scroll_mut(section).is_some_and(|s| s.scroll_by(delta)),
        ),

        Action::ViewportMeasured { section, viewport } => DispatchResult::from_changed(
            state.scroll_mut(section).is_some_and(|s| s.measure(viewport)),
        ),

        // ===== Form =====
        Action::FormInsert(c) => edit_focused(state, |field| {
            field.insert_char(c);
            true
        }),
        Action::FormBackspace => edit_focused(state, |field| field.delete_char()),
        Action::FormDelete => edit_focused(state, |field| field.delete_char_forward()),
        Action::FormCursorLeft => edit_focused(state, |field| field.move_left()),
        Action::FormCursorRight => edit_focused(state, |field| field.move_right()),
        Action::FormCursorHome => edit_focused(state, |field| field.move_start()),
        Action::FormCursorEnd => edit_focused(state, |field| field.move_end()),

        Action::FormToggleOrigin => {
            state.quick_nav.toggle_origin();
            if !state.quick_nav.origin_visible && state.focus == Focus::Origin {
                state.focus = Focus::Destination;
            }
            DispatchResult::changed()
        }

        Action::FormFocus(field) => {
            let focus = match field {
                Field::Destination => Focus::Destination,
                Field::Origin if state.quick_nav.origin_visible => Focus::Origin,
                Field::Origin => return DispatchResult::unchanged(),
            };
            let changed = state.focus != focus;
            state.focus = focus;
            DispatchResult::from_changed(changed)
        }

        Action::FormSubmit => submit(state),

        Action::PlanDidSubmit => {
            if state.submit_policy == SubmitPolicy::FireAndForget {
                return DispatchResult::unchanged();
            }
            match std::mem::take(&mut state.quick_nav.submission) {
                Submission::Submitting(request) => {
                    state.screen = Screen::Directions(request);
                    DispatchResult::changed()
                }
                other => {
                    state.quick_nav.submission = other;
                    DispatchResult::unchanged()
                }
            }
        }

        Action::PlanDidFail(msg) => {
            if state.submit_policy == SubmitPolicy::FireAndForget
                || !state.quick_nav.is_submitting()
            {
                return DispatchResult::unchanged();
            }
            state.quick_nav.submission = Submission::Failed(msg);
            DispatchResult::changed()
        }

        // ===== Navigation =====
        Action::FocusNext => {
            state.focus = state.focus.next(state.quick_nav.origin_visible, state.mount);
            DispatchResult::changed()
        }

        Action::FocusPrev => {
            state.focus = state.focus.prev(state.quick_nav.origin_visible, state.mount);
            DispatchResult::changed()
        }

        Action::NavigateBack => {
            if state.screen == Screen::Dashboard {
                return DispatchResult::unchanged();
            }
            state.screen = Screen::Dashboard;
            DispatchResult::changed()
        }

        // ===== Global =====
        Action::Tick => {
            state.spinner_frame = state.spinner_frame.wrapping_add(1);
            DispatchResult::from_changed(state.is_busy())
        }

        // Handled by the event loop
        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Set the shared status; a no-op when it already holds `target`
fn set_status(state: &mut AppState, target: UserStatus) -> DispatchResult {
    if state.status == target {
        return DispatchResult::unchanged();
    }
    tracing::info!("Status {} -> {}", state.status.label(), target.label());
    state.status = target;
    DispatchResult::changed()
}

/// Apply an edit to the focused text field, if a field has focus
fn edit_focused(
    state: &mut AppState,
    edit: impl FnOnce(&mut crate::app::form::TextField) -> bool,
) -> DispatchResult {
    let field = match state.focus {
        Focus::Destination => Field::Destination,
        Focus::Origin if state.quick_nav.origin_visible => Field::Origin,
        _ => return DispatchResult::unchanged(),
    };
    DispatchResult::from_changed(edit(state.quick_nav.field_mut(field)))
}

fn submit(state: &mut AppState) -> DispatchResult {
    if state.quick_nav.is_submitting() {
        return DispatchResult::unchanged();
    }
    let request = state.quick_nav.request();

    match state.submit_policy {
        SubmitPolicy::AwaitConfirmation => {
            state.quick_nav.submission = Submission::Submitting(request.clone());
        }
        SubmitPolicy::FireAndForget => {
            state.quick_nav.submission = Submission::Idle;
            state.screen = Screen::Directions(request.clone());
        }
    }
    DispatchResult::changed_with(vec![Effect::SubmitPlan(request)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::form::TextField;
    use crate::app::scroll::Viewport;
    use crate::app::state::{Mount, SectionId};
    use crate::services::{Coordinates, PlanRequest, WeatherSnapshot};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn status() -> impl Strategy<Value = UserStatus> {
        prop_oneof![
            Just(UserStatus::LoggedIn),
            Just(UserStatus::LoggingIn),
            Just(UserStatus::LoggedOut),
        ]
    }

    proptest! {
        #[test]
        fn status_button_sets_target_unless_current(current in status(), target in status()) {
            let mut state = AppState { status: current, ..Default::default() };
            let result = reducer(&mut state, Action::StatusButtonPressed(target));
            prop_assert_eq!(state.status, target);
            prop_assert_eq!(result.changed, current != target);
        }
    }

    #[test]
    fn background_signs_in_only_when_logged_out() {
        let mut state = AppState::default();
        assert!(reducer(&mut state, Action::BackgroundClicked).changed);
        assert_eq!(state.status, UserStatus::LoggedIn);

        assert!(!reducer(&mut state, Action::BackgroundClicked).changed);

        state.status = UserStatus::LoggingIn;
        assert!(!reducer(&mut state, Action::BackgroundClicked).changed);
        assert_eq!(state.status, UserStatus::LoggingIn);
    }

    #[test]
    fn clock_tick_only_changes_on_new_reading() {
        let mut state = AppState::default();
        let reading = crate::app::clock::ClockReading::new(7, 5, 1);
        assert!(reducer(&mut state, Action::ClockTick(reading)).changed);
        assert!(!reducer(&mut state, Action::ClockTick(reading)).changed);
        assert_eq!(state.clock.format(), "7:05");
    }

    #[test]
    fn weather_mount_locates_then_fetches_once() {
        let mut state = AppState::default();
        let result = reducer(&mut state, Action::WeatherMount);
        assert_eq!(result.effects, vec![Effect::ResolveLocation]);

        let here = Coordinates { latitude: -33.9, longitude: 151.2 };
        let result = reducer(&mut state, Action::LocationDidResolve(here));
        assert_eq!(result.effects, vec![Effect::FetchWeather(here)]);
        assert_eq!(state.weather, WeatherView::Fetching);

        // A second fix does not trigger another request
        let result = reducer(&mut state, Action::LocationDidResolve(here));
        assert!(result.effects.is_empty());
    }

    #[test]
    fn location_failure_raises_notice() {
        let mut state = AppState::default();
        reducer(&mut state, Action::WeatherMount);
        reducer(&mut state, Action::LocationDidFail("Geolocation is not supported".into()));

        assert_eq!(state.notice.as_deref(), Some("Geolocation is not supported"));
        assert!(matches!(state.weather, WeatherView::LocationDenied(_)));

        assert!(reducer(&mut state, Action::NoticeDismiss).changed);
        assert!(state.notice.is_none());
        assert!(!reducer(&mut state, Action::NoticeDismiss).changed);
    }

    #[test]
    fn weather_error_is_explicit_state() {
        let mut state = AppState::default();
        reducer(&mut state, Action::WeatherDidError("timeout".into()));
        assert_eq!(state.weather, WeatherView::Unavailable("timeout".into()));
        assert!(!state.is_busy());
    }

    #[test]
    fn weather_load_is_ready() {
        let mut state = AppState::default();
        let snapshot = WeatherSnapshot { condition: "Clear".into(), temperature_c: 21.0 };
        reducer(&mut state, Action::WeatherDidLoad(snapshot.clone()));
        assert_eq!(state.weather, WeatherView::Ready(snapshot));
    }

    #[test]
    fn drag_scroll_through_actions() {
        let mut state = AppState::default();
        let section = SectionId::Forecast;
        reducer(
            &mut state,
            Action::ViewportMeasured { section, viewport: Viewport::new(80, 30) },
        );
        reducer(&mut state, Action::ScrollGrab { section, x: 40 });
        assert_eq!(state.grabbed_section(), Some(section));

        assert!(reducer(&mut state, Action::ScrollDrag { section, x: 30 }).changed);
        assert_eq!(state.forecast_scroll.offset(), 10);

        assert!(reducer(&mut state, Action::ScrollRelease { section }).changed);
        assert!(!reducer(&mut state, Action::ScrollRelease { section }).changed);
        assert_eq!(state.grabbed_section(), None);
    }

    #[test]
    fn trips_section_ignores_scroll() {
        let mut state = AppState::default();
        let result = reducer(&mut state, Action::ScrollGrab { section: SectionId::Trips, x: 1 });
        assert!(!result.changed);
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let mut state = AppState::default();
        for c in "Bondi".chars() {
            reducer(&mut state, Action::FormInsert(c));
        }
        assert_eq!(state.quick_nav.destination.value, "Bondi");

        // Hidden origin cannot take focus
        assert!(!reducer(&mut state, Action::FormFocus(Field::Origin)).changed);

        reducer(&mut state, Action::FormToggleOrigin);
        reducer(&mut state, Action::FormFocus(Field::Origin));
        reducer(&mut state, Action::FormInsert('C'));
        assert_eq!(state.quick_nav.origin.value, "C");
    }

    #[test]
    fn typing_with_section_focus_is_ignored() {
        let mut state = AppState { focus: Focus::Forecast, ..Default::default() };
        assert!(!reducer(&mut state, Action::FormInsert('x')).changed);
        assert!(state.quick_nav.destination.is_empty());
    }

    #[test]
    fn hiding_origin_moves_focus_and_keeps_text() {
        let mut state = AppState::default();
        reducer(&mut state, Action::FormToggleOrigin);
        reducer(&mut state, Action::FormFocus(Field::Origin));
        reducer(&mut state, Action::FormInsert('A'));

        reducer(&mut state, Action::FormToggleOrigin);
        assert_eq!(state.focus, Focus::Destination);
        assert_eq!(state.quick_nav.origin.value, "A");
    }

    fn filled(policy: SubmitPolicy) -> AppState {
        let mut state = AppState::default().with_submit_policy(policy);
        state.quick_nav.origin = TextField::new("A");
        state.quick_nav.destination = TextField::new("B");
        state
    }

    fn ab() -> PlanRequest {
        PlanRequest { start: "A".into(), end: "B".into() }
    }

    #[test]
    fn confirmed_submit_navigates_after_success() {
        let mut state = filled(SubmitPolicy::AwaitConfirmation);
        let result = reducer(&mut state, Action::FormSubmit);
        assert_eq!(result.effects, vec![Effect::SubmitPlan(ab())]);
        assert_eq!(state.screen, Screen::Dashboard);
        assert!(state.is_busy() || state.quick_nav.is_submitting());

        // A second submit while waiting is ignored
        assert!(reducer(&mut state, Action::FormSubmit).effects.is_empty());

        reducer(&mut state, Action::PlanDidSubmit);
        assert_eq!(state.screen, Screen::Directions(ab()));
        assert_eq!(state.quick_nav.submission, Submission::Idle);
    }

    #[test]
    fn confirmed_submit_stays_on_failure() {
        let mut state = filled(SubmitPolicy::AwaitConfirmation);
        reducer(&mut state, Action::FormSubmit);
        reducer(&mut state, Action::PlanDidFail("planner rejected (500)".into()));

        assert_eq!(state.screen, Screen::Dashboard);
        assert_eq!(state.quick_nav.error(), Some("planner rejected (500)"));

        // Retrying clears the error
        reducer(&mut state, Action::FormSubmit);
        assert_eq!(state.quick_nav.error(), None);
    }

    #[test]
    fn fire_and_forget_navigates_regardless() {
        let mut state = filled(SubmitPolicy::FireAndForget);
        let result = reducer(&mut state, Action::FormSubmit);
        assert_eq!(result.effects, vec![Effect::SubmitPlan(ab())]);
        assert_eq!(state.screen, Screen::Directions(ab()));

        assert!(!reducer(&mut state, Action::PlanDidFail("down".into())).changed);
        assert_eq!(state.screen, Screen::Directions(ab()));
        assert_eq!(state.quick_nav.error(), None);
    }

    #[test]
    fn late_confirmation_without_submission_is_ignored() {
        let mut state = AppState::default();
        assert!(!reducer(&mut state, Action::PlanDidSubmit).changed);
        assert_eq!(state.screen, Screen::Dashboard);
    }

    #[test]
    fn navigate_back_returns_to_dashboard() {
        let mut state = filled(SubmitPolicy::FireAndForget);
        reducer(&mut state, Action::FormSubmit);
        assert!(reducer(&mut state, Action::NavigateBack).changed);
        assert_eq!(state.screen, Screen::Dashboard);
        assert!(!reducer(&mut state, Action::NavigateBack).changed);
    }

    #[test]
    fn tick_only_rerenders_when_busy() {
        let mut state = AppState::new(Mount::Planner, "Guest", Vec::new());
        assert!(!reducer(&mut state, Action::Tick).changed);

        state.weather = WeatherView::Locating;
        state.mount = Mount::Dashboard;
        assert!(reducer(&mut state, Action::Tick).changed);
    }
}
