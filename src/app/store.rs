//! Single-writer application store

use super::action::Action;
use super::reducer::{DispatchResult, reducer};
use super::state::AppState;

/// Owns the [`AppState`]; views only ever see `&AppState`
#[derive(Debug)]
pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Read-only view of the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply an action through the reducer
    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        if !matches!(action, Action::Tick | Action::ClockTick(_)) {
            tracing::debug!("dispatch {}", action.summary());
        }
        reducer(&mut self.state, action)
    }

    /// Apply a batch of actions in order, collecting their effects
    pub fn dispatch_all(&mut self, actions: impl IntoIterator<Item = Action>) -> DispatchResult {
        actions.into_iter().fold(DispatchResult::unchanged(), |mut acc, action| {
            let result = self.dispatch(action);
            acc.changed |= result.changed;
            acc.effects.extend(result.effects);
            acc
        })
    }
}
