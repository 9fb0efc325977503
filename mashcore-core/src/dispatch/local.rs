//! LocalDispatcher: dispatcher for in-process execution.

use std::time::Duration;

use mashcore_types::{Action, DispatchResult};

use crate::state::AppState;

use super::dispatch_action;

/// Owns the application state and the configured generation delay. All
/// mutation in the running app goes through `dispatch`.
pub struct LocalDispatcher {
    state: AppState,
    delay: Duration,
}

impl LocalDispatcher {
    pub fn new(state: AppState, delay: Duration) -> Self {
        Self { state, delay }
    }

    pub fn dispatch(&mut self, action: &Action) -> DispatchResult {
        dispatch_action(action, &mut self.state, self.delay)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }
}
