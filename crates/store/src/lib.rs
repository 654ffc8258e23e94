//! Client-side state containers for bands and UI flags.
//!
//! Each slice owns its state and exposes a single mutation surface, its
//! [`Slice::reduce`]. The [`Store`] composes the slices into [`AppState`] and
//! routes every dispatched [`AppAction`] to exactly one of them.

use serde::Serialize;
use shared::protocol::AppAction;
use tracing::debug;

pub mod band;
pub mod ui;

pub use band::BandState;
pub use ui::{Notification, UiState};

/// A region of application state that transitions only through its actions.
pub trait Slice {
    type Action;

    /// Name of the slice as it appears in logs.
    const NAME: &'static str;

    /// Applies one action. Reducers are total and never fail.
    fn reduce(&mut self, action: Self::Action);
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub bands: BandState,
    pub ui: UiState,
}

/// Owns the state tree. Callers read snapshots through [`Store::state`] and
/// mutate only through [`Store::dispatch`].
#[derive(Debug, Default)]
pub struct Store {
    state: AppState,
    dispatched: u64,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        Self {
            state: initial_state,
            dispatched: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn bands(&self) -> &BandState {
        &self.state.bands
    }

    pub fn ui(&self) -> &UiState {
        &self.state.ui
    }

    /// Number of actions dispatched since construction.
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    pub fn dispatch(&mut self, action: impl Into<AppAction>) -> &AppState {
        match action.into() {
            AppAction::Bands(action) => {
                debug!(slice = BandState::NAME, action = action.name(), "dispatch");
                self.state.bands.reduce(action);
            }
            AppAction::Ui(action) => {
                debug!(slice = UiState::NAME, action = action.name(), "dispatch");
                self.state.ui.reduce(action);
            }
        }
        self.dispatched += 1;
        &self.state
    }

    pub fn into_state(self) -> AppState {
        self.state
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
