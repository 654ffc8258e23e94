use serde::Serialize;
use shared::{domain::NotificationKind, protocol::UiAction};

use crate::Slice;

/// The single notification banner. There is no queue; showing a new one
/// replaces whatever was there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub open: bool,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    pub is_loading: bool,
    pub notification: Notification,
    pub sidebar_open: bool,
    pub dark_mode: bool,
}

impl UiState {
    pub fn with_preferences(sidebar_open: bool, dark_mode: bool) -> Self {
        Self {
            sidebar_open,
            dark_mode,
            ..Self::default()
        }
    }

    pub fn notification(&self) -> &Notification {
        &self.notification
    }
}

impl Slice for UiState {
    type Action = UiAction;

    const NAME: &'static str = "ui";

    fn reduce(&mut self, action: UiAction) {
        match action {
            UiAction::SetLoading(is_loading) => self.is_loading = is_loading,
            UiAction::ShowNotification { message, kind } => {
                self.notification = Notification {
                    open: true,
                    message,
                    kind,
                };
            }
            // Message and kind are retained so the banner can be re-shown.
            UiAction::HideNotification => self.notification.open = false,
            UiAction::ToggleSidebar => self.sidebar_open = !self.sidebar_open,
            UiAction::SetSidebarOpen(open) => self.sidebar_open = open,
            UiAction::ToggleDarkMode => self.dark_mode = !self.dark_mode,
            UiAction::SetDarkMode(enabled) => self.dark_mode = enabled,
        }
    }
}

#[cfg(test)]
#[path = "tests/ui_tests.rs"]
mod tests;
