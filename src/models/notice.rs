//! Blocking user-facing notifications.

use super::navigation::Screen;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A notice the shell shows as a blocking alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "shell/src/lib/generated/")
)]
pub struct Notice {
    pub title: String,
    pub message: String,
    /// Screen to show once the notice is dismissed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigate_to: Option<Screen>,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            navigate_to: None,
        }
    }

    pub fn then_navigate(mut self, screen: Screen) -> Self {
        self.navigate_to = Some(screen);
        self
    }
}
