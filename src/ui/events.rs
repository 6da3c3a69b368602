//! Background task event processing.

use crate::app::{App, AppEvent};

/// Apply a background event to application state.
pub(super) fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::ThemeTransitionDone(token) => {
            app.finish_theme_transition(token);
        }
        AppEvent::TaskPanicked { task, error } => {
            tracing::error!(task, error = %error, "Background task panicked");
            app.set_status(format!("Internal error in {}: {}", task, error));
        }
    }
}
