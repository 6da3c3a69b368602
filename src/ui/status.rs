use crate::app::{App, View};
use ratatui::{layout::Rect, widgets::Paragraph, Frame};
use std::borrow::Cow;

/// Render the status bar
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    // Use Cow to avoid allocations for static strings and borrowed messages
    let text: Cow<'_, str> = if app.search_mode {
        Cow::Owned(format!("Search: {}_  (ESC cancel, ENTER confirm)", app.search_input))
    } else if app.theme.transition_in_progress() {
        Cow::Borrowed("Switching theme...")
    } else if let Some((msg, _)) = &app.status_message {
        Cow::Borrowed(msg.as_ref())
    } else {
        match app.view {
            View::Browse => Cow::Borrowed(
                "[/]search [s]ort [g]tag [p]opular [f]eatured [t]heme [Enter]open [q]uit",
            ),
            View::PodcastDetail | View::EpisodeDetail => Cow::Borrowed("[b/Esc]back [q]uit"),
        }
    };

    let style = if app.search_mode {
        app.palette().search_input
    } else {
        app.palette().status_bar
    };
    let paragraph = Paragraph::new(text).style(style);
    f.render_widget(paragraph, area);
}
