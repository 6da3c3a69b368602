//! Keyboard input handling.
//!
//! Input is routed by mode: search input captures printable keys, detail
//! views only accept navigation back, and the browse view carries the full
//! key map.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use tokio::sync::mpsc;

use crate::app::{App, AppEvent, Focus, View};
use crate::theme::TRANSITION_CLEAR_DELAY;

use super::loop_runner::Action;

pub(super) async fn handle_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Result<Action> {
    // Ctrl+C always quits, regardless of mode
    if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
        return Ok(Action::Quit);
    }

    if app.search_mode {
        return Ok(handle_search_input(app, code));
    }

    match app.view {
        View::Browse => handle_browse_input(app, code, event_tx).await,
        View::PodcastDetail | View::EpisodeDetail => Ok(handle_detail_input(app, code)),
    }
}

/// Search mode: printable keys edit the query, applied live.
fn handle_search_input(app: &mut App, code: KeyCode) -> Action {
    match code {
        KeyCode::Esc => app.cancel_search(),
        KeyCode::Enter => {
            // Keep the filter, leave input mode
            app.search_mode = false;
        }
        KeyCode::Backspace => app.search_pop(),
        KeyCode::Char(c) => app.search_push(c),
        _ => {}
    }
    Action::Continue
}

async fn handle_browse_input(
    app: &mut App,
    code: KeyCode,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Result<Action> {
    match code {
        KeyCode::Char('q') => return Ok(Action::Quit),

        KeyCode::Tab => {
            app.focus = match app.focus {
                Focus::Categories => Focus::Podcasts,
                Focus::Podcasts => Focus::Episodes,
                Focus::Episodes => Focus::Categories,
            };
        }
        KeyCode::BackTab => {
            app.focus = match app.focus {
                Focus::Categories => Focus::Episodes,
                Focus::Podcasts => Focus::Categories,
                Focus::Episodes => Focus::Podcasts,
            };
        }

        KeyCode::Char('j') | KeyCode::Down => app.nav_down(),
        KeyCode::Char('k') | KeyCode::Up => app.nav_up(),

        KeyCode::Char('/') => {
            app.search_mode = true;
            app.search_input.clear();
        }

        KeyCode::Char('s') => {
            let name = app.cycle_sort();
            app.set_status(format!("Sorted by {}", name));
        }

        KeyCode::Char('p') => {
            if app.toggle_popular() {
                app.set_status(format!("Popular: top {} by listens", app.popular_limit));
            } else {
                app.set_status("Showing all podcasts");
            }
        }

        KeyCode::Char('f') => {
            if app.toggle_featured() {
                app.set_status("Featured only");
            } else {
                app.set_status("Showing all");
            }
        }

        KeyCode::Char('g') => match app.cycle_tag() {
            Some(tag) => app.set_status(format!("Tag: #{}", tag)),
            None => app.set_status("Tag filter cleared"),
        },

        KeyCode::Char('t') => {
            let token = app.toggle_theme().await;
            app.set_status(format!("Theme: {}", app.theme.applied().name()));
            spawn_transition_clear(token, event_tx);
        }

        KeyCode::Enter => app.enter_detail(),

        _ => {}
    }
    Ok(Action::Continue)
}

/// Detail pages: any of the usual "back" keys return to browse.
fn handle_detail_input(app: &mut App, code: KeyCode) -> Action {
    match code {
        KeyCode::Char('q') => return Action::Quit,
        KeyCode::Esc | KeyCode::Char('b') | KeyCode::Backspace => app.exit_detail(),
        _ => {}
    }
    Action::Continue
}

/// Schedule the delayed transition-marker clear for a theme commit.
///
/// The token pins the clear to its own commit; if another toggle lands
/// before the delay elapses, the manager discards this clear as stale.
fn spawn_transition_clear(token: crate::theme::TransitionToken, event_tx: &mpsc::Sender<AppEvent>) {
    let tx = event_tx.clone();
    super::tasks::spawn_reporting("transition_clear", event_tx, async move {
        tokio::time::sleep(TRANSITION_CLEAR_DELAY).await;
        if tx.send(AppEvent::ThemeTransitionDone(token)).await.is_err() {
            tracing::debug!("Transition clear dropped (receiver closed)");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::storage::Database;
    use crate::theme::{system_theme_channel, ThemeManager};

    async fn test_app() -> App {
        let db = Database::open(":memory:").await.unwrap();
        let (_tx, rx) = system_theme_channel();
        App::new(Catalog::builtin(), db, ThemeManager::init(None, rx), 10)
    }

    #[tokio::test]
    async fn q_quits_from_browse() {
        let mut app = test_app().await;
        let (tx, _rx) = mpsc::channel(8);
        let action = handle_input(&mut app, KeyCode::Char('q'), KeyModifiers::NONE, &tx)
            .await
            .unwrap();
        assert!(matches!(action, Action::Quit));
    }

    #[tokio::test]
    async fn tab_cycles_focus() {
        let mut app = test_app().await;
        let (tx, _rx) = mpsc::channel(8);
        app.focus = Focus::Categories;

        for expected in [Focus::Podcasts, Focus::Episodes, Focus::Categories] {
            handle_input(&mut app, KeyCode::Tab, KeyModifiers::NONE, &tx)
                .await
                .unwrap();
            assert_eq!(app.focus, expected);
        }
    }

    #[tokio::test]
    async fn slash_enters_search_and_esc_cancels() {
        let mut app = test_app().await;
        let (tx, _rx) = mpsc::channel(8);

        handle_input(&mut app, KeyCode::Char('/'), KeyModifiers::NONE, &tx)
            .await
            .unwrap();
        assert!(app.search_mode);

        handle_input(&mut app, KeyCode::Char('a'), KeyModifiers::NONE, &tx)
            .await
            .unwrap();
        assert_eq!(app.search_input, "a");
        assert_eq!(app.podcast_query.search, "a");

        handle_input(&mut app, KeyCode::Esc, KeyModifiers::NONE, &tx)
            .await
            .unwrap();
        assert!(!app.search_mode);
        assert!(app.podcast_query.search.is_empty());
    }

    #[tokio::test]
    async fn enter_confirms_search_and_keeps_filter() {
        let mut app = test_app().await;
        let (tx, _rx) = mpsc::channel(8);
        app.search_mode = true;

        for c in "space".chars() {
            handle_input(&mut app, KeyCode::Char(c), KeyModifiers::NONE, &tx)
                .await
                .unwrap();
        }
        handle_input(&mut app, KeyCode::Enter, KeyModifiers::NONE, &tx)
            .await
            .unwrap();
        assert!(!app.search_mode);
        assert_eq!(app.podcast_query.search, "space");
    }

    #[tokio::test]
    async fn theme_toggle_schedules_clear_event() {
        let mut app = test_app().await;
        let (tx, mut rx) = mpsc::channel(8);
        let before = app.theme.is_dark();

        handle_input(&mut app, KeyCode::Char('t'), KeyModifiers::NONE, &tx)
            .await
            .unwrap();
        assert_ne!(app.theme.is_dark(), before);
        assert!(app.theme.transition_in_progress());

        // The delayed clear arrives on the event channel and resolves the marker.
        let event = rx.recv().await.unwrap();
        match event {
            AppEvent::ThemeTransitionDone(token) => {
                app.finish_theme_transition(token);
                assert!(!app.theme.transition_in_progress());
            }
            _ => panic!("expected ThemeTransitionDone"),
        }
    }

    #[tokio::test]
    async fn p_and_f_toggle_listing_modes() {
        let mut app = test_app().await;
        let (tx, _rx) = mpsc::channel(8);

        handle_input(&mut app, KeyCode::Char('p'), KeyModifiers::NONE, &tx)
            .await
            .unwrap();
        assert!(app.show_popular);
        assert!(app.visible_podcasts().len() <= app.popular_limit);

        handle_input(&mut app, KeyCode::Char('f'), KeyModifiers::NONE, &tx)
            .await
            .unwrap();
        assert!(app.featured_only);
        assert!(!app.show_popular);
        assert!(app.visible_podcasts().iter().all(|p| p.featured));
    }

    #[tokio::test]
    async fn g_cycles_episode_tag_filter() {
        let mut app = test_app().await;
        let (tx, _rx) = mpsc::channel(8);
        let first = app.catalog.episode_tags()[0].to_string();

        handle_input(&mut app, KeyCode::Char('g'), KeyModifiers::NONE, &tx)
            .await
            .unwrap();
        assert_eq!(app.episode_query.tag.as_deref(), Some(first.as_str()));
        for episode in app.visible_episodes() {
            assert!(episode.tags.iter().any(|t| *t == first));
        }
    }

    #[tokio::test]
    async fn detail_esc_returns_to_browse() {
        let mut app = test_app().await;
        let (tx, _rx) = mpsc::channel(8);
        app.view = View::PodcastDetail;

        handle_input(&mut app, KeyCode::Esc, KeyModifiers::NONE, &tx)
            .await
            .unwrap();
        assert_eq!(app.view, View::Browse);
    }
}
