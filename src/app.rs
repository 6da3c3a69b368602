use std::borrow::Cow;

use tokio::time::Instant;

use crate::catalog::{Catalog, Category, Episode, EpisodeQuery, Podcast, PodcastQuery};
use crate::storage::Database;
use crate::theme::{ColorPalette, ThemeManager, TransitionToken};
use crate::util::MAX_SEARCH_QUERY_LENGTH;

// ============================================================================
// View and Focus Enums
// ============================================================================

/// Current view mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Browse,        // Side-by-side categories/podcasts/episodes
    PodcastDetail, // Full-screen podcast page
    EpisodeDetail, // Full-screen episode page
}

/// Which panel has focus in Browse view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Categories,
    Podcasts,
    Episodes,
}

// ============================================================================
// Event Types
// ============================================================================

/// Events from background tasks
pub enum AppEvent {
    /// The transition-marker delay elapsed for a theme commit.
    ///
    /// Carries the token from the commit that scheduled it; the manager
    /// ignores tokens made stale by a later commit.
    ThemeTransitionDone(TransitionToken),
    /// A background task panicked.
    TaskPanicked { task: &'static str, error: String },
}

// ============================================================================
// Application State
// ============================================================================

/// Central application state
pub struct App {
    pub catalog: Catalog,
    pub db: Database,
    pub theme: ThemeManager,

    // UI state
    pub view: View,
    pub focus: Focus,
    /// Index into the category panel. 0 = "All"; `n + 1` = `categories()[n]`.
    pub selected_category: usize,
    /// Selection into the current visible podcast listing.
    pub selected_podcast: usize,
    /// Selection into the current visible episode listing.
    pub selected_episode: usize,

    // Queries driving the visible listings
    pub podcast_query: PodcastQuery,
    pub episode_query: EpisodeQuery,

    /// Replace the podcast listing with the top-N popular ranking.
    pub show_popular: bool,
    /// Restrict both listings to featured entries.
    pub featured_only: bool,
    /// Entry cap for the popular listing, from preferences.
    pub popular_limit: usize,

    // Search input
    pub search_mode: bool,
    pub search_input: String,

    // Status message with expiry — Cow avoids allocation for static literals
    pub status_message: Option<(Cow<'static, str>, Instant)>,

    /// Dirty flag to skip unnecessary frame renders
    pub needs_redraw: bool,

    pub should_quit: bool,
}

impl App {
    pub fn new(catalog: Catalog, db: Database, theme: ThemeManager, popular_limit: usize) -> Self {
        Self {
            catalog,
            db,
            theme,
            view: View::Browse,
            focus: Focus::Podcasts,
            selected_category: 0,
            selected_podcast: 0,
            selected_episode: 0,
            podcast_query: PodcastQuery::default(),
            episode_query: EpisodeQuery::default(),
            show_popular: false,
            featured_only: false,
            popular_limit,
            search_mode: false,
            search_input: String::new(),
            status_message: None,
            needs_redraw: true,
            should_quit: false,
        }
    }

    /// Palette for the currently applied theme variant.
    pub fn palette(&self) -> ColorPalette {
        self.theme.palette()
    }

    // ========================================================================
    // Derived Listings
    // ========================================================================

    /// Category id for the current category selection, or None for "All".
    pub fn selected_category_id(&self) -> Option<&str> {
        if self.selected_category == 0 {
            None
        } else {
            self.catalog
                .categories()
                .get(self.selected_category - 1)
                .map(|c| c.id.as_str())
        }
    }

    /// Category record for the current selection, if not "All".
    pub fn selected_category(&self) -> Option<&Category> {
        if self.selected_category == 0 {
            None
        } else {
            self.catalog.categories().get(self.selected_category - 1)
        }
    }

    /// Podcasts for the active listing mode.
    ///
    /// Popular mode shows the top-N ranking; featured mode shows the
    /// featured subset (the selected category's rail when one is picked);
    /// otherwise the query pipeline runs, filter applied before sort.
    pub fn visible_podcasts(&self) -> Vec<&Podcast> {
        if self.show_popular {
            return self.catalog.popular_podcasts(self.popular_limit);
        }
        if self.featured_only {
            return match self.selected_category() {
                Some(category) => self.catalog.featured_in_category(category),
                None => self.catalog.featured_podcasts(),
            };
        }
        self.catalog.search_podcasts(&self.podcast_query)
    }

    /// Episodes for the active listing mode.
    pub fn visible_episodes(&self) -> Vec<&Episode> {
        if self.featured_only {
            return self.catalog.featured_episodes();
        }
        self.catalog.search_episodes(&self.episode_query)
    }

    /// Currently selected podcast (bounds-checked against the visible list).
    pub fn selected_podcast(&self) -> Option<&Podcast> {
        self.visible_podcasts().get(self.selected_podcast).copied()
    }

    /// Currently selected episode (bounds-checked against the visible list).
    pub fn selected_episode(&self) -> Option<&Episode> {
        self.visible_episodes().get(self.selected_episode).copied()
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Number of rows in the category panel ("All" + every category).
    fn category_rows(&self) -> usize {
        self.catalog.categories().len() + 1
    }

    /// Navigate up in current list
    pub fn nav_up(&mut self) {
        match self.focus {
            Focus::Categories => {
                if self.selected_category > 0 {
                    self.selected_category -= 1;
                    self.sync_category_filter();
                }
            }
            Focus::Podcasts => {
                self.selected_podcast = self.selected_podcast.saturating_sub(1);
            }
            Focus::Episodes => {
                self.selected_episode = self.selected_episode.saturating_sub(1);
            }
        }
        self.needs_redraw = true;
    }

    /// Navigate down in current list
    pub fn nav_down(&mut self) {
        match self.focus {
            Focus::Categories => {
                let max_index = self.category_rows().saturating_sub(1);
                if self.selected_category < max_index {
                    self.selected_category += 1;
                    self.sync_category_filter();
                }
            }
            Focus::Podcasts => {
                let len = self.visible_podcasts().len();
                if len > 0 {
                    self.selected_podcast = (self.selected_podcast + 1).min(len - 1);
                }
            }
            Focus::Episodes => {
                let len = self.visible_episodes().len();
                if len > 0 {
                    self.selected_episode = (self.selected_episode + 1).min(len - 1);
                }
            }
        }
        self.needs_redraw = true;
    }

    /// Clamp selection indices after any operation that changed the visible
    /// lists (filter change, sort change, catalog reload).
    pub fn clamp_selections(&mut self) {
        let podcasts = self.visible_podcasts().len();
        let episodes = self.visible_episodes().len();
        self.selected_podcast = if podcasts == 0 {
            0
        } else {
            self.selected_podcast.min(podcasts - 1)
        };
        self.selected_episode = if episodes == 0 {
            0
        } else {
            self.selected_episode.min(episodes - 1)
        };
        self.selected_category = self
            .selected_category
            .min(self.category_rows().saturating_sub(1));
    }

    /// Push the category panel selection into the podcast query.
    fn sync_category_filter(&mut self) {
        self.podcast_query.category = self.selected_category_id().map(str::to_string);
        self.selected_podcast = 0;
    }

    // ========================================================================
    // Search and Sort
    // ========================================================================

    /// Append a character to the search input, bounded by
    /// [`MAX_SEARCH_QUERY_LENGTH`], and apply the query live.
    pub fn search_push(&mut self, c: char) {
        if self.search_input.chars().count() < MAX_SEARCH_QUERY_LENGTH {
            self.search_input.push(c);
            self.apply_search();
        }
    }

    /// Remove the last character from the search input and re-apply.
    pub fn search_pop(&mut self) {
        self.search_input.pop();
        self.apply_search();
    }

    /// Copy the search input into the query for the focused panel.
    fn apply_search(&mut self) {
        match self.focus {
            Focus::Episodes => {
                self.episode_query.search = self.search_input.clone();
                self.selected_episode = 0;
            }
            _ => {
                self.podcast_query.search = self.search_input.clone();
                self.selected_podcast = 0;
            }
        }
        self.clamp_selections();
        self.needs_redraw = true;
    }

    /// Leave search mode, clearing the filter text.
    pub fn cancel_search(&mut self) {
        self.search_mode = false;
        self.search_input.clear();
        self.apply_search();
    }

    /// Cycle the sort key for the focused panel. Returns the new key's name
    /// for status display.
    pub fn cycle_sort(&mut self) -> &'static str {
        let name = match self.focus {
            Focus::Episodes => {
                self.episode_query.sort = self.episode_query.sort.next();
                self.episode_query.sort.name()
            }
            _ => {
                self.podcast_query.sort = self.podcast_query.sort.next();
                self.podcast_query.sort.name()
            }
        };
        self.clamp_selections();
        self.needs_redraw = true;
        name
    }

    // ========================================================================
    // Listing Modes
    // ========================================================================

    /// Toggle the popular listing. Mutually exclusive with featured mode.
    /// Returns the new state.
    pub fn toggle_popular(&mut self) -> bool {
        self.show_popular = !self.show_popular;
        if self.show_popular {
            self.featured_only = false;
        }
        self.clamp_selections();
        self.needs_redraw = true;
        self.show_popular
    }

    /// Toggle featured-only listings. Mutually exclusive with popular mode.
    /// Returns the new state.
    pub fn toggle_featured(&mut self) -> bool {
        self.featured_only = !self.featured_only;
        if self.featured_only {
            self.show_popular = false;
        }
        self.clamp_selections();
        self.needs_redraw = true;
        self.featured_only
    }

    /// Cycle the episode tag filter: no filter, then each catalog tag in
    /// alphabetical order, then back to no filter. Returns the new tag for
    /// status display.
    pub fn cycle_tag(&mut self) -> Option<String> {
        let tags = self.catalog.episode_tags();
        let next = match &self.episode_query.tag {
            None => tags.first().map(|t| t.to_string()),
            Some(current) => tags
                .iter()
                .position(|t| *t == current.as_str())
                .and_then(|i| tags.get(i + 1))
                .map(|t| t.to_string()),
        };
        self.episode_query.tag = next.clone();
        self.selected_episode = 0;
        self.clamp_selections();
        self.needs_redraw = true;
        next
    }

    // ========================================================================
    // View Transitions
    // ========================================================================

    /// Open the detail page for the focused panel's selection.
    pub fn enter_detail(&mut self) {
        match self.focus {
            Focus::Episodes => {
                if self.selected_episode().is_some() {
                    self.view = View::EpisodeDetail;
                }
            }
            _ => {
                if self.selected_podcast().is_some() {
                    self.view = View::PodcastDetail;
                }
            }
        }
        self.needs_redraw = true;
    }

    /// Return to the browse view.
    pub fn exit_detail(&mut self) {
        self.view = View::Browse;
        self.needs_redraw = true;
    }

    // ========================================================================
    // Theme
    // ========================================================================

    /// Flip the theme and return the transition token so the caller can
    /// schedule the delayed marker clear.
    pub async fn toggle_theme(&mut self) -> TransitionToken {
        let token = self.theme.toggle(&self.db).await;
        self.needs_redraw = true;
        token
    }

    /// Handle the delayed transition clear. Stale tokens are ignored.
    pub fn finish_theme_transition(&mut self, token: TransitionToken) {
        if self.theme.clear_transition(token) {
            self.needs_redraw = true;
        }
    }

    /// Re-resolve the theme after the OS signal changed.
    pub fn on_system_theme_change(&mut self) {
        if self.theme.on_system_change() {
            self.set_status("Theme follows system");
            self.needs_redraw = true;
        }
    }

    // ========================================================================
    // Status Messages
    // ========================================================================

    /// Set status message (will auto-expire after 3 seconds)
    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
        self.needs_redraw = true;
    }

    /// Clear status message if expired (older than 3 seconds)
    /// Returns true if a message was actually cleared
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed().as_secs() >= 3 {
                self.status_message = None;
                self.needs_redraw = true;
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Database;
    use crate::theme::{system_theme_channel, ThemeManager, ThemeVariant};
    use tokio::time::{self, Duration};

    async fn test_app() -> App {
        let db = Database::open(":memory:").await.unwrap();
        let (_tx, rx) = system_theme_channel();
        let theme = ThemeManager::init(None, rx);
        App::new(Catalog::builtin(), db, theme, 10)
    }

    #[tokio::test]
    async fn category_selection_feeds_podcast_query() {
        let mut app = test_app().await;
        app.focus = Focus::Categories;
        assert_eq!(app.selected_category_id(), None);

        app.nav_down();
        let first_id = app.catalog.categories()[0].id.clone();
        assert_eq!(app.selected_category_id(), Some(first_id.as_str()));
        assert_eq!(app.podcast_query.category.as_deref(), Some(first_id.as_str()));

        // Every visible podcast belongs to the selected category.
        for podcast in app.visible_podcasts() {
            assert!(podcast.categories.contains(&first_id));
        }
    }

    #[tokio::test]
    async fn nav_clamps_at_list_ends() {
        let mut app = test_app().await;
        app.focus = Focus::Podcasts;
        app.nav_up();
        assert_eq!(app.selected_podcast, 0);

        let len = app.visible_podcasts().len();
        for _ in 0..len + 5 {
            app.nav_down();
        }
        assert_eq!(app.selected_podcast, len - 1);
    }

    #[tokio::test]
    async fn search_input_filters_live() {
        let mut app = test_app().await;
        app.focus = Focus::Podcasts;
        app.search_mode = true;
        for c in "web".chars() {
            app.search_push(c);
        }

        let visible = app.visible_podcasts();
        assert!(!visible.is_empty());
        for podcast in &visible {
            let hay = format!(
                "{} {} {}",
                podcast.title, podcast.creator, podcast.description
            )
            .to_lowercase();
            assert!(hay.contains("web"));
        }

        app.cancel_search();
        assert_eq!(app.visible_podcasts().len(), app.catalog.podcasts().len());
    }

    #[tokio::test]
    async fn search_narrowing_clamps_selection() {
        let mut app = test_app().await;
        app.focus = Focus::Podcasts;
        app.selected_podcast = app.visible_podcasts().len() - 1;

        app.search_mode = true;
        for c in "history".chars() {
            app.search_push(c);
        }
        let len = app.visible_podcasts().len();
        assert!(app.selected_podcast < len.max(1));
    }

    #[tokio::test]
    async fn cycle_sort_targets_focused_panel() {
        let mut app = test_app().await;
        app.focus = Focus::Podcasts;
        assert_eq!(app.cycle_sort(), "Rating");
        assert_eq!(app.cycle_sort(), "Popularity");

        app.focus = Focus::Episodes;
        assert_eq!(app.cycle_sort(), "Oldest first");
    }

    #[tokio::test]
    async fn enter_detail_requires_selection() {
        let mut app = test_app().await;
        app.focus = Focus::Podcasts;
        // Impossible filter: nothing visible, detail entry refused.
        app.podcast_query.search = "zzz-no-such-podcast".to_string();
        app.enter_detail();
        assert_eq!(app.view, View::Browse);

        app.podcast_query.search.clear();
        app.enter_detail();
        assert_eq!(app.view, View::PodcastDetail);
        app.exit_detail();
        assert_eq!(app.view, View::Browse);
    }

    #[tokio::test]
    async fn popular_mode_lists_top_by_listen_count() {
        let db = Database::open(":memory:").await.unwrap();
        let (_tx, rx) = system_theme_channel();
        let mut app = App::new(Catalog::builtin(), db, ThemeManager::init(None, rx), 3);

        assert!(app.toggle_popular());
        let visible = app.visible_podcasts();
        assert_eq!(visible.len(), 3);
        let counts: Vec<u64> = visible.iter().map(|p| p.listen_count.unwrap_or(0)).collect();
        let mut sorted = counts.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(counts, sorted);

        assert!(!app.toggle_popular());
        assert_eq!(app.visible_podcasts().len(), app.catalog.podcasts().len());
    }

    #[tokio::test]
    async fn featured_mode_follows_category_selection() {
        let mut app = test_app().await;
        app.toggle_featured();
        assert!(app.visible_podcasts().iter().all(|p| p.featured));
        assert!(app.visible_episodes().iter().all(|e| e.featured));

        // A selected category narrows the podcasts to its featured rail.
        app.focus = Focus::Categories;
        app.nav_down();
        let rail: Vec<&str> = app
            .catalog
            .featured_in_category(app.selected_category().unwrap())
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        let visible: Vec<&str> = app.visible_podcasts().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(visible, rail);
    }

    #[tokio::test]
    async fn popular_and_featured_modes_are_exclusive() {
        let mut app = test_app().await;
        app.toggle_popular();
        app.toggle_featured();
        assert!(app.featured_only && !app.show_popular);
        app.toggle_popular();
        assert!(app.show_popular && !app.featured_only);
    }

    #[tokio::test]
    async fn tag_cycle_walks_catalog_tags_and_clears() {
        let mut app = test_app().await;
        let tags: Vec<String> = app
            .catalog
            .episode_tags()
            .iter()
            .map(|t| t.to_string())
            .collect();
        assert!(!tags.is_empty());

        for tag in &tags {
            let current = app.cycle_tag();
            assert_eq!(current.as_deref(), Some(tag.as_str()));
            for episode in app.visible_episodes() {
                assert!(episode.tags.iter().any(|t| t == tag));
            }
        }

        // One more step wraps back to no filter.
        assert_eq!(app.cycle_tag(), None);
        assert_eq!(app.visible_episodes().len(), app.catalog.episodes().len());
    }

    #[tokio::test]
    async fn toggle_theme_round_trip() {
        let mut app = test_app().await;
        let before = app.theme.is_dark();

        let token = app.toggle_theme().await;
        assert_ne!(app.theme.is_dark(), before);
        assert!(app.theme.transition_in_progress());

        app.finish_theme_transition(token);
        assert!(!app.theme.transition_in_progress());
    }

    #[tokio::test]
    async fn stale_transition_token_keeps_marker() {
        let mut app = test_app().await;
        let first = app.toggle_theme().await;
        let second = app.toggle_theme().await;

        app.finish_theme_transition(first);
        assert!(app.theme.transition_in_progress());
        app.finish_theme_transition(second);
        assert!(!app.theme.transition_in_progress());
    }

    #[tokio::test]
    async fn system_change_updates_applied_variant() {
        let db = Database::open(":memory:").await.unwrap();
        let (tx, rx) = tokio::sync::watch::channel(ThemeVariant::Dark);
        let theme = ThemeManager::init(None, rx);
        let mut app = App::new(Catalog::builtin(), db, theme, 10);
        assert!(app.theme.is_dark());

        tx.send(ThemeVariant::Light).unwrap();
        app.on_system_theme_change();
        assert!(!app.theme.is_dark());
    }

    #[tokio::test]
    async fn status_expires_after_3_seconds() {
        // Create app before pausing time to avoid DB connection timeout
        let mut app = test_app().await;
        time::pause();
        app.set_status("Sorted by Rating");
        assert!(app.status_message.is_some());

        time::advance(Duration::from_secs(2)).await;
        app.clear_expired_status();
        assert!(app.status_message.is_some());

        time::advance(Duration::from_secs(2)).await;
        app.clear_expired_status();
        assert!(app.status_message.is_none());
    }
}
