//! The content repository: immutable collections of categories, podcasts and
//! episodes, plus pure query operations over them.
//!
//! None of the operations here can fail — an unknown id or a filter that
//! matches nothing degenerates to `None` or an empty list, and callers branch
//! on that to render a not-found state. The source collections are never
//! mutated after construction; every listing is a derived view.

mod data;
mod filter;
mod loader;
mod types;

pub use filter::{EpisodeQuery, EpisodeSort, PodcastQuery, PodcastSort};
pub use loader::{CatalogError, MAX_CATALOG_FILE_SIZE};
pub use types::{Category, Episode, PlatformLink, PlatformLinks, Podcast};

/// Default number of entries returned by [`Catalog::popular_podcasts`]
/// when no explicit limit is configured.
pub const DEFAULT_POPULAR_LIMIT: usize = 10;

// ============================================================================
// Catalog
// ============================================================================

/// The three static collections, constructed once and read-only thereafter.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    podcasts: Vec<Podcast>,
    episodes: Vec<Episode>,
}

impl Catalog {
    /// The built-in catalog shipped with the binary.
    pub fn builtin() -> Self {
        Self {
            categories: data::categories(),
            podcasts: data::podcasts(),
            episodes: data::episodes(),
        }
    }

    /// Construct from already-loaded collections (TOML loader, tests).
    pub fn new(categories: Vec<Category>, podcasts: Vec<Podcast>, episodes: Vec<Episode>) -> Self {
        Self {
            categories,
            podcasts,
            episodes,
        }
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    /// Exact-id category lookup.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Exact-id podcast lookup.
    pub fn podcast(&self, id: &str) -> Option<&Podcast> {
        self.podcasts.iter().find(|p| p.id == id)
    }

    /// Exact-id episode lookup.
    pub fn episode(&self, id: &str) -> Option<&Episode> {
        self.episodes.iter().find(|e| e.id == id)
    }

    // ========================================================================
    // Listings
    // ========================================================================

    /// All categories in declaration order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All podcasts in declaration order.
    pub fn podcasts(&self) -> &[Podcast] {
        &self.podcasts
    }

    /// All episodes in declaration order.
    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    /// Every podcast whose category set contains `category_id`, in original
    /// collection order.
    ///
    /// An unknown category id and a known category with zero podcasts both
    /// yield an empty list; the two cases are deliberately indistinguishable.
    pub fn podcasts_in_category(&self, category_id: &str) -> Vec<&Podcast> {
        self.podcasts
            .iter()
            .filter(|p| p.categories.iter().any(|c| c == category_id))
            .collect()
    }

    /// The `featured == true` subset of podcasts, order preserved.
    pub fn featured_podcasts(&self) -> Vec<&Podcast> {
        self.podcasts.iter().filter(|p| p.featured).collect()
    }

    /// Top `limit` podcasts by listen count, descending.
    ///
    /// A missing `listen_count` sorts as 0. The sort is stable, so podcasts
    /// tied on listen count keep their original relative order.
    pub fn popular_podcasts(&self, limit: usize) -> Vec<&Podcast> {
        let mut ranked: Vec<&Podcast> = self.podcasts.iter().collect();
        ranked.sort_by(|a, b| {
            b.listen_count
                .unwrap_or(0)
                .cmp(&a.listen_count.unwrap_or(0))
        });
        ranked.truncate(limit);
        ranked
    }

    /// The `featured == true` subset of episodes, order preserved.
    pub fn featured_episodes(&self) -> Vec<&Episode> {
        self.episodes.iter().filter(|e| e.featured).collect()
    }

    /// The podcasts a category highlights, resolved from its ordered id list.
    ///
    /// Ids that resolve to no podcast are skipped silently.
    pub fn featured_in_category(&self, category: &Category) -> Vec<&Podcast> {
        category
            .featured_podcasts
            .iter()
            .filter_map(|id| self.podcast(id))
            .collect()
    }

    /// All distinct episode tags, sorted alphabetically.
    pub fn episode_tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self
            .episodes
            .iter()
            .flat_map(|e| e.tags.iter().map(String::as_str))
            .collect();
        tags.sort_unstable();
        tags.dedup();
        tags
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn podcast(id: &str, categories: &[&str], listen_count: Option<u64>) -> Podcast {
        Podcast {
            id: id.to_string(),
            title: format!("Show {id}"),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            listen_count,
            ..Podcast::default()
        }
    }

    #[test]
    fn category_lookup_by_exact_id() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.category("music").unwrap().name, "Music");
        assert!(catalog.category("Music").is_none());
        assert!(catalog.category("nope").is_none());
    }

    #[test]
    fn podcast_lookup_unknown_is_none() {
        let catalog = Catalog::builtin();
        assert!(catalog.podcast("syntax").is_some());
        assert!(catalog.podcast("").is_none());
    }

    #[test]
    fn podcasts_in_category_preserves_order() {
        let catalog = Catalog::builtin();
        let tech: Vec<&str> = catalog
            .podcasts_in_category("technology")
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(tech, vec!["syntax", "changelog", "darknetdiaries"]);
    }

    #[test]
    fn podcasts_in_unknown_category_is_empty() {
        let catalog = Catalog::builtin();
        assert!(catalog.podcasts_in_category("does-not-exist").is_empty());
        assert!(catalog.podcasts_in_category("").is_empty());
    }

    #[test]
    fn featured_podcasts_is_exact_subset() {
        let catalog = Catalog::builtin();
        let featured = catalog.featured_podcasts();
        assert!(featured.iter().all(|p| p.featured));
        let expected: Vec<&Podcast> =
            catalog.podcasts().iter().filter(|p| p.featured).collect();
        let got: Vec<&str> = featured.iter().map(|p| p.id.as_str()).collect();
        let want: Vec<&str> = expected.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(got, want);
    }

    #[test]
    fn popular_podcasts_ranks_by_listen_count() {
        let catalog = Catalog::new(
            vec![],
            vec![
                podcast("a", &[], Some(500)),
                podcast("b", &[], Some(1000)),
                podcast("c", &[], None),
            ],
            vec![],
        );
        let top: Vec<&str> = catalog
            .popular_podcasts(2)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(top, vec!["b", "a"]);
    }

    #[test]
    fn popular_podcasts_zero_limit_is_empty() {
        let catalog = Catalog::builtin();
        assert!(catalog.popular_podcasts(0).is_empty());
    }

    #[test]
    fn popular_podcasts_stable_on_ties() {
        let catalog = Catalog::new(
            vec![],
            vec![
                podcast("first", &[], Some(100)),
                podcast("second", &[], Some(100)),
                podcast("third", &[], Some(100)),
            ],
            vec![],
        );
        let order: Vec<&str> = catalog
            .popular_podcasts(3)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn popular_podcasts_missing_count_sorts_last() {
        let catalog = Catalog::new(
            vec![],
            vec![podcast("x", &[], None), podcast("y", &[], Some(1))],
            vec![],
        );
        let order: Vec<&str> = catalog
            .popular_podcasts(10)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(order, vec!["y", "x"]);
    }

    #[test]
    fn featured_in_category_skips_unresolved_ids() {
        let mut category = Catalog::builtin().category("technology").unwrap().clone();
        category.featured_podcasts.push("ghost-show".to_string());

        let catalog = Catalog::builtin();
        let featured: Vec<&str> = catalog
            .featured_in_category(&category)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(featured, vec!["syntax", "changelog", "darknetdiaries"]);
    }

    #[test]
    fn episode_tags_sorted_and_deduped() {
        let catalog = Catalog::builtin();
        let tags = catalog.episode_tags();
        let mut sorted = tags.clone();
        sorted.sort_unstable();
        assert_eq!(tags, sorted);
        assert!(tags.contains(&"Growth"));
        // "Growth" appears on two episodes but only once in the tag list
        assert_eq!(tags.iter().filter(|t| **t == "Growth").count(), 1);
    }

    #[test]
    fn builtin_ids_are_unique() {
        let catalog = Catalog::builtin();
        for (name, ids) in [
            (
                "categories",
                catalog.categories().iter().map(|c| &c.id).collect::<Vec<_>>(),
            ),
            (
                "podcasts",
                catalog.podcasts().iter().map(|p| &p.id).collect::<Vec<_>>(),
            ),
            (
                "episodes",
                catalog.episodes().iter().map(|e| &e.id).collect::<Vec<_>>(),
            ),
        ] {
            let mut sorted = ids.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), ids.len(), "duplicate id in {name}");
        }
    }

    #[test]
    fn builtin_podcast_categories_resolve() {
        let catalog = Catalog::builtin();
        for podcast in catalog.podcasts() {
            for cid in &podcast.categories {
                assert!(
                    catalog.category(cid).is_some(),
                    "podcast {} references unknown category {}",
                    podcast.id,
                    cid
                );
            }
        }
    }
}
