//! Composable filter + sort pipeline over the catalog.
//!
//! Filtering and sorting are two independent stages: predicates are
//! AND-combined and an absent criterion (empty search text, no category, no
//! tag) matches everything; the selected comparator then orders whatever
//! survived. All comparators are stable and treat missing numeric fields as
//! the lowest value.

use super::types::{Episode, Podcast};
use super::Catalog;

// ============================================================================
// Sort Keys
// ============================================================================

/// Comparator selection for podcast listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PodcastSort {
    /// Listen count, descending. Missing counts sort as 0.
    #[default]
    Popularity,
    /// Rating, descending. Missing ratings sort as 0.
    Rating,
}

impl PodcastSort {
    /// Cycle to the next sort key: Popularity → Rating → Popularity.
    pub fn next(self) -> Self {
        match self {
            Self::Popularity => Self::Rating,
            Self::Rating => Self::Popularity,
        }
    }

    /// Human-readable name for status display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Popularity => "Popularity",
            Self::Rating => "Rating",
        }
    }
}

/// Comparator selection for episode listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EpisodeSort {
    /// Publish date, descending.
    #[default]
    NewestFirst,
    /// Publish date, ascending.
    OldestFirst,
}

impl EpisodeSort {
    pub fn next(self) -> Self {
        match self {
            Self::NewestFirst => Self::OldestFirst,
            Self::OldestFirst => Self::NewestFirst,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::NewestFirst => "Newest first",
            Self::OldestFirst => "Oldest first",
        }
    }
}

// ============================================================================
// Queries
// ============================================================================

/// Filter criteria for the podcast explore view.
#[derive(Debug, Clone, Default)]
pub struct PodcastQuery {
    /// Restrict to podcasts whose category set contains this id.
    pub category: Option<String>,
    /// Case-insensitive substring match against title, creator and
    /// description. Empty means match everything.
    pub search: String,
    pub sort: PodcastSort,
}

/// Filter criteria for the episodes view.
#[derive(Debug, Clone, Default)]
pub struct EpisodeQuery {
    /// Restrict to episodes carrying this exact tag.
    pub tag: Option<String>,
    /// Case-insensitive substring match against title and description.
    /// Empty means match everything.
    pub search: String,
    pub sort: EpisodeSort,
}

fn podcast_matches(podcast: &Podcast, query: &PodcastQuery) -> bool {
    if let Some(category) = &query.category {
        if !podcast.categories.iter().any(|c| c == category) {
            return false;
        }
    }
    if !query.search.is_empty() {
        let needle = query.search.to_lowercase();
        return podcast.title.to_lowercase().contains(&needle)
            || podcast.creator.to_lowercase().contains(&needle)
            || podcast.description.to_lowercase().contains(&needle);
    }
    true
}

fn episode_matches(episode: &Episode, query: &EpisodeQuery) -> bool {
    if let Some(tag) = &query.tag {
        if !episode.tags.iter().any(|t| t == tag) {
            return false;
        }
    }
    if !query.search.is_empty() {
        let needle = query.search.to_lowercase();
        return episode.title.to_lowercase().contains(&needle)
            || episode.description.to_lowercase().contains(&needle);
    }
    true
}

impl Catalog {
    /// Filter then sort the podcast collection.
    pub fn search_podcasts(&self, query: &PodcastQuery) -> Vec<&Podcast> {
        let mut matched: Vec<&Podcast> = self
            .podcasts()
            .iter()
            .filter(|p| podcast_matches(p, query))
            .collect();
        match query.sort {
            PodcastSort::Popularity => matched.sort_by(|a, b| {
                b.listen_count
                    .unwrap_or(0)
                    .cmp(&a.listen_count.unwrap_or(0))
            }),
            PodcastSort::Rating => matched.sort_by(|a, b| {
                b.rating
                    .unwrap_or(0.0)
                    .total_cmp(&a.rating.unwrap_or(0.0))
            }),
        }
        matched
    }

    /// Filter then sort the episode collection.
    pub fn search_episodes(&self, query: &EpisodeQuery) -> Vec<&Episode> {
        let mut matched: Vec<&Episode> = self
            .episodes()
            .iter()
            .filter(|e| episode_matches(e, query))
            .collect();
        match query.sort {
            EpisodeSort::NewestFirst => {
                matched.sort_by(|a, b| b.publish_date.cmp(&a.publish_date))
            }
            EpisodeSort::OldestFirst => {
                matched.sort_by(|a, b| a.publish_date.cmp(&b.publish_date))
            }
        }
        matched
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        Catalog::builtin()
    }

    fn ids(podcasts: &[&Podcast]) -> Vec<String> {
        podcasts.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn empty_query_with_rating_sort_equals_full_rating_sort() {
        let catalog = catalog();
        let query = PodcastQuery {
            category: None,
            search: String::new(),
            sort: PodcastSort::Rating,
        };
        let results = catalog.search_podcasts(&query);
        assert_eq!(results.len(), catalog.podcasts().len());

        let mut expected: Vec<&Podcast> = catalog.podcasts().iter().collect();
        expected.sort_by(|a, b| b.rating.unwrap_or(0.0).total_cmp(&a.rating.unwrap_or(0.0)));
        assert_eq!(ids(&results), ids(&expected));
    }

    #[test]
    fn category_and_search_are_and_combined() {
        let catalog = catalog();
        let query = PodcastQuery {
            category: Some("technology".to_string()),
            search: "stories".to_string(),
            sort: PodcastSort::Popularity,
        };
        // "stories" matches Darknet Diaries (technology) and Radiolab
        // (science); the category predicate drops the latter.
        assert_eq!(ids(&catalog.search_podcasts(&query)), vec!["darknetdiaries"]);
    }

    #[test]
    fn search_is_case_insensitive_over_all_fields() {
        let catalog = catalog();
        let by_creator = catalog.search_podcasts(&PodcastQuery {
            search: "WES BOS".to_string(),
            ..PodcastQuery::default()
        });
        assert_eq!(ids(&by_creator), vec!["syntax"]);

        let by_title = catalog.search_podcasts(&PodcastQuery {
            search: "radiolab".to_string(),
            ..PodcastQuery::default()
        });
        assert_eq!(ids(&by_title), vec!["radiolab"]);
    }

    #[test]
    fn unknown_category_yields_empty() {
        let catalog = catalog();
        let results = catalog.search_podcasts(&PodcastQuery {
            category: Some("knitting".to_string()),
            ..PodcastQuery::default()
        });
        assert!(results.is_empty());
    }

    #[test]
    fn popularity_sort_treats_missing_as_zero() {
        let catalog = catalog();
        let results = catalog.search_podcasts(&PodcastQuery::default());
        // The Changelog has no listen count and must land in the tail with
        // the other countless shows, after every counted one.
        let changelog_pos = results.iter().position(|p| p.id == "changelog").unwrap();
        let last_counted = results
            .iter()
            .rposition(|p| p.listen_count.is_some())
            .unwrap();
        assert!(changelog_pos > last_counted);
    }

    #[test]
    fn episode_tag_filter_is_exact_membership() {
        let catalog = catalog();
        let results = catalog.search_episodes(&EpisodeQuery {
            tag: Some("Growth".to_string()),
            ..EpisodeQuery::default()
        });
        let got: Vec<&str> = results.iter().map(|e| e.id.as_str()).collect();
        // Newest first: ep002 (Jan 8) before ep001 (Jan 1).
        assert_eq!(got, vec!["ep002", "ep001"]);

        let none = catalog.search_episodes(&EpisodeQuery {
            tag: Some("growth".to_string()),
            ..EpisodeQuery::default()
        });
        assert!(none.is_empty());
    }

    #[test]
    fn episode_text_and_tag_are_and_combined() {
        let catalog = catalog();
        let results = catalog.search_episodes(&EpisodeQuery {
            tag: Some("Equipment".to_string()),
            search: "sound quality".to_string(),
            ..EpisodeQuery::default()
        });
        let got: Vec<&str> = results.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(got, vec!["ep004"]);
    }

    #[test]
    fn episode_date_sorts_are_mirror_images() {
        let catalog = catalog();
        let newest = catalog.search_episodes(&EpisodeQuery::default());
        let oldest = catalog.search_episodes(&EpisodeQuery {
            sort: EpisodeSort::OldestFirst,
            ..EpisodeQuery::default()
        });
        let mut reversed: Vec<&str> = oldest.iter().map(|e| e.id.as_str()).collect();
        reversed.reverse();
        let forward: Vec<&str> = newest.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(forward, reversed);
        assert_eq!(forward.first(), Some(&"ep005"));
    }

    #[test]
    fn sort_keys_cycle() {
        assert_eq!(PodcastSort::Popularity.next(), PodcastSort::Rating);
        assert_eq!(PodcastSort::Rating.next(), PodcastSort::Popularity);
        assert_eq!(EpisodeSort::NewestFirst.next(), EpisodeSort::OldestFirst);
        assert_eq!(EpisodeSort::OldestFirst.next(), EpisodeSort::NewestFirst);
    }
}
