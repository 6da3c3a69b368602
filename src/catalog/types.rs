use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Category
// ============================================================================

/// A topical grouping that podcasts can belong to (many-to-many).
///
/// Defined once at load time and never mutated. `featured_podcasts` holds an
/// ordered list of podcast ids; an id that resolves to no podcast is simply
/// skipped when the list is materialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Asset path for the category icon (opaque to this crate).
    pub icon: String,
    /// Asset path for the category cover image.
    pub cover_image: String,
    /// Ordered podcast ids highlighted on the category page.
    #[serde(default)]
    pub featured_podcasts: Vec<String>,
}

// ============================================================================
// Podcast
// ============================================================================

/// External listening-platform links for a podcast.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformLinks {
    pub spotify: Option<String>,
    pub apple: Option<String>,
    pub google: Option<String>,
    pub overcast: Option<String>,
    /// Platforms without a dedicated field.
    #[serde(default)]
    pub other: Vec<PlatformLink>,
}

/// A named link to a listening platform not covered by the fixed fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformLink {
    pub name: String,
    pub url: String,
}

/// A show entity with metadata and platform links.
///
/// `categories` is a membership set of category ids; order is irrelevant and
/// an id that references no known category never matches anything (it is not
/// an error). `rating` is nominally in [0, 5] but not enforced beyond author
/// discipline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Podcast {
    pub id: String,
    pub title: String,
    pub creator: String,
    pub description: String,
    pub cover_image: String,
    /// Category ids this podcast belongs to.
    pub categories: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    pub rating: Option<f64>,
    pub listen_count: Option<u64>,
    pub website_url: Option<String>,
    pub links: Option<PlatformLinks>,
}

// ============================================================================
// Episode
// ============================================================================

/// A single published audio installment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Episode {
    pub id: String,
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub cover_image: String,
    pub audio_url: String,
    /// Running time as an "HH:MM:SS" string. See [`Episode::duration_secs`].
    pub duration: String,
    pub publish_date: DateTime<Utc>,
    /// Ordered list of host names.
    pub hosts: Vec<String>,
    #[serde(default)]
    pub guests: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub transcript: Option<String>,
    #[serde(default)]
    pub featured: bool,
    pub season: Option<u32>,
    pub episode: Option<u32>,
}

impl Episode {
    /// Parse the "HH:MM:SS" duration into seconds.
    ///
    /// Returns `None` for strings that don't match the format; callers fall
    /// back to showing the raw string.
    pub fn duration_secs(&self) -> Option<u64> {
        let mut parts = self.duration.split(':');
        let hours: u64 = parts.next()?.parse().ok()?;
        let minutes: u64 = parts.next()?.parse().ok()?;
        let seconds: u64 = parts.next()?.parse().ok()?;
        if parts.next().is_some() || minutes >= 60 || seconds >= 60 {
            return None;
        }
        Some(hours * 3600 + minutes * 60 + seconds)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn episode_with_duration(duration: &str) -> Episode {
        Episode {
            id: "ep".to_string(),
            title: "Test".to_string(),
            description: String::new(),
            long_description: None,
            cover_image: String::new(),
            audio_url: String::new(),
            duration: duration.to_string(),
            publish_date: Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap(),
            hosts: vec![],
            guests: vec![],
            tags: vec![],
            transcript: None,
            featured: false,
            season: None,
            episode: None,
        }
    }

    #[test]
    fn duration_parses_hms() {
        assert_eq!(episode_with_duration("00:45:30").duration_secs(), Some(2730));
        assert_eq!(episode_with_duration("01:05:22").duration_secs(), Some(3922));
    }

    #[test]
    fn duration_rejects_malformed() {
        assert_eq!(episode_with_duration("45:30").duration_secs(), None);
        assert_eq!(episode_with_duration("00:99:00").duration_secs(), None);
        assert_eq!(episode_with_duration("abc").duration_secs(), None);
        assert_eq!(episode_with_duration("00:10:10:10").duration_secs(), None);
    }

    #[test]
    fn podcast_default_is_empty() {
        let p = Podcast::default();
        assert!(p.id.is_empty());
        assert!(!p.featured);
        assert_eq!(p.rating, None);
        assert_eq!(p.listen_count, None);
    }
}
