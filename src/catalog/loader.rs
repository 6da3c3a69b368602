//! Optional catalog override from a TOML file.
//!
//! The file carries the same three collections as the built-in data as
//! `[[categories]]`, `[[podcasts]]` and `[[episodes]]` tables. Unlike the
//! config file, a catalog passed on the command line must exist — a missing
//! file is an error, not a silent default.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::types::{Category, Episode, Podcast};
use super::Catalog;

/// Maximum catalog file size (4 MB). A catalog is a curated listing, not a
/// bulk export; anything larger is treated as corrupt.
pub const MAX_CATALOG_FILE_SIZE: u64 = 4 * 1_048_576;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in catalog file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Catalog file too large: {0}")]
    TooLarge(String),

    /// Id uniqueness within a collection is a catalog invariant.
    #[error("Duplicate {kind} id in catalog file: {id}")]
    DuplicateId { kind: &'static str, id: String },
}

// ============================================================================
// Loading
// ============================================================================

/// On-disk shape of a catalog file. Any collection may be omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CatalogFile {
    categories: Vec<Category>,
    podcasts: Vec<Podcast>,
    episodes: Vec<Episode>,
}

fn check_unique<'a, I>(kind: &'static str, ids: I) -> Result<(), CatalogError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

impl Catalog {
    /// Load a catalog from a TOML file, replacing the built-in data.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let meta = std::fs::metadata(path)?;
        if meta.len() > MAX_CATALOG_FILE_SIZE {
            return Err(CatalogError::TooLarge(format!(
                "Catalog file is {} bytes (max {} bytes)",
                meta.len(),
                MAX_CATALOG_FILE_SIZE
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let file: CatalogFile = toml::from_str(&content)?;

        check_unique("category", file.categories.iter().map(|c| c.id.as_str()))?;
        check_unique("podcast", file.podcasts.iter().map(|p| p.id.as_str()))?;
        check_unique("episode", file.episodes.iter().map(|e| e.id.as_str()))?;

        tracing::info!(
            path = %path.display(),
            categories = file.categories.len(),
            podcasts = file.podcasts.len(),
            episodes = file.episodes.len(),
            "Loaded catalog file"
        );

        Ok(Catalog::new(file.categories, file.podcasts, file.episodes))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[[categories]]
id = "jazz"
name = "Jazz"
description = "All things jazz"
icon = "/icons/jazz.svg"
cover_image = "/categories/jazz.jpg"
featured_podcasts = ["blue-notes"]

[[podcasts]]
id = "blue-notes"
title = "Blue Notes"
creator = "Miles Q."
description = "Conversations with working jazz musicians."
cover_image = "/podcasts/blue-notes.jpg"
categories = ["jazz"]
featured = true
rating = 4.2
listen_count = 12000

[[episodes]]
id = "bn001"
title = "Modal Beginnings"
description = "Where modal jazz came from."
cover_image = "/episodes/bn001.jpg"
audio_url = "https://example.com/bn001.mp3"
duration = "00:31:02"
publish_date = "2025-02-01T08:00:00Z"
hosts = ["Miles Q."]
tags = ["History"]
"#;

    fn write_catalog(name: &str, content: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("dial_catalog_test_{name}"));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("catalog.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn load_sample_catalog() {
        let path = write_catalog("sample", SAMPLE);
        let catalog = Catalog::load(&path).unwrap();

        assert_eq!(catalog.categories().len(), 1);
        assert_eq!(catalog.podcasts().len(), 1);
        assert_eq!(catalog.episodes().len(), 1);

        let show = catalog.podcast("blue-notes").unwrap();
        assert!(show.featured);
        assert_eq!(show.listen_count, Some(12000));
        assert_eq!(
            catalog.episode("bn001").unwrap().duration_secs(),
            Some(31 * 60 + 2)
        );

        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = std::path::Path::new("/tmp/dial_catalog_nonexistent.toml");
        assert!(matches!(Catalog::load(path), Err(CatalogError::Io(_))));
    }

    #[test]
    fn duplicate_podcast_id_rejected() {
        let doubled = format!(
            "{SAMPLE}\n[[podcasts]]\nid = \"blue-notes\"\ntitle = \"Dup\"\ncreator = \"X\"\ndescription = \"d\"\ncover_image = \"c\"\ncategories = []\n"
        );
        let path = write_catalog("dup", &doubled);
        let err = Catalog::load(&path).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateId { kind: "podcast", .. }
        ));
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn invalid_toml_rejected() {
        let path = write_catalog("invalid", "this is not [valid toml");
        assert!(matches!(
            Catalog::load(&path),
            Err(CatalogError::Parse(_))
        ));
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn empty_file_is_an_empty_catalog() {
        let path = write_catalog("empty", "");
        let catalog = Catalog::load(&path).unwrap();
        assert!(catalog.categories().is_empty());
        assert!(catalog.podcasts().is_empty());
        assert!(catalog.episodes().is_empty());
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }
}
