// SPDX-License-Identifier: MPL-2.0
//! Static video catalog loaded at startup.
//!
//! The catalog is a TOML file with a `[[videos]]` array. It is loaded once
//! and passed into the application at construction time; nothing in the
//! crate reaches for a global catalog constant.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Identifier of a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(pub String);

impl VideoId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single catalog entry.
///
/// `source` is the media URL or path handed to the player; `duration_secs`
/// is the container duration known at catalog build time and surfaced to
/// the player through the metadata-loaded event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoEntry {
    pub id: VideoId,
    pub title: String,
    pub thumbnail: PathBuf,
    pub source: String,
    pub duration_secs: f64,
}

/// Ordered, immutable sequence of video entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub videos: Vec<VideoEntry>,
}

impl Catalog {
    /// Loads a catalog from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed. An empty
    /// `[[videos]]` array is not an error.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Catalog(format!("cannot read {}: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| Error::Catalog(format!("cannot parse {}: {}", path.display(), e)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&VideoEntry> {
        self.videos.get(index)
    }

    /// Returns the position of the entry with the given id, if present.
    #[must_use]
    pub fn position_of(&self, id: &VideoId) -> Option<usize> {
        self.videos.iter().position(|entry| &entry.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VideoEntry> {
        self.videos.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"
[[videos]]
id = "intro"
title = "Introduction"
thumbnail = "thumbs/intro.png"
source = "media/intro.mp4"
duration_secs = 65.0

[[videos]]
id = "deep-dive"
title = "Deep Dive"
thumbnail = "thumbs/deep-dive.png"
source = "media/deep-dive.mp4"
duration_secs = 3599.0
"#;

    fn write_catalog(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("catalog.toml");
        fs::write(&path, content).expect("failed to write catalog");
        (dir, path)
    }

    #[test]
    fn load_parses_entries_in_catalog_order() {
        let (_dir, path) = write_catalog(SAMPLE);
        let catalog = Catalog::load_from_path(&path).expect("failed to load catalog");

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().id.as_str(), "intro");
        assert_eq!(catalog.get(1).unwrap().id.as_str(), "deep-dive");
        assert_eq!(catalog.get(1).unwrap().duration_secs, 3599.0);
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let result = Catalog::load_from_path(&dir.path().join("nope.toml"));
        assert!(matches!(result, Err(Error::Catalog(_))));
    }

    #[test]
    fn empty_catalog_is_not_an_error() {
        let (_dir, path) = write_catalog("");
        let catalog = Catalog::load_from_path(&path).expect("empty catalog should load");
        assert!(catalog.is_empty());
    }

    #[test]
    fn position_of_finds_entries_by_id() {
        let (_dir, path) = write_catalog(SAMPLE);
        let catalog = Catalog::load_from_path(&path).unwrap();

        assert_eq!(catalog.position_of(&VideoId("deep-dive".into())), Some(1));
        assert_eq!(catalog.position_of(&VideoId("missing".into())), None);
    }

    #[test]
    fn iter_preserves_catalog_order() {
        let (_dir, path) = write_catalog(SAMPLE);
        let catalog = Catalog::load_from_path(&path).unwrap();

        let titles: Vec<&str> = catalog.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Introduction", "Deep Dive"]);
    }
}
