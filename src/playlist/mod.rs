// SPDX-License-Identifier: MPL-2.0
//! Playlist navigation over the video catalog.
//!
//! This component encapsulates the catalog and the current selection so the
//! application has a single source of truth for which video is active and
//! whether next/previous navigation is possible. Navigation does not wrap:
//! at the ends the corresponding direction is simply unavailable, which the
//! UI reflects by disabling the button.

use crate::catalog::{Catalog, VideoEntry, VideoId};

/// Navigation state snapshot for UI rendering.
///
/// Contains everything the player needs to render its navigation buttons
/// without direct access to the catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaylistInfo {
    /// Whether there is a next video to navigate to.
    pub has_next: bool,
    /// Whether there is a previous video to navigate to.
    pub has_previous: bool,
    /// Current position in the catalog (0-indexed), if set.
    pub current_index: Option<usize>,
    /// Total number of catalog entries.
    pub total_count: usize,
}

/// Ordered cursor over the catalog entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Playlist {
    catalog: Catalog,
    current_index: Option<usize>,
}

impl Playlist {
    /// Creates a playlist over the given catalog, selecting the first entry
    /// when the catalog is non-empty.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let current_index = if catalog.is_empty() { None } else { Some(0) };
        Self {
            catalog,
            current_index,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the currently selected entry, if any.
    #[must_use]
    pub fn current(&self) -> Option<&VideoEntry> {
        self.current_index.and_then(|i| self.catalog.get(i))
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Selects the entry with the given id.
    ///
    /// Returns the newly selected entry, or `None` when the id is not in
    /// the catalog (the selection is left unchanged).
    pub fn select(&mut self, id: &VideoId) -> Option<&VideoEntry> {
        let index = self.catalog.position_of(id)?;
        self.current_index = Some(index);
        self.current()
    }

    /// Advances to the next entry. Returns it, or `None` at the end.
    pub fn next(&mut self) -> Option<&VideoEntry> {
        let index = self.current_index?;
        if index + 1 >= self.catalog.len() {
            return None;
        }
        self.current_index = Some(index + 1);
        self.current()
    }

    /// Steps back to the previous entry. Returns it, or `None` at the start.
    pub fn previous(&mut self) -> Option<&VideoEntry> {
        let index = self.current_index?;
        if index == 0 {
            return None;
        }
        self.current_index = Some(index - 1);
        self.current()
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        match self.current_index {
            Some(index) => index + 1 < self.catalog.len(),
            None => false,
        }
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        matches!(self.current_index, Some(index) if index > 0)
    }

    /// Returns a snapshot of the navigation state for UI rendering.
    #[must_use]
    pub fn info(&self) -> PlaylistInfo {
        PlaylistInfo {
            has_next: self.has_next(),
            has_previous: self.has_previous(),
            current_index: self.current_index,
            total_count: self.catalog.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VideoEntry;

    fn entry(id: &str) -> VideoEntry {
        VideoEntry {
            id: VideoId(id.to_string()),
            title: id.to_uppercase(),
            thumbnail: format!("thumbs/{id}.png").into(),
            source: format!("media/{id}.mp4"),
            duration_secs: 60.0,
        }
    }

    fn playlist(ids: &[&str]) -> Playlist {
        Playlist::new(Catalog {
            videos: ids.iter().map(|id| entry(id)).collect(),
        })
    }

    #[test]
    fn new_selects_first_entry() {
        let playlist = playlist(&["a", "b", "c"]);
        assert_eq!(playlist.current().unwrap().id.as_str(), "a");
        assert_eq!(playlist.current_index(), Some(0));
    }

    #[test]
    fn empty_catalog_has_no_selection() {
        let playlist = playlist(&[]);
        assert!(playlist.current().is_none());
        assert!(!playlist.has_next());
        assert!(!playlist.has_previous());
    }

    #[test]
    fn next_and_previous_move_without_wrapping() {
        let mut playlist = playlist(&["a", "b"]);

        assert_eq!(playlist.next().unwrap().id.as_str(), "b");
        // At the last entry: no next, selection unchanged.
        assert!(playlist.next().is_none());
        assert_eq!(playlist.current().unwrap().id.as_str(), "b");

        assert_eq!(playlist.previous().unwrap().id.as_str(), "a");
        assert!(playlist.previous().is_none());
        assert_eq!(playlist.current().unwrap().id.as_str(), "a");
    }

    #[test]
    fn availability_flags_match_position() {
        let mut playlist = playlist(&["a", "b", "c"]);

        assert!(playlist.has_next());
        assert!(!playlist.has_previous());

        playlist.next();
        assert!(playlist.has_next());
        assert!(playlist.has_previous());

        playlist.next();
        assert!(!playlist.has_next());
        assert!(playlist.has_previous());
    }

    #[test]
    fn select_by_id_updates_cursor() {
        let mut playlist = playlist(&["a", "b", "c"]);

        let selected = playlist.select(&VideoId("c".into())).unwrap();
        assert_eq!(selected.id.as_str(), "c");
        assert!(!playlist.has_next());
    }

    #[test]
    fn select_unknown_id_keeps_selection() {
        let mut playlist = playlist(&["a", "b"]);

        assert!(playlist.select(&VideoId("zzz".into())).is_none());
        assert_eq!(playlist.current().unwrap().id.as_str(), "a");
    }

    #[test]
    fn info_snapshot_reflects_state() {
        let mut playlist = playlist(&["a", "b"]);
        playlist.next();

        let info = playlist.info();
        assert!(!info.has_next);
        assert!(info.has_previous);
        assert_eq!(info.current_index, Some(1));
        assert_eq!(info.total_count, 2);
    }

    #[test]
    fn one_playlist_position_per_catalog_entry() {
        let ids = ["a", "b", "c", "d"];
        let mut playlist = playlist(&ids);

        let mut visited = vec![playlist.current().unwrap().id.clone()];
        while let Some(entry) = playlist.next() {
            visited.push(entry.id.clone());
        }

        let expected: Vec<VideoId> = ids.iter().map(|id| VideoId(id.to_string())).collect();
        assert_eq!(visited, expected);
    }
}
