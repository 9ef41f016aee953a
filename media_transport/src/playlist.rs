//! Ordered track list with a circular cursor.

use std::path::Path;

use anyhow::{Context, Result};

/// Audio extensions recognised by [`Playlist::from_dir`].
const AUDIO_EXTENSIONS: [&str; 5] = ["mp3", "flac", "ogg", "wav", "m4a"];

/// An ordered list of track names and the current position in it.
/// `next`/`previous` wrap around, so the cursor is always valid while the
/// list is non-empty.
#[derive(Clone, Debug, Default)]
pub struct Playlist {
    tracks: Vec<String>,
    current: usize,
}

impl Playlist {
    pub fn new(tracks: Vec<String>) -> Self {
        Playlist { tracks, current: 0 }
    }

    /// Build a playlist from the audio files in a directory, sorted by
    /// file name.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Playlist> {
        let dir = dir.as_ref();
        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("reading track directory {}", dir.display()))?;

        let mut tracks: Vec<String> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                p.extension()
                    .and_then(|e| e.to_str())
                    .map(|e| AUDIO_EXTENSIONS.contains(&e.to_lowercase().as_str()))
                    .unwrap_or(false)
            })
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        tracks.sort();

        Ok(Playlist::new(tracks))
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// The track under the cursor, if any.
    pub fn current(&self) -> Option<&str> {
        self.tracks.get(self.current).map(String::as_str)
    }

    /// Cursor position (0-based).
    pub fn position(&self) -> usize {
        self.current
    }

    /// Move the cursor forward, wrapping at the end.
    pub fn advance(&mut self) {
        if !self.tracks.is_empty() {
            self.current = (self.current + 1) % self.tracks.len();
        }
    }

    /// Move the cursor backward, wrapping at the start.
    pub fn retreat(&mut self) {
        if !self.tracks.is_empty() {
            self.current = (self.current + self.tracks.len() - 1) % self.tracks.len();
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
