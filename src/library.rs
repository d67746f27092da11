//! # Playlist Library Module
//!
//! Saved playlists and the mood journal. This is the application-side
//! owner of generated playlists: favoriting, play counts, ratings and
//! persistence all live here, never in the assembler.
//!
//! ## Storage
//!
//! The library is a single pretty-printed JSON document. Saving writes a
//! temporary file next to the target and renames it over the old one, so a
//! crash mid-write leaves the previous library intact.

use crate::classifier::MoodInput;
use crate::mood::MoodId;
use crate::playlist::Playlist;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// One classified mood signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub input: MoodInput,
    /// `None` when the input matched no mood
    pub detected: Option<MoodId>,
}

/// Aggregate numbers for the profile view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryStats {
    pub playlists_created: usize,
    /// Distinct tracks across favorited playlists
    pub songs_loved: usize,
    pub moods_tracked: usize,
    pub top_mood: Option<MoodId>,
    pub total_plays: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Library {
    #[serde(default)]
    playlists: Vec<Playlist>,
    #[serde(default)]
    mood_history: Vec<MoodEntry>,
}

impl Library {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a library from `path`. A missing file is an empty library.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("No library at {}, starting empty", path.display());
                return Ok(Self::new());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to read library file {}", path.display()))
            }
        };
        let library: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Library file {} is not valid JSON", path.display()))?;
        log::debug!(
            "Loaded {} playlists and {} mood entries from {}",
            library.playlists.len(),
            library.mood_history.len(),
            path.display()
        );
        Ok(library)
    }

    /// Write the library to `path`, replacing any previous file atomically.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let dir = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create library directory {}", dir.display()))?;

        let json = serde_json::to_string_pretty(self).context("Failed to serialize library")?;
        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
        tmp.write_all(json.as_bytes())
            .context("Failed to write library contents")?;
        tmp.persist(path)
            .with_context(|| format!("Failed to replace library file {}", path.display()))?;

        log::info!("Saved library with {} playlists to {}", self.playlists.len(), path.display());
        Ok(())
    }

    #[must_use]
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    #[must_use]
    pub fn mood_history(&self) -> &[MoodEntry] {
        &self.mood_history
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|playlist| playlist.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Playlist> {
        match self.playlists.iter_mut().find(|playlist| playlist.id == id) {
            Some(playlist) => Ok(playlist),
            None => bail!("No saved playlist with id '{id}'"),
        }
    }

    /// Save (or re-save) a playlist as a favorite.
    pub fn save(&mut self, playlist: Playlist) {
        let playlist = Playlist { is_favorite: true, ..playlist };
        match self.playlists.iter_mut().find(|p| p.id == playlist.id) {
            Some(existing) => *existing = playlist,
            None => self.playlists.push(playlist),
        }
    }

    /// Store `playlist` under its id, keeping its favorite flag as is.
    pub fn replace(&mut self, playlist: Playlist) -> Result<()> {
        let existing = self.get_mut(&playlist.id)?;
        *existing = playlist;
        Ok(())
    }

    /// Remove a playlist, returning it if it was present.
    pub fn remove(&mut self, id: &str) -> Option<Playlist> {
        let index = self.playlists.iter().position(|playlist| playlist.id == id)?;
        Some(self.playlists.remove(index))
    }

    /// Count one play; returns the new play count.
    pub fn record_play(&mut self, id: &str) -> Result<u32> {
        let playlist = self.get_mut(id)?;
        playlist.play_count += 1;
        Ok(playlist.play_count)
    }

    pub fn rate(&mut self, id: &str, rating: u8) -> Result<()> {
        if !(1..=5).contains(&rating) {
            bail!("Rating must be between 1 and 5, got {rating}");
        }
        self.get_mut(id)?.user_rating = Some(rating);
        Ok(())
    }

    /// Case-insensitive match on the playlist or mood name.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Playlist> {
        let query = query.to_lowercase();
        self.playlists
            .iter()
            .filter(|playlist| {
                playlist.name.to_lowercase().contains(&query)
                    || playlist.mood.name.to_lowercase().contains(&query)
            })
            .collect()
    }

    pub fn record_mood(&mut self, input: MoodInput, detected: Option<MoodId>) {
        self.mood_history.push(MoodEntry { input, detected });
    }

    #[must_use]
    pub fn stats(&self) -> LibraryStats {
        let songs_loved: HashSet<&str> = self
            .playlists
            .iter()
            .filter(|playlist| playlist.is_favorite)
            .flat_map(|playlist| playlist.tracks.iter().map(|track| track.id.as_str()))
            .collect();

        let mut counts: HashMap<MoodId, usize> = HashMap::new();
        for mood in self.mood_history.iter().filter_map(|entry| entry.detected) {
            *counts.entry(mood).or_default() += 1;
        }
        // ties resolved towards the earlier-declared mood
        let top_mood = counts
            .into_iter()
            .max_by(|(a_mood, a), (b_mood, b)| a.cmp(b).then_with(|| b_mood.cmp(a_mood)))
            .map(|(mood, _)| mood);

        LibraryStats {
            playlists_created: self.playlists.len(),
            songs_loved: songs_loved.len(),
            moods_tracked: self.mood_history.iter().filter(|entry| entry.detected.is_some()).count(),
            top_mood,
            total_plays: self.playlists.iter().map(|playlist| playlist.play_count).sum(),
        }
    }
}
