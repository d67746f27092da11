//! # Playlist Assembly Module
//!
//! Builds a themed playlist for a mood from the fixed catalog.
//!
//! ## Generation
//!
//! 1. **Filter**: tracks tagged with the mood, or within the tolerance on
//!    both energy and valence
//! 2. **Rank**: score candidates, best first (stable), keep the top 12
//! 3. **Enrich**: add up to 3 top tracks of the mood's complementary moods
//! 4. **Deduplicate** by track id, **shuffle**, **truncate** to 15
//! 5. **Name**: pick a name and description from the mood's templates
//!
//! Steps 1-3 are deterministic; only the final order and the texts depend on
//! the [`RandomSource`].
//!
//! ## Refinement
//!
//! [`PlaylistAssembler::refine`] applies liked/disliked feedback to an
//! existing playlist: disliked tracks go, genre neighbours of liked tracks
//! come in.

use crate::algorithm::ScoringContext;
use crate::catalog::{Catalog, Track, DEFAULT_CATALOG};
use crate::mood::{Mood, MoodTable, DEFAULT_MOODS};
use crate::random::{self, RandomSource};
use crate::templates::{TemplateBook, DEFAULT_TEMPLATES};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, Ordering};

/// A generated playlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub description: String,
    pub mood: Mood,
    pub tracks: Vec<Track>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_favorite: bool,
    /// 1-5 stars
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_rating: Option<u8>,
    pub play_count: u32,
}

impl Playlist {
    #[must_use]
    pub fn track_ids(&self) -> Vec<&str> {
        self.tracks.iter().map(|track| track.id.as_str()).collect()
    }

    /// Total running time in seconds
    #[must_use]
    pub fn total_duration(&self) -> u32 {
        self.tracks.iter().map(|track| track.duration).sum()
    }
}

/// Size limits for generation and refinement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaylistConfig {
    /// Ranked tracks kept for the primary mood
    pub primary_limit: usize,
    /// Tracks fetched per complementary mood
    pub complementary_per_mood: usize,
    /// Complementary tracks added in total
    pub complementary_limit: usize,
    pub max_length: usize,
    /// Genre neighbours added per liked track
    pub similar_per_liked: usize,
}

impl Default for PlaylistConfig {
    fn default() -> Self {
        Self {
            primary_limit: 12,
            complementary_per_mood: 2,
            complementary_limit: 3,
            max_length: 15,
            similar_per_liked: 2,
        }
    }
}

static LAST_PLAYLIST_MILLIS: AtomicI64 = AtomicI64::new(0);

/// `playlist-<unix millis>`, strictly increasing within the process.
#[must_use]
pub fn next_playlist_id() -> String {
    let now = Utc::now().timestamp_millis();
    let previous = LAST_PLAYLIST_MILLIS
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(now.max(last + 1))
        })
        .unwrap_or(now);
    format!("playlist-{}", now.max(previous + 1))
}

/// Stateless playlist builder over shared static tables.
#[derive(Debug, Clone)]
pub struct PlaylistAssembler<'a> {
    catalog: &'a Catalog,
    moods: &'a MoodTable,
    templates: &'a TemplateBook,
    scoring: ScoringContext,
    config: PlaylistConfig,
}

impl Default for PlaylistAssembler<'static> {
    fn default() -> Self {
        Self::new(&DEFAULT_CATALOG, &DEFAULT_MOODS, &DEFAULT_TEMPLATES)
    }
}

impl<'a> PlaylistAssembler<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog, moods: &'a MoodTable, templates: &'a TemplateBook) -> Self {
        Self {
            catalog,
            moods,
            templates,
            scoring: ScoringContext::default(),
            config: PlaylistConfig::default(),
        }
    }

    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringContext) -> Self {
        self.scoring = scoring;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: PlaylistConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &PlaylistConfig {
        &self.config
    }

    /// Top-ranked tracks for the mood itself.
    #[must_use]
    pub fn primary_tracks(&self, mood: &Mood) -> Vec<&'a Track> {
        self.catalog
            .tracks_by_mood(mood, &self.scoring, self.config.primary_limit)
    }

    /// Top tracks of the mood's complementary moods, in adjacency order.
    #[must_use]
    pub fn complementary_tracks(&self, mood: &Mood) -> Vec<&'a Track> {
        self.templates
            .complementary(mood.id)
            .iter()
            .filter_map(|id| self.moods.get(*id))
            .flat_map(|neighbour| {
                self.catalog
                    .tracks_by_mood(neighbour, &self.scoring, self.config.complementary_per_mood)
            })
            .take(self.config.complementary_limit)
            .collect()
    }

    /// Primary plus complementary tracks, deduplicated by id, before
    /// shuffling. Deterministic for a given mood.
    #[must_use]
    pub fn candidates(&self, mood: &Mood) -> Vec<&'a Track> {
        let primary = self.primary_tracks(mood);
        let complementary = self.complementary_tracks(mood);
        log::debug!(
            "Mood `{}': {} primary, {} complementary tracks",
            mood.id,
            primary.len(),
            complementary.len()
        );

        let mut seen = HashSet::new();
        primary
            .into_iter()
            .chain(complementary)
            .filter(|track| seen.insert(track.id.as_str()))
            .collect()
    }

    /// Generate a fresh playlist for `mood`.
    ///
    /// # Examples
    ///
    /// ```
    /// use moodmuse::mood::{MoodId, DEFAULT_MOODS};
    /// use moodmuse::playlist::PlaylistAssembler;
    ///
    /// let assembler = PlaylistAssembler::default();
    /// let calm = DEFAULT_MOODS.get(MoodId::Calm).unwrap();
    /// let playlist = assembler.generate(calm, &mut rand::thread_rng());
    /// assert!(!playlist.tracks.is_empty() && playlist.tracks.len() <= 15);
    /// assert_eq!(playlist.play_count, 0);
    /// ```
    pub fn generate<R: RandomSource + ?Sized>(&self, mood: &Mood, rng: &mut R) -> Playlist {
        let mut tracks: Vec<Track> = self.candidates(mood).into_iter().cloned().collect();
        random::shuffle(&mut tracks, rng);
        tracks.truncate(self.config.max_length);

        let now = Utc::now();
        let playlist = Playlist {
            id: next_playlist_id(),
            name: self.templates.playlist_name(mood.id, rng),
            description: self.templates.playlist_description(mood.id, rng),
            mood: mood.clone(),
            tracks,
            created_at: now,
            updated_at: now,
            is_favorite: false,
            user_rating: None,
            play_count: 0,
        };
        log::info!(
            "Generated playlist `{}' ({}) with {} tracks",
            playlist.name,
            playlist.id,
            playlist.tracks.len()
        );
        playlist
    }

    /// Apply feedback to `playlist`, returning the refined copy.
    ///
    /// Disliked tracks are removed. Each liked track that is part of the
    /// playlist pulls in up to `similar_per_liked` other catalog tracks of
    /// the same genre, skipping disliked ones and any already present.
    #[must_use]
    pub fn refine(&self, playlist: &Playlist, liked: &[&str], disliked: &[&str]) -> Playlist {
        let disliked: HashSet<&str> = disliked.iter().copied().collect();

        let mut tracks: Vec<Track> = playlist
            .tracks
            .iter()
            .filter(|track| !disliked.contains(track.id.as_str()))
            .cloned()
            .collect();
        let mut present: HashSet<String> = tracks.iter().map(|track| track.id.clone()).collect();

        for liked_id in liked {
            let Some(liked_track) = playlist.tracks.iter().find(|track| track.id == *liked_id) else {
                log::warn!("Liked track `{liked_id}' is not in playlist {}", playlist.id);
                continue;
            };

            let similar: Vec<&Track> = self
                .catalog
                .tracks_by_genre(&liked_track.genre)
                .filter(|track| track.id != liked_track.id)
                .filter(|track| !disliked.contains(track.id.as_str()))
                .filter(|track| !present.contains(&track.id))
                .take(self.config.similar_per_liked)
                .collect();

            for track in similar {
                present.insert(track.id.clone());
                tracks.push(track.clone());
            }
        }

        tracks.truncate(self.config.max_length);
        log::debug!(
            "Refined playlist {}: {} -> {} tracks",
            playlist.id,
            playlist.tracks.len(),
            tracks.len()
        );

        Playlist {
            tracks,
            updated_at: Utc::now(),
            ..playlist.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::MoodId;
    use crate::random::ScriptedRandom;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn mood(id: MoodId) -> &'static Mood {
        DEFAULT_MOODS.get(id).unwrap()
    }

    fn ids(tracks: &[&Track]) -> Vec<String> {
        tracks.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn test_every_mood_gets_a_bounded_playlist() {
        let assembler = PlaylistAssembler::default();
        let mut rng = StdRng::seed_from_u64(1);
        for m in DEFAULT_MOODS.iter() {
            let playlist = assembler.generate(m, &mut rng);
            assert!(!playlist.tracks.is_empty(), "{} produced an empty playlist", m.id);
            assert!(playlist.tracks.len() <= 15);
            assert_eq!(playlist.mood.id, m.id);
            assert!(!playlist.is_favorite);
            assert_eq!(playlist.play_count, 0);
            assert_eq!(playlist.user_rating, None);
            assert_eq!(playlist.created_at, playlist.updated_at);
        }
    }

    #[test]
    fn test_tracks_come_from_catalog_without_duplicates() {
        let assembler = PlaylistAssembler::default();
        let mut rng = StdRng::seed_from_u64(99);
        for m in DEFAULT_MOODS.iter() {
            let playlist = assembler.generate(m, &mut rng);
            let unique: HashSet<&str> = playlist.track_ids().into_iter().collect();
            assert_eq!(unique.len(), playlist.tracks.len(), "duplicates for {}", m.id);
            for track in &playlist.tracks {
                assert_eq!(DEFAULT_CATALOG.get(&track.id), Some(track));
            }
        }
    }

    #[test]
    fn test_candidates_are_deterministic() {
        let assembler = PlaylistAssembler::default();
        for m in DEFAULT_MOODS.iter() {
            assert_eq!(ids(&assembler.candidates(m)), ids(&assembler.candidates(m)));
        }
    }

    #[test]
    fn test_generated_set_matches_candidates() {
        let assembler = PlaylistAssembler::default();
        let happy = mood(MoodId::Happy);
        let expected: HashSet<String> = ids(&assembler.candidates(happy)).into_iter().collect();
        for seed in 0..5 {
            let playlist = assembler.generate(happy, &mut StdRng::seed_from_u64(seed));
            let got: HashSet<String> = playlist.tracks.iter().map(|t| t.id.clone()).collect();
            assert_eq!(got, expected);
        }
    }

    #[test]
    fn test_complementary_tracks_for_angry() {
        let assembler = PlaylistAssembler::default();
        let angry = mood(MoodId::Angry);
        assert!(assembler.primary_tracks(angry).is_empty());
        // energetic contributes its top two, sad its top one
        let extra = assembler.complementary_tracks(angry);
        assert_eq!(extra.len(), 3);
        assert_eq!(extra[0].id, "energetic-1");
        assert_eq!(extra[2].id, "sad-1");
    }

    #[test]
    fn test_candidates_deduplicate_complementary_overlap() {
        // happy's complementary energetic tracks are already primary candidates
        let assembler = PlaylistAssembler::default();
        let happy = mood(MoodId::Happy);
        let primary = assembler.primary_tracks(happy);
        let candidates = assembler.candidates(happy);
        let unique: HashSet<&str> = candidates.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(unique.len(), candidates.len());
        assert!(candidates.len() >= primary.len());
        assert_eq!(ids(&candidates[..primary.len()]), ids(&primary));
    }

    #[test]
    fn test_max_length_applies_after_shuffle() {
        let config = PlaylistConfig { max_length: 2, ..PlaylistConfig::default() };
        let assembler = PlaylistAssembler::default().with_config(config);
        let playlist = assembler.generate(mood(MoodId::Calm), &mut ScriptedRandom::zeros());
        assert_eq!(playlist.tracks.len(), 2);
    }

    #[test]
    fn test_names_come_from_templates() {
        let assembler = PlaylistAssembler::default();
        let playlist = assembler.generate(mood(MoodId::Sad), &mut ScriptedRandom::zeros());
        assert_eq!(playlist.name, "Healing Rain");
        assert_eq!(playlist.description, "Gentle melodies to accompany you through this emotional moment.");
    }

    #[test]
    fn test_generic_names_without_templates() {
        let templates = TemplateBook::empty();
        let assembler = PlaylistAssembler::new(&DEFAULT_CATALOG, &DEFAULT_MOODS, &templates);
        let playlist = assembler.generate(mood(MoodId::Happy), &mut ScriptedRandom::zeros());
        assert_eq!(playlist.name, crate::templates::FALLBACK_NAME);
        assert_eq!(playlist.description, crate::templates::FALLBACK_DESCRIPTION);
        assert!(!playlist.tracks.is_empty());
    }

    #[test]
    fn test_playlist_ids_increase() {
        let first = next_playlist_id();
        let second = next_playlist_id();
        let millis = |id: &str| id.trim_start_matches("playlist-").parse::<i64>().unwrap();
        assert!(first.starts_with("playlist-"));
        assert!(millis(&second) > millis(&first));
    }

    fn ten_track_playlist() -> Playlist {
        let tracks: Vec<Track> = DEFAULT_CATALOG.tracks()[..10].to_vec();
        let mut playlist = PlaylistAssembler::default().generate(mood(MoodId::Happy), &mut ScriptedRandom::zeros());
        playlist.tracks = tracks;
        playlist
    }

    #[test]
    fn test_refine_drops_disliked() {
        let assembler = PlaylistAssembler::default();
        let playlist = ten_track_playlist();
        let refined = assembler.refine(&playlist, &[], &["sad-2"]);
        assert!(!refined.track_ids().contains(&"sad-2"));
        assert_eq!(refined.tracks.len(), 9);
        assert!(refined.tracks.len() <= 15);
        assert_eq!(refined.id, playlist.id);
        assert!(refined.updated_at >= playlist.updated_at);
    }

    #[test]
    fn test_refine_adds_genre_neighbours() {
        let assembler = PlaylistAssembler::default();
        let mut playlist = ten_track_playlist();
        playlist.tracks.retain(|t| t.id == "calm-1");
        let refined = assembler.refine(&playlist, &["calm-1"], &[]);
        // the only other ambient track is focus-2
        assert_eq!(refined.track_ids(), vec!["calm-1", "focus-2"]);
    }

    #[test]
    fn test_refine_skips_present_and_disliked_neighbours() {
        let assembler = PlaylistAssembler::default();
        let playlist = ten_track_playlist();
        // sad-1's only indie neighbour (romantic-2) is already present,
        // happy-2's only electronic neighbour is disliked
        let refined = assembler.refine(&playlist, &["sad-1", "happy-2"], &["energetic-2"]);
        assert_eq!(refined.tracks.len(), 9);
        assert!(!refined.track_ids().contains(&"energetic-2"));
        assert_eq!(refined.track_ids().iter().filter(|id| **id == "romantic-2").count(), 1);
    }

    #[test]
    fn test_refine_ignores_unknown_liked_ids_and_caps_length() {
        let assembler = PlaylistAssembler::default();
        let mut playlist = ten_track_playlist();
        playlist.tracks = DEFAULT_CATALOG.tracks().to_vec();
        playlist.tracks.extend(DEFAULT_CATALOG.tracks()[..4].iter().map(|t| Track {
            id: format!("{}-live", t.id),
            ..t.clone()
        }));
        let refined = assembler.refine(&playlist, &["nope", "focus-1"], &[]);
        assert_eq!(refined.tracks.len(), 15);
    }
}
