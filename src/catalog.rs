//! # Track Catalog Module
//!
//! The fixed, read-only, ordered collection of tracks playlists are built
//! from. Catalog order is significant: it breaks ranking ties and decides
//! which genre neighbours are picked during feedback refinement.

use crate::algorithm::{self, ScoringContext};
use crate::mood::Mood;
use crate::random::{self, RandomSource};
use serde::{Deserialize, Serialize};

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Length in seconds
    pub duration: u32,
    /// Free-form tags; some are mood ids, others are descriptive
    pub mood_tags: Vec<String>,
    pub energy: f64,
    pub valence: f64,
    pub genre: String,
    pub cover_url: String,
}

impl Track {
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.mood_tags.iter().any(|t| t == tag)
    }

    /// `m:ss` rendering of the duration
    #[must_use]
    pub fn duration_display(&self) -> String {
        format!("{}:{:02}", self.duration / 60, self.duration % 60)
    }
}

/// Immutable, ordered track collection.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    #[must_use]
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    /// The built-in sample catalog.
    #[must_use]
    pub fn sample() -> Self {
        Self::new(vec![
            sample_track("happy-1", "Sunshine Symphony", "Bright Horizons", "Golden Days", 210, &["happy", "upbeat", "positive"], 8.0, 9.0, "pop", "1105666/pexels-photo-1105666"),
            sample_track("happy-2", "Dancing in Light", "Joy Collective", "Radiant Moments", 195, &["happy", "energetic", "fun"], 9.0, 8.0, "electronic", "1190297/pexels-photo-1190297"),
            sample_track("sad-1", "Rainy Reflections", "Melancholy Moon", "Quiet Storms", 245, &["sad", "melancholy", "introspective"], 3.0, 2.0, "indie", "459653/pexels-photo-459653"),
            sample_track("sad-2", "Echoes of Yesterday", "Somber Souls", "Fading Light", 280, &["sad", "nostalgic", "emotional"], 2.0, 3.0, "classical", "167636/pexels-photo-167636"),
            sample_track("energetic-1", "Electric Thunder", "Power Surge", "High Voltage", 180, &["energetic", "powerful", "intense"], 10.0, 8.0, "rock", "1763075/pexels-photo-1763075"),
            sample_track("energetic-2", "Neon Rush", "Cyber Beats", "Digital Dreams", 165, &["energetic", "electronic", "futuristic"], 9.0, 7.0, "electronic", "1190298/pexels-photo-1190298"),
            sample_track("calm-1", "Gentle Waves", "Ocean Whispers", "Serenity", 320, &["calm", "peaceful", "meditative"], 2.0, 7.0, "ambient", "1761279/pexels-photo-1761279"),
            sample_track("calm-2", "Mountain Meditation", "Tranquil Minds", "Inner Peace", 380, &["calm", "spiritual", "grounding"], 3.0, 8.0, "new-age", "1624496/pexels-photo-1624496"),
            sample_track("romantic-1", "Moonlight Serenade", "Love Symphony", "Heart Songs", 225, &["romantic", "intimate", "gentle"], 4.0, 8.0, "jazz", "1370296/pexels-photo-1370296"),
            sample_track("romantic-2", "Stars Align", "Cosmic Love", "Infinite Hearts", 210, &["romantic", "dreamy", "ethereal"], 5.0, 9.0, "indie", "1624496/pexels-photo-1624496"),
            sample_track("focus-1", "Deep Concentration", "Mind Palace", "Flow State", 420, &["focus", "instrumental", "minimal"], 5.0, 6.0, "instrumental", "3184291/pexels-photo-3184291"),
            sample_track("focus-2", "Neural Networks", "Brain Waves", "Cognitive Enhancement", 360, &["focus", "electronic", "ambient"], 6.0, 7.0, "ambient", "3861969/pexels-photo-3861969"),
        ])
    }

    #[must_use]
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Track> {
        self.tracks.iter().find(|track| track.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Candidates for `mood`, best match first, at most `limit` of them.
    #[must_use]
    pub fn tracks_by_mood(&self, mood: &Mood, context: &ScoringContext, limit: usize) -> Vec<&Track> {
        algorithm::rank_tracks(&self.tracks, mood, context)
            .into_iter()
            .take(limit)
            .map(|(track, _)| track)
            .collect()
    }

    /// Tracks of exactly `genre`, in catalog order.
    pub fn tracks_by_genre<'a>(&'a self, genre: &'a str) -> impl Iterator<Item = &'a Track> + 'a {
        self.tracks.iter().filter(move |track| track.genre == genre)
    }

    /// Case-insensitive match on title, artist, album or any tag.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Track> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.tracks
            .iter()
            .filter(|track| {
                track.title.to_lowercase().contains(&query)
                    || track.artist.to_lowercase().contains(&query)
                    || track.album.to_lowercase().contains(&query)
                    || track.mood_tags.iter().any(|tag| tag.to_lowercase().contains(&query))
            })
            .collect()
    }

    /// Distinct genres in first-seen order.
    #[must_use]
    pub fn genres(&self) -> Vec<&str> {
        let mut genres: Vec<&str> = Vec::new();
        for track in &self.tracks {
            if !genres.contains(&track.genre.as_str()) {
                genres.push(&track.genre);
            }
        }
        genres
    }

    /// `count` distinct tracks in random order.
    pub fn random_tracks<R: RandomSource + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<&Track> {
        let mut tracks: Vec<&Track> = self.tracks.iter().collect();
        random::shuffle(&mut tracks, rng);
        tracks.truncate(count);
        tracks
    }
}

#[allow(clippy::too_many_arguments)]
fn sample_track(
    id: &str,
    title: &str,
    artist: &str,
    album: &str,
    duration: u32,
    tags: &[&str],
    energy: f64,
    valence: f64,
    genre: &str,
    photo: &str,
) -> Track {
    Track {
        id: id.to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
        album: album.to_string(),
        duration,
        mood_tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
        energy,
        valence,
        genre: genre.to_string(),
        cover_url: format!(
            "https://images.pexels.com/photos/{photo}.jpeg?auto=compress&cs=tinysrgb&w=300"
        ),
    }
}

lazy_static::lazy_static! {
    /// Process-wide sample catalog
    pub static ref DEFAULT_CATALOG: Catalog = Catalog::sample();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::{MoodId, DEFAULT_MOODS};
    use crate::random::ScriptedRandom;
    use std::collections::HashSet;

    #[test]
    fn test_sample_catalog_shape() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.len(), 12);
        let ids: HashSet<&str> = catalog.tracks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), 12, "track ids must be unique");
        assert_eq!(catalog.tracks()[0].id, "happy-1");
        assert_eq!(catalog.tracks()[11].id, "focus-2");
    }

    #[test]
    fn test_tracks_by_mood_orders_by_score() {
        let happy = DEFAULT_MOODS.get(MoodId::Happy).unwrap();
        let tracks = DEFAULT_CATALOG.tracks_by_mood(happy, &ScoringContext::default(), 3);
        assert_eq!(tracks.len(), 3);
        assert_eq!(tracks[0].id, "happy-1");
        assert_eq!(tracks[1].id, "happy-2");
    }

    #[test]
    fn test_angry_has_no_direct_candidates() {
        // (9, 2) is far from everything in the sample catalog and nothing is tagged angry
        let angry = DEFAULT_MOODS.get(MoodId::Angry).unwrap();
        assert!(DEFAULT_CATALOG
            .tracks_by_mood(angry, &ScoringContext::default(), 12)
            .is_empty());
    }

    #[test]
    fn test_tracks_by_genre() {
        let electronic: Vec<&str> = DEFAULT_CATALOG
            .tracks_by_genre("electronic")
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(electronic, vec!["happy-2", "energetic-2"]);
        assert_eq!(DEFAULT_CATALOG.tracks_by_genre("polka").count(), 0);
    }

    #[test]
    fn test_search_matches_fields_and_tags() {
        let by_title = DEFAULT_CATALOG.search("neon");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, "energetic-2");

        let by_tag: Vec<&str> = DEFAULT_CATALOG.search("ELECTRONIC").iter().map(|t| t.id.as_str()).collect();
        assert!(by_tag.contains(&"energetic-2"));
        assert!(by_tag.contains(&"focus-2"));

        assert!(DEFAULT_CATALOG.search("   ").is_empty());
    }

    #[test]
    fn test_genres_first_seen_order() {
        assert_eq!(
            DEFAULT_CATALOG.genres(),
            vec!["pop", "electronic", "indie", "classical", "rock", "ambient", "new-age", "jazz", "instrumental"]
        );
    }

    #[test]
    fn test_random_tracks_are_distinct() {
        let mut rng = ScriptedRandom::new(vec![5, 3, 1, 0, 7]);
        let picked = DEFAULT_CATALOG.random_tracks(8, &mut rng);
        assert_eq!(picked.len(), 8);
        let ids: HashSet<&str> = picked.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn test_duration_display() {
        let track = DEFAULT_CATALOG.get("sad-1").unwrap();
        assert_eq!(track.duration_display(), "4:05");
    }
}
