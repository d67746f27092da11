//! Listening modes for the discover view.
//!
//! A mode describes an activity rather than a feeling: an energy range, a
//! valence range and a handful of preferred genres.

use crate::catalog::{Catalog, Track};
use crate::random::RandomSource;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Number of genres reported as trending
const TRENDING_GENRES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeId {
    Focus,
    Relaxation,
    Motivation,
    Sleep,
}

impl ModeId {
    pub const ALL: [ModeId; 4] = [ModeId::Focus, ModeId::Relaxation, ModeId::Motivation, ModeId::Sleep];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ModeId::Focus => "focus",
            ModeId::Relaxation => "relaxation",
            ModeId::Motivation => "motivation",
            ModeId::Sleep => "sleep",
        }
    }

    /// Static description of this mode.
    #[must_use]
    pub fn mode(self) -> RecommendationMode {
        match self {
            ModeId::Focus => RecommendationMode {
                id: self,
                name: "Focus",
                description: "Instrumental and ambient tracks for deep concentration",
                energy: 4.0..=7.0,
                valence: 5.0..=8.0,
                preferred_genres: &["instrumental", "ambient", "classical", "lo-fi"],
            },
            ModeId::Relaxation => RecommendationMode {
                id: self,
                name: "Relaxation",
                description: "Calm, soothing melodies for stress relief",
                energy: 1.0..=5.0,
                valence: 6.0..=9.0,
                preferred_genres: &["ambient", "new-age", "classical", "nature-sounds"],
            },
            ModeId::Motivation => RecommendationMode {
                id: self,
                name: "Motivation",
                description: "Upbeat, energizing songs to boost your mood",
                energy: 7.0..=10.0,
                valence: 7.0..=10.0,
                preferred_genres: &["pop", "rock", "electronic", "hip-hop"],
            },
            ModeId::Sleep => RecommendationMode {
                id: self,
                name: "Sleep",
                description: "Gentle, peaceful sounds for better rest",
                energy: 1.0..=3.0,
                valence: 5.0..=8.0,
                preferred_genres: &["ambient", "classical", "nature-sounds", "white-noise"],
            },
        }
    }
}

impl FromStr for ModeId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        ModeId::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| anyhow!("Unknown mode: '{s}'. Use focus, relaxation, motivation or sleep"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationMode {
    pub id: ModeId,
    pub name: &'static str,
    pub description: &'static str,
    pub energy: RangeInclusive<f64>,
    pub valence: RangeInclusive<f64>,
    pub preferred_genres: &'static [&'static str],
}

impl RecommendationMode {
    fn in_range(&self, track: &Track) -> bool {
        self.energy.contains(&track.energy) && self.valence.contains(&track.valence)
    }

    fn prefers_genre(&self, track: &Track) -> bool {
        self.preferred_genres.contains(&track.genre.as_str())
    }

    /// Tracks in range or of a preferred genre. Tracks matching both come
    /// first; catalog order otherwise.
    #[must_use]
    pub fn recommend<'a>(&self, catalog: &'a Catalog, limit: usize) -> Vec<&'a Track> {
        let (strong, weak): (Vec<&Track>, Vec<&Track>) = catalog
            .tracks()
            .iter()
            .filter(|track| self.in_range(track) || self.prefers_genre(track))
            .partition(|track| self.in_range(track) && self.prefers_genre(track));

        strong.into_iter().chain(weak).take(limit).collect()
    }
}

/// What the discover view shows.
#[derive(Debug, Clone)]
pub struct Discovery<'a> {
    pub tracks: Vec<&'a Track>,
    pub trending_genres: Vec<&'a str>,
}

/// Random picks plus the first few genres of the catalog.
pub fn discover<'a, R: RandomSource + ?Sized>(catalog: &'a Catalog, count: usize, rng: &mut R) -> Discovery<'a> {
    let mut trending_genres = catalog.genres();
    trending_genres.truncate(TRENDING_GENRES);

    Discovery {
        tracks: catalog.random_tracks(count, rng),
        trending_genres,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DEFAULT_CATALOG;
    use crate::random::ScriptedRandom;

    fn recommended(mode: ModeId) -> Vec<String> {
        mode.mode()
            .recommend(&DEFAULT_CATALOG, 20)
            .iter()
            .map(|t| t.id.clone())
            .collect()
    }

    #[test]
    fn test_focus_prefers_in_range_instrumental() {
        let ids = recommended(ModeId::Focus);
        // both focus tracks are in range and of a preferred genre
        assert_eq!(&ids[..2], &["focus-1".to_string(), "focus-2".to_string()]);
        assert!(ids.contains(&"calm-1".to_string()), "ambient genre alone qualifies");
    }

    #[test]
    fn test_sleep_mode() {
        let ids = recommended(ModeId::Sleep);
        assert_eq!(ids[0], "calm-1");
        assert!(ids.contains(&"sad-2".to_string()), "classical is a sleep genre");
        assert!(!ids.contains(&"energetic-1".to_string()));
    }

    #[test]
    fn test_motivation_limit() {
        let tracks = ModeId::Motivation.mode().recommend(&DEFAULT_CATALOG, 2);
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].id, "happy-1");
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("sleep".parse::<ModeId>().unwrap(), ModeId::Sleep);
        assert!("party".parse::<ModeId>().is_err());
    }

    #[test]
    fn test_discover() {
        let discovery = discover(&DEFAULT_CATALOG, 8, &mut ScriptedRandom::new(vec![3, 9, 1]));
        assert_eq!(discovery.tracks.len(), 8);
        assert_eq!(discovery.trending_genres, vec!["pop", "electronic", "indie", "classical", "rock"]);
    }
}
