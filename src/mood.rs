//! # Mood Module
//!
//! The fixed set of moods MoodMuse understands. Every mood sits on two
//! 0-10 axes, energy (arousal) and valence (positivity), which are the
//! same axes tracks are placed on.
//!
//! The table is built once and never changes at runtime. Components receive
//! it by reference; the process-wide default lives in [`DEFAULT_MOODS`].

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of one of the eight mood categories.
///
/// Declaration order matters: it is the tie-break order used by text
/// classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodId {
    Happy,
    Sad,
    Energetic,
    Calm,
    Anxious,
    Romantic,
    Angry,
    Nostalgic,
}

impl MoodId {
    /// All categories in declaration order
    pub const ALL: [MoodId; 8] = [
        MoodId::Happy,
        MoodId::Sad,
        MoodId::Energetic,
        MoodId::Calm,
        MoodId::Anxious,
        MoodId::Romantic,
        MoodId::Angry,
        MoodId::Nostalgic,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            MoodId::Happy => "happy",
            MoodId::Sad => "sad",
            MoodId::Energetic => "energetic",
            MoodId::Calm => "calm",
            MoodId::Anxious => "anxious",
            MoodId::Romantic => "romantic",
            MoodId::Angry => "angry",
            MoodId::Nostalgic => "nostalgic",
        }
    }
}

impl fmt::Display for MoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoodId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        MoodId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| anyhow!("Unknown mood: '{s}'"))
    }
}

/// A mood category with its display data and energy/valence coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mood {
    pub id: MoodId,
    pub name: String,
    /// Short glyph shown next to the name
    pub emoji: String,
    /// Display color as a hex string
    pub color: String,
    /// 0-10
    pub energy: f64,
    /// 0-10, negative to positive
    pub valence: f64,
    pub description: String,
}

impl Mood {
    fn new(
        id: MoodId,
        name: &str,
        emoji: &str,
        color: &str,
        energy: f64,
        valence: f64,
        description: &str,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            emoji: emoji.to_string(),
            color: color.to_string(),
            energy,
            valence,
            description: description.to_string(),
        }
    }
}

/// Immutable lookup table of every predefined mood, in [`MoodId`] order.
#[derive(Debug, Clone)]
pub struct MoodTable {
    moods: Vec<Mood>,
}

impl MoodTable {
    /// Build a table from explicit entries. Lookups return the first entry
    /// with a matching id.
    #[must_use]
    pub fn new(moods: Vec<Mood>) -> Self {
        Self { moods }
    }

    /// The eight predefined moods.
    #[must_use]
    pub fn predefined() -> Self {
        Self::new(vec![
            Mood::new(MoodId::Happy, "Happy", "😊", "#FFD700", 8.0, 9.0, "Feeling joyful and upbeat"),
            Mood::new(MoodId::Sad, "Sad", "😢", "#4169E1", 3.0, 2.0, "Feeling down or melancholic"),
            Mood::new(MoodId::Energetic, "Energetic", "⚡", "#FF6347", 10.0, 8.0, "Full of energy and ready to go"),
            Mood::new(MoodId::Calm, "Calm", "🧘", "#98FB98", 4.0, 7.0, "Peaceful and relaxed"),
            Mood::new(MoodId::Anxious, "Anxious", "😰", "#FFA500", 7.0, 3.0, "Feeling worried or stressed"),
            Mood::new(MoodId::Romantic, "Romantic", "💕", "#FF69B4", 5.0, 8.0, "In a loving, romantic mood"),
            Mood::new(MoodId::Angry, "Angry", "😠", "#DC143C", 9.0, 2.0, "Feeling frustrated or angry"),
            Mood::new(MoodId::Nostalgic, "Nostalgic", "🌅", "#DDA0DD", 4.0, 6.0, "Remembering the past fondly"),
        ])
    }

    #[must_use]
    pub fn get(&self, id: MoodId) -> Option<&Mood> {
        self.moods.iter().find(|mood| mood.id == id)
    }

    /// Lookup by the textual identifier (`"happy"`, `"calm"`, ...).
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Mood> {
        id.parse::<MoodId>().ok().and_then(|id| self.get(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mood> {
        self.moods.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moods.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moods.is_empty()
    }
}

impl Default for MoodTable {
    fn default() -> Self {
        Self::predefined()
    }
}

lazy_static::lazy_static! {
    /// Process-wide predefined mood table
    pub static ref DEFAULT_MOODS: MoodTable = MoodTable::predefined();
}
