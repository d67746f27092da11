//! # Mood Classifier Module
//!
//! Turns a raw mood signal into one of the predefined moods. Three input
//! shapes are understood:
//!
//! - **Text**: free-form sentence scored against per-mood keyword lists
//! - **Emoji**: exact lookup of a single glyph
//! - **Selection**: the mood identifier picked directly by the user
//!
//! Classification is a pure function of the input and the static tables.
//! "No match" is `None`, never an error.

use crate::mood::{Mood, MoodId, MoodTable, DEFAULT_MOODS};
use crate::random::RandomSource;
use crate::templates::{TemplateBook, DEFAULT_TEMPLATES};
use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Keywords per mood, in [`MoodId`] declaration order.
const MOOD_KEYWORDS: [(MoodId, &[&str]); 8] = [
    (MoodId::Happy, &["happy", "joy", "excited", "cheerful", "elated", "upbeat", "positive", "bright"]),
    (MoodId::Sad, &["sad", "depressed", "down", "blue", "melancholy", "gloomy", "sorrowful", "upset"]),
    (MoodId::Energetic, &["energetic", "pumped", "hyper", "active", "dynamic", "vigorous", "lively"]),
    (MoodId::Calm, &["calm", "peaceful", "relaxed", "serene", "tranquil", "zen", "mellow", "chill"]),
    (MoodId::Anxious, &["anxious", "worried", "nervous", "stressed", "tense", "uneasy", "restless"]),
    (MoodId::Romantic, &["romantic", "love", "intimate", "passionate", "tender", "affectionate"]),
    (MoodId::Angry, &["angry", "mad", "furious", "irritated", "frustrated", "rage", "annoyed"]),
    (MoodId::Nostalgic, &["nostalgic", "memories", "past", "reminiscing", "wistful", "sentimental"]),
];

/// Glyph table in declaration order. 🌅 appears twice (calm, then
/// nostalgic); later entries overwrite earlier ones, so it means nostalgic.
const EMOJI_MOODS: &[(&str, MoodId)] = &[
    ("😊", MoodId::Happy), ("😃", MoodId::Happy), ("😄", MoodId::Happy), ("🙂", MoodId::Happy), ("😁", MoodId::Happy),
    ("😢", MoodId::Sad), ("😭", MoodId::Sad), ("☹️", MoodId::Sad), ("🙁", MoodId::Sad), ("😞", MoodId::Sad),
    ("⚡", MoodId::Energetic), ("🔥", MoodId::Energetic), ("💪", MoodId::Energetic), ("🚀", MoodId::Energetic),
    ("🧘", MoodId::Calm), ("😌", MoodId::Calm), ("😴", MoodId::Calm), ("🌅", MoodId::Calm), ("🍃", MoodId::Calm),
    ("😰", MoodId::Anxious), ("😟", MoodId::Anxious), ("😬", MoodId::Anxious), ("😨", MoodId::Anxious),
    ("💕", MoodId::Romantic), ("❤️", MoodId::Romantic), ("💖", MoodId::Romantic), ("😍", MoodId::Romantic),
    ("😠", MoodId::Angry), ("😡", MoodId::Angry), ("🤬", MoodId::Angry), ("💢", MoodId::Angry),
    ("🌅", MoodId::Nostalgic), ("📸", MoodId::Nostalgic), ("⏰", MoodId::Nostalgic), ("🎭", MoodId::Nostalgic),
];

/// Shape of a raw mood signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Emoji,
    Selection,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InputKind::Text => "text",
            InputKind::Emoji => "emoji",
            InputKind::Selection => "selection",
        })
    }
}

impl FromStr for InputKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(InputKind::Text),
            "emoji" => Ok(InputKind::Emoji),
            // the mood grid in the app was called the "visual" picker
            "selection" | "visual" => Ok(InputKind::Selection),
            other => Err(anyhow!("Unknown input kind: '{other}'. Use text, emoji or selection")),
        }
    }
}

/// A raw mood signal as entered by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodInput {
    pub kind: InputKind,
    pub value: String,
    pub timestamp: DateTime<Utc>,
}

impl MoodInput {
    #[must_use]
    pub fn new(kind: InputKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            timestamp: Utc::now(),
        }
    }

    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(InputKind::Text, value)
    }

    #[must_use]
    pub fn emoji(value: impl Into<String>) -> Self {
        Self::new(InputKind::Emoji, value)
    }

    #[must_use]
    pub fn selection(value: impl Into<String>) -> Self {
        Self::new(InputKind::Selection, value)
    }
}

/// Rule-based classifier over the static keyword and glyph tables.
#[derive(Debug, Clone)]
pub struct MoodClassifier<'a> {
    moods: &'a MoodTable,
    templates: &'a TemplateBook,
    emoji: HashMap<&'static str, MoodId>,
}

impl Default for MoodClassifier<'static> {
    fn default() -> Self {
        Self::new(&DEFAULT_MOODS, &DEFAULT_TEMPLATES)
    }
}

impl<'a> MoodClassifier<'a> {
    #[must_use]
    pub fn new(moods: &'a MoodTable, templates: &'a TemplateBook) -> Self {
        // collect() inserts in order, so the last duplicate wins
        let emoji = EMOJI_MOODS.iter().copied().collect();
        Self { moods, templates, emoji }
    }

    /// Dispatch on the input's kind.
    #[must_use]
    pub fn classify(&self, input: &MoodInput) -> Option<&'a Mood> {
        let mood = match input.kind {
            InputKind::Text => self.classify_text(&input.value),
            InputKind::Emoji => self.classify_emoji(&input.value),
            InputKind::Selection => self.classify_selection(&input.value),
        };
        log::debug!(
            "Classified {} input {:?} as {:?}",
            input.kind,
            input.value,
            mood.map(|m| m.id)
        );
        mood
    }

    /// Keyword scoring: each keyword found as a substring of the lower-cased
    /// text counts once. Highest nonzero score wins; ties go to the mood
    /// declared first.
    ///
    /// ```
    /// use moodmuse::classifier::MoodClassifier;
    /// use moodmuse::mood::MoodId;
    ///
    /// let classifier = MoodClassifier::default();
    /// let mood = classifier.classify_text("I'm feeling so happy and joyful today");
    /// assert_eq!(mood.map(|m| m.id), Some(MoodId::Happy));
    /// assert!(classifier.classify_text("").is_none());
    /// ```
    #[must_use]
    pub fn classify_text(&self, text: &str) -> Option<&'a Mood> {
        let text = text.to_lowercase();
        let mut best: Option<(MoodId, usize)> = None;

        for (mood, keywords) in MOOD_KEYWORDS {
            let score = keywords.iter().filter(|keyword| text.contains(*keyword)).count();
            log::trace!("Keyword score for `{mood}': {score}");
            if score > 0 && best.map_or(true, |(_, top)| score > top) {
                best = Some((mood, score));
            }
        }

        best.and_then(|(mood, _)| self.moods.get(mood))
    }

    /// Exact glyph lookup.
    #[must_use]
    pub fn classify_emoji(&self, glyph: &str) -> Option<&'a Mood> {
        self.emoji.get(glyph).and_then(|mood| self.moods.get(*mood))
    }

    /// Direct identifier lookup.
    #[must_use]
    pub fn classify_selection(&self, id: &str) -> Option<&'a Mood> {
        self.moods.find(id)
    }

    /// A short encouraging line for the detected mood.
    pub fn insight<R: RandomSource + ?Sized>(&self, mood: &Mood, rng: &mut R) -> String {
        self.templates.insight(mood.id, rng)
    }

    /// Glyphs that classify to `mood`, in table order.
    #[must_use]
    pub fn emoji_for(&self, mood: MoodId) -> Vec<&'static str> {
        EMOJI_MOODS
            .iter()
            .filter(|(glyph, _)| self.emoji.get(glyph) == Some(&mood))
            .map(|(glyph, _)| *glyph)
            .fold(Vec::new(), |mut glyphs, glyph| {
                if !glyphs.contains(&glyph) {
                    glyphs.push(glyph);
                }
                glyphs
            })
    }
}
