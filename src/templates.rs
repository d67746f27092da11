//! Curated text templates and the complementary-mood adjacency table.
//!
//! Everything here is static configuration keyed by [`MoodId`]. A mood
//! without curated entries falls back to a generic line instead of failing.

use crate::mood::MoodId;
use crate::random::{self, RandomSource};
use std::collections::HashMap;

pub const FALLBACK_NAME: &str = "Mood Music";
pub const FALLBACK_DESCRIPTION: &str = "A personalized playlist created just for your current mood.";
pub const FALLBACK_INSIGHT: &str = "Let's create something special that matches your unique mood.";

/// Name, description and insight templates plus mood adjacency.
#[derive(Debug, Clone, Default)]
pub struct TemplateBook {
    names: HashMap<MoodId, Vec<String>>,
    descriptions: HashMap<MoodId, Vec<String>>,
    insights: HashMap<MoodId, Vec<String>>,
    complementary: HashMap<MoodId, Vec<MoodId>>,
}

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| (*line).to_string()).collect()
}

impl TemplateBook {
    /// A book with no curated entries; every lookup falls back.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_names(mut self, mood: MoodId, names: &[&str]) -> Self {
        self.names.insert(mood, owned(names));
        self
    }

    #[must_use]
    pub fn with_descriptions(mut self, mood: MoodId, descriptions: &[&str]) -> Self {
        self.descriptions.insert(mood, owned(descriptions));
        self
    }

    #[must_use]
    pub fn with_insights(mut self, mood: MoodId, insights: &[&str]) -> Self {
        self.insights.insert(mood, owned(insights));
        self
    }

    #[must_use]
    pub fn with_complementary(mut self, mood: MoodId, complementary: &[MoodId]) -> Self {
        self.complementary.insert(mood, complementary.to_vec());
        self
    }

    /// Up to two neighbouring moods used to add tonal variety.
    #[must_use]
    pub fn complementary(&self, mood: MoodId) -> &[MoodId] {
        self.complementary
            .get(&mood)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn playlist_name<R: RandomSource + ?Sized>(&self, mood: MoodId, rng: &mut R) -> String {
        pick_or(&self.names, mood, rng, FALLBACK_NAME)
    }

    pub fn playlist_description<R: RandomSource + ?Sized>(&self, mood: MoodId, rng: &mut R) -> String {
        pick_or(&self.descriptions, mood, rng, FALLBACK_DESCRIPTION)
    }

    pub fn insight<R: RandomSource + ?Sized>(&self, mood: MoodId, rng: &mut R) -> String {
        pick_or(&self.insights, mood, rng, FALLBACK_INSIGHT)
    }

    /// The curated book shipped with the application.
    #[must_use]
    pub fn curated() -> Self {
        use MoodId::*;

        Self::empty()
            .with_complementary(Happy, &[Energetic, Romantic])
            .with_complementary(Sad, &[Nostalgic, Calm])
            .with_complementary(Energetic, &[Happy, Angry])
            .with_complementary(Calm, &[Romantic, Nostalgic])
            .with_complementary(Anxious, &[Calm, Sad])
            .with_complementary(Romantic, &[Happy, Calm])
            .with_complementary(Angry, &[Energetic, Sad])
            .with_complementary(Nostalgic, &[Sad, Romantic])
            .with_names(Happy, &["Sunshine Vibes", "Joy Unleashed", "Happy Hearts", "Golden Moments", "Bright Day Ahead"])
            .with_names(Sad, &["Healing Rain", "Gentle Tears", "Quiet Reflections", "Emotional Release", "Soft Solace"])
            .with_names(Energetic, &["Power Surge", "Electric Energy", "High Voltage", "Unstoppable Force", "Dynamic Drive"])
            .with_names(Calm, &["Peaceful Waters", "Zen Garden", "Tranquil Moments", "Serene Spaces", "Quiet Mind"])
            .with_names(Anxious, &["Soothing Calm", "Anxiety Relief", "Peaceful Mind", "Gentle Comfort", "Stress Release"])
            .with_names(Romantic, &["Love Letters", "Romantic Evening", "Hearts Entwined", "Passion Play", "Love Songs"])
            .with_names(Angry, &["Controlled Chaos", "Raw Energy", "Fierce Fire", "Powerful Release", "Intense Emotions"])
            .with_names(Nostalgic, &["Memory Lane", "Yesterday's Dreams", "Time Capsule", "Golden Years", "Sweet Memories"])
            .with_descriptions(Happy, &[
                "A collection of uplifting songs to amplify your joy and spread positive vibes.",
                "Bright melodies and cheerful rhythms to celebrate your happiness.",
                "Feel-good music that matches your radiant energy and optimistic spirit.",
            ])
            .with_descriptions(Sad, &[
                "Gentle melodies to accompany you through this emotional moment.",
                "Comforting songs that understand and validate your feelings.",
                "A musical companion for processing emotions and finding healing.",
            ])
            .with_descriptions(Energetic, &[
                "High-energy tracks to fuel your motivation and power your day.",
                "Dynamic beats that match your unstoppable energy and drive.",
                "Adrenaline-pumping music for when you're ready to conquer the world.",
            ])
            .with_descriptions(Calm, &[
                "Peaceful melodies to enhance your tranquil state of mind.",
                "Serene soundscapes for meditation, relaxation, and inner peace.",
                "Gentle music that honors your calm and centered energy.",
            ])
            .with_descriptions(Anxious, &[
                "Soothing tracks carefully selected to ease anxiety and bring comfort.",
                "Calming melodies to help quiet a busy mind and reduce stress.",
                "Gentle musical therapy for moments when you need extra support.",
            ])
            .with_descriptions(Romantic, &[
                "Intimate melodies perfect for love, connection, and romantic moments.",
                "Heartfelt songs that capture the beauty and magic of love.",
                "Romantic soundtracks for creating special memories with someone special.",
            ])
            .with_descriptions(Angry, &[
                "Powerful music that channels intense emotions into something constructive.",
                "Raw, honest tracks that understand and validate your anger.",
                "Intense melodies for when you need to release and transform strong emotions.",
            ])
            .with_descriptions(Nostalgic, &[
                "Bittersweet melodies that honor memories and celebrate the past.",
                "Wistful songs that transport you to cherished moments in time.",
                "Musical time travel through the beautiful landscape of memory.",
            ])
            .with_insights(Happy, &[
                "Your positive energy is contagious! Let's amplify it with uplifting melodies.",
                "Happiness looks good on you! Time for some feel-good music.",
                "Your joy deserves a soundtrack! Let's create something bright and beautiful.",
            ])
            .with_insights(Sad, &[
                "It's okay to feel this way. Music can be a gentle companion through difficult moments.",
                "Let the music wrap around you like a warm hug. You're not alone in this feeling.",
                "Sometimes sad songs help us process our emotions. Let's find something healing.",
            ])
            .with_insights(Energetic, &[
                "Your energy is electric! Let's channel it into some high-powered beats.",
                "Feeling unstoppable? Your playlist should match that incredible energy!",
                "Time to turn up the volume on life! Your energy deserves an epic soundtrack.",
            ])
            .with_insights(Calm, &[
                "Your peaceful state is beautiful. Let's enhance it with serene melodies.",
                "In this moment of tranquility, let music be your meditation.",
                "Your calm energy is grounding. Let's create a soundscape that honors this peace.",
            ])
            .with_insights(Anxious, &[
                "Take a deep breath. Let's find music that helps ease your mind.",
                "Your feelings are valid. Sometimes the right song can be incredibly soothing.",
                "Let's create a gentle musical space where you can find some relief.",
            ])
            .with_insights(Romantic, &[
                "Love is in the air! Let's craft the perfect romantic atmosphere.",
                "Your heart is singing - let's find music that matches its rhythm.",
                "Romance deserves the perfect soundtrack. Let's create something magical.",
            ])
            .with_insights(Angry, &[
                "Sometimes we need music that understands our fire. Let's channel this energy.",
                "Your intensity is powerful. Let's find music that honors these strong feelings.",
                "It's okay to feel angry. Let music be your outlet and release.",
            ])
            .with_insights(Nostalgic, &[
                "Memories are precious. Let's create a soundtrack for this beautiful nostalgia.",
                "Looking back can be bittersweet. Let music be your time machine.",
                "Your memories deserve a beautiful musical tribute. Let's honor them together.",
            ])
    }
}

fn pick_or<R: RandomSource + ?Sized>(
    table: &HashMap<MoodId, Vec<String>>,
    mood: MoodId,
    rng: &mut R,
    fallback: &str,
) -> String {
    match table.get(&mood).and_then(|lines| random::pick(lines, rng)) {
        Some(line) => line.clone(),
        None => {
            log::debug!("No curated template for `{mood}', using fallback");
            fallback.to_string()
        }
    }
}

lazy_static::lazy_static! {
    /// Process-wide curated template book
    pub static ref DEFAULT_TEMPLATES: TemplateBook = TemplateBook::curated();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;

    #[test]
    fn test_every_mood_has_curated_entries() {
        let book = TemplateBook::curated();
        let mut rng = ScriptedRandom::zeros();
        for mood in MoodId::ALL {
            assert_ne!(book.playlist_name(mood, &mut rng), FALLBACK_NAME);
            assert_ne!(book.playlist_description(mood, &mut rng), FALLBACK_DESCRIPTION);
            assert_ne!(book.insight(mood, &mut rng), FALLBACK_INSIGHT);
            let neighbours = book.complementary(mood);
            assert_eq!(neighbours.len(), 2);
            assert!(!neighbours.contains(&mood), "{mood} must not complement itself");
        }
    }

    #[test]
    fn test_pick_follows_random_source() {
        let book = TemplateBook::curated();
        let name = book.playlist_name(MoodId::Nostalgic, &mut ScriptedRandom::new(vec![1]));
        assert_eq!(name, "Yesterday's Dreams");
    }

    #[test]
    fn test_fallbacks_for_uncurated_mood() {
        let book = TemplateBook::empty().with_names(MoodId::Happy, &["Only Happy"]);
        let mut rng = ScriptedRandom::zeros();
        assert_eq!(book.playlist_name(MoodId::Happy, &mut rng), "Only Happy");
        assert_eq!(book.playlist_name(MoodId::Sad, &mut rng), FALLBACK_NAME);
        assert_eq!(book.playlist_description(MoodId::Sad, &mut rng), FALLBACK_DESCRIPTION);
        assert_eq!(book.insight(MoodId::Sad, &mut rng), FALLBACK_INSIGHT);
        assert!(book.complementary(MoodId::Sad).is_empty());
    }

    #[test]
    fn test_empty_template_list_falls_back() {
        let book = TemplateBook::empty().with_names(MoodId::Calm, &[]);
        assert_eq!(book.playlist_name(MoodId::Calm, &mut ScriptedRandom::zeros()), FALLBACK_NAME);
    }
}
