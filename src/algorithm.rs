//! Track/mood compatibility scoring.
//!
//! Scores how well a track suits a mood from the distance between their
//! energy/valence coordinates, plus a bonus when the track is explicitly
//! tagged with the mood.

use crate::catalog::Track;
use crate::mood::Mood;
use std::cmp::Ordering;

/// Type-safe scoring context with immutable parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringContext {
    /// Added when the track carries the mood's id as a tag
    pub tag_bonus: f64,
    /// Maximum per-axis distance for an untagged track to be a candidate
    pub filter_tolerance: f64,
    /// Width of the energy/valence axes
    pub axis_scale: f64,
}

impl Default for ScoringContext {
    fn default() -> Self {
        Self {
            tag_bonus: 0.3,
            filter_tolerance: 3.0,
            axis_scale: 10.0,
        }
    }
}

impl ScoringContext {
    /// Highest score [`compatibility_score`] can return
    #[must_use]
    pub fn max_score(&self) -> f64 {
        1.0 + self.tag_bonus
    }
}

/// Closeness on one axis, 1.0 for identical values down to 0.0 at a full
/// scale apart. Out-of-range inputs are clamped rather than rejected.
#[inline]
fn axis_closeness(a: f64, b: f64, scale: f64) -> f64 {
    (1.0 - (a - b).abs() / scale).clamp(0.0, 1.0)
}

/// Energy/valence closeness without the tag bonus, in `[0, 1]`.
#[must_use]
pub fn base_compatibility(track: &Track, mood: &Mood, context: &ScoringContext) -> f64 {
    let energy_score = axis_closeness(track.energy, mood.energy, context.axis_scale);
    let valence_score = axis_closeness(track.valence, mood.valence, context.axis_scale);
    (energy_score + valence_score) / 2.0
}

/// Affinity of `track` for `mood`, in `[0, 1 + tag_bonus]`.
///
/// ```text
/// score = (closeness(energy) + closeness(valence)) / 2 + tag_bonus?
/// ```
///
/// # Examples
///
/// ```
/// use moodmuse::algorithm::{compatibility_score, ScoringContext};
/// use moodmuse::catalog::DEFAULT_CATALOG;
/// use moodmuse::mood::{MoodId, DEFAULT_MOODS};
///
/// let happy = DEFAULT_MOODS.get(MoodId::Happy).unwrap();
/// let track = DEFAULT_CATALOG.get("happy-1").unwrap();
/// let score = compatibility_score(track, happy, &ScoringContext::default());
/// assert!((score - 1.3).abs() < 1e-9);
/// ```
#[must_use]
pub fn compatibility_score(track: &Track, mood: &Mood, context: &ScoringContext) -> f64 {
    let base = base_compatibility(track, mood, context);
    let bonus = if track.has_tag(mood.id.as_str()) {
        context.tag_bonus
    } else {
        0.0
    };
    let score = base + bonus;
    log::trace!("Scored `{}' against `{}': {:.3}", track.id, mood.id, score);
    score
}

/// Whether `track` is considered at all for `mood`: tagged with the mood, or
/// within the tolerance on both axes.
#[must_use]
pub fn is_candidate(track: &Track, mood: &Mood, context: &ScoringContext) -> bool {
    track.has_tag(mood.id.as_str())
        || ((track.energy - mood.energy).abs() <= context.filter_tolerance
            && (track.valence - mood.valence).abs() <= context.filter_tolerance)
}

/// Score every candidate in `tracks` and order them best first.
///
/// The sort is stable, so equal scores keep their input order.
#[must_use]
pub fn rank_tracks<'a, I>(tracks: I, mood: &Mood, context: &ScoringContext) -> Vec<(&'a Track, f64)>
where
    I: IntoIterator<Item = &'a Track>,
{
    let mut ranked: Vec<(&Track, f64)> = tracks
        .into_iter()
        .filter(|track| is_candidate(track, mood, context))
        .map(|track| (track, compatibility_score(track, mood, context)))
        .collect();

    ranked.sort_by(|(_, a), (_, b)| b.partial_cmp(a).unwrap_or(Ordering::Equal));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DEFAULT_CATALOG;
    use crate::mood::{MoodId, DEFAULT_MOODS};

    fn track(id: &str, tags: &[&str], energy: f64, valence: f64) -> Track {
        Track {
            id: id.to_string(),
            title: id.to_string(),
            artist: "Test".to_string(),
            album: "Test".to_string(),
            duration: 200,
            mood_tags: tags.iter().map(|t| t.to_string()).collect(),
            energy,
            valence,
            genre: "pop".to_string(),
            cover_url: String::new(),
        }
    }

    fn mood(id: MoodId) -> &'static Mood {
        DEFAULT_MOODS.get(id).unwrap()
    }

    #[test]
    fn test_exact_match_with_tag_scores_maximum() {
        let context = ScoringContext::default();
        let t = track("t", &["happy"], 8.0, 9.0);
        let score = compatibility_score(&t, mood(MoodId::Happy), &context);
        assert!((score - context.max_score()).abs() < 1e-9);
    }

    #[test]
    fn test_score_formula() {
        let context = ScoringContext::default();
        // calm is (4, 7); distances 2 and 3
        let t = track("t", &["upbeat"], 6.0, 4.0);
        let score = compatibility_score(&t, mood(MoodId::Calm), &context);
        assert!((score - 0.75).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn test_tag_bonus_only_for_matching_id() {
        let context = ScoringContext::default();
        let tagged = track("a", &["calm"], 4.0, 7.0);
        let untagged = track("b", &["peaceful"], 4.0, 7.0);
        let calm = mood(MoodId::Calm);
        let diff = compatibility_score(&tagged, calm, &context)
            - compatibility_score(&untagged, calm, &context);
        assert!((diff - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_scores_stay_in_range_for_catalog() {
        let context = ScoringContext::default();
        for t in DEFAULT_CATALOG.tracks() {
            for m in DEFAULT_MOODS.iter() {
                let score = compatibility_score(t, m, &context);
                assert!((0.0..=1.3 + 1e-9).contains(&score), "{} vs {}: {}", t.id, m.id, score);
            }
        }
    }

    #[test]
    fn test_out_of_range_values_do_not_escape_bounds() {
        let context = ScoringContext::default();
        let wild = track("wild", &["angry"], -40.0, 55.0);
        let score = compatibility_score(&wild, mood(MoodId::Angry), &context);
        assert!(score.is_finite());
        assert!((0.0..=context.max_score()).contains(&score));
    }

    #[test]
    fn test_candidate_filter() {
        let context = ScoringContext::default();
        let angry = mood(MoodId::Angry); // (9, 2)
        assert!(is_candidate(&track("tagged", &["angry"], 0.0, 10.0), angry, &context));
        assert!(is_candidate(&track("near", &[], 6.0, 5.0), angry, &context));
        assert!(!is_candidate(&track("far", &[], 6.0, 5.5), angry, &context));
    }

    #[test]
    fn test_ranking_is_stable_for_ties() {
        let context = ScoringContext::default();
        let tracks = vec![
            track("first", &[], 7.0, 9.0),
            track("second", &[], 9.0, 9.0),
            track("best", &["happy"], 8.0, 9.0),
        ];
        let ranked = rank_tracks(&tracks, mood(MoodId::Happy), &context);
        let ids: Vec<&str> = ranked.iter().map(|(t, _)| t.id.as_str()).collect();
        assert_eq!(ids, vec!["best", "first", "second"]);
    }
}
