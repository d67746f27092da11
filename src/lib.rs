//! Mood journaling that turns how you feel into a playlist.
//!
//! Core modules:
//! - [`mood`] - The eight predefined moods and their energy/valence
//! - [`classifier`] - Mood detection from text, emoji or a direct pick
//! - [`algorithm`] - Track-to-mood compatibility scoring
//! - [`playlist`] - Playlist generation and feedback refinement
//! - [`catalog`] - The track catalog and its queries
//!
//! ### Supporting Modules
//!
//! - [`templates`] - Playlist names, descriptions, insights and mood adjacency
//! - [`modes`] - Listening modes and random discovery
//! - [`library`] - Saved playlists, mood history and stats
//! - [`random`] - Injectable randomness for shuffles and template picks
//! - [`config`] - Data directory and library location
//! - [`cli`] - Command-line interface definitions with clap integration
//! - [`completion`] - Shell completion generation
//!
//! ## Quick Start Example
//!
//! ```
//! use moodmuse::classifier::MoodClassifier;
//! use moodmuse::playlist::PlaylistAssembler;
//!
//! let classifier = MoodClassifier::default();
//! let mood = classifier
//!     .classify_text("feeling calm and relaxed")
//!     .expect("calm keywords");
//!
//! let playlist = PlaylistAssembler::default().generate(mood, &mut rand::thread_rng());
//! assert!(!playlist.tracks.is_empty() && playlist.tracks.len() <= 15);
//! println!("{}: {} tracks", playlist.name, playlist.tracks.len());
//! ```
//!
//! ## Matching
//!
//! Every mood and every track sits on the same two 0-10 axes, energy and
//! valence. A track is a candidate for a mood when both axes are within 3
//! points; its compatibility is the normalised closeness on both axes plus
//! a bonus of 0.3 when the track is tagged with the mood's id.
//!
//! A playlist is the best-scoring candidates for the mood, a few tracks
//! from complementary moods, shuffled and capped at 15 tracks.
//!
//! ## Error Handling
//!
//! Fallible operations return `anyhow::Result`. Lookups that can simply
//! miss (an unknown mood, an unrecognised emoji) return `Option`.

pub mod algorithm;
pub mod catalog;
pub mod classifier;
pub mod cli;
pub mod completion;
pub mod config;
pub mod library;
pub mod modes;
pub mod mood;
pub mod playlist;
pub mod random;
pub mod templates;
