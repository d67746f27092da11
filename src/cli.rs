//! # Command-Line Interface Module
//!
//! Defines the MoodMuse command line with Clap derive macros.
//!
//! ## Commands
//!
//! - `moods`: List the predefined moods
//! - `classify`: Detect a mood from text, an emoji or a direct selection
//! - `generate`: Build a playlist for a detected mood
//! - `refine`: Apply liked/disliked feedback to a saved playlist
//! - `tracks`: Browse and search the track catalog
//! - `discover`: Random picks and listening-mode recommendations
//! - `library`: Manage saved playlists
//!
//! ## Examples
//!
//! ```bash
//! moodmuse classify --text "feeling calm and relaxed"
//! moodmuse generate --emoji ⚡ --save
//! moodmuse refine playlist-1718000000000 --like calm-1 --dislike sad-2
//! ```

use crate::classifier::MoodInput;
use anyhow::{anyhow, Error};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shell types supported for completion generation
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

/// Main application arguments structure.
#[derive(Parser, Debug)]
#[command(name = "moodmuse")]
#[command(about = "MoodMuse: mood journaling and mood-matched playlists")]
#[command(version)]
pub struct Args {
    /// Library file for saved playlists and mood history
    ///
    /// Defaults to `library.json` in the platform data directory.
    #[arg(long, global = true, env = "MOODMUSE_LIBRARY")]
    pub library: Option<PathBuf>,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// How the user describes their mood. Exactly one must be given.
#[derive(ClapArgs, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct MoodArgs {
    /// Free text, e.g. "a bit stressed and tense today"
    #[arg(long)]
    pub text: Option<String>,

    /// A single emoji, e.g. 😊
    #[arg(long)]
    pub emoji: Option<String>,

    /// A mood identifier, e.g. calm
    #[arg(long = "mood", value_name = "MOOD")]
    pub selection: Option<String>,
}

impl TryFrom<MoodArgs> for MoodInput {
    type Error = Error;

    /// The argument group makes exactly one field present when parsed by
    /// clap; a hand-built `MoodArgs` with none is rejected.
    fn try_from(args: MoodArgs) -> Result<Self, Self::Error> {
        match (args.text, args.emoji, args.selection) {
            (Some(text), _, _) => Ok(MoodInput::text(text)),
            (_, Some(emoji), _) => Ok(MoodInput::emoji(emoji)),
            (_, _, Some(selection)) => Ok(MoodInput::selection(selection)),
            (None, None, None) => Err(anyhow!("One of --text, --emoji or --mood is required")),
        }
    }
}

/// Enumeration of all available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the predefined moods
    ///
    /// Shows each mood's identifier, glyph, energy and valence. The
    /// identifiers are what `--mood` accepts.
    Moods,

    /// Detect a mood without generating a playlist
    Classify {
        #[command(flatten)]
        input: MoodArgs,
    },

    /// Generate a playlist for a mood
    ///
    /// The playlist holds up to 15 catalog tracks that suit the detected
    /// mood, with a few tracks from neighbouring moods for variety.
    Generate {
        #[command(flatten)]
        input: MoodArgs,

        /// Seed the shuffle for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Print the playlist as JSON
        #[arg(long)]
        json: bool,

        /// Save the playlist and the mood entry to the library
        #[arg(long)]
        save: bool,
    },

    /// Refine a saved playlist with feedback
    ///
    /// Disliked tracks are removed; liked tracks bring in up to two
    /// catalog tracks of the same genre.
    Refine {
        /// Saved playlist id
        playlist: String,

        /// Track id you liked (repeatable)
        #[arg(long = "like", value_name = "TRACK")]
        liked: Vec<String>,

        /// Track id you disliked (repeatable)
        #[arg(long = "dislike", value_name = "TRACK")]
        disliked: Vec<String>,
    },

    /// Browse the track catalog
    Tracks {
        /// Only tracks of this genre
        #[arg(long)]
        genre: Option<String>,

        /// Case-insensitive search on title, artist, album and tags
        #[arg(long)]
        search: Option<String>,

        /// Rank tracks by compatibility with this mood
        #[arg(long)]
        mood: Option<String>,

        /// Maximum number of tracks shown
        #[arg(long, default_value = "12")]
        limit: usize,
    },

    /// Discover tracks at random or by listening mode
    Discover {
        /// focus, relaxation, motivation or sleep
        #[arg(long)]
        mode: Option<String>,

        /// Number of tracks
        #[arg(long, default_value = "8")]
        count: usize,

        /// Seed the random picks
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Manage saved playlists
    Library {
        #[command(subcommand)]
        action: LibraryAction,
    },

    /// Generate shell completions
    ///
    /// Usage: moodmuse completion bash > ~/.local/share/bash-completion/completions/moodmuse
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },

    /// List mood identifiers for completion (hidden command)
    #[command(hide = true)]
    CompleteMoods,

    /// List track identifiers for completion (hidden command)
    #[command(hide = true)]
    CompleteTracks,
}

/// Library management actions
#[derive(Subcommand, Debug)]
pub enum LibraryAction {
    /// List saved playlists
    List {
        /// Filter by playlist or mood name
        #[arg(long)]
        search: Option<String>,
    },

    /// Show the tracks of a saved playlist
    Show { id: String },

    /// Delete a saved playlist
    Remove { id: String },

    /// Record a play of a saved playlist
    Play { id: String },

    /// Rate a saved playlist from 1 to 5
    Rate {
        id: String,
        #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,
    },

    /// Show listening statistics
    Stats,
}
