//! # MoodMuse - Mood Journaling & Playlists
//!
//! Tell MoodMuse how you feel, in words, with an emoji or by picking a mood,
//! and it builds a playlist that fits.
//!
//! ## Usage
//!
//! ```bash
//! # Detect a mood
//! moodmuse classify --text "so stressed about tomorrow"
//!
//! # Generate and keep a playlist
//! moodmuse generate --mood calm --save
//!
//! # Feedback on a saved playlist
//! moodmuse refine playlist-1718000000000 --like calm-1 --dislike focus-1
//!
//! # Saved playlists
//! moodmuse library list
//! ```

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser};
use log::{debug, info};
use moodmuse::algorithm::{self, ScoringContext};
use moodmuse::catalog::{Track, DEFAULT_CATALOG};
use moodmuse::classifier::{MoodClassifier, MoodInput};
use moodmuse::cli::{self, LibraryAction};
use moodmuse::completion;
use moodmuse::config::RuntimeConfig;
use moodmuse::library::Library;
use moodmuse::modes::{self, ModeId};
use moodmuse::mood::DEFAULT_MOODS;
use moodmuse::playlist::{Playlist, PlaylistAssembler};
use moodmuse::random::RandomSource;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Seeded source when asked for, thread-local otherwise
fn random_source(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => {
            debug!("Using seeded random source ({seed})");
            Box::new(StdRng::seed_from_u64(seed))
        }
        None => Box::new(rand::thread_rng()),
    }
}

fn print_track(index: usize, track: &Track) {
    println!(
        "  {:>2}. {:<12} {} - {} [{}] ({}, energy {}, valence {})",
        index + 1,
        track.id,
        track.artist,
        track.title,
        track.genre,
        track.duration_display(),
        track.energy,
        track.valence
    );
}

fn print_playlist(playlist: &Playlist) {
    let minutes = playlist.total_duration() / 60;
    println!("{} {} ({})", playlist.mood.emoji, playlist.name, playlist.id);
    println!("{}", playlist.description);
    println!(
        "Mood: {} | {} tracks, {} min | plays: {}{}{}",
        playlist.mood.name,
        playlist.tracks.len(),
        minutes,
        playlist.play_count,
        if playlist.is_favorite { " | saved" } else { "" },
        playlist
            .user_rating
            .map(|rating| format!(" | rated {rating}/5"))
            .unwrap_or_default()
    );
    for (i, track) in playlist.tracks.iter().enumerate() {
        print_track(i, track);
    }
}

fn load_library(config: &RuntimeConfig) -> Result<Library> {
    Library::load(&config.library_path)
}

/// Main entry point for MoodMuse.
///
/// Logging is controlled through `RUST_LOG`:
/// - `RUST_LOG=debug moodmuse generate --mood calm`
/// - `RUST_LOG=moodmuse::algorithm=trace moodmuse tracks --mood sad`
fn main() -> Result<()> {
    env_logger::init();

    let args = cli::Args::parse();
    let classifier = MoodClassifier::default();
    let assembler = PlaylistAssembler::default();

    match args.command {
        cli::Command::Moods => {
            for mood in DEFAULT_MOODS.iter() {
                println!(
                    "{} {:<10} energy {:>2}  valence {:>2}  {}",
                    mood.emoji, mood.id, mood.energy, mood.valence, mood.description
                );
            }
        }
        cli::Command::Classify { input } => {
            let input = MoodInput::try_from(input)?;
            let mood = classifier
                .classify(&input)
                .ok_or_else(|| anyhow!("No mood recognised in {} input '{}'", input.kind, input.value))?;
            println!("{} {} - {}", mood.emoji, mood.name, mood.description);
            println!("{}", classifier.insight(mood, &mut rand::thread_rng()));
        }
        cli::Command::Generate { input, seed, json, save } => {
            let input = MoodInput::try_from(input)?;
            let detected = classifier.classify(&input);
            let config = if save {
                Some(RuntimeConfig::resolve(args.library)?)
            } else {
                None
            };

            let Some(mood) = detected else {
                if let Some(config) = &config {
                    let mut library = load_library(config)?;
                    library.record_mood(input.clone(), None);
                    library.save_to(&config.library_path)?;
                }
                return Err(anyhow!("No mood recognised in {} input '{}'", input.kind, input.value));
            };

            info!("Generating playlist for mood: {}", mood.id);
            let mut rng = random_source(seed);
            let playlist = assembler.generate(mood, &mut rng);

            if json {
                println!("{}", serde_json::to_string_pretty(&playlist)?);
            } else {
                println!("{}\n", classifier.insight(mood, &mut rng));
                print_playlist(&playlist);
            }

            if let Some(config) = config {
                let mut library = load_library(&config)?;
                library.record_mood(input, Some(mood.id));
                library.save(playlist);
                library.save_to(&config.library_path)?;
            }
        }
        cli::Command::Refine { playlist, liked, disliked } => {
            let config = RuntimeConfig::resolve(args.library)?;
            let mut library = load_library(&config)?;
            let original = library
                .get(&playlist)
                .with_context(|| format!("No saved playlist with id '{playlist}'"))?;

            let liked: Vec<&str> = liked.iter().map(String::as_str).collect();
            let disliked: Vec<&str> = disliked.iter().map(String::as_str).collect();
            info!("Refining {playlist}: {} liked, {} disliked", liked.len(), disliked.len());

            let refined = assembler.refine(original, &liked, &disliked);
            print_playlist(&refined);
            library.replace(refined)?;
            library.save_to(&config.library_path)?;
        }
        cli::Command::Tracks { genre, search, mood, limit } => {
            let mut tracks: Vec<&Track> = match &search {
                Some(query) => DEFAULT_CATALOG.search(query),
                None => DEFAULT_CATALOG.tracks().iter().collect(),
            };
            if let Some(genre) = &genre {
                tracks.retain(|track| &track.genre == genre);
            }

            if let Some(mood_id) = mood {
                let mood = classifier
                    .classify_selection(&mood_id)
                    .ok_or_else(|| anyhow!("Unknown mood: '{mood_id}'. Run `moodmuse moods` for the list"))?;
                let context = ScoringContext::default();
                for (i, (track, score)) in algorithm::rank_tracks(tracks, mood, &context)
                    .into_iter()
                    .take(limit)
                    .enumerate()
                {
                    print_track(i, track);
                    println!("      compatibility {score:.2}");
                }
            } else {
                for (i, track) in tracks.into_iter().take(limit).enumerate() {
                    print_track(i, track);
                }
            }
        }
        cli::Command::Discover { mode, count, seed } => {
            if let Some(mode) = mode {
                let mode = mode.parse::<ModeId>()?.mode();
                println!("{}: {}", mode.name, mode.description);
                for (i, track) in mode.recommend(&DEFAULT_CATALOG, count).into_iter().enumerate() {
                    print_track(i, track);
                }
            } else {
                let mut rng = random_source(seed);
                let discovery = modes::discover(&DEFAULT_CATALOG, count, &mut rng);
                println!("Trending genres: {}", discovery.trending_genres.join(", "));
                for (i, track) in discovery.tracks.into_iter().enumerate() {
                    print_track(i, track);
                }
            }
        }
        cli::Command::Library { action } => {
            let config = RuntimeConfig::resolve(args.library)?;
            let mut library = load_library(&config)?;

            match action {
                LibraryAction::List { search } => {
                    let playlists: Vec<&Playlist> = match &search {
                        Some(query) => library.search(query),
                        None => library.playlists().iter().collect(),
                    };
                    if playlists.is_empty() {
                        println!("No saved playlists");
                    }
                    for playlist in playlists {
                        println!(
                            "{}  {} {:<20} {:>2} tracks  plays {}",
                            playlist.id,
                            playlist.mood.emoji,
                            playlist.name,
                            playlist.tracks.len(),
                            playlist.play_count
                        );
                    }
                }
                LibraryAction::Show { id } => {
                    let playlist = library
                        .get(&id)
                        .with_context(|| format!("No saved playlist with id '{id}'"))?;
                    print_playlist(playlist);
                }
                LibraryAction::Remove { id } => {
                    library
                        .remove(&id)
                        .with_context(|| format!("No saved playlist with id '{id}'"))?;
                    library.save_to(&config.library_path)?;
                    println!("Removed {id}");
                }
                LibraryAction::Play { id } => {
                    let plays = library.record_play(&id)?;
                    library.save_to(&config.library_path)?;
                    println!("Playing {id} (play #{plays})");
                }
                LibraryAction::Rate { id, rating } => {
                    library.rate(&id, rating)?;
                    library.save_to(&config.library_path)?;
                    println!("Rated {id} {rating}/5");
                }
                LibraryAction::Stats => {
                    let stats = library.stats();
                    println!("Playlists created: {}", stats.playlists_created);
                    println!("Songs loved:       {}", stats.songs_loved);
                    println!("Moods tracked:     {}", stats.moods_tracked);
                    println!("Total plays:       {}", stats.total_plays);
                    if let Some(mood) = stats.top_mood.and_then(|id| DEFAULT_MOODS.get(id)) {
                        println!("Most common mood:  {} {}", mood.emoji, mood.name);
                    }
                }
            }
        }
        cli::Command::Completion { shell } => {
            let mut cmd = cli::Args::command();
            completion::generate_completions(completion::shell_to_completion_shell(&shell), &mut cmd);
        }
        cli::Command::CompleteMoods => {
            for mood in completion::mood_completions(&DEFAULT_MOODS) {
                println!("{mood}");
            }
        }
        cli::Command::CompleteTracks => {
            for track in completion::track_completions(&DEFAULT_CATALOG) {
                println!("{track}");
            }
        }
    }

    Ok(())
}
