//! # Shell Completion Module
//!
//! Completion scripts for the MoodMuse command line, plus the word lists the
//! hidden `complete-moods` / `complete-tracks` commands print for dynamic
//! completion of `--mood` and `--like`/`--dislike` values.
//!
//! ```bash
//! moodmuse completion bash > ~/.local/share/bash-completion/completions/moodmuse
//! moodmuse completion zsh > ~/.config/zsh/completions/_moodmuse
//! ```

use crate::catalog::Catalog;
use crate::mood::MoodTable;
use clap::Command;
use clap_complete::{generate, Generator, Shell as CompletionShell};
use std::io;

/// Generate shell completions for the given shell
pub fn generate_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

/// Convert our Shell enum to clap_complete's Shell enum
#[must_use]
pub fn shell_to_completion_shell(shell: &crate::cli::Shell) -> CompletionShell {
    match shell {
        crate::cli::Shell::Bash => CompletionShell::Bash,
        crate::cli::Shell::Zsh => CompletionShell::Zsh,
        crate::cli::Shell::Fish => CompletionShell::Fish,
        crate::cli::Shell::PowerShell => CompletionShell::PowerShell,
        crate::cli::Shell::Elvish => CompletionShell::Elvish,
    }
}

/// Mood identifiers accepted by `--mood`
#[must_use]
pub fn mood_completions(moods: &MoodTable) -> Vec<String> {
    moods.iter().map(|mood| mood.id.to_string()).collect()
}

/// Track identifiers, sorted
#[must_use]
pub fn track_completions(catalog: &Catalog) -> Vec<String> {
    let mut ids: Vec<String> = catalog.tracks().iter().map(|track| track.id.clone()).collect();
    ids.sort();
    ids
}
