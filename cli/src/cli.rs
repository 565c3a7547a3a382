use clap::{Parser, Subcommand};

use crate::commands::*;

#[derive(Parser)]
#[command(
    name = "gstash",
    author,
    version,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help(true)
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Stash all tracked changes
    Save(SaveCommand),

    /// Stash all tracked changes, keep staged ones in the index
    #[command(name = "keep-index")]
    KeepIndex(KeepIndexCommand),

    /// Stash tracked and untracked changes
    #[command(name = "include-untracked")]
    IncludeUntracked(IncludeUntrackedCommand),

    /// Drop a stash entry, the newest one by default
    Drop(DropCommand),

    /// Apply a stash entry and drop it
    Pop(PopCommand),

    /// Apply a stash entry
    Apply(ApplyCommand),

    /// Show the patch of a stash entry
    Show(ShowCommand),

    /// Print the commit hash of a stash entry
    Hash(HashCommand),

    /// Stash staged changes only
    Staged(StagedCommand),

    /// Stash unstaged changes only
    Unstaged(UnstagedCommand),

    /// Change the message of a stash entry
    Rename(RenameCommand),
}
