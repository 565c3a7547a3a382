use clap::Args;
use std::path::PathBuf;

use gstash::ops::{self, SaveMode, SaveOptions};
use gstash::utils::error::StashResult;

use crate::commands::CliCommand;

#[derive(Debug, Hash, PartialEq, Eq, Clone, Default, Args)]
pub(crate) struct SaveCommand {
    /// The work directory
    pub path: Option<PathBuf>,

    /// Use specified config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Message of the new entry
    #[arg(short, long, default_value = "")]
    pub message: String,
}

/// Same arguments as `save`, staged changes stay in the index.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Default, Args)]
pub(crate) struct KeepIndexCommand {
    #[command(flatten)]
    pub save: SaveCommand,
}

/// Same arguments as `save`, untracked files are stashed too.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Default, Args)]
pub(crate) struct IncludeUntrackedCommand {
    #[command(flatten)]
    pub save: SaveCommand,
}

impl SaveCommand {
    fn into_options(self, mode: SaveMode) -> SaveOptions {
        SaveOptions::new(self.path, self.config, self.message, Some(mode))
    }
}

impl CliCommand for SaveCommand {
    fn exec(self) -> StashResult {
        ops::save_stash(self.into())
    }
}

impl CliCommand for KeepIndexCommand {
    fn exec(self) -> StashResult {
        ops::save_stash(self.save.into_options(SaveMode::KeepIndex))
    }
}

impl CliCommand for IncludeUntrackedCommand {
    fn exec(self) -> StashResult {
        ops::save_stash(self.save.into_options(SaveMode::IncludeUntracked))
    }
}

impl From<SaveCommand> for SaveOptions {
    fn from(value: SaveCommand) -> Self {
        value.into_options(SaveMode::Normal)
    }
}
