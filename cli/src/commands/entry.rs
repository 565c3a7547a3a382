use clap::Args;
use std::path::PathBuf;

use gstash::ops::{self, EntryOptions};
use gstash::utils::error::StashResult;

use crate::commands::CliCommand;

#[derive(Debug, Hash, PartialEq, Eq, Clone, Default, Args)]
pub(crate) struct DropCommand {
    /// Position of the entry, the newest one when omitted
    pub index: Option<usize>,

    /// The work directory
    pub path: Option<PathBuf>,

    /// Use specified config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Hash, PartialEq, Eq, Clone, Default, Args)]
pub(crate) struct IndexedCommand {
    /// Position of the entry
    pub index: usize,

    /// The work directory
    pub path: Option<PathBuf>,

    /// Use specified config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Hash, PartialEq, Eq, Clone, Default, Args)]
pub(crate) struct PopCommand {
    #[command(flatten)]
    pub entry: IndexedCommand,
}

#[derive(Debug, Hash, PartialEq, Eq, Clone, Default, Args)]
pub(crate) struct ApplyCommand {
    #[command(flatten)]
    pub entry: IndexedCommand,
}

#[derive(Debug, Hash, PartialEq, Eq, Clone, Default, Args)]
pub(crate) struct ShowCommand {
    #[command(flatten)]
    pub entry: IndexedCommand,
}

#[derive(Debug, Hash, PartialEq, Eq, Clone, Default, Args)]
pub(crate) struct HashCommand {
    #[command(flatten)]
    pub entry: IndexedCommand,
}

impl CliCommand for DropCommand {
    fn exec(self) -> StashResult {
        ops::drop_stash(self.into())
    }
}

impl CliCommand for PopCommand {
    fn exec(self) -> StashResult {
        ops::pop_stash(self.entry.into())
    }
}

impl CliCommand for ApplyCommand {
    fn exec(self) -> StashResult {
        ops::apply_stash(self.entry.into())
    }
}

impl CliCommand for ShowCommand {
    fn exec(self) -> StashResult {
        ops::show_stash(self.entry.into())
    }
}

impl CliCommand for HashCommand {
    fn exec(self) -> StashResult {
        ops::stash_hash(self.entry.into())
    }
}

impl From<DropCommand> for EntryOptions {
    fn from(value: DropCommand) -> Self {
        EntryOptions::new(value.path, value.config, value.index)
    }
}

impl From<IndexedCommand> for EntryOptions {
    fn from(value: IndexedCommand) -> Self {
        EntryOptions::new(value.path, value.config, Some(value.index))
    }
}
