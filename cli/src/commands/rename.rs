use clap::Args;
use std::path::PathBuf;

use gstash::ops::{self, RenameOptions};
use gstash::utils::error::StashResult;

use crate::commands::CliCommand;
use crate::term::progress::StepProgress;

#[derive(Debug, Hash, PartialEq, Eq, Clone, Default, Args)]
pub(crate) struct RenameCommand {
    /// Position of the entry
    pub index: usize,

    /// New message, the renamed entry moves to position 0
    pub message: String,

    /// The work directory
    pub path: Option<PathBuf>,

    /// Use specified config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl CliCommand for RenameCommand {
    fn exec(self) -> StashResult {
        let progress = StepProgress::default();
        ops::rename_stash(self.into(), &progress)
    }
}

impl From<RenameCommand> for RenameOptions {
    fn from(value: RenameCommand) -> Self {
        RenameOptions::new(value.path, value.config, value.index, value.message)
    }
}
