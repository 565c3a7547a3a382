use clap::Args;
use std::path::PathBuf;

use gstash::ops::{self, StashUnstagedOptions};
use gstash::utils::error::StashResult;

use crate::commands::CliCommand;
use crate::term::progress::StepProgress;

#[derive(Debug, Hash, PartialEq, Eq, Clone, Default, Args)]
pub(crate) struct UnstagedCommand {
    /// The work directory
    pub path: Option<PathBuf>,

    /// Use specified config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Message of the new entry
    #[arg(short, long, default_value = "")]
    pub message: String,
}

impl CliCommand for UnstagedCommand {
    fn exec(self) -> StashResult {
        let progress = StepProgress::default();
        ops::stash_unstaged(self.into(), &progress)
    }
}

impl From<UnstagedCommand> for StashUnstagedOptions {
    fn from(value: UnstagedCommand) -> Self {
        StashUnstagedOptions::new(value.path, value.config, value.message)
    }
}
