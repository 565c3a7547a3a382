use clap::Args;
use std::path::PathBuf;

use gstash::ops::{self, StashStagedOptions};
use gstash::utils::error::StashResult;

use crate::commands::CliCommand;
use crate::term::progress::StepProgress;

#[derive(Debug, Hash, PartialEq, Eq, Clone, Default, Args)]
pub(crate) struct StagedCommand {
    /// The work directory
    pub path: Option<PathBuf>,

    /// Use specified config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Message of the new entry
    #[arg(short, long, default_value = "")]
    pub message: String,
}

impl CliCommand for StagedCommand {
    fn exec(self) -> StashResult {
        let progress = StepProgress::default();
        ops::stash_staged(self.into(), &progress)
    }
}

impl From<StagedCommand> for StashStagedOptions {
    fn from(value: StagedCommand) -> Self {
        StashStagedOptions::new(value.path, value.config, value.message)
    }
}
