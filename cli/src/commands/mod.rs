mod entry;
mod rename;
mod save;
mod staged;
mod unstaged;

use gstash::utils::error::StashResult;

pub(crate) use entry::{ApplyCommand, DropCommand, HashCommand, PopCommand, ShowCommand};
pub(crate) use rename::RenameCommand;
pub(crate) use save::{IncludeUntrackedCommand, KeepIndexCommand, SaveCommand};
pub(crate) use staged::StagedCommand;
pub(crate) use unstaged::UnstagedCommand;

pub(crate) trait CliCommand {
    fn exec(self) -> StashResult;
}
