mod entry;
mod rename;
mod save;
mod schedule;
mod stash_staged;
mod stash_unstaged;
mod transaction;

use std::env;
use std::path::{Path, PathBuf};

pub use entry::{apply_stash, drop_stash, pop_stash, show_stash, stash_hash, EntryOptions};
pub use rename::{rename_entry, rename_stash, RenameOptions, RENAME_STASH};
pub use save::{save_stash, SaveMode, SaveOptions};
pub use schedule::{position_after, ScheduledEntry, StashSchedule};
pub use stash_staged::{save_staged_changes, stash_staged, StashStagedOptions, STASH_STAGED};
pub use stash_unstaged::{
    stash_unstaged, stash_unstaged_changes, StashUnstagedOptions, STASH_UNSTAGED,
    UNSTAGED_MARKER_MESSAGE,
};
pub use transaction::{
    StepEffect, StepRecord, Transaction, TransactionError, TransactionReport,
};

/// the given directory, or the current one
pub(crate) fn work_dir(path: Option<impl AsRef<Path>>) -> PathBuf {
    match path {
        Some(path) => path.as_ref().to_path_buf(),
        None => env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Log what a failed compound operation left behind and hand the error on.
pub(crate) fn report_failure(err: TransactionError) -> anyhow::Error {
    err.log_partial_state();
    anyhow::Error::new(err)
}
