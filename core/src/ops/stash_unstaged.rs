use std::path::{Path, PathBuf};

use crate::core::git::{CmdRunner, GitCmd};
use crate::core::repo::StashRepo;
use crate::core::stash::StashCommands;
use crate::ops::transaction::{StepEffect, Transaction, TransactionError, TransactionReport};
use crate::ops::{report_failure, work_dir};
use crate::utils::error::StashResult;
use crate::utils::logger;
use crate::utils::progress::Progress;
use crate::utils::style_message::StyleMessage;

pub const STASH_UNSTAGED: &str = "stash unstaged changes";

/// Message of the throwaway commit holding the index while unstaged changes are saved.
pub const UNSTAGED_MARKER_MESSAGE: &str = "[gstash] stashing unstaged changes";

pub struct StashUnstagedOptions {
    pub path: PathBuf,
    pub config_path: Option<PathBuf>,
    pub message: String,
}

impl StashUnstagedOptions {
    pub fn new(
        path: Option<impl AsRef<Path>>,
        config_path: Option<impl AsRef<Path>>,
        message: impl AsRef<str>,
    ) -> Self {
        Self {
            path: work_dir(path),
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            message: message.as_ref().to_string(),
        }
    }
}

pub fn stash_unstaged(options: StashUnstagedOptions, progress: &impl Progress) -> StashResult {
    let repo = StashRepo::open(&options.path, options.config_path.as_ref())?;
    logger::info(StyleMessage::ops_start(STASH_UNSTAGED, &repo.path));

    let report =
        stash_unstaged_changes(&repo.stash(), &options.message, progress).map_err(report_failure)?;
    Ok(StyleMessage::transaction_succ(
        report.operation,
        report.steps.len(),
    ))
}

/// Stash only what is not staged, staged changes stay staged.
///
/// 1. commit the index into a marker commit, skipping hooks
/// 2. save, which now only sees the unstaged changes
/// 3. soft reset the marker commit, putting the staged changes back in the index
///
/// A failing save leaves the marker commit on the current branch.
pub fn stash_unstaged_changes<R: CmdRunner>(
    stash: &StashCommands<'_, R>,
    message: &str,
    progress: &dyn Progress,
) -> Result<TransactionReport, TransactionError> {
    let runner = stash.runner();
    let mut tx = Transaction::new(STASH_UNSTAGED, progress);

    tx.step("commit staged changes", StepEffect::Mutates, || {
        runner
            .run(&GitCmd::new([
                "commit",
                "--no-verify",
                "-m",
                UNSTAGED_MARKER_MESSAGE,
            ]))
            .map(|_| ())
    })?;
    tx.step("save", StepEffect::Mutates, || stash.save(message))?;
    tx.step("restore staged changes", StepEffect::Mutates, || {
        runner
            .run(&GitCmd::soft_reset("HEAD^"))
            .map(|_| ())
    })?;

    Ok(tx.finish())
}
