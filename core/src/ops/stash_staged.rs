use std::path::{Path, PathBuf};

use crate::core::git::{CmdRunner, GitCmd};
use crate::core::repo::StashRepo;
use crate::core::stash::{stash_ref, StashCommands};
use crate::core::working_tree::WorkingTreeCommands;
use crate::ops::schedule::StashSchedule;
use crate::ops::transaction::{StepEffect, Transaction, TransactionError, TransactionReport};
use crate::ops::{report_failure, work_dir};
use crate::utils::error::StashResult;
use crate::utils::logger;
use crate::utils::progress::Progress;
use crate::utils::style_message::StyleMessage;

pub const STASH_STAGED: &str = "stash staged changes";

pub struct StashStagedOptions {
    pub path: PathBuf,
    pub config_path: Option<PathBuf>,
    pub message: String,
}

impl StashStagedOptions {
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

pub fn stash_staged(options: StashStagedOptions, progress: &impl Progress) -> StashResult {
    let repo = StashRepo::open(&options.path, options.config_path.as_ref())?;
    logger::info(StyleMessage::ops_start(STASH_STAGED, &repo.path));

    let report =
        save_staged_changes(&repo.stash(), &options.message, progress).map_err(report_failure)?;
    Ok(StyleMessage::transaction_succ(
        report.operation,
        report.steps.len(),
    ))
}

/// Stash only what is staged, unstaged changes stay in the work tree.
///
/// Two entries are pushed: a full snapshot taken with `--keep-index`, then the
/// staged-only entry. The snapshot is applied back, the staged-only patch is
/// reverse applied, and the snapshot is dropped. Both are addressed through
/// [`StashSchedule`], the stash list is never read back.
pub fn save_staged_changes<R: CmdRunner>(
    stash: &StashCommands<'_, R>,
    message: &str,
    progress: &dyn Progress,
) -> Result<TransactionReport, TransactionError> {
    let runner = stash.runner();
    let working_tree = WorkingTreeCommands::new(runner);
    let mut schedule = StashSchedule::new();
    let mut tx = Transaction::new(STASH_STAGED, progress);

    tx.step("stash keeping index", StepEffect::Mutates, || {
        runner
            .run(&GitCmd::new(["stash", "--keep-index"]))
            .map(|_| ())
    })?;
    let snapshot = schedule.push();

    tx.step("save", StepEffect::Mutates, || stash.save(message))?;
    let staged = schedule.push();

    let snapshot_at = schedule.position(snapshot);
    let staged_at = schedule.position(staged);

    tx.step("apply snapshot", StepEffect::Mutates, || {
        stash.apply(snapshot_at)
    })?;
    tx.step("reverse apply staged entry", StepEffect::Mutates, || {
        runner.pipe(
            &GitCmd::new(["stash", "show", "-p"]).arg(stash_ref(staged_at)),
            &GitCmd::new(["apply", "-R"]),
        )
    })?;
    tx.step("drop snapshot", StepEffect::Mutates, || {
        stash.drop(snapshot_at).map(|_| ())
    })?;
    schedule.dropped(snapshot);

    // a staged new file now reads AD: added in the index, deleted in the work
    // tree. It is safe in the staged entry, so it leaves the index.
    tx.step("unstage added-deleted files", StepEffect::Mutates, || {
        for file in working_tree.list_status_files()? {
            if file.is_added_deleted() {
                working_tree.unstage_file(&file.names(), false)?;
            }
        }
        Ok(())
    })?;

    Ok(tx.finish())
}
