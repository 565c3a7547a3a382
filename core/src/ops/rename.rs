use std::path::{Path, PathBuf};

use crate::core::drop_output::parse_drop_output;
use crate::core::git::CmdRunner;
use crate::core::repo::StashRepo;
use crate::core::stash::StashCommands;
use crate::ops::transaction::{StepEffect, Transaction, TransactionError, TransactionReport};
use crate::ops::{report_failure, work_dir};
use crate::utils::error::StashResult;
use crate::utils::logger;
use crate::utils::progress::Progress;
use crate::utils::style_message::StyleMessage;

pub const RENAME_STASH: &str = "rename stash";

pub struct RenameOptions {
    pub path: PathBuf,
    pub config_path: Option<PathBuf>,
    pub index: usize,
    pub message: String,
}

impl RenameOptions {
    pub fn new(
        path: Option<impl AsRef<Path>>,
        config_path: Option<impl AsRef<Path>>,
        index: usize,
        message: impl AsRef<str>,
    ) -> Self {
        Self {
            path: work_dir(path),
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            index,
            message: message.as_ref().to_string(),
        }
    }
}

pub fn rename_stash(options: RenameOptions, progress: &impl Progress) -> StashResult {
    let repo = StashRepo::open(&options.path, options.config_path.as_ref())?;
    logger::info(StyleMessage::ops_start(RENAME_STASH, &repo.path));

    rename_entry(&repo.stash(), options.index, &options.message, progress)
        .map_err(report_failure)?;
    Ok(StyleMessage::stash_renamed(
        options.index,
        options.message.trim(),
    ))
}

/// Give the entry at `index` a new message by dropping it and storing its
/// commit again. The entry comes back at position 0, not at `index`.
///
/// If anything fails after the drop the entry is gone from the list; its
/// commit still exists until git collects it.
pub fn rename_entry<R: CmdRunner>(
    stash: &StashCommands<'_, R>,
    index: usize,
    message: &str,
    progress: &dyn Progress,
) -> Result<TransactionReport, TransactionError> {
    let mut tx = Transaction::new(RENAME_STASH, progress);

    let output = tx.step("drop", StepEffect::Mutates, || stash.drop(index))?;
    let hash = tx.step("parse drop output", StepEffect::ReadOnly, || {
        parse_drop_output(&output)
            .into_hash()
            .map_err(anyhow::Error::from)
    })?;
    tx.step("store", StepEffect::Mutates, || stash.store(&hash, message))?;

    Ok(tx.finish())
}
