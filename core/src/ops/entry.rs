use std::path::{Path, PathBuf};

use crate::core::repo::StashRepo;
use crate::ops::work_dir;
use crate::utils::error::StashResult;
use crate::utils::logger;
use crate::utils::style_message::StyleMessage;

/// Options for operations on a single existing entry.
pub struct EntryOptions {
    pub path: PathBuf,
    pub config_path: Option<PathBuf>,
    /// `None` addresses the newest entry
    pub index: Option<usize>,
}

impl EntryOptions {
    pub fn new(
        path: Option<impl AsRef<Path>>,
        config_path: Option<impl AsRef<Path>>,
        index: Option<usize>,
    ) -> Self {
        Self {
            path: work_dir(path),
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            index,
        }
    }

    fn open(&self, ops: &str) -> Result<StashRepo, anyhow::Error> {
        let repo = StashRepo::open(&self.path, self.config_path.as_ref())?;
        logger::info(StyleMessage::ops_start(ops, &repo.path));
        Ok(repo)
    }
}

pub fn drop_stash(options: EntryOptions) -> StashResult {
    let repo = options.open("drop stash")?;
    match options.index {
        Some(index) => {
            repo.stash().drop(index)?;
        }
        None => repo.stash().drop_newest()?,
    }
    Ok(StyleMessage::stash_dropped(options.index))
}

pub fn pop_stash(options: EntryOptions) -> StashResult {
    let repo = options.open("pop stash")?;
    let index = options.index.unwrap_or(0);
    repo.stash().pop(index)?;
    Ok(StyleMessage::stash_applied(index, true))
}

pub fn apply_stash(options: EntryOptions) -> StashResult {
    let repo = options.open("apply stash")?;
    let index = options.index.unwrap_or(0);
    repo.stash().apply(index)?;
    Ok(StyleMessage::stash_applied(index, false))
}

/// Commit behind an entry, the one `rename` stores again.
pub fn stash_hash(options: EntryOptions) -> StashResult {
    let repo = StashRepo::open(&options.path, options.config_path.as_ref())?;
    let hash = repo.stash().hash(options.index.unwrap_or(0))?;
    Ok(StyleMessage::new().plain_text(hash))
}

/// Patch view of an entry, colored and sized by the configuration.
pub fn show_stash(options: EntryOptions) -> StashResult {
    let repo = StashRepo::open(&options.path, options.config_path.as_ref())?;
    let cmd = repo.stash().show_entry_cmd(options.index.unwrap_or(0));
    let output = cmd.run(repo.runner())?;
    Ok(StyleMessage::new().plain_text(output))
}
