use std::path::{Path, PathBuf};

use crate::core::repo::StashRepo;
use crate::ops::work_dir;
use crate::utils::error::StashResult;
use crate::utils::logger;
use crate::utils::style_message::StyleMessage;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SaveMode {
    /// tracked changes, staged or not
    #[default]
    Normal,
    /// like `Normal`, staged changes stay staged afterwards
    KeepIndex,
    /// tracked and untracked changes
    IncludeUntracked,
}

pub struct SaveOptions {
    pub path: PathBuf,
    pub config_path: Option<PathBuf>,
    pub message: String,
    pub mode: SaveMode,
}

impl SaveOptions {
    pub fn new(
        path: Option<impl AsRef<Path>>,
        config_path: Option<impl AsRef<Path>>,
        message: impl AsRef<str>,
        mode: Option<SaveMode>,
    ) -> Self {
        Self {
            path: work_dir(path),
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            message: message.as_ref().to_string(),
            mode: mode.unwrap_or_default(),
        }
    }
}

pub fn save_stash(options: SaveOptions) -> StashResult {
    let repo = StashRepo::open(&options.path, options.config_path.as_ref())?;
    logger::info(StyleMessage::ops_start("save stash", &repo.path));

    let stash = repo.stash();
    match options.mode {
        SaveMode::Normal => stash.save(&options.message)?,
        SaveMode::KeepIndex => stash.stash_and_keep_index(&options.message)?,
        SaveMode::IncludeUntracked => stash.stash_include_untracked(&options.message)?,
    }
    Ok(StyleMessage::stash_saved(&options.message))
}
