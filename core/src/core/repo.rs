use std::path::{Path, PathBuf};

use crate::core::config::{StashConfig, CONFIG_FILE};
use crate::core::git::{self, GitRunner};
use crate::core::stash::StashCommands;
use crate::utils::error::StashError;
use crate::utils::style_message::StyleMessage;

/// A work directory resolved into a runner plus its settings.
pub struct StashRepo {
    pub path: PathBuf,
    pub config: StashConfig,
    runner: GitRunner,
}

impl StashRepo {
    /// Without `config_path`, `<path>/.gstash.toml` is read when present.
    pub fn open(path: impl AsRef<Path>, config_path: Option<impl AsRef<Path>>) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();

        if !path.is_dir() {
            return Err(anyhow::anyhow!(StashError::DirNotFound(
                StyleMessage::dir_not_found(path)
            )));
        }
        git::is_repository(path)?;

        let config = match config_path {
            Some(config_path) => {
                let config_path = config_path.as_ref();
                if !config_path.is_file() {
                    return Err(anyhow::anyhow!(StashError::ConfigFileNotFound(
                        StyleMessage::config_file_not_found(config_path)
                    )));
                }
                StashConfig::load(config_path)?
            }
            None => {
                let default_path = path.join(CONFIG_FILE);
                match default_path.is_file() {
                    true => StashConfig::load(default_path)?,
                    false => StashConfig::default(),
                }
            }
        };

        Ok(Self {
            path: path.to_path_buf(),
            config,
            runner: GitRunner::new(path),
        })
    }

    pub fn runner(&self) -> &GitRunner {
        &self.runner
    }

    pub fn stash(&self) -> StashCommands<'_, GitRunner> {
        StashCommands::new(&self.runner, &self.config)
    }
}
