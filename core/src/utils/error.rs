use crate::utils::StyleMessage;
use thiserror::Error;

pub type StashResult<T = StyleMessage, E = anyhow::Error> = Result<T, E>;

#[derive(Debug, Error)]
pub enum StashError {
    #[error("{0}")]
    DirNotFound(StyleMessage),

    #[error("{0}")]
    NotRepository(StyleMessage),

    #[error("{0}")]
    ConfigFileNotFound(StyleMessage),

    #[error("Load config file failed!")]
    LoadConfigFailed,

    /// `git stash drop` printed something without a `(<hash>)` group.
    #[error("Output of `git stash drop` is invalid: {output:?}")]
    InvalidDropOutput { output: String },
}
