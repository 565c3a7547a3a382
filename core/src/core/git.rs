use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use crate::utils::cmd::{exec_cmd, exec_piped};
use crate::utils::error::StashError;
use crate::utils::logger;
use crate::utils::style_message::StyleMessage;

/// A git invocation described by its arguments, `git` itself excluded.
///
/// Arguments are handed to the process as-is, no shell is involved. Quoting only
/// happens when the command is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitCmd {
    args: Vec<String>,
    dont_log: bool,
}

impl GitCmd {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            dont_log: false,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Move HEAD to `target`, index and work tree stay as they are.
    pub fn soft_reset(target: impl Into<String>) -> Self {
        GitCmd::new(["reset", "--soft"]).arg(target)
    }

    /// Keep the command out of the command log, for noisy or sensitive calls.
    pub fn dont_log(mut self) -> Self {
        self.dont_log = true;
        self
    }

    pub fn should_log(&self) -> bool {
        !self.dont_log
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn run(&self, runner: &impl CmdRunner) -> anyhow::Result<String> {
        runner.run(self)
    }
}

fn quote(arg: &str) -> String {
    let needs_quote = arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '"');
    match needs_quote {
        true => format!("\"{}\"", arg.replace('"', "\\\"")),
        false => arg.to_string(),
    }
}

impl Display for GitCmd {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("git")?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

/// Executes git invocations. Failures carry the tool's own error output.
pub trait CmdRunner {
    /// Run `cmd` to completion and return its stdout.
    fn run(&self, cmd: &GitCmd) -> anyhow::Result<String>;

    /// Run `from` and feed its stdout into `into`.
    fn pipe(&self, from: &GitCmd, into: &GitCmd) -> anyhow::Result<()>;
}

/// Runs `git` as a child process inside a work directory.
#[derive(Debug, Clone)]
pub struct GitRunner {
    path: PathBuf,
}

impl GitRunner {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CmdRunner for GitRunner {
    fn run(&self, cmd: &GitCmd) -> anyhow::Result<String> {
        if cmd.should_log() {
            logger::info(StyleMessage::git_command(cmd.to_string()));
        }

        let args: Vec<&str> = cmd.args().iter().map(String::as_str).collect();
        exec_cmd(&self.path, "git", &args)
    }

    fn pipe(&self, from: &GitCmd, into: &GitCmd) -> anyhow::Result<()> {
        if from.should_log() || into.should_log() {
            logger::info(StyleMessage::git_command(format!("{} | {}", from, into)));
        }

        let from_args: Vec<&str> = from.args().iter().map(String::as_str).collect();
        let into_args: Vec<&str> = into.args().iter().map(String::as_str).collect();
        exec_piped(&self.path, "git", &from_args, &into_args)
    }
}

/// Succeeds when `path` is anywhere inside a git work tree.
pub fn is_repository(path: impl AsRef<Path>) -> Result<(), anyhow::Error> {
    let path = path.as_ref();
    let args = ["rev-parse", "--is-inside-work-tree"];
    if let Ok(output) = exec_cmd(path, "git", &args) {
        if output.trim() == "true" {
            return Ok(());
        }
    }

    Err(anyhow::anyhow!(StashError::NotRepository(
        StyleMessage::not_repository(path)
    )))
}
