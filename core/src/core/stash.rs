use crate::core::config::StashConfig;
use crate::core::git::{CmdRunner, GitCmd};

/// Reference to the stash entry currently at `index`, 0 being the newest.
pub fn stash_ref(index: usize) -> String {
    format!("stash@{{{}}}", index)
}

/// Single-invocation stash operations.
///
/// Every method issues exactly one git invocation and hands its failure back
/// untouched. Indices are only meaningful at the moment they are passed in,
/// any drop or push shifts the entries below it.
pub struct StashCommands<'a, R: CmdRunner> {
    runner: &'a R,
    config: &'a StashConfig,
}

impl<'a, R: CmdRunner> StashCommands<'a, R> {
    pub fn new(runner: &'a R, config: &'a StashConfig) -> Self {
        Self { runner, config }
    }

    pub fn runner(&self) -> &'a R {
        self.runner
    }

    pub fn drop_newest(&self) -> anyhow::Result<()> {
        self.runner.run(&GitCmd::new(["stash", "drop"])).map(|_| ())
    }

    /// Drop the entry at `index` and return git's confirmation text.
    pub fn drop(&self, index: usize) -> anyhow::Result<String> {
        self.runner
            .run(&GitCmd::new(["stash", "drop"]).arg(stash_ref(index)))
    }

    pub fn pop(&self, index: usize) -> anyhow::Result<()> {
        self.runner
            .run(&GitCmd::new(["stash", "pop"]).arg(stash_ref(index)))
            .map(|_| ())
    }

    pub fn apply(&self, index: usize) -> anyhow::Result<()> {
        self.runner
            .run(&GitCmd::new(["stash", "apply"]).arg(stash_ref(index)))
            .map(|_| ())
    }

    pub fn save(&self, message: &str) -> anyhow::Result<()> {
        self.runner
            .run(&GitCmd::new(["stash", "save", message]))
            .map(|_| ())
    }

    /// Stash everything but leave the staged changes staged in the work tree.
    pub fn stash_and_keep_index(&self, message: &str) -> anyhow::Result<()> {
        self.runner
            .run(&GitCmd::new(["stash", "save", message, "--keep-index"]))
            .map(|_| ())
    }

    pub fn stash_include_untracked(&self, message: &str) -> anyhow::Result<()> {
        self.runner
            .run(&GitCmd::new([
                "stash",
                "save",
                "--include-untracked",
                message,
            ]))
            .map(|_| ())
    }

    /// Register `hash` as a new entry at position 0.
    /// A message that is blank once trimmed is left out.
    pub fn store(&self, hash: &str, message: &str) -> anyhow::Result<()> {
        let mut cmd = GitCmd::new(["stash", "store", hash]);
        let message = message.trim();
        if !message.is_empty() {
            cmd = cmd.arg("-m").arg(message);
        }
        self.runner.run(&cmd).map(|_| ())
    }

    /// Describe the patch view of the entry at `index` without running it.
    pub fn show_entry_cmd(&self, index: usize) -> GitCmd {
        GitCmd::new(["stash", "show", "-p", "--stat"])
            .arg(format!("--color={}", self.config.color))
            .arg(format!("--unified={}", self.config.diff_context_size))
            .arg(stash_ref(index))
            .dont_log()
    }

    pub fn hash(&self, index: usize) -> anyhow::Result<String> {
        let output = self
            .runner
            .run(&GitCmd::new(["rev-parse"]).arg(format!("refs/{}", stash_ref(index))))?;
        Ok(output.trim().to_string())
    }
}
