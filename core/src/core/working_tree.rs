use crate::core::git::{CmdRunner, GitCmd};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusFile {
    pub name: String,
    pub previous_name: Option<String>,
    /// two letter porcelain code, index side first
    pub short_status: String,
}

impl StatusFile {
    pub fn names(&self) -> Vec<&str> {
        match &self.previous_name {
            Some(previous_name) => vec![previous_name.as_str(), self.name.as_str()],
            None => vec![self.name.as_str()],
        }
    }

    /// Added in the index but gone from the work tree.
    pub fn is_added_deleted(&self) -> bool {
        self.short_status == "AD"
    }
}

/// Parse `git status --porcelain -z`. Renames and copies carry their
/// previous path in the following NUL separated field.
pub fn parse_status(output: &str) -> Vec<StatusFile> {
    let mut files = Vec::new();
    let mut fields = output.split('\0').filter(|field| !field.is_empty());

    while let Some(field) = fields.next() {
        let (Some(short_status), Some(name)) = (field.get(..2), field.get(3..)) else {
            continue;
        };

        let previous_name = match short_status.contains(['R', 'C']) {
            true => fields.next().map(str::to_string),
            false => None,
        };

        files.push(StatusFile {
            name: name.to_string(),
            previous_name,
            short_status: short_status.to_string(),
        });
    }
    files
}

pub struct WorkingTreeCommands<'a, R: CmdRunner> {
    runner: &'a R,
}

impl<'a, R: CmdRunner> WorkingTreeCommands<'a, R> {
    pub fn new(runner: &'a R) -> Self {
        Self { runner }
    }

    pub fn list_status_files(&self) -> anyhow::Result<Vec<StatusFile>> {
        let cmd = GitCmd::new(["status", "--untracked-files=all", "--porcelain", "-z"]).dont_log();
        let output = self.runner.run(&cmd)?;
        Ok(parse_status(&output))
    }

    /// Take `names` out of the index. With `reset` the index entry goes back to
    /// HEAD, otherwise the path stops being tracked.
    pub fn unstage_file(&self, names: &[&str], reset: bool) -> anyhow::Result<()> {
        let cmd = match reset {
            true => GitCmd::new(["reset", "HEAD", "--"]),
            false => GitCmd::new(["rm", "--cached", "--force", "-r", "--"]),
        };
        let cmd = names.iter().fold(cmd, |cmd, name| cmd.arg(*name));
        self.runner.run(&cmd).map(|_| ())
    }
}
