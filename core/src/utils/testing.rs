use std::cell::RefCell;
use std::collections::HashMap;

use crate::core::git::{CmdRunner, GitCmd};

/// Records every invocation and answers from a script; unscripted commands
/// succeed with empty output.
#[derive(Default)]
pub(crate) struct ScriptedRunner {
    replies: HashMap<String, Result<String, String>>,
    issued: RefCell<Vec<String>>,
    silent: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(mut self, command: &str, stdout: &str) -> Self {
        self.replies
            .insert(command.to_string(), Ok(stdout.to_string()));
        self
    }

    pub(crate) fn fail(mut self, command: &str, stderr: &str) -> Self {
        self.replies
            .insert(command.to_string(), Err(stderr.to_string()));
        self
    }

    /// every command in issue order, silent ones included
    pub(crate) fn issued(&self) -> Vec<String> {
        self.issued.borrow().clone()
    }

    pub(crate) fn silent(&self) -> Vec<String> {
        self.silent.borrow().clone()
    }

    pub(crate) fn count(&self, command: &str) -> usize {
        self.issued.borrow().iter().filter(|c| *c == command).count()
    }

    fn answer(&self, line: String, should_log: bool) -> anyhow::Result<String> {
        if !should_log {
            self.silent.borrow_mut().push(line.clone());
        }
        self.issued.borrow_mut().push(line.clone());

        match self.replies.get(&line) {
            Some(Ok(stdout)) => Ok(stdout.clone()),
            Some(Err(stderr)) => Err(anyhow::anyhow!(stderr.clone())),
            None => Ok(String::new()),
        }
    }
}

impl CmdRunner for ScriptedRunner {
    fn run(&self, cmd: &GitCmd) -> anyhow::Result<String> {
        self.answer(cmd.to_string(), cmd.should_log())
    }

    fn pipe(&self, from: &GitCmd, into: &GitCmd) -> anyhow::Result<()> {
        let line = format!("{} | {}", from, into);
        self.answer(line, from.should_log() || into.should_log())
            .map(|_| ())
    }
}
