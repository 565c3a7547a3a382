#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Stdio;

pub mod failed_message {
    pub const GIT_INIT: &str = "git init failed";
    pub const GIT_CONFIG: &str = "git config failed";
    pub const GIT_ADD: &str = "git add failed";
    pub const GIT_COMMIT: &str = "git commit failed";
    pub const GIT_STASH: &str = "git stash failed";
    pub const GIT_STASH_LIST: &str = "git stash list failed";
    pub const GIT_STATUS: &str = "git status failed";
    pub const GIT_REV_PARSE: &str = "git rev-parse failed";
    pub const WRITE_FILE: &str = "write file failed";
}

pub fn exec_cmd(path: impl AsRef<Path>, cmd: &str, args: &[&str]) -> Result<String, anyhow::Error> {
    let output = std::process::Command::new(cmd)
        .current_dir(path.as_ref())
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;
    let stderr = String::from_utf8(output.stderr)?;

    match output.status.success() {
        false => Err(anyhow::anyhow!(stderr)),
        true => Ok(stdout),
    }
}

pub fn test_dir(name: &str) -> PathBuf {
    std::env::current_dir()
        .unwrap()
        .join("target")
        .join("tmp")
        .join(name)
}

/// Fresh repository with one commit holding `files`.
pub fn create_repo(path: &Path, files: &[(&str, &str)]) {
    if path.exists() {
        std::fs::remove_dir_all(path).unwrap();
    }
    std::fs::create_dir_all(path).unwrap();

    exec_cmd(path, "git", &["init"]).expect(failed_message::GIT_INIT);
    for (key, value) in [
        ("user.name", "gstash"),
        ("user.email", "gstash@example.com"),
        ("commit.gpgsign", "false"),
        ("color.ui", "false"),
    ] {
        exec_cmd(path, "git", &["config", key, value]).expect(failed_message::GIT_CONFIG);
    }

    for (name, content) in files {
        write_file(path, name, content);
    }
    exec_cmd(path, "git", &["add", "-A"]).expect(failed_message::GIT_ADD);
    exec_cmd(path, "git", &["commit", "-m", "init"]).expect(failed_message::GIT_COMMIT);
}

pub fn write_file(path: &Path, name: &str, content: &str) {
    std::fs::write(path.join(name), content).expect(failed_message::WRITE_FILE);
}

/// Reflog subjects of the stash list, newest first.
pub fn stash_subjects(path: &Path) -> Vec<String> {
    exec_cmd(path, "git", &["stash", "list", "--format=%gs"])
        .expect(failed_message::GIT_STASH_LIST)
        .lines()
        .map(str::to_string)
        .collect()
}

pub fn status(path: &Path) -> String {
    exec_cmd(path, "git", &["status", "--porcelain"]).expect(failed_message::GIT_STATUS)
}
