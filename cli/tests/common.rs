#![allow(dead_code)]

use assert_cmd::prelude::*;
use std::{
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
};

pub fn execute_cmd(path: &Path, cmd: &str, args: &[&str]) -> Result<String, anyhow::Error> {
    let output = std::process::Command::new(cmd)
        .current_dir(path)
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

/// Run the gstash binary inside `path`.
pub fn execute_cargo_cmd(path: &Path, args: &[&str]) -> Output {
    Command::cargo_bin("gstash")
        .unwrap()
        .current_dir(path)
        .args(args)
        .output()
        .unwrap()
}

pub fn test_dir(name: &str) -> PathBuf {
    std::env::current_dir()
        .unwrap()
        .join("target")
        .join("tmp")
        .join(name)
}

/// Fresh repository whose single commit holds `file.txt`.
pub fn create_repo(path: &Path) {
    if path.exists() {
        std::fs::remove_dir_all(path).unwrap();
    }
    std::fs::create_dir_all(path).unwrap();

    execute_cmd(path, "git", &["init"]).unwrap();
    for (key, value) in [
        ("user.name", "gstash"),
        ("user.email", "gstash@example.com"),
        ("commit.gpgsign", "false"),
        ("color.ui", "false"),
    ] {
        execute_cmd(path, "git", &["config", key, value]).unwrap();
    }
    std::fs::write(path.join("file.txt"), "a\n").unwrap();
    execute_cmd(path, "git", &["add", "-A"]).unwrap();
    execute_cmd(path, "git", &["commit", "-m", "init"]).unwrap();
}

pub fn stash_subjects(path: &Path) -> Vec<String> {
    execute_cmd(path, "git", &["stash", "list", "--format=%gs"])
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}
