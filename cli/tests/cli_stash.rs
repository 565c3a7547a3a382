use crate::common::{create_repo, execute_cargo_cmd, execute_cmd, stash_subjects, test_dir};

mod common;

#[test]
fn cli_save_then_rename() {
    let path = test_dir("cli_save_then_rename");
    create_repo(&path);
    std::fs::write(path.join("file.txt"), "a\nb\n").unwrap();

    let output = execute_cargo_cmd(&path, &["save", "-m", "first"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("\"first\""));
    assert_eq!(stash_subjects(&path).len(), 1);

    let output = execute_cargo_cmd(&path, &["rename", "0", "second"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("renamed"));
    assert_eq!(stash_subjects(&path), ["second"]);
}

#[test]
fn cli_staged_leaves_unstaged_changes() {
    let path = test_dir("cli_staged");
    create_repo(&path);
    std::fs::write(path.join("new.txt"), "new\n").unwrap();
    execute_cmd(&path, "git", &["add", "new.txt"]).unwrap();
    std::fs::write(path.join("file.txt"), "a\nb\n").unwrap();

    let output = execute_cargo_cmd(&path, &["staged", "-m", "staged only"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("finished"));

    let status = execute_cmd(&path, "git", &["status", "--porcelain"]).unwrap();
    assert_eq!(status.trim(), "M file.txt");
}

#[test]
fn cli_show_prints_patch() {
    let path = test_dir("cli_show");
    create_repo(&path);
    std::fs::write(path.join("file.txt"), "a\nshown\n").unwrap();
    execute_cmd(&path, "git", &["stash", "save", "to show"]).unwrap();

    let output = execute_cargo_cmd(&path, &["show", "0"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("shown"));
}

#[test]
fn cli_pop_missing_entry_fails() {
    let path = test_dir("cli_pop_missing");
    create_repo(&path);

    let output = execute_cargo_cmd(&path, &["pop", "3"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn cli_hash_prints_entry_commit() {
    let path = test_dir("cli_hash");
    create_repo(&path);
    std::fs::write(path.join("file.txt"), "a\nhashed\n").unwrap();
    execute_cmd(&path, "git", &["stash", "save", "to hash"]).unwrap();
    let expected = execute_cmd(&path, "git", &["rev-parse", "stash@{0}"]).unwrap();

    let output = execute_cargo_cmd(&path, &["hash", "0"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), expected.trim());
}
