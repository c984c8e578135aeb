// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{GitExec, GitQuery, LocalBackend};
use crate::git::Invocation;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn git(path: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(path)
        .output()
        .expect("git should run");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Repository on branch `main` with one empty commit.
fn init_repo_with_commit(path: &Path) {
    git(path, &["init", "--quiet", "--initial-branch=main"]);
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test"]);
    git(path, &["commit", "--allow-empty", "-m", "Initial commit", "--quiet"]);
}

#[test]
fn test_is_work_tree() {
    let temp = temp_dir();
    let backend = LocalBackend::new(temp.path());
    assert!(!backend.is_work_tree());

    gix::init(temp.path()).expect("failed to init repo");
    assert!(backend.is_work_tree());
}

#[test]
fn test_bare_repository_is_not_a_work_tree() {
    let temp = temp_dir();
    gix::init_bare(temp.path()).expect("failed to init bare repo");
    assert!(!LocalBackend::new(temp.path()).is_work_tree());
}

#[test]
fn test_current_branch_and_refs() {
    let temp = temp_dir();
    init_repo_with_commit(temp.path());
    git(temp.path(), &["branch", "feature"]);
    git(temp.path(), &["tag", "v1.0"]);
    let backend = LocalBackend::new(temp.path());

    assert_eq!(backend.current_branch().unwrap().as_deref(), Some("main"));
    assert!(backend.resolves("main"));
    assert!(backend.resolves("feature"));
    assert!(backend.resolves("v1.0"));
    assert!(backend.resolves("HEAD"));
    assert!(!backend.resolves("HEAD~"));
    assert!(!backend.resolves("no-such-branch"));
    assert!(!backend.resolves("-"));
    assert!(backend.has_local_branch("feature"));
    assert!(!backend.has_local_branch("v1.0"));
}

#[tokio::test]
async fn test_read_and_status() {
    let temp = temp_dir();
    init_repo_with_commit(temp.path());
    let backend = LocalBackend::new(temp.path());

    let subject = backend
        .read(&Invocation::git(["log", "-1", "--format=%s"]))
        .await
        .unwrap();
    assert_eq!(subject.trim(), "Initial commit");

    let code = backend
        .status(&Invocation::git(["diff", "--cached", "--quiet"]).quiet())
        .await
        .unwrap();
    assert_eq!(code, 0);

    std::fs::write(temp.path().join("a.txt"), "a\n").unwrap();
    git(temp.path(), &["add", "a.txt"]);
    let code = backend
        .status(&Invocation::git(["diff", "--cached", "--quiet"]).quiet())
        .await
        .unwrap();
    assert_eq!(code, 1);
}

#[tokio::test]
async fn test_read_failure_carries_stderr() {
    let temp = temp_dir();
    init_repo_with_commit(temp.path());
    let backend = LocalBackend::new(temp.path());

    let err = backend
        .read(&Invocation::git(["show", "no-such-rev"]))
        .await
        .unwrap_err();
    let message = err.to_string();
    assert!(
        message.starts_with("git error: git command failed: git show no-such-rev"),
        "{message}"
    );
}

#[tokio::test]
async fn test_read_missing_program() {
    let temp = temp_dir();
    let backend = LocalBackend::new(temp.path());
    let argv = vec!["nonexistent_program_12345".to_string()];
    let err = backend
        .read(&Invocation::command(&argv).unwrap())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("not in PATH"), "{err}");
}
