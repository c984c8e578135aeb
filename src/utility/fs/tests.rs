// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::walk::{WalkOptions, find_files};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn relative_sorted(root: &Path, files: Vec<PathBuf>) -> Vec<String> {
    let mut names: Vec<String> = files
        .iter()
        .map(|p| {
            p.strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    names.sort();
    names
}

#[test]
fn test_find_files() {
    let temp = temp_dir();

    std::fs::write(temp.path().join("file1.rs"), "").unwrap();
    std::fs::write(temp.path().join("file2.txt"), "").unwrap();
    std::fs::create_dir(temp.path().join("subdir")).unwrap();
    std::fs::write(temp.path().join("subdir/file3.rs"), "").unwrap();

    let rust_files = find_files(temp.path(), "**/*.rs", &WalkOptions::default()).unwrap();

    insta::assert_yaml_snapshot!(relative_sorted(temp.path(), rust_files), @r"
    - file1.rs
    - subdir/file3.rs
    ");
}

#[test]
fn test_find_files_respects_ignore_files() {
    let temp = temp_dir();

    std::fs::write(temp.path().join(".ignore"), "skipped.gitignore\n").unwrap();
    std::fs::write(temp.path().join("kept.gitignore"), "").unwrap();
    std::fs::write(temp.path().join("skipped.gitignore"), "").unwrap();

    let found = find_files(temp.path(), "**/*.gitignore", &WalkOptions::default()).unwrap();
    assert_eq!(relative_sorted(temp.path(), found), ["kept.gitignore"]);

    let found = find_files(
        temp.path(),
        "**/*.gitignore",
        &WalkOptions::for_template_store(),
    )
    .unwrap();
    assert_eq!(
        relative_sorted(temp.path(), found),
        ["kept.gitignore", "skipped.gitignore"]
    );
}

#[test]
fn test_find_files_max_depth() {
    let temp = temp_dir();

    std::fs::create_dir_all(temp.path().join("a/b")).unwrap();
    std::fs::write(temp.path().join("a/one.txt"), "").unwrap();
    std::fs::write(temp.path().join("a/b/two.txt"), "").unwrap();

    let options = WalkOptions::builder().with_max_depth(2).build();
    let found = find_files(temp.path(), "**/*.txt", &options).unwrap();
    assert_eq!(relative_sorted(temp.path(), found), ["a/one.txt"]);
}

#[cfg(unix)]
#[test]
fn test_find_files_follows_links() {
    let temp = temp_dir();

    std::fs::write(temp.path().join("Real.gitignore"), "target/\n").unwrap();
    std::os::unix::fs::symlink(
        temp.path().join("Real.gitignore"),
        temp.path().join("Alias.gitignore"),
    )
    .unwrap();

    let found = find_files(temp.path(), "*.gitignore", &WalkOptions::default()).unwrap();
    assert_eq!(relative_sorted(temp.path(), found), ["Real.gitignore"]);

    let found = find_files(
        temp.path(),
        "*.gitignore",
        &WalkOptions::for_template_store(),
    )
    .unwrap();
    assert_eq!(
        relative_sorted(temp.path(), found),
        ["Alias.gitignore", "Real.gitignore"]
    );
}

#[test]
fn test_find_files_missing_root() {
    let temp = temp_dir();
    let err = find_files(
        temp.path().join("missing"),
        "**/*",
        &WalkOptions::default(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn test_find_files_invalid_pattern() {
    let temp = temp_dir();
    let err = find_files(temp.path(), "**/[", &WalkOptions::default()).unwrap_err();
    assert!(err.to_string().contains("invalid glob pattern"));
}
