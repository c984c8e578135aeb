// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Candidate line parsers.
//!
//! ```text
//! "* 1a2b3c4 (HEAD -> main) fix 2 days ago"   commit_sha   --> 1a2b3c4
//! " M src/main.rs"                            status_path  --> src/main.rs
//! "R  old.rs -> new.rs"                       status_path  --> new.rs
//! "M\tsrc/lib.rs"                             name_status_path --> src/lib.rs
//! "  remotes/origin/dev"                      branch_ref   --> Remote(origin, dev)
//! "stash@{1}: WIP on main: ..."               stash_ref    --> stash@{1}
//! "Would remove target/"                      clean_path   --> target/
//! ```
//!
//! Every parser strips ANSI colour first.

use std::borrow::Cow;

/// Removes ANSI escape sequences (CSI and two-byte ESC forms).
#[must_use]
pub fn strip_ansi(line: &str) -> Cow<'_, str> {
    if !line.contains('\x1b') {
        return Cow::Borrowed(line);
    }
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\x1b' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('[') => {
                // Parameters and intermediates, then one final byte in @..~
                for c in chars.by_ref() {
                    if ('@'..='~').contains(&c) {
                        break;
                    }
                }
            }
            Some(_) | None => {}
        }
    }
    Cow::Owned(out)
}

/// First abbreviated or full commit hash on a history line.
#[must_use]
pub fn commit_sha(line: &str) -> Option<String> {
    strip_ansi(line)
        .split_whitespace()
        .find(|token| {
            (7..=40).contains(&token.len()) && token.bytes().all(|b| b.is_ascii_hexdigit())
        })
        .map(str::to_string)
}

/// Two-letter status of a `git status --short` line.
#[must_use]
pub fn status_code(line: &str) -> Option<(char, char)> {
    let line = strip_ansi(line);
    let mut chars = line.chars();
    let x = chars.next()?;
    let y = chars.next()?;
    Some((x, y))
}

/// Path of a `git status --short` line; the destination for renames.
///
/// Also accepts the line with its leading blank trimmed (`M src/main.rs`),
/// as fzf hands it to key bindings.
#[must_use]
pub fn status_path(line: &str) -> Option<String> {
    let line = strip_ansi(line);
    let rest = if line.as_bytes().get(2) == Some(&b' ') {
        line.get(3..)?
    } else {
        line.split_once(' ')?.1
    };
    let path = rest.rsplit_once(" -> ").map_or(rest, |(_, to)| to);
    let path = unquote(path.trim_end());
    (!path.is_empty()).then_some(path)
}

/// Path of a `git diff --name-status` line; the destination for renames and copies.
#[must_use]
pub fn name_status_path(line: &str) -> Option<String> {
    let line = strip_ansi(line);
    let path = line.rsplit('\t').next()?;
    if path == line.as_ref() {
        return None;
    }
    let path = unquote(path);
    (!path.is_empty()).then_some(path)
}

/// A branch from `git branch --all`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchRef {
    Local(String),
    Remote { remote: String, name: String },
}

impl BranchRef {
    /// Name git accepts for this branch (`main`, `origin/main`).
    #[must_use]
    pub fn rev(&self) -> String {
        match self {
            Self::Local(name) => name.clone(),
            Self::Remote { remote, name } => format!("{remote}/{name}"),
        }
    }
}

/// Branch of a `git branch` line. None for symbolic refs and detached HEAD.
#[must_use]
pub fn branch_ref(line: &str) -> Option<BranchRef> {
    let line = strip_ansi(line);
    if line.contains(" -> ") {
        return None;
    }
    let name = line
        .trim_start_matches(['*', '+'])
        .split_whitespace()
        .next()?;
    if name.starts_with('(') {
        return None;
    }
    match name.strip_prefix("remotes/") {
        Some(rest) => {
            let (remote, name) = rest.split_once('/')?;
            Some(BranchRef::Remote {
                remote: remote.to_string(),
                name: name.to_string(),
            })
        }
        None => Some(BranchRef::Local(name.to_string())),
    }
}

/// Stash name of a `git stash list` line.
#[must_use]
pub fn stash_ref(line: &str) -> Option<String> {
    let line = strip_ansi(line);
    let name = line.split(':').next()?.trim();
    name.starts_with("stash@{").then(|| name.to_string())
}

/// Path of a `git clean -n` line.
#[must_use]
pub fn clean_path(line: &str) -> Option<String> {
    let line = strip_ansi(line);
    let path = line.strip_prefix("Would remove ")?;
    let path = unquote(path.trim_end());
    (!path.is_empty()).then_some(path)
}

/// The line itself, trimmed and uncoloured.
#[must_use]
pub fn plain(line: &str) -> Option<String> {
    let line = strip_ansi(line);
    let line = line.trim();
    (!line.is_empty()).then(|| line.to_string())
}

/// Undoes git's C-style path quoting (`"a\tb"`, `"caf\303\251"`).
#[must_use]
pub fn unquote(path: &str) -> String {
    let Some(inner) = path
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    else {
        return path.to_string();
    };

    let mut bytes = Vec::with_capacity(inner.len());
    let mut iter = inner.bytes().peekable();
    while let Some(b) = iter.next() {
        if b != b'\\' {
            bytes.push(b);
            continue;
        }
        match iter.next() {
            Some(b'n') => bytes.push(b'\n'),
            Some(b't') => bytes.push(b'\t'),
            Some(b'a') => bytes.push(0x07),
            Some(b'b') => bytes.push(0x08),
            Some(b'f') => bytes.push(0x0c),
            Some(b'r') => bytes.push(b'\r'),
            Some(b'v') => bytes.push(0x0b),
            Some(d @ b'0'..=b'7') => {
                let mut value = u32::from(d - b'0');
                for _ in 0..2 {
                    match iter.peek() {
                        Some(&d @ b'0'..=b'7') => {
                            value = value * 8 + u32::from(d - b'0');
                            iter.next();
                        }
                        _ => break,
                    }
                }
                bytes.push(u8::try_from(value).unwrap_or(b'?'));
            }
            Some(other) => bytes.push(other),
            None => bytes.push(b'\\'),
        }
    }
    String::from_utf8_lossy(&bytes).into_owned()
}
