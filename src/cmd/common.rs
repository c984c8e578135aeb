// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Listers, previews and actions shared by several pickers.

use tracing::debug;

use crate::cli::CommandName;
use crate::config::Settings;
use crate::error::Result;
use crate::git::candidate::{branch_ref, commit_sha, status_code, status_path, strip_ansi};
use crate::git::{GitExec, GitQuery, Invocation};
use crate::picker::hook::{PagerKind, Preview, PreviewContext};
use crate::picker::{Outcome, candidate_lines};

/// Extra lister arguments configured for `name`.
pub(crate) fn git_opts(settings: &Settings, name: CommandName) -> Vec<String> {
    settings.command(name).git_opts.clone()
}

/// `--format=<log_format>`.
pub(crate) fn log_format(settings: &Settings) -> String {
    format!("--format={}", settings.log_format)
}

/// Runs a lister and splits its output into candidates.
pub(crate) async fn read_lines<B: GitExec>(
    backend: &B,
    lister: &Invocation,
) -> Result<Vec<String>> {
    Ok(candidate_lines(&backend.read(lister).await?))
}

/// Runs a history lister; an unborn `HEAD` has no history to list.
pub(crate) async fn read_history<B: GitExec + GitQuery>(
    backend: &B,
    lister: &Invocation,
) -> Result<Vec<String>> {
    if !backend.resolves("HEAD") {
        debug!(lister = %lister, "HEAD is unborn, no history");
        return Ok(Vec::new());
    }
    read_lines(backend, lister).await
}

/// `git log --graph` in the configured format.
pub(crate) fn log_lister(settings: &Settings, name: CommandName, args: &[String]) -> Invocation {
    Invocation::git(["log", "--graph", "--color=always"])
        .arg(log_format(settings))
        .args(git_opts(settings, name))
        .args(args.iter().cloned())
}

/// Paths after a `--` separator.
pub(crate) fn pathspec(args: &[String]) -> &[String] {
    args.iter()
        .position(|arg| arg == "--")
        .and_then(|separator| args.get(separator + 1..))
        .unwrap_or_default()
}

/// `git show` of the commit on a history line, limited to `paths` if any.
pub(crate) fn show_commit(
    line: &str,
    ctx: &PreviewContext<'_>,
    paths: &[String],
) -> Option<Preview> {
    let sha = commit_sha(line)?;
    let mut show = Invocation::git(["show", "--color=always"])
        .arg(ctx.unified())
        .arg(sha);
    if !paths.is_empty() {
        show = show.arg("--").args(paths.iter().cloned());
    }
    Some(Preview::git(show, PagerKind::Show))
}

/// History of a branch or tag.
pub(crate) fn rev_log(rev: &str, settings: &Settings) -> Preview {
    Preview::git(
        Invocation::git(["log", "--graph", "--color=always"])
            .arg(log_format(settings))
            .arg(rev),
        PagerKind::None,
    )
}

/// Diff of one path; `cached` compares the index with HEAD.
pub(crate) fn path_diff(path: String, ctx: &PreviewContext<'_>, cached: bool) -> Preview {
    let mut diff = Invocation::git(["diff", "--color=always"]).arg(ctx.unified());
    if cached {
        diff = diff.arg("--cached");
    }
    Preview::git(diff.arg("--").arg(path), PagerKind::Diff)
}

/// Preview of a `git status --short` line: content when untracked, else its diff.
///
/// `against_head` shows staged and unstaged changes together.
pub(crate) fn status_preview(
    line: &str,
    ctx: &PreviewContext<'_>,
    against_head: bool,
) -> Option<Preview> {
    let path = status_path(line)?;
    if status_code(line) == Some(('?', '?')) {
        return Some(Preview::file(path, PagerKind::None));
    }
    let mut diff = Invocation::git(["diff", "--color=always"]).arg(ctx.unified());
    if against_head && ctx.query.resolves("HEAD") {
        diff = diff.arg("HEAD");
    }
    Some(Preview::git(diff.arg("--").arg(path), PagerKind::Diff))
}

/// Runs invocations in order, stopping at the first failure.
pub(crate) async fn run_all<B: GitExec>(
    backend: &B,
    invocations: impl IntoIterator<Item = Invocation>,
) -> Result<Outcome> {
    for invocation in invocations {
        let code = backend.status(&invocation).await?;
        if code != 0 {
            return Ok(Outcome::Completed(code));
        }
    }
    Ok(Outcome::Completed(0))
}

/// Runs one invocation.
pub(crate) async fn run<B: GitExec>(backend: &B, invocation: Invocation) -> Result<Outcome> {
    run_all(backend, [invocation]).await
}

/// `git status --short`, shown after staging changes.
pub(crate) fn short_status() -> Invocation {
    Invocation::git(["status", "--short"])
}

/// Coloured `git status --short`.
pub(crate) fn status_lister(settings: &Settings, name: CommandName) -> Invocation {
    Invocation::git(["-c", "color.status=always", "status", "--short"])
        .args(git_opts(settings, name))
}

/// Parent of `sha` for a rebase, or `--root` for the first commit.
pub(crate) fn rebase_base(query: &impl GitQuery, sha: &str) -> String {
    let parent = format!("{sha}~");
    if query.resolves(&parent) {
        parent
    } else {
        "--root".to_string()
    }
}

/// Checks out `args`, creating the branch when the first one does not resolve.
pub(crate) async fn checkout_args<B: GitExec + GitQuery>(
    backend: &B,
    args: &[String],
) -> Result<Outcome> {
    let Some(first) = args.first() else {
        return Ok(Outcome::Completed(0));
    };
    let checkout = if backend.resolves(first) {
        Invocation::git(["checkout"])
    } else {
        Invocation::git(["checkout", "-b"])
    };
    run(backend, checkout.args(args.iter().cloned())).await
}

/// `git branch` lines that name a branch, with the current branch first.
pub(crate) fn branches_current_first(lines: Vec<String>) -> Vec<String> {
    let (current, others): (Vec<String>, Vec<String>) = lines
        .into_iter()
        .filter(|line| branch_ref(line).is_some())
        .partition(|line| is_current_branch(line));
    current.into_iter().chain(others).collect()
}

/// Whether a `git branch` line is marked with `*`.
pub(crate) fn is_current_branch(line: &str) -> bool {
    strip_ansi(line).starts_with('*')
}
