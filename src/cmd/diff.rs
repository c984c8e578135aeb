// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `diff`: review changed files.
//!
//! ```text
//! git-pick diff HEAD~3 --stat src/ -- docs/
//!               ^^^^^^ ^^^^^^ ^^^^    ^^^^^
//!               commit option path    path
//! ```
//!
//! Before `--`, arguments that resolve or start with `-` go to git as
//! revisions and options; the rest are paths.

use super::common::{git_opts, read_lines};
use crate::cli::CommandName;
use crate::error::Result;
use crate::git::candidate::name_status_path;
use crate::git::{Backend, GitQuery, Invocation};
use crate::picker::hook::{PagerKind, Preview, PreviewContext};
use crate::picker::selector::Selector;
use crate::picker::{Accept, Command, Context, PickerSpec};

pub struct Diff {
    args: Vec<String>,
}

/// Revisions and options, then paths.
pub(crate) fn split_args(args: &[String], query: &dyn GitQuery) -> (Vec<String>, Vec<String>) {
    let mut commits = Vec::new();
    let mut paths = Vec::new();
    let mut after_separator = false;
    for arg in args {
        if after_separator {
            paths.push(arg.clone());
        } else if arg == "--" {
            after_separator = true;
        } else if arg.starts_with('-') || query.resolves(arg) {
            commits.push(arg.clone());
        } else {
            paths.push(arg.clone());
        }
    }
    (commits, paths)
}

impl Command for Diff {
    const NAME: CommandName = CommandName::Diff;

    fn from_args(args: Vec<String>) -> Self {
        Self { args }
    }

    fn args(&self) -> &[String] {
        &self.args
    }

    fn spec(&self) -> PickerSpec {
        PickerSpec::builder().with_accept(Accept::View).build()
    }

    fn empty_message(&self) -> &'static str {
        "No changes to diff."
    }

    async fn list<B: Backend, S: Selector>(&self, ctx: &Context<'_, B, S>) -> Result<Vec<String>> {
        let (commits, paths) = split_args(&self.args, ctx.backend);
        let lister = Invocation::git(["diff", "--name-status"])
            .args(git_opts(ctx.settings, Self::NAME))
            .args(commits)
            .arg("--")
            .args(paths);
        read_lines(ctx.backend, &lister).await
    }

    fn target(&self, line: &str) -> Option<String> {
        name_status_path(line)
    }

    fn preview(&self, line: &str, ctx: &PreviewContext<'_>) -> Option<Preview> {
        let path = name_status_path(line)?;
        let (commits, _) = split_args(&self.args, ctx.query);
        let diff = Invocation::git(["diff", "--color=always"])
            .arg(ctx.unified())
            .args(commits)
            .arg("--")
            .arg(path);
        Some(Preview::git(diff, PagerKind::Diff))
    }
}
