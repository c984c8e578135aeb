// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `rebase` and `fixup`.
//!
//! ```text
//! rebase  pick sha --> git rebase -i <sha>~ | --root
//! fixup   nothing staged --> "Nothing to fixup..."
//!         pick sha --> git commit --fixup <sha>
//!                  --> GIT_SEQUENCE_EDITOR=: git rebase --autostash -i --autosquash
//!                      <sha>~ | --root
//! ```

use super::common::{log_lister, read_history, rebase_base, run, run_all, show_commit};
use crate::cli::CommandName;
use crate::error::Result;
use crate::git::candidate::commit_sha;
use crate::git::{Backend, Invocation};
use crate::picker::hook::{Preview, PreviewContext};
use crate::picker::selector::Selector;
use crate::picker::{Command, Context, Outcome, PickerSpec};

fn history_spec() -> PickerSpec {
    PickerSpec::builder().with_sort(false).build()
}

// --- rebase ---

pub struct Rebase {
    args: Vec<String>,
}

impl Command for Rebase {
    const NAME: CommandName = CommandName::Rebase;

    fn from_args(args: Vec<String>) -> Self {
        Self { args }
    }

    fn args(&self) -> &[String] {
        &self.args
    }

    fn spec(&self) -> PickerSpec {
        history_spec()
    }

    fn empty_message(&self) -> &'static str {
        "No commits to rebase."
    }

    async fn list<B: Backend, S: Selector>(&self, ctx: &Context<'_, B, S>) -> Result<Vec<String>> {
        read_history(ctx.backend, &log_lister(ctx.settings, Self::NAME, &self.args)).await
    }

    fn target(&self, line: &str) -> Option<String> {
        commit_sha(line)
    }

    fn preview(&self, line: &str, ctx: &PreviewContext<'_>) -> Option<Preview> {
        show_commit(line, ctx, &[])
    }

    async fn act<B: Backend, S: Selector>(
        &self,
        ctx: &Context<'_, B, S>,
        targets: &[String],
    ) -> Result<Outcome> {
        let Some(sha) = targets.first() else {
            return Ok(Outcome::Cancelled);
        };
        let rebase = Invocation::git(["rebase", "-i"]).arg(rebase_base(ctx.backend, sha));
        run(ctx.backend, rebase).await
    }
}

// --- fixup ---

pub struct Fixup {
    args: Vec<String>,
}

impl Command for Fixup {
    const NAME: CommandName = CommandName::Fixup;

    fn from_args(args: Vec<String>) -> Self {
        Self { args }
    }

    fn args(&self) -> &[String] {
        &self.args
    }

    fn spec(&self) -> PickerSpec {
        history_spec()
    }

    fn empty_message(&self) -> &'static str {
        "No commits to fixup."
    }

    async fn bypass<B: Backend, S: Selector>(
        &self,
        ctx: &Context<'_, B, S>,
    ) -> Result<Option<Outcome>> {
        let staged = Invocation::git(["diff", "--cached", "--quiet"]).quiet();
        if ctx.backend.status(&staged).await? == 0 {
            return Ok(Some(Outcome::Empty(
                "Nothing to fixup: there are no staged changes.",
            )));
        }
        Ok(None)
    }

    async fn list<B: Backend, S: Selector>(&self, ctx: &Context<'_, B, S>) -> Result<Vec<String>> {
        read_history(ctx.backend, &log_lister(ctx.settings, Self::NAME, &self.args)).await
    }

    fn target(&self, line: &str) -> Option<String> {
        commit_sha(line)
    }

    fn preview(&self, line: &str, ctx: &PreviewContext<'_>) -> Option<Preview> {
        show_commit(line, ctx, &[])
    }

    async fn act<B: Backend, S: Selector>(
        &self,
        ctx: &Context<'_, B, S>,
        targets: &[String],
    ) -> Result<Outcome> {
        let Some(sha) = targets.first() else {
            return Ok(Outcome::Cancelled);
        };
        let commit = Invocation::git(["commit", "--fixup"]).arg(sha.clone());
        let rebase = Invocation::git(["rebase", "--autostash", "-i", "--autosquash"])
            .arg(rebase_base(ctx.backend, sha))
            .env("GIT_SEQUENCE_EDITOR", ":");
        run_all(ctx.backend, [commit, rebase]).await
    }
}
