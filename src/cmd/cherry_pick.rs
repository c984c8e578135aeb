// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `cherry-pick` and `cherry-pick-from-branch`.
//!
//! ```text
//! cherry-pick <target>
//!   git log --right-only --cherry-pick --reverse <current>...<target>
//!   oldest first; a multi-selection is applied oldest first
//!
//! cherry-pick-from-branch
//!   pick a branch --> cherry-pick <branch>
//! ```

use super::common::{
    branches_current_first, git_opts, log_format, read_history, read_lines, rev_log, run,
    show_commit,
};
use crate::cli::CommandName;
use crate::error::{Result, bail_out};
use crate::git::candidate::{branch_ref, commit_sha};
use crate::git::{Backend, Invocation};
use crate::picker::hook::{Preview, PreviewContext};
use crate::picker::order::SelectionOrder;
use crate::picker::selector::Selector;
use crate::picker::{Command, Context, Outcome, PickerSpec, drive};

// --- cherry-pick ---

pub struct CherryPick {
    args: Vec<String>,
}

impl Command for CherryPick {
    const NAME: CommandName = CommandName::CherryPick;

    fn from_args(args: Vec<String>) -> Self {
        Self { args }
    }

    fn args(&self) -> &[String] {
        &self.args
    }

    fn spec(&self) -> PickerSpec {
        PickerSpec::builder()
            .with_multi(true)
            .with_sort(false)
            .with_order(SelectionOrder::Ascending)
            .build()
    }

    fn empty_message(&self) -> &'static str {
        "Nothing to cherry-pick."
    }

    async fn bypass<B: Backend, S: Selector>(
        &self,
        _ctx: &Context<'_, B, S>,
    ) -> Result<Option<Outcome>> {
        if self.args.is_empty() {
            return Err(bail_out("please specify a target branch").into());
        }
        Ok(None)
    }

    async fn list<B: Backend, S: Selector>(&self, ctx: &Context<'_, B, S>) -> Result<Vec<String>> {
        let Some(target) = self.args.first() else {
            return Ok(Vec::new());
        };
        let base = ctx
            .backend
            .current_branch()?
            .unwrap_or_else(|| "HEAD".to_string());
        let lister = Invocation::git([
            "log",
            "--right-only",
            "--cherry-pick",
            "--reverse",
            "--color=always",
        ])
        .arg(log_format(ctx.settings))
        .args(git_opts(ctx.settings, Self::NAME))
        .arg(format!("{base}...{target}"));
        read_history(ctx.backend, &lister).await
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
        let pick = Invocation::git(["cherry-pick"]).args(targets.iter().cloned());
        run(ctx.backend, pick).await
    }
}

// --- cherry-pick-from-branch ---

pub struct CherryPickFromBranch {
    args: Vec<String>,
}

impl Command for CherryPickFromBranch {
    const NAME: CommandName = CommandName::CherryPickFromBranch;

    fn from_args(args: Vec<String>) -> Self {
        Self { args }
    }

    fn args(&self) -> &[String] {
        &self.args
    }

    fn empty_message(&self) -> &'static str {
        "No branches."
    }

    async fn list<B: Backend, S: Selector>(&self, ctx: &Context<'_, B, S>) -> Result<Vec<String>> {
        let lister = Invocation::git(["branch", "--all", "--color=always"])
            .args(git_opts(ctx.settings, Self::NAME));
        Ok(branches_current_first(read_lines(ctx.backend, &lister).await?))
    }

    fn target(&self, line: &str) -> Option<String> {
        branch_ref(line).map(|branch| branch.rev())
    }

    fn preview(&self, line: &str, ctx: &PreviewContext<'_>) -> Option<Preview> {
        Some(rev_log(&self.target(line)?, ctx.settings))
    }

    async fn act<B: Backend, S: Selector>(
        &self,
        ctx: &Context<'_, B, S>,
        targets: &[String],
    ) -> Result<Outcome> {
        let Some(branch) = targets.first() else {
            return Ok(Outcome::Cancelled);
        };
        drive(&CherryPick::from_args(vec![branch.clone()]), ctx).await
    }
}
