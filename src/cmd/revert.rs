// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `revert-commit`: listed oldest first, reverted newest first.

use super::common::{git_opts, log_format, read_history, run, show_commit};
use crate::cli::CommandName;
use crate::error::Result;
use crate::git::candidate::commit_sha;
use crate::git::{Backend, Invocation};
use crate::picker::hook::{Preview, PreviewContext};
use crate::picker::order::SelectionOrder;
use crate::picker::selector::Selector;
use crate::picker::{Command, Context, Outcome, PickerSpec};

pub struct RevertCommit {
    args: Vec<String>,
}

impl Command for RevertCommit {
    const NAME: CommandName = CommandName::RevertCommit;

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
            .with_order(SelectionOrder::Descending)
            .build()
    }

    fn empty_message(&self) -> &'static str {
        "Nothing to revert."
    }

    async fn bypass<B: Backend, S: Selector>(
        &self,
        ctx: &Context<'_, B, S>,
    ) -> Result<Option<Outcome>> {
        if self.args.is_empty() {
            return Ok(None);
        }
        let revert = Invocation::git(["revert"]).args(self.args.iter().cloned());
        run(ctx.backend, revert).await.map(Some)
    }

    async fn list<B: Backend, S: Selector>(&self, ctx: &Context<'_, B, S>) -> Result<Vec<String>> {
        let lister = Invocation::git(["log", "--reverse", "--color=always"])
            .arg(log_format(ctx.settings))
            .args(git_opts(ctx.settings, Self::NAME));
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
        let revert = Invocation::git(["revert"]).args(targets.iter().cloned());
        run(ctx.backend, revert).await
    }
}
