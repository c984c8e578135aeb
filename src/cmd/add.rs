// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `add`: stage files with work-tree changes.

use super::common::{read_lines, run_all, short_status, status_lister, status_preview};
use crate::cli::CommandName;
use crate::error::Result;
use crate::git::candidate::{status_code, status_path};
use crate::git::{Backend, Invocation};
use crate::picker::hook::{Preview, PreviewContext};
use crate::picker::selector::Selector;
use crate::picker::{Command, Context, Outcome, PickerSpec};

pub struct Add {
    args: Vec<String>,
}

/// Untracked, or changed in the work tree.
fn has_work_tree_change(line: &str) -> bool {
    matches!(status_code(line), Some((x, y)) if y != ' ' && !(x == '!' && y == '!'))
}

impl Command for Add {
    const NAME: CommandName = CommandName::Add;

    fn from_args(args: Vec<String>) -> Self {
        Self { args }
    }

    fn args(&self) -> &[String] {
        &self.args
    }

    fn spec(&self) -> PickerSpec {
        PickerSpec::builder().with_multi(true).build()
    }

    fn empty_message(&self) -> &'static str {
        "Nothing to add."
    }

    async fn bypass<B: Backend, S: Selector>(
        &self,
        ctx: &Context<'_, B, S>,
    ) -> Result<Option<Outcome>> {
        if self.args.is_empty() {
            return Ok(None);
        }
        let add = Invocation::git(["add"]).args(self.args.iter().cloned());
        run_all(ctx.backend, [add, short_status()]).await.map(Some)
    }

    async fn list<B: Backend, S: Selector>(&self, ctx: &Context<'_, B, S>) -> Result<Vec<String>> {
        let lines = read_lines(ctx.backend, &status_lister(ctx.settings, Self::NAME)).await?;
        Ok(lines.into_iter().filter(|line| has_work_tree_change(line)).collect())
    }

    fn target(&self, line: &str) -> Option<String> {
        status_path(line)
    }

    fn preview(&self, line: &str, ctx: &PreviewContext<'_>) -> Option<Preview> {
        status_preview(line, ctx, false)
    }

    async fn act<B: Backend, S: Selector>(
        &self,
        ctx: &Context<'_, B, S>,
        targets: &[String],
    ) -> Result<Outcome> {
        let add = Invocation::git(["add", "--"]).args(targets.iter().cloned());
        run_all(ctx.backend, [add, short_status()]).await
    }
}
