// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `branch-delete`: local branches other than the current one.

use super::common::{git_opts, is_current_branch, read_lines, rev_log, run};
use crate::cli::CommandName;
use crate::error::Result;
use crate::git::candidate::{BranchRef, branch_ref};
use crate::git::{Backend, Invocation};
use crate::picker::hook::{Preview, PreviewContext};
use crate::picker::selector::Selector;
use crate::picker::{Command, Context, Outcome, PickerSpec};

pub struct BranchDelete {
    args: Vec<String>,
}

impl Command for BranchDelete {
    const NAME: CommandName = CommandName::BranchDelete;

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
        "No branches to delete."
    }

    async fn list<B: Backend, S: Selector>(&self, ctx: &Context<'_, B, S>) -> Result<Vec<String>> {
        let lister =
            Invocation::git(["branch", "--color=always"]).args(git_opts(ctx.settings, Self::NAME));
        let lines = read_lines(ctx.backend, &lister).await?;
        Ok(lines
            .into_iter()
            .filter(|line| !is_current_branch(line) && self.target(line).is_some())
            .collect())
    }

    fn target(&self, line: &str) -> Option<String> {
        match branch_ref(line)? {
            BranchRef::Local(name) => Some(name),
            BranchRef::Remote { .. } => None,
        }
    }

    fn preview(&self, line: &str, ctx: &PreviewContext<'_>) -> Option<Preview> {
        Some(rev_log(&self.target(line)?, ctx.settings))
    }

    async fn act<B: Backend, S: Selector>(
        &self,
        ctx: &Context<'_, B, S>,
        targets: &[String],
    ) -> Result<Outcome> {
        let delete = Invocation::git(["branch", "-D"]).args(targets.iter().cloned());
        run(ctx.backend, delete).await
    }
}
