// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `reset`: unstage files.

use super::common::{git_opts, path_diff, read_lines, run_all, short_status};
use crate::cli::CommandName;
use crate::error::Result;
use crate::git::candidate::plain;
use crate::git::{Backend, Invocation};
use crate::picker::hook::{Preview, PreviewContext};
use crate::picker::selector::Selector;
use crate::picker::{Command, Context, Outcome, PickerSpec};

pub struct Reset {
    args: Vec<String>,
}

fn unstage(paths: &[String]) -> Invocation {
    Invocation::git(["reset", "-q", "HEAD", "--"]).args(paths.iter().cloned())
}

impl Command for Reset {
    const NAME: CommandName = CommandName::Reset;

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
        "Nothing to unstage."
    }

    async fn bypass<B: Backend, S: Selector>(
        &self,
        ctx: &Context<'_, B, S>,
    ) -> Result<Option<Outcome>> {
        if self.args.is_empty() {
            return Ok(None);
        }
        run_all(ctx.backend, [unstage(&self.args), short_status()]).await.map(Some)
    }

    async fn list<B: Backend, S: Selector>(&self, ctx: &Context<'_, B, S>) -> Result<Vec<String>> {
        let lister = Invocation::git(["diff", "--cached", "--name-only", "--relative"])
            .args(git_opts(ctx.settings, Self::NAME));
        read_lines(ctx.backend, &lister).await
    }

    fn target(&self, line: &str) -> Option<String> {
        plain(line)
    }

    fn preview(&self, line: &str, ctx: &PreviewContext<'_>) -> Option<Preview> {
        Some(path_diff(plain(line)?, ctx, true))
    }

    async fn act<B: Backend, S: Selector>(
        &self,
        ctx: &Context<'_, B, S>,
        targets: &[String],
    ) -> Result<Outcome> {
        run_all(ctx.backend, [unstage(targets), short_status()]).await
    }
}
