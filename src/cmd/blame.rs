// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `blame`: pick a tracked file, blame it through the blame pager.

use super::common::{git_opts, read_lines, run};
use crate::cli::CommandName;
use crate::config::Settings;
use crate::error::Result;
use crate::git::candidate::plain;
use crate::git::{Backend, Invocation};
use crate::picker::hook::{PagerKind, Preview, PreviewContext};
use crate::picker::selector::Selector;
use crate::picker::{Command, Context, Outcome};

pub struct Blame {
    args: Vec<String>,
}

/// `git blame <args>`, paged by `blame_pager` when set.
fn blame<I, S>(settings: &Settings, args: I) -> Invocation
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let blame = Invocation::git(["blame"]).args(args);
    match &settings.blame_pager {
        Some(pager) => blame.env("GIT_PAGER", pager.line()),
        None => blame,
    }
}

impl Command for Blame {
    const NAME: CommandName = CommandName::Blame;

    fn from_args(args: Vec<String>) -> Self {
        Self { args }
    }

    fn args(&self) -> &[String] {
        &self.args
    }

    fn empty_message(&self) -> &'static str {
        "No tracked files."
    }

    async fn bypass<B: Backend, S: Selector>(
        &self,
        ctx: &Context<'_, B, S>,
    ) -> Result<Option<Outcome>> {
        if self.args.is_empty() {
            return Ok(None);
        }
        run(ctx.backend, blame(ctx.settings, self.args.iter().cloned()))
            .await
            .map(Some)
    }

    async fn list<B: Backend, S: Selector>(&self, ctx: &Context<'_, B, S>) -> Result<Vec<String>> {
        let lister = Invocation::git(["ls-files"]).args(git_opts(ctx.settings, Self::NAME));
        read_lines(ctx.backend, &lister).await
    }

    fn target(&self, line: &str) -> Option<String> {
        plain(line)
    }

    fn preview(&self, line: &str, _ctx: &PreviewContext<'_>) -> Option<Preview> {
        Some(Preview::file(plain(line)?, PagerKind::None))
    }

    async fn act<B: Backend, S: Selector>(
        &self,
        ctx: &Context<'_, B, S>,
        targets: &[String],
    ) -> Result<Outcome> {
        run(ctx.backend, blame(ctx.settings, targets.iter().take(1).cloned())).await
    }
}
