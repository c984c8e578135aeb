// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `clean`: remove untracked and ignored files.

use super::common::{git_opts, read_lines, run};
use crate::cli::CommandName;
use crate::error::Result;
use crate::git::candidate::clean_path;
use crate::git::{Backend, Invocation};
use crate::picker::hook::{PagerKind, Preview, PreviewContext};
use crate::picker::selector::Selector;
use crate::picker::{Command, Context, Outcome, PickerSpec};

pub struct Clean {
    args: Vec<String>,
}

impl Command for Clean {
    const NAME: CommandName = CommandName::Clean;

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
        "Nothing to clean."
    }

    /// Dry run of the same clean.
    async fn list<B: Backend, S: Selector>(&self, ctx: &Context<'_, B, S>) -> Result<Vec<String>> {
        let lister = Invocation::git(["clean", "-xdffn"])
            .args(git_opts(ctx.settings, Self::NAME))
            .args(self.args.iter().cloned());
        read_lines(ctx.backend, &lister).await
    }

    fn target(&self, line: &str) -> Option<String> {
        clean_path(line)
    }

    fn preview(&self, line: &str, _ctx: &PreviewContext<'_>) -> Option<Preview> {
        Some(Preview::file(clean_path(line)?, PagerKind::None))
    }

    async fn act<B: Backend, S: Selector>(
        &self,
        ctx: &Context<'_, B, S>,
        targets: &[String],
    ) -> Result<Outcome> {
        let clean = Invocation::git(["clean", "-xdff", "--"]).args(targets.iter().cloned());
        run(ctx.backend, clean).await
    }
}
