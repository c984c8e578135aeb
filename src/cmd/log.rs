// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `log`: browse history, enter opens the commit.

use super::common::{log_lister, pathspec, read_history, show_commit};
use crate::cli::CommandName;
use crate::error::Result;
use crate::git::Backend;
use crate::git::candidate::commit_sha;
use crate::picker::hook::{Preview, PreviewContext};
use crate::picker::selector::Selector;
use crate::picker::{Accept, Command, Context, PickerSpec};

pub struct Log {
    args: Vec<String>,
}

impl Command for Log {
    const NAME: CommandName = CommandName::Log;

    fn from_args(args: Vec<String>) -> Self {
        Self { args }
    }

    fn args(&self) -> &[String] {
        &self.args
    }

    fn spec(&self) -> PickerSpec {
        PickerSpec::builder()
            .with_sort(false)
            .with_accept(Accept::View)
            .build()
    }

    fn empty_message(&self) -> &'static str {
        "No commits to show."
    }

    async fn list<B: Backend, S: Selector>(&self, ctx: &Context<'_, B, S>) -> Result<Vec<String>> {
        read_history(ctx.backend, &log_lister(ctx.settings, Self::NAME, &self.args)).await
    }

    fn target(&self, line: &str) -> Option<String> {
        commit_sha(line)
    }

    /// Limited to the paths the history was filtered by.
    fn preview(&self, line: &str, ctx: &PreviewContext<'_>) -> Option<Preview> {
        show_commit(line, ctx, pathspec(&self.args))
    }
}
