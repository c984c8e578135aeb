// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `stash-show` and `stash-push`.

use super::common::{git_opts, read_lines, run, status_lister, status_preview};
use crate::cli::CommandName;
use crate::error::{Result, bail_out};
use crate::git::candidate::{stash_ref, status_path};
use crate::git::{Backend, Invocation};
use crate::picker::hook::{PagerKind, Preview, PreviewContext};
use crate::picker::selector::Selector;
use crate::picker::{Accept, Command, Context, Outcome, PickerSpec};

// --- stash-show ---

pub struct StashShow {
    args: Vec<String>,
}

impl Command for StashShow {
    const NAME: CommandName = CommandName::StashShow;

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
        "No stashes."
    }

    async fn list<B: Backend, S: Selector>(&self, ctx: &Context<'_, B, S>) -> Result<Vec<String>> {
        let lister = Invocation::git(["stash", "list"])
            .args(git_opts(ctx.settings, Self::NAME))
            .args(self.args.iter().cloned());
        read_lines(ctx.backend, &lister).await
    }

    fn target(&self, line: &str) -> Option<String> {
        stash_ref(line)
    }

    fn preview(&self, line: &str, ctx: &PreviewContext<'_>) -> Option<Preview> {
        let show = Invocation::git(["stash", "show", "--color=always", "-p"])
            .arg(ctx.unified())
            .arg(stash_ref(line)?);
        Some(Preview::git(show, PagerKind::Diff))
    }
}

// --- stash-push ---

/// `stash-push [-m MESSAGE] [PATH...]`
pub struct StashPush {
    args: Vec<String>,
    message: Option<String>,
    paths: Vec<String>,
    /// A message flag given as the last word, with no value.
    dangling: Option<String>,
}

impl StashPush {
    fn push(&self, paths: &[String]) -> Invocation {
        let mut push = Invocation::git(["stash", "push"]);
        if let Some(message) = &self.message {
            push = push.arg("-m").arg(message.clone());
        }
        push.args(["-u", "--"]).args(paths.iter().cloned())
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Command for StashPush {
    const NAME: CommandName = CommandName::StashPush;

    fn from_args(args: Vec<String>) -> Self {
        let mut message = None;
        let mut paths = Vec::new();
        let mut dangling = None;
        let mut words = args.iter();
        while let Some(word) = words.next() {
            if word == "-m" || word == "--message" {
                message = words.next().cloned();
                if message.is_none() {
                    dangling = Some(word.clone());
                }
            } else if let Some(value) = word.strip_prefix("--message=") {
                message = Some(value.to_string());
            } else if let Some(value) = word.strip_prefix("-m").filter(|v| !v.is_empty()) {
                message = Some(value.to_string());
            } else {
                paths.push(word.clone());
            }
        }
        Self {
            args,
            message,
            paths,
            dangling,
        }
    }

    fn args(&self) -> &[String] {
        &self.args
    }

    fn spec(&self) -> PickerSpec {
        PickerSpec::builder().with_multi(true).build()
    }

    fn empty_message(&self) -> &'static str {
        "Nothing to stash."
    }

    async fn bypass<B: Backend, S: Selector>(
        &self,
        ctx: &Context<'_, B, S>,
    ) -> Result<Option<Outcome>> {
        if let Some(flag) = &self.dangling {
            return Err(bail_out(format!("option '{flag}' requires a value")).into());
        }
        if self.paths.is_empty() {
            return Ok(None);
        }
        run(ctx.backend, self.push(&self.paths)).await.map(Some)
    }

    async fn list<B: Backend, S: Selector>(&self, ctx: &Context<'_, B, S>) -> Result<Vec<String>> {
        read_lines(ctx.backend, &status_lister(ctx.settings, Self::NAME)).await
    }

    fn target(&self, line: &str) -> Option<String> {
        status_path(line)
    }

    fn preview(&self, line: &str, ctx: &PreviewContext<'_>) -> Option<Preview> {
        status_preview(line, ctx, true)
    }

    async fn act<B: Backend, S: Selector>(
        &self,
        ctx: &Context<'_, B, S>,
        targets: &[String],
    ) -> Result<Outcome> {
        run(ctx.backend, self.push(targets)).await
    }
}
