// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `checkout-file`, `checkout-branch`, `checkout-tag` and `checkout-commit`.
//!
//! ```text
//! with args    checkout-branch -        --> git checkout -
//!              <first arg> resolves     --> git checkout <args>
//!              otherwise                --> git checkout -b <args>
//!
//! remote pick  remotes/<remote>/<name>
//!   no local <name>  --> git checkout --track <remote>/<name>
//!                        failed --> git checkout <remote>/<name>
//!   local <name>     --> git checkout -b track/<name>[-N] --track <remote>/<name>
//! ```

use tracing::debug;

use super::common::{
    branches_current_first, checkout_args, git_opts, log_lister, path_diff, read_history,
    read_lines, rev_log, run, show_commit,
};
use crate::cli::CommandName;
use crate::error::Result;
use crate::git::candidate::{branch_ref, commit_sha, plain};
use crate::git::{Backend, GitQuery, Invocation};
use crate::picker::hook::{Preview, PreviewContext};
use crate::picker::selector::Selector;
use crate::picker::{Command, Context, Outcome, PickerSpec};

// --- checkout-file ---

pub struct CheckoutFile {
    args: Vec<String>,
}

impl Command for CheckoutFile {
    const NAME: CommandName = CommandName::CheckoutFile;

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
        "Nothing to checkout."
    }

    async fn bypass<B: Backend, S: Selector>(
        &self,
        ctx: &Context<'_, B, S>,
    ) -> Result<Option<Outcome>> {
        if self.args.is_empty() {
            return Ok(None);
        }
        let checkout = Invocation::git(["checkout", "--"]).args(self.args.iter().cloned());
        run(ctx.backend, checkout).await.map(Some)
    }

    async fn list<B: Backend, S: Selector>(&self, ctx: &Context<'_, B, S>) -> Result<Vec<String>> {
        let lister =
            Invocation::git(["ls-files", "--modified"]).args(git_opts(ctx.settings, Self::NAME));
        read_lines(ctx.backend, &lister).await
    }

    fn target(&self, line: &str) -> Option<String> {
        plain(line)
    }

    fn preview(&self, line: &str, ctx: &PreviewContext<'_>) -> Option<Preview> {
        Some(path_diff(plain(line)?, ctx, false))
    }

    async fn act<B: Backend, S: Selector>(
        &self,
        ctx: &Context<'_, B, S>,
        targets: &[String],
    ) -> Result<Outcome> {
        let checkout = Invocation::git(["checkout", "--"]).args(targets.iter().cloned());
        run(ctx.backend, checkout).await
    }
}

// --- checkout-branch ---

pub struct CheckoutBranch {
    args: Vec<String>,
}

/// First `track/<name>`, `track/<name>-2`, ... with no local branch.
fn tracking_name(query: &impl GitQuery, name: &str) -> String {
    let base = format!("track/{name}");
    if !query.has_local_branch(&base) {
        return base;
    }
    let mut suffix = 2;
    loop {
        let candidate = format!("{base}-{suffix}");
        if !query.has_local_branch(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}

impl Command for CheckoutBranch {
    const NAME: CommandName = CommandName::CheckoutBranch;

    fn from_args(args: Vec<String>) -> Self {
        Self { args }
    }

    fn args(&self) -> &[String] {
        &self.args
    }

    fn empty_message(&self) -> &'static str {
        "No branches."
    }

    async fn bypass<B: Backend, S: Selector>(
        &self,
        ctx: &Context<'_, B, S>,
    ) -> Result<Option<Outcome>> {
        match self.args.as_slice() {
            [] => Ok(None),
            [previous] if previous == "-" => {
                run(ctx.backend, Invocation::git(["checkout", "-"])).await.map(Some)
            }
            args => checkout_args(ctx.backend, args).await.map(Some),
        }
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
        let Some(target) = targets.first() else {
            return Ok(Outcome::Cancelled);
        };
        let backend = ctx.backend;
        if backend.has_local_branch(target) {
            return run(backend, Invocation::git(["checkout"]).arg(target.clone())).await;
        }
        let Some((_, name)) = target.split_once('/') else {
            return run(backend, Invocation::git(["checkout"]).arg(target.clone())).await;
        };

        if backend.has_local_branch(name) {
            let alt = tracking_name(backend, name);
            debug!(branch = %name, alt = %alt, "local branch exists, tracking under another name");
            let checkout = Invocation::git(["checkout", "-b"])
                .arg(alt)
                .arg("--track")
                .arg(target.clone());
            return run(backend, checkout).await;
        }

        let track = Invocation::git(["checkout", "--track"]).arg(target.clone());
        match run(backend, track).await? {
            Outcome::Completed(0) => Ok(Outcome::Completed(0)),
            _ => {
                debug!(target = %target, "tracking failed, checking out detached");
                run(backend, Invocation::git(["checkout"]).arg(target.clone())).await
            }
        }
    }
}

// --- checkout-tag ---

pub struct CheckoutTag {
    args: Vec<String>,
}

impl Command for CheckoutTag {
    const NAME: CommandName = CommandName::CheckoutTag;

    fn from_args(args: Vec<String>) -> Self {
        Self { args }
    }

    fn args(&self) -> &[String] {
        &self.args
    }

    fn spec(&self) -> PickerSpec {
        PickerSpec::builder().with_sort(false).build()
    }

    fn empty_message(&self) -> &'static str {
        "No tags."
    }

    async fn bypass<B: Backend, S: Selector>(
        &self,
        ctx: &Context<'_, B, S>,
    ) -> Result<Option<Outcome>> {
        if self.args.is_empty() {
            return Ok(None);
        }
        checkout_args(ctx.backend, &self.args).await.map(Some)
    }

    async fn list<B: Backend, S: Selector>(&self, ctx: &Context<'_, B, S>) -> Result<Vec<String>> {
        let lister = Invocation::git(["tag", "-l", "--sort=-v:refname"])
            .args(git_opts(ctx.settings, Self::NAME));
        read_lines(ctx.backend, &lister).await
    }

    fn target(&self, line: &str) -> Option<String> {
        plain(line)
    }

    fn preview(&self, line: &str, ctx: &PreviewContext<'_>) -> Option<Preview> {
        Some(rev_log(&plain(line)?, ctx.settings))
    }

    async fn act<B: Backend, S: Selector>(
        &self,
        ctx: &Context<'_, B, S>,
        targets: &[String],
    ) -> Result<Outcome> {
        let checkout = Invocation::git(["checkout"]).args(targets.iter().take(1).cloned());
        run(ctx.backend, checkout).await
    }
}

// --- checkout-commit ---

pub struct CheckoutCommit {
    args: Vec<String>,
}

impl Command for CheckoutCommit {
    const NAME: CommandName = CommandName::CheckoutCommit;

    fn from_args(args: Vec<String>) -> Self {
        Self { args }
    }

    fn args(&self) -> &[String] {
        &self.args
    }

    fn spec(&self) -> PickerSpec {
        PickerSpec::builder().with_sort(false).build()
    }

    fn empty_message(&self) -> &'static str {
        "No commits to check out."
    }

    async fn bypass<B: Backend, S: Selector>(
        &self,
        ctx: &Context<'_, B, S>,
    ) -> Result<Option<Outcome>> {
        if self.args.is_empty() {
            return Ok(None);
        }
        checkout_args(ctx.backend, &self.args).await.map(Some)
    }

    async fn list<B: Backend, S: Selector>(&self, ctx: &Context<'_, B, S>) -> Result<Vec<String>> {
        read_history(ctx.backend, &log_lister(ctx.settings, Self::NAME, &[])).await
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
        let checkout = Invocation::git(["checkout"]).args(targets.iter().take(1).cloned());
        run(ctx.backend, checkout).await
    }
}
