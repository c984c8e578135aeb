// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CommandName --> with_command! --> concrete Command type
//!   run()       picker::drive   (list, select, act)
//!   run_hook()  picker::hook    (preview, view, copy)
//! ```

pub mod add;
pub mod blame;
pub mod branch;
pub mod checkout;
pub mod cherry_pick;
pub mod clean;
pub mod diff;
pub mod ignore;
pub mod log;
pub mod rebase;
pub mod reset;
pub mod revert;
pub mod stash;

pub(crate) mod common;


use crate::cli::CommandName;
use crate::config::Settings;
use crate::error::Result;
use crate::git::Backend;
use crate::picker::hook::{self, HookKind};
use crate::picker::selector::Selector;
use crate::picker::{Command, Context, Outcome, drive};

/// Binds `$command` to the picker named by `$name` built from `$args`.
macro_rules! with_command {
    ($name:expr, $args:expr, |$command:ident| $body:expr) => {
        match $name {
            CommandName::Log => { let $command = log::Log::from_args($args); $body }
            CommandName::Diff => { let $command = diff::Diff::from_args($args); $body }
            CommandName::Add => { let $command = add::Add::from_args($args); $body }
            CommandName::Reset => { let $command = reset::Reset::from_args($args); $body }
            CommandName::StashShow => { let $command = stash::StashShow::from_args($args); $body }
            CommandName::StashPush => { let $command = stash::StashPush::from_args($args); $body }
            CommandName::Clean => { let $command = clean::Clean::from_args($args); $body }
            CommandName::CherryPick => {
                let $command = cherry_pick::CherryPick::from_args($args);
                $body
            }
            CommandName::CherryPickFromBranch => {
                let $command = cherry_pick::CherryPickFromBranch::from_args($args);
                $body
            }
            CommandName::Rebase => { let $command = rebase::Rebase::from_args($args); $body }
            CommandName::Fixup => { let $command = rebase::Fixup::from_args($args); $body }
            CommandName::CheckoutFile => {
                let $command = checkout::CheckoutFile::from_args($args);
                $body
            }
            CommandName::CheckoutBranch => {
                let $command = checkout::CheckoutBranch::from_args($args);
                $body
            }
            CommandName::CheckoutTag => {
                let $command = checkout::CheckoutTag::from_args($args);
                $body
            }
            CommandName::CheckoutCommit => {
                let $command = checkout::CheckoutCommit::from_args($args);
                $body
            }
            CommandName::BranchDelete => {
                let $command = branch::BranchDelete::from_args($args);
                $body
            }
            CommandName::RevertCommit => {
                let $command = revert::RevertCommit::from_args($args);
                $body
            }
            CommandName::Blame => { let $command = blame::Blame::from_args($args); $body }
            CommandName::Ignore => { let $command = ignore::Ignore::from_args($args); $body }
        }
    };
}

/// Runs the picker `name` with its forwarded arguments.
///
/// # Errors
///
/// Returns an error if the picker pipeline fails.
pub async fn run<B: Backend, S: Selector>(
    name: CommandName,
    args: &[String],
    ctx: &Context<'_, B, S>,
) -> Result<Outcome> {
    with_command!(name, args.to_vec(), |command| drive(&command, ctx).await)
}

/// Runs one selector callback for the picker `name` on `line`.
///
/// # Errors
///
/// Returns an error if the preview, view or copy fails.
pub async fn run_hook<B: Backend>(
    kind: HookKind,
    name: CommandName,
    args: &[String],
    line: &str,
    backend: &B,
    settings: &Settings,
) -> Result<Outcome> {
    with_command!(name, args.to_vec(), |command| {
        hook::run(&command, kind, line, backend, settings).await
    })
}
