// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for git-pick using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! git-pick [global options] <command> [args...]
//!
//! command: log | diff | add | reset | stash-show | stash-push | clean
//!          cherry-pick | cherry-pick-from-branch | rebase | fixup
//!          checkout-file | checkout-branch | checkout-tag | checkout-commit
//!          branch-delete | revert-commit | blame | ignore
//!
//! git-pick --hook {preview|view|copy} <command> [args...] <line>
//! ```
//!
//! Everything after the command name is forwarded verbatim, including
//! arguments that start with `-` or collide with global options.

pub mod global;


use std::fmt::Write as _;

use clap::Parser;
use thiserror::Error;

use crate::cli::global::GlobalOptions;
use crate::picker::hook::HookKind;

/// Fuzzy pickers for everyday git operations.
#[derive(Debug, Parser)]
#[command(
    name = "git-pick",
    author,
    version,
    about = "Fuzzy pickers for everyday git operations",
    long_about = "git-pick Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Lists candidates with git, lets you pick them with fzf and runs\n\
                  the matching git action on the selection. Arguments that already\n\
                  name a target skip the picker.",
    after_help = "CONFIGURATION:\n\n\
                  Settings are read from <config dir>/git-pick/config.toml, or from\n\
                  the file given with --config. GITPICK_* environment variables\n\
                  override the file, e.g. GITPICK_LOG_GIT_OPTS or GITPICK_PAGER."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Internal: render a preview, view or copy for one candidate line.
    #[arg(long, value_enum, hide = true)]
    pub hook: Option<HookKind>,

    /// Picker to run, followed by the arguments forwarded to it
    #[arg(
        value_name = "COMMAND [ARGS]",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub words: Vec<String>,
}

impl Cli {
    /// Resolves the command name and the arguments that follow it.
    ///
    /// # Errors
    ///
    /// Returns a `UsageError` when the command is missing or unknown.
    pub fn command(&self) -> Result<(CommandName, &[String]), UsageError> {
        let (name, args) = self.words.split_first().ok_or(UsageError::Missing)?;
        CommandName::from_name(name)
            .map(|command| (command, args))
            .ok_or_else(|| UsageError::Unknown(name.clone()))
    }
}

/// The first positional word does not name a picker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("no command given")]
    Missing,
    #[error("unknown command '{0}'")]
    Unknown(String),
}

/// The fixed set of pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CommandName {
    Log,
    Diff,
    Add,
    Reset,
    StashShow,
    StashPush,
    Clean,
    CherryPick,
    CherryPickFromBranch,
    Rebase,
    Fixup,
    CheckoutFile,
    CheckoutBranch,
    CheckoutTag,
    CheckoutCommit,
    BranchDelete,
    RevertCommit,
    Blame,
    Ignore,
}

impl CommandName {
    /// Every command, in usage order.
    pub const ALL: [Self; 19] = [
        Self::Log,
        Self::Diff,
        Self::Add,
        Self::Reset,
        Self::StashShow,
        Self::StashPush,
        Self::Clean,
        Self::CherryPick,
        Self::CherryPickFromBranch,
        Self::Rebase,
        Self::Fixup,
        Self::CheckoutFile,
        Self::CheckoutBranch,
        Self::CheckoutTag,
        Self::CheckoutCommit,
        Self::BranchDelete,
        Self::RevertCommit,
        Self::Blame,
        Self::Ignore,
    ];

    /// The name as typed on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Diff => "diff",
            Self::Add => "add",
            Self::Reset => "reset",
            Self::StashShow => "stash-show",
            Self::StashPush => "stash-push",
            Self::Clean => "clean",
            Self::CherryPick => "cherry-pick",
            Self::CherryPickFromBranch => "cherry-pick-from-branch",
            Self::Rebase => "rebase",
            Self::Fixup => "fixup",
            Self::CheckoutFile => "checkout-file",
            Self::CheckoutBranch => "checkout-branch",
            Self::CheckoutTag => "checkout-tag",
            Self::CheckoutCommit => "checkout-commit",
            Self::BranchDelete => "branch-delete",
            Self::RevertCommit => "revert-commit",
            Self::Blame => "blame",
            Self::Ignore => "ignore",
        }
    }

    /// Upper snake case form used in `GITPICK_<CMD>_*` variables.
    #[must_use]
    pub fn env_key(self) -> String {
        self.as_str().replace('-', "_").to_ascii_uppercase()
    }

    /// Looks a command up by its command-line name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.as_str() == name)
    }

    /// One-line description for the usage listing.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Log => "browse commit history",
            Self::Diff => "review changed files",
            Self::Add => "stage files",
            Self::Reset => "unstage files",
            Self::StashShow => "browse stashes",
            Self::StashPush => "stash selected files",
            Self::Clean => "remove untracked files",
            Self::CherryPick => "cherry-pick commits from a branch",
            Self::CherryPickFromBranch => "pick a branch, then cherry-pick from it",
            Self::Rebase => "interactive rebase from a commit",
            Self::Fixup => "fixup a commit with the staged changes",
            Self::CheckoutFile => "discard work-tree changes of files",
            Self::CheckoutBranch => "switch branch, tracking remotes",
            Self::CheckoutTag => "check out a tag",
            Self::CheckoutCommit => "check out a commit",
            Self::BranchDelete => "delete local branches",
            Self::RevertCommit => "revert commits",
            Self::Blame => "blame a file",
            Self::Ignore => "generate .gitignore content from templates",
        }
    }
}

impl std::fmt::Display for CommandName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Usage text listing every valid command.
#[must_use]
pub fn usage() -> String {
    let mut text = String::from("Usage: git-pick [options] <command> [args...]\n\nCommands:\n");
    for command in CommandName::ALL {
        let _ = writeln!(text, "  {:<25}{}", command.as_str(), command.describe());
    }
    text
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}

/// Tries to parse command-line arguments from an iterator.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid.
pub fn try_parse_from<I, T>(iter: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(iter)
}
