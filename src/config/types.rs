// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for git-pick.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, IgnoreConfig
//! commands: command name → CommandEntry
//! ```
//!
//! Option strings are kept as written here; [`super::Settings`] splits them.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default `--format` for history listers.
pub const DEFAULT_LOG_FORMAT: &str = "%C(auto)%h%d %s %C(black)%C(bold)%cr%Creset";

/// Default upstream of the ignore-template collection.
pub const DEFAULT_IGNORE_REMOTE: &str = "https://github.com/dvcs/gitignore";

/// Global options (`[global]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Extra fzf options applied to every picker.
    pub fzf_opts: Option<String>,
    /// General pager for full-page views.
    pub pager: Option<String>,
    /// Pager for `git show` output.
    pub show_pager: Option<String>,
    /// Pager for diffs.
    pub diff_pager: Option<String>,
    /// Pager for `git blame`.
    pub blame_pager: Option<String>,
    /// Pager for ignore-template previews.
    pub ignore_pager: Option<String>,
    /// Clipboard command for the copy binding.
    pub copy_cmd: Option<String>,
    /// Pretty format for history listers.
    pub log_format: String,
    /// Diff context lines in previews.
    pub preview_context: u32,
    /// Diff context lines in full-page views.
    pub fullscreen_context: u32,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            fzf_opts: None,
            pager: None,
            show_pager: None,
            diff_pager: None,
            blame_pager: None,
            ignore_pager: None,
            copy_cmd: None,
            log_format: DEFAULT_LOG_FORMAT.to_string(),
            preview_context: 3,
            fullscreen_context: 10,
        }
    }
}

/// Ignore-template store (`[ignore]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IgnoreConfig {
    /// Clone source of the template collection.
    pub repo_remote: String,
    /// Local clone; defaults under the user cache directory.
    pub repo_local: Option<PathBuf>,
    /// Template directory; defaults to `<repo_local>/templates`.
    pub templates: Option<PathBuf>,
}

impl Default for IgnoreConfig {
    fn default() -> Self {
        Self {
            repo_remote: DEFAULT_IGNORE_REMOTE.to_string(),
            repo_local: None,
            templates: None,
        }
    }
}

/// Per-command overrides (`[commands.<name>]`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommandEntry {
    /// Extra arguments for the command's git lister.
    pub git_opts: Option<String>,
    /// Extra fzf options for this command.
    pub fzf_opts: Option<String>,
    /// Command line replacing the built-in lister.
    pub lister: Option<String>,
    /// Command line replacing the built-in action; targets are appended.
    pub action: Option<String>,
}

impl CommandEntry {
    /// Returns true if no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.git_opts.is_none()
            && self.fzf_opts.is_none()
            && self.lister.is_none()
            && self.action.is_none()
    }
}
