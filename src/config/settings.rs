// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Resolved, immutable settings for one run.
//!
//! ```text
//! Config (strings, as written)
//!    |  split_words, defaults, cache dir
//!    v
//! Settings
//!   fzf_opts, pagers, copy_cmd, contexts
//!   ignore: remote, local clone, templates
//!   commands: CommandName → CommandConfig
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use super::Config;
use super::types::{DEFAULT_IGNORE_REMOTE, GlobalConfig};
use super::words::split_words;
use crate::cli::CommandName;
use crate::error::ConfigError;

/// A pager command line, kept both as written (for `GIT_PAGER`) and split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    line: String,
    argv: Vec<String>,
}

impl Pager {
    /// Parses a pager command line.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` if the line cannot be split.
    pub fn parse(key: &str, line: &str) -> Result<Option<Self>, ConfigError> {
        let argv = split(key, line)?;
        Ok((!argv.is_empty()).then(|| Self {
            line: line.to_string(),
            argv,
        }))
    }

    /// The command line as written.
    #[must_use]
    pub fn line(&self) -> &str {
        &self.line
    }

    /// The split argument vector (never empty).
    #[must_use]
    pub fn argv(&self) -> &[String] {
        &self.argv
    }
}

/// Overrides for one command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandConfig {
    /// Replacement lister argv.
    pub lister: Option<Vec<String>>,
    /// Replacement action argv; selection targets are appended.
    pub action: Option<Vec<String>>,
    /// Extra arguments for the git lister.
    pub git_opts: Vec<String>,
    /// Extra fzf options.
    pub fzf_opts: Vec<String>,
}

/// Where the ignore templates live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreSettings {
    /// Clone source.
    pub repo_remote: String,
    /// Local clone (None if no cache directory is known).
    pub repo_local: Option<PathBuf>,
    /// Template directory.
    pub templates: Option<PathBuf>,
}

static EMPTY_COMMAND: CommandConfig = CommandConfig {
    lister: None,
    action: None,
    git_opts: Vec::new(),
    fzf_opts: Vec::new(),
};

/// Settings built once per run and passed down by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub fzf_opts: Vec<String>,
    pub pager: Option<Pager>,
    pub show_pager: Option<Pager>,
    pub diff_pager: Option<Pager>,
    pub blame_pager: Option<Pager>,
    pub ignore_pager: Option<Pager>,
    pub copy_cmd: Option<Vec<String>>,
    pub log_format: String,
    pub preview_context: u32,
    pub fullscreen_context: u32,
    pub ignore: IgnoreSettings,
    commands: BTreeMap<CommandName, CommandConfig>,
}

impl Default for Settings {
    /// Built-in defaults without a cache directory.
    fn default() -> Self {
        let global = GlobalConfig::default();
        Self {
            fzf_opts: Vec::new(),
            pager: None,
            show_pager: None,
            diff_pager: None,
            blame_pager: None,
            ignore_pager: None,
            copy_cmd: None,
            log_format: global.log_format,
            preview_context: global.preview_context,
            fullscreen_context: global.fullscreen_context,
            ignore: IgnoreSettings {
                repo_remote: DEFAULT_IGNORE_REMOTE.to_string(),
                repo_local: None,
                templates: None,
            },
            commands: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Resolves `config`, deriving ignore paths from the user cache directory.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` for an option string that cannot
    /// be split, or for an unknown command section.
    pub fn resolve(config: &Config) -> Result<Self, ConfigError> {
        Self::resolve_in(config, dirs::cache_dir())
    }

    /// Resolves `config` with an explicit cache directory.
    ///
    /// # Errors
    ///
    /// See [`Settings::resolve`].
    pub fn resolve_in(config: &Config, cache_dir: Option<PathBuf>) -> Result<Self, ConfigError> {
        let global = &config.global;

        let repo_local = config.ignore.repo_local.clone().or_else(|| {
            cache_dir.map(|dir| {
                dir.join("git-pick")
                    .join("gi")
                    .join("repos")
                    .join("dvcs")
                    .join("gitignore")
            })
        });
        let templates = config
            .ignore
            .templates
            .clone()
            .or_else(|| repo_local.as_ref().map(|local| local.join("templates")));

        let mut commands = BTreeMap::new();
        for (name, entry) in &config.commands {
            let command = CommandName::from_name(name).ok_or_else(|| ConfigError::InvalidValue {
                section: "commands".to_string(),
                key: name.clone(),
                message: "unknown command".to_string(),
            })?;
            let section = format!("commands.{name}");
            commands.insert(
                command,
                CommandConfig {
                    lister: split_command(&section, "lister", entry.lister.as_deref())?,
                    action: split_command(&section, "action", entry.action.as_deref())?,
                    git_opts: split_in(&section, "git_opts", entry.git_opts.as_deref())?,
                    fzf_opts: split_in(&section, "fzf_opts", entry.fzf_opts.as_deref())?,
                },
            );
        }

        Ok(Self {
            fzf_opts: split_in("global", "fzf_opts", global.fzf_opts.as_deref())?,
            pager: parse_pager("pager", global.pager.as_deref())?,
            show_pager: parse_pager("show_pager", global.show_pager.as_deref())?,
            diff_pager: parse_pager("diff_pager", global.diff_pager.as_deref())?,
            blame_pager: parse_pager("blame_pager", global.blame_pager.as_deref())?,
            ignore_pager: parse_pager("ignore_pager", global.ignore_pager.as_deref())?,
            copy_cmd: split_command("global", "copy_cmd", global.copy_cmd.as_deref())?,
            log_format: global.log_format.clone(),
            preview_context: global.preview_context,
            fullscreen_context: global.fullscreen_context,
            ignore: IgnoreSettings {
                repo_remote: config.ignore.repo_remote.clone(),
                repo_local,
                templates,
            },
            commands,
        })
    }

    /// Overrides for `name` (empty when none are configured).
    #[must_use]
    pub fn command(&self, name: CommandName) -> &CommandConfig {
        self.commands.get(&name).unwrap_or(&EMPTY_COMMAND)
    }

    /// Replaces the overrides for `name`.
    #[must_use]
    pub fn with_command(mut self, name: CommandName, config: CommandConfig) -> Self {
        self.commands.insert(name, config);
        self
    }
}

fn split(key: &str, value: &str) -> Result<Vec<String>, ConfigError> {
    split_words(value).map_err(|e| ConfigError::InvalidValue {
        section: "global".to_string(),
        key: key.to_string(),
        message: format!("{e} in '{value}'"),
    })
}

fn split_in(section: &str, key: &str, value: Option<&str>) -> Result<Vec<String>, ConfigError> {
    value.map_or_else(
        || Ok(Vec::new()),
        |value| {
            split_words(value).map_err(|e| ConfigError::InvalidValue {
                section: section.to_string(),
                key: key.to_string(),
                message: format!("{e} in '{value}'"),
            })
        },
    )
}

fn split_command(
    section: &str,
    key: &str,
    value: Option<&str>,
) -> Result<Option<Vec<String>>, ConfigError> {
    let argv = split_in(section, key, value)?;
    Ok((!argv.is_empty()).then_some(argv))
}

fn parse_pager(key: &str, value: Option<&str>) -> Result<Option<Pager>, ConfigError> {
    value.map_or(Ok(None), |value| Pager::parse(key, value))
}
