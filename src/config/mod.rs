// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for git-pick.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. --config FILE (required) or <config dir>/git-pick/config.toml (optional)
//! 3. GITPICK_* env vars
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! GITPICK_PAGER="less -R"         → global.pager
//! GITPICK_FZF_DEFAULT_OPTS=...    → global.fzf_opts
//! GITPICK_GI_TEMPLATES=/path      → ignore.templates
//! GITPICK_STASH_SHOW_FZF_OPTS=... → commands.stash-show.fzf_opts
//! ```
//!
//! # Command-Specific Overrides
//!
//! ```toml
//! [global]
//! fzf_opts = "--height=100%"
//!
//! [commands.log]
//! git_opts = "--no-merges"
//! ```

pub mod loader;
pub mod settings;
pub mod types;
pub mod words;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::cli::CommandName;
use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
pub use settings::{CommandConfig, IgnoreSettings, Pager, Settings};
use types::{CommandEntry, GlobalConfig, IgnoreConfig};

/// Prefix of every environment override.
pub const ENV_PREFIX: &str = "GITPICK_";

/// Complete application configuration, as written in TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Ignore-template store.
    pub ignore: IgnoreConfig,
    /// Per-command overrides, keyed by command name.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub commands: BTreeMap<String, CommandEntry>,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use git_pick::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("git-pick.toml")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Default per-user configuration file.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("git-pick").join("config.toml"))
    }

    /// Loads the file layer: `explicit` if given, else the per-user file when present.
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit file is missing, or if any file is
    /// not valid TOML for the `Config` structure.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let loader = match (explicit, Self::default_path()) {
            (Some(path), _) => Self::builder().add_toml_file(path),
            (None, Some(path)) => Self::builder().add_toml_file_optional(path),
            (None, None) => Self::builder(),
        };
        for line in loader.format_loaded_files() {
            tracing::debug!(source = %line, "config");
        }
        loader.build()
    }

    /// Overlays `GITPICK_*` variables from `vars`.
    ///
    /// Empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` if a context variable is not a number.
    pub fn apply_env(
        &mut self,
        vars: &BTreeMap<String, String>,
    ) -> std::result::Result<(), ConfigError> {
        let get = |suffix: &str| {
            vars.get(&format!("{ENV_PREFIX}{suffix}"))
                .filter(|value| !value.is_empty())
                .cloned()
        };

        let global = &mut self.global;
        for (suffix, slot) in [
            ("FZF_DEFAULT_OPTS", &mut global.fzf_opts),
            ("PAGER", &mut global.pager),
            ("SHOW_PAGER", &mut global.show_pager),
            ("DIFF_PAGER", &mut global.diff_pager),
            ("BLAME_PAGER", &mut global.blame_pager),
            ("IGNORE_PAGER", &mut global.ignore_pager),
            ("COPY_CMD", &mut global.copy_cmd),
        ] {
            if let Some(value) = get(suffix) {
                *slot = Some(value);
            }
        }
        if let Some(value) = get("LOG_FORMAT") {
            global.log_format = value;
        }
        if let Some(value) = get("PREVIEW_CONTEXT") {
            global.preview_context = parse_context("preview_context", &value)?;
        }
        if let Some(value) = get("FULLSCREEN_CONTEXT") {
            global.fullscreen_context = parse_context("fullscreen_context", &value)?;
        }

        if let Some(value) = get("GI_REPO_REMOTE") {
            self.ignore.repo_remote = value;
        }
        if let Some(value) = get("GI_REPO_LOCAL") {
            self.ignore.repo_local = Some(PathBuf::from(value));
        }
        if let Some(value) = get("GI_TEMPLATES") {
            self.ignore.templates = Some(PathBuf::from(value));
        }

        for command in CommandName::ALL {
            let key = command.env_key();
            let mut entry = CommandEntry {
                git_opts: get(&format!("{key}_GIT_OPTS")),
                fzf_opts: get(&format!("{key}_FZF_OPTS")),
                lister: get(&format!("{key}_LISTER")),
                action: get(&format!("{key}_ACTION")),
            };
            if entry.is_empty() {
                continue;
            }
            let existing = self.commands.entry(command.as_str().to_string()).or_default();
            if entry.git_opts.is_some() {
                existing.git_opts = entry.git_opts.take();
            }
            if entry.fzf_opts.is_some() {
                existing.fzf_opts = entry.fzf_opts.take();
            }
            if entry.lister.is_some() {
                existing.lister = entry.lister.take();
            }
            if entry.action.is_some() {
                existing.action = entry.action.take();
            }
        }

        Ok(())
    }
}

/// Collects the process environment variables that start with [`ENV_PREFIX`].
#[must_use]
pub fn env_vars() -> BTreeMap<String, String> {
    std::env::vars_os()
        .filter_map(|(key, value)| {
            let key = key.into_string().ok()?;
            key.starts_with(ENV_PREFIX)
                .then(|| (key, value.to_string_lossy().into_owned()))
        })
        .collect()
}

fn parse_context(key: &str, value: &str) -> std::result::Result<u32, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        section: "global".to_string(),
        key: key.to_string(),
        message: format!("expected a number of lines, got '{value}'"),
    })
}
