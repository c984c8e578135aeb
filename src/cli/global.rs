// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options, given before the command name.
//!
//! ```text
//! --config FILE     ← Replaces the default config file (must exist)
//! --log-level N     ← Console verbosity (0-5, default 2)
//! --file-log-level  ← File verbosity (defaults to 5)
//! --log-file FILE   ← Optional log file
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::logging::{LogConfig, LogLevel};

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Configuration file to use instead of <config dir>/git-pick/config.toml.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(
        short = 'l',
        long = "log-level",
        value_name = "LEVEL",
        value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// File log level (defaults to 5 when --log-file is given).
    #[arg(
        long = "file-log-level",
        value_name = "LEVEL",
        value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Builds the logging configuration from these options.
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        let console_level = self
            .log_level
            .and_then(LogLevel::from_u8)
            .unwrap_or(LogLevel::WARN);

        let file_level = self
            .file_log_level
            .and_then(LogLevel::from_u8)
            .unwrap_or(LogLevel::TRACE);

        LogConfig::builder()
            .with_console_level(console_level)
            .with_file_level(file_level)
            .maybe_with_log_file(self.log_file.as_ref().map(|p| p.display().to_string()))
            .build()
    }

    /// Arguments that reproduce these options on a hook re-invocation.
    #[must_use]
    pub fn forwarded_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(config) = &self.config {
            args.push("--config".to_string());
            args.push(config.display().to_string());
        }
        if let Some(level) = self.log_level {
            args.push(format!("--log-level={level}"));
        }
        if let Some(level) = self.file_log_level {
            args.push(format!("--file-log-level={level}"));
        }
        if let Some(file) = &self.log_file {
            args.push("--log-file".to_string());
            args.push(file.display().to_string());
        }
        args
    }
}
