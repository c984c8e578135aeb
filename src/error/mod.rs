// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              PickError (~24 bytes)
//!                     |
//!   +------+------+---+---+--------+-------+
//!   |      |      |       |        |       |
//!   v      v      v       v        v       v
//! Bail    Git   Cfg    Proc    Template  Stale/Io/Other
//!         Box   Box    Box       Box
//!
//! Sub-errors (unboxed internally):
//!   Git       NotARepository, CommandFailed, CloneFailed, Gix
//!   Config    ParseError, InvalidValue, NoCacheDir
//!   Process   ExecutableNotFound, SpawnFailed, NonZeroExit
//!   Template  StoreMissing, ReadFailed
//! ```
//!
//! Outcomes that are not failures (empty list, user cancel) are not errors;
//! see [`crate::picker::Outcome`].

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`PickError`].
pub type PickResult<T> = std::result::Result<T, PickError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum PickError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Ignore-template store error.
    #[error("template error: {0}")]
    Template(#[from] Box<TemplateError>),

    /// The selector returned a position that is not in the current candidate list.
    #[error("stale selection: position {position} is outside the {len} listed candidates")]
    StaleSelection { position: usize, len: usize },

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Create a fatal [`PickError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> PickError {
    PickError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for PickError {
                fn from(err: $error) -> Self {
                    PickError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    ConfigError => Config,
    ProcessError => Process,
    TemplateError => Template,
    std::io::Error => Io,
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to discover repository from path.
    #[error("failed to discover repository: {0}")]
    Discover(#[from] Box<gix::discover::Error>),

    /// Failed to get HEAD reference.
    #[error("failed to get head reference: {0}")]
    Head(#[from] gix::reference::find::existing::Error),
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// The working directory is not inside a git work tree.
    #[error("not inside a git work tree: {path}")]
    NotARepository { path: String },

    /// Git command execution failed.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),

    /// Clone operation failed.
    #[error("failed to clone {url}: {message}")]
    CloneFailed { url: String, message: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// No per-user cache directory is available for the ignore-template clone.
    #[error("no cache directory available; set GITPICK_GI_REPO_LOCAL")]
    NoCacheDir,
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with an unexpected status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },
}

// --- Template Errors ---

/// Ignore-template store errors.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The template directory does not exist.
    #[error("template directory not found: {path}")]
    StoreMissing { path: String },

    /// A template file could not be read.
    #[error("failed to read template '{path}': {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
