// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! GitQuery (read, sync)   --> gix, no subprocess
//! GitExec  (run, async)   --> git CLI via ProcessBuilder
//! Backend = GitQuery + GitExec
//! ```
//!
//! Pickers are generic over [`Backend`] so tests can swap in a recording
//! backend.

use crate::core::process::builder::{ProcessBuilder, ProcessFlags};
use crate::error::{GitError, GixError, PickError, PickResult, Result};
use crate::git::Invocation;
use std::path::{Path, PathBuf};
use tracing::debug;

// --- Query Trait (Read-only operations) ---

/// Read-only git queries.
pub trait GitQuery {
    /// Directory every invocation runs in.
    fn workdir(&self) -> &Path;

    /// Check if the working directory is inside a git work tree.
    fn is_work_tree(&self) -> bool;

    /// Get current branch name (None if HEAD is detached).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or head resolution fails.
    fn current_branch(&self) -> PickResult<Option<String>>;

    /// Check whether `spec` names an existing reference or commit.
    fn resolves(&self, spec: &str) -> bool;

    /// Check whether `refs/heads/<name>` exists.
    fn has_local_branch(&self, name: &str) -> bool;
}

// --- Exec Trait (subprocesses) ---

/// Runs invocations in the working directory.
#[allow(async_fn_in_trait)]
pub trait GitExec {
    /// Runs `invocation` and returns its stdout.
    ///
    /// # Errors
    ///
    /// Returns a `GitError::CommandFailed` (with stderr) on a non-zero exit,
    /// or a `ProcessError` if the program cannot be found or spawned.
    async fn read(&self, invocation: &Invocation) -> Result<String>;

    /// Runs `invocation` attached to the terminal and returns its exit code.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if the program cannot be found or spawned.
    async fn status(&self, invocation: &Invocation) -> Result<i32>;
}

/// Everything a picker needs from git.
pub trait Backend: GitQuery + GitExec {}

impl<T: GitQuery + GitExec> Backend for T {}

// --- LocalBackend Implementation ---

/// Backend for a directory on disk: gix for queries, the CLI for the rest.
#[derive(Debug, Clone)]
pub struct LocalBackend {
    path: PathBuf,
}

impl LocalBackend {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backend for the process working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn current() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(PickError::from)?;
        Ok(Self::new(cwd))
    }

    fn repo(&self) -> PickResult<gix::Repository> {
        Ok(gix::discover(&self.path)
            .map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?)
    }

    fn builder(&self, invocation: &Invocation) -> Result<ProcessBuilder> {
        let mut builder = ProcessBuilder::which(invocation.program())?
            .args(invocation.arguments())
            .cwd(&self.path)
            .env_var("GIT_TERMINAL_PROMPT", "0")
            .name(invocation.program())
            .flag(ProcessFlags::ALLOW_FAILURE);
        for (key, value) in invocation.env_vars() {
            builder = builder.env_var(key, value);
        }
        Ok(builder)
    }
}

impl GitQuery for LocalBackend {
    fn workdir(&self) -> &Path {
        &self.path
    }

    fn is_work_tree(&self) -> bool {
        self.repo().is_ok_and(|repo| repo.workdir().is_some())
    }

    fn current_branch(&self) -> PickResult<Option<String>> {
        let repo = self.repo()?;
        let head = repo
            .head_name()
            .map_err(|e| GitError::Gix(GixError::Head(e)))?;
        Ok(head.map(|name| name.shorten().to_string()))
    }

    fn resolves(&self, spec: &str) -> bool {
        if spec.is_empty() || spec.starts_with('-') {
            return false;
        }
        self.repo()
            .is_ok_and(|repo| repo.rev_parse_single(spec).is_ok())
    }

    fn has_local_branch(&self, name: &str) -> bool {
        let full = format!("refs/heads/{name}");
        self.repo().is_ok_and(|repo| {
            repo.try_find_reference(full.as_str())
                .ok()
                .flatten()
                .is_some()
        })
    }
}

impl GitExec for LocalBackend {
    async fn read(&self, invocation: &Invocation) -> Result<String> {
        let output = self.builder(invocation)?.capture_output().run().await?;
        if !output.success() {
            return Err(PickError::from(GitError::CommandFailed {
                command: invocation.to_string(),
                message: output.stderr().trim().to_string(),
            })
            .into());
        }
        Ok(output.into_stdout())
    }

    async fn status(&self, invocation: &Invocation) -> Result<i32> {
        let builder = self.builder(invocation)?.inherit_stdin();
        let builder = if invocation.is_quiet() {
            builder.quiet()
        } else {
            builder.inherit_stdio()
        };
        let output = builder.run().await?;
        debug!(cmd = %invocation, exit_code = output.exit_code(), "finished");
        Ok(output.exit_code())
    }
}

#[cfg(test)]
mod tests;
