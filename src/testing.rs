// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Test doubles for the backend and selector seams.
//!
//! ```text
//! MockBackend       scripted GitQuery answers,
//!                   read/status answers matched by command-line prefix,
//!                   every invocation recorded
//! ScriptedSelector  queued Selection answers, every candidate list recorded
//! ```

use std::collections::{BTreeSet, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::{PickResult, Result};
use crate::git::{GitExec, GitQuery, Invocation};
use crate::picker::selector::{Selection, Selector, SelectorRequest};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Longest registered prefix of `line`.
fn lookup<'a, T>(answers: &'a [(String, T)], line: &str) -> Option<&'a T> {
    answers
        .iter()
        .filter(|(prefix, _)| line.starts_with(prefix.as_str()))
        .max_by_key(|(prefix, _)| prefix.len())
        .map(|(_, answer)| answer)
}

/// A backend that answers from a script instead of running git.
#[derive(Debug)]
pub(crate) struct MockBackend {
    workdir: PathBuf,
    work_tree: bool,
    current_branch: Option<String>,
    refs: BTreeSet<String>,
    local_branches: BTreeSet<String>,
    outputs: Vec<(String, String)>,
    statuses: Vec<(String, i32)>,
    reads: Mutex<Vec<Invocation>>,
    runs: Mutex<Vec<Invocation>>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    /// Inside a work tree on branch `main`, with nothing listed.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            workdir: PathBuf::from("."),
            work_tree: true,
            current_branch: Some("main".to_string()),
            refs: BTreeSet::from(["main".to_string(), "HEAD".to_string()]),
            local_branches: BTreeSet::from(["main".to_string()]),
            outputs: Vec::new(),
            statuses: Vec::new(),
            reads: Mutex::new(Vec::new()),
            runs: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub(crate) fn outside_work_tree(mut self) -> Self {
        self.work_tree = false;
        self
    }

    #[must_use]
    pub(crate) fn with_workdir(mut self, workdir: impl Into<PathBuf>) -> Self {
        self.workdir = workdir.into();
        self
    }

    /// Current branch; None for a detached HEAD.
    #[must_use]
    pub(crate) fn with_current_branch(mut self, branch: Option<&str>) -> Self {
        self.current_branch = branch.map(str::to_string);
        self
    }

    /// A revision that resolves.
    #[must_use]
    pub(crate) fn with_ref(mut self, spec: &str) -> Self {
        self.refs.insert(spec.to_string());
        self
    }

    /// A local branch (which also resolves).
    #[must_use]
    pub(crate) fn with_local_branch(mut self, name: &str) -> Self {
        self.local_branches.insert(name.to_string());
        self.refs.insert(name.to_string());
        self
    }

    /// Stdout of reads whose command line starts with `prefix`.
    #[must_use]
    pub(crate) fn with_output(mut self, prefix: &str, stdout: &str) -> Self {
        self.outputs.push((prefix.to_string(), stdout.to_string()));
        self
    }

    /// Exit code of runs whose command line starts with `prefix` (default 0).
    #[must_use]
    pub(crate) fn with_status(mut self, prefix: &str, code: i32) -> Self {
        self.statuses.push((prefix.to_string(), code));
        self
    }

    /// Every read, in order.
    #[must_use]
    pub(crate) fn reads(&self) -> Vec<Invocation> {
        lock(&self.reads).clone()
    }

    /// Every interactive run, in order.
    #[must_use]
    pub(crate) fn runs(&self) -> Vec<Invocation> {
        lock(&self.runs).clone()
    }

    /// Command lines of every interactive run.
    #[must_use]
    pub(crate) fn status_lines(&self) -> Vec<String> {
        lock(&self.runs).iter().map(ToString::to_string).collect()
    }
}

impl GitQuery for MockBackend {
    fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn is_work_tree(&self) -> bool {
        self.work_tree
    }

    fn current_branch(&self) -> PickResult<Option<String>> {
        Ok(self.current_branch.clone())
    }

    fn resolves(&self, spec: &str) -> bool {
        self.refs.contains(spec)
    }

    fn has_local_branch(&self, name: &str) -> bool {
        self.local_branches.contains(name)
    }
}

impl GitExec for MockBackend {
    async fn read(&self, invocation: &Invocation) -> Result<String> {
        lock(&self.reads).push(invocation.clone());
        let line = invocation.to_string();
        Ok(lookup(&self.outputs, &line).cloned().unwrap_or_default())
    }

    async fn status(&self, invocation: &Invocation) -> Result<i32> {
        lock(&self.runs).push(invocation.clone());
        let line = invocation.to_string();
        Ok(lookup(&self.statuses, &line).copied().unwrap_or(0))
    }
}

/// A selector that replays queued answers.
#[derive(Debug, Default)]
pub(crate) struct ScriptedSelector {
    answers: Mutex<VecDeque<Selection>>,
    shown: Mutex<Vec<Vec<String>>>,
}

impl ScriptedSelector {
    /// Answers once with `positions`.
    #[must_use]
    pub(crate) fn picking(positions: &[usize]) -> Self {
        Self::sequence(vec![Selection::Picked(positions.to_vec())])
    }

    /// Answers once with a cancellation.
    #[must_use]
    pub(crate) fn cancelling() -> Self {
        Self::sequence(vec![Selection::Cancelled])
    }

    /// Answers with each selection in turn.
    #[must_use]
    pub(crate) fn sequence(answers: Vec<Selection>) -> Self {
        Self {
            answers: Mutex::new(answers.into()),
            shown: Mutex::new(Vec::new()),
        }
    }

    /// Number of times the selector ran.
    #[must_use]
    pub(crate) fn calls(&self) -> usize {
        lock(&self.shown).len()
    }

    /// Candidate lists it was shown, in order.
    #[must_use]
    pub(crate) fn candidates(&self) -> Vec<Vec<String>> {
        lock(&self.shown).clone()
    }
}

impl Selector for ScriptedSelector {
    async fn select(&self, candidates: &[String], _request: &SelectorRequest) -> Result<Selection> {
        lock(&self.shown).push(candidates.to_vec());
        lock(&self.answers)
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("selector ran with no scripted answer"))
    }
}
