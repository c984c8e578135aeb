// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The interactive selection seam.

use crate::error::Result;

/// What the user did with the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Aborted, or accepted with nothing matching.
    Cancelled,
    /// Positions into the candidate list, in the order the selector reported them.
    Picked(Vec<usize>),
}

/// Options for one selector run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorRequest {
    args: Vec<String>,
}

impl SelectorRequest {
    #[must_use]
    pub const fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    /// Selector arguments, later ones overriding earlier ones.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

/// Presents candidates and reports the chosen positions.
#[allow(async_fn_in_trait)]
pub trait Selector {
    /// Runs one selection over `candidates`.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector cannot run or fails unexpectedly.
    async fn select(&self, candidates: &[String], request: &SelectorRequest) -> Result<Selection>;
}
