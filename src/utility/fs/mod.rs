// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities with parallel traversal.
//!
//! ```text
//! walk:  find_files()     ignore::WalkParallel + wax glob
//!        WalkOptions      max_depth, links, hidden, gitignore
//! ```

pub mod walk;

#[cfg(test)]
mod tests;
