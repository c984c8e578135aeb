// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git access.
//!
//! ```text
//!        pickers (cmd/)
//!              |
//!              v
//!      ,------------------,
//!      | backend (traits) |
//!      '--+----------+----'
//!         |          |
//!         v          v
//!    GitQuery     GitExec
//!   (gix, read)  (CLI, list/preview/act)
//!    .is_work_tree  .read(Invocation)
//!    .current_branch .status(Invocation)
//!    .resolves
//!    .has_local_branch
//!         \          /
//!          v        v
//!         LocalBackend
//!
//! candidate.rs: candidate line → target (sha, path, branch, stash)
//! ```

pub mod backend;
pub mod candidate;
pub mod invocation;


pub use backend::{Backend, GitExec, GitQuery, LocalBackend};
pub use invocation::Invocation;
