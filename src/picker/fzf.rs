// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! fzf as the selector.
//!
//! ```text
//! stdin   "<pos>\t<line>" per candidate
//! args    --delimiter=\t --with-nth=2..  (tag hidden from display and search)
//! exit 0        --> stdout lines --> untag() --> Picked
//! exit 1, 130   --> Cancelled (no match, abort)
//! other         --> ProcessError::NonZeroExit
//! ```

use tracing::debug;

use super::order::{tag, untag};
use super::selector::{Selection, Selector, SelectorRequest};
use crate::core::process::builder::{ProcessBuilder, StreamFlags};
use crate::error::Result;

/// Exit code fzf uses when nothing matched.
const EXIT_NO_MATCH: i32 = 1;
/// Exit code fzf uses when aborted with ctrl-c or esc.
const EXIT_ABORTED: i32 = 130;

/// Runs the `fzf` executable.
#[derive(Debug, Clone)]
pub struct FzfSelector {
    program: String,
}

impl Default for FzfSelector {
    fn default() -> Self {
        Self::new("fzf")
    }
}

impl FzfSelector {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Selector for FzfSelector {
    async fn select(&self, candidates: &[String], request: &SelectorRequest) -> Result<Selection> {
        let output = ProcessBuilder::which(&self.program)?
            .args(request.args())
            .stdin(tag(candidates))
            .capture_stdout()
            .stderr_flags(StreamFlags::INHERIT)
            .success_codes([0, EXIT_NO_MATCH, EXIT_ABORTED])
            .name(self.program.as_str())
            .run()
            .await?;

        if output.exit_code() != 0 {
            debug!(code = output.exit_code(), "selector cancelled");
            return Ok(Selection::Cancelled);
        }
        let positions = untag(output.stdout())?;
        debug!(?positions, "selected");
        Ok(Selection::Picked(positions))
    }
}
