// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Position tagging.
//!
//! ```text
//! candidates        tag()              selector output    untag()
//! "abc fix"   -->   "0\tabc fix"  -->  "2\tdef feat"  --> [2, 0]
//! "def feat"        "1\tdef feat"      "0\tabc fix"
//!                                                           |
//!                                          resolve(order)   v
//!                                       Ascending  --> [0, 2]
//!                                       Descending --> [2, 0]
//!                                       Clicked    --> [2, 0]
//! ```
//!
//! The tag survives filtering, so a selection always maps back to a line of
//! the list that was shown.

use std::fmt::Write as _;

use crate::error::{PickError, PickResult};

/// How a multi-selection is ordered before the action sees it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionOrder {
    /// As the selector returned it.
    #[default]
    Clicked,
    /// By increasing list position.
    Ascending,
    /// By decreasing list position.
    Descending,
}

/// Prefixes every candidate with its position and a tab.
#[must_use]
pub fn tag(candidates: &[String]) -> String {
    let mut text = String::new();
    for (position, line) in candidates.iter().enumerate() {
        let _ = writeln!(text, "{position}\t{line}");
    }
    text
}

/// Reads the positions back from tagged selector output.
///
/// # Errors
///
/// Returns `PickError::Other` for a line without a numeric tag.
pub fn untag(output: &str) -> PickResult<Vec<usize>> {
    output
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.split_once('\t')
                .and_then(|(tag, _)| tag.parse().ok())
                .ok_or_else(|| {
                    PickError::Other(format!("untagged selector output: '{line}'").into())
                })
        })
        .collect()
}

/// Validates `positions` against a list of `len` candidates and orders them.
///
/// Repeated positions are kept once.
///
/// # Errors
///
/// Returns `PickError::StaleSelection` for a position outside the list.
pub fn resolve(
    positions: &[usize],
    len: usize,
    order: SelectionOrder,
) -> PickResult<Vec<usize>> {
    let mut seen = vec![false; len];
    let mut resolved: Vec<usize> = Vec::with_capacity(positions.len());
    for &position in positions {
        let Some(slot) = seen.get_mut(position) else {
            return Err(PickError::StaleSelection { position, len });
        };
        if !std::mem::replace(slot, true) {
            resolved.push(position);
        }
    }
    match order {
        SelectionOrder::Clicked => {}
        SelectionOrder::Ascending => resolved.sort_unstable(),
        SelectionOrder::Descending => resolved.sort_unstable_by(|a, b| b.cmp(a)),
    }
    Ok(resolved)
}
