// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (19 pickers)
//!           CommandName       log / diff / add / ...
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          picker           |
//!              | bypass -> list -> select  |
//!              |   -> order -> act / hook  |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!                git        fzf     templates
//!            gix / CLI    Selector  ignore store
//!
//!   +-----------------------------------------+
//!   |  core     process builder (tokio)       |
//!   +-----------------------------------------+
//!   |  foundation  config, error, logging,    |
//!   |              utility                    |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod git;
pub mod logging;
pub mod picker;
pub mod templates;
pub mod utility;

#[cfg(test)]
mod testing;
