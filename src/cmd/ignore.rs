// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `ignore`: print `.gitignore` templates from the local template store.
//!
//! ```text
//! ignore rust python   --> ensure_store --> render --> stdout
//! ignore               --> ensure_store --> names --> pick --> render
//! ```
//!
//! Runs outside a repository too; the store is cloned on first use.

use crate::cli::CommandName;
use crate::error::{ConfigError, PickError, Result};
use crate::git::Backend;
use crate::git::candidate::plain;
use crate::picker::hook::{PagerKind, Preview, PreviewContext};
use crate::picker::selector::Selector;
use crate::picker::{Command, Context, Outcome, PickerSpec};
use crate::templates::{TemplateStore, ensure_store};

pub struct Ignore {
    args: Vec<String>,
}

/// Prints the templates for `names`, warning about each unknown one.
fn emit<S: AsRef<str>>(store: &TemplateStore, names: &[S]) -> Result<Outcome> {
    let rendered = store.render(names)?;
    print!("{}", rendered.text);
    for name in &rendered.missing {
        eprintln!("No gitignore template found for '{name}'.");
    }
    Ok(Outcome::Completed(0))
}

impl Command for Ignore {
    const NAME: CommandName = CommandName::Ignore;

    fn from_args(args: Vec<String>) -> Self {
        Self { args }
    }

    fn args(&self) -> &[String] {
        &self.args
    }

    fn spec(&self) -> PickerSpec {
        PickerSpec::builder().with_multi(true).build()
    }

    fn empty_message(&self) -> &'static str {
        "No gitignore templates found."
    }

    fn requires_repo(&self) -> bool {
        false
    }

    async fn bypass<B: Backend, S: Selector>(
        &self,
        ctx: &Context<'_, B, S>,
    ) -> Result<Option<Outcome>> {
        if self.args.is_empty() {
            return Ok(None);
        }
        let store = ensure_store(ctx.backend, &ctx.settings.ignore).await?;
        emit(&store, &self.args).map(Some)
    }

    async fn list<B: Backend, S: Selector>(&self, ctx: &Context<'_, B, S>) -> Result<Vec<String>> {
        let store = ensure_store(ctx.backend, &ctx.settings.ignore).await?;
        store.names()
    }

    fn target(&self, line: &str) -> Option<String> {
        plain(line)
    }

    fn preview(&self, line: &str, ctx: &PreviewContext<'_>) -> Option<Preview> {
        let root = ctx.settings.ignore.templates.as_ref()?;
        let path = TemplateStore::new(root).find(&plain(line)?).ok()??;
        Some(Preview::file(path, PagerKind::Ignore))
    }

    async fn act<B: Backend, S: Selector>(
        &self,
        ctx: &Context<'_, B, S>,
        targets: &[String],
    ) -> Result<Outcome> {
        let root = ctx
            .settings
            .ignore
            .templates
            .as_ref()
            .ok_or_else(|| PickError::from(ConfigError::NoCacheDir))?;
        emit(&TemplateStore::open(root)?, targets)
    }
}
