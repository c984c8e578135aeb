// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The picker pipeline shared by every command.
//!
//! ```text
//! drive(command)
//!   1. repository check        not a work tree --> GitError::NotARepository
//!   2. bypass                  args name the target --> act directly
//!   3. list                    lister override (argv) or Command::list
//!      drop blank lines        nothing left --> Outcome::Empty(message)
//!   4. select                  Selector + build_args()
//!      Cancelled               --> Outcome::Cancelled
//!   5. order::resolve          stale position --> PickError::StaleSelection
//!   6. act                     view-only --> Completed(0)
//!                              action override (argv + targets) or Command::act
//! ```

pub mod fzf;
pub mod hook;
pub mod order;
pub mod selector;

#[cfg(test)]
mod tests;

use bon::Builder;
use tracing::debug;

use crate::cli::CommandName;
use crate::config::{CommandConfig, Settings};
use crate::error::{GitError, PickError, Result};
use crate::git::{Backend, Invocation};
use hook::{HookKind, HookPrefix, Preview, PreviewContext};
use order::SelectionOrder;
use selector::{Selection, Selector, SelectorRequest};

/// How a picker run ended, when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// An action ran and exited with this code.
    Completed(i32),
    /// The user aborted the selector.
    Cancelled,
    /// There was nothing to pick from.
    Empty(&'static str),
}

impl Outcome {
    /// Process exit code: 0 unless an action failed, clamped to 1..=255.
    #[must_use]
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Completed(0) | Self::Cancelled | Self::Empty(_) => 0,
            Self::Completed(code) => u8::try_from(code.clamp(1, 255)).unwrap_or(1),
        }
    }
}

/// What confirming a selection does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Accept {
    /// Run the command's action on the selection.
    #[default]
    Act,
    /// Nothing; enter already opened the view.
    View,
}

/// Selector behaviour of one command.
#[derive(Debug, Clone, Copy, Builder)]
pub struct PickerSpec {
    /// Allow selecting several candidates
    #[builder(setters(name = with_multi), default = false)]
    multi: bool,
    /// Let the selector sort by match score (off for history lists)
    #[builder(setters(name = with_sort), default = true)]
    sort: bool,
    /// Order of a multi-selection
    #[builder(setters(name = with_order), default)]
    order: SelectionOrder,
    /// What enter does
    #[builder(setters(name = with_accept), default)]
    accept: Accept,
    /// Show the preview window
    #[builder(setters(name = with_preview), default = true)]
    preview: bool,
    /// Bind ctrl-y to copy the target
    #[builder(setters(name = with_copy), default = true)]
    copy: bool,
}

impl Default for PickerSpec {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl PickerSpec {
    #[must_use]
    pub const fn multi(&self) -> bool {
        self.multi
    }

    #[must_use]
    pub const fn sort(&self) -> bool {
        self.sort
    }

    #[must_use]
    pub const fn order(&self) -> SelectionOrder {
        self.order
    }

    #[must_use]
    pub const fn accept(&self) -> Accept {
        self.accept
    }

    #[must_use]
    pub const fn preview(&self) -> bool {
        self.preview
    }

    #[must_use]
    pub const fn copy(&self) -> bool {
        self.copy
    }
}

/// Everything a run shares: git, the selector, settings and the hook prefix.
#[derive(Debug)]
pub struct Context<'a, B, S> {
    pub backend: &'a B,
    pub selector: &'a S,
    pub settings: &'a Settings,
    pub hook: &'a HookPrefix,
}

impl<'a, B, S> Context<'a, B, S> {
    #[must_use]
    pub const fn new(
        backend: &'a B,
        selector: &'a S,
        settings: &'a Settings,
        hook: &'a HookPrefix,
    ) -> Self {
        Self {
            backend,
            selector,
            settings,
            hook,
        }
    }
}

/// One picker: a lister, a preview and an action over a candidate line.
#[allow(async_fn_in_trait)]
pub trait Command: Sized {
    const NAME: CommandName;

    /// Builds the command from the arguments that followed its name.
    fn from_args(args: Vec<String>) -> Self;

    /// The forwarded arguments.
    fn args(&self) -> &[String];

    fn spec(&self) -> PickerSpec {
        PickerSpec::default()
    }

    /// Message printed when the lister produced nothing.
    fn empty_message(&self) -> &'static str;

    fn requires_repo(&self) -> bool {
        true
    }

    /// Finishes without the selector when the arguments already say what to do.
    ///
    /// # Errors
    ///
    /// Returns an error if a command run by the bypass cannot start.
    async fn bypass<B: Backend, S: Selector>(
        &self,
        _ctx: &Context<'_, B, S>,
    ) -> Result<Option<Outcome>> {
        Ok(None)
    }

    /// Produces the candidate lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the lister fails.
    async fn list<B: Backend, S: Selector>(&self, ctx: &Context<'_, B, S>) -> Result<Vec<String>>;

    /// The value a candidate line stands for.
    fn target(&self, line: &str) -> Option<String>;

    /// Content of the preview window for a line.
    fn preview(&self, line: &str, ctx: &PreviewContext<'_>) -> Option<Preview>;

    /// Content of the fullscreen view for a line.
    fn view(&self, line: &str, ctx: &PreviewContext<'_>) -> Option<Preview> {
        self.preview(line, ctx)
    }

    /// Runs the action on the ordered targets.
    ///
    /// # Errors
    ///
    /// Returns an error if the action cannot start.
    async fn act<B: Backend, S: Selector>(
        &self,
        _ctx: &Context<'_, B, S>,
        _targets: &[String],
    ) -> Result<Outcome> {
        Ok(Outcome::Completed(0))
    }
}

/// Selector arguments for `command`, later ones winning.
#[must_use]
pub fn build_args<C: Command>(command: &C, settings: &Settings, hook: &HookPrefix) -> Vec<String> {
    let spec = command.spec();
    let name = C::NAME;
    let snippet = |kind| hook.snippet(kind, name, command.args());

    let mut args: Vec<String> = [
        "--ansi",
        "--height=80%",
        "--preview-window=right:60%",
        "--bind=alt-k:preview-up,alt-p:preview-up",
        "--bind=alt-j:preview-down,alt-n:preview-down",
        "--bind=ctrl-r:toggle-all",
        "--bind=ctrl-s:toggle-sort",
        "--bind=?:toggle-preview",
        "--bind=alt-w:toggle-preview-wrap",
        "--delimiter=\t",
        "--with-nth=2..",
    ]
    .into_iter()
    .map(str::to_string)
    .collect();

    args.push(format!("--prompt={name}> "));
    args.push(if spec.multi() { "--multi" } else { "--no-multi" }.to_string());
    if !spec.sort() {
        args.push("--no-sort".to_string());
        args.push("--tiebreak=index".to_string());
    }
    if spec.preview() {
        args.push(format!("--preview={}", snippet(HookKind::Preview)));
    }
    if spec.copy() {
        args.push(format!(
            "--bind=ctrl-y:execute-silent:{}",
            snippet(HookKind::Copy)
        ));
    }
    match spec.accept() {
        Accept::View => args.push(format!("--bind=enter:execute:{}", snippet(HookKind::View))),
        Accept::Act => args.push(format!("--bind=alt-v:execute:{}", snippet(HookKind::View))),
    }

    args.extend(settings.fzf_opts.iter().cloned());
    args.extend(settings.command(name).fzf_opts.iter().cloned());
    args
}

/// Splits lister output into candidate lines, dropping blank ones.
#[must_use]
pub fn candidate_lines(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Runs `command` through the whole pipeline.
///
/// # Errors
///
/// Returns an error if the working directory is not a work tree (for
/// commands that need one), or if listing, selecting or acting fails.
pub async fn drive<C, B, S>(command: &C, ctx: &Context<'_, B, S>) -> Result<Outcome>
where
    C: Command,
    B: Backend,
    S: Selector,
{
    let name = C::NAME;

    if command.requires_repo() && !ctx.backend.is_work_tree() {
        return Err(PickError::from(GitError::NotARepository {
            path: ctx.backend.workdir().display().to_string(),
        })
        .into());
    }

    if let Some(outcome) = command.bypass(ctx).await? {
        debug!(command = %name, ?outcome, "bypassed selector");
        return Ok(outcome);
    }

    let overrides: &CommandConfig = ctx.settings.command(name);
    let listed = match overrides.lister.as_deref().and_then(Invocation::command) {
        Some(lister) => {
            debug!(command = %name, lister = %lister, "lister override");
            candidate_lines(&ctx.backend.read(&lister).await?)
        }
        None => command.list(ctx).await?,
    };
    let candidates: Vec<String> = listed
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .collect();
    debug!(command = %name, count = candidates.len(), "listed");
    if candidates.is_empty() {
        return Ok(Outcome::Empty(command.empty_message()));
    }

    let spec = command.spec();
    let request = SelectorRequest::new(build_args(command, ctx.settings, ctx.hook));
    let positions = match ctx.selector.select(&candidates, &request).await? {
        Selection::Cancelled => return Ok(Outcome::Cancelled),
        Selection::Picked(positions) => positions,
    };
    let positions = order::resolve(&positions, candidates.len(), spec.order())?;
    debug!(command = %name, ?positions, "resolved");

    if spec.accept() == Accept::View {
        return Ok(Outcome::Completed(0));
    }

    let targets: Vec<String> = positions
        .iter()
        .filter_map(|&position| candidates.get(position))
        .filter_map(|line| command.target(line))
        .collect();
    if targets.is_empty() {
        debug!(command = %name, "selection holds no target");
        return Ok(Outcome::Cancelled);
    }

    match overrides.action.as_deref().and_then(Invocation::command) {
        Some(action) => {
            let action = action.args(targets);
            debug!(command = %name, action = %action, "action override");
            Ok(Outcome::Completed(ctx.backend.status(&action).await?))
        }
        None => command.act(ctx, &targets).await,
    }
}
