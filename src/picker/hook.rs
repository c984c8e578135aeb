// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Selector key bindings that call back into the binary.
//!
//! ```text
//! fzf --preview="'/usr/bin/git-pick' '--hook' 'preview' 'log' {2..}"
//!                 |
//!                 v
//! git-pick --hook preview log "<line>"
//!   Command::preview(line) --> Preview { Source, PagerKind }
//!   show()                 --> stdout, through show/diff pager if set
//!
//! --hook view  --> Command::view(line)  --> git with GIT_PAGER, or the pager
//! --hook copy  --> Command::target(line) --> clipboard stdin
//! ```
//!
//! User text in a snippet is single-quoted; the candidate itself only ever
//! reaches the shell through fzf's own quoted `{2..}` placeholder.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::ValueEnum;
use tracing::debug;

use super::{Command, Outcome};
use crate::cli::CommandName;
use crate::cli::global::GlobalOptions;
use crate::config::{Pager, Settings};
use crate::config::words::split_words;
use crate::core::process::builder::{ProcessBuilder, ProcessFlags};
use crate::error::{PickError, ProcessError, Result};
use crate::git::{Backend, GitExec, GitQuery, Invocation};

/// Which binding called back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HookKind {
    Preview,
    View,
    Copy,
}

impl HookKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Preview => "preview",
            Self::View => "view",
            Self::Copy => "copy",
        }
    }
}

/// Single-quotes `word` for a POSIX shell.
#[must_use]
pub fn shell_quote(word: &str) -> String {
    format!("'{}'", word.replace('\'', r"'\''"))
}

/// The executable and global options every hook snippet starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookPrefix {
    words: Vec<String>,
}

impl HookPrefix {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Prefix for the running executable with the given global options.
    ///
    /// # Errors
    ///
    /// Returns an error if the path of the running executable is unknown.
    pub fn current(global: &GlobalOptions) -> Result<Self> {
        let exe = std::env::current_exe().context("cannot locate the git-pick executable")?;
        let mut words = vec![exe.display().to_string()];
        words.extend(global.forwarded_args());
        Ok(Self { words })
    }

    /// Shell snippet running `kind` for `command` on the focused line.
    #[must_use]
    pub fn snippet(&self, kind: HookKind, command: CommandName, args: &[String]) -> String {
        let mut snippet = String::new();
        let words = self
            .words
            .iter()
            .map(String::as_str)
            .chain(["--hook", kind.as_str(), command.as_str()])
            .chain(args.iter().map(String::as_str));
        for word in words {
            let _ = write!(snippet, "{} ", shell_quote(word));
        }
        snippet.push_str("{2..}");
        snippet
    }
}

/// Which configured pager a preview goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerKind {
    None,
    Show,
    Diff,
    Ignore,
}

impl PagerKind {
    /// The pager configured for this kind, if any.
    #[must_use]
    pub fn configured(self, settings: &Settings) -> Option<&Pager> {
        match self {
            Self::None => None,
            Self::Show => settings.show_pager.as_ref(),
            Self::Diff => settings.diff_pager.as_ref(),
            Self::Ignore => settings.ignore_pager.as_ref(),
        }
    }
}

/// Where preview content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Output of a git command.
    Git(Invocation),
    /// A file, or a directory listing.
    File(PathBuf),
    /// Fixed text.
    Text(String),
}

/// Content to show for one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub source: Source,
    pub pager: PagerKind,
}

impl Preview {
    #[must_use]
    pub const fn git(invocation: Invocation, pager: PagerKind) -> Self {
        Self {
            source: Source::Git(invocation),
            pager,
        }
    }

    #[must_use]
    pub fn file(path: impl Into<PathBuf>, pager: PagerKind) -> Self {
        Self {
            source: Source::File(path.into()),
            pager,
        }
    }

    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            source: Source::Text(text.into()),
            pager: PagerKind::None,
        }
    }
}

/// What a command sees while building a preview.
#[derive(Clone, Copy)]
pub struct PreviewContext<'a> {
    pub settings: &'a Settings,
    pub query: &'a dyn GitQuery,
    /// Diff context lines.
    pub context: u32,
}

impl<'a> PreviewContext<'a> {
    /// Context for the preview window.
    #[must_use]
    pub fn preview(settings: &'a Settings, query: &'a dyn GitQuery) -> Self {
        Self {
            settings,
            query,
            context: settings.preview_context,
        }
    }

    /// Context for a fullscreen view.
    #[must_use]
    pub fn fullscreen(settings: &'a Settings, query: &'a dyn GitQuery) -> Self {
        Self {
            settings,
            query,
            context: settings.fullscreen_context,
        }
    }

    /// `-U<n>` for the current context.
    #[must_use]
    pub fn unified(&self) -> String {
        format!("-U{}", self.context)
    }
}

/// Runs one hook for `command` on the focused candidate line.
///
/// # Errors
///
/// Returns an error if the preview source, the pager or the clipboard
/// command cannot run.
pub async fn run<C: Command, B: Backend>(
    command: &C,
    kind: HookKind,
    line: &str,
    backend: &B,
    settings: &Settings,
) -> Result<Outcome> {
    debug!(command = %C::NAME, hook = kind.as_str(), line, "hook");
    let code = match kind {
        HookKind::Preview => {
            let ctx = PreviewContext::preview(settings, backend);
            match command.preview(line, &ctx) {
                Some(preview) => show(&preview, backend, settings).await?,
                None => 0,
            }
        }
        HookKind::View => {
            let ctx = PreviewContext::fullscreen(settings, backend);
            match command.view(line, &ctx) {
                Some(preview) => view(&preview, backend, settings).await?,
                None => 0,
            }
        }
        HookKind::Copy => match command.target(line) {
            Some(target) => copy(&target, settings).await?,
            None => 0,
        },
    };
    Ok(Outcome::Completed(code))
}

/// Renders a preview to stdout, through the specific pager only if one is set.
///
/// # Errors
///
/// Returns an error if the source or the pager fails to run.
pub async fn show<B: GitExec>(preview: &Preview, backend: &B, settings: &Settings) -> Result<i32> {
    let text = match &preview.source {
        Source::Git(invocation) => backend.read(invocation).await?,
        Source::File(path) => read_path(path)?,
        Source::Text(text) => text.clone(),
    };
    match preview.pager.configured(settings) {
        Some(pager) => pipe(pager.argv(), text).await,
        None => {
            print!("{text}");
            Ok(0)
        }
    }
}

/// Opens a preview in a pager on the terminal.
///
/// Git output goes through git's own pager machinery with `GIT_PAGER` set
/// to the specific pager, else the general one.
///
/// # Errors
///
/// Returns an error if the source or the pager fails to run.
pub async fn view<B: Backend>(preview: &Preview, backend: &B, settings: &Settings) -> Result<i32> {
    let pager = preview
        .pager
        .configured(settings)
        .or(settings.pager.as_ref());
    match &preview.source {
        Source::Git(invocation) => {
            let invocation = match pager {
                Some(pager) => invocation.clone().env("GIT_PAGER", pager.line()),
                None => invocation.clone(),
            };
            backend.status(&invocation).await
        }
        Source::File(path) => {
            let text = read_path(path)?;
            let argv = pager_argv(pager, backend).await;
            pipe(&argv, text).await
        }
        Source::Text(text) => {
            let argv = pager_argv(pager, backend).await;
            pipe(&argv, text.clone()).await
        }
    }
}

/// Configured pager, else `git var GIT_PAGER`, else `less -R`.
async fn pager_argv<B: GitExec>(configured: Option<&Pager>, backend: &B) -> Vec<String> {
    if let Some(pager) = configured {
        return pager.argv().to_vec();
    }
    let from_git = backend
        .read(&Invocation::git(["var", "GIT_PAGER"]))
        .await
        .ok()
        .and_then(|line| split_words(line.trim()).ok())
        .filter(|argv| !argv.is_empty());
    from_git.unwrap_or_else(|| vec!["less".to_string(), "-R".to_string()])
}

/// File content, or a listing for a directory.
pub(crate) fn read_path(path: &std::path::Path) -> Result<String> {
    if path.is_dir() {
        let mut names: Vec<String> = std::fs::read_dir(path)
            .with_context(|| format!("failed to list {}", path.display()))?
            .filter_map(std::result::Result::ok)
            .map(|entry| {
                let name = entry.file_name().to_string_lossy().into_owned();
                if entry.file_type().is_ok_and(|ft| ft.is_dir()) {
                    format!("{name}/")
                } else {
                    name
                }
            })
            .collect();
        names.sort();
        let mut text = format!("{}/\n", path.display().to_string().trim_end_matches('/'));
        for name in names {
            let _ = writeln!(text, "  {name}");
        }
        return Ok(text);
    }
    let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Feeds `text` to `argv` attached to the terminal.
async fn pipe(argv: &[String], text: String) -> Result<i32> {
    let Some((program, args)) = argv.split_first() else {
        print!("{text}");
        return Ok(0);
    };
    let output = ProcessBuilder::which(program)?
        .args(args)
        .stdin(text)
        .inherit_stdio()
        .flag(ProcessFlags::ALLOW_FAILURE)
        .run()
        .await?;
    Ok(output.exit_code())
}

/// First available clipboard command for this environment.
#[must_use]
pub fn clipboard_command(
    is_macos: bool,
    wayland: bool,
    exists: impl Fn(&str) -> bool,
) -> Option<Vec<String>> {
    let mut candidates: Vec<&[&str]> = Vec::new();
    if is_macos {
        candidates.push(&["pbcopy"]);
    }
    if wayland {
        candidates.push(&["wl-copy"]);
    }
    candidates.extend([
        &["xclip", "-selection", "clipboard"][..],
        &["xsel", "--clipboard", "--input"][..],
        &["clip.exe"][..],
    ]);
    candidates
        .into_iter()
        .find(|argv| argv.first().is_some_and(|program| exists(program)))
        .map(|argv| argv.iter().map(ToString::to_string).collect())
}

/// Writes `target` to the clipboard.
///
/// # Errors
///
/// Returns a `ProcessError::ExecutableNotFound` if no clipboard command is
/// configured or available.
pub async fn copy(target: &str, settings: &Settings) -> Result<i32> {
    let argv = settings.copy_cmd.clone().or_else(|| {
        clipboard_command(
            cfg!(target_os = "macos"),
            std::env::var_os("WAYLAND_DISPLAY").is_some(),
            ProcessBuilder::exists,
        )
    });
    let Some((program, args)) = argv.as_deref().and_then(<[String]>::split_first) else {
        return Err(PickError::from(ProcessError::ExecutableNotFound {
            name: "clipboard command".to_string(),
        })
        .into());
    };
    let output = ProcessBuilder::which(program)?
        .args(args)
        .stdin(target.to_string())
        .quiet()
        .flag(ProcessFlags::ALLOW_FAILURE)
        .run()
        .await?;
    Ok(output.exit_code())
}
