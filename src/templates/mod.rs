// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ignore-template store.
//!
//! ```text
//! ensure_store()
//!   templates dir missing? --> git clone --depth=1 <remote> <local>
//!   |
//!   v
//! TemplateStore { root }
//!   names()   *.gitignore stems, case-insensitive sort, dedup
//!   find()    case-insensitive file name match, smallest path wins
//!   render()  "### <file>\n<content>\n" per name, misses collected
//! ```

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::IgnoreSettings;
use crate::error::{ConfigError, GitError, PickError, Result, TemplateError};
use crate::git::{GitExec, Invocation};
use crate::utility::fs::walk::{WalkOptions, find_files};

const EXTENSION: &str = ".gitignore";

/// A directory of `*.gitignore` templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateStore {
    root: PathBuf,
}

/// Concatenated templates plus the names that matched nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub missing: Vec<String>,
}

impl TemplateStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Opens an existing store.
    ///
    /// # Errors
    ///
    /// Returns a `TemplateError::StoreMissing` if `root` is not a directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let store = Self::new(root);
        if !store.root.is_dir() {
            return Err(PickError::from(TemplateError::StoreMissing {
                path: store.root.display().to_string(),
            })
            .into());
        }
        Ok(store)
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every template file, in lexical path order.
    fn files(&self) -> Result<Vec<PathBuf>> {
        let mut files = find_files(
            &self.root,
            &format!("**/*{EXTENSION}"),
            &WalkOptions::for_template_store(),
        )?;
        files.sort();
        Ok(files)
    }

    /// Template names (file stems), sorted case-insensitively without duplicates.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be walked.
    pub fn names(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self
            .files()?
            .iter()
            .filter_map(|path| path.file_name()?.to_str())
            .filter_map(|name| strip_extension(name))
            .map(str::to_string)
            .collect();
        names.sort_by(|a, b| {
            a.to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b))
        });
        names.dedup_by(|a, b| a.eq_ignore_ascii_case(b));
        Ok(names)
    }

    /// Template file for `name`: `<name>.gitignore` or `<name>`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be walked.
    pub fn find(&self, name: &str) -> Result<Option<PathBuf>> {
        let wanted = name.to_lowercase();
        let with_extension = format!("{wanted}{EXTENSION}");
        Ok(self.files()?.into_iter().find(|path| {
            path.file_name()
                .and_then(|file| file.to_str())
                .map(str::to_lowercase)
                .is_some_and(|file| file == with_extension || file == wanted)
        }))
    }

    /// Concatenates the templates for `names`, in order.
    ///
    /// # Errors
    ///
    /// Returns a `TemplateError::ReadFailed` if a matched file cannot be read.
    pub fn render<S: AsRef<str>>(&self, names: &[S]) -> Result<Rendered> {
        let mut rendered = Rendered::default();
        for name in names {
            let name = name.as_ref();
            let Some(path) = self.find(name)? else {
                debug!(name, "no template");
                rendered.missing.push(name.to_string());
                continue;
            };
            let content =
                std::fs::read(&path).map_err(|source| TemplateError::ReadFailed {
                    path: path.display().to_string(),
                    source,
                })
                .map_err(PickError::from)?;
            let content = String::from_utf8_lossy(&content);
            let file_name = path
                .file_name()
                .map_or_else(|| name.into(), |file| file.to_string_lossy());
            let _ = writeln!(rendered.text, "### {file_name}");
            rendered.text.push_str(&content);
            if !content.is_empty() && !content.ends_with('\n') {
                rendered.text.push('\n');
            }
            rendered.text.push('\n');
        }
        Ok(rendered)
    }
}

fn strip_extension(file_name: &str) -> Option<&str> {
    let split = file_name.len().checked_sub(EXTENSION.len())?;
    let (stem, extension) = (file_name.get(..split)?, file_name.get(split..)?);
    (extension.eq_ignore_ascii_case(EXTENSION) && !stem.is_empty()).then_some(stem)
}

/// Opens the template store, cloning the template repository first if needed.
///
/// # Errors
///
/// Returns an error if no store location is known, the clone fails, or the
/// template directory is still missing afterwards.
pub async fn ensure_store<B: GitExec>(
    backend: &B,
    settings: &IgnoreSettings,
) -> Result<TemplateStore> {
    let templates = settings
        .templates
        .clone()
        .ok_or_else(|| PickError::from(ConfigError::NoCacheDir))?;
    if templates.is_dir() {
        return TemplateStore::open(templates);
    }

    if let Some(local) = &settings.repo_local
        && !local.exists()
    {
        info!(url = %settings.repo_remote, path = %local.display(), "cloning ignore templates");
        let clone = Invocation::git([
            "clone".to_string(),
            "--depth=1".to_string(),
            settings.repo_remote.clone(),
            local.display().to_string(),
        ]);
        let code = backend.status(&clone).await?;
        if code != 0 {
            return Err(PickError::from(GitError::CloneFailed {
                url: settings.repo_remote.clone(),
                message: format!("git clone exited with code {code}"),
            })
            .into());
        }
    }

    TemplateStore::open(templates)
}
