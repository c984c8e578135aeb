// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::Result;
use bon::Builder;
use flume::unbounded;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::warn;

/// Options for parallel directory traversal.
#[derive(Debug, Clone, Builder)]
pub struct WalkOptions {
    /// Maximum depth to traverse (None = unlimited)
    #[builder(setters(name = with_max_depth))]
    max_depth: Option<usize>,
    /// Follow symbolic links
    #[builder(setters(name = with_follow_links), default = false)]
    follow_links: bool,
    /// Include hidden files/directories
    #[builder(setters(name = with_include_hidden), default = false)]
    include_hidden: bool,
    /// Respect .gitignore and .ignore files
    #[builder(setters(name = with_respect_gitignore), default = true)]
    respect_gitignore: bool,
    /// Number of threads (None = auto-detect based on CPU count)
    #[builder(setters(name = with_threads))]
    threads: Option<usize>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl WalkOptions {
    #[must_use]
    pub const fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    #[must_use]
    pub const fn follow_links(&self) -> bool {
        self.follow_links
    }

    #[must_use]
    pub const fn include_hidden(&self) -> bool {
        self.include_hidden
    }

    #[must_use]
    pub const fn respect_gitignore(&self) -> bool {
        self.respect_gitignore
    }

    #[must_use]
    pub const fn threads(&self) -> Option<usize> {
        self.threads
    }

    /// Options for a template store: every file counts, links are followed.
    #[must_use]
    pub fn for_template_store() -> Self {
        Self::builder()
            .with_follow_links(true)
            .with_respect_gitignore(false)
            .build()
    }
}

/// Builds a `WalkBuilder` with the given options.
pub(super) fn build_walker(root: &Path, options: &WalkOptions) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);

    if let Some(depth) = options.max_depth() {
        builder.max_depth(Some(depth));
    }

    builder.follow_links(options.follow_links());
    builder.hidden(!options.include_hidden());

    // Ignore files, including those in parent directories
    let respect = options.respect_gitignore();
    builder.git_ignore(respect);
    builder.git_global(respect);
    builder.git_exclude(respect);
    builder.ignore(respect);
    builder.parents(respect);

    if let Some(threads) = options.threads() {
        builder.threads(threads);
    }

    builder
}

/// Finds files matching a glob pattern using parallel traversal.
///
/// The pattern is matched against paths relative to `root`. Results come
/// back in traversal order, which is not deterministic; callers sort.
///
/// # Errors
///
/// Returns an error if:
/// - The root directory does not exist.
/// - The glob pattern is invalid.
///
/// # Example
/// ```no_run
/// use git_pick::utility::fs::walk::{find_files, WalkOptions};
///
/// let templates = find_files("/path/to/store", "**/*.gitignore", &WalkOptions::default())?;
/// for file in templates {
///     println!("{}", file.display());
/// }
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn find_files<P: AsRef<Path>>(
    root: P,
    pattern: &str,
    options: &WalkOptions,
) -> Result<Vec<PathBuf>> {
    use wax::{Glob, Program};

    let root = root.as_ref();

    if !root.exists() {
        anyhow::bail!("root directory does not exist: {}", root.display());
    }

    let glob =
        Glob::new(pattern).map_err(|e| anyhow::anyhow!("invalid glob pattern '{pattern}': {e}"))?;

    // Drained only after the walk finishes, so the channel must not block
    let (tx, rx) = unbounded::<PathBuf>();
    let glob = Arc::new(glob);
    let root_path = root.to_path_buf();

    let parallel = build_walker(root, options).build_parallel();

    parallel.run(|| {
        let tx = tx.clone();
        let glob = Arc::clone(&glob);
        let root_path = root_path.clone();

        Box::new(move |entry_result| {
            match entry_result {
                Ok(entry) => {
                    if entry.file_type().is_some_and(|ft| ft.is_file())
                        && let Ok(rel_path) = entry.path().strip_prefix(&root_path)
                        && glob.is_match(rel_path)
                    {
                        let _ = tx.send(entry.path().to_path_buf());
                    }
                }
                Err(e) => warn!(error = %e, "walk error"),
            }
            ignore::WalkState::Continue
        })
    });

    drop(tx);
    Ok(rx.iter().collect())
}
