// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::sync::Mutex;

use super::hook::{
    HookKind, HookPrefix, PagerKind, Preview, PreviewContext, clipboard_command, read_path,
    shell_quote, view,
};
use super::order::{SelectionOrder, resolve, tag, untag};
use super::selector::Selection;
use super::{Accept, Command, Context, Outcome, PickerSpec, build_args, candidate_lines, drive};
use crate::cli::CommandName;
use crate::config::{CommandConfig, Pager, Settings};
use crate::error::{PickError, Result};
use crate::git::{Backend, Invocation};
use crate::picker::selector::Selector;
use crate::testing::{MockBackend, ScriptedSelector};

// =============================================================================
// A minimal picker over fixed lines
// =============================================================================

struct Stub {
    args: Vec<String>,
    lines: Vec<String>,
    spec: PickerSpec,
    acted: Mutex<Vec<Vec<String>>>,
}

impl Stub {
    fn with_lines(lines: &[&str]) -> Self {
        let mut stub = Self::from_args(Vec::new());
        stub.lines = lines.iter().map(ToString::to_string).collect();
        stub
    }

    fn with_spec(mut self, spec: PickerSpec) -> Self {
        self.spec = spec;
        self
    }

    fn acted(&self) -> Vec<Vec<String>> {
        self.acted.lock().unwrap().clone()
    }
}

impl Command for Stub {
    const NAME: CommandName = CommandName::Add;

    fn from_args(args: Vec<String>) -> Self {
        Self {
            args,
            lines: Vec::new(),
            spec: PickerSpec::default(),
            acted: Mutex::new(Vec::new()),
        }
    }

    fn args(&self) -> &[String] {
        &self.args
    }

    fn spec(&self) -> PickerSpec {
        self.spec
    }

    fn empty_message(&self) -> &'static str {
        "Nothing here."
    }

    async fn list<B: Backend, S: Selector>(&self, _ctx: &Context<'_, B, S>) -> Result<Vec<String>> {
        Ok(self.lines.clone())
    }

    fn target(&self, line: &str) -> Option<String> {
        line.strip_prefix("item ").map(str::to_string)
    }

    fn preview(&self, line: &str, _ctx: &PreviewContext<'_>) -> Option<Preview> {
        Some(Preview::text(line))
    }

    async fn act<B: Backend, S: Selector>(
        &self,
        _ctx: &Context<'_, B, S>,
        targets: &[String],
    ) -> Result<Outcome> {
        self.acted.lock().unwrap().push(targets.to_vec());
        Ok(Outcome::Completed(0))
    }
}

fn hook() -> HookPrefix {
    HookPrefix::new(["/usr/bin/git-pick"])
}

// =============================================================================
// order
// =============================================================================

#[test]
fn test_tag_and_untag() {
    let candidates = vec!["abc fix".to_string(), "def\tfeat".to_string()];
    insta::assert_snapshot!(tag(&candidates).replace('\t', "<TAB>"), @r"
    0<TAB>abc fix
    1<TAB>def<TAB>feat
    ");
    assert_eq!(untag("1\tdef\tfeat\n0\tabc fix\n").unwrap(), [1, 0]);
    assert_eq!(untag("").unwrap(), Vec::<usize>::new());
}

#[test]
fn test_untag_rejects_untagged_line() {
    let err = untag("abc fix\n").unwrap_err();
    assert!(matches!(err, PickError::Other(_)));
}

#[test]
fn test_resolve_orders() {
    let clicked = [2, 0, 3];
    assert_eq!(resolve(&clicked, 4, SelectionOrder::Clicked).unwrap(), [2, 0, 3]);
    assert_eq!(resolve(&clicked, 4, SelectionOrder::Ascending).unwrap(), [0, 2, 3]);
    assert_eq!(resolve(&clicked, 4, SelectionOrder::Descending).unwrap(), [3, 2, 0]);
}

#[test]
fn test_resolve_drops_repeats() {
    assert_eq!(resolve(&[1, 1, 0], 2, SelectionOrder::Clicked).unwrap(), [1, 0]);
}

#[test]
fn test_resolve_toggled_all_on_long_history() {
    let len = 200_000;
    let toggled: Vec<usize> = (0..len).chain(0..len).collect();
    let started = std::time::Instant::now();
    let resolved = resolve(&toggled, len, SelectionOrder::Descending).unwrap();
    assert!(started.elapsed() < std::time::Duration::from_secs(5));
    assert_eq!(resolved.len(), len);
    assert_eq!(resolved.first(), Some(&(len - 1)));
    assert_eq!(resolved.last(), Some(&0));
}

#[test]
fn test_resolve_keeps_first_click_of_repeats() {
    assert_eq!(resolve(&[3, 1, 3, 0, 1], 4, SelectionOrder::Clicked).unwrap(), [3, 1, 0]);
}

#[test]
fn test_resolve_rejects_stale_position() {
    let err = resolve(&[0, 5], 3, SelectionOrder::Ascending).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"stale selection: position 5 is outside the 3 listed candidates"
    );
}

// =============================================================================
// Outcome and arguments
// =============================================================================

#[test]
fn test_outcome_exit_code() {
    assert_eq!(Outcome::Cancelled.exit_code(), 0);
    assert_eq!(Outcome::Empty("x").exit_code(), 0);
    assert_eq!(Outcome::Completed(0).exit_code(), 0);
    assert_eq!(Outcome::Completed(3).exit_code(), 3);
    assert_eq!(Outcome::Completed(-1).exit_code(), 1);
    assert_eq!(Outcome::Completed(300).exit_code(), 255);
}

#[test]
fn test_candidate_lines_drop_blanks() {
    assert_eq!(candidate_lines("a\n\n  \nb\n"), ["a", "b"]);
}

#[test]
fn test_build_args_multi_history() {
    let mut settings = Settings::default();
    settings.fzf_opts = vec!["--height=100%".to_string()];
    let settings = settings.with_command(
        CommandName::Add,
        CommandConfig {
            fzf_opts: vec!["--reverse".to_string()],
            ..CommandConfig::default()
        },
    );
    let stub = Stub::from_args(vec!["it's".to_string()]).with_spec(
        PickerSpec::builder()
            .with_multi(true)
            .with_sort(false)
            .build(),
    );

    let args = build_args(&stub, &settings, &hook());
    assert!(args.contains(&"--prompt=add> ".to_string()));
    let shown: Vec<&str> = args
        .iter()
        .map(String::as_str)
        .filter(|arg| !arg.starts_with("--prompt="))
        .collect();
    insta::assert_snapshot!(shown.join("\n").replace('\t', "<TAB>"), @r"
    --ansi
    --height=80%
    --preview-window=right:60%
    --bind=alt-k:preview-up,alt-p:preview-up
    --bind=alt-j:preview-down,alt-n:preview-down
    --bind=ctrl-r:toggle-all
    --bind=ctrl-s:toggle-sort
    --bind=?:toggle-preview
    --bind=alt-w:toggle-preview-wrap
    --delimiter=<TAB>
    --with-nth=2..
    --multi
    --no-sort
    --tiebreak=index
    --preview='/usr/bin/git-pick' '--hook' 'preview' 'add' 'it'\''s' {2..}
    --bind=ctrl-y:execute-silent:'/usr/bin/git-pick' '--hook' 'copy' 'add' 'it'\''s' {2..}
    --bind=alt-v:execute:'/usr/bin/git-pick' '--hook' 'view' 'add' 'it'\''s' {2..}
    --height=100%
    --reverse
    ");
}

#[test]
fn test_build_args_view_only() {
    let stub = Stub::from_args(Vec::new()).with_spec(
        PickerSpec::builder()
            .with_accept(Accept::View)
            .with_copy(false)
            .with_preview(false)
            .build(),
    );
    let args = build_args(&stub, &Settings::default(), &hook());
    assert!(args.contains(&"--no-multi".to_string()));
    assert!(!args.iter().any(|arg| arg.starts_with("--preview=")));
    assert!(!args.iter().any(|arg| arg.contains("ctrl-y")));
    assert_eq!(
        args.last().map(String::as_str),
        Some("--bind=enter:execute:'/usr/bin/git-pick' '--hook' 'view' 'add' {2..}")
    );
}

// =============================================================================
// drive
// =============================================================================

#[tokio::test]
async fn test_drive_outside_work_tree() {
    let backend = MockBackend::new()
        .outside_work_tree()
        .with_workdir("/tmp/nowhere");
    let selector = ScriptedSelector::picking(&[0]);
    let settings = Settings::default();
    let hook = hook();
    let ctx = Context::new(&backend, &selector, &settings, &hook);

    let err = drive(&Stub::with_lines(&["item a"]), &ctx).await.unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"git error: not inside a git work tree: /tmp/nowhere"
    );
    assert_eq!(selector.calls(), 0);
}

#[tokio::test]
async fn test_drive_empty_list_skips_selector() {
    let backend = MockBackend::new();
    let selector = ScriptedSelector::picking(&[0]);
    let settings = Settings::default();
    let hook = hook();
    let ctx = Context::new(&backend, &selector, &settings, &hook);

    let outcome = drive(&Stub::with_lines(&["", "   "]), &ctx).await.unwrap();
    assert_eq!(outcome, Outcome::Empty("Nothing here."));
    assert_eq!(selector.calls(), 0);
}

#[tokio::test]
async fn test_drive_cancel_is_a_no_op() {
    let backend = MockBackend::new();
    let selector = ScriptedSelector::cancelling();
    let settings = Settings::default();
    let hook = hook();
    let ctx = Context::new(&backend, &selector, &settings, &hook);
    let stub = Stub::with_lines(&["item a", "item b"]);

    let outcome = drive(&stub, &ctx).await.unwrap();
    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(outcome.exit_code(), 0);
    assert!(stub.acted().is_empty());
}

#[tokio::test]
async fn test_drive_orders_targets() {
    let backend = MockBackend::new();
    let selector = ScriptedSelector::picking(&[2, 0, 1]);
    let settings = Settings::default();
    let hook = hook();
    let ctx = Context::new(&backend, &selector, &settings, &hook);
    let stub = Stub::with_lines(&["item a", "", "item b", "item c"]).with_spec(
        PickerSpec::builder()
            .with_multi(true)
            .with_order(SelectionOrder::Descending)
            .build(),
    );

    drive(&stub, &ctx).await.unwrap();
    assert_eq!(selector.candidates(), [["item a", "item b", "item c"]]);
    assert_eq!(stub.acted(), [["c", "b", "a"]]);
}

#[tokio::test]
async fn test_drive_stale_selection() {
    let backend = MockBackend::new();
    let selector = ScriptedSelector::picking(&[7]);
    let settings = Settings::default();
    let hook = hook();
    let ctx = Context::new(&backend, &selector, &settings, &hook);
    let stub = Stub::with_lines(&["item a"]);

    let err = drive(&stub, &ctx).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PickError>(),
        Some(PickError::StaleSelection { position: 7, len: 1 })
    ));
    assert!(stub.acted().is_empty());
}

#[tokio::test]
async fn test_drive_view_only_does_not_act() {
    let backend = MockBackend::new();
    let selector = ScriptedSelector::picking(&[0]);
    let settings = Settings::default();
    let hook = hook();
    let ctx = Context::new(&backend, &selector, &settings, &hook);
    let stub = Stub::with_lines(&["item a"])
        .with_spec(PickerSpec::builder().with_accept(Accept::View).build());

    assert_eq!(drive(&stub, &ctx).await.unwrap(), Outcome::Completed(0));
    assert!(stub.acted().is_empty());
}

#[tokio::test]
async fn test_drive_line_without_target() {
    let backend = MockBackend::new();
    let selector = ScriptedSelector::picking(&[0]);
    let settings = Settings::default();
    let hook = hook();
    let ctx = Context::new(&backend, &selector, &settings, &hook);
    let stub = Stub::with_lines(&["| graph only"]);

    assert_eq!(drive(&stub, &ctx).await.unwrap(), Outcome::Cancelled);
    assert!(stub.acted().is_empty());
}

#[tokio::test]
async fn test_drive_lister_and_action_overrides() {
    let backend = MockBackend::new()
        .with_output("my-lister", "item x\nitem y\n")
        .with_status("my-action", 4);
    let selector = ScriptedSelector::picking(&[1, 0]);
    let settings = Settings::default().with_command(
        CommandName::Add,
        CommandConfig {
            lister: Some(vec!["my-lister".to_string(), "--all".to_string()]),
            action: Some(vec!["my-action".to_string(), "-v".to_string()]),
            ..CommandConfig::default()
        },
    );
    let hook = hook();
    let ctx = Context::new(&backend, &selector, &settings, &hook);
    let stub = Stub::with_lines(&["item never"]);

    let outcome = drive(&stub, &ctx).await.unwrap();
    assert_eq!(outcome, Outcome::Completed(4));
    assert_eq!(selector.candidates(), [["item x", "item y"]]);
    assert_eq!(backend.status_lines(), ["my-action -v y x"]);
    assert!(stub.acted().is_empty());
}

#[tokio::test]
async fn test_drive_selector_reports_nothing() {
    let backend = MockBackend::new();
    let selector = ScriptedSelector::sequence(vec![Selection::Picked(Vec::new())]);
    let settings = Settings::default();
    let hook = hook();
    let ctx = Context::new(&backend, &selector, &settings, &hook);
    let stub = Stub::with_lines(&["item a"]);

    assert_eq!(drive(&stub, &ctx).await.unwrap(), Outcome::Cancelled);
}

// =============================================================================
// hook
// =============================================================================

#[test]
fn test_shell_quote() {
    assert_eq!(shell_quote("plain"), "'plain'");
    assert_eq!(shell_quote("it's"), r"'it'\''s'");
    assert_eq!(shell_quote("$(rm -rf)"), "'$(rm -rf)'");
}

#[test]
fn test_snippet_with_forwarded_options() {
    let prefix = HookPrefix::new(["/opt/git pick", "--config", "/etc/gp.toml"]);
    let snippet = prefix.snippet(HookKind::Copy, CommandName::Diff, &["HEAD~".to_string()]);
    insta::assert_snapshot!(
        snippet,
        @"'/opt/git pick' '--config' '/etc/gp.toml' '--hook' 'copy' 'diff' 'HEAD~' {2..}"
    );
}

#[test]
fn test_clipboard_command_preference() {
    let all = |_: &str| true;
    assert_eq!(clipboard_command(true, true, all).unwrap(), ["pbcopy"]);
    assert_eq!(clipboard_command(false, true, all).unwrap(), ["wl-copy"]);
    assert_eq!(
        clipboard_command(false, false, all).unwrap(),
        ["xclip", "-selection", "clipboard"]
    );
    assert_eq!(
        clipboard_command(false, true, |program| program == "xsel").unwrap(),
        ["xsel", "--clipboard", "--input"]
    );
    assert!(clipboard_command(false, false, |_| false).is_none());
}

#[test]
fn test_read_path_lists_directories() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::create_dir(temp.path().join("sub")).unwrap();
    std::fs::write(temp.path().join("b.txt"), "").unwrap();
    std::fs::write(temp.path().join("a.txt"), "").unwrap();

    let listing = read_path(temp.path()).unwrap();
    let body: Vec<&str> = listing.lines().skip(1).collect();
    assert_eq!(body, ["  a.txt", "  b.txt", "  sub/"]);

    assert_eq!(read_path(&temp.path().join("a.txt")).unwrap(), "");
}

#[tokio::test]
async fn test_view_sets_git_pager() {
    let backend = MockBackend::new();
    let mut settings = Settings::default();
    settings.pager = Pager::parse("pager", "less -R").unwrap();
    settings.diff_pager = Pager::parse("diff_pager", "delta --side-by-side").unwrap();

    let show = Preview::git(Invocation::git(["show", "abc1234"]), PagerKind::Show);
    view(&show, &backend, &settings).await.unwrap();
    let diff = Preview::git(Invocation::git(["diff", "--", "a"]), PagerKind::Diff);
    view(&diff, &backend, &settings).await.unwrap();

    let runs = backend.runs();
    assert_eq!(
        runs[0].env_vars(),
        [("GIT_PAGER".to_string(), "less -R".to_string())]
    );
    assert_eq!(
        runs[1].env_vars(),
        [("GIT_PAGER".to_string(), "delta --side-by-side".to_string())]
    );
}

#[tokio::test]
async fn test_hook_without_target_does_nothing() {
    let backend = MockBackend::new();
    let settings = Settings::default();
    let outcome = super::hook::run(
        &Stub::from_args(Vec::new()),
        HookKind::Copy,
        "| graph only",
        &backend,
        &settings,
    )
    .await
    .unwrap();
    assert_eq!(outcome, Outcome::Completed(0));
}

// =============================================================================
// fzf exit codes (fake executables)
// =============================================================================

#[cfg(unix)]
fn fake_fzf(dir: &std::path::Path, body: &str) -> String {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-fzf");
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path.display().to_string()
}

#[cfg(unix)]
#[tokio::test]
async fn test_fzf_returns_positions_of_tagged_lines() {
    use super::fzf::FzfSelector;
    use super::selector::SelectorRequest;

    let temp = tempfile::tempdir().unwrap();
    let fzf = FzfSelector::new(fake_fzf(temp.path(), "sed -n '3p;1p'"));
    let candidates = ["a".to_string(), "b".to_string(), "c".to_string()];

    let selection = fzf
        .select(&candidates, &SelectorRequest::new(Vec::new()))
        .await
        .unwrap();

    assert_eq!(selection, Selection::Picked(vec![0, 2]));
}

#[cfg(unix)]
#[tokio::test]
async fn test_fzf_abort_and_no_match_cancel() {
    use super::fzf::FzfSelector;
    use super::selector::SelectorRequest;

    for code in [1, 130] {
        let temp = tempfile::tempdir().unwrap();
        let fzf = FzfSelector::new(fake_fzf(temp.path(), &format!("cat >/dev/null; exit {code}")));
        let selection = fzf
            .select(&["a".to_string()], &SelectorRequest::new(Vec::new()))
            .await
            .unwrap();
        assert_eq!(selection, Selection::Cancelled, "exit {code}");
    }
}

#[cfg(unix)]
#[tokio::test]
async fn test_fzf_other_exit_is_an_error() {
    use super::fzf::FzfSelector;
    use super::selector::SelectorRequest;

    let temp = tempfile::tempdir().unwrap();
    let fzf = FzfSelector::new(fake_fzf(temp.path(), "cat >/dev/null; exit 2"));
    let err = fzf
        .select(&["a".to_string()], &SelectorRequest::new(Vec::new()))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("exited with code 2"), "{err}");
}
