// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::words::{SplitError, split_words};
use super::{Config, Settings};
use crate::cli::CommandName;
use std::collections::BTreeMap;
use std::path::PathBuf;

fn vars(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(
        config.global.log_format,
        "%C(auto)%h%d %s %C(black)%C(bold)%cr%Creset"
    );
    assert_eq!(config.global.preview_context, 3);
    assert_eq!(config.global.fullscreen_context, 10);
    assert_eq!(config.ignore.repo_remote, "https://github.com/dvcs/gitignore");
    assert!(config.commands.is_empty());
}

#[test]
fn test_parse_toml() {
    let config = Config::parse(
        r#"
[global]
fzf_opts = "--height=100% --border"
diff_pager = "delta --side-by-side"
preview_context = 5

[ignore]
templates = "/srv/gitignore/templates"

[commands.stash-show]
fzf_opts = "--no-mouse"

[commands.log]
git_opts = "--no-merges"
"#,
    )
    .unwrap();

    assert_eq!(config.global.preview_context, 5);
    assert_eq!(config.global.fullscreen_context, 10);
    assert_eq!(
        config.ignore.templates,
        Some(PathBuf::from("/srv/gitignore/templates"))
    );
    assert_eq!(
        config.commands["log"].git_opts.as_deref(),
        Some("--no-merges")
    );
    assert_eq!(
        config.commands["stash-show"].fzf_opts.as_deref(),
        Some("--no-mouse")
    );
}

#[test]
fn test_parse_rejects_unknown_field() {
    let err = Config::parse("[global]\nfzf_options = \"x\"\n").unwrap_err();
    assert!(err.to_string().contains("fzf_options"), "{err}");
}

#[test]
fn test_env_overlay() {
    let mut config =
        Config::parse("[commands.log]\ngit_opts = \"--no-merges\"\nfzf_opts = \"-e\"\n").unwrap();
    config
        .apply_env(&vars(&[
            ("GITPICK_PAGER", "less -RS"),
            ("GITPICK_PREVIEW_CONTEXT", "7"),
            ("GITPICK_GI_REPO_LOCAL", "/tmp/gi"),
            ("GITPICK_LOG_GIT_OPTS", "--first-parent"),
            ("GITPICK_STASH_SHOW_LISTER", "my-stashes --all"),
            ("GITPICK_CHERRY_PICK_FROM_BRANCH_FZF_OPTS", "--exact"),
            ("GITPICK_DIFF_PAGER", ""),
        ]))
        .unwrap();

    assert_eq!(config.global.pager.as_deref(), Some("less -RS"));
    assert_eq!(config.global.diff_pager, None);
    assert_eq!(config.global.preview_context, 7);
    assert_eq!(config.ignore.repo_local, Some(PathBuf::from("/tmp/gi")));

    let log = &config.commands["log"];
    assert_eq!(log.git_opts.as_deref(), Some("--first-parent"));
    assert_eq!(log.fzf_opts.as_deref(), Some("-e"));
    assert_eq!(
        config.commands["stash-show"].lister.as_deref(),
        Some("my-stashes --all")
    );
    assert_eq!(
        config.commands["cherry-pick-from-branch"].fzf_opts.as_deref(),
        Some("--exact")
    );
    assert!(!config.commands.contains_key("cherry-pick"));
}

#[test]
fn test_env_overlay_rejects_non_numeric_context() {
    let mut config = Config::default();
    let err = config
        .apply_env(&vars(&[("GITPICK_FULLSCREEN_CONTEXT", "lots")]))
        .unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'fullscreen_context' in section '[global]': expected a number of lines, got 'lots'"
    );
}

#[test]
fn test_settings_resolve() {
    let mut config = Config::default();
    config
        .apply_env(&vars(&[
            ("GITPICK_FZF_DEFAULT_OPTS", "--height=100% --bind 'ctrl-a:select-all'"),
            ("GITPICK_SHOW_PAGER", "delta --paging=never"),
            ("GITPICK_LOG_ACTION", "echo picked"),
        ]))
        .unwrap();
    let settings = Settings::resolve_in(&config, Some(PathBuf::from("/home/me/.cache"))).unwrap();

    assert_eq!(settings.fzf_opts, ["--height=100%", "--bind", "ctrl-a:select-all"]);
    let show = settings.show_pager.as_ref().unwrap();
    assert_eq!(show.line(), "delta --paging=never");
    assert_eq!(show.argv(), ["delta", "--paging=never"]);
    assert_eq!(
        settings.ignore.repo_local,
        Some(PathBuf::from("/home/me/.cache/git-pick/gi/repos/dvcs/gitignore"))
    );
    assert_eq!(
        settings.ignore.templates,
        Some(PathBuf::from(
            "/home/me/.cache/git-pick/gi/repos/dvcs/gitignore/templates"
        ))
    );

    let log = settings.command(CommandName::Log);
    assert_eq!(log.action.as_deref(), Some(&["echo".to_string(), "picked".to_string()][..]));
    assert!(log.lister.is_none());
    assert!(settings.command(CommandName::Blame).git_opts.is_empty());
}

#[test]
fn test_settings_templates_follow_repo_local() {
    let mut config = Config::default();
    config.ignore.repo_local = Some(PathBuf::from("/opt/gi"));
    let settings = Settings::resolve_in(&config, None).unwrap();
    assert_eq!(settings.ignore.templates, Some(PathBuf::from("/opt/gi/templates")));

    let settings = Settings::resolve_in(&Config::default(), None).unwrap();
    assert_eq!(settings.ignore.templates, None);
}

#[test]
fn test_settings_rejects_unknown_command_section() {
    let config = Config::parse("[commands.stash]\nfzf_opts = \"-e\"\n").unwrap();
    let err = Settings::resolve_in(&config, None).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'stash' in section '[commands]': unknown command"
    );
}

#[test]
fn test_settings_rejects_unterminated_quote() {
    let config = Config::parse("[commands.add]\nfzf_opts = \"--bind 'ctrl-a\"\n").unwrap();
    let err = Settings::resolve_in(&config, None).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'fzf_opts' in section '[commands.add]': unterminated single quote in '--bind 'ctrl-a'"
    );
}

#[test]
fn test_split_words() {
    let cases = [
        ("", vec![]),
        ("  -a   -b ", vec!["-a", "-b"]),
        ("--bind 'ctrl-y:execute(echo {})'", vec!["--bind", "ctrl-y:execute(echo {})"]),
        (r#"--header "a \"quoted\" word""#, vec!["--header", r#"a "quoted" word"#]),
        (r"a\ b c", vec!["a b", "c"]),
        (r#"''"""#, vec![""]),
        (r#""C:\path""#, vec![r"C:\path"]),
    ];
    for (input, expected) in cases {
        assert_eq!(split_words(input).unwrap(), expected, "input: {input:?}");
    }
}

#[test]
fn test_split_words_errors() {
    assert_eq!(split_words("'open"), Err(SplitError::UnterminatedSingleQuote));
    assert_eq!(split_words("\"open"), Err(SplitError::UnterminatedDoubleQuote));
    assert_eq!(split_words("end\\"), Err(SplitError::TrailingBackslash));
}

#[test]
fn test_split_error_messages() {
    assert_eq!(SplitError::UnterminatedSingleQuote.to_string(), "unterminated single quote");
    assert_eq!(SplitError::UnterminatedDoubleQuote.to_string(), "unterminated double quote");
    assert_eq!(SplitError::TrailingBackslash.to_string(), "trailing backslash");
}
