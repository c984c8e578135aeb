// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::try_parse() --> Logging --> Config + GITPICK_* --> Settings
//!   --hook kind <command> [args] <line>  --> cmd::run_hook
//!   <command> [args]                     --> cmd::run (fzf)
//! ```

use std::process::ExitCode;

use clap::error::ErrorKind;
use git_pick::cli::{self, Cli, usage};
use git_pick::cmd;
use git_pick::config::{Config, Settings, env_vars};
use git_pick::git::LocalBackend;
use git_pick::logging::init_logging;
use git_pick::picker::fzf::FzfSelector;
use git_pick::picker::hook::HookPrefix;
use git_pick::picker::{Context, Outcome};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            eprint!("\n{}", usage());
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&cli.global.log_config()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    match dispatch(&cli).await {
        Ok(outcome) => {
            if let Outcome::Empty(message) = outcome {
                println!("{message}");
            }
            ExitCode::from(outcome.exit_code())
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn load_settings(cli: &Cli) -> git_pick::error::Result<Settings> {
    let mut config = Config::load(cli.global.config.as_deref())?;
    config.apply_env(&env_vars())?;
    Ok(Settings::resolve(&config)?)
}

async fn dispatch(cli: &Cli) -> git_pick::error::Result<Outcome> {
    let (name, args) = match cli.command() {
        Ok(command) => command,
        Err(e) => {
            eprint!("Error: {e}\n\n{}", usage());
            return Ok(Outcome::Completed(1));
        }
    };
    let settings = load_settings(cli)?;
    let backend = LocalBackend::current()?;

    if let Some(kind) = cli.hook {
        let Some((line, args)) = args.split_last() else {
            eprint!("Error: --hook needs a candidate line\n\n{}", usage());
            return Ok(Outcome::Completed(1));
        };
        return cmd::run_hook(kind, name, args, line, &backend, &settings).await;
    }

    let hook = HookPrefix::current(&cli.global)?;
    let selector = FzfSelector::default();
    let ctx = Context::new(&backend, &selector, &settings, &hook);
    cmd::run(name, args, &ctx).await
}
