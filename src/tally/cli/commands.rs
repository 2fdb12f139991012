//! # CLI Layer
//!
//! One possible client of the tally library, and the only place that knows
//! about stdin, stdout, stderr and exit codes.
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: clap turns shell arguments into [`Commands`]
//! 2. **Context Setup**: resolve the home directory, config, document path, logging
//! 3. **API Dispatch**: call the matching `TallyApi` method
//! 4. **Output Formatting**: turn `CmdResult` into terminal text via `render`
//!
//! With no subcommand the interactive menu runs. One-shot subcommands return
//! their error to `main`, which prints it and exits with status 1.

use super::menu::run_menu;
use super::render::{render_articles, render_config, render_messages};
use super::setup::{Cli, Commands};
use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};
use tally::api::{CmdResult, ConfigAction, TallyApi};
use tally::error::Result;
use tally::init::{initialize, TallyContext};
use tally::logging::init_logging;
use tally::model::{ArticleEdit, NewArticle};
use tally::store::fs::FileStore;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;
    let api = &mut ctx.api;

    match cli.command {
        None | Some(Commands::Menu) => {
            let stdin = io::stdin();
            run_menu(api, stdin.lock(), io::stdout())
        }
        Some(Commands::Add {
            name,
            category,
            quantity,
            price,
            description,
        }) => {
            let input =
                NewArticle::new(name, category, quantity, price).with_description(description);
            print_result(&api.create_article(input)?);
            Ok(())
        }
        Some(Commands::List) => {
            print_result(&api.list_articles()?);
            Ok(())
        }
        Some(Commands::Search { field, value }) => {
            print_result(&api.search_articles(&field, &value)?);
            Ok(())
        }
        Some(Commands::Edit {
            id,
            name,
            category,
            quantity,
            price,
            description,
        }) => {
            let edit = ArticleEdit {
                name,
                category,
                quantity,
                unit_price: price,
                description,
            };
            print_result(&api.edit_article(&id, &edit)?);
            Ok(())
        }
        Some(Commands::Delete { id }) => {
            print_result(&api.delete_article(&id)?);
            Ok(())
        }
        Some(Commands::Config { key, value }) => handle_config(api, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<TallyContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let ctx = initialize(&cwd, cli.file.as_deref(), cli.global)?;

    // `config` reports a bad file itself, as part of its output.
    if let Some(warning) = &ctx.config_warning {
        if !matches!(cli.command, Some(Commands::Config { .. })) {
            eprintln!("Warning: ignoring config, using defaults: {}", warning);
        }
    }

    let level = if cli.verbose {
        "debug"
    } else {
        ctx.config.log_level.as_str()
    };
    start_logging(level, &ctx.home.join("logs"));
    if let Some(warning) = &ctx.config_warning {
        log::warn!("event=config_load status=fallback reason={}", warning);
    }
    log::debug!(
        "event=context_ready data_file={}",
        ctx.data_file.display()
    );

    Ok(ctx)
}

/// Logging is best effort: a failure is reported once and the ledger still works.
fn start_logging(level: &str, log_dir: &Path) {
    if let Err(e) = init_logging(level, log_dir) {
        eprintln!("Warning: logging disabled: {}", e);
    }
}

fn handle_config(
    api: &mut TallyApi<FileStore>,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = api.config(action)?;
    if let Some(config) = &result.config {
        print!("{}", render_config(config));
    }
    print!("{}", render_messages(&result.messages));
    Ok(())
}

fn print_result(result: &CmdResult) {
    if !result.listed_articles.is_empty() {
        print!("{}", render_articles(&result.listed_articles));
    }
    print!("{}", render_messages(&result.messages));
}
