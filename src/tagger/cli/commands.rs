use super::print::{print_config, print_files, print_messages, print_tags};
use super::setup::{command_name, print_grouped_help, print_help_for_command, Cli, Commands};
use clap::Parser;
use tagger::api::{ConfigAction, TaggerApi};
use tagger::error::Result;
use tagger::init::initialize;
use tagger::logging::init_logging;
use tagger::store::fs::FileStore;
use tracing::debug;

struct AppContext {
    api: TaggerApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.help {
        match &cli.command {
            Some(command) => print_help_for_command(command_name(command)),
            None => print_grouped_help(),
        }
        return Ok(());
    }

    // Commands that never touch the database
    match &cli.command {
        None => {
            print_grouped_help();
            return Ok(());
        }
        Some(Commands::Help { command }) => {
            match command {
                Some(name) => print_help_for_command(name),
                None => print_grouped_help(),
            }
            return Ok(());
        }
        Some(Commands::Version) => {
            println!("tagger {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Some(_) => {}
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add { path }) => handle_add(&mut ctx, &path),
        Some(Commands::Remove { file }) => handle_remove(&mut ctx, &file),
        Some(Commands::Move { file, new_path }) => handle_move(&mut ctx, &file, &new_path),
        Some(Commands::Files { long }) => handle_files(&ctx, long),
        Some(Commands::Set { file, name, value }) => {
            handle_set(&mut ctx, &file, &name, value.as_deref())
        }
        Some(Commands::Unset { file, name }) => handle_unset(&mut ctx, &file, &name),
        Some(Commands::Get { file }) => handle_get(&ctx, &file),
        Some(Commands::Match { strict, filter }) => handle_match(&ctx, &filter, strict),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Version) | Some(Commands::Help { .. }) | None => Ok(()),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let ctx = initialize(cli.db.clone())?;
    init_logging(cli.verbose, &ctx.config);
    debug!(db = %ctx.db_path.display(), "using database");
    Ok(AppContext { api: ctx.api })
}

fn handle_add(ctx: &mut AppContext, path: &str) -> Result<()> {
    let result = ctx.api.add_file(path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, file: &str) -> Result<()> {
    let result = ctx.api.remove_file(file)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_move(ctx: &mut AppContext, file: &str, new_path: &str) -> Result<()> {
    let result = ctx.api.move_file(file, new_path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_files(ctx: &AppContext, long: bool) -> Result<()> {
    let result = ctx.api.list_files()?;
    print_files(&result.listed_files, long);
    Ok(())
}

fn handle_set(ctx: &mut AppContext, file: &str, name: &str, value: Option<&str>) -> Result<()> {
    let result = ctx.api.set_tag(file, name, value)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_unset(ctx: &mut AppContext, file: &str, name: &str) -> Result<()> {
    let result = ctx.api.unset_tag(file, name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_get(ctx: &AppContext, file: &str) -> Result<()> {
    let result = ctx.api.get_tags(file)?;
    print_tags(&result.tags);
    Ok(())
}

fn handle_match(ctx: &AppContext, filter: &[String], strict: bool) -> Result<()> {
    let result = ctx.api.match_files(filter, strict)?;
    print_files(&result.listed_files, false);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    print_messages(&result.messages);

    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    Ok(())
}
