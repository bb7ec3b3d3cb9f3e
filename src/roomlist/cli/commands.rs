use super::print::{print_full_rooms, print_header, print_json, print_messages, print_rooms};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use roomlist::api::{ConfigAction, ListRequest, RoomListApi};
use roomlist::config::LobbyConfig;
use roomlist::error::{Result, RoomListError};
use roomlist::model::RoomDraft;
use roomlist::store::fs::FileStore;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Overrides the platform data directory.
const DATA_DIR_ENV: &str = "ROOMLIST_DATA";

struct AppContext {
    api: RoomListApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::List {
            filter,
            search,
            sort,
            json,
        }) => handle_list(
            &ctx,
            ListRequest {
                selector: filter,
                search,
                sort,
            },
            json,
        ),
        Some(Commands::Add {
            title,
            creator,
            difficulty,
            players,
            like_rate,
            plays,
            rating,
            tags,
            thumbnail,
        }) => {
            let mut draft = RoomDraft::new(title, creator, difficulty)
                .players(players)
                .like_rate(like_rate)
                .play_count(plays)
                .rating(rating)
                .tags(tags);
            draft.thumbnail = thumbnail;
            handle_add(&mut ctx, draft)
        }
        Some(Commands::View { selectors }) => handle_view(&ctx, &selectors),
        Some(Commands::Remove { selectors }) => handle_remove(&mut ctx, &selectors),
        Some(Commands::Clear) => handle_clear(&mut ctx),
        Some(Commands::Seed) => handle_seed(&mut ctx),
        Some(Commands::Import { file }) => handle_import(&mut ctx, &file),
        Some(Commands::Export { file }) => handle_export(&ctx, &file),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, ListRequest::default(), false),
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "roomlist=debug"
    } else {
        "roomlist=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let proj_dirs = ProjectDirs::from("com", "roomlist", "roomlist")
        .ok_or_else(|| RoomListError::Api("Could not determine data directory".into()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn init_context() -> Result<AppContext> {
    let data_dir = data_dir()?;
    tracing::debug!(data_dir = %data_dir.display(), "using data directory");
    let store = FileStore::new(data_dir.clone());
    Ok(AppContext {
        api: RoomListApi::new(store, data_dir),
    })
}

fn handle_list(ctx: &AppContext, request: ListRequest, json: bool) -> Result<()> {
    let result = ctx.api.list_rooms(request)?;
    if json {
        return print_json(&result.listed_rooms);
    }
    if let Some(header) = &result.header {
        print_header(header);
    }
    print_rooms(&result.listed_rooms);
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, draft: RoomDraft) -> Result<()> {
    let result = ctx.api.add_room(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, selectors: &[String]) -> Result<()> {
    let result = ctx.api.view_rooms(selectors)?;
    print_full_rooms(&result.listed_rooms);
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, selectors: &[String]) -> Result<()> {
    let result = ctx.api.remove_rooms(selectors)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.clear_rooms()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_seed(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.seed_rooms()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, file: &Path) -> Result<()> {
    let result = ctx.api.import_rooms(file)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, file: &Path) -> Result<()> {
    let result = ctx.api.export_rooms(file)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            for key in LobbyConfig::keys() {
                println!("{} = {}", key, config.get(key)?);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}
