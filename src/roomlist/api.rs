//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every room operation, whatever UI sits on top.
//!
//! It dispatches to `commands/*.rs`, turns raw user input (index strings,
//! sort names) into typed values, and attaches lobby configuration where a
//! command needs it. It does no I/O of its own beyond what the commands do
//! and never formats output.
//!
//! `RoomListApi<S: DataStore>` is generic over the storage backend:
//! `FileStore` in the binary, `InMemoryStore` in tests.

use crate::commands;
use crate::config::LobbyConfig;
use crate::error::Result;
use crate::index::parse_selectors;
use crate::model::RoomDraft;
use crate::query::{RoomQuery, SortKey};
use crate::store::DataStore;
use std::path::{Path, PathBuf};

/// Optional overrides for a listing; anything left `None` comes from config.
#[derive(Debug, Clone, Default)]
pub struct ListRequest {
    pub selector: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
}

pub struct RoomListApi<S: DataStore> {
    store: S,
    data_dir: PathBuf,
}

impl<S: DataStore> RoomListApi<S> {
    pub fn new(store: S, data_dir: PathBuf) -> Self {
        Self { store, data_dir }
    }

    pub fn add_room(&mut self, draft: RoomDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, draft)
    }

    /// Lists rooms through the query pipeline, filling unset parameters from
    /// the lobby config. An unknown sort name is an `InvalidArgument` error.
    pub fn list_rooms(&self, request: ListRequest) -> Result<commands::CmdResult> {
        let config = LobbyConfig::load(&self.data_dir)?;
        let sort = match request.sort.as_deref() {
            Some(name) => name.parse::<SortKey>()?,
            None => config.default_sort,
        };
        let query = RoomQuery {
            selector: request.selector.unwrap_or_else(|| config.default_selector.clone()),
            search: request.search.unwrap_or_default(),
            sort,
        };
        let result = commands::list::run(&self.store, &query)?;
        Ok(result.with_header(commands::PageHeader::from_config(&config)))
    }

    pub fn view_rooms<I: AsRef<str>>(&self, inputs: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(inputs)?;
        commands::view::run(&self.store, &selectors)
    }

    pub fn remove_rooms<I: AsRef<str>>(&mut self, inputs: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(inputs)?;
        commands::remove::run(&mut self.store, &selectors)
    }

    pub fn clear_rooms(&mut self) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.store)
    }

    pub fn seed_rooms(&mut self) -> Result<commands::CmdResult> {
        commands::seed::run(&mut self.store)
    }

    pub fn import_rooms(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.store, path)
    }

    pub fn export_rooms(&self, path: &Path) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, path)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, PageHeader};
