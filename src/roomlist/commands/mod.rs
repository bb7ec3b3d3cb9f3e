use crate::config::LobbyConfig;
use crate::index::DisplayRoom;
use crate::model::{format_credits, Room};

pub mod add;
pub mod clear;
pub mod config;
pub mod export;
pub mod helpers;
pub mod import;
pub mod list;
pub mod remove;
pub mod seed;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Title bar of the lobby: category heading plus the player's credits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageHeader {
    pub title: String,
    pub subtitle: String,
    pub credits: String,
}

impl PageHeader {
    pub fn from_config(config: &LobbyConfig) -> Self {
        Self {
            title: config.category.title().to_string(),
            subtitle: config.category.subtitle().to_string(),
            credits: format_credits(config.credits),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_rooms: Vec<Room>,
    pub listed_rooms: Vec<DisplayRoom>,
    pub header: Option<PageHeader>,
    pub config: Option<LobbyConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_rooms(mut self, rooms: Vec<Room>) -> Self {
        self.affected_rooms = rooms;
        self
    }

    pub fn with_listed_rooms(mut self, rooms: Vec<DisplayRoom>) -> Self {
        self.listed_rooms = rooms;
        self
    }

    pub fn with_header(mut self, header: PageHeader) -> Self {
        self.header = Some(header);
        self
    }

    pub fn with_config(mut self, config: LobbyConfig) -> Self {
        self.config = Some(config);
        self
    }
}
