//! # Roomlist Architecture
//!
//! Roomlist is a **UI-agnostic room-browsing library**: a game lobby's room
//! list, minus the screen. The bundled CLI is one client of it; a game UI,
//! a web page or a bot could be another.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (indexes → selectors, names → keys)    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic over a DataStore, returns CmdResult       │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                             │
//!                 ▼                             ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  Query Pipeline (query/)      │ │  Storage Layer (store/)   │
//! │  - Pure filter/search/sort    │ │  - DataStore trait        │
//! │  - Borrows, never mutates     │ │  - FileStore, InMemory    │
//! └───────────────────────────────┘ └───────────────────────────┘
//! ```
//!
//! ## The Query Pipeline
//!
//! [`query::query`] is the heart of the crate: selector filter, then text
//! search, then sort, as a pure function of its arguments. It holds no
//! "current filter" state; callers own that (see [`query::RoomQuery`] and the
//! defaults in [`config::LobbyConfig`]).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`query`]: The filter/search/sort pipeline
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Room`, `Difficulty`, `Thumbnail`) and display-string parsing
//! - [`index`]: Canonical display indexes and room selectors
//! - [`config`]: Lobby configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod query;
pub mod store;
