//! # Storage Layer
//!
//! The [`DataStore`] trait abstracts where rooms live, so the command layer
//! can be tested against memory and run against disk.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: rooms kept as a JSON array in `rooms.json`
//! - [`memory::InMemoryStore`]: no persistence, for tests
//!
//! ## Ordering
//!
//! Stores list rooms in insertion order. Replacing an existing room keeps its
//! position. This order is what display indexes are derived from and what the
//! `Newest` sort reverses.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── rooms.json     # All rooms (JSON array, insertion order)
//! └── config.json    # Lobby configuration
//! ```

use crate::error::Result;
use crate::model::Room;
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// Abstract interface for room storage.
pub trait DataStore {
    /// Save a room. Replaces a room with the same id in place.
    fn save_room(&mut self, room: &Room) -> Result<()>;

    /// Get a room by ID
    fn get_room(&self, id: &Uuid) -> Result<Room>;

    /// List all rooms in insertion order
    fn list_rooms(&self) -> Result<Vec<Room>>;

    /// Delete a room permanently
    fn delete_room(&mut self, id: &Uuid) -> Result<()>;

    /// Remove every room
    fn clear(&mut self) -> Result<()>;
}

/// Inserts or replaces `room` in an ordered list.
pub(crate) fn upsert(rooms: &mut Vec<Room>, room: &Room) {
    match rooms.iter_mut().find(|r| r.id == room.id) {
        Some(existing) => *existing = room.clone(),
        None => rooms.push(room.clone()),
    }
}
