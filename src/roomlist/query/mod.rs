//! # Room Query Pipeline
//!
//! Turns a room collection plus the user's current selection into an ordered
//! list of rooms:
//!
//! ```text
//! rooms ──► filter_by_selector ──► filter_by_search ──► sort_rooms ──► result
//!           ("ALL" / difficulty      (case-insensitive     (popularity, newest,
//!            label / exact tag)       title/creator/tag)    rating, players)
//! ```
//!
//! Every stage is a pure function over borrowed rooms. Rooms are never
//! cloned or mutated, only selected and reordered, so the same collection can
//! be queried repeatedly with different parameters.
//!
//! The pipeline keeps no "current filter" state. Callers that need one hold a
//! [`RoomQuery`] and pass it in.

use crate::model::Room;

pub mod filter;
pub mod search;
pub mod sort;

pub use filter::{filter_by_selector, ALL_SELECTOR};
pub use search::filter_by_search;
pub use sort::{sort_rooms, SortKey};

/// The parameters of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomQuery {
    pub selector: String,
    pub search: String,
    pub sort: SortKey,
}

impl Default for RoomQuery {
    fn default() -> Self {
        Self {
            selector: ALL_SELECTOR.to_string(),
            search: String::new(),
            sort: SortKey::default(),
        }
    }
}

impl RoomQuery {
    pub fn run<'a>(&self, rooms: &'a [Room]) -> Vec<&'a Room> {
        query(rooms, &self.selector, &self.search, self.sort)
    }
}

/// Selector filter, then text search, then sort.
pub fn query<'a>(rooms: &'a [Room], selector: &str, search: &str, key: SortKey) -> Vec<&'a Room> {
    let all: Vec<&Room> = rooms.iter().collect();
    let selected = filter_by_selector(&all, selector);
    let searched = filter_by_search(&selected, search);
    sort_rooms(&searched, key)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::model::{Difficulty, Room, RoomDraft};

    pub fn room(title: &str, difficulty: Difficulty, rating: f32, players: u32, tags: &[&str]) -> Room {
        Room::new(
            RoomDraft::new(title, "tester", difficulty)
                .rating(rating)
                .players(players)
                .tags(tags.iter().copied()),
        )
        .unwrap()
    }

    pub fn titles(rooms: &[&Room]) -> Vec<String> {
        rooms.iter().map(|r| r.title.clone()).collect()
    }
}
