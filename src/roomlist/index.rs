//! # Display Indexes
//!
//! Rooms are identified by UUIDs in storage, which nobody wants to type. Every
//! stored room therefore gets a canonical, 1-based display index from its
//! position in the store (insertion order).
//!
//! The index belongs to the room, not to a particular listing: after filtering
//! or sorting, a room still shows the same number, so `view 3` means the same
//! room regardless of how the last list was ordered.

use crate::error::{Result, RoomListError};
use crate::model::Room;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRoom {
    pub index: usize,
    pub room: Room,
}

/// A user input that picks rooms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomSelector {
    Index(usize),
    Id(Uuid),
    Title(String),
}

impl fmt::Display for RoomSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomSelector::Index(idx) => write!(f, "Index {}", idx),
            RoomSelector::Id(id) => write!(f, "Room {}", id),
            RoomSelector::Title(t) => write!(f, "Title \"{}\"", t),
        }
    }
}

impl RoomSelector {
    pub fn matches(&self, dr: &DisplayRoom) -> bool {
        match self {
            RoomSelector::Index(idx) => dr.index == *idx,
            RoomSelector::Id(id) => dr.room.id == *id,
            RoomSelector::Title(term) => dr.room.title.to_lowercase().contains(&term.to_lowercase()),
        }
    }
}

/// Assigns canonical indexes in store order.
pub fn index_rooms(rooms: Vec<Room>) -> Vec<DisplayRoom> {
    rooms
        .into_iter()
        .enumerate()
        .map(|(i, room)| DisplayRoom { index: i + 1, room })
        .collect()
}

/// Longest range a single input may expand to.
pub const MAX_RANGE_LEN: usize = 10_000;

/// Parses a single index (`"3"`) or an inclusive range (`"2-4"`).
/// Ranges longer than [`MAX_RANGE_LEN`] are rejected before expansion.
pub fn parse_index_or_range(s: &str) -> std::result::Result<Vec<usize>, String> {
    if let Some((start, end)) = s.split_once('-') {
        let start = parse_index(start)?;
        let end = parse_index(end)?;
        if start > end {
            return Err(format!(
                "Invalid range: start ({}) must be <= end ({})",
                start, end
            ));
        }
        if end - start >= MAX_RANGE_LEN {
            return Err(format!(
                "Range {}-{} is too long (at most {} indexes)",
                start, end, MAX_RANGE_LEN
            ));
        }
        return Ok((start..=end).collect());
    }
    parse_index(s).map(|idx| vec![idx])
}

fn parse_index(s: &str) -> std::result::Result<usize, String> {
    match usize::from_str(s.trim()) {
        Ok(0) => Err("Indexes start at 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("Invalid index format: {}", s)),
    }
}

/// Turns raw user inputs into selectors.
///
/// If every input is made of digits and dashes, all of them must parse as
/// indexes or ranges. A lone UUID selects by id. Anything else is joined
/// into one title search, so `view haunted mansion` works without quotes.
pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<RoomSelector>> {
    if !inputs.is_empty() && inputs.iter().all(|s| looks_like_index(s.as_ref())) {
        let mut selectors = Vec::new();
        for input in inputs {
            let indexes =
                parse_index_or_range(input.as_ref()).map_err(RoomListError::InvalidArgument)?;
            selectors.extend(indexes.into_iter().map(RoomSelector::Index));
        }
        return Ok(selectors);
    }

    if let [single] = inputs {
        if let Ok(id) = Uuid::parse_str(single.as_ref().trim()) {
            return Ok(vec![RoomSelector::Id(id)]);
        }
    }

    let term = inputs
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join(" ");
    Ok(vec![RoomSelector::Title(term)])
}

fn looks_like_index(s: &str) -> bool {
    let s = s.trim();
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit() || c == '-')
}
