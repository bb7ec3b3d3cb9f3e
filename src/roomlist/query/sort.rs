use crate::error::{Result, RoomListError};
use crate::model::Room;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "popularity")]
    Popularity,
    #[serde(rename = "newest")]
    Newest,
    #[serde(rename = "rating")]
    Rating,
    #[serde(rename = "players")]
    PlayerCount,
}

impl SortKey {
    /// In sort-menu order.
    pub const ALL: [SortKey; 4] = [
        SortKey::Popularity,
        SortKey::Newest,
        SortKey::Rating,
        SortKey::PlayerCount,
    ];

    /// Maps a sort-menu position to a key.
    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL.get(index).copied().ok_or_else(|| {
            RoomListError::InvalidArgument(format!(
                "Unknown sort index: {} (expected 0..={})",
                index,
                Self::ALL.len() - 1
            ))
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            SortKey::Popularity => "popularity",
            SortKey::Newest => "newest",
            SortKey::Rating => "rating",
            SortKey::PlayerCount => "players",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortKey {
    type Err = RoomListError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|key| key.name() == wanted)
            .ok_or_else(|| {
                RoomListError::InvalidArgument(format!(
                    "Unknown sort key: {} (expected popularity, newest, rating or players)",
                    s
                ))
            })
    }
}

/// Orders rooms by `key`, highest first. Equal keys keep their input order.
///
/// `Newest` reverses the input order and does not look at `created_at`.
/// Stores list rooms in insertion order, so over a full listing this puts
/// the most recently added room first.
pub fn sort_rooms<'a>(rooms: &[&'a Room], key: SortKey) -> Vec<&'a Room> {
    let mut sorted = rooms.to_vec();
    match key {
        SortKey::Popularity => {
            sorted.sort_by(|a, b| descending(a.like_percentage(), b.like_percentage()))
        }
        SortKey::Newest => sorted.reverse(),
        SortKey::Rating => sorted.sort_by(|a, b| descending(a.rating, b.rating)),
        SortKey::PlayerCount => sorted.sort_by(|a, b| b.player_count.cmp(&a.player_count)),
    }
    sorted
}

/// Keys are finite, so `partial_cmp` only fails on values rooms never hold.
/// `-0.0` and `0.0` compare equal and keep their input order.
fn descending(a: f32, b: f32) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
