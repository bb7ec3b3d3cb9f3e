use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Difficulty, Room, RoomDraft};
use crate::store::DataStore;
use tracing::info;

/// The lobby's built-in sample rooms.
pub fn sample_rooms() -> Vec<RoomDraft> {
    vec![
        RoomDraft::new("Escape the Haunted Mansion", "MasterBuilder_2023", Difficulty::Hard)
            .players(127)
            .like_rate("94%")
            .play_count("2.1M")
            .rating(4.8)
            .tags(["호러", "협동"]),
        RoomDraft::new("Prison Break Adventure", "EscapeGuru", Difficulty::Medium)
            .players(45)
            .like_rate("87%")
            .play_count("850K")
            .rating(4.5)
            .tags(["액션", "전략"]),
        RoomDraft::new("Mystery Laboratory", "ScienceFan", Difficulty::Easy)
            .players(92)
            .like_rate("91%")
            .play_count("1.3M")
            .rating(4.7)
            .tags(["퍼즐", "교육"]),
        RoomDraft::new("Underwater Temple Escape", "AquaAdventurer", Difficulty::Medium)
            .players(201)
            .like_rate("89%")
            .play_count("970K")
            .rating(4.6)
            .tags(["어드벤처", "협동"]),
    ]
}

/// Appends the sample rooms to the store.
pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let mut added = Vec::new();
    for draft in sample_rooms() {
        let room = Room::new(draft)?;
        store.save_room(&room)?;
        added.push(room);
    }
    info!(count = added.len(), "seeded sample rooms");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added {} sample rooms",
        added.len()
    )));
    Ok(result.with_affected_rooms(added))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn seeds_four_rooms_in_order() {
        let mut store = InMemoryStore::new();
        run(&mut store).unwrap();
        let rooms = store.list_rooms().unwrap();
        assert_eq!(rooms.len(), 4);
        assert_eq!(rooms[0].title, "Escape the Haunted Mansion");
        assert_eq!(rooms[0].play_count_number(), 2_100_000);
        assert_eq!(rooms[1].play_count_number(), 850_000);
        assert_eq!(rooms[3].like_percentage(), 89.0);
    }

    #[test]
    fn seeding_twice_appends_fresh_rooms() {
        let mut store = InMemoryStore::new();
        run(&mut store).unwrap();
        run(&mut store).unwrap();
        let rooms = store.list_rooms().unwrap();
        assert_eq!(rooms.len(), 8);
        assert_ne!(rooms[0].id, rooms[4].id);
    }
}
