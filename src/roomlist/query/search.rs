use crate::model::Room;

/// Keeps rooms whose title, creator or any tag contains `query`,
/// ignoring case. A blank query keeps everything.
pub fn filter_by_search<'a>(rooms: &[&'a Room], query: &str) -> Vec<&'a Room> {
    if query.trim().is_empty() {
        return rooms.to_vec();
    }

    let needle = query.to_lowercase();
    rooms
        .iter()
        .copied()
        .filter(|room| matches_room(room, &needle))
        .collect()
}

fn matches_room(room: &Room, needle: &str) -> bool {
    room.title.to_lowercase().contains(needle)
        || room.creator.to_lowercase().contains(needle)
        || room.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}
