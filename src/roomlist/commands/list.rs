use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::DisplayRoom;
use crate::query::RoomQuery;
use crate::store::DataStore;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

/// Runs the query pipeline over the stored rooms. Each result keeps its
/// canonical display index.
pub fn run<S: DataStore>(store: &S, query: &RoomQuery) -> Result<CmdResult> {
    let rooms = store.list_rooms()?;
    let positions: HashMap<Uuid, usize> = rooms
        .iter()
        .enumerate()
        .map(|(i, room)| (room.id, i + 1))
        .collect();

    let listed: Vec<DisplayRoom> = query
        .run(&rooms)
        .into_iter()
        .filter_map(|room| {
            positions.get(&room.id).map(|&index| DisplayRoom {
                index,
                room: room.clone(),
            })
        })
        .collect();

    debug!(
        selector = %query.selector,
        search = %query.search,
        sort = %query.sort,
        total = rooms.len(),
        listed = listed.len(),
        "listed rooms"
    );
    Ok(CmdResult::default().with_listed_rooms(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::seed;
    use crate::query::SortKey;
    use crate::store::memory::InMemoryStore;

    fn seeded() -> InMemoryStore {
        let mut store = InMemoryStore::new();
        seed::run(&mut store).unwrap();
        store
    }

    fn listing(store: &InMemoryStore, selector: &str, search: &str, sort: SortKey) -> Vec<(usize, String)> {
        let query = RoomQuery {
            selector: selector.into(),
            search: search.into(),
            sort,
        };
        run(store, &query)
            .unwrap()
            .listed_rooms
            .into_iter()
            .map(|dr| (dr.index, dr.room.title))
            .collect()
    }

    #[test]
    fn sorts_by_popularity_keeping_canonical_indexes() {
        let store = seeded();
        assert_eq!(
            listing(&store, "ALL", "", SortKey::Popularity),
            vec![
                (1, "Escape the Haunted Mansion".to_string()),
                (3, "Mystery Laboratory".to_string()),
                (4, "Underwater Temple Escape".to_string()),
                (2, "Prison Break Adventure".to_string()),
            ]
        );
    }

    #[test]
    fn sorts_by_player_count() {
        let store = seeded();
        let indexes: Vec<usize> = listing(&store, "ALL", "", SortKey::PlayerCount)
            .into_iter()
            .map(|(i, _)| i)
            .collect();
        assert_eq!(indexes, vec![4, 1, 3, 2]);
    }

    #[test]
    fn filters_by_tag_then_searches() {
        let store = seeded();
        assert_eq!(
            listing(&store, "협동", "", SortKey::Newest),
            vec![
                (4, "Underwater Temple Escape".to_string()),
                (1, "Escape the Haunted Mansion".to_string()),
            ]
        );
        assert_eq!(
            listing(&store, "협동", "aqua", SortKey::Newest),
            vec![(4, "Underwater Temple Escape".to_string())]
        );
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = InMemoryStore::new();
        assert!(run(&store, &RoomQuery::default()).unwrap().listed_rooms.is_empty());
    }
}
