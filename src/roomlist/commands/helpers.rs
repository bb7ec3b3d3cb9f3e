use crate::error::{Result, RoomListError};
use crate::index::{index_rooms, DisplayRoom, RoomSelector};
use crate::store::DataStore;

pub fn indexed_rooms<S: DataStore>(store: &S) -> Result<Vec<DisplayRoom>> {
    let rooms = store.list_rooms()?;
    Ok(index_rooms(rooms))
}

/// Resolves selectors against the store, in selector order, without
/// duplicates. Every selector must match at least one room.
pub fn rooms_by_selectors<S: DataStore>(
    store: &S,
    selectors: &[RoomSelector],
) -> Result<Vec<DisplayRoom>> {
    let indexed = indexed_rooms(store)?;
    let mut picked: Vec<DisplayRoom> = Vec::new();

    for selector in selectors {
        let matched: Vec<&DisplayRoom> = indexed.iter().filter(|dr| selector.matches(dr)).collect();
        if matched.is_empty() {
            return Err(RoomListError::Api(format!("{} not found", selector)));
        }
        for dr in matched {
            if !picked.iter().any(|p| p.room.id == dr.room.id) {
                picked.push(dr.clone());
            }
        }
    }

    Ok(picked)
}
