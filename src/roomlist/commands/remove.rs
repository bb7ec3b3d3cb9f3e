use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::RoomSelector;
use crate::store::DataStore;
use tracing::info;

use super::helpers::rooms_by_selectors;

pub fn run<S: DataStore>(store: &mut S, selectors: &[RoomSelector]) -> Result<CmdResult> {
    let targets = rooms_by_selectors(store, selectors)?;
    let mut result = CmdResult::default();
    let mut removed = Vec::with_capacity(targets.len());

    for dr in targets {
        store.delete_room(&dr.room.id)?;
        info!(id = %dr.room.id, "room removed");
        result.add_message(CmdMessage::success(format!(
            "Removed {}: {}",
            dr.index, dr.room.title
        )));
        removed.push(dr.room);
    }

    Ok(result.with_affected_rooms(removed))
}
