use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Room, RoomDraft};
use crate::store::DataStore;
use tracing::info;

pub fn run<S: DataStore>(store: &mut S, draft: RoomDraft) -> Result<CmdResult> {
    let room = Room::new(draft)?;
    store.save_room(&room)?;
    info!(id = %room.id, title = %room.title, "room added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Room added: {}", room.title)));
    Ok(result.with_affected_rooms(vec![room]))
}
