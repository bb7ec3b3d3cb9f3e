use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use tracing::info;

pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let rooms = store.list_rooms()?;
    store.clear()?;
    info!(count = rooms.len(), "cleared rooms");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Removed {} room(s)",
        rooms.len()
    )));
    Ok(result.with_affected_rooms(rooms))
}
