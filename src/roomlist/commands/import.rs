use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RoomListError};
use crate::model::{Room, RoomDraft};
use crate::store::DataStore;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Imports a JSON array of room drafts. Drafts that fail validation are
/// skipped with a warning; a file that is not a draft array fails as a whole.
pub fn run<S: DataStore>(store: &mut S, path: &Path) -> Result<CmdResult> {
    let content = fs::read_to_string(path).map_err(RoomListError::Io)?;
    let drafts: Vec<RoomDraft> =
        serde_json::from_str(&content).map_err(RoomListError::Serialization)?;

    let mut result = CmdResult::default();
    let mut imported = Vec::new();

    for (i, draft) in drafts.into_iter().enumerate() {
        let title = draft.title.clone();
        match Room::new(draft) {
            Ok(room) => {
                store.save_room(&room)?;
                imported.push(room);
            }
            Err(e) => {
                warn!(entry = i + 1, error = %e, "skipping room");
                result.add_message(CmdMessage::warning(format!(
                    "Skipped entry {} ({:?}): {}",
                    i + 1,
                    title,
                    e
                )));
            }
        }
    }

    info!(count = imported.len(), path = %path.display(), "imported rooms");
    result.add_message(CmdMessage::success(format!(
        "Total imported: {}",
        imported.len()
    )));
    Ok(result.with_affected_rooms(imported))
}
