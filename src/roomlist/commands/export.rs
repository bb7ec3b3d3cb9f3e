use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RoomListError};
use crate::model::RoomDraft;
use crate::store::DataStore;
use std::fs;
use std::path::Path;
use tracing::info;

/// Writes every stored room to `path` as a JSON array of drafts, the same
/// format `import` reads.
pub fn run<S: DataStore>(store: &S, path: &Path) -> Result<CmdResult> {
    let rooms = store.list_rooms()?;
    let mut result = CmdResult::default();

    if rooms.is_empty() {
        result.add_message(CmdMessage::info("No rooms to export."));
        return Ok(result);
    }

    let drafts: Vec<RoomDraft> = rooms.iter().map(|r| r.to_draft()).collect();
    let content = serde_json::to_string_pretty(&drafts).map_err(RoomListError::Serialization)?;
    fs::write(path, content).map_err(RoomListError::Io)?;
    info!(count = rooms.len(), path = %path.display(), "exported rooms");

    result.add_message(CmdMessage::success(format!(
        "Exported {} room(s) to {}",
        rooms.len(),
        path.display()
    )));
    Ok(result.with_affected_rooms(rooms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{import, seed};
    use crate::store::memory::InMemoryStore;
    use tempfile::TempDir;

    #[test]
    fn export_then_import_reproduces_the_listing() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("export.json");

        let mut source = InMemoryStore::new();
        seed::run(&mut source).unwrap();
        run(&source, &file).unwrap();

        let mut target = InMemoryStore::new();
        import::run(&mut target, &file).unwrap();

        let before: Vec<RoomDraft> = source.list_rooms().unwrap().iter().map(|r| r.to_draft()).collect();
        let after: Vec<RoomDraft> = target.list_rooms().unwrap().iter().map(|r| r.to_draft()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn empty_store_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("export.json");
        let result = run(&InMemoryStore::new(), &file).unwrap();
        assert!(!file.exists());
        assert_eq!(result.messages[0].content, "No rooms to export.");
    }
}
