use super::{upsert, DataStore};
use crate::error::{Result, RoomListError};
use crate::model::Room;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use tracing::debug;
use uuid::Uuid;

const ROOMS_FILENAME: &str = "rooms.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn data_file(&self) -> PathBuf {
        self.root.join(ROOMS_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(RoomListError::Io)?;
        }
        Ok(())
    }

    fn load_rooms(&self) -> Result<Vec<Room>> {
        let data_file = self.data_file();
        if !data_file.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&data_file).map_err(RoomListError::Io)?;
        let rooms: Vec<Room> =
            serde_json::from_str(&content).map_err(RoomListError::Serialization)?;
        check_rooms(&rooms)?;
        debug!(count = rooms.len(), path = %data_file.display(), "loaded rooms");
        Ok(rooms)
    }

    fn save_rooms(&self, rooms: &[Room]) -> Result<()> {
        self.ensure_dir()?;
        let data_file = self.data_file();
        let content = serde_json::to_string_pretty(rooms).map_err(RoomListError::Serialization)?;
        fs::write(&data_file, content).map_err(RoomListError::Io)?;
        debug!(count = rooms.len(), path = %data_file.display(), "saved rooms");
        Ok(())
    }
}

/// A hand-edited file must still hold rooms `Room::new` would accept, each
/// with its own id.
fn check_rooms(rooms: &[Room]) -> Result<()> {
    let mut seen = HashSet::new();
    for room in rooms {
        room.validate()
            .map_err(|e| RoomListError::Store(format!("Room {} is invalid: {}", room.id, e)))?;
        if !seen.insert(room.id) {
            return Err(RoomListError::Store(format!(
                "Duplicate room id {}",
                room.id
            )));
        }
    }
    Ok(())
}

impl DataStore for FileStore {
    fn save_room(&mut self, room: &Room) -> Result<()> {
        let mut rooms = self.load_rooms()?;
        upsert(&mut rooms, room);
        self.save_rooms(&rooms)
    }

    fn get_room(&self, id: &Uuid) -> Result<Room> {
        self.load_rooms()?
            .into_iter()
            .find(|r| r.id == *id)
            .ok_or(RoomListError::RoomNotFound(*id))
    }

    fn list_rooms(&self) -> Result<Vec<Room>> {
        self.load_rooms()
    }

    fn delete_room(&mut self, id: &Uuid) -> Result<()> {
        let mut rooms = self.load_rooms()?;
        let before = rooms.len();
        rooms.retain(|r| r.id != *id);
        if rooms.len() == before {
            return Err(RoomListError::RoomNotFound(*id));
        }
        self.save_rooms(&rooms)
    }

    fn clear(&mut self) -> Result<()> {
        if self.data_file().exists() {
            self.save_rooms(&[])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, RoomDraft};
    use tempfile::TempDir;

    fn room(title: &str) -> Room {
        Room::new(RoomDraft::new(title, "tester", Difficulty::Hard).tags(["Horror"])).unwrap()
    }

    #[test]
    fn empty_when_no_file() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("missing"));
        assert!(store.list_rooms().unwrap().is_empty());
    }

    #[test]
    fn persists_across_instances_in_order() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("data");

        let mut store = FileStore::new(root.clone());
        let a = room("A");
        let b = room("B");
        store.save_room(&a).unwrap();
        store.save_room(&b).unwrap();

        let reopened = FileStore::new(root);
        let rooms = reopened.list_rooms().unwrap();
        assert_eq!(rooms, vec![a.clone(), b]);
        assert_eq!(reopened.get_room(&a.id).unwrap(), a);
    }

    #[test]
    fn delete_and_clear() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());
        let a = room("A");
        let b = room("B");
        store.save_room(&a).unwrap();
        store.save_room(&b).unwrap();

        store.delete_room(&a.id).unwrap();
        assert_eq!(store.list_rooms().unwrap(), vec![b]);
        assert!(matches!(
            store.delete_room(&a.id),
            Err(RoomListError::RoomNotFound(_))
        ));

        store.clear().unwrap();
        assert!(store.list_rooms().unwrap().is_empty());
    }

    #[test]
    fn corrupt_file_is_a_serialization_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(ROOMS_FILENAME), "not json").unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        assert!(matches!(
            store.list_rooms(),
            Err(RoomListError::Serialization(_))
        ));
    }

    fn write_raw(root: &std::path::Path, rooms: &[Room]) {
        fs::write(
            root.join(ROOMS_FILENAME),
            serde_json::to_string_pretty(rooms).unwrap(),
        )
        .unwrap();
    }

    #[test]
    fn duplicate_ids_are_a_store_error() {
        let temp = TempDir::new().unwrap();
        let a = room("A");
        let mut b = room("B");
        b.id = a.id;
        write_raw(temp.path(), &[a, b]);

        let store = FileStore::new(temp.path().to_path_buf());
        let err = store.list_rooms().unwrap_err();
        assert!(matches!(err, RoomListError::Store(_)));
        assert!(err.to_string().contains("Duplicate room id"));
    }

    #[test]
    fn invalid_rooms_are_a_store_error() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());

        let mut negative = room("A");
        negative.rating = -1.0;
        write_raw(temp.path(), &[negative]);
        assert!(matches!(store.list_rooms(), Err(RoomListError::Store(_))));

        let mut blank_tag = room("B");
        blank_tag.tags.push("  ".to_string());
        write_raw(temp.path(), &[blank_tag]);
        assert!(matches!(store.list_rooms(), Err(RoomListError::Store(_))));

        let mut untitled = room("C");
        untitled.title = String::new();
        write_raw(temp.path(), &[untitled]);
        assert!(matches!(
            store.get_room(&Uuid::nil()),
            Err(RoomListError::Store(_))
        ));
    }
}
