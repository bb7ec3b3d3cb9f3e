use super::{upsert, DataStore};
use crate::error::{Result, RoomListError};
use crate::model::Room;
use uuid::Uuid;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    rooms: Vec<Room>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn save_room(&mut self, room: &Room) -> Result<()> {
        upsert(&mut self.rooms, room);
        Ok(())
    }

    fn get_room(&self, id: &Uuid) -> Result<Room> {
        self.rooms
            .iter()
            .find(|r| r.id == *id)
            .cloned()
            .ok_or(RoomListError::RoomNotFound(*id))
    }

    fn list_rooms(&self) -> Result<Vec<Room>> {
        Ok(self.rooms.clone())
    }

    fn delete_room(&mut self, id: &Uuid) -> Result<()> {
        let before = self.rooms.len();
        self.rooms.retain(|r| r.id != *id);
        if self.rooms.len() == before {
            return Err(RoomListError::RoomNotFound(*id));
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.rooms.clear();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Difficulty, RoomDraft};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_rooms(mut self, count: usize) -> Self {
            for i in 0..count {
                let draft = RoomDraft::new(
                    format!("Test Room {}", i + 1),
                    format!("Creator {}", i + 1),
                    Difficulty::Medium,
                );
                self.store.save_room(&Room::new(draft).unwrap()).unwrap();
            }
            self
        }

        pub fn with_room(mut self, draft: RoomDraft) -> Self {
            self.store.save_room(&Room::new(draft).unwrap()).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;
    use crate::model::{Difficulty, RoomDraft};

    #[test]
    fn lists_in_insertion_order() {
        let fixture = StoreFixture::new().with_rooms(3);
        let titles: Vec<String> = fixture
            .store
            .list_rooms()
            .unwrap()
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, vec!["Test Room 1", "Test Room 2", "Test Room 3"]);
    }

    #[test]
    fn save_replaces_in_place() {
        let mut fixture = StoreFixture::new().with_rooms(2);
        let mut first = fixture.store.list_rooms().unwrap().remove(0);
        first.title = "Renamed".into();
        fixture.store.save_room(&first).unwrap();

        let rooms = fixture.store.list_rooms().unwrap();
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].title, "Renamed");
    }

    #[test]
    fn delete_and_get_missing() {
        let mut store = InMemoryStore::new();
        let room = Room::new(RoomDraft::new("A", "me", Difficulty::Easy)).unwrap();
        store.save_room(&room).unwrap();
        store.delete_room(&room.id).unwrap();

        assert!(matches!(
            store.get_room(&room.id),
            Err(RoomListError::RoomNotFound(_))
        ));
        assert!(store.delete_room(&room.id).is_err());
    }
}
