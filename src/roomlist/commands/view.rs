use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::RoomSelector;
use crate::store::DataStore;

use super::helpers::rooms_by_selectors;

pub fn run<S: DataStore>(store: &S, selectors: &[RoomSelector]) -> Result<CmdResult> {
    let rooms = rooms_by_selectors(store, selectors)?;
    Ok(CmdResult::default().with_listed_rooms(rooms))
}
