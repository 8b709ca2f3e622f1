//! Room and item storage shared by [`WorldBuilder`](crate::WorldBuilder)
//! and [`World`](crate::World).
//!
//! Handles are `u32` indices into the two vectors. Allocation fails once a
//! vector holds `u32::MAX + 1` entries rather than wrapping.

use hollow_foundation::{Error, ItemId, Result, RoomId};

use crate::item::Item;
use crate::room::Room;

/// The room and item vectors, indexed by handle.
#[derive(Clone, Debug, Default)]
pub(crate) struct Arena {
    rooms: Vec<Room>,
    items: Vec<Item>,
}

impl Arena {
    pub(crate) fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub(crate) fn items(&self) -> &[Item] {
        &self.items
    }

    pub(crate) fn room(&self, id: RoomId) -> Result<&Room> {
        self.rooms
            .get(id.index())
            .ok_or_else(|| Error::room_not_found(id))
    }

    pub(crate) fn room_mut(&mut self, id: RoomId) -> Result<&mut Room> {
        self.rooms
            .get_mut(id.index())
            .ok_or_else(|| Error::room_not_found(id))
    }

    pub(crate) fn item(&self, id: ItemId) -> Result<&Item> {
        self.items
            .get(id.index())
            .ok_or_else(|| Error::item_not_found(id))
    }

    pub(crate) fn add_room(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<RoomId> {
        let id = RoomId::new(next_index(self.rooms.len(), "rooms")?);
        self.rooms.push(Room::new(name, description));
        Ok(id)
    }

    /// Places a new item in `room`. Nothing is stored if the room is unknown.
    pub(crate) fn add_item(&mut self, room: RoomId, name: impl Into<String>) -> Result<ItemId> {
        let id = ItemId::new(next_index(self.items.len(), "items")?);
        self.room_mut(room)?.insert_item(id);
        self.items.push(Item::new(name));
        Ok(id)
    }

    /// Sets the one-way edge `from --direction--> to`, replacing any earlier target.
    pub(crate) fn connect(
        &mut self,
        from: RoomId,
        direction: impl Into<String>,
        to: RoomId,
    ) -> Result<()> {
        self.room(to)?;
        self.room_mut(from)?.connect(direction, to);
        Ok(())
    }
}

/// The handle for the entry after `len` existing ones.
fn next_index(len: usize, what: &str) -> Result<u32> {
    u32::try_from(len).map_err(|_| Error::internal(format!("too many {what}: limit is {}", u32::MAX)))
}
