//! The player: a location and an inventory.

use hollow_foundation::{ItemId, RoomId};

/// The single player of a session.
#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    current_room: RoomId,
    /// Carried items in pickup order.
    inventory: Vec<ItemId>,
}

impl Player {
    pub(crate) fn new(name: impl Into<String>, start: RoomId) -> Self {
        Self {
            name: name.into(),
            current_room: start,
            inventory: Vec::new(),
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the room the player is in.
    #[must_use]
    pub const fn current_room(&self) -> RoomId {
        self.current_room
    }

    /// Returns carried items, oldest pickup first.
    #[must_use]
    pub fn inventory(&self) -> &[ItemId] {
        &self.inventory
    }

    /// Returns true if the player carries the item.
    #[must_use]
    pub fn is_carrying(&self, item: ItemId) -> bool {
        self.inventory.contains(&item)
    }

    pub(crate) fn set_current_room(&mut self, room: RoomId) {
        self.current_room = room;
    }

    pub(crate) fn add_to_inventory(&mut self, item: ItemId) {
        self.inventory.push(item);
    }
}
