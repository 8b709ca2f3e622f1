//! World state: the room and item arenas plus the player.
//!
//! The `World` is the only owner of rooms and items. Everything else holds
//! [`RoomId`]/[`ItemId`] handles, and every mutation goes through a method
//! here so the ownership invariants hold: an item sits in exactly one room or
//! in the inventory, and the player always stands in a room of this world.

use hollow_foundation::{ItemId, Result, RoomId};
use log::debug;

use crate::arena::Arena;
use crate::item::Item;
use crate::player::Player;
use crate::room::Room;

/// The complete, mutable game world.
///
/// Obtain one through [`WorldBuilder`](crate::WorldBuilder).
#[derive(Clone, Debug)]
pub struct World {
    arena: Arena,
    player: Player,
}

impl World {
    pub(crate) fn from_parts(arena: Arena, player: Player) -> Self {
        Self { arena, player }
    }

    // --- Queries ---

    /// Returns the number of rooms.
    #[must_use]
    pub fn room_count(&self) -> usize {
        self.arena.rooms().len()
    }

    /// Returns the number of items, wherever they are.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.arena.items().len()
    }

    /// Gets a room by handle.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is not part of this world.
    pub fn room(&self, id: RoomId) -> Result<&Room> {
        self.arena.room(id)
    }

    /// Gets an item by handle.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is not part of this world.
    pub fn item(&self, id: ItemId) -> Result<&Item> {
        self.arena.item(id)
    }

    /// Iterates over all rooms with their handles, in creation order.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> + '_ {
        (0..)
            .zip(self.arena.rooms())
            .map(|(idx, room)| (RoomId::new(idx), room))
    }

    /// Finds the first room with the given name.
    #[must_use]
    pub fn find_room(&self, name: &str) -> Option<RoomId> {
        self.rooms()
            .find(|(_, room)| room.name() == name)
            .map(|(id, _)| id)
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the room the player is standing in.
    #[must_use]
    pub fn current_room(&self) -> &Room {
        // The player's room is validated whenever it is set.
        &self.arena.rooms()[self.player.current_room().index()]
    }

    /// Iterates over the items lying in a room, in room order.
    ///
    /// Yields nothing for a handle that is not part of this world.
    pub fn contents(&self, room: RoomId) -> impl Iterator<Item = &Item> + '_ {
        self.arena
            .room(room)
            .map(Room::items)
            .unwrap_or_default()
            .iter()
            .filter_map(|id| self.arena.item(*id).ok())
    }

    /// Iterates over carried items in pickup order.
    pub fn inventory(&self) -> impl Iterator<Item = &Item> + '_ {
        self.player
            .inventory()
            .iter()
            .filter_map(|id| self.arena.item(*id).ok())
    }

    /// Finds the first item in `room` whose name is exactly `name`.
    #[must_use]
    pub fn find_item(&self, room: RoomId, name: &str) -> Option<ItemId> {
        self.arena
            .room(room)
            .ok()?
            .items()
            .iter()
            .copied()
            .find(|id| self.arena.item(*id).is_ok_and(|item| item.name() == name))
    }

    // --- Mutations ---

    /// Places a new item in a room.
    ///
    /// # Errors
    ///
    /// Returns an error if the room is not part of this world, or if the
    /// world already holds `u32::MAX + 1` items.
    pub fn add_item(&mut self, room: RoomId, name: impl Into<String>) -> Result<ItemId> {
        self.arena.add_item(room, name)
    }

    /// Adds a one-way exit from `from` to `to`.
    ///
    /// An existing exit with the same direction is replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if either room is not part of this world.
    pub fn connect(&mut self, from: RoomId, direction: impl Into<String>, to: RoomId) -> Result<()> {
        self.arena.connect(from, direction, to)
    }

    /// Puts the player directly into a room.
    ///
    /// # Errors
    ///
    /// Returns an error if the room is not part of this world.
    pub fn place_player(&mut self, room: RoomId) -> Result<()> {
        self.arena.room(room)?;
        self.player.set_current_room(room);
        Ok(())
    }

    /// Moves the player along an exit of the current room.
    ///
    /// Returns the new room, or `None` (leaving the player where they are)
    /// if the current room has no exit with that exact direction.
    pub fn move_player(&mut self, direction: &str) -> Option<RoomId> {
        let from = self.player.current_room();
        let to = self.current_room().exit(direction)?;
        self.player.set_current_room(to);
        debug!("player moved {direction:?}: {from:?} -> {to:?}");
        Some(to)
    }

    /// Picks up the first item in the current room named exactly `name`.
    ///
    /// The item leaves the room and is appended to the inventory. Returns
    /// `None` without changing anything if no such item is here.
    pub fn take_item(&mut self, name: &str) -> Option<ItemId> {
        let here = self.player.current_room();
        let item = self.find_item(here, name)?;
        self.arena.room_mut(here).ok()?.remove_item(item);
        self.player.add_to_inventory(item);
        debug!("player took {item:?} ({name:?}) from {here:?}");
        Some(item)
    }
}
