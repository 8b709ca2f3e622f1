//! Assembling a world before play starts.
//!
//! Rooms, items and exits are added in any order; [`WorldBuilder::build`]
//! then places the player and hands back a [`World`]. Building is the only
//! way to get a world, so the player always has a valid starting room.

use hollow_foundation::{ItemId, Result, RoomId};

use crate::arena::Arena;
use crate::player::Player;
use crate::world::World;

/// Collects rooms, items and exits for a new [`World`].
#[derive(Clone, Debug, Default)]
pub struct WorldBuilder {
    arena: Arena,
}

impl WorldBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a room and returns its handle.
    ///
    /// # Errors
    ///
    /// Returns an error if the builder already holds `u32::MAX + 1` rooms.
    pub fn add_room(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<RoomId> {
        self.arena.add_room(name, description)
    }

    /// Places a new item in a room.
    ///
    /// # Errors
    ///
    /// Returns an error if the room was not added to this builder, or if the
    /// builder already holds `u32::MAX + 1` items.
    pub fn add_item(&mut self, room: RoomId, name: impl Into<String>) -> Result<ItemId> {
        self.arena.add_item(room, name)
    }

    /// Adds a one-way exit. Only the forward edge is created.
    ///
    /// # Errors
    ///
    /// Returns an error if either room was not added to this builder.
    pub fn connect(&mut self, from: RoomId, direction: impl Into<String>, to: RoomId) -> Result<()> {
        self.arena.connect(from, direction, to)
    }

    /// Returns the number of rooms added so far.
    #[must_use]
    pub fn room_count(&self) -> usize {
        self.arena.rooms().len()
    }

    /// Finishes the world with a player standing in `start`.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` was not added to this builder.
    pub fn build(self, player_name: impl Into<String>, start: RoomId) -> Result<World> {
        self.arena.room(start)?;
        let player = Player::new(player_name, start);
        Ok(World::from_parts(self.arena, player))
    }
}
