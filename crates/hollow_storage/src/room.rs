//! Rooms: nodes of the world graph.
//!
//! A room knows its own items and its outgoing exits. Exits are one-way
//! edges keyed by the direction word exactly as typed; the reverse edge
//! exists only if someone connects it.

use std::collections::BTreeMap;

use hollow_foundation::{ItemId, RoomId};

/// A node in the room graph.
#[derive(Clone, Debug)]
pub struct Room {
    name: String,
    description: String,
    /// Items present, in insertion order.
    items: Vec<ItemId>,
    /// Direction -> target room. Case-sensitive keys.
    exits: BTreeMap<String, RoomId>,
}

impl Room {
    pub(crate) fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            items: Vec::new(),
            exits: BTreeMap::new(),
        }
    }

    /// Returns the room's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the room's description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the items present, in the order they were placed.
    #[must_use]
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    /// Returns true if the item is in this room.
    #[must_use]
    pub fn contains_item(&self, item: ItemId) -> bool {
        self.items.contains(&item)
    }

    /// Looks up the room an exit leads to.
    ///
    /// The direction must match exactly; `"Forward"` and `"forward"` are
    /// different exits.
    #[must_use]
    pub fn exit(&self, direction: &str) -> Option<RoomId> {
        self.exits.get(direction).copied()
    }

    /// Iterates over all exits, sorted by direction.
    pub fn exits(&self) -> impl Iterator<Item = (&str, RoomId)> + '_ {
        self.exits.iter().map(|(dir, room)| (dir.as_str(), *room))
    }

    /// Sets the forward edge for `direction`, returning the previous target.
    pub(crate) fn connect(&mut self, direction: impl Into<String>, to: RoomId) -> Option<RoomId> {
        self.exits.insert(direction.into(), to)
    }

    pub(crate) fn insert_item(&mut self, item: ItemId) {
        self.items.push(item);
    }

    /// Removes the item, keeping the order of the rest.
    pub(crate) fn remove_item(&mut self, item: ItemId) -> bool {
        if let Some(pos) = self.items.iter().position(|i| *i == item) {
            self.items.remove(pos);
            true
        } else {
            false
        }
    }
}
