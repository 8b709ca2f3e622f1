//! Scenario bootstrapping.
//!
//! A scenario names the rooms of a world, what lies in them, how they
//! connect, and where the player starts. Scenarios are written in TOML:
//!
//! ```toml
//! [player]
//! name = "Hero"
//! start = "Room 1"
//!
//! [[rooms]]
//! name = "Room 1"
//! description = "A small stone chamber."
//! items = ["sword"]
//! exits = { forward = "Room 2" }
//!
//! [[rooms]]
//! name = "Room 2"
//! description = "A dark cave with a damp smell."
//! ```
//!
//! Rooms are referred to by name, so names must be unique within a scenario.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use hollow_foundation::{Error, Result, RoomId};
use hollow_storage::{World, WorldBuilder};
use log::info;
use serde::Deserialize;

/// A complete world description.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// The player and their starting room.
    pub player: PlayerDef,
    /// Every room, in creation order.
    #[serde(default)]
    pub rooms: Vec<RoomDef>,
}

/// The player section of a scenario.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlayerDef {
    /// Player name.
    #[serde(default = "default_player_name")]
    pub name: String,
    /// Name of the starting room.
    pub start: String,
}

/// One room of a scenario.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoomDef {
    /// Unique room name.
    pub name: String,
    /// Text shown by `look`.
    #[serde(default)]
    pub description: String,
    /// Names of the items lying here, in display order.
    #[serde(default)]
    pub items: Vec<String>,
    /// Direction -> name of the room it leads to.
    #[serde(default)]
    pub exits: BTreeMap<String, String>,
}

fn default_player_name() -> String {
    "Hero".to_string()
}

impl Scenario {
    /// The starter world.
    ///
    /// `Room 1` holds a sword and leads `forward` to `Room 2`; there is no
    /// way back.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            player: PlayerDef {
                name: default_player_name(),
                start: "Room 1".to_string(),
            },
            rooms: vec![
                RoomDef {
                    name: "Room 1".to_string(),
                    description: "A small stone chamber.".to_string(),
                    items: vec!["sword".to_string()],
                    exits: BTreeMap::from([("forward".to_string(), "Room 2".to_string())]),
                },
                RoomDef {
                    name: "Room 2".to_string(),
                    description: "A dark cave with a damp smell.".to_string(),
                    items: Vec::new(),
                    exits: BTreeMap::new(),
                },
            ],
        }
    }

    /// Parses a scenario from TOML text.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the text is not a valid scenario document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::parse(e.to_string()))
    }

    /// Loads a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            Error::io(format!("failed to read scenario '{}': {e}", path.display()))
        })?;
        let scenario = Self::from_toml_str(&text)?;
        info!(
            "loaded scenario from {} ({} rooms)",
            path.display(),
            scenario.rooms.len()
        );
        Ok(scenario)
    }

    /// Builds the world this scenario describes.
    ///
    /// # Errors
    ///
    /// Returns an invalid-scenario error if there are no rooms, if two rooms
    /// share a name, or if an exit or the start names an undefined room.
    pub fn build_world(&self) -> Result<World> {
        if self.rooms.is_empty() {
            return Err(Error::invalid_scenario("no rooms defined"));
        }

        let mut builder = WorldBuilder::new();
        let mut by_name: HashMap<&str, RoomId> = HashMap::new();
        let mut ids = Vec::with_capacity(self.rooms.len());

        for room in &self.rooms {
            let id = builder.add_room(room.name.as_str(), room.description.as_str())?;
            if by_name.insert(room.name.as_str(), id).is_some() {
                return Err(Error::invalid_scenario(format!(
                    "duplicate room name '{}'",
                    room.name
                )));
            }
            for item in &room.items {
                builder.add_item(id, item.as_str())?;
            }
            ids.push(id);
        }

        for (room, from) in self.rooms.iter().zip(ids) {
            for (direction, target) in &room.exits {
                let to = by_name.get(target.as_str()).copied().ok_or_else(|| {
                    Error::invalid_scenario(format!(
                        "exit '{direction}' from '{}' leads to unknown room '{target}'",
                        room.name
                    ))
                })?;
                builder.connect(from, direction.as_str(), to)?;
            }
        }

        let start = by_name
            .get(self.player.start.as_str())
            .copied()
            .ok_or_else(|| {
                Error::invalid_scenario(format!(
                    "start room '{}' is not defined",
                    self.player.start
                ))
            })?;

        builder.build(self.player.name.as_str(), start)
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::builtin()
    }
}
