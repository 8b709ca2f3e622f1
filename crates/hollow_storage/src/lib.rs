//! Room graph, items, and player state for Hollow.
//!
//! This crate provides:
//! - [`Item`] - A named, ownable object
//! - [`Room`] - A node in the directed room graph
//! - [`Player`] - Current location and ordered inventory
//! - [`World`] - Arena owning every room and item, plus the player
//! - [`WorldBuilder`] - Assembles rooms, items and exits into a [`World`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod arena;
pub mod builder;
pub mod item;
pub mod player;
pub mod room;
pub mod world;

pub use builder::WorldBuilder;
pub use item::Item;
pub use player::Player;
pub use room::Room;
pub use world::World;
