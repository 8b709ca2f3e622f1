//! Hollow - a minimal text-adventure engine
//!
//! This crate re-exports all layers of the Hollow system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: hollow_runtime    - REPL, CLI, scenario loading
//! Layer 2: hollow_parser     - Tokenizer, vocabulary, command dispatch
//! Layer 1: hollow_storage    - Rooms, items, the player, the world arena
//! Layer 0: hollow_foundation - Core types (RoomId, ItemId, Error)
//! ```

pub use hollow_foundation as foundation;
pub use hollow_parser as parser;
pub use hollow_runtime as runtime;
pub use hollow_storage as storage;
