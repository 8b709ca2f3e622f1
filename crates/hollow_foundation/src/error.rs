//! Error types for the Hollow system.
//!
//! Gameplay never fails: a bad direction or a missing item is an ordinary
//! outcome reported to the player. These errors cover the rest: invalid
//! handles, malformed scenarios, and I/O around the game loop.

use thiserror::Error;

use crate::id::{ItemId, RoomId};

/// The main error type for Hollow operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a room not found error.
    #[must_use]
    pub fn room_not_found(id: RoomId) -> Self {
        Self::new(ErrorKind::RoomNotFound(id))
    }

    /// Creates an item not found error.
    #[must_use]
    pub fn item_not_found(id: ItemId) -> Self {
        Self::new(ErrorKind::ItemNotFound(id))
    }

    /// Creates an invalid scenario error.
    #[must_use]
    pub fn invalid_scenario(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidScenario(message.into()))
    }

    /// Creates a scenario parse error.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ParseError(message.into()))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IoError(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Room handle does not belong to this world.
    #[error("room not found: {0:?}")]
    RoomNotFound(RoomId),

    /// Item handle does not belong to this world.
    #[error("item not found: {0:?}")]
    ItemNotFound(ItemId),

    /// Scenario is structurally invalid (dangling exit, missing start room, ...).
    #[error("invalid scenario: {0}")]
    InvalidScenario(String),

    /// Scenario text could not be parsed.
    #[error("parse error: {0}")]
    ParseError(String),

    /// Reading or writing failed.
    #[error("I/O error: {0}")]
    IoError(String),

    /// Internal error (line editor failures, arena limits).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
