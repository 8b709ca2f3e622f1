//! Core handles and error types for Hollow.
//!
//! This crate provides:
//! - [`RoomId`] and [`ItemId`] - Arena handles into the world graph
//! - [`Error`] - Error type for everything outside normal gameplay
//! - [`Result`] - Convenience alias over [`Error`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod id;

pub use error::{Error, ErrorKind, Result};
pub use id::{ItemId, RoomId};
