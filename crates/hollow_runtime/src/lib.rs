//! REPL, CLI, and scenario loading for Hollow.
//!
//! This crate provides:
//! - [`Repl`] - The interactive read-dispatch-print loop
//! - [`Session`] - A world paired with its dispatcher
//! - [`Scenario`] - World bootstrapping, built in or from TOML files
//! - [`LineEditor`] - Line editing abstraction with a rustyline implementation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod repl;
pub mod scenario;
pub mod session;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::Repl;
pub use scenario::Scenario;
pub use session::Session;
