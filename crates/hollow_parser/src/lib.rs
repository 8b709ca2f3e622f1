//! Command parsing and dispatch for Hollow.
//!
//! This crate turns one line of player input into a change to the world and
//! the text shown back to the player.
//!
//! # Architecture
//!
//! ```text
//! "pick up sword"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → command "pick", argument "up sword"
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ VOCABULARY      │  → Verb::Pick
//! │ LOOKUP          │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ COMMAND         │  → Command::Pick { item: "sword", .. }
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ DISPATCHER      │  → World mutated, Response { lines, state }
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Split raw input into command word and argument
//! - [`vocabulary`] - Command words and the verbs they name
//! - [`command`] - Parsed commands
//! - [`dispatcher`] - Executes commands against a [`World`](hollow_storage::World)
//! - [`response`] - Output lines and session state
//! - [`messages`] - Fixed player-facing wording

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod dispatcher;
pub mod messages;
pub mod response;
pub mod tokenizer;
pub mod vocabulary;

// Re-export main types for convenience
pub use command::Command;
pub use dispatcher::Dispatcher;
pub use response::{Response, SessionState};
pub use tokenizer::{CommandLine, InputTokenizer};
pub use vocabulary::{Verb, Vocabulary};
