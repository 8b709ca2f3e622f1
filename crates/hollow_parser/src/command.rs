//! Parsed commands.

use crate::tokenizer::CommandLine;
use crate::vocabulary::{Verb, Vocabulary};

/// A command ready for the dispatcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `look`
    Look,
    /// `move <direction>`; the direction is kept exactly as typed.
    Move {
        /// Exit name to follow.
        direction: String,
    },
    /// `pick [up] <item>`
    Pick {
        /// Item name, with the `up` particle removed.
        item: String,
        /// The argument as typed, echoed back when nothing matches.
        argument: String,
    },
    /// `inventory`
    Inventory,
    /// `help`
    Help,
    /// `quit` or `exit`
    Quit,
    /// Anything the vocabulary does not know, including empty input.
    Unknown {
        /// The unrecognized command word.
        word: String,
    },
}

impl Command {
    /// Resolves a split line against the vocabulary.
    #[must_use]
    pub fn parse(line: &CommandLine, vocabulary: &Vocabulary) -> Self {
        match vocabulary.lookup(&line.command) {
            Some(Verb::Look) => Self::Look,
            Some(Verb::Move) => Self::Move {
                direction: line.argument.clone(),
            },
            Some(Verb::Pick) => Self::Pick {
                item: item_name(&line.argument).to_string(),
                argument: line.argument.clone(),
            },
            Some(Verb::Inventory) => Self::Inventory,
            Some(Verb::Help) => Self::Help,
            Some(Verb::Quit) => Self::Quit,
            None => Self::Unknown {
                word: line.command.clone(),
            },
        }
    }
}

/// Strips one leading `up` particle from a pick argument.
///
/// `"up sword"` and `"sword"` both name `sword`; a bare `"up"` names nothing.
#[must_use]
pub fn item_name(argument: &str) -> &str {
    if argument == "up" {
        ""
    } else {
        argument.strip_prefix("up ").unwrap_or(argument)
    }
}
