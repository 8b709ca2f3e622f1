//! Command dispatch.
//!
//! The [`Dispatcher`] executes one line at a time against a [`World`] and
//! reports what the player sees. Nothing here fails: a bad direction, a
//! missing item or an unknown word is just another line of output.
//!
//! The dispatcher is a two-state machine. It starts `Running` and moves to
//! `Stopped` on `quit`/`exit`; once stopped it ignores further input.

use hollow_storage::World;
use log::{trace, warn};

use crate::command::Command;
use crate::messages;
use crate::response::{Response, SessionState};
use crate::tokenizer::InputTokenizer;
use crate::vocabulary::Vocabulary;

/// Parses and executes player commands.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    vocabulary: Vocabulary,
    state: SessionState,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// Creates a running dispatcher with the standard vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::with_vocabulary(Vocabulary::standard())
    }

    /// Creates a running dispatcher with a custom vocabulary.
    #[must_use]
    pub fn with_vocabulary(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            state: SessionState::Running,
        }
    }

    /// Returns the vocabulary in use.
    #[must_use]
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Returns the current session state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Executes one line of input.
    ///
    /// The returned [`Response`] carries the output lines and the state
    /// after the command; the read loop should stop once it is `Stopped`.
    pub fn dispatch(&mut self, world: &mut World, input: &str) -> Response {
        if self.state == SessionState::Stopped {
            warn!("ignoring input after session stopped: {input:?}");
            return Response::new(SessionState::Stopped);
        }

        let command = Command::parse(&InputTokenizer::split(input), &self.vocabulary);
        trace!("{input:?} parsed as {command:?}");

        let mut out = Response::new(self.state);
        match command {
            Command::Look => look(world, &mut out),
            Command::Move { direction } => {
                if world.move_player(&direction).is_some() {
                    out.say(messages::moved(&direction));
                    look(world, &mut out);
                } else {
                    out.say(messages::CANT_GO);
                }
            }
            Command::Pick { item, argument } => match world.take_item(&item) {
                Some(_) => out.say(messages::picked_up(&item)),
                None => out.say(messages::no_such_item(&argument)),
            },
            Command::Inventory => inventory(world, &mut out),
            Command::Help => {
                for line in messages::HELP {
                    out.say(line);
                }
            }
            Command::Quit => {
                self.state = SessionState::Stopped;
                out.set_state(SessionState::Stopped);
                out.say(messages::GOODBYE);
            }
            Command::Unknown { .. } => out.say(messages::UNKNOWN_COMMAND),
        }
        out
    }
}

fn look(world: &World, out: &mut Response) {
    let here = world.player().current_room();
    let room = world.current_room();
    out.say(messages::room_title(room.name()));
    out.say(room.description());
    out.say(messages::items_here(world.contents(here).map(|item| item.name())));
}

fn inventory(world: &World, out: &mut Response) {
    if world.player().inventory().is_empty() {
        out.say(messages::INVENTORY_EMPTY);
        return;
    }
    out.say(messages::CARRYING);
    for item in world.inventory() {
        out.say(messages::carried(item.name()));
    }
}
