//! Session state for the REPL.
//!
//! A session pairs the world with the dispatcher that drives it. It lives
//! from the first command until `quit`/`exit` is handled.

use std::collections::BTreeSet;

use hollow_foundation::Result;
use hollow_parser::{Dispatcher, Response, SessionState};
use hollow_storage::World;

use crate::scenario::Scenario;

/// One single-player game session.
pub struct Session {
    /// The world being played.
    world: World,

    /// Parses and executes commands against `world`.
    dispatcher: Dispatcher,
}

impl Session {
    /// Creates a session over an existing world.
    #[must_use]
    pub fn new(world: World) -> Self {
        Self::with_dispatcher(world, Dispatcher::new())
    }

    /// Creates a session with a custom dispatcher.
    #[must_use]
    pub fn with_dispatcher(world: World, dispatcher: Dispatcher) -> Self {
        Self { world, dispatcher }
    }

    /// Creates a session over the world a scenario describes.
    ///
    /// # Errors
    ///
    /// Returns an error if the scenario is invalid.
    pub fn from_scenario(scenario: &Scenario) -> Result<Self> {
        Ok(Self::new(scenario.build_world()?))
    }

    /// Executes one line of input.
    pub fn execute(&mut self, input: &str) -> Response {
        self.dispatcher.dispatch(&mut self.world, input)
    }

    /// Returns the session state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.dispatcher.state()
    }

    /// Returns true until `quit`/`exit` has been handled.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.state().is_running()
    }

    /// Returns a reference to the world.
    #[must_use]
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// Returns a mutable reference to the world.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Returns the dispatcher.
    #[must_use]
    pub const fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Words worth offering for tab completion right now.
    ///
    /// Command words, the `up` particle, the current room's exits, and the
    /// names of items lying here. Sorted, without duplicates.
    #[must_use]
    pub fn completions(&self) -> Vec<String> {
        let mut words: BTreeSet<String> = self
            .dispatcher
            .vocabulary()
            .words()
            .into_iter()
            .map(String::from)
            .collect();
        words.insert("up".to_string());

        let here = self.world.player().current_room();
        words.extend(
            self.world
                .current_room()
                .exits()
                .map(|(direction, _)| direction.to_string()),
        );
        words.extend(self.world.contents(here).map(|item| item.name().to_string()));

        words.into_iter().collect()
    }
}
