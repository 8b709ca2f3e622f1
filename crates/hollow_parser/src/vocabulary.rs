//! Vocabulary registry for command words.
//!
//! Maps the (already lowercased) first word of a line to the verb it names.
//! Several words may name the same verb, as `quit` and `exit` do.

use std::collections::HashMap;

/// The verbs the dispatcher knows how to execute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Describe the current room.
    Look,
    /// Follow an exit.
    Move,
    /// Pick up an item.
    Pick,
    /// List carried items.
    Inventory,
    /// Show the command summary.
    Help,
    /// End the session.
    Quit,
}

/// Runtime storage for command words.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    /// Word -> verb mapping
    words: HashMap<String, Verb>,
}

impl Vocabulary {
    /// Creates a new empty vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the standard vocabulary.
    #[must_use]
    pub fn standard() -> Self {
        let mut vocab = Self::new();
        vocab.register("look", Verb::Look);
        vocab.register("move", Verb::Move);
        vocab.register("pick", Verb::Pick);
        vocab.register("inventory", Verb::Inventory);
        vocab.register("help", Verb::Help);
        vocab.register("quit", Verb::Quit);
        vocab.register("exit", Verb::Quit);
        vocab
    }

    /// Registers a word for a verb, replacing any earlier meaning of the word.
    pub fn register(&mut self, word: impl Into<String>, verb: Verb) {
        self.words.insert(word.into(), verb);
    }

    /// Looks up a word. Matching is exact.
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<Verb> {
        self.words.get(word).copied()
    }

    /// Returns all registered words, sorted.
    #[must_use]
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.keys().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    /// Returns the number of registered words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no words are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
