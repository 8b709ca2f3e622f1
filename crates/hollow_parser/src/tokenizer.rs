//! Input tokenization.
//!
//! Splits a raw line into a command word and its argument. There is no
//! quoting and no punctuation stripping: the first space is the only
//! separator, and everything after it is kept verbatim.

/// A line split into command word and argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLine {
    /// The command word, lowercased. Empty for empty input or a leading space.
    pub command: String,
    /// Everything after the first space, untouched. Empty if there is no space.
    pub argument: String,
}

/// Tokenizes player input.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Splits input on its first space.
    ///
    /// - The command word is case-folded to lowercase
    /// - The argument keeps its case and any further spaces
    #[must_use]
    pub fn split(input: &str) -> CommandLine {
        let (command, argument) = input.split_once(' ').unwrap_or((input, ""));
        CommandLine {
            command: command.to_lowercase(),
            argument: argument.to_string(),
        }
    }
}
