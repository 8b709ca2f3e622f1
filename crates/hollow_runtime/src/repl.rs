//! The main REPL implementation.
//!
//! Reads one line at a time, hands it to the session, and writes back the
//! response. The loop ends when the session reports `Stopped` or input runs
//! out.

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;
use hollow_foundation::{Error, Result};
use hollow_parser::Response;
use log::debug;
use std::io::{self, Write};

/// The interactive game loop.
pub struct Repl<E: LineEditor = RustylineEditor, W: Write = io::Stdout> {
    /// The line editor for input.
    editor: E,

    /// The game being played.
    session: Session,

    /// Where responses are written.
    output: W,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Input prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor, writing to stdout.
    pub fn with_editor(editor: E, session: Session) -> Self {
        Self {
            editor,
            session,
            output: io::stdout(),
            show_banner: true,
            prompt: "> ".to_string(),
        }
    }
}

impl<E: LineEditor, W: Write> Repl<E, W> {
    /// Redirects responses to another writer.
    #[must_use]
    pub fn with_output<O: Write>(self, output: O) -> Repl<E, O> {
        Repl {
            editor: self.editor,
            session: self.session,
            output,
            show_banner: self.show_banner,
            prompt: self.prompt,
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Consumes the REPL, returning its output writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the loop until the session stops or input ends.
    ///
    /// Ctrl+C abandons the current line and prompts again.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner()?;
        }

        while self.session.is_running() {
            self.editor.set_keywords(self.session.completions());

            match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => {
                    if !line.trim().is_empty() {
                        self.editor.add_history(&line);
                    }
                    let response = self.session.execute(&line);
                    self.emit(&response)?;
                }
                ReadResult::Interrupted => {}
                ReadResult::Eof => {
                    debug!("input ended before quit");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Writes each response line.
    fn emit(&mut self, response: &Response) -> Result<()> {
        for line in response.lines() {
            writeln!(self.output, "{line}").map_err(write_error)?;
        }
        self.output.flush().map_err(write_error)
    }

    /// Prints the welcome banner.
    fn print_banner(&mut self) -> Result<()> {
        let name = self.session.world().player().name().to_string();
        writeln!(
            self.output,
            "Welcome to Hollow v{}, {name}.",
            env!("CARGO_PKG_VERSION")
        )
        .map_err(write_error)?;
        writeln!(self.output, "Type 'help' for a list of commands.").map_err(write_error)?;
        self.output.flush().map_err(write_error)
    }
}

#[allow(clippy::needless_pass_by_value)]
fn write_error(e: io::Error) -> Error {
    Error::io(format!("failed to write output: {e}"))
}
