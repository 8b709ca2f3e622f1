//! Dispatcher output.

/// Whether the session accepts more commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Commands are being processed.
    #[default]
    Running,
    /// `quit` or `exit` was handled. Terminal.
    Stopped,
}

impl SessionState {
    /// Returns true while the session accepts commands.
    #[must_use]
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }
}

/// The lines produced by one command, and the state after it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    lines: Vec<String>,
    state: SessionState,
}

impl Response {
    pub(crate) fn new(state: SessionState) -> Self {
        Self {
            lines: Vec::new(),
            state,
        }
    }

    pub(crate) fn say(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub(crate) fn set_state(&mut self, state: SessionState) {
        self.state = state;
    }

    /// Returns the output lines, in order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consumes the response, returning its lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Returns the session state after the command.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Returns true if the read loop should keep going.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.state.is_running()
    }
}
