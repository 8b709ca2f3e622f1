//! Cross-layer integration tests for Hollow
//!
//! Tests that drive the full stack: scenario, session, dispatcher, and REPL.

mod scenarios;
mod walkthrough;
