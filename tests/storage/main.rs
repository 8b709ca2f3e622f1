//! Integration tests for Layer 1: Storage
//!
//! Tests for world construction, the room graph, and item ownership.

mod graph;
mod items;
