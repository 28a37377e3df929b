//! Unit tests for the board module.
//!
//! Tests are organised by component: the reorder engine, the store, the
//! drag controller, narration, and participant helpers.

mod store_tests;
