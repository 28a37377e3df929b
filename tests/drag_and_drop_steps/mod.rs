//! Step definitions for drag-and-drop scenarios.

mod given;
mod then;
mod when;
pub mod world;
