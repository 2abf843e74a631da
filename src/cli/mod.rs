//! CLI for the oxo engine
//!
//! This module provides the user-facing layer: the interactive game loop
//! with move input and terminal rendering, and position analysis with
//! JSON export. The engine itself never reads input or prints.

pub mod analyze;
pub mod play;
