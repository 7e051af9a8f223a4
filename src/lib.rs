//! Parlor - Terminal Game Lobby Library
//!
//! This module exposes the lobby and fruit-matching engine logic for testing
//! and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod constants;
pub mod fruit_match;
pub mod input;
pub mod lobby;
pub mod settings;
pub mod utils;

// UI module is not exposed as it's tightly coupled to the terminal
mod ui;
