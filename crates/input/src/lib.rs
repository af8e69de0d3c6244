//! Terminal input module (controller-facing).
//!
//! This module is intentionally independent of the game core. It maps
//! `crossterm` key events into [`crate::types::Direction`] turns and buffers
//! them so that each game tick consumes exactly one action.

pub mod handler;
pub mod map;

pub use tui_snake_types as types;

pub use handler::TurnQueue;
pub use map::{handle_key_event, is_restart, should_quit};
