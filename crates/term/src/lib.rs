//! Terminal presentation layer.
//!
//! Draws a [`GameSnapshot`](crate::core::GameSnapshot) into a character
//! framebuffer and flushes it to the terminal. Nothing here mutates the game;
//! the hosting loop hands in a fresh snapshot every tick.
//!
//! - `fb`: styled character grid
//! - `game_view`: snapshot -> framebuffer (pure, unit-tested)
//! - `renderer`: framebuffer -> terminal via crossterm, redrawing only changed runs

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_into, TerminalRenderer};
