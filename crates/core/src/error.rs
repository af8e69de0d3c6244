//! Error types for the game core.
//!
//! Episode termination is not an error; it is reported through `Step::done`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnakeError {
    /// Construction parameters do not describe a playable grid.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// `step()` was called on a terminated episode without a `reset()`.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
    /// Every grid cell is covered by the snake, so food cannot be placed.
    #[error("no free cell left for food on a {width}x{height} grid")]
    ResourceExhausted { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, SnakeError>;
