//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the snake rules, the step function and the feature
//! encoding handed to controllers. It has **no dependencies** on terminal
//! I/O or input handling, making it:
//!
//! - **Deterministic**: Same seed produces identical episodes (for agent training)
//! - **Testable**: Unit tests for every rule beside the code
//! - **Portable**: Runs headless or behind any presentation layer
//!
//! # Module Structure
//!
//! - [`game_state`]: Snake body, direction, food, score, `reset()` and `step()`
//! - [`observation`]: The 12-value feature vector
//! - [`spaces`]: Action and observation space descriptions
//! - [`snapshot`]: Read-only view for renderers, with an ASCII dump
//! - [`rng`]: Seeded food placement randomness
//! - [`config`]: Construction parameters
//!
//! # Rules
//!
//! - The snake starts with 3 segments at the grid center, heading right
//! - Each step moves the head one cell; reversing in place is ignored
//! - Leaving the grid or running into the body ends the episode (-10)
//! - Eating food grows the snake by one and scores a point (+10)
//! - Any other step costs -0.01
//! - An episode times out after `100 x length` steps
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameState, SnakeConfig};
//!
//! let mut game = GameState::new(SnakeConfig::default().with_seed(7)).unwrap();
//! let obs = game.reset();
//! assert_eq!(obs.len(), 12);
//!
//! // 0 = Right, the current heading.
//! let step = game.step(0).unwrap();
//! assert!(!step.done);
//! assert_eq!(game.head().x, 17);
//! ```

pub mod config;
pub mod error;
pub mod game_state;
pub mod observation;
pub mod rng;
pub mod snapshot;
pub mod spaces;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use config::{SnakeConfig, MAX_GRID_DIM};
pub use error::{Result, SnakeError};
pub use game_state::{GameState, Step, StepInfo};
pub use observation::Observation;
pub use rng::{FoodRng, SimpleRng};
pub use snapshot::GameSnapshot;
pub use spaces::{action_space, observation_space, ActionSpace, ObservationSpace};
