//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behaviour beyond small pure helpers, making
//! them usable in any context (core logic, terminal rendering, agent loops).
//!
//! # Grid
//!
//! The playfield is a `width x height` grid of cells derived from a pixel size
//! and a cell size:
//!
//! - **Default pixel size**: 640 x 480
//! - **Default cell size**: 20 pixels
//! - **Default grid**: 32 x 24 cells
//!
//! Coordinates are `(x, y)` with `x` growing to the right and `y` growing down.
//!
//! # Rewards
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `REWARD_FOOD` | 10.0 | Head lands on food |
//! | `REWARD_DEATH` | -10.0 | Collision or timeout |
//! | `REWARD_STEP` | -0.01 | Any other step |
//!
//! # Actions
//!
//! Actions are the ordinal values of [`Direction`]:
//!
//! | Action | Direction |
//! |--------|-----------|
//! | 0 | Right |
//! | 1 | Left |
//! | 2 | Up |
//! | 3 | Down |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, Position, DEFAULT_GRID_WIDTH, DEFAULT_GRID_HEIGHT};
//!
//! let dir = Direction::from_action(2).unwrap();
//! assert_eq!(dir, Direction::Up);
//! assert_eq!(dir.opposite(), Direction::Down);
//!
//! let p = Position::new(4, 4).step(Direction::Right);
//! assert_eq!(p, Position::new(5, 4));
//!
//! assert_eq!(DEFAULT_GRID_WIDTH, 32);
//! assert_eq!(DEFAULT_GRID_HEIGHT, 24);
//! ```

use serde::{Deserialize, Serialize};

/// Default window width in pixels
pub const DEFAULT_PIXEL_WIDTH: u32 = 640;

/// Default window height in pixels
pub const DEFAULT_PIXEL_HEIGHT: u32 = 480;

/// Default cell size in pixels
pub const DEFAULT_CELL_SIZE: u32 = 20;

/// Grid width for the default configuration (32 columns)
pub const DEFAULT_GRID_WIDTH: u32 = DEFAULT_PIXEL_WIDTH / DEFAULT_CELL_SIZE;

/// Grid height for the default configuration (24 rows)
pub const DEFAULT_GRID_HEIGHT: u32 = DEFAULT_PIXEL_HEIGHT / DEFAULT_CELL_SIZE;

/// Snake length right after a reset
pub const INITIAL_SNAKE_LEN: usize = 3;

/// An episode times out once the frame counter exceeds this factor times the snake length.
pub const TIMEOUT_FACTOR: u32 = 100;

/// Reward for eating food
pub const REWARD_FOOD: f32 = 10.0;

/// Reward for hitting a wall, the body, or timing out
pub const REWARD_DEATH: f32 = -10.0;

/// Reward for a step that neither eats nor dies
pub const REWARD_STEP: f32 = -0.01;

/// Number of discrete actions
pub const ACTION_COUNT: usize = 4;

/// Length of the observation feature vector
pub const OBSERVATION_LEN: usize = 12;

/// First index of the danger block (Right, Down, Left, Up)
pub const OBS_DANGER: usize = 0;

/// First index of the direction one-hot block (Right, Left, Up, Down)
pub const OBS_DIRECTION: usize = 4;

/// First index of the food-relative block (right, below, left, above)
pub const OBS_FOOD: usize = 8;

/// Default frame pacing for the terminal loop in milliseconds
pub const DEFAULT_TICK_MS: u32 = 100;


/// Movement direction of the snake
///
/// The discriminants are the action ordinals used by the controller-facing
/// API and by the direction block of the observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Right = 0,
    Left = 1,
    Up = 2,
    Down = 3,
}

impl Direction {
    /// All directions in ordinal order.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    /// Map an action value to a direction.
    ///
    /// Returns `None` for values outside `0..=3`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::from_action(0), Some(Direction::Right));
    /// assert_eq!(Direction::from_action(3), Some(Direction::Down));
    /// assert_eq!(Direction::from_action(7), None);
    /// ```
    pub fn from_action(action: i64) -> Option<Self> {
        match action {
            0 => Some(Direction::Right),
            1 => Some(Direction::Left),
            2 => Some(Direction::Up),
            3 => Some(Direction::Down),
            _ => None,
        }
    }

    /// Ordinal value (also the action index).
    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Returns true if turning from `self` to `other` would be a 180-degree turn.
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Cell delta `(dx, dy)`; y grows downward.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    /// Uppercase label used by the action space.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Right => "RIGHT",
            Direction::Left => "LEFT",
            Direction::Up => "UP",
            Direction::Down => "DOWN",
        }
    }
}

/// A cell coordinate
///
/// Off-grid values are legal; they show up transiently when probing a move
/// that would leave the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Check if the position lies in `[0, width) x [0, height)`.
    pub fn in_bounds(self, width: u32, height: u32) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as u32) < width && (self.y as u32) < height
    }
}

/// Lifecycle of an episode
///
/// - **Running**: after `reset()`, accepts `step()`
/// - **Terminated**: after a collision, timeout, or exhausted grid; absorbing until `reset()`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Running,
    Terminated,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Running => "running",
            Status::Terminated => "terminated",
        }
    }
}
