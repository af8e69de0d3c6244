//! Construction parameters for a game.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SnakeError};
use crate::types::{DEFAULT_CELL_SIZE, DEFAULT_PIXEL_HEIGHT, DEFAULT_PIXEL_WIDTH};

/// Largest grid side in cells; cell coordinates are `i32`.
pub const MAX_GRID_DIM: u32 = i32::MAX as u32;

/// Configuration for a game
///
/// The grid is derived from the pixel size: `width / cell_size` columns by
/// `height / cell_size` rows. `render` only tells the hosting loop whether to
/// draw; the core never draws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    /// Playfield width in pixels
    pub width: u32,
    /// Playfield height in pixels
    pub height: u32,
    /// Edge length of one cell in pixels
    pub cell_size: u32,
    /// Whether the presentation layer is enabled
    pub render: bool,
    /// Seed for food placement
    pub seed: u32,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_PIXEL_WIDTH,
            height: DEFAULT_PIXEL_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            render: true,
            seed: 1,
        }
    }
}

impl SnakeConfig {
    /// Configuration for an exact grid size in cells (cell size 1, headless).
    pub fn with_grid(grid_width: u32, grid_height: u32) -> Self {
        Self {
            width: grid_width,
            height: grid_height,
            cell_size: 1,
            render: false,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_render(mut self, render: bool) -> Self {
        self.render = render;
        self
    }

    /// Grid dimensions in cells, `(grid_width, grid_height)`.
    pub fn grid_size(&self) -> Result<(u32, u32)> {
        if self.cell_size == 0 {
            return Err(SnakeError::InvalidConfig("cell_size must be positive".into()));
        }
        let grid_width = self.width / self.cell_size;
        let grid_height = self.height / self.cell_size;
        if grid_width == 0 || grid_height == 0 {
            return Err(SnakeError::InvalidConfig(format!(
                "{}x{} pixels hold no {}px cell",
                self.width, self.height, self.cell_size
            )));
        }
        if grid_width > MAX_GRID_DIM || grid_height > MAX_GRID_DIM {
            return Err(SnakeError::InvalidConfig(format!(
                "{}x{} grid exceeds {} cells per side",
                grid_width, grid_height, MAX_GRID_DIM
            )));
        }
        Ok((grid_width, grid_height))
    }
}
