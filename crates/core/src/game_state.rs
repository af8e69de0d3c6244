//! Game state module - the snake simulation and its step function
//!
//! One [`GameState`] is one exclusively owned simulation. `reset()` starts a
//! fresh episode; `step()` advances it by exactly one tick and reports the
//! observation, reward and termination flag for that tick.

use std::collections::VecDeque;

use serde::Serialize;
use tracing::{debug, trace};

use crate::config::SnakeConfig;
use crate::error::{Result, SnakeError};
use crate::observation::Observation;
use crate::rng::{FoodRng, SimpleRng};
use crate::snapshot::GameSnapshot;
use crate::spaces::{self, ActionSpace, ObservationSpace};
use crate::types::*;

/// Rejection-sampling attempts before food placement falls back to a scan of free cells.
const MAX_FOOD_ATTEMPTS: u32 = 1024;

/// Extra per-step data for the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepInfo {
    pub score: u32,
}

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Step {
    pub observation: Observation,
    pub reward: f32,
    pub done: bool,
    pub info: StepInfo,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    config: SnakeConfig,
    grid_width: u32,
    grid_height: u32,
    /// Head first.
    snake: VecDeque<Position>,
    direction: Direction,
    food: Position,
    score: u32,
    /// Steps taken in the current episode.
    frame: u32,
    status: Status,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    rng: R,
}

impl GameState<SimpleRng> {
    /// Create a game seeded from `config.seed` and reset it.
    pub fn new(config: SnakeConfig) -> Result<Self> {
        let rng = SimpleRng::new(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: FoodRng> GameState<R> {
    /// Create a game drawing food positions from `rng` and reset it.
    ///
    /// Fails when the grid is empty or the starting snake leaves no cell for food.
    pub fn with_rng(config: SnakeConfig, rng: R) -> Result<Self> {
        let (grid_width, grid_height) = config.grid_size()?;

        let on_grid = initial_body(grid_width, grid_height)
            .iter()
            .filter(|p| p.in_bounds(grid_width, grid_height))
            .count() as u64;
        if (grid_width as u64) * (grid_height as u64) <= on_grid {
            return Err(SnakeError::InvalidConfig(format!(
                "{}x{} grid leaves no room for food",
                grid_width, grid_height
            )));
        }

        let mut state = Self {
            config,
            grid_width,
            grid_height,
            snake: VecDeque::with_capacity(INITIAL_SNAKE_LEN + 1),
            direction: Direction::Right,
            food: Position::default(),
            score: 0,
            frame: 0,
            status: Status::Running,
            episode_id: 0,
            rng,
        };
        state.start_episode();
        Ok(state)
    }

    /// Start a new episode and return its first observation.
    pub fn reset(&mut self) -> Observation {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.start_episode();
        self.observation()
    }

    fn start_episode(&mut self) {
        self.direction = Direction::Right;
        self.snake.clear();
        self.snake.extend(initial_body(self.grid_width, self.grid_height));
        self.score = 0;
        self.frame = 0;
        self.status = Status::Running;

        // Construction guarantees a free cell for the starting snake.
        if let Err(e) = self.place_food() {
            debug!(error = %e, "food placement failed on reset");
        }

        debug!(
            episode = self.episode_id,
            head = ?self.head(),
            food = ?self.food,
            "episode reset"
        );
    }

    /// Advance the game by one tick.
    ///
    /// `action` is a direction ordinal (0=Right, 1=Left, 2=Up, 3=Down). Values
    /// outside that range, and requests to reverse, keep the current direction.
    ///
    /// Returns [`SnakeError::InvalidState`] when the episode already ended, and
    /// [`SnakeError::ResourceExhausted`] when the snake fills the grid after eating.
    pub fn step(&mut self, action: i64) -> Result<Step> {
        if self.status == Status::Terminated {
            return Err(SnakeError::InvalidState(
                "step() called on a terminated episode; call reset() first",
            ));
        }

        self.frame = self.frame.saturating_add(1);
        self.turn(action);

        let head = self.head().step(self.direction);
        self.snake.push_front(head);

        let timed_out = self.frame > self.timeout_limit();
        if timed_out || self.is_collision(head) {
            self.status = Status::Terminated;
            debug!(
                episode = self.episode_id,
                score = self.score,
                frame = self.frame,
                timed_out,
                "episode ended"
            );
            return Ok(self.outcome(REWARD_DEATH, true));
        }

        let reward = if head == self.food {
            self.score += 1;
            debug!(score = self.score, len = self.snake.len(), "food eaten");
            if let Err(e) = self.place_food() {
                self.status = Status::Terminated;
                return Err(e);
            }
            REWARD_FOOD
        } else {
            self.snake.pop_back();
            REWARD_STEP
        };

        trace!(frame = self.frame, ?head, reward, "step");
        Ok(self.outcome(reward, false))
    }

    fn outcome(&self, reward: f32, done: bool) -> Step {
        Step {
            observation: self.observation(),
            reward,
            done,
            info: StepInfo { score: self.score },
        }
    }

    fn turn(&mut self, action: i64) {
        match Direction::from_action(action) {
            Some(dir) if !self.direction.is_opposite(dir) => self.direction = dir,
            _ => {}
        }
    }

    /// Frame count beyond which the episode times out, scaled by snake length.
    pub fn timeout_limit(&self) -> u32 {
        TIMEOUT_FACTOR.saturating_mul(self.snake.len() as u32)
    }

    /// True if `p` is off-grid or on a body segment other than the head.
    pub fn is_collision(&self, p: Position) -> bool {
        !p.in_bounds(self.grid_width, self.grid_height)
            || self.snake.iter().skip(1).any(|&s| s == p)
    }

    /// Uniformly pick a grid cell not covered by the snake.
    fn place_food(&mut self) -> Result<()> {
        let (w, h) = (self.grid_width, self.grid_height);
        let cells = (w as u64) * (h as u64);
        let occupied = self.snake.iter().filter(|p| p.in_bounds(w, h)).count() as u64;
        if occupied >= cells {
            return Err(SnakeError::ResourceExhausted {
                width: w,
                height: h,
            });
        }

        for _ in 0..MAX_FOOD_ATTEMPTS {
            let p = Position::new(self.rng.next_range(w) as i32, self.rng.next_range(h) as i32);
            if !self.snake.contains(&p) {
                self.food = p;
                return Ok(());
            }
        }

        // Crowded grid: pick the k-th free cell directly so placement always terminates.
        let free = u32::try_from(cells - occupied).unwrap_or(u32::MAX);
        let mut k = self.rng.next_range(free);
        for y in 0..h as i32 {
            for x in 0..w as i32 {
                let p = Position::new(x, y);
                if self.snake.contains(&p) {
                    continue;
                }
                if k == 0 {
                    self.food = p;
                    return Ok(());
                }
                k -= 1;
            }
        }

        Err(SnakeError::ResourceExhausted {
            width: w,
            height: h,
        })
    }

    pub fn observation(&self) -> Observation {
        Observation::encode(self.head(), self.direction, self.food, |p| {
            self.is_collision(p)
        })
    }

    pub fn action_space(&self) -> ActionSpace {
        spaces::action_space()
    }

    pub fn observation_space(&self) -> ObservationSpace {
        spaces::observation_space()
    }

    pub fn config(&self) -> &SnakeConfig {
        &self.config
    }

    pub fn grid_width(&self) -> u32 {
        self.grid_width
    }

    pub fn grid_height(&self) -> u32 {
        self.grid_height
    }

    pub fn head(&self) -> Position {
        self.snake[0]
    }

    pub fn snake(&self) -> &VecDeque<Position> {
        &self.snake
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_done(&self) -> bool {
        self.status == Status::Terminated
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid_width = self.grid_width;
        out.grid_height = self.grid_height;
        out.cell_size = self.config.cell_size;
        out.head = self.head();
        out.body.clear();
        out.body.extend(self.snake.iter().skip(1).copied());
        out.food = self.food;
        out.direction = self.direction;
        out.score = self.score;
        out.frame = self.frame;
        out.status = self.status;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// ASCII rendering of the board plus a status line.
    pub fn debug_board(&self) -> String {
        self.snapshot().to_string()
    }

    /// Replace the snake body (head first) and direction.
    ///
    /// `segments` must be non-empty, free of duplicates, and each segment must
    /// be orthogonally adjacent to the one before it.
    #[doc(hidden)]
    pub fn debug_set_snake(&mut self, segments: &[Position], direction: Direction) {
        debug_assert!(!segments.is_empty(), "snake needs a head");
        debug_assert!(
            segments
                .windows(2)
                .all(|w| (w[0].x - w[1].x).abs() + (w[0].y - w[1].y).abs() == 1),
            "snake segments must be adjacent: {:?}",
            segments
        );
        debug_assert!(
            segments
                .iter()
                .enumerate()
                .all(|(i, p)| !segments[i + 1..].contains(p)),
            "snake segments must be distinct: {:?}",
            segments
        );
        self.snake.clear();
        self.snake.extend(segments.iter().copied());
        self.direction = direction;
    }

    #[doc(hidden)]
    pub fn debug_set_food(&mut self, food: Position) {
        self.food = food;
    }
}

/// Head at the grid center with two segments trailing to the left.
fn initial_body(grid_width: u32, grid_height: u32) -> [Position; INITIAL_SNAKE_LEN] {
    let head = Position::new((grid_width / 2) as i32, (grid_height / 2) as i32);
    [
        head,
        Position::new(head.x - 1, head.y),
        Position::new(head.x - 2, head.y),
    ]
}
