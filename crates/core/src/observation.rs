//! Observation encoding - the fixed 12-value feature vector handed to controllers.
//!
//! Layout:
//!
//! | Index | Meaning |
//! |-------|---------|
//! | 0-3 | Danger one cell away, absolute {Right, Down, Left, Up} |
//! | 4-7 | Current direction one-hot, ordinal {Right, Left, Up, Down} |
//! | 8-11 | Food is {right of, below, left of, above} the head |
//!
//! The danger block and the direction block use different orders. Agents
//! trained against this layout depend on it, so it must not be "fixed".

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::types::{Direction, Position, OBSERVATION_LEN, OBS_DANGER, OBS_DIRECTION, OBS_FOOD};

/// Absolute directions probed by the danger block, in observation order.
pub const DANGER_ORDER: [Direction; 4] = [
    Direction::Right,
    Direction::Down,
    Direction::Left,
    Direction::Up,
];

/// Feature vector with every value in `{0, 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Observation([u8; OBSERVATION_LEN]);

impl Observation {
    /// Encode the features for a head position.
    ///
    /// `is_collision` decides whether a probed cell is deadly.
    pub fn encode(
        head: Position,
        direction: Direction,
        food: Position,
        is_collision: impl Fn(Position) -> bool,
    ) -> Self {
        let mut v = [0u8; OBSERVATION_LEN];

        for (i, dir) in DANGER_ORDER.iter().enumerate() {
            v[OBS_DANGER + i] = is_collision(head.step(*dir)) as u8;
        }

        v[OBS_DIRECTION + direction.ordinal()] = 1;

        v[OBS_FOOD] = (food.x > head.x) as u8;
        v[OBS_FOOD + 1] = (food.y > head.y) as u8;
        v[OBS_FOOD + 2] = (food.x < head.x) as u8;
        v[OBS_FOOD + 3] = (food.y < head.y) as u8;

        Self(v)
    }

    pub fn as_array(&self) -> &[u8; OBSERVATION_LEN] {
        &self.0
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        OBSERVATION_LEN
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn danger(&self) -> &[u8] {
        &self.0[OBS_DANGER..OBS_DIRECTION]
    }

    pub fn direction(&self) -> &[u8] {
        &self.0[OBS_DIRECTION..OBS_FOOD]
    }

    pub fn food(&self) -> &[u8] {
        &self.0[OBS_FOOD..]
    }

    /// Float copy for feeding a network.
    pub fn to_f32(&self) -> [f32; OBSERVATION_LEN] {
        self.0.map(f32::from)
    }
}

impl Index<usize> for Observation {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.0[index]
    }
}

impl From<Observation> for [u8; OBSERVATION_LEN] {
    fn from(value: Observation) -> Self {
        value.0
    }
}
