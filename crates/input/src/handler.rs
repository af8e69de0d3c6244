//! Turn buffering for terminal play.
//!
//! Key presses arrive asynchronously while the game advances on a fixed tick.
//! Two quick presses inside one tick (e.g. Up then Left to U-turn) would
//! otherwise collapse into the last one, so presses are queued and replayed
//! one per tick.

use arrayvec::ArrayVec;

use crate::types::Direction;

/// Maximum number of turns buffered ahead of the game.
pub const TURN_QUEUE_CAP: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct TurnQueue {
    pending: ArrayVec<Direction, TURN_QUEUE_CAP>,
}

impl TurnQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a turn. `current` is the heading the game has right now.
    ///
    /// Turns that repeat or reverse the heading they would follow are dropped,
    /// as are presses beyond the queue capacity. Returns true if queued.
    pub fn push(&mut self, dir: Direction, current: Direction) -> bool {
        let last = self.pending.last().copied().unwrap_or(current);
        if dir == last || dir.is_opposite(last) {
            return false;
        }
        self.pending.try_push(dir).is_ok()
    }

    /// Action for the next tick: the oldest queued turn, or the current heading.
    pub fn next_action(&mut self, current: Direction) -> i64 {
        self.pending.pop_at(0).unwrap_or(current).ordinal() as i64
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
