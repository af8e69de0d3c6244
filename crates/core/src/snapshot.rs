//! Read-only view of a game for renderers and loggers.

use std::fmt;

use serde::Serialize;

use crate::types::{Direction, Position, Status};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub grid_width: u32,
    pub grid_height: u32,
    pub cell_size: u32,
    pub head: Position,
    /// Segments after the head, in order.
    pub body: Vec<Position>,
    pub food: Position,
    pub direction: Direction,
    pub score: u32,
    pub frame: u32,
    pub status: Status,
    pub episode_id: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid_width = 0;
        self.grid_height = 0;
        self.cell_size = 0;
        self.head = Position::default();
        self.body.clear();
        self.food = Position::default();
        self.direction = Direction::Right;
        self.score = 0;
        self.frame = 0;
        self.status = Status::Running;
        self.episode_id = 0;
    }

    pub fn game_over(&self) -> bool {
        self.status == Status::Terminated
    }

    pub fn len(&self) -> usize {
        self.body.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Character for an on-grid cell: `H` head, `X` body, `F` food, `.` empty.
    pub fn cell_char(&self, x: i32, y: i32) -> char {
        let p = Position::new(x, y);
        if self.head == p {
            'H'
        } else if self.body.contains(&p) {
            'X'
        } else if self.food == p {
            'F'
        } else {
            '.'
        }
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid_width: 0,
            grid_height: 0,
            cell_size: 0,
            head: Position::default(),
            body: Vec::new(),
            food: Position::default(),
            direction: Direction::Right,
            score: 0,
            frame: 0,
            status: Status::Running,
            episode_id: 0,
        }
    }
}

/// ASCII dump of the board, bordered, followed by a status line.
impl fmt::Display for GameSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(self.grid_width as usize);
        writeln!(f, "+{}+", rule)?;
        for y in 0..self.grid_height as i32 {
            write!(f, "|")?;
            for x in 0..self.grid_width as i32 {
                write!(f, "{}", self.cell_char(x, y))?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "+{}+", rule)?;
        write!(
            f,
            "Score: {}, Length: {}, Direction: {}",
            self.score,
            self.len(),
            self.direction.as_str()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GameSnapshot {
        GameSnapshot {
            grid_width: 5,
            grid_height: 3,
            cell_size: 1,
            head: Position::new(2, 1),
            body: vec![Position::new(1, 1), Position::new(0, 1)],
            food: Position::new(4, 0),
            direction: Direction::Right,
            score: 2,
            frame: 7,
            status: Status::Running,
            episode_id: 0,
        }
    }

    #[test]
    fn test_ascii_dump() {
        let expected = "\
+-----+
|....F|
|XXH..|
|.....|
+-----+
Score: 2, Length: 3, Direction: RIGHT";
        assert_eq!(sample().to_string(), expected);
    }

    #[test]
    fn test_clear_resets_fields() {
        let mut snap = sample();
        snap.clear();
        assert_eq!(snap, GameSnapshot::default());
    }

    #[test]
    fn test_game_over_flag() {
        let mut snap = sample();
        assert!(!snap.game_over());
        snap.status = Status::Terminated;
        assert!(snap.game_over());
    }
}
