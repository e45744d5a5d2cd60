use serde::{Deserialize, Serialize};

/// A unit step across the grid. Rows grow downward, columns grow to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Down,
    Right,
    DownRight,
    DownLeft,
    Up,
    Left,
    UpLeft,
    UpRight,
}

/// Directions the builder lays words along. Words are never written backward
/// or straight up.
pub const PLACEMENT_DIRECTIONS: [Direction; 4] = [
    Direction::Down,
    Direction::Right,
    Direction::DownRight,
    Direction::UpRight,
];

/// Directions the solver checks, in the order it tries them.
pub const SEARCH_DIRECTIONS: [Direction; 8] = [
    Direction::Down,
    Direction::Right,
    Direction::DownRight,
    Direction::DownLeft,
    Direction::Up,
    Direction::Left,
    Direction::UpLeft,
    Direction::UpRight,
];

impl Direction {
    /// `(row_step, col_step)` for this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Down => (1, 0),
            Direction::Right => (0, 1),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
            Direction::Up => (-1, 0),
            Direction::Left => (0, -1),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Down => "down",
            Direction::Right => "right",
            Direction::DownRight => "down-right",
            Direction::DownLeft => "down-left",
            Direction::Up => "up",
            Direction::Left => "left",
            Direction::UpLeft => "up-left",
            Direction::UpRight => "up-right",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
