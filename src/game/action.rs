use serde::{Deserialize, Serialize};

/// Direction the snake can move
///
/// A snake that has not started moving has no direction at all; that state is
/// modelled as `Option<Direction>::None` rather than a fifth variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns the unit delta (dx, dy) for moving in this direction
    pub fn unit(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Returns the delta for one step of `cell_size` in this direction
    pub fn delta(&self, cell_size: i32) -> (i32, i32) {
        let (dx, dy) = self.unit();
        (dx * cell_size, dy * cell_size)
    }
}

/// Delta vector for an optional heading; `None` is the zero vector.
pub fn heading_delta(direction: Option<Direction>, cell_size: i32) -> (i32, i32) {
    direction.map_or((0, 0), |d| d.delta(cell_size))
}
