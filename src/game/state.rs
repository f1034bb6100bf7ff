use super::action::{heading_delta, Direction};
use serde::{Deserialize, Serialize};

/// A grid-aligned position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Heading used by the next tick; `None` before the run starts
    pub direction: Option<Direction>,
    /// Heading of the last committed move
    pub last_moved: Option<Direction>,
}

impl Snake {
    /// Create a single-segment snake that is not moving yet
    pub fn new(head: Position) -> Self {
        Self {
            body: vec![head],
            direction: None,
            last_moved: None,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Position the head would occupy after one step of `cell_size`
    pub fn next_head(&self, cell_size: i32) -> Position {
        let (dx, dy) = heading_delta(self.direction, cell_size);
        self.head().moved_by(dx, dy)
    }

    /// Check if position collides with any segment; the tail is skipped when
    /// `skip_tail` is set and the snake is longer than one segment
    pub fn collides_with(&self, pos: Position, skip_tail: bool) -> bool {
        let segments = if skip_tail && self.body.len() > 1 {
            &self.body[..self.body.len() - 1]
        } else {
            &self.body[..]
        };
        segments.contains(&pos)
    }

    /// Commit a move to `new_head`, dropping the tail unless `should_grow`
    pub fn advance(&mut self, new_head: Position, should_grow: bool) {
        self.body.insert(0, new_head);

        if !should_grow {
            self.body.pop();
        }

        self.last_moved = self.direction;
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// True when no two segments share a cell
    pub fn is_self_disjoint(&self) -> bool {
        self.body
            .iter()
            .enumerate()
            .all(|(i, a)| !self.body[i + 1..].contains(a))
    }
}

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Waiting for the first directional input
    #[default]
    Idle,
    /// Ticking at the configured cadence
    Running,
    /// Run ended; only a reset leaves this phase
    Over,
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the board
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Read-only view of the board handed to the renderer after each tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub snake: Vec<Position>,
    pub food: Position,
}

/// Complete game state, owned by whoever drives the engine
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub board_size: i32,
    pub cell_size: i32,
    pub score: u32,
    pub ticks: u32,
    pub phase: GamePhase,
}

impl GameState {
    /// Create a new idle game state
    pub fn new(snake: Snake, food: Position, board_size: i32, cell_size: i32) -> Self {
        Self {
            snake,
            food,
            board_size,
            cell_size,
            score: 0,
            ticks: 0,
            phase: GamePhase::Idle,
        }
    }

    /// Check if a position is within the board
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.board_size && pos.y >= 0 && pos.y < self.board_size
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.body.contains(&pos)
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Every grid-aligned cell the snake does not occupy, row by row
    pub fn free_cells(&self) -> Vec<Position> {
        let step = self.cell_size as usize;
        (0..self.board_size)
            .step_by(step)
            .flat_map(|y| {
                (0..self.board_size)
                    .step_by(step)
                    .map(move |x| Position::new(x, y))
            })
            .filter(|pos| !self.is_occupied_by_snake(*pos))
            .collect()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake: self.snake.body.clone(),
            food: self.food,
        }
    }
}
