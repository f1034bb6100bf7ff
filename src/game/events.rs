//! Notifications emitted by the engine for presentation collaborators.

use super::state::{CollisionType, Snapshot};

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndCause {
    Collision(CollisionType),
    /// No free cell was left for the next food
    BoardFilled,
}

/// Something the outside world should hear about after an engine call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Board contents to draw
    Render(Snapshot),
    /// New score value
    ScoreChanged(u32),
    /// Snake ate the food on this tick
    FoodConsumed,
    /// Run is over; ticking must stop
    GameOver { final_score: u32, cause: EndCause },
}
