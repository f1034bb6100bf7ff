//! What the screen shows, folded from engine events.
//!
//! The renderer only ever reads a [`ViewModel`]; it never sees the live
//! [`GameState`](crate::game::GameState).

use crate::game::{EndCause, GameEvent, GamePhase, Snapshot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub snapshot: Snapshot,
    pub score: u32,
    pub phase: GamePhase,
    /// End-of-game notification, shown until the next reset
    pub banner: Option<String>,
}

impl ViewModel {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            score: 0,
            phase: GamePhase::Idle,
            banner: None,
        }
    }

    pub fn apply(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Render(snapshot) => self.snapshot = snapshot.clone(),
            GameEvent::ScoreChanged(score) => self.score = *score,
            GameEvent::FoodConsumed => {}
            GameEvent::GameOver { final_score, cause } => {
                self.phase = GamePhase::Over;
                self.banner = Some(game_over_message(*final_score, *cause));
            }
        }
    }

    pub fn set_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
        if phase != GamePhase::Over {
            self.banner = None;
        }
    }

    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }
}

pub fn game_over_message(final_score: u32, cause: EndCause) -> String {
    match cause {
        EndCause::BoardFilled => format!("You filled the board! Your score: {}", final_score),
        EndCause::Collision(_) => format!("Game Over! Your score: {}", final_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{CollisionType, Position};

    fn snapshot(head: (i32, i32)) -> Snapshot {
        Snapshot {
            snake: vec![Position::new(head.0, head.1)],
            food: Position::new(0, 0),
        }
    }

    #[test]
    fn test_score_text_format() {
        let mut view = ViewModel::new(snapshot((200, 200)));
        assert_eq!(view.score_text(), "Score: 0");

        view.apply(&GameEvent::ScoreChanged(12));
        assert_eq!(view.score_text(), "Score: 12");
    }

    #[test]
    fn test_render_replaces_snapshot() {
        let mut view = ViewModel::new(snapshot((200, 200)));
        view.apply(&GameEvent::Render(snapshot((220, 200))));
        assert_eq!(view.snapshot, snapshot((220, 200)));
    }

    #[test]
    fn test_game_over_banner_until_reset() {
        let mut view = ViewModel::new(snapshot((200, 200)));
        view.set_phase(GamePhase::Running);

        view.apply(&GameEvent::GameOver {
            final_score: 3,
            cause: EndCause::Collision(CollisionType::Wall),
        });
        assert_eq!(view.phase, GamePhase::Over);
        assert_eq!(view.banner.as_deref(), Some("Game Over! Your score: 3"));

        view.set_phase(GamePhase::Idle);
        assert_eq!(view.banner, None);
    }

    #[test]
    fn test_board_filled_message() {
        assert_eq!(
            game_over_message(399, EndCause::BoardFilled),
            "You filled the board! Your score: 399"
        );
    }
}
