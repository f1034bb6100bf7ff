use super::{
    action::Direction,
    config::{GameConfig, SelfCollision},
    events::{EndCause, GameEvent},
    state::{CollisionType, GamePhase, GameState, Position, Snake},
};
use anyhow::Result;
use log::{debug, info};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Outcome of a directional input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    /// First valid input of the run; the host should start ticking
    Started,
    /// Heading changed for the next tick
    Turned,
    /// Reversal, repeat, or input after game over
    Ignored,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine; fails if the board geometry is unusable
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { config, rng })
    }

    /// Create an engine with deterministic food placement
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build the initial idle state: one segment at the center, no heading
    pub fn new_game(&mut self) -> GameState {
        let center = self.config.center();
        let snake = Snake::new(Position::new(center, center));
        let mut state = GameState::new(
            snake,
            Position::new(0, 0),
            self.config.board_size,
            self.config.cell_size,
        );
        // A fresh board always has free cells around the single segment
        if let Some(food) = self.spawn_food(&state) {
            state.food = food;
        }
        state
    }

    /// Put the state back to idle and announce the fresh board
    pub fn reset(&mut self, state: &mut GameState) -> Vec<GameEvent> {
        *state = self.new_game();
        info!("game reset");

        vec![
            GameEvent::ScoreChanged(state.score),
            GameEvent::Render(state.snapshot()),
        ]
    }

    /// Apply a directional input
    pub fn set_direction(&self, state: &mut GameState, direction: Direction) -> Steer {
        if state.phase == GamePhase::Over {
            return Steer::Ignored;
        }

        let snake = &mut state.snake;
        let reverses = |current: Option<Direction>| {
            current.is_some_and(|current| current.is_opposite(direction))
        };

        // Checking the last committed move too stops two quick turns from
        // reversing the snake before the next tick
        if reverses(snake.direction)
            || reverses(snake.last_moved)
            || snake.direction == Some(direction)
        {
            return Steer::Ignored;
        }

        snake.direction = Some(direction);
        debug!("direction set to {:?}", direction);

        if state.phase == GamePhase::Idle {
            state.phase = GamePhase::Running;
            info!("run started heading {:?}", direction);
            Steer::Started
        } else {
            Steer::Turned
        }
    }

    /// Execute one step of the game
    pub fn tick(&mut self, state: &mut GameState) -> Vec<GameEvent> {
        if state.phase != GamePhase::Running || state.snake.direction.is_none() {
            return Vec::new();
        }

        let new_head = state.snake.next_head(self.config.cell_size);
        let ate_food = new_head == state.food;

        if let Some(collision) = self.check_collision(state, new_head, ate_food) {
            return vec![self.end_run(state, EndCause::Collision(collision))];
        }

        state.snake.advance(new_head, ate_food);
        state.ticks += 1;

        let mut events = Vec::new();

        if ate_food {
            state.score += 1;
            events.push(GameEvent::ScoreChanged(state.score));
            events.push(GameEvent::FoodConsumed);

            match self.spawn_food(state) {
                Some(food) => state.food = food,
                None => {
                    events.push(GameEvent::Render(state.snapshot()));
                    events.push(self.end_run(state, EndCause::BoardFilled));
                    return events;
                }
            }
        }

        events.push(GameEvent::Render(state.snapshot()));
        events
    }

    /// Check if moving the head to `pos` ends the run
    fn check_collision(
        &self,
        state: &GameState,
        pos: Position,
        ate_food: bool,
    ) -> Option<CollisionType> {
        if !state.is_in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        let skip_tail = self.config.self_collision == SelfCollision::VacatingTail && !ate_food;
        if state.snake.collides_with(pos, skip_tail) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    fn end_run(&self, state: &mut GameState, cause: EndCause) -> GameEvent {
        state.phase = GamePhase::Over;
        info!("game over ({:?}) with score {}", cause, state.score);

        GameEvent::GameOver {
            final_score: state.score,
            cause,
        }
    }

    /// Pick a free cell uniformly at random, or `None` when the board is full
    fn spawn_food(&mut self, state: &GameState) -> Option<Position> {
        let food = state.free_cells().choose(&mut self.rng).copied();
        debug!("food placed at {:?}", food);
        food
    }
}
