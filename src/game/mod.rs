//! Core game logic module for Snake
//!
//! This module contains the simulation without any I/O or rendering dependencies.
//! Every engine call mutates a caller-owned [`GameState`] and returns the
//! [`GameEvent`]s that presentation collaborators should react to.

pub mod action;
pub mod config;
pub mod engine;
pub mod events;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::{GameConfig, SelfCollision};
pub use engine::{GameEngine, Steer};
pub use events::{EndCause, GameEvent};
pub use state::{CollisionType, GamePhase, GameState, Position, Snake, Snapshot};
