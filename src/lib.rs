//! Grid Snake - a timer-driven Snake simulation with a terminal front end
//!
//! This library provides:
//! - Core simulation (game module): state, engine, events
//! - Keyboard mapping (input module)
//! - TUI rendering of engine snapshots (render module)
//! - Sound cues (audio module)
//! - The interactive session and its tick scheduler (modes module)

pub mod audio;
pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
