//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! `SnakeBody` moves over a shared `GridMap`, reports into a `ScoreTracker` and
//! teleports through a `GateSystem`; `GameEngine` wires them together per tick.

pub mod action;
pub mod cell;
pub mod config;
pub mod engine;
pub mod error;
pub mod gate;
pub mod grid;
pub mod score;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Heading};
pub use cell::Cell;
pub use config::GameConfig;
pub use engine::{GameEngine, StepInfo, StepResult};
pub use error::GameError;
pub use gate::{GatePair, GateSystem};
pub use grid::GridMap;
pub use score::{MissionProgress, Missions, ScoreBoard, ScoreTracker};
pub use snake::{DeathCause, MoveOutcome, SnakeBody};
pub use state::Position;
