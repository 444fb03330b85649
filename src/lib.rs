//! Gate Snake - a terminal snake game with items and teleport gates
//!
//! This library provides:
//! - Core game logic: the snake body, grid map, score board and gates (game module)
//! - TUI rendering (render module)
//! - Keyboard input mapping (input module)
//! - Session metrics (metrics module)
//! - The interactive play loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
