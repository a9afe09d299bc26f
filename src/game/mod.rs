//! Core game logic
//!
//! Rules and session state with no terminal dependencies. The engine's only
//! collaborators are the injected random source and the score store it
//! persists a beaten high score to, so every rule here can be driven
//! directly from tests.

pub mod action;
pub mod config;
pub mod engine;
pub mod grid;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, Intent};
pub use config::GameConfig;
pub use engine::{Collision, GameEngine, TickOutcome};
pub use grid::{Cell, Grid};
pub use snake::Snake;
pub use state::{GamePhase, GameState};
