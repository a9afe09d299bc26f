use crate::game::action::Direction;
use crate::game::grid::{Cell, Grid};
use crate::game::snake::Snake;

/// Which screen the game is on. Exactly one phase is active at a time and
/// transitions happen only through the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Menu,
    Playing,
    GameOver,
}

/// Complete session state.
///
/// Round fields (snake, direction, food, score, speed, phase) are reset on
/// every start; the high score survives restarts and the grid never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub phase: GamePhase,
    pub grid: Grid,
    pub snake: Snake,
    pub direction: Direction,
    pub food: Cell,
    pub score: u32,
    pub high_score: u32,
    /// Tick rate in ticks per second, derived from the score
    pub speed: u32,
}
