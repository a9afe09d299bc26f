use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::{debug, info};

use crate::game::action::{Direction, Intent};
use crate::game::config::GameConfig;
use crate::game::grid::{Cell, Grid};
use crate::game::snake::Snake;
use crate::game::state::{GamePhase, GameState};
use crate::score::ScoreStore;

/// What ended the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Head left the grid
    Wall,
    /// Head landed on the body
    Body,
}

/// What happened during a single tick, for the driver and for tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    pub ate_food: bool,
    pub collision: Option<Collision>,
}

/// The game engine: owns the rules, the random source, and the score store.
///
/// Generic over the random source so tests can inject a seeded generator;
/// the game itself runs on the thread RNG.
pub struct GameEngine<R: Rng = ThreadRng> {
    config: GameConfig,
    store: ScoreStore,
    rng: R,
}

impl GameEngine<ThreadRng> {
    pub fn new(config: GameConfig, store: ScoreStore) -> Self {
        Self::with_rng(config, store, rand::thread_rng())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Engine with an explicit random source, used by tests for
    /// deterministic food placement
    pub fn with_rng(config: GameConfig, store: ScoreStore, rng: R) -> Self {
        Self { config, store, rng }
    }

    /// Fresh session: loads the persisted high score once and opens on the
    /// menu, with a board already set up behind it
    pub fn new_session(&mut self) -> GameState {
        let grid = Grid::new(self.config.grid_width, self.config.grid_height);
        let snake = Snake::new(grid.center(), Direction::Right, self.config.initial_snake_length);
        let food = self.place_food(&grid, &snake);

        GameState {
            phase: GamePhase::Menu,
            grid,
            snake,
            direction: Direction::Right,
            food,
            score: 0,
            high_score: self.store.load(),
            speed: self.config.base_speed,
        }
    }

    /// Feed one input intent through the state machine. Intents a phase
    /// does not recognize are dropped, matching a player pressing an
    /// irrelevant key.
    pub fn handle_intent(&mut self, state: &mut GameState, intent: Intent) {
        match (state.phase, intent) {
            (GamePhase::Menu | GamePhase::GameOver, Intent::Start) => self.start_round(state),
            (GamePhase::Playing, Intent::SetDirection(direction)) => {
                if !state.direction.is_opposite(direction) {
                    state.direction = direction;
                }
            }
            _ => {}
        }
    }

    /// Advance the simulation one step. No-op outside of Playing.
    pub fn tick(&mut self, state: &mut GameState) -> TickOutcome {
        if state.phase != GamePhase::Playing {
            return TickOutcome::default();
        }

        let new_head = state.snake.head().step(state.direction);

        if let Some(collision) = self.check_collision(state, new_head) {
            state.phase = GamePhase::GameOver;
            info!(score = state.score, ?collision, "round over");

            if state.score > state.high_score {
                state.high_score = state.score;
                self.store.save(state.high_score);
            }

            return TickOutcome {
                ate_food: false,
                collision: Some(collision),
            };
        }

        state.snake.advance(new_head);

        if new_head == state.food {
            state.score += 1;
            state.food = self.place_food(&state.grid, &state.snake);
            state.speed = self.config.speed_for(state.score);
            debug!(score = state.score, speed = state.speed, "food eaten");

            TickOutcome {
                ate_food: true,
                collision: None,
            }
        } else {
            state.snake.drop_tail();
            TickOutcome::default()
        }
    }

    /// Reset the round fields in place, keeping the loaded high score
    fn start_round(&mut self, state: &mut GameState) {
        state.snake = Snake::new(
            state.grid.center(),
            Direction::Right,
            self.config.initial_snake_length,
        );
        state.direction = Direction::Right;
        state.food = self.place_food(&state.grid, &state.snake);
        state.score = 0;
        state.speed = self.config.base_speed;
        state.phase = GamePhase::Playing;
    }

    /// Wall check first, then body check
    fn check_collision(&self, state: &GameState, cell: Cell) -> Option<Collision> {
        if !state.grid.in_bounds(cell) {
            return Some(Collision::Wall);
        }
        if state.snake.contains(cell) {
            return Some(Collision::Body);
        }
        None
    }

    /// Rejection-sample a uniformly random cell until one misses the snake.
    /// The snake never covers more than a small fraction of the grid, so
    /// the loop terminates quickly in practice.
    fn place_food(&mut self, grid: &Grid, snake: &Snake) -> Cell {
        loop {
            let x = self.rng.gen_range(0..grid.width) as i32;
            let y = self.rng.gen_range(0..grid.height) as i32;
            let cell = Cell::new(x, y);

            if !snake.contains(cell) {
                return cell;
            }
        }
    }
}
