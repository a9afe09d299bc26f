use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, interval, interval_at};

use crate::game::{GameConfig, GameEngine, GamePhase, GameState, Intent};
use crate::input::InputHandler;
use crate::metrics::SessionMetrics;
use crate::render::Renderer;
use crate::score::ScoreStore;

/// Frames are drawn at a fixed 30 FPS; game ticks run at the state's own
/// speed
const RENDER_INTERVAL: Duration = Duration::from_millis(33);

/// The driver loop: one logical mutator that polls input, ticks the engine,
/// and hands a snapshot to the renderer
pub struct App {
    engine: GameEngine,
    state: GameState,
    metrics: SessionMetrics,
    renderer: Renderer,
    input: InputHandler,
    should_quit: bool,
}

impl App {
    pub fn new(config: GameConfig, store: ScoreStore) -> Self {
        let mut engine = GameEngine::new(config, store);
        let state = engine.new_session();

        Self {
            engine,
            state,
            metrics: SessionMetrics::new(),
            renderer: Renderer::new(),
            input: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal on stderr, leaving stdout for log output
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
        terminal.hide_cursor().context("failed to hide cursor")?;
        terminal.clear().context("failed to clear terminal")?;

        let result = self.run_loop(&mut terminal).await;

        self.restore_terminal(&mut terminal)?;
        result
    }

    async fn run_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut events = EventStream::new();

        let mut tick_period = tick_period_for(self.state.speed);
        let mut tick_timer = interval(tick_period);
        let mut render_timer = interval(RENDER_INTERVAL);

        loop {
            tokio::select! {
                maybe_event = events.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                _ = tick_timer.tick() => {
                    self.tick();

                    // Eating food raises the speed; retime the game clock
                    let period = tick_period_for(self.state.speed);
                    if period != tick_period {
                        tick_period = period;
                        tick_timer = interval_at(Instant::now() + tick_period, tick_period);
                    }
                }

                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics);
                    }).context("failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input.intent_for(key) {
                Some(Intent::Quit) => self.should_quit = true,
                Some(intent) => self.apply_intent(intent),
                None => {}
            }
        }
    }

    fn apply_intent(&mut self, intent: Intent) {
        let was_playing = self.state.phase == GamePhase::Playing;
        self.engine.handle_intent(&mut self.state, intent);

        if !was_playing && self.state.phase == GamePhase::Playing {
            self.metrics.on_round_start();
        }
    }

    fn tick(&mut self) {
        let outcome = self.engine.tick(&mut self.state);
        if outcome.collision.is_some() {
            self.metrics.on_round_over();
        }
    }

    fn restore_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("failed to leave alternate screen")?;
        terminal.show_cursor().context("failed to show cursor")?;
        Ok(())
    }
}

/// One tick period at a given speed in ticks per second
fn tick_period_for(speed: u32) -> Duration {
    Duration::from_millis(1000 / speed.max(1) as u64)
}
