use anyhow::Result;
use clap::Parser;
use snake_tui::app::App;
use snake_tui::game::GameConfig;
use snake_tui::score::ScoreStore;
use tracing_subscriber::EnvFilter;

/// Classic snake in the terminal. Steer with the arrow keys or WASD,
/// start with SPACE, quit with Q.
#[derive(Parser)]
#[command(name = "snake-tui")]
#[command(version, about)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    Cli::parse();

    // The TUI draws on stderr, so log lines go to stdout where they stay
    // out of the way. Silent unless RUST_LOG is set.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stdout)
        .init();

    let config = GameConfig::default();
    let store = ScoreStore::new(ScoreStore::DEFAULT_FILE);

    let mut app = App::new(config, store);
    app.run().await
}
