use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::{
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_SNAKE_LENGTH, MAX_GRID_HEIGHT,
    MAX_GRID_WIDTH, PALETTE, TICK_INTERVAL_MS,
};
use grid_snake::error::AppError;
use grid_snake::input;
use grid_snake::logging;
use grid_snake::session::{Control, Session, SessionConfig};
use grid_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use tracing::info;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Board width in cells.
    #[arg(
        long,
        default_value_t = DEFAULT_GRID_WIDTH,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(i32).range(1..=i64::from(MAX_GRID_WIDTH)),
    )]
    width: i32,

    /// Board height in cells.
    #[arg(
        long,
        default_value_t = DEFAULT_GRID_HEIGHT,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(i32).range(1..=i64::from(MAX_GRID_HEIGHT)),
    )]
    height: i32,

    /// Snake length at the start of each game.
    #[arg(
        long,
        default_value_t = DEFAULT_SNAKE_LENGTH,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(i32).range(1..),
    )]
    length: i32,

    /// Seed for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Log file path (defaults to the platform data directory).
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    if let Err(error) = logging::init(&log_path) {
        eprintln!("Logging disabled ({}): {error}", log_path.display());
    }

    // Invalid dimensions are reported before the terminal switches modes.
    let session = Session::new(SessionConfig {
        width: cli.width,
        height: cli.height,
        initial_length: cli.length,
        seed: cli.seed,
    })?;

    install_panic_hook();
    run(session)
}

fn run(mut session: Session) -> Result<(), AppError> {
    let mut terminal = TerminalSession::enter(PALETTE)?;
    let tick_interval = Duration::from_millis(TICK_INTERVAL_MS);

    // Every game's first tick is played right away; the timer supplies the rest.
    session.tick()?;
    let mut next_tick = Instant::now() + tick_interval;

    loop {
        terminal.screen_mut().draw(session.game())?;

        let timeout = next_tick.saturating_duration_since(Instant::now());
        if let Some(game_input) = input::poll_input(timeout)? {
            match session.handle_input(game_input)? {
                Control::Quit => break,
                Control::Restarted => {
                    session.tick()?;
                    next_tick = Instant::now() + tick_interval;
                }
                Control::Continue => {}
            }
            continue;
        }

        if Instant::now() >= next_tick {
            session.tick()?;
            next_tick = Instant::now() + tick_interval;
        }
    }

    info!("session ended");
    Ok(())
}
