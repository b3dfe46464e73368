use tracing::{debug, info};

use crate::error::GameError;
use crate::game::GameBoard;
use crate::input::{CommandSlot, GameInput};

/// Board settings a session restarts with.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SessionConfig {
    pub width: i32,
    pub height: i32,
    pub initial_length: i32,
    /// Fixed seed for reproducible food placement; entropy when `None`.
    pub seed: Option<u64>,
}

/// What the driver should do after an input was handled.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Control {
    Continue,
    /// A fresh game replaced the finished one; its first tick is due now.
    Restarted,
    Quit,
}

/// One play session: the current board plus the pending-command mailbox.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    game: GameBoard,
    commands: CommandSlot,
    games_started: u64,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Self, GameError> {
        let game = build_game(config, 0)?;
        info!(
            width = config.width,
            height = config.height,
            initial_length = config.initial_length,
            seed = ?config.seed,
            "session started"
        );

        Ok(Self {
            config,
            game,
            commands: CommandSlot::new(),
            games_started: 1,
        })
    }

    #[must_use]
    pub fn game(&self) -> &GameBoard {
        &self.game
    }

    #[must_use]
    pub fn commands(&self) -> CommandSlot {
        self.commands
    }

    /// Applies one input event between ticks.
    pub fn handle_input(&mut self, input: GameInput) -> Result<Control, GameError> {
        match input {
            GameInput::Quit => {
                info!(score = self.game.snake_length(), "quit requested");
                return Ok(Control::Quit);
            }
            GameInput::Restart if self.game.is_game_over() => {
                self.restart()?;
                return Ok(Control::Restarted);
            }
            GameInput::Restart => {}
            GameInput::Direction(direction) => {
                if !self.game.is_game_over() {
                    self.commands.offer(direction, &self.game);
                }
            }
        }

        Ok(Control::Continue)
    }

    /// Runs one tick: empties the mailbox into the board.
    ///
    /// Returns the board's verdict, `false` once the game is over.
    pub fn tick(&mut self) -> Result<bool, GameError> {
        if self.game.is_game_over() {
            return Ok(false);
        }

        let direction = self.commands.take();
        let length_before = self.game.snake_length();
        let running = self.game.next_turn(direction)?;

        if self.game.snake_length() > length_before {
            debug!(
                length = self.game.snake_length(),
                food = ?self.game.food(),
                "food eaten"
            );
        }
        if !running {
            info!(
                score = self.game.snake_length(),
                ticks = self.game.ticks_played(),
                "game over"
            );
        }

        Ok(running)
    }

    fn restart(&mut self) -> Result<(), GameError> {
        self.game = build_game(self.config, self.games_started)?;
        self.commands = CommandSlot::new();
        self.games_started += 1;
        info!(game = self.games_started, "game restarted");
        Ok(())
    }
}

fn build_game(config: SessionConfig, round: u64) -> Result<GameBoard, GameError> {
    let SessionConfig {
        width,
        height,
        initial_length,
        seed,
    } = config;

    match seed {
        Some(seed) => {
            GameBoard::new_with_seed(width, height, initial_length, seed.wrapping_add(round))
        }
        None => GameBoard::new(width, height, initial_length),
    }
}
