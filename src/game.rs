use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{Board, Occupancy, Position};
use crate::direction::Direction;
use crate::error::GameError;
use crate::food;
use crate::snake::Snake;

/// High-level state of one game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Over,
}

/// Authoritative Snake state: board, snake, food and game-over latch.
///
/// Only [`GameBoard::next_turn`] mutates the game; every other method is a
/// query a renderer or input adapter may call between ticks.
#[derive(Debug, Clone)]
pub struct GameBoard {
    board: Board,
    snake: Snake,
    food: Option<Position>,
    status: GameStatus,
    initial_length: u32,
    rng: StdRng,
}

impl GameBoard {
    /// Creates a board seeded from the operating system's entropy source.
    pub fn new(width: i32, height: i32, initial_length: i32) -> Result<Self, GameError> {
        Self::with_rng(width, height, initial_length, StdRng::from_entropy())
    }

    /// Creates a deterministic board for tests and reproducible sessions.
    pub fn new_with_seed(
        width: i32,
        height: i32,
        initial_length: i32,
        seed: u64,
    ) -> Result<Self, GameError> {
        Self::with_rng(width, height, initial_length, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        width: i32,
        height: i32,
        initial_length: i32,
        mut rng: StdRng,
    ) -> Result<Self, GameError> {
        let length = u32::try_from(initial_length)
            .ok()
            .filter(|&length| length > 0)
            .ok_or(GameError::InvalidDimension {
                name: "snake length",
                value: i64::from(initial_length),
            })?;

        let board = Board::new(width, height, u64::from(length))?;
        let snake = Snake::new(Position::new(width / 2, height / 2), length);
        let food = food::initial_position(&mut rng, width, height);

        Ok(Self {
            board,
            snake,
            food: Some(food),
            status: GameStatus::Running,
            initial_length: length,
            rng,
        })
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.board.width()
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.board.height()
    }

    #[must_use]
    pub fn snake_length(&self) -> u32 {
        self.snake.length()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Returns the food cell, or `None` once no empty cell was left for it.
    #[must_use]
    pub fn food(&self) -> Option<Position> {
        self.food
    }

    /// Returns the food coordinates with `(-1, -1)` standing for "no food".
    #[must_use]
    pub fn food_coordinates(&self) -> (i32, i32) {
        food::coordinates(self.food)
    }

    /// Returns the number of ticks played since the board was created.
    #[must_use]
    pub fn ticks_played(&self) -> u64 {
        self.board.tick() - u64::from(self.initial_length)
    }

    /// Reports what occupies cell `(x, y)`.
    pub fn tile_at(&self, x: i32, y: i32) -> Result<Occupancy, GameError> {
        self.board.occupancy(
            Position::new(x, y),
            self.snake.head(),
            self.food,
            self.snake.length(),
        )
    }

    /// Returns whether `direction` would be accepted by the next call to
    /// [`GameBoard::next_turn`] as a change of heading.
    #[must_use]
    pub fn can_change_direction(&self, direction: Direction) -> bool {
        self.snake
            .can_change_direction(direction, self.width(), self.height())
    }

    /// Advances the game by one tick.
    ///
    /// Returns `Ok(true)` while the game continues and `Ok(false)` once the
    /// snake has left the board or hit its own body, and on every call after
    /// that. A refused turn fails with [`GameError::ForbiddenDirection`] and
    /// leaves the game untouched.
    pub fn next_turn(&mut self, direction: Direction) -> Result<bool, GameError> {
        if self.is_game_over() {
            return Ok(false);
        }

        if let Some(requested) = direction.heading() {
            if requested != self.snake.heading() {
                if !self.can_change_direction(direction) {
                    return Err(GameError::ForbiddenDirection {
                        requested: direction,
                        heading: self.snake.heading(),
                    });
                }
                self.snake.turn(requested);
            }
        }

        let next = self.snake.next_head_position();
        if !self.board.contains(next) {
            self.status = GameStatus::Over;
            return Ok(false);
        }

        match self.tile_at(next.x, next.y)? {
            Occupancy::Empty => {}
            Occupancy::SnakeBody => {
                self.status = GameStatus::Over;
                return Ok(false);
            }
            Occupancy::Food => {
                self.place_food();
                self.snake.grow();
            }
            Occupancy::SnakeHead => {
                return Err(GameError::InternalInvariant(
                    "snake head moved onto its own head",
                ));
            }
        }

        self.board.advance();
        self.board.touch(next)?;
        self.snake.move_head(next);
        Ok(true)
    }

    /// Puts food on a uniformly chosen empty cell, or removes it when the
    /// board has none left.
    fn place_food(&mut self) {
        let empty = self.board.empty_cells(
            self.snake.head(),
            self.food,
            self.snake.length(),
        );
        self.food = food::choose_cell(&mut self.rng, &empty);
    }

    /// Replaces the food with `food`, bypassing the random placer.
    ///
    /// Scripted scenarios use this to put food where the snake is about to go.
    pub fn force_food(&mut self, food: Option<Position>) -> Result<(), GameError> {
        if let Some(position) = food {
            if !self.board.contains(position) {
                return Err(GameError::OutOfBounds {
                    x: position.x,
                    y: position.y,
                    width: self.width(),
                    height: self.height(),
                });
            }
        }

        self.food = food;
        Ok(())
    }
}
