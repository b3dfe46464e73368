use crate::direction::Heading;
use crate::error::GameError;

/// Grid position in logical cell coordinates, `+y` pointing up.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring position one step along `heading`.
    #[must_use]
    pub fn stepped(self, heading: Heading) -> Self {
        let (dx, dy) = heading.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// What a renderer sees in one cell. The integer codes are stable.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Occupancy {
    Empty,
    SnakeHead,
    SnakeBody,
    Food,
}

impl Occupancy {
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::Empty => 0,
            Self::SnakeHead => 1,
            Self::SnakeBody => 2,
            Self::Food => 3,
        }
    }
}

/// Tick-stamp grid.
///
/// Every cell remembers the tick at which the snake's head last entered it.
/// A cell belongs to the body while `tick < touched + length`, so growing the
/// snake only means raising `length`: every existing body cell lives one tick
/// longer and the tail stays put.
#[derive(Debug, Clone)]
pub struct Board {
    width: i32,
    height: i32,
    touched: Vec<u64>,
    tick: u64,
}

impl Board {
    /// Creates an untouched board whose tick counter starts at `initial_tick`.
    ///
    /// Starting the counter at the initial snake length keeps every
    /// zero-stamped cell out of the body.
    pub fn new(width: i32, height: i32, initial_tick: u64) -> Result<Self, GameError> {
        if width <= 0 {
            return Err(GameError::InvalidDimension {
                name: "width",
                value: i64::from(width),
            });
        }
        if height <= 0 {
            return Err(GameError::InvalidDimension {
                name: "height",
                value: i64::from(height),
            });
        }

        let too_large = GameError::InvalidDimension {
            name: "board area",
            value: i64::from(width) * i64::from(height),
        };
        // Both sides are positive here, so the conversions cannot fail.
        let cells = usize::try_from(width)
            .ok()
            .zip(usize::try_from(height).ok())
            .and_then(|(w, h)| w.checked_mul(h))
            .ok_or(too_large)?;

        let mut touched = Vec::new();
        touched
            .try_reserve_exact(cells)
            .map_err(|_| too_large)?;
        touched.resize(cells, 0);

        Ok(Self {
            width,
            height,
            touched,
            tick: initial_tick,
        })
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Returns the global tick counter.
    #[must_use]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Returns true when the position lies inside `[0, width) x [0, height)`.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0 && position.y >= 0 && position.x < self.width && position.y < self.height
    }

    fn index(&self, position: Position) -> Result<usize, GameError> {
        if !self.contains(position) {
            return Err(GameError::OutOfBounds {
                x: position.x,
                y: position.y,
                width: self.width,
                height: self.height,
            });
        }

        // Both coordinates are non-negative and in range here.
        Ok(position.y as usize * self.width as usize + position.x as usize)
    }

    /// Returns the tick at which the head last entered `position`.
    pub fn touched_at(&self, position: Position) -> Result<u64, GameError> {
        let index = self.index(position)?;
        Ok(self.touched[index])
    }

    /// Stamps `position` with the current tick.
    pub fn touch(&mut self, position: Position) -> Result<(), GameError> {
        let index = self.index(position)?;
        self.touched[index] = self.tick;
        Ok(())
    }

    /// Moves the global tick counter forward by one.
    pub fn advance(&mut self) {
        self.tick += 1;
    }

    /// Returns true when `position` is still covered by a body of `length` cells.
    pub fn is_body(&self, position: Position, length: u32) -> Result<bool, GameError> {
        let touched = self.touched_at(position)?;
        Ok(self.tick < touched + u64::from(length))
    }

    /// Derives the occupancy of `position`.
    ///
    /// Head wins over food, food wins over body.
    pub fn occupancy(
        &self,
        position: Position,
        head: Position,
        food: Option<Position>,
        length: u32,
    ) -> Result<Occupancy, GameError> {
        // Bounds are checked first so a stray head/food match cannot mask them.
        let is_body = self.is_body(position, length)?;

        if position == head {
            return Ok(Occupancy::SnakeHead);
        }
        if food == Some(position) {
            return Ok(Occupancy::Food);
        }
        if is_body {
            Ok(Occupancy::SnakeBody)
        } else {
            Ok(Occupancy::Empty)
        }
    }

    /// Collects every empty cell, scanning rows bottom to top and each row
    /// left to right.
    #[must_use]
    pub fn empty_cells(&self, head: Position, food: Option<Position>, length: u32) -> Vec<Position> {
        self.positions()
            .filter(|&position| {
                matches!(
                    self.occupancy(position, head, food, length),
                    Ok(Occupancy::Empty)
                )
            })
            .collect()
    }

    /// Iterates over every cell position in scan order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Position { x, y }))
    }
}
