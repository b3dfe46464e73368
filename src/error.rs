use std::io;

use thiserror::Error;

use crate::direction::{Direction, Heading};

/// Failures reported by the board engine.
///
/// Game over is not an error: `next_turn` reports it as `Ok(false)`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum GameError {
    /// A non-positive size, or a board too large to allocate.
    #[error("invalid {name}: {value}")]
    InvalidDimension { name: &'static str, value: i64 },

    #[error("tile ({x}, {y}) is outside the {width}x{height} board")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    #[error("unknown direction code {0}")]
    UnknownDirection(i32),

    #[error("cannot turn {requested:?} while heading {heading:?}")]
    ForbiddenDirection {
        requested: Direction,
        heading: Heading,
    },

    /// A branch that the board rules make unreachable was taken.
    #[error("internal board invariant violated: {0}")]
    InternalInvariant(&'static str),
}

/// Top-level error for the terminal binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Game(#[from] GameError),
}

#[cfg(test)]
mod tests {
    use crate::direction::{Direction, Heading};

    use super::GameError;

    #[test]
    fn messages_name_the_offending_values() {
        let error = GameError::OutOfBounds {
            x: 7,
            y: -1,
            width: 5,
            height: 4,
        };
        assert_eq!(error.to_string(), "tile (7, -1) is outside the 5x4 board");

        let error = GameError::ForbiddenDirection {
            requested: Direction::Down,
            heading: Heading::Up,
        };
        assert_eq!(error.to_string(), "cannot turn Down while heading Up");
    }
}
