use crate::error::GameError;

/// A direction command handed to the engine once per tick.
///
/// `Unchanged` means "no command": the snake keeps its heading. The integer
/// codes returned by [`Direction::code`] are stable.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub enum Direction {
    #[default]
    Unchanged,
    Left,
    Right,
    Down,
    Up,
}

impl Direction {
    /// Returns the stable integer code of this command.
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::Unchanged => 0,
            Self::Left => 1,
            Self::Right => 2,
            Self::Down => 3,
            Self::Up => 4,
        }
    }

    /// Returns the compass heading this command asks for, if any.
    #[must_use]
    pub fn heading(self) -> Option<Heading> {
        match self {
            Self::Unchanged => None,
            Self::Left => Some(Heading::Left),
            Self::Right => Some(Heading::Right),
            Self::Down => Some(Heading::Down),
            Self::Up => Some(Heading::Up),
        }
    }
}

impl TryFrom<i32> for Direction {
    type Error = GameError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Unchanged),
            1 => Ok(Self::Left),
            2 => Ok(Self::Right),
            3 => Ok(Self::Down),
            4 => Ok(Self::Up),
            other => Err(GameError::UnknownDirection(other)),
        }
    }
}

/// The snake's current travel direction.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Heading {
    Left,
    Right,
    Up,
    Down,
}

impl Heading {
    /// Returns the unit step for this heading, with `+y` pointing up.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::Up => (0, 1),
            Self::Down => (0, -1),
        }
    }

    /// Returns true for `Left` and `Right`.
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

impl From<Heading> for Direction {
    fn from(heading: Heading) -> Self {
        match heading {
            Heading::Left => Self::Left,
            Heading::Right => Self::Right,
            Heading::Up => Self::Up,
            Heading::Down => Self::Down,
        }
    }
}
