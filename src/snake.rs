use crate::board::Position;
use crate::direction::{Direction, Heading};

/// Head position, heading and length of the snake.
///
/// The body itself is not stored here; the board's tick stamps describe it.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Snake {
    head: Position,
    heading: Heading,
    length: u32,
}

impl Snake {
    /// Creates a snake of `length` cells at `head`, travelling up.
    #[must_use]
    pub fn new(head: Position, length: u32) -> Self {
        Self {
            head,
            heading: Heading::Up,
            length,
        }
    }

    #[must_use]
    pub fn head(&self) -> Position {
        self.head
    }

    #[must_use]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    #[must_use]
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Returns whether `direction` may be committed on a `width` x `height` board.
    ///
    /// Turning back onto the neck is refused, and so is any turn whose very
    /// next step would leave the board.
    #[must_use]
    pub fn can_change_direction(&self, direction: Direction, width: i32, height: i32) -> bool {
        let Some(requested) = direction.heading() else {
            return true;
        };

        let Position { x, y } = self.head;
        let crosses_axis = requested.is_horizontal() != self.heading.is_horizontal();
        let stays_inside = match requested {
            Heading::Left => x != 0,
            Heading::Right => x != width - 1,
            Heading::Up => y != height - 1,
            Heading::Down => y != 0,
        };

        crosses_axis && stays_inside
    }

    /// Sets the heading without any legality check.
    pub fn turn(&mut self, heading: Heading) {
        self.heading = heading;
    }

    /// Returns where the head lands after one step along the current heading.
    #[must_use]
    pub fn next_head_position(&self) -> Position {
        self.head.stepped(self.heading)
    }

    /// Moves the head to `position`.
    pub fn move_head(&mut self, position: Position) {
        self.head = position;
    }

    /// Lengthens the snake by one cell.
    pub fn grow(&mut self) {
        self.length += 1;
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Position;
    use crate::direction::{Direction, Heading};

    use super::Snake;

    #[test]
    fn unchanged_is_always_allowed() {
        let mut snake = Snake::new(Position::new(0, 0), 3);
        for heading in [Heading::Left, Heading::Right, Heading::Up, Heading::Down] {
            snake.turn(heading);
            assert!(snake.can_change_direction(Direction::Unchanged, 1, 1));
        }
    }

    #[test]
    fn reversal_and_same_axis_turns_are_refused() {
        let snake = Snake::new(Position::new(2, 2), 3);

        assert!(!snake.can_change_direction(Direction::Down, 5, 5));
        assert!(!snake.can_change_direction(Direction::Up, 5, 5));
        assert!(snake.can_change_direction(Direction::Left, 5, 5));
        assert!(snake.can_change_direction(Direction::Right, 5, 5));
    }

    #[test]
    fn turns_into_an_adjacent_wall_are_refused() {
        let snake = Snake::new(Position::new(0, 2), 3);
        assert!(!snake.can_change_direction(Direction::Left, 5, 5));
        assert!(snake.can_change_direction(Direction::Right, 5, 5));

        let mut snake = Snake::new(Position::new(4, 4), 3);
        snake.turn(Heading::Right);
        assert!(!snake.can_change_direction(Direction::Up, 5, 5));
        assert!(snake.can_change_direction(Direction::Down, 5, 5));

        snake.move_head(Position::new(4, 0));
        assert!(!snake.can_change_direction(Direction::Down, 5, 5));
    }

    #[test]
    fn next_head_follows_heading_and_growth_adds_one() {
        let mut snake = Snake::new(Position::new(1, 1), 1);
        assert_eq!(snake.next_head_position(), Position::new(1, 2));

        snake.turn(Heading::Left);
        assert_eq!(snake.next_head_position(), Position::new(0, 1));

        snake.grow();
        assert_eq!(snake.length(), 2);
    }
}
