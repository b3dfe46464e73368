use grid_snake::board::{Occupancy, Position};
use grid_snake::direction::{Direction, Heading};
use grid_snake::error::GameError;
use grid_snake::game::GameBoard;

fn count_tiles(game: &GameBoard, wanted: &[Occupancy]) -> usize {
    (0..game.height())
        .flat_map(|y| (0..game.width()).map(move |x| (x, y)))
        .filter(|&(x, y)| wanted.contains(&game.tile_at(x, y).expect("in bounds")))
        .count()
}

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let mut game = GameBoard::new_with_seed(6, 4, 2, 42).expect("valid board");
    assert_eq!(game.snake().head(), Position::new(3, 2));

    game.force_food(Some(Position::new(2, 2)))
        .expect("food cell is on the board");
    assert_eq!(game.next_turn(Direction::Left), Ok(true));
    assert_eq!(game.snake_length(), 3);
    assert_eq!(game.snake().head(), Position::new(2, 2));

    assert_eq!(game.next_turn(Direction::Up), Ok(true));
    assert_eq!(game.snake().head(), Position::new(2, 3));
    assert_eq!(game.snake().heading(), Heading::Up);

    // Turning up again at the top row is not a turn, so the snake walks out.
    assert_eq!(game.next_turn(Direction::Up), Ok(false));
    assert!(game.is_game_over());
}

#[test]
fn body_length_matches_snake_length_once_fully_stamped() {
    let mut game = GameBoard::new_with_seed(10, 10, 3, 5).expect("valid board");
    game.force_food(None).expect("clearing food is always allowed");
    let snake_cells = [Occupancy::SnakeHead, Occupancy::SnakeBody];

    let moves = [
        Direction::Unchanged,
        Direction::Unchanged,
        Direction::Unchanged,
        Direction::Right,
        Direction::Unchanged,
        Direction::Down,
        Direction::Unchanged,
    ];
    for (tick, direction) in moves.into_iter().enumerate() {
        assert_eq!(game.next_turn(direction), Ok(true));

        let stamped = tick + 1;
        let expected = stamped.min(game.snake_length() as usize);
        assert_eq!(count_tiles(&game, &snake_cells), expected, "after tick {stamped}");
        assert_eq!(count_tiles(&game, &[Occupancy::SnakeHead]), 1);
    }
}

#[test]
fn filling_a_tiny_board_takes_the_food_off_it() {
    let mut game = GameBoard::new_with_seed(2, 2, 4, 9).expect("valid board");
    assert_eq!(game.snake().head(), Position::new(1, 1));

    game.force_food(Some(Position::new(0, 1)))
        .expect("food cell is on the board");
    assert_eq!(game.next_turn(Direction::Left), Ok(true));
    assert_eq!(game.snake_length(), 5);

    game.force_food(Some(Position::new(0, 0)))
        .expect("food cell is on the board");
    assert_eq!(game.next_turn(Direction::Down), Ok(true));
    assert_eq!(game.snake_length(), 6);

    // Only (1, 1) is still empty, so the placer has no choice.
    game.force_food(Some(Position::new(1, 0)))
        .expect("food cell is on the board");
    assert_eq!(game.next_turn(Direction::Right), Ok(true));
    assert_eq!(game.food(), Some(Position::new(1, 1)));

    assert_eq!(game.next_turn(Direction::Up), Ok(true));
    assert_eq!(game.snake_length(), 8);
    assert_eq!(game.food(), None);
    assert_eq!(game.food_coordinates(), (-1, -1));
    assert_eq!(count_tiles(&game, &[Occupancy::Food]), 0);
    assert_eq!(count_tiles(&game, &[Occupancy::Empty]), 0);

    // Every neighbour is body now.
    assert_eq!(game.next_turn(Direction::Left), Ok(false));
    assert!(game.is_game_over());
}

#[test]
fn forbidden_turn_leaves_the_board_untouched() {
    let mut game = GameBoard::new_with_seed(4, 4, 2, 1).expect("valid board");
    let food = game.food();

    assert!(!game.can_change_direction(Direction::Down));
    assert!(matches!(
        game.next_turn(Direction::Down),
        Err(GameError::ForbiddenDirection { .. })
    ));
    assert_eq!(game.snake().head(), Position::new(2, 2));
    assert_eq!(game.snake().heading(), Heading::Up);
    assert_eq!(game.food(), food);
    assert!(!game.is_game_over());
}

#[test]
fn direction_codes_cross_the_integer_boundary() {
    let mut game = GameBoard::new_with_seed(5, 5, 1, 3).expect("valid board");
    game.force_food(None).expect("clearing food is always allowed");

    let left = Direction::try_from(1).expect("1 is LEFT");
    assert_eq!(game.next_turn(left), Ok(true));
    assert_eq!(game.snake().head(), Position::new(1, 2));
    assert_eq!(Direction::try_from(9), Err(GameError::UnknownDirection(9)));
}
