use rand::Rng;

use crate::board::Position;

/// Coordinates reported for food while none is on the board.
pub const NO_FOOD: (i32, i32) = (-1, -1);

/// Picks the starting food cell uniformly from the whole board.
///
/// The head is not excluded; food under the head stays uneaten until the
/// snake leaves and comes back.
#[must_use]
pub fn initial_position<R: Rng + ?Sized>(rng: &mut R, width: i32, height: i32) -> Position {
    Position {
        x: rng.gen_range(0..width),
        y: rng.gen_range(0..height),
    }
}

/// Chooses one of `empty_cells` uniformly, or `None` when the board is full.
///
/// Draws `r` in `[0, 1)` and takes index `floor(r * k)`.
#[must_use]
pub fn choose_cell<R: Rng + ?Sized>(rng: &mut R, empty_cells: &[Position]) -> Option<Position> {
    let count = empty_cells.len();
    if count == 0 {
        return None;
    }

    let r: f64 = rng.gen_range(0.0..1.0);
    let index = ((r * count as f64).floor() as usize).min(count - 1);
    Some(empty_cells[index])
}

/// Flattens an optional food cell into coordinates, using [`NO_FOOD`] for none.
#[must_use]
pub fn coordinates(food: Option<Position>) -> (i32, i32) {
    food.map_or(NO_FOOD, |position| (position.x, position.y))
}
