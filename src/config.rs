use ratatui::style::Color;

/// Default board width in cells.
pub const DEFAULT_GRID_WIDTH: i32 = 15;

/// Default board height in cells.
pub const DEFAULT_GRID_HEIGHT: i32 = 15;

/// Default snake length at the start of a game.
pub const DEFAULT_SNAKE_LENGTH: i32 = 4;

/// Milliseconds between game ticks.
pub const TICK_INTERVAL_MS: u64 = 280;

/// Text painted into one board cell, two columns so cells come out roughly square.
pub const CELL_FILL: &str = "  ";

/// Terminal columns drawn per board cell.
pub const CELL_WIDTH: u16 = CELL_FILL.len() as u16;

/// Widest board the renderer can lay out: two columns per cell plus the border.
pub const MAX_GRID_WIDTH: i32 = (u16::MAX as i32 - 2) / CELL_WIDTH as i32;

/// Tallest board the renderer can lay out: one row per cell plus border and status line.
pub const MAX_GRID_HEIGHT: i32 = u16::MAX as i32 - 3;

/// Colors for every tile kind and overlay.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Palette {
    /// Empty tiles where `(x + y)` is even.
    pub empty_even: Color,
    /// Empty tiles where `(x + y)` is odd.
    pub empty_odd: Color,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub game_over: Color,
    pub status: Color,
}

/// Light checkerboard with a green snake and violet food.
pub const PALETTE: Palette = Palette {
    empty_even: Color::Rgb(225, 225, 225),
    empty_odd: Color::Rgb(217, 217, 218),
    snake_head: Color::Rgb(0, 144, 60),
    snake_body: Color::Rgb(0, 180, 0),
    food: Color::Rgb(220, 0, 255),
    game_over: Color::Rgb(80, 0, 0),
    status: Color::DarkGray,
};
