use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::board::Occupancy;
use crate::config::{CELL_FILL, CELL_WIDTH, Palette};
use crate::game::GameBoard;
use crate::ui::menu::{render_game_over_menu, render_too_small};

const BORDER: u16 = 2;
const STATUS_ROWS: u16 = 1;

/// Renders the full game frame from the board's public queries.
pub fn render(frame: &mut Frame<'_>, game: &GameBoard, palette: &Palette) {
    let area = frame.area();

    let needed = required_size(game).unwrap_or((u16::MAX, u16::MAX));
    if area.width < needed.0 || area.height < needed.1 {
        render_too_small(frame, area, needed);
        return;
    }
    let board_rows = needed.1 - BORDER - STATUS_ROWS;

    let board_area = Rect::new(
        area.x + (area.width - needed.0) / 2,
        area.y,
        needed.0,
        board_rows + BORDER,
    );
    let status_area = Rect::new(board_area.x, board_area.bottom(), needed.0, STATUS_ROWS);

    let block = Block::bordered().title(" snake ");
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_tiles(frame, inner, game, palette);
    render_status(frame, status_area, game, palette);

    if game.is_game_over() {
        render_game_over_menu(frame, area, game.snake_length(), palette);
    }
}

fn render_tiles(frame: &mut Frame<'_>, inner: Rect, game: &GameBoard, palette: &Palette) {
    let buffer = frame.buffer_mut();
    for y in 0..game.height() {
        for x in 0..game.width() {
            let Ok(tile) = game.tile_at(x, y) else {
                continue;
            };
            let Some((column, row)) = cell_origin(inner, game.height(), x, y) else {
                continue;
            };

            let style = Style::new().bg(tile_color(tile, x, y, palette));
            buffer.set_string(column, row, CELL_FILL, style);
        }
    }
}

fn render_status(frame: &mut Frame<'_>, area: Rect, game: &GameBoard, palette: &Palette) {
    let text = format!("Length {}  q quit", game.snake_length());
    frame.render_widget(
        Paragraph::new(Line::from(text)).style(Style::default().fg(palette.status)),
        area,
    );
}

/// Returns the color a tile is painted with; empty tiles form a checkerboard.
#[must_use]
pub fn tile_color(tile: Occupancy, x: i32, y: i32, palette: &Palette) -> Color {
    match tile {
        Occupancy::Empty if (x + y) % 2 == 0 => palette.empty_even,
        Occupancy::Empty => palette.empty_odd,
        Occupancy::SnakeHead => palette.snake_head,
        Occupancy::SnakeBody => palette.snake_body,
        Occupancy::Food => palette.food,
    }
}

/// Maps board cell `(x, y)` to the terminal cell of its left column.
///
/// Board row 0 is the bottom row on screen.
#[must_use]
pub fn cell_origin(inner: Rect, board_height: i32, x: i32, y: i32) -> Option<(u16, u16)> {
    if x < 0 || y < 0 || y >= board_height {
        return None;
    }

    let column_offset = u16::try_from(x).ok()?.checked_mul(CELL_WIDTH)?;
    let row_offset = u16::try_from(board_height - 1 - y).ok()?;

    let column = inner.x.checked_add(column_offset)?;
    let row = inner.y.checked_add(row_offset)?;
    if column >= inner.right() || row >= inner.bottom() {
        return None;
    }

    Some((column, row))
}

/// Returns the terminal size needed for the bordered board plus status line.
fn required_size(game: &GameBoard) -> Option<(u16, u16)> {
    let columns = u16::try_from(game.width())
        .ok()?
        .checked_mul(CELL_WIDTH)?
        .checked_add(BORDER)?;
    let rows = u16::try_from(game.height())
        .ok()?
        .checked_add(BORDER + STATUS_ROWS)?;
    Some((columns, rows))
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;

    use crate::board::Occupancy;
    use crate::config::PALETTE;
    use crate::direction::Direction;
    use crate::game::GameBoard;

    use super::{cell_origin, render, tile_color};

    fn draw(game: &GameBoard, width: u16, height: u16) -> Buffer {
        let mut terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test backend never fails");
        terminal
            .draw(|frame| render(frame, game, &PALETTE))
            .expect("drawing into a test backend never fails");
        terminal.backend().buffer().clone()
    }

    fn text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn bottom_row_of_the_board_is_drawn_last() {
        let inner = Rect::new(1, 1, 6, 3);

        assert_eq!(cell_origin(inner, 3, 0, 0), Some((1, 3)));
        assert_eq!(cell_origin(inner, 3, 2, 2), Some((5, 1)));
        assert_eq!(cell_origin(inner, 3, 3, 0), None);
        assert_eq!(cell_origin(inner, 3, 0, 3), None);
    }

    #[test]
    fn empty_tiles_alternate_colors() {
        assert_eq!(tile_color(Occupancy::Empty, 0, 0, &PALETTE), PALETTE.empty_even);
        assert_eq!(tile_color(Occupancy::Empty, 1, 0, &PALETTE), PALETTE.empty_odd);
        assert_eq!(tile_color(Occupancy::Food, 1, 0, &PALETTE), PALETTE.food);
    }

    #[test]
    fn head_is_painted_at_its_screen_cell() {
        let mut game = GameBoard::new_with_seed(3, 3, 1, 1).expect("valid board");
        game.force_food(None).expect("clearing food is always allowed");
        let buffer = draw(&game, 40, 12);

        // Board area starts at column 16; the head (1, 1) sits in the middle row.
        for column in [19, 20] {
            let cell = buffer.cell((column, 2)).expect("inside the buffer");
            assert_eq!(cell.bg, PALETTE.snake_head, "column {column}");
        }
        let right_neighbour = buffer.cell((21, 2)).expect("inside the buffer");
        assert_eq!(right_neighbour.bg, PALETTE.empty_odd);
        assert!(text(&buffer).contains("Length 1"));
    }

    #[test]
    fn game_over_shows_final_score() {
        let mut game = GameBoard::new_with_seed(3, 3, 1, 2).expect("valid board");
        game.next_turn(Direction::Unchanged).expect("legal move");
        game.next_turn(Direction::Unchanged).expect("legal move");
        assert!(game.is_game_over());

        let buffer = draw(&game, 40, 12);
        let expected = format!("GAME OVER: score {}", game.snake_length());
        assert!(text(&buffer).contains(&expected));
    }

    #[test]
    fn small_terminal_gets_a_notice() {
        let game = GameBoard::new_with_seed(15, 15, 4, 3).expect("valid board");
        let buffer = draw(&game, 30, 10);

        assert!(text(&buffer).contains("Terminal too small"));
    }
}
