//! Grid Snake: a tick-stamp board engine plus a ratatui terminal front end.
//!
//! [`game::GameBoard`] is the authoritative model. A renderer reads it through
//! [`game::GameBoard::tile_at`] between ticks, and the input adapter feeds it
//! through [`input::CommandSlot`].

pub mod board;
pub mod config;
pub mod direction;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod session;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
