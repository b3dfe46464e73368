use std::io;
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use tracing::warn;

use crate::config::Palette;
use crate::game::GameBoard;
use crate::renderer;

/// A ratatui terminal that knows how to paint a [`GameBoard`].
///
/// Generic over the backend so the draw path runs against `TestBackend` too.
pub struct GameScreen<B: Backend> {
    terminal: Terminal<B>,
    palette: Palette,
}

impl<B: Backend> GameScreen<B> {
    pub fn new(backend: B, palette: Palette) -> io::Result<Self> {
        Ok(Self {
            terminal: Terminal::new(backend)?,
            palette,
        })
    }

    /// Paints one full frame of `game`.
    pub fn draw(&mut self, game: &GameBoard) -> io::Result<()> {
        let palette = self.palette;
        self.terminal
            .draw(|frame| renderer::render(frame, game, &palette))?;
        Ok(())
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }
}

/// Screen on the real terminal, in raw mode on the alternate screen.
///
/// Dropping it hands the terminal back to the shell.
pub struct TerminalSession {
    screen: GameScreen<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    pub fn enter(palette: Palette) -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error);
        }

        match GameScreen::new(CrosstermBackend::new(stdout), palette) {
            Ok(screen) => Ok(Self { screen }),
            Err(error) => {
                let _ = cleanup_terminal_best_effort();
                Err(error)
            }
        }
    }

    pub fn screen_mut(&mut self) -> &mut GameScreen<CrosstermBackend<io::Stdout>> {
        &mut self.screen
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(error) = cleanup_terminal_best_effort() {
            warn!(%error, "failed to restore terminal");
        }
    }
}

/// Chains a panic hook that restores the terminal before the default report.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = cleanup_terminal_best_effort();
        default_hook(panic_info);
    }));
}

fn cleanup_terminal_best_effort() -> io::Result<()> {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)
}
