//! Interactive funnel calculator.
//!
//! A keyboard-driven form over the pure derivation core: five input fields,
//! six output cards, reactive or deferred recalculation, and a cosmetic
//! light/dark theme toggle. All work happens synchronously in response to a
//! key event; the poll timeout only keeps the terminal responsive to resizes.

pub mod actions;
pub mod app;
pub mod input;
pub mod renderer;
pub mod theme;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::core::RecalcMode;

use app::App;
use theme::ThemeMode;

/// Calculator TUI manager.
pub struct CalculatorTui {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: App,
}

impl CalculatorTui {
    /// Initialize the terminal and create the application state.
    pub fn new(mode: RecalcMode, theme: ThemeMode) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app: App::new(mode, theme),
        })
    }

    /// Run the interactive event loop.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let app = &self.app;
            self.terminal.draw(|f| renderer::render(f, app))?;

            if event::poll(std::time::Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    // Handle Ctrl+C to quit
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        break;
                    }

                    if self.app.handle_key(key) {
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    /// Clean up and restore terminal
    fn cleanup(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for CalculatorTui {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
