//! # TUI Adapter
//!
//! The ratatui-specific layer. Plays the part of the hosting UI framework:
//! it renders the Navigator through the presentation host and turns
//! keyboard input into Navigator calls.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only draws when the Navigator's
//! `revision()` moved, the status line changed, or an event arrived
//! (resize included). Otherwise it sleeps in `poll` for up to 500ms.

mod component;
pub mod components;
mod event;
pub mod host;
pub mod shell;
mod ui;
pub mod view;

pub use event::TuiEvent;

use log::info;
use std::io::stdout;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;

use crate::core::config::ResolvedConfig;
use crate::tui::event::{poll_event_immediate, poll_event_timeout};
use crate::tui::shell::Shell;

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Hide)?;
        info!("Terminal modes enabled (hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut shell = Shell::new(&config);
    info!(
        "Shell started (mode: {:?}, eviction: {:?})",
        config.run_mode, config.eviction
    );

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let result = event_loop(&mut terminal, &mut shell);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut ratatui::DefaultTerminal, shell: &mut Shell) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame
    let mut drawn_revision = shell.navigator.revision();

    loop {
        if needs_redraw || shell.navigator.revision() != drawn_revision {
            terminal.draw(|f| ui::draw_ui(f, shell))?;
            drawn_revision = shell.navigator.revision();
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(500));
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if !shell.handle_event(event) {
                info!("Shell exiting at depth {}", shell.navigator.depth());
                return Ok(());
            }
        }
    }
}
