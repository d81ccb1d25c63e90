// Terminal UI
//
// Owns the terminal for the lifetime of the interactive session: raw mode,
// alternate screen, mouse capture and bracketed paste are switched on by
// `TerminalSession` and switched back off when it is dropped, including on
// the error path.

pub mod layout;
pub mod render;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste,
        EnableMouseCapture, Event, KeyEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;

use super::app::{App, AppCommand};
use crate::config::{ColorScheme, Config};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Terminal state guard
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    pub fn start() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste
        ) {
            let _ = disable_raw_mode();
            return Err(e).context("Failed to enter alternate screen");
        }

        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                restore();
                return Err(e).context("Failed to create terminal");
            }
        };

        Ok(Self { terminal })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

fn restore() {
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    );
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore();
        let _ = self.terminal.show_cursor();
    }
}

/// Run the interactive app until the user quits
pub fn run(config: &Config) -> Result<()> {
    let colors = config.color_scheme();
    let mut app = App::new(config.variant);
    let mut session = TerminalSession::start()?;

    tracing::info!(
        variant = config.variant.name(),
        theme = config.theme.name(),
        "Interactive session started"
    );

    let result = event_loop(session.terminal(), &mut app, &colors);

    drop(session);
    tracing::info!("Interactive session ended");
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    colors: &ColorScheme,
) -> Result<()> {
    loop {
        terminal
            .draw(|frame| render::draw(frame, app, colors))
            .context("Failed to draw frame")?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        let event = event::read()?;
        if let Event::Key(key) = &event {
            if key.kind != KeyEventKind::Press {
                continue;
            }
        }

        match app.handle_event(event) {
            Some(AppCommand::Quit) => return Ok(()),
            Some(AppCommand::CopyToClipboard(text)) => {
                let result = copy_to_clipboard(&text);
                app.report_copy(result);
            }
            None => {}
        }
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("Clipboard unavailable")?;
    clipboard
        .set_text(text.to_string())
        .context("Failed to write to clipboard")?;
    tracing::debug!(chars = text.chars().count(), "Message copied");
    Ok(())
}
