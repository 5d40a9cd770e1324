//! Terminal session setup and the main event loop

use anyhow::{bail, Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::Stdout;
use std::sync::Arc;

use super::app_component::AppComponent;
use super::core::{Action, Component, EventHandler};
use crate::storage::EntryQuery;

type BrowserTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Run the interactive log browser until the user quits.
///
/// Fails if the terminal cannot be taken over or if reading input breaks
/// mid-session. Query failures never end the session.
pub async fn run_app(query: Arc<dyn EntryQuery>, page_size: usize) -> Result<()> {
    if page_size == 0 {
        bail!("page size must be at least 1");
    }

    let mut terminal = setup_terminal().context("failed to establish terminal session")?;

    let res = run_ui(&mut terminal, query, page_size).await;
    let restored = restore_terminal(&mut terminal);

    session_result(res, restored)
}

/// A failed session outranks a failed teardown
fn session_result(res: Result<()>, restored: Result<()>) -> Result<()> {
    res?;
    restored.context("failed to restore terminal")
}

fn setup_terminal() -> Result<BrowserTerminal> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    let backend = CrosstermBackend::new(stdout);
    match Terminal::new(backend) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Undo every setup step, even when an earlier one fails
fn restore_terminal(terminal: &mut BrowserTerminal) -> Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let cursor = terminal.show_cursor();
    raw?;
    screen?;
    cursor?;
    Ok(())
}

async fn run_ui(terminal: &mut BrowserTerminal, query: Arc<dyn EntryQuery>, page_size: usize) -> Result<()> {
    let mut app = AppComponent::new(query, page_size);

    let size = terminal.size()?;
    app.handle_action(Action::Resize(size.width, size.height));

    let mut events = EventHandler::spawn(app.action_sender());
    app.start();

    while !app.should_quit() {
        terminal.draw(|f| {
            let area = f.area();
            app.render(f, area);
        })?;

        let Some(action) = app.next_action().await else {
            break;
        };
        app.handle_action(action);

        // Drain whatever else queued up before the next frame
        while !app.should_quit() {
            match app.try_next_action() {
                Some(action) => app.handle_action(action),
                None => break,
            }
        }
    }

    events.stop();
    info!("Browser: session ended");

    if let Some(message) = app.take_fatal_error() {
        bail!("terminal input failed: {message}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_session_error_wins_over_restore_error() {
        let err = session_result(Err(anyhow!("input broke")), Err(anyhow!("tty gone"))).unwrap_err();
        assert_eq!(err.to_string(), "input broke");
    }

    #[test]
    fn test_restore_error_surfaces_after_clean_session() {
        let err = session_result(Ok(()), Err(anyhow!("tty gone"))).unwrap_err();
        assert_eq!(err.to_string(), "failed to restore terminal");
        assert!(session_result(Ok(()), Ok(())).is_ok());
    }
}
