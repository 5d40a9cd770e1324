//! Frame composition for the browser.

use ratatui::Frame;

use super::components::{EntryTable, Header, HelpPanel, StatusBar};
use super::core::Component;
use super::layout::LayoutManager;
use super::state::{AppState, ViewMode};

/// Draw one frame from the current state.
///
/// Reads the state only; the table is borrowed mutably so it can learn its
/// visible height from the area it is given.
pub fn draw(f: &mut Frame, state: &AppState, table: &mut EntryTable) {
    if state.view_mode == ViewMode::Help {
        HelpPanel::render(f, state);
        return;
    }

    let [header_area, table_area, status_area] = LayoutManager::browser_layout(f.area());

    Header::render(f, header_area, state);
    table.render(f, table_area);
    StatusBar::render(f, status_area, state);
}
