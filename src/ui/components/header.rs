//! Title and live stats line shown above the table

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::constants::BROWSER_TITLE;
use crate::ui::state::AppState;

/// `total: N entries | filter: F`, extended with the page position and the
/// search term when they apply.
///
/// While typing, the live buffer is shown with a trailing cursor; a committed
/// term is shown quoted.
pub fn stats_line(state: &AppState) -> String {
    let mut stats = format!(
        "total: {} entries | filter: {}",
        state.total_entries, state.filter_mode
    );

    if state.total_pages > 0 {
        stats.push_str(&format!(" | page: {}/{}", state.current_page + 1, state.total_pages));
    }

    if state.is_searching() {
        stats.push_str(&format!(" | search: {}_", state.search_query));
    } else if !state.committed_search.is_empty() {
        stats.push_str(&format!(" | search: \"{}\"", state.committed_search));
    }

    stats
}

pub fn header_line(state: &AppState) -> String {
    format!("{}  {}", BROWSER_TITLE, stats_line(state))
}

pub struct Header;

impl Header {
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let line = Line::from(vec![
            Span::styled(
                BROWSER_TITLE,
                Style::default()
                    .fg(Color::Indexed(201))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(stats_line(state), Style::default().fg(Color::Indexed(245))),
        ]);

        f.render_widget(Paragraph::new(line), area);
    }
}
