//! Help panel component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::HELP_TITLE;
use crate::ui::layout::LayoutManager;
use crate::ui::state::AppState;

/// Key reference followed by the current paging, filter and search context
pub fn help_text(state: &AppState) -> String {
    format!(
        "{HELP_TITLE}

navigation:
  ↑/↓, j/k       move cursor up/down
  page up/down   move one screen of rows
  home/end       go to first/last entry
  ←/→, h/l       previous/next page

actions:
  /              enter search mode
  f              cycle through mood filters
  r              refresh entries
  ?              toggle this help
  q, ctrl+c      quit

search mode:
  type to search in messages and tags
  enter          apply search
  esc            cancel search

pagination:
  page size: {page_size} entries per page
  current: page {page}/{total_pages}
  total entries: {total_entries}

current filter: {filter}
current search: \"{search}\"

press ? again to return to the table view.",
        page_size = state.page_size,
        page = state.current_page + 1,
        total_pages = state.total_pages,
        total_entries = state.total_entries,
        filter = state.filter_mode,
        search = state.committed_search,
    )
}

pub struct HelpPanel;

impl HelpPanel {
    pub fn render(f: &mut Frame, state: &AppState) {
        let area = LayoutManager::centered_rect(80, 90, f.area());
        f.render_widget(Clear, area);

        let help = Paragraph::new(help_text(state))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Indexed(62))),
            )
            .alignment(Alignment::Left)
            .style(Style::default().fg(Color::Indexed(252)));

        f.render_widget(help, area);
    }
}
