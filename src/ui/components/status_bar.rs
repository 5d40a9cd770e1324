//! Status bar component

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::constants::STATUS_HINTS;
use crate::ui::state::AppState;
use crate::utils::format::fit_to_width;

/// Key binding hints padded or cut to exactly `width` columns
pub fn status_text(width: u16) -> String {
    fit_to_width(STATUS_HINTS, width as usize)
}

pub struct StatusBar;

impl StatusBar {
    /// Sized to the last known terminal width rather than the frame
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let status_bar = Paragraph::new(status_text(state.viewport_width))
            .style(Style::default().bg(Color::Indexed(62)).fg(Color::Indexed(230)));

        f.render_widget(status_bar, area);
    }
}
