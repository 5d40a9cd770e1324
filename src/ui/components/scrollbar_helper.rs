//! Scrollbar for the entry table.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Tracks scroll position for a bordered, scrollable widget and draws a
/// scrollbar inside its right border when the rows overflow.
#[derive(Debug, Default)]
pub struct ScrollbarHelper {
    state: ScrollbarState,
}

impl ScrollbarHelper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the scrollbar with the row count, selected row and visible rows
    pub fn update_state(&mut self, total_rows: usize, position: usize, viewport_rows: usize) {
        self.state = self
            .state
            .content_length(total_rows)
            .position(position)
            .viewport_content_length(viewport_rows);
    }

    pub fn needs_scrollbar(total_rows: usize, viewport_rows: usize) -> bool {
        total_rows > viewport_rows
    }

    /// Area of the scrollbar inside a bordered `rect`, if one is needed
    pub fn scrollbar_area(rect: Rect, total_rows: usize, viewport_rows: usize) -> Option<Rect> {
        if !Self::needs_scrollbar(total_rows, viewport_rows) || rect.width == 0 {
            return None;
        }

        Some(Rect {
            x: rect.x + rect.width.saturating_sub(1),
            y: rect.y + 1,
            width: 1,
            height: rect.height.saturating_sub(2),
        })
    }

    pub fn render(&mut self, f: &mut Frame, scrollbar_area: Option<Rect>) {
        if let Some(area) = scrollbar_area {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .style(Style::default().fg(Color::DarkGray))
                .thumb_style(Style::default().fg(Color::DarkGray));

            f.render_stateful_widget(scrollbar, area, &mut self.state);
        }
    }

    pub fn state(&self) -> &ScrollbarState {
        &self.state
    }
}
