//! Entry table component: the scrollable, selectable view of the loaded page.

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use super::scrollbar_helper::ScrollbarHelper;
use crate::constants::{COLUMN_TITLES, COLUMN_WIDTHS, MESSAGE_MAX_WIDTH};
use crate::entry::Entry;
use crate::ui::core::{Action, Component};
use crate::utils::format::{format_intensity, format_timestamp, join_tags, truncate_with_ellipsis};

const EMPTY_MESSAGE: &str = "No entries match the current filter and search.";

/// Borders plus the column header line
const TABLE_CHROME_HEIGHT: u16 = 3;

/// One display row, already formatted for the table columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRow {
    pub date: String,
    pub mood: String,
    pub intensity: String,
    pub message: String,
    pub tags: String,
}

impl EntryRow {
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            date: format_timestamp(&entry.created_at.with_timezone(&Local)),
            mood: entry.mood.to_string(),
            intensity: format_intensity(entry.intensity),
            message: truncate_with_ellipsis(&entry.message, MESSAGE_MAX_WIDTH),
            tags: join_tags(&entry.tags),
        }
    }

    fn cells(&self) -> [&str; 5] {
        [&self.date, &self.mood, &self.intensity, &self.message, &self.tags]
    }
}

/// Selection and scroll state over the rows of the current page.
///
/// The selection always stays inside `offset..offset + body_height`, so the
/// highlighted row is visible after every move.
#[derive(Debug)]
pub struct EntryTable {
    rows: Vec<EntryRow>,
    selected: usize,
    offset: usize,
    body_height: usize,
    scrollbar: ScrollbarHelper,
}

impl Default for EntryTable {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryTable {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            selected: 0,
            offset: 0,
            body_height: 1,
            scrollbar: ScrollbarHelper::new(),
        }
    }

    /// Replace the rows with a freshly loaded page
    pub fn set_entries(&mut self, entries: &[Entry]) {
        self.set_rows(entries.iter().map(EntryRow::from_entry).collect());
    }

    /// Replace the rows, keeping the cursor where it was when it still fits
    pub fn set_rows(&mut self, rows: Vec<EntryRow>) {
        self.rows = rows;
        self.clamp();
    }

    pub fn rows(&self) -> &[EntryRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        if self.rows.is_empty() {
            None
        } else {
            Some(self.selected)
        }
    }

    /// Index of the first visible row
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn body_height(&self) -> usize {
        self.body_height
    }

    pub fn set_body_height(&mut self, height: usize) {
        self.body_height = height.max(1);
        self.scroll_into_view();
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.scroll_into_view();
    }

    pub fn move_down(&mut self) {
        self.selected = self.selected.saturating_add(1);
        self.clamp();
    }

    pub fn move_first(&mut self) {
        self.selected = 0;
        self.scroll_into_view();
    }

    pub fn move_last(&mut self) {
        self.selected = self.rows.len().saturating_sub(1);
        self.scroll_into_view();
    }

    pub fn page_up(&mut self) {
        self.selected = self.selected.saturating_sub(self.body_height);
        self.scroll_into_view();
    }

    pub fn page_down(&mut self) {
        self.selected = self.selected.saturating_add(self.body_height);
        self.clamp();
    }

    fn clamp(&mut self) {
        self.selected = self.selected.min(self.rows.len().saturating_sub(1));
        self.scroll_into_view();
    }

    fn scroll_into_view(&mut self) {
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + self.body_height {
            self.offset = self.selected + 1 - self.body_height;
        }

        let max_offset = self.rows.len().saturating_sub(self.body_height);
        self.offset = self.offset.min(max_offset);
    }

    fn block() -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Indexed(62)))
    }
}

impl Component for EntryTable {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_down(),
            KeyCode::Home | KeyCode::Char('g') => self.move_first(),
            KeyCode::End | KeyCode::Char('G') => self.move_last(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(),
            _ => {}
        }
        Action::None
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::Navigate(key) => self.handle_key_events(key),
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.set_body_height(rect.height.saturating_sub(TABLE_CHROME_HEIGHT) as usize);

        if self.rows.is_empty() {
            let empty = Paragraph::new(EMPTY_MESSAGE)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .block(Self::block());
            f.render_widget(empty, rect);
            return;
        }

        let header = Row::new(COLUMN_TITLES.iter().map(|title| Cell::from(*title)))
            .style(Style::default().add_modifier(Modifier::BOLD))
            .height(1);

        let rows = self
            .rows
            .iter()
            .map(|row| Row::new(row.cells().into_iter().map(|cell| Cell::from(cell.to_string()))));

        let widths = COLUMN_WIDTHS.map(Constraint::Length);

        let table = Table::new(rows, widths)
            .header(header)
            .block(Self::block())
            .row_highlight_style(
                Style::default()
                    .fg(Color::Indexed(229))
                    .bg(Color::Indexed(57))
                    .add_modifier(Modifier::BOLD),
            );

        let mut state = TableState::default()
            .with_offset(self.offset)
            .with_selected(Some(self.selected));
        f.render_stateful_widget(table, rect, &mut state);

        self.scrollbar
            .update_state(self.rows.len(), self.selected, self.body_height);
        let area = ScrollbarHelper::scrollbar_area(rect, self.rows.len(), self.body_height);
        self.scrollbar.render(f, area);
    }
}
