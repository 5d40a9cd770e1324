//! Canonical browser state and its transition rules.
//!
//! Only the controller holds a mutable [`AppState`]. Each transition method
//! keeps the paging invariants intact and reports whether a reload is due,
//! leaving the scheduling of the load to the caller.

use crate::constants::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};
use crate::entry::Entry;
use crate::mood::MoodFilter;

/// Whether keys drive commands or edit the search buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
}

/// Whether the entry table or the help panel is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Table,
    Help,
}

/// Parameters of one page load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub page_size: usize,
    pub page: usize,
    pub filter: MoodFilter,
    pub search: String,
}

impl LoadRequest {
    pub fn offset(&self) -> usize {
        self.page * self.page_size
    }
}

/// `ceil(total_entries / page_size)`, or 0 when there is nothing to show
pub fn total_pages(total_entries: usize, page_size: usize) -> usize {
    if total_entries == 0 || page_size == 0 {
        0
    } else {
        total_entries.div_ceil(page_size)
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub page_size: usize,
    pub current_page: usize,
    pub filter_mode: MoodFilter,
    /// Live search buffer, edited only in Search mode
    pub search_query: String,
    /// Term the last Enter committed; loads always use this one
    pub committed_search: String,
    pub input_mode: InputMode,
    pub view_mode: ViewMode,
    pub entries: Vec<Entry>,
    pub total_entries: usize,
    pub total_pages: usize,
    pub viewport_width: u16,
    pub viewport_height: u16,
}

impl AppState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 0,
            filter_mode: MoodFilter::All,
            search_query: String::new(),
            committed_search: String::new(),
            input_mode: InputMode::Normal,
            view_mode: ViewMode::Table,
            entries: Vec::new(),
            total_entries: 0,
            total_pages: 0,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }

    /// Load parameters for the current (page, filter, search) triple
    pub fn load_request(&self) -> LoadRequest {
        LoadRequest {
            page_size: self.page_size,
            page: self.current_page,
            filter: self.filter_mode,
            search: self.committed_search.clone(),
        }
    }

    pub fn is_searching(&self) -> bool {
        self.input_mode == InputMode::Search
    }

    pub fn toggle_help(&mut self) {
        self.view_mode = match self.view_mode {
            ViewMode::Table => ViewMode::Help,
            ViewMode::Help => ViewMode::Table,
        };
    }

    /// Start editing a fresh search buffer. The committed term stays in
    /// force until Enter or Esc.
    pub fn enter_search(&mut self) {
        self.input_mode = InputMode::Search;
        self.search_query.clear();
    }

    /// Step back one page; returns whether the page changed
    pub fn previous_page(&mut self) -> bool {
        if self.current_page == 0 {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// Step forward one page; returns whether the page changed
    pub fn next_page(&mut self) -> bool {
        if self.current_page + 1 >= self.total_pages {
            return false;
        }
        self.current_page += 1;
        true
    }

    /// Advance to the next mood filter and go back to the first page
    pub fn cycle_filter(&mut self) {
        self.filter_mode = self.filter_mode.next();
        self.current_page = 0;
    }

    /// Keep the buffer as the active search term
    pub fn commit_search(&mut self) {
        self.committed_search = self.search_query.clone();
        self.input_mode = InputMode::Normal;
        self.current_page = 0;
    }

    /// Throw the buffer away and search for nothing
    pub fn cancel_search(&mut self) {
        self.search_query.clear();
        self.committed_search.clear();
        self.input_mode = InputMode::Normal;
        self.current_page = 0;
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_query.push(c);
    }

    pub fn pop_search_char(&mut self) {
        self.search_query.pop();
    }

    /// Merge a landed page.
    ///
    /// Returns `true` when `page` lies past the last page of the new result
    /// set; the page is then moved to the last valid one and should be
    /// reloaded.
    pub fn apply_page(&mut self, entries: Vec<Entry>, total_entries: usize, page: usize) -> bool {
        self.entries = entries;
        self.total_entries = total_entries;
        self.total_pages = total_pages(total_entries, self.page_size);

        if self.total_pages == 0 {
            self.current_page = 0;
            return false;
        }

        let last_page = self.total_pages - 1;
        self.current_page = page.min(last_page);
        page > last_page
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport_width = width;
        self.viewport_height = height;
    }
}
