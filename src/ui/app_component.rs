use crossterm::event::KeyEvent;
use log::{debug, info, warn};
use ratatui::{layout::Rect, Frame};
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::storage::EntryQuery;
use crate::ui::components::EntryTable;
use crate::ui::core::{Action, Component, DataLoader, PageLoaded, RequestId};
use crate::ui::input::map_key;
use crate::ui::state::{AppState, LoadRequest, ViewMode};
use crate::ui::view;

/// The controller: sole owner of [`AppState`] and consumer of the action queue.
///
/// Key presses, resizes and finished loads all arrive as [`Action`]s on one
/// queue. Handling an action mutates state and, when the result set changes,
/// dispatches exactly one background load. Nothing here blocks.
pub struct AppComponent {
    state: AppState,
    table: EntryTable,
    loader: DataLoader,

    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,

    /// Clamp reload held back while Help is shown
    pending_reload: bool,
    should_quit: bool,
    fatal_error: Option<String>,
}

impl AppComponent {
    pub fn new(query: Arc<dyn EntryQuery>, page_size: usize) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let loader = DataLoader::new(query, action_tx.clone());

        Self {
            state: AppState::new(page_size),
            table: EntryTable::new(),
            loader,
            action_tx,
            action_rx,
            pending_reload: false,
            should_quit: false,
            fatal_error: None,
        }
    }

    /// Sender for producers outside the controller, such as the input reader
    pub fn action_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    /// Issue the initial load for the first page, unfiltered
    pub fn start(&mut self) -> RequestId {
        info!("AppComponent: starting with page size {}", self.state.page_size);
        self.reload()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn table(&self) -> &EntryTable {
        &self.table
    }

    pub fn last_request(&self) -> Option<&LoadRequest> {
        self.loader.last_request()
    }

    pub fn latest_request_id(&self) -> RequestId {
        self.loader.latest_request_id()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The error that ended the session, if input failed
    pub fn take_fatal_error(&mut self) -> Option<String> {
        self.fatal_error.take()
    }

    /// Wait for the next queued action
    pub async fn next_action(&mut self) -> Option<Action> {
        self.action_rx.recv().await
    }

    pub fn try_next_action(&mut self) -> Option<Action> {
        self.action_rx.try_recv().ok()
    }

    /// Apply one action to the session
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Key(key) => {
                let intent = map_key(&self.state, key);
                if intent != Action::None {
                    self.handle_action(intent);
                }
            }
            Action::Resize(width, height) => self.state.resize(width, height),
            Action::PageLoaded(page) => self.apply_loaded_page(page),
            Action::InputFailed(message) => {
                warn!("AppComponent: input failed, ending session: {}", message);
                self.fatal_error = Some(message);
                self.should_quit = true;
            }
            Action::ToggleHelp => {
                self.state.toggle_help();
                if self.state.view_mode == ViewMode::Table && self.pending_reload {
                    self.reload();
                }
            }
            Action::EnterSearch => self.state.enter_search(),
            Action::Refresh => {
                self.reload();
            }
            Action::PreviousPage => {
                if self.state.previous_page() {
                    self.reload();
                }
            }
            Action::NextPage => {
                if self.state.next_page() {
                    self.reload();
                }
            }
            Action::CycleFilter => {
                self.state.cycle_filter();
                self.reload();
            }
            Action::CommitSearch => {
                self.state.commit_search();
                self.reload();
            }
            Action::CancelSearch => {
                self.state.cancel_search();
                self.reload();
            }
            Action::SearchBackspace => self.state.pop_search_char(),
            Action::SearchInput(c) => self.state.push_search_char(c),
            Action::Navigate(key) => {
                self.table.update(Action::Navigate(key));
            }
            Action::Quit => self.should_quit = true,
            Action::None => {}
        }
    }

    fn reload(&mut self) -> RequestId {
        self.pending_reload = false;
        self.loader.spawn_load(self.state.load_request())
    }

    fn apply_loaded_page(&mut self, page: PageLoaded) {
        if !self.loader.is_current(page.request_id) {
            debug!(
                "AppComponent: dropping stale page {} from request {} (latest {})",
                page.page,
                page.request_id,
                self.loader.latest_request_id()
            );
            return;
        }

        let needs_reload = self
            .state
            .apply_page(page.entries, page.total_entries, page.page);
        self.table.set_entries(&self.state.entries);

        if needs_reload && self.state.view_mode == ViewMode::Help {
            debug!(
                "AppComponent: page {} is past the end, reload deferred until help closes",
                page.page
            );
            self.pending_reload = true;
        } else if needs_reload {
            debug!(
                "AppComponent: page {} is past the end, reloading page {}",
                page.page, self.state.current_page
            );
            self.reload();
        }
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        map_key(&self.state, key)
    }

    fn update(&mut self, action: Action) -> Action {
        self.handle_action(action);
        Action::None
    }

    fn render(&mut self, f: &mut Frame, _rect: Rect) {
        view::draw(f, &self.state, &mut self.table);
    }
}
