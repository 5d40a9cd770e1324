use crossterm::event::KeyEvent;

use crate::entry::Entry;
use crate::ui::core::loader::RequestId;

/// Result of one background page load
#[derive(Debug, Clone, PartialEq)]
pub struct PageLoaded {
    pub request_id: RequestId,
    pub entries: Vec<Entry>,
    pub total_entries: usize,
    pub page: usize,
}

/// Every message the controller dispatches.
///
/// `Key`, `Resize`, `PageLoaded` and `InputFailed` arrive on the action
/// queue; the rest are intents produced by the input handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Incoming messages
    Key(KeyEvent),
    Resize(u16, u16),
    PageLoaded(PageLoaded),
    InputFailed(String),

    // Normal mode
    ToggleHelp,
    EnterSearch,
    Refresh,
    PreviousPage,
    NextPage,
    CycleFilter,
    /// Key handed to the entry table unchanged
    Navigate(KeyEvent),

    // Search mode
    CommitSearch,
    CancelSearch,
    SearchBackspace,
    SearchInput(char),

    // App control
    Quit,
    None,
}
