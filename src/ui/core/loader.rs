use log::{debug, warn};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::actions::{Action, PageLoaded};
use crate::entry::EntryPage;
use crate::storage::EntryQuery;
use crate::ui::state::LoadRequest;

/// Monotonic id of a dispatched load; 0 means nothing was dispatched yet
pub type RequestId = u64;

/// Runs page loads on background tasks and posts their results to the action queue.
///
/// Every load gets a fresh [`RequestId`]. Only the most recently dispatched
/// request is considered current; older results are reported as stale so the
/// controller can drop them.
pub struct DataLoader {
    query: Arc<dyn EntryQuery>,
    tasks: HashMap<RequestId, JoinHandle<()>>,
    latest_request: RequestId,
    last_request: Option<LoadRequest>,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl DataLoader {
    pub fn new(query: Arc<dyn EntryQuery>, action_sender: mpsc::UnboundedSender<Action>) -> Self {
        Self {
            query,
            tasks: HashMap::new(),
            latest_request: 0,
            last_request: None,
            action_sender,
        }
    }

    /// Spawn a background load for `request`.
    ///
    /// A failing query never reaches the user as an error: it resolves to an
    /// empty page for the requested index.
    pub fn spawn_load(&mut self, request: LoadRequest) -> RequestId {
        self.cleanup_finished_tasks();

        self.latest_request += 1;
        let request_id = self.latest_request;

        let query = Arc::clone(&self.query);
        let action_sender = self.action_sender.clone();
        let task_request = request.clone();

        debug!(
            "Loader: request {} page={} filter={} search={:?}",
            request_id, request.page, request.filter, request.search
        );

        let handle = tokio::spawn(async move {
            let page = match query
                .query_entries(
                    task_request.page_size,
                    task_request.offset(),
                    task_request.filter,
                    &task_request.search,
                )
                .await
            {
                Ok(page) => page,
                Err(e) => {
                    warn!("Loader: request {} failed, showing no results: {}", request_id, e);
                    EntryPage::empty()
                }
            };

            let _ = action_sender.send(Action::PageLoaded(PageLoaded {
                request_id,
                entries: page.entries,
                total_entries: page.total_matching,
                page: task_request.page,
            }));
        });

        self.tasks.insert(request_id, handle);
        self.last_request = Some(request);
        request_id
    }

    /// Whether a result for `request_id` reflects the newest dispatched request
    pub fn is_current(&self, request_id: RequestId) -> bool {
        request_id == self.latest_request
    }

    pub fn latest_request_id(&self) -> RequestId {
        self.latest_request
    }

    /// The parameters of the most recently dispatched load
    pub fn last_request(&self) -> Option<&LoadRequest> {
        self.last_request.as_ref()
    }

    /// Drop handles of finished loads, returning how many were reaped
    pub fn cleanup_finished_tasks(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|_, handle| !handle.is_finished());
        before - self.tasks.len()
    }

    /// Abort every running load
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

impl Drop for DataLoader {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
