// Side Missions tab state.
// Handles the repo listing lifecycle: loading, cancellation via
// generation counter, pagination, and selection.

use ratatui::widgets::ListState;
use tokio::task::JoinHandle;

use crate::github::RepoSummary;

use super::LoadingState;

/// Repos shown per page, matching the original grid.
pub const PAGE_SIZE: usize = 6;

/// State for the Side Missions tab.
pub struct MissionsState {
    pub data: LoadingState<Vec<RepoSummary>>,
    pub list_state: ListState,
    /// Zero-based page into the loaded list.
    pub page: usize,
    /// Monotonic fetch generation. A completion carrying an older
    /// generation is discarded without touching state.
    generation: u64,
    /// Handle of the in-flight fetch task, if any.
    task: Option<JoinHandle<()>>,
}

impl Default for MissionsState {
    fn default() -> Self {
        Self {
            data: LoadingState::Idle,
            list_state: ListState::default(),
            page: 0,
            generation: 0,
            task: None,
        }
    }
}

impl MissionsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new fetch: supersede and abort any in-flight request.
    /// Returns the generation the new fetch must report with.
    pub fn begin_fetch(&mut self) -> u64 {
        self.abort_inflight();
        self.generation += 1;
        self.data = LoadingState::Loading;
        self.page = 0;
        self.list_state.select(None);
        self.generation
    }

    pub fn attach_task(&mut self, task: JoinHandle<()>) {
        self.task = Some(task);
    }

    /// Whether a completion for `generation` is still current.
    pub fn accepts(&self, generation: u64) -> bool {
        generation == self.generation
    }

    pub fn set_loaded(&mut self, repos: Vec<RepoSummary>) {
        self.task = None;
        self.page = 0;
        self.list_state
            .select(if repos.is_empty() { None } else { Some(0) });
        self.data = LoadingState::Loaded(repos);
    }

    pub fn set_error(&mut self, error: String) {
        self.task = None;
        self.list_state.select(None);
        self.data = LoadingState::Error(error);
    }

    /// Abort the in-flight request, discarding whatever it resolves to.
    pub fn abort_inflight(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Tear down the in-flight request and invalidate its generation, so
    /// a completion it already queued is discarded on delivery.
    pub fn cancel(&mut self) {
        self.abort_inflight();
        self.generation += 1;
    }

    pub fn page_count(&self) -> usize {
        match self.data.data() {
            Some(repos) if !repos.is_empty() => repos.len().div_ceil(PAGE_SIZE),
            _ => 0,
        }
    }

    /// The repos visible on the current page.
    pub fn current_page_items(&self) -> &[RepoSummary] {
        match self.data.data() {
            Some(repos) => {
                let start = (self.page * PAGE_SIZE).min(repos.len());
                let end = (start + PAGE_SIZE).min(repos.len());
                &repos[start..end]
            }
            None => &[],
        }
    }

    pub fn next_page(&mut self) {
        let pages = self.page_count();
        if pages > 0 && self.page + 1 < pages {
            self.page += 1;
            self.reset_selection();
        }
    }

    pub fn prev_page(&mut self) {
        if self.page > 0 {
            self.page -= 1;
            self.reset_selection();
        }
    }

    pub fn select_next(&mut self) {
        let len = self.current_page_items().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_prev(&mut self) {
        if self.current_page_items().is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn selected_repo(&self) -> Option<&RepoSummary> {
        self.current_page_items().get(self.list_state.selected()?)
    }

    fn reset_selection(&mut self) {
        self.list_state
            .select(if self.current_page_items().is_empty() {
                None
            } else {
                Some(0)
            });
    }
}
