// Projects tab state.
// Selection over the static project list plus the detail panel toggle.

use ratatui::widgets::ListState;

use crate::content::MajorProject;

/// State for the Projects tab.
#[derive(Debug, Default)]
pub struct ProjectsState {
    pub list_state: ListState,
    pub detail_open: bool,
}

impl ProjectsState {
    pub fn new() -> Self {
        let mut state = Self::default();
        state.list_state.select(Some(0));
        state
    }

    pub fn select_next(&mut self, len: usize) {
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

    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn open_detail(&mut self) {
        if self.list_state.selected().is_some() {
            self.detail_open = true;
        }
    }

    /// Close the detail panel. Returns false when it was already closed.
    pub fn close_detail(&mut self) -> bool {
        let was_open = self.detail_open;
        self.detail_open = false;
        was_open
    }

    pub fn selected<'a>(&self, projects: &'a [MajorProject]) -> Option<&'a MajorProject> {
        projects.get(self.list_state.selected()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_toggle_requires_selection() {
        let mut state = ProjectsState::default();
        state.open_detail();
        assert!(!state.detail_open);

        state.select_next(3);
        state.open_detail();
        assert!(state.detail_open);

        assert!(state.close_detail());
        assert!(!state.close_detail());
    }

    #[test]
    fn test_selection_clamps() {
        let mut state = ProjectsState::new();
        state.select_next(2);
        state.select_next(2);
        state.select_next(2);
        assert_eq!(state.list_state.selected(), Some(1));

        state.select_prev(2);
        state.select_prev(2);
        assert_eq!(state.list_state.selected(), Some(0));
    }
}
