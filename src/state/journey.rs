// Journey tab state: selection over the career timeline.

use ratatui::widgets::ListState;

use crate::content::JourneyEntry;

#[derive(Debug, Default)]
pub struct JourneyState {
    pub list_state: ListState,
}

impl JourneyState {
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

    pub fn selected<'a>(&self, entries: &'a [JourneyEntry]) -> Option<&'a JourneyEntry> {
        entries.get(self.list_state.selected()?)
    }
}
