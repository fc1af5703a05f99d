// State management module.
// Per-tab state structs plus the shared async loading state.

#![allow(dead_code)]

pub mod contact;
pub mod cv;
pub mod dashboard;
pub mod journey;
pub mod missions;
pub mod projects;

pub use contact::{ContactFormState, Field, SubmitDisposition};
pub use cv::CvModalState;
pub use dashboard::Typewriter;
pub use journey::JourneyState;
pub use missions::MissionsState;
pub use projects::ProjectsState;

/// Loading state for async data.
#[derive(Debug, Clone, Default)]
pub enum LoadingState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> LoadingState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadingState::Loaded(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadingState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadingState::Error(e) => Some(e),
            _ => None,
        }
    }
}
