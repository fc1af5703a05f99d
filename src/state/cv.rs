// CV download modal state.
// Collects a recipient email; the password email and the download run
// as independent tasks, and the download never waits on the email.

use std::path::PathBuf;

use crate::email::SendOutcome;

#[derive(Debug, Default)]
pub struct CvModalState {
    pub open: bool,
    pub email: String,
    /// True while either the download or the password email is in flight.
    pub busy: bool,
    /// Outcome of the password email, shown but never blocking.
    pub email_outcome: Option<SendOutcome>,
    /// Where the CV landed, or the download error.
    pub download_result: Option<Result<PathBuf, String>>,
}

impl CvModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.open = true;
        self.email_outcome = None;
        self.download_result = None;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.busy = false;
        self.email.clear();
    }

    pub fn input(&mut self, c: char) {
        self.email.push(c);
    }

    pub fn backspace(&mut self) {
        self.email.pop();
    }

    pub fn can_submit(&self) -> bool {
        !self.busy && self.email.trim().contains('@')
    }

    pub fn finish_download(&mut self, result: Result<PathBuf, String>) {
        self.busy = false;
        self.download_result = Some(result);
    }

    pub fn finish_email(&mut self, outcome: SendOutcome) {
        self.email_outcome = Some(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_requires_email_and_idle() {
        let mut modal = CvModalState::new();
        modal.open();
        assert!(!modal.can_submit());

        for c in "me@example.com".chars() {
            modal.input(c);
        }
        assert!(modal.can_submit());

        modal.busy = true;
        assert!(!modal.can_submit());
    }

    #[test]
    fn test_download_outcome_independent_of_email() {
        // A failed password email never blocks or undoes the download.
        let mut modal = CvModalState::new();
        modal.open();
        modal.busy = true;

        modal.finish_email(SendOutcome::failure("Failed to send password"));
        modal.finish_download(Ok(PathBuf::from("/downloads/cv.pdf")));

        assert!(matches!(modal.download_result, Some(Ok(_))));
        assert!(!modal.email_outcome.as_ref().unwrap().success);
        assert!(!modal.busy);
    }

    #[test]
    fn test_close_resets_input() {
        let mut modal = CvModalState::new();
        modal.open();
        modal.input('a');
        modal.close();
        assert!(modal.email.is_empty());
        assert!(!modal.open);
    }
}
