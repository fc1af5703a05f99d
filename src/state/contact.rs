// Contact form state.
// Field focus, input editing, honeypot handling, and submit validation.

use crate::email::{ContactMessage, SendOutcome};

/// Focusable form fields, in visual order. The honeypot is deliberately
/// not focusable and never rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Subject,
            Field::Subject => Field::Message,
            Field::Message => Field::Name,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Subject => Field::Email,
            Field::Message => Field::Subject,
        }
    }
}

/// What a submit attempt should do.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitDisposition {
    /// Required fields missing or invalid; nothing happens.
    Incomplete,
    /// Honeypot filled: report success without dispatching anything.
    HoneypotTriggered,
    /// Dispatch this message.
    Ready(ContactMessage),
}

/// State for the Contact tab form.
#[derive(Debug, Default)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Hidden spam trap. Stays empty for human input.
    pub honeypot: String,
    pub focus: Field,
    pub submitting: bool,
    pub status: Option<SendOutcome>,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn input(&mut self, c: char) {
        self.focused_field_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused_field_mut().pop();
    }

    pub fn field_value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn focused_field_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    /// Decide what submitting the form should do, without side effects.
    pub fn disposition(&self) -> SubmitDisposition {
        if self.submitting {
            return SubmitDisposition::Incomplete;
        }
        if !self.honeypot.trim().is_empty() {
            return SubmitDisposition::HoneypotTriggered;
        }
        if self.name.trim().is_empty()
            || self.subject.trim().is_empty()
            || self.message.trim().is_empty()
            || !is_plausible_email(&self.email)
        {
            return SubmitDisposition::Incomplete;
        }
        SubmitDisposition::Ready(ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }

    pub fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
        self.honeypot.clear();
        self.focus = Field::Name;
    }
}

fn is_plausible_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactFormState {
        let mut form = ContactFormState::new();
        form.name = "Ada".to_string();
        form.email = "ada@example.com".to_string();
        form.subject = "Hello".to_string();
        form.message = "Hi there".to_string();
        form
    }

    #[test]
    fn test_ready_disposition() {
        let form = filled_form();
        match form.disposition() {
            SubmitDisposition::Ready(msg) => {
                assert_eq!(msg.name, "Ada");
                assert_eq!(msg.email, "ada@example.com");
            }
            other => panic!("expected Ready, got {:?}", other),
        }
    }

    #[test]
    fn test_incomplete_when_fields_missing() {
        let mut form = filled_form();
        form.message.clear();
        assert_eq!(form.disposition(), SubmitDisposition::Incomplete);

        let mut form = filled_form();
        form.email = "not-an-email".to_string();
        assert_eq!(form.disposition(), SubmitDisposition::Incomplete);
    }

    #[test]
    fn test_honeypot_short_circuits() {
        let mut form = filled_form();
        form.honeypot = "bot text".to_string();
        assert_eq!(form.disposition(), SubmitDisposition::HoneypotTriggered);
    }

    #[test]
    fn test_no_resubmit_while_in_flight() {
        let mut form = filled_form();
        form.submitting = true;
        assert_eq!(form.disposition(), SubmitDisposition::Incomplete);
    }

    #[test]
    fn test_focus_cycles() {
        let mut form = ContactFormState::new();
        assert_eq!(form.focus, Field::Name);
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focus, Field::Subject);
        form.focus_prev();
        assert_eq!(form.focus, Field::Email);
    }

    #[test]
    fn test_input_targets_focused_field() {
        let mut form = ContactFormState::new();
        form.input('A');
        form.focus_next();
        form.input('b');
        form.backspace();

        assert_eq!(form.name, "A");
        assert!(form.email.is_empty());
    }

    #[test]
    fn test_email_plausibility() {
        assert!(is_plausible_email("a@b.co"));
        assert!(!is_plausible_email("a@b"));
        assert!(!is_plausible_email("@b.co"));
        assert!(!is_plausible_email("plain"));
    }
}
