//! Contact form stepper
//!
//! Three fields filled strictly in order. Only the field of the current
//! stage accepts input; committing the message submits the form.

use chrono::{DateTime, Local};

/// The field currently open for input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    Name,
    Email,
    Message,
}

impl Stage {
    pub fn all() -> [Stage; 3] {
        [Stage::Name, Stage::Email, Stage::Message]
    }

    /// Prompt shown above the field
    pub fn prompt(&self) -> &'static str {
        match self {
            Stage::Name => "Enter your name:",
            Stage::Email => "Enter your email:",
            Stage::Message => "Enter your message:",
        }
    }

    fn next(&self) -> Option<Stage> {
        match self {
            Stage::Name => Some(Stage::Email),
            Stage::Email => Some(Stage::Message),
            Stage::Message => None,
        }
    }

    fn order(&self) -> u8 {
        match self {
            Stage::Name => 0,
            Stage::Email => 1,
            Stage::Message => 2,
        }
    }
}

/// A completed form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitted_at: DateTime<Local>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    stage: Stage,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn field(&self, stage: Stage) -> &str {
        match stage {
            Stage::Name => &self.name,
            Stage::Email => &self.email,
            Stage::Message => &self.message,
        }
    }

    fn active_field_mut(&mut self) -> &mut String {
        match self.stage {
            Stage::Name => &mut self.name,
            Stage::Email => &mut self.email,
            Stage::Message => &mut self.message,
        }
    }

    /// Only the current stage is editable
    pub fn is_editable(&self, stage: Stage) -> bool {
        self.stage == stage
    }

    /// Whether a field has been reached and should be displayed
    pub fn is_visible(&self, stage: Stage) -> bool {
        stage.order() <= self.stage.order()
    }

    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        self.active_field_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.active_field_mut().pop();
    }

    /// Commit the active field (Enter). At the message stage this submits.
    pub fn commit(&mut self) -> Option<Submission> {
        match self.stage.next() {
            Some(next) => {
                self.stage = next;
                None
            }
            None => Some(self.take_submission()),
        }
    }

    /// Explicit submit action, only honoured at the message stage
    pub fn submit(&mut self) -> Option<Submission> {
        if self.stage != Stage::Message {
            return None;
        }
        Some(self.take_submission())
    }

    fn take_submission(&mut self) -> Submission {
        let submission = Submission {
            name: std::mem::take(&mut self.name),
            email: std::mem::take(&mut self.email),
            message: std::mem::take(&mut self.message),
            submitted_at: Local::now(),
        };
        self.stage = Stage::Name;
        submission
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(form: &mut ContactForm, s: &str) {
        for c in s.chars() {
            form.insert_char(c);
        }
    }

    #[test]
    fn test_commit_name_moves_to_email_and_keeps_name() {
        let mut form = ContactForm::new();
        type_str(&mut form, "Jane");
        assert!(form.commit().is_none());

        assert_eq!(form.stage(), Stage::Email);
        assert_eq!(form.field(Stage::Name), "Jane");
        assert!(form.is_editable(Stage::Email));
        assert!(!form.is_editable(Stage::Name));
    }

    #[test]
    fn test_stage_sequence_wraps_after_submit() {
        let mut form = ContactForm::new();
        let mut seen = vec![form.stage()];
        for _ in 0..3 {
            form.commit();
            seen.push(form.stage());
        }
        assert_eq!(
            seen,
            vec![Stage::Name, Stage::Email, Stage::Message, Stage::Name]
        );
    }

    #[test]
    fn test_submit_clears_fields() {
        let mut form = ContactForm::new();
        type_str(&mut form, "Jane");
        form.commit();
        type_str(&mut form, "jane@example.com");
        form.commit();
        type_str(&mut form, "Hello there");

        let submission = form.commit().expect("message stage submits");
        assert_eq!(submission.name, "Jane");
        assert_eq!(submission.email, "jane@example.com");
        assert_eq!(submission.message, "Hello there");

        assert_eq!(form.stage(), Stage::Name);
        for stage in Stage::all() {
            assert_eq!(form.field(stage), "");
        }
    }

    #[test]
    fn test_explicit_submit_only_at_message_stage() {
        let mut form = ContactForm::new();
        type_str(&mut form, "Jane");
        assert!(form.submit().is_none());
        assert_eq!(form.stage(), Stage::Name);
        assert_eq!(form.field(Stage::Name), "Jane");

        form.commit();
        form.commit();
        let submission = form.submit().expect("submit at message stage");
        assert_eq!(submission.name, "Jane");
        assert_eq!(form.stage(), Stage::Name);
    }

    #[test]
    fn test_input_only_edits_active_field() {
        let mut form = ContactForm::new();
        type_str(&mut form, "Jo");
        form.commit();
        type_str(&mut form, "a@b");
        form.backspace();
        form.backspace();
        form.backspace();
        form.backspace();

        assert_eq!(form.field(Stage::Name), "Jo");
        assert_eq!(form.field(Stage::Email), "");
    }

    #[test]
    fn test_control_chars_ignored() {
        let mut form = ContactForm::new();
        form.insert_char('\n');
        form.insert_char('\t');
        assert_eq!(form.field(Stage::Name), "");
    }

    #[test]
    fn test_visibility_follows_stage() {
        let mut form = ContactForm::new();
        assert!(form.is_visible(Stage::Name));
        assert!(!form.is_visible(Stage::Email));
        form.commit();
        assert!(form.is_visible(Stage::Email));
        assert!(!form.is_visible(Stage::Message));
        form.commit();
        assert!(form.is_visible(Stage::Message));
    }
}
