use std::{fmt, time::Duration};
use thiserror::Error;

/// Stand-in for a real delivery round trip.
pub const SIMULATED_SEND_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

fn field_list(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.id())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Required fields are empty: {}", field_list(.0))]
    MissingFields(Vec<Field>),
    #[error("A message is already being sent")]
    Busy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Whitespace-only input counts as empty.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ContactError::MissingFields(missing))
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
}

/// Toast shown once a message has gone out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
}

impl Notice {
    pub const SENT: Notice = Notice {
        title: "Message Sent! 🚀",
        description: "Thank you for reaching out. I'll get back to you soon!",
    };
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub draft: ContactDraft,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    pub fn begin_submit(&mut self) -> Result<(), ContactError> {
        if self.is_sending() {
            return Err(ContactError::Busy);
        }
        self.draft.validate()?;
        self.status = SubmitStatus::Sending;
        Ok(())
    }

    /// Completes an in-flight submission, resetting every field.
    pub fn finish_submit(&mut self) -> Option<Notice> {
        if !self.is_sending() {
            return None;
        }
        self.draft.clear();
        self.status = SubmitStatus::Idle;
        Some(Notice::SENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.draft.set(Field::Name, "Jane");
        form.draft.set(Field::Email, "jane@x.com");
        form.draft.set(Field::Message, "Hello");
        form
    }

    #[test]
    fn empty_form_reports_every_field() {
        let mut form = ContactForm::default();
        assert_eq!(
            form.begin_submit(),
            Err(ContactError::MissingFields(Field::ALL.to_vec()))
        );
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn any_missing_field_blocks_submission() {
        for field in Field::ALL {
            let mut form = filled();
            form.draft.set(field, "");
            assert_eq!(
                form.begin_submit(),
                Err(ContactError::MissingFields(vec![field]))
            );
            assert!(!form.is_sending());
        }
    }

    #[test]
    fn whitespace_counts_as_empty() {
        let mut form = filled();
        form.draft.set(Field::Message, "   \n");
        assert_eq!(form.draft.missing_fields(), vec![Field::Message]);
    }

    #[test]
    fn successful_submission_resets_fields() {
        let mut form = filled();
        assert_eq!(form.begin_submit(), Ok(()));
        assert!(form.is_sending());
        assert_eq!(form.draft.get(Field::Name), "Jane");

        let notice = form.finish_submit().expect("should produce a notice");
        assert_eq!(notice.title, "Message Sent! 🚀");
        assert_eq!(form.draft, ContactDraft::default());
        assert_eq!(form.draft.name, "");
        assert_eq!(form.draft.email, "");
        assert_eq!(form.draft.message, "");
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn second_submit_while_sending_is_busy() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(ContactError::Busy));
    }

    #[test]
    fn finish_without_begin_does_nothing() {
        let mut form = filled();
        assert_eq!(form.finish_submit(), None);
        assert_eq!(form.draft.name, "Jane");
    }

    #[test]
    fn missing_fields_error_lists_ids() {
        let err = ContactError::MissingFields(vec![Field::Name, Field::Message]);
        assert_eq!(err.to_string(), "Required fields are empty: name, message");
    }
}
