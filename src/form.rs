//! The customer form: one named slot per input, focus tracking, and the submit
//! flow that validates, persists and resets.

use tracing::{error, warn};

use crate::db::RecordStore;
use crate::models::ContactMethod;
use crate::validation::{validate_submission, RawSubmission};

/// Inputs in the order focus moves through them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Birthday,
    Email,
    Phone,
    Address,
    ContactMethod,
    Submit,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::Name,
        FormField::Birthday,
        FormField::Email,
        FormField::Phone,
        FormField::Address,
        FormField::ContactMethod,
        FormField::Submit,
    ];

    /// Caption rendered to the left of the input.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Birthday => "Birthday (YYYY-MM-DD)",
            FormField::Email => "Email",
            FormField::Phone => "Phone Number",
            FormField::Address => "Address",
            FormField::ContactMethod => "Preferred Contact Method",
            FormField::Submit => "Submit",
        }
    }

    /// Whether typed characters land in this field.
    pub fn is_text(self) -> bool {
        !matches!(self, FormField::ContactMethod | FormField::Submit)
    }

    pub fn is_required(self) -> bool {
        matches!(self, FormField::Name | FormField::Email)
    }

    fn index(self) -> usize {
        FormField::ALL
            .iter()
            .position(|field| *field == self)
            .unwrap_or(0)
    }

    fn next(self) -> Self {
        FormField::ALL[(self.index() + 1) % FormField::ALL.len()]
    }

    fn previous(self) -> Self {
        let len = FormField::ALL.len();
        FormField::ALL[(self.index() + len - 1) % len]
    }
}

/// Severity of a notice; decides its colour in the terminal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Modal message shown after every submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, title, message)
    }

    fn new(level: NoticeLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Field values plus focus. Nothing here is trimmed; trimming happens when
/// the values are validated for storage.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CustomerForm {
    pub name: String,
    pub birthday: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub contact_method: ContactMethod,
    pub active: FormField,
}

impl CustomerForm {
    pub fn focus(&mut self, field: FormField) {
        self.active = field;
    }

    pub fn focus_next(&mut self) {
        self.active = self.active.next();
    }

    pub fn focus_previous(&mut self) {
        self.active = self.active.previous();
    }

    /// Append a character to the focused text input. Control characters and
    /// non-text focus targets are ignored.
    pub fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self.value_mut(self.active) {
            Some(value) => {
                value.push(ch);
                true
            }
            None => false,
        }
    }

    pub fn backspace(&mut self) {
        if let Some(value) = self.value_mut(self.active) {
            value.pop();
        }
    }

    /// Rotate the read-only contact method selector.
    pub fn cycle_contact_method(&mut self, forward: bool) {
        self.contact_method = if forward {
            self.contact_method.next()
        } else {
            self.contact_method.previous()
        };
    }

    /// Empty every text input, reset the selector to Email and move focus back
    /// to the first field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Current text of a field. The selector and the button have no text.
    pub fn value(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Name => Some(&self.name),
            FormField::Birthday => Some(&self.birthday),
            FormField::Email => Some(&self.email),
            FormField::Phone => Some(&self.phone),
            FormField::Address => Some(&self.address),
            FormField::ContactMethod | FormField::Submit => None,
        }
    }

    fn value_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Birthday => Some(&mut self.birthday),
            FormField::Email => Some(&mut self.email),
            FormField::Phone => Some(&mut self.phone),
            FormField::Address => Some(&mut self.address),
            FormField::ContactMethod | FormField::Submit => None,
        }
    }

    /// Validate the current values and, if they pass, write one row.
    ///
    /// On success the form is cleared. On any failure the values stay exactly
    /// as typed so the user can correct them or simply submit again.
    pub fn submit(&mut self, store: &RecordStore) -> Notice {
        let validated = validate_submission(RawSubmission {
            name: &self.name,
            birthday: &self.birthday,
            email: &self.email,
            phone: &self.phone,
            address: &self.address,
            contact_method: self.contact_method,
        });

        let record = match validated {
            Ok(record) => record,
            Err(err) => {
                warn!(reason = %err, "submission rejected");
                return Notice::warning("Validation Error", err.to_string());
            }
        };

        match store.insert(&record) {
            Ok(_) => {
                self.clear();
                Notice::info("Success", "Customer information saved successfully!")
            }
            Err(err) => {
                error!(error = %err, "failed to save customer");
                Notice::error("Database Error", format!("Failed to save data: {err}"))
            }
        }
    }
}
