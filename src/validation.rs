//! Input rules applied before anything reaches the `customers` table.
//!
//! All text is trimmed first; the checks then run against the trimmed values,
//! and the trimmed values are what gets stored.

use thiserror::Error;

use crate::models::{ContactMethod, NewCustomer};

/// Reasons a submission is turned away before touching the database.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name and Email are required fields.")]
    MissingRequired,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Raw, untrimmed values as typed into the form.
#[derive(Debug, Clone, Copy)]
pub struct RawSubmission<'a> {
    pub name: &'a str,
    pub birthday: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub address: &'a str,
    pub contact_method: ContactMethod,
}

/// Trim every text field, enforce the required fields and the email shape,
/// and hand back a record that is safe to insert.
pub fn validate_submission(raw: RawSubmission<'_>) -> Result<NewCustomer, ValidationError> {
    let name = raw.name.trim();
    let email = raw.email.trim();

    if name.is_empty() || email.is_empty() {
        return Err(ValidationError::MissingRequired);
    }

    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(NewCustomer {
        name: name.to_string(),
        birthday: raw.birthday.trim().to_string(),
        email: email.to_string(),
        phone: raw.phone.trim().to_string(),
        address: raw.address.trim().to_string(),
        contact_method: raw.contact_method,
    })
}

/// Simple `local-part@domain` check.
///
/// ## Rules
/// - local part: one or more ASCII letters, digits or `_ . + -`
/// - exactly one `@`
/// - first domain label: one or more ASCII letters, digits or `-`
/// - a `.` followed by one or more ASCII letters, digits, `-` or `.`
///
/// The first domain label cannot contain a dot, so it always ends at the first
/// `.` after the `@`.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((label, rest)) = domain.split_once('.') else {
        return false;
    };

    non_empty_all(local, |c| {
        c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '+' | '-')
    }) && non_empty_all(label, |c| c.is_ascii_alphanumeric() || c == '-')
        && non_empty_all(rest, |c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.'))
}

fn non_empty_all(value: &str, allowed: impl Fn(char) -> bool) -> bool {
    !value.is_empty() && value.chars().all(allowed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw<'a>(name: &'a str, email: &'a str) -> RawSubmission<'a> {
        RawSubmission {
            name,
            birthday: "",
            email,
            phone: "",
            address: "",
            contact_method: ContactMethod::Email,
        }
    }

    #[test]
    fn accepts_common_addresses() {
        for email in [
            "a@b.co",
            "john.doe+tag@example.org",
            "first_last-1@sub.example.co.uk",
            "x@my-host.io",
        ] {
            assert!(is_valid_email(email), "{email} should be accepted");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "no-at-sign.com",
            "a@b",
            "@example.com",
            "a@.com",
            "a@b.",
            "a@@b.com",
            "a@b@c.com",
            "jane doe@example.com",
            "jane@exa_mple.com",
            "jané@example.com",
            "",
        ] {
            assert!(!is_valid_email(email), "{email} should be rejected");
        }
    }

    #[test]
    fn blank_name_or_email_is_missing_required() {
        assert_eq!(
            validate_submission(raw("", "jane@example.com")),
            Err(ValidationError::MissingRequired)
        );
        assert_eq!(
            validate_submission(raw("Jane", "   ")),
            Err(ValidationError::MissingRequired)
        );
        assert_eq!(
            validate_submission(raw("  \t", "")),
            Err(ValidationError::MissingRequired)
        );
    }

    #[test]
    fn required_check_runs_before_email_shape() {
        assert_eq!(
            validate_submission(raw("", "not-an-email")),
            Err(ValidationError::MissingRequired)
        );
        assert_eq!(
            validate_submission(raw("Jane", "not-an-email")),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn stored_values_are_trimmed() {
        let record = validate_submission(RawSubmission {
            name: "  Jane Doe ",
            birthday: " 1990-01-01",
            email: " jane@example.com\t",
            phone: "555-1234  ",
            address: "  1 Main St  ",
            contact_method: ContactMethod::Mail,
        })
        .unwrap();

        assert_eq!(record.name(), "Jane Doe");
        assert_eq!(record.birthday(), "1990-01-01");
        assert_eq!(record.email(), "jane@example.com");
        assert_eq!(record.phone(), "555-1234");
        assert_eq!(record.address(), "1 Main St");
        assert_eq!(record.contact_method(), ContactMethod::Mail);
    }
}
