//! Domain models that mirror the `customers` table. These stay plain data
//! holders so the form and the persistence layer can pass them around without
//! dragging presentation concerns along.

use std::fmt;
use std::str::FromStr;

/// Preferred way of reaching a customer. Stored in SQLite as its label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactMethod {
    #[default]
    Email,
    Phone,
    Mail,
}

impl ContactMethod {
    /// Every option, in the order the selector shows them.
    pub const ALL: [ContactMethod; 3] = [
        ContactMethod::Email,
        ContactMethod::Phone,
        ContactMethod::Mail,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactMethod::Email => "Email",
            ContactMethod::Phone => "Phone",
            ContactMethod::Mail => "Mail",
        }
    }

    /// Advance the read-only selector, wrapping after `Mail`.
    pub fn next(self) -> Self {
        match self {
            ContactMethod::Email => ContactMethod::Phone,
            ContactMethod::Phone => ContactMethod::Mail,
            ContactMethod::Mail => ContactMethod::Email,
        }
    }

    /// Step the selector backwards, wrapping before `Email`.
    pub fn previous(self) -> Self {
        match self {
            ContactMethod::Email => ContactMethod::Mail,
            ContactMethod::Phone => ContactMethod::Email,
            ContactMethod::Mail => ContactMethod::Phone,
        }
    }
}

impl fmt::Display for ContactMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a stored label is not one of the three known methods.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown contact method: {0}")]
pub struct UnknownContactMethod(pub String);

impl FromStr for ContactMethod {
    type Err = UnknownContactMethod;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ContactMethod::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownContactMethod(value.to_string()))
    }
}

/// A submission that already passed validation. Every text value is trimmed,
/// `name` is non-empty and `email` matches the accepted pattern. The only way
/// to obtain one is [`crate::validation::validate_submission`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub(crate) name: String,
    pub(crate) birthday: String,
    pub(crate) email: String,
    pub(crate) phone: String,
    pub(crate) address: String,
    pub(crate) contact_method: ContactMethod,
}

impl NewCustomer {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birthday(&self) -> &str {
        &self.birthday
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn contact_method(&self) -> ContactMethod {
        self.contact_method
    }
}

/// A row as it exists in the `customers` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    /// Primary key assigned by SQLite on insert.
    pub id: i64,
    pub name: String,
    pub birthday: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub contact_method: ContactMethod,
}

impl Customer {
    /// Attach the freshly assigned id to the values that were just written.
    pub(crate) fn from_new(id: i64, record: &NewCustomer) -> Self {
        Self {
            id,
            name: record.name.clone(),
            birthday: record.birthday.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            address: record.address.clone(),
            contact_method: record.contact_method,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_method_defaults_to_email() {
        assert_eq!(ContactMethod::default(), ContactMethod::Email);
    }

    #[test]
    fn contact_method_cycles_both_ways() {
        let mut method = ContactMethod::Email;
        for _ in 0..ContactMethod::ALL.len() {
            method = method.next();
        }
        assert_eq!(method, ContactMethod::Email);
        assert_eq!(ContactMethod::Email.previous(), ContactMethod::Mail);
        assert_eq!(ContactMethod::Mail.next(), ContactMethod::Email);
    }

    #[test]
    fn contact_method_parses_stored_labels() {
        assert_eq!("Phone".parse::<ContactMethod>(), Ok(ContactMethod::Phone));
        assert_eq!(" mail ".parse::<ContactMethod>(), Ok(ContactMethod::Mail));
        assert!("Fax".parse::<ContactMethod>().is_err());
    }
}
