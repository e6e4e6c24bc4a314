//! Form state and client-side validation
//!
//! Forms hold raw user input and turn it into a request payload. Validation
//! checks every field and reports all failures at once; a form that fails
//! validation never produces a payload, so no request can be issued.

mod organization;
mod rows;
mod user;

use std::fmt;

use crate::client::models::Facility;

pub use organization::{FacilityRow, OrganizationForm};
pub use rows::{RowError, RowList};
pub use user::{UserEditForm, UserForm};

/// A form that validates into payload `P`.
pub trait Form<P> {
    /// Validate the current input and build the payload.
    fn validate(&self) -> Result<P, FieldErrors>;

    /// Return to the initial state.
    fn reset(&mut self);

    /// Provide the facility catalogue for selection fields.
    fn set_catalog(&mut self, _catalog: Vec<Facility>) {}
}

/// One failing field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field path, e.g. `name` or `facilities.0.name`
    pub field: String,
    pub message: String,
}

/// Every failing field of one validation pass, in form order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// First message reported against `field`.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn messages(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.message.as_str()).collect()
    }

    /// `Ok(value)` when nothing failed.
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {}: {}", error.field, error.message)?;
        }
        Ok(())
    }
}

/// Check a trimmed email: one `@`, non-empty local part, dotted domain.
pub(crate) fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

/// Validate the email field shared by both user forms.
pub(crate) fn check_email(raw: &str, errors: &mut FieldErrors) -> String {
    let email = raw.trim();
    if email.is_empty() {
        errors.push("email", "Email is required");
    } else if !is_valid_email(email) {
        errors.push("email", "Invalid email format");
    }
    email.to_string()
}
