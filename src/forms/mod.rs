//! Validated input behind the create/edit dialogs.
//!
//! Each form derives [`validator::Validate`] with Portuguese messages and knows
//! how to turn itself into the wire payload of its resource.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

pub mod appointment;
pub mod auth;
pub mod dentist;
pub mod notification;
pub mod patient;
pub mod support;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid patient id")]
    InvalidPatientId,

    #[error("invalid dentist id")]
    InvalidDentistId,

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("invalid phone number")]
    InvalidPhoneNumber,

    #[error("invalid value")]
    InvalidValue,
}

/// First validation message of every failing field, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` unless the field already has one.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn first(&self) -> Option<&str> {
        self.0.values().next().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut fields = FieldErrors::new();
        for (field, errors) in errors.field_errors() {
            if let Some(error) = errors.first() {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                fields.insert(field.to_string(), message);
            }
        }
        fields
    }
}

static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-ZÀ-ÿ\s]+$").expect("valid name regex"));

static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\([0-9]{2}\)\s?[0-9]{4,5}-?[0-9]{4}$|^[0-9]{10,11}$").expect("valid phone regex")
});

/// Builds a validation error carrying a user-facing message.
pub(crate) fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// 3 to 100 characters, letters (accented included) and spaces only.
pub(crate) fn validate_person_name(value: &str) -> Result<(), ValidationError> {
    let length = value.chars().count();
    if length < 3 {
        return Err(invalid("name_too_short", "Nome deve ter no mínimo 3 caracteres"));
    }
    if length > 100 {
        return Err(invalid("name_too_long", "Nome deve ter no máximo 100 caracteres"));
    }
    if !NAME_REGEX.is_match(value) {
        return Err(invalid("name_letters", "Nome deve conter apenas letras"));
    }
    Ok(())
}

/// `(DD) DDDD(D)-DDDD` or 10 to 11 bare digits, 10 to 15 characters overall.
pub(crate) fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let length = value.chars().count();
    if length < 10 {
        return Err(invalid(
            "phone_too_short",
            "Telefone deve ter no mínimo 10 dígitos",
        ));
    }
    if length > 15 {
        return Err(invalid("phone_too_long", "Telefone inválido"));
    }
    if !PHONE_REGEX.is_match(value) {
        return Err(invalid("phone_format", "Formato de telefone inválido"));
    }
    Ok(())
}

/// Empty is accepted; anything else must be a valid address.
pub(crate) fn validate_optional_email(value: &str) -> Result<(), ValidationError> {
    use validator::ValidateEmail;

    if value.trim().is_empty() || value.trim().validate_email() {
        Ok(())
    } else {
        Err(invalid("email", "Email inválido"))
    }
}

/// Trims the value and maps blank strings to `None`.
pub(crate) fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
