//! Value objects shared by the resource records and forms.
//!
//! Identifiers are positive and tolerate the backend's numeric strings; text
//! wrappers are trimmed (and sanitised or normalised where noted) on construction.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use phonenumber::{Mode, country, parse};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use uuid::Uuid;
use validator::ValidateEmail;

/// Why a value object refused its input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    #[error("id must be greater than zero")]
    NonPositiveId,
    #[error("id must be an integer")]
    InvalidId,
    #[error("invalid email address")]
    InvalidEmail,
    /// Blank after trimming.
    #[error("value cannot be empty")]
    EmptyString,
    #[error("invalid value: {0}")]
    InvalidValue(String),
    #[error("invalid phone number")]
    InvalidPhone,
}

fn normalize_email(email: String) -> Result<String, TypeConstraintError> {
    let normalized = email.trim().to_lowercase();
    if normalized.validate_email() {
        Ok(normalized)
    } else {
        Err(TypeConstraintError::InvalidEmail)
    }
}

/// Identifier as it may appear on the wire: the backend sends both `7` and `"7"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl RawId {
    fn into_i64(self) -> Result<i64, TypeConstraintError> {
        match self {
            RawId::Number(value) => Ok(value),
            RawId::Text(text) => text
                .trim()
                .parse::<i64>()
                .map_err(|_| TypeConstraintError::InvalidId),
        }
    }
}

/// Positive integer id, serialised as a plain number.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(i64);

        impl $name {
            /// Rejects zero and negative values.
            pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i64` backing this identifier.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = TypeConstraintError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                RawId::Text(s.to_string()).into_i64().and_then(Self::new)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let raw = RawId::deserialize(deserializer)?;
                raw.into_i64()
                    .and_then(Self::new)
                    .map_err(serde::de::Error::custom)
            }
        }
    };
}

id_newtype!(PatientId, "Unique identifier for a patient.");
id_newtype!(DentistId, "Unique identifier for a dentist.");
id_newtype!(AppointmentId, "Unique identifier for an appointment.");
id_newtype!(TemplateId, "Unique identifier for a notification template.");
id_newtype!(NotificationLogId, "Unique identifier for a notification log entry.");

/// Trims `value`, rejecting blank input.
fn non_empty(value: impl Into<String>) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString)
    } else {
        Ok(trimmed)
    }
}

/// Text wrappers built through a checking constructor and read back as `&str`.
macro_rules! text_newtype {
    ($(#[$meta:meta])* $name:ident, $check:expr) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Result<Self, TypeConstraintError> {
                let check: fn(String) -> Result<String, TypeConstraintError> = $check;
                check(value.into()).map(Self)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

text_newtype!(
    /// Lower-cased, validated email address.
    ContactEmail,
    normalize_email
);

text_newtype!(
    /// Health plan label offered in the patient form.
    PlanName,
    non_empty
);

text_newtype!(
    /// Support ticket subject line.
    TicketSubject,
    non_empty
);

text_newtype!(
    /// Support ticket body with markup sanitised away.
    TicketDescription,
    |value| non_empty(ammonia::clean(&value))
);

/// Returns only the ASCII digits contained in `value`.
pub fn phone_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Applies the progressive `(DD) DDDDD-DDDD` mask to up to eleven digits.
pub fn format_phone(value: &str) -> String {
    let digits: String = phone_digits(value).chars().take(11).collect();
    match digits.len() {
        0 => String::new(),
        1..=2 => format!("({digits}"),
        3..=7 => format!("({}) {}", &digits[..2], &digits[2..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}

/// Loose email check used by the password recovery screen.
pub fn is_email_valid(value: &str) -> bool {
    !value.is_empty() && value.contains('@')
}

/// Normalizes a Brazilian phone number string to E.164 format.
pub fn normalize_phone_to_e164(value: &str) -> Result<String, TypeConstraintError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    let parsed =
        parse(Some(country::Id::BR), trimmed).map_err(|_| TypeConstraintError::InvalidPhone)?;
    Ok(parsed.format().mode(Mode::E164).to_string())
}

text_newtype!(
    /// Contact phone normalised to E.164.
    PhoneNumber,
    |value| normalize_phone_to_e164(&value)
);

/// Identifier of a locally stored support ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketId(Uuid);

impl TicketId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for TicketId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for TicketId {
    fn default() -> Self {
        Self::new()
    }
}
