//! Page-level operations over the repository traits.
//!
//! Every function is generic over the traits it needs so pages can run against
//! the REST repository and tests against `MockRepository`.

use thiserror::Error;

use crate::forms::{FieldErrors, FormError};
use crate::repository::errors::RepositoryError;

pub mod appointments;
pub mod auth;
pub mod dashboard;
pub mod dentists;
pub mod notifications;
pub mod patients;
pub mod settings;
pub mod support;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// 401/403; carries the backend's message when it sent one.
    #[error("unauthorized")]
    Unauthorized(Option<String>),

    #[error("not found")]
    NotFound,

    #[error("form error: {0}")]
    Form(String),

    #[error("validation failed")]
    Validation(FieldErrors),

    #[error("type constraint violation: {0}")]
    TypeConstraint(String),

    #[error("backend error: {0}")]
    Backend(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// Text for the error toast: the backend's own message when it sent one,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ServiceError::Backend(err) => err.detail().unwrap_or(fallback).to_string(),
            ServiceError::Form(message) => message.clone(),
            ServiceError::Validation(errors) => errors.first().unwrap_or(fallback).to_string(),
            ServiceError::Unauthorized(detail) => detail
                .as_deref()
                .unwrap_or("Sessão expirada. Faça login novamente.")
                .to_string(),
            ServiceError::NotFound | ServiceError::TypeConstraint(_) => fallback.to_string(),
        }
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::Unauthorized { detail } => ServiceError::Unauthorized(detail),
            other => ServiceError::Backend(other),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::Validation(errors) => ServiceError::Validation(FieldErrors::from(&errors)),
            other => ServiceError::Form(other.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ServiceError::Validation(FieldErrors::from(&errors))
    }
}
