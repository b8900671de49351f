//! Create/edit dialog state.

use std::future::Future;

use crate::forms::FieldErrors;
use crate::services::{ServiceError, ServiceResult};

/// Result of [`FormDialog::submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<T> {
    Saved(T),
    /// Dialog stays open; carries the message to show.
    Failed(String),
}

/// Holds the form of one modal dialog between open and a successful submit.
#[derive(Debug, Clone)]
pub struct FormDialog<F> {
    form: F,
    open: bool,
    submitting: bool,
    field_errors: FieldErrors,
    error: Option<String>,
    error_fallback: &'static str,
}

impl<F: Default + Clone> FormDialog<F> {
    /// `error_fallback` is shown when a failure carries no backend message.
    pub fn new(error_fallback: &'static str) -> Self {
        Self {
            form: F::default(),
            open: false,
            submitting: false,
            field_errors: FieldErrors::new(),
            error: None,
            error_fallback,
        }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Opens prefilled, for editing.
    pub fn open_with(&mut self, form: F) {
        self.form = form;
        self.field_errors = FieldErrors::new();
        self.error = None;
        self.open = true;
    }

    /// Hides the dialog; typed data survives until the next successful submit.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Sends the form through `send`.
    ///
    /// On success the form is reset, the dialog closes and `refresh` runs with
    /// the saved value. On failure nothing is reset: field errors are shown
    /// inline and the message is kept for the toast.
    pub async fn submit<T, S, Fut, R>(&mut self, send: S, refresh: R) -> SubmitOutcome<T>
    where
        T: Clone,
        S: FnOnce(F) -> Fut,
        Fut: Future<Output = ServiceResult<T>>,
        R: FnOnce(&T),
    {
        self.submitting = true;
        let result = send(self.form.clone()).await;
        self.submitting = false;

        match result {
            Ok(saved) => {
                self.form = F::default();
                self.field_errors = FieldErrors::new();
                self.error = None;
                self.open = false;
                refresh(&saved);
                SubmitOutcome::Saved(saved)
            }
            Err(err) => {
                let message = err.user_message(self.error_fallback);
                if let ServiceError::Validation(fields) = err {
                    self.field_errors = fields;
                } else {
                    log::error!("Dialog submit failed: {err}");
                    self.field_errors = FieldErrors::new();
                }
                self.error = Some(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }
}
