//! Login, registration and password flows on top of the session store.

use validator::Validate;

use crate::domain::auth::{AuthResponse, SessionUser};
use crate::forms::auth::{ChangePasswordForm, ForgotPasswordForm, LoginForm, RegisterForm};
use crate::repository::AuthGateway;
use crate::repository::errors::RepositoryError;
use crate::services::{ServiceError, ServiceResult};
use crate::session::Session;

const BAD_CREDENTIALS: &str = "Usuário ou senha incorretos";
const BAD_CURRENT_PASSWORD: &str = "Senha atual incorreta";

/// A rejected credential is not an expired session: 401/403 keep the
/// backend's message, or `message` when it sent none.
fn credentials_rejected(err: RepositoryError, message: &str) -> ServiceError {
    match err {
        RepositoryError::Unauthorized { detail } => {
            ServiceError::Unauthorized(Some(detail.unwrap_or_else(|| message.to_string())))
        }
        other => ServiceError::from(other),
    }
}

/// Signs in and keeps the token and display user in the session.
pub async fn login<R>(repo: &R, session: &Session, form: &LoginForm) -> ServiceResult<SessionUser>
where
    R: AuthGateway + ?Sized,
{
    form.validate()?;

    let response: AuthResponse = repo.login(&form.to_request()).await.map_err(|err| {
        log::error!("Login failed: {err}");
        credentials_rejected(err, BAD_CREDENTIALS)
    })?;
    session.sign_in(&response);
    Ok(SessionUser::from(&response))
}

pub async fn register<R>(
    repo: &R,
    session: &Session,
    form: &RegisterForm,
) -> ServiceResult<SessionUser>
where
    R: AuthGateway + ?Sized,
{
    form.validate()?;

    let response = repo.register(&form.to_request()).await.map_err(|err| {
        log::error!("Registration failed: {err}");
        ServiceError::from(err)
    })?;
    session.sign_in(&response);
    Ok(SessionUser::from(&response))
}

pub fn logout(session: &Session) {
    session.sign_out();
}

pub async fn forgot_password<R>(repo: &R, form: &ForgotPasswordForm) -> ServiceResult<()>
where
    R: AuthGateway + ?Sized,
{
    form.validate()?;

    repo.forgot_password(form.email.trim()).await.map_err(|err| {
        log::error!("Failed to request password recovery: {err}");
        ServiceError::from(err)
    })
}

pub async fn change_password<R>(repo: &R, form: &ChangePasswordForm) -> ServiceResult<()>
where
    R: AuthGateway + ?Sized,
{
    form.validate_all()?;

    repo.change_password(&form.to_request()).await.map_err(|err| {
        log::error!("Failed to change password: {err}");
        credentials_rejected(err, BAD_CURRENT_PASSWORD)
    })
}
