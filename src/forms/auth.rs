//! Login, registration and password forms.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::auth::{ChangePasswordRequest, LoginRequest, RegisterRequest, UserProfile};
use crate::domain::types::is_email_valid;
use crate::forms::{invalid, validate_person_name};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(email(message = "Email inválido"))]
    pub email: String,
    #[validate(length(min = 1, message = "Senha é obrigatória"))]
    pub password: String,
}

impl LoginForm {
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.trim().to_lowercase(),
            senha: self.password.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterForm {
    #[validate(custom(function = "validate_person_name"))]
    pub name: String,
    #[validate(email(message = "Email inválido"))]
    pub email: String,
    #[validate(length(min = 6, message = "Senha deve ter no mínimo 6 caracteres"))]
    pub password: String,
    pub profile: UserProfile,
}

impl RegisterForm {
    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            nome: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            senha: self.password.clone(),
            perfil: self.profile,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ForgotPasswordForm {
    #[validate(custom(function = "validate_recovery_email"))]
    pub email: String,
}

fn validate_recovery_email(value: &str) -> Result<(), ValidationError> {
    if is_email_valid(value.trim()) {
        Ok(())
    } else {
        Err(invalid("email", "Informe um email válido."))
    }
}

/// Password strength as shown by the meter under the new-password input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum PasswordStrength {
    Fraca,
    Media,
    Forte,
}

impl PasswordStrength {
    /// Scores length and character classes; anything under 6 characters is weak.
    pub fn of(password: &str) -> Self {
        let length = password.chars().count();
        if length < 6 {
            return PasswordStrength::Fraca;
        }

        let has_lower = password.chars().any(char::is_lowercase);
        let has_upper = password.chars().any(char::is_uppercase);
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        let has_symbol = password.chars().any(|c| !c.is_alphanumeric());

        let score = [length >= 8, has_lower && has_upper, has_digit, has_symbol]
            .into_iter()
            .filter(|passed| *passed)
            .count();

        match score {
            0 | 1 => PasswordStrength::Fraca,
            2 | 3 => PasswordStrength::Media,
            _ => PasswordStrength::Forte,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PasswordStrength::Fraca => "Fraca",
            PasswordStrength::Media => "Média",
            PasswordStrength::Forte => "Forte",
        }
    }
}

impl Display for PasswordStrength {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ChangePasswordForm {
    #[validate(length(min = 1, message = "Senha atual é obrigatória"))]
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl ChangePasswordForm {
    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::of(&self.new_password)
    }

    /// Field rules plus the cross-field ones: strength and confirmation.
    pub fn validate_all(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        if self.strength() < PasswordStrength::Media {
            errors.add(
                "new_password",
                invalid("weak_password", "Senha muito fraca"),
            );
        }
        if self.new_password != self.confirm_password {
            errors.add(
                "confirm_password",
                invalid("password_mismatch", "As senhas não coincidem"),
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn to_request(&self) -> ChangePasswordRequest {
        ChangePasswordRequest {
            old_password: self.current_password.clone(),
            new_password: self.new_password.clone(),
        }
    }
}
