//! Session data handed out by the authentication endpoints.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserProfile {
    Admin,
    Atendente,
    Dentista,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub token: String,
    pub nome: String,
    pub perfil: UserProfile,
}

/// Display fields kept next to the token.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    pub nome: String,
    pub perfil: UserProfile,
}

impl From<&AuthResponse> for SessionUser {
    fn from(response: &AuthResponse) -> Self {
        Self {
            nome: response.nome.clone(),
            perfil: response.perfil,
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub perfil: UserProfile,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}
