use serde::{Deserialize, Serialize};

use crate::domain::patient::{clean_email, clean_optional};
use crate::domain::types::DentistId;

/// Dentist record as returned by `/api/dentists/`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Dentist {
    pub id: DentistId,
    #[serde(rename = "nome")]
    pub name: String,
    /// Regional dental council registration number.
    pub cro: String,
    #[serde(rename = "especialidade", default)]
    pub specialty: Option<String>,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "ativo", default = "default_active")]
    pub active: bool,
    #[serde(rename = "criadoEm", default)]
    pub created_at: String,
    #[serde(rename = "atualizadoEm", default)]
    pub updated_at: String,
}

fn default_active() -> bool {
    true
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NewDentist {
    #[serde(rename = "nome")]
    pub name: String,
    pub cro: String,
    #[serde(rename = "especialidade", skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl NewDentist {
    #[must_use]
    pub fn new(
        name: String,
        cro: String,
        phone: String,
        specialty: Option<String>,
        email: Option<String>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            cro: cro.trim().to_uppercase(),
            phone: phone.trim().to_string(),
            specialty: clean_optional(specialty),
            email: clean_email(email),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct UpdateDentist {
    #[serde(rename = "nome", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cro: Option<String>,
    #[serde(rename = "especialidade", skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    #[serde(rename = "telefone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
