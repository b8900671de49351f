use serde::{Deserialize, Serialize};

use crate::domain::types::PatientId;

/// Patient record as returned by `/api/patients/`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    pub id: PatientId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(default)]
    pub cpf: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "telefone")]
    pub phone: String,
    /// Plan or private care, e.g. "Particular".
    #[serde(rename = "tipoAtendimento", default)]
    pub care_type: Option<String>,
    #[serde(rename = "dataNascimento", default)]
    pub birth_date: Option<String>,
    #[serde(rename = "observacoes", default)]
    pub notes: Option<String>,
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
pub struct NewPatient {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "tipoAtendimento", skip_serializing_if = "Option::is_none")]
    pub care_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "dataNascimento", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(rename = "observacoes", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewPatient {
    #[must_use]
    pub fn new(
        name: String,
        phone: String,
        email: Option<String>,
        care_type: Option<String>,
        birth_date: Option<String>,
        notes: Option<String>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
            email: clean_email(email),
            care_type: clean_optional(care_type),
            birth_date: clean_optional(birth_date),
            notes: clean_optional(notes),
        }
    }
}

/// Partial update; absent fields are left untouched by the backend.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct UpdatePatient {
    #[serde(rename = "nome", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "tipoAtendimento", skip_serializing_if = "Option::is_none")]
    pub care_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "telefone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "dataNascimento", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(rename = "observacoes", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Trims the value and drops it when nothing remains.
pub(crate) fn clean_optional(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

pub(crate) fn clean_email(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.to_lowercase().trim().to_string())
        .filter(|s| !s.is_empty())
}
