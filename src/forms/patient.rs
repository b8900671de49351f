use serde::Deserialize;
use validator::Validate;

use crate::domain::patient::{NewPatient, Patient, UpdatePatient};
use crate::forms::{optional, validate_optional_email, validate_person_name, validate_phone};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
/// Form data behind the "Novo Paciente" dialog.
pub struct PatientForm {
    #[validate(custom(function = "validate_person_name"))]
    pub name: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
    #[serde(default)]
    #[validate(custom(function = "validate_optional_email"))]
    pub email: String,
    #[serde(default)]
    pub birth_date: String,
    /// "Particular" or one of the configured plans.
    #[serde(default)]
    pub care_type: String,
    #[serde(default)]
    #[validate(length(max = 500, message = "Observações devem ter no máximo 500 caracteres"))]
    pub notes: String,
}

impl PatientForm {
    /// Prefills the form for editing an existing patient.
    pub fn from_patient(patient: &Patient) -> Self {
        Self {
            name: patient.name.clone(),
            phone: patient.phone.clone(),
            email: patient.email.clone().unwrap_or_default(),
            birth_date: patient.birth_date.clone().unwrap_or_default(),
            care_type: patient.care_type.clone().unwrap_or_default(),
            notes: patient.notes.clone().unwrap_or_default(),
        }
    }

    pub fn to_new_patient(&self) -> NewPatient {
        NewPatient::new(
            self.name.clone(),
            self.phone.clone(),
            optional(&self.email),
            optional(&self.care_type),
            optional(&self.birth_date),
            optional(&self.notes),
        )
    }

    pub fn to_update_patient(&self) -> UpdatePatient {
        let new_patient = self.to_new_patient();
        UpdatePatient {
            name: Some(new_patient.name),
            care_type: new_patient.care_type,
            email: new_patient.email,
            phone: Some(new_patient.phone),
            birth_date: new_patient.birth_date,
            notes: new_patient.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FieldErrors;
    use serde_json::json;

    fn valid_form() -> PatientForm {
        PatientForm {
            name: "Maria Conceição".into(),
            phone: "(11) 98765-4321".into(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_form_maps_to_wire_keys() {
        let form = PatientForm {
            email: " Maria@Example.com ".into(),
            care_type: "Plano A".into(),
            ..valid_form()
        };
        assert!(form.validate().is_ok());

        let payload = serde_json::to_value(form.to_new_patient()).unwrap();
        assert_eq!(
            payload,
            json!({
                "nome": "Maria Conceição",
                "telefone": "(11) 98765-4321",
                "email": "maria@example.com",
                "tipoAtendimento": "Plano A"
            })
        );
    }

    #[test]
    fn invalid_fields_are_reported_inline() {
        let form = PatientForm {
            name: "M4ria".into(),
            phone: "123".into(),
            email: "not-an-email".into(),
            notes: "x".repeat(501),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        let fields = FieldErrors::from(&errors);

        assert_eq!(fields.get("name"), Some("Nome deve conter apenas letras"));
        assert_eq!(fields.get("phone"), Some("Telefone deve ter no mínimo 10 dígitos"));
        assert_eq!(fields.get("email"), Some("Email inválido"));
        assert_eq!(
            fields.get("notes"),
            Some("Observações devem ter no máximo 500 caracteres")
        );
        assert!(!fields.contains("birth_date"));
    }

    #[test]
    fn update_keeps_required_fields() {
        let update = valid_form().to_update_patient();
        assert_eq!(update.name.as_deref(), Some("Maria Conceição"));
        assert_eq!(update.phone.as_deref(), Some("(11) 98765-4321"));
        assert_eq!(update.email, None);
    }
}
