use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::dentist::{Dentist, NewDentist, UpdateDentist};
use crate::forms::{
    invalid, optional, validate_optional_email, validate_person_name, validate_phone,
};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
/// Form data behind the "Novo Dentista" dialog.
pub struct DentistForm {
    #[validate(custom(function = "validate_person_name"))]
    pub name: String,
    /// Regional dentistry council registration, e.g. `CRO-SP 12345`.
    #[validate(custom(function = "validate_cro"))]
    pub cro: String,
    #[serde(default)]
    #[validate(length(max = 100, message = "Especialidade deve ter no máximo 100 caracteres"))]
    pub specialty: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
    #[serde(default)]
    #[validate(custom(function = "validate_optional_email"))]
    pub email: String,
}

fn validate_cro(value: &str) -> Result<(), ValidationError> {
    match value.chars().count() {
        0..=2 => Err(invalid("cro_too_short", "CRO deve ter no mínimo 3 caracteres")),
        3..=20 => Ok(()),
        _ => Err(invalid("cro_too_long", "CRO inválido")),
    }
}

impl DentistForm {
    pub fn from_dentist(dentist: &Dentist) -> Self {
        Self {
            name: dentist.name.clone(),
            cro: dentist.cro.clone(),
            specialty: dentist.specialty.clone().unwrap_or_default(),
            phone: dentist.phone.clone(),
            email: dentist.email.clone().unwrap_or_default(),
        }
    }

    pub fn to_new_dentist(&self) -> NewDentist {
        NewDentist::new(
            self.name.clone(),
            self.cro.clone(),
            self.phone.clone(),
            optional(&self.specialty),
            optional(&self.email),
        )
    }

    pub fn to_update_dentist(&self) -> UpdateDentist {
        let new_dentist = self.to_new_dentist();
        UpdateDentist {
            name: Some(new_dentist.name),
            cro: Some(new_dentist.cro),
            specialty: new_dentist.specialty,
            phone: Some(new_dentist.phone),
            email: new_dentist.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FieldErrors;
    use serde_json::json;

    #[test]
    fn maps_to_wire_payload() {
        let form = DentistForm {
            name: "Carlos Eduardo".into(),
            cro: "cro-sp 12345".into(),
            specialty: "Ortodontia".into(),
            phone: "11987654321".into(),
            email: String::new(),
        };
        assert!(form.validate().is_ok());

        let payload = serde_json::to_value(form.to_new_dentist()).unwrap();
        assert_eq!(payload["nome"], json!("Carlos Eduardo"));
        assert_eq!(payload["cro"], json!("CRO-SP 12345"));
        assert_eq!(payload["especialidade"], json!("Ortodontia"));
        assert!(payload.get("email").is_none());
    }

    #[test]
    fn cro_bounds() {
        let base = DentistForm {
            name: "Carlos".into(),
            phone: "11987654321".into(),
            ..Default::default()
        };

        let short = DentistForm {
            cro: "12".into(),
            ..base.clone()
        };
        let fields = FieldErrors::from(&short.validate().unwrap_err());
        assert_eq!(fields.get("cro"), Some("CRO deve ter no mínimo 3 caracteres"));

        let long = DentistForm {
            cro: "1".repeat(21),
            ..base
        };
        let fields = FieldErrors::from(&long.validate().unwrap_err());
        assert_eq!(fields.get("cro"), Some("CRO inválido"));
    }
}
