use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::appointment::{Appointment, NewAppointment, UpdateAppointment};
use crate::domain::types::{DentistId, PatientId};
use crate::forms::{FormError, invalid, optional};

/// `datetime-local` input format.
pub const DATETIME_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

pub const DEFAULT_DURATION_MINUTES: u32 = 30;

#[derive(Debug, Clone, Deserialize, Validate)]
/// Form data behind the "Nova Consulta" dialog.
///
/// Ids arrive as the string values of the select inputs and are converted to
/// integers only when the payload is built.
pub struct AppointmentForm {
    #[validate(custom(function = "validate_patient_choice"))]
    pub patient_id: String,
    #[validate(custom(function = "validate_dentist_choice"))]
    pub dentist_id: String,
    #[serde(default)]
    pub appointment_date: String,
    #[serde(default = "default_duration")]
    pub duration_minutes: u32,
    #[serde(default)]
    #[validate(length(
        max = 100,
        message = "Tipo de tratamento deve ter no máximo 100 caracteres"
    ))]
    pub treatment_type: String,
    #[serde(default)]
    #[validate(length(max = 500, message = "Observações devem ter no máximo 500 caracteres"))]
    pub notes: String,
}

fn default_duration() -> u32 {
    DEFAULT_DURATION_MINUTES
}

impl Default for AppointmentForm {
    fn default() -> Self {
        Self {
            patient_id: String::new(),
            dentist_id: String::new(),
            appointment_date: String::new(),
            duration_minutes: DEFAULT_DURATION_MINUTES,
            treatment_type: String::new(),
            notes: String::new(),
        }
    }
}

fn validate_patient_choice(value: &str) -> Result<(), ValidationError> {
    PatientId::from_str(value.trim())
        .map(|_| ())
        .map_err(|_| invalid("patient_required", "Selecione um paciente"))
}

fn validate_dentist_choice(value: &str) -> Result<(), ValidationError> {
    DentistId::from_str(value.trim())
        .map(|_| ())
        .map_err(|_| invalid("dentist_required", "Selecione um dentista"))
}

/// Accepts the `datetime-local` value with or without seconds.
pub fn parse_datetime_input(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, DATETIME_INPUT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

impl AppointmentForm {
    /// Prefills the form for rescheduling an existing appointment.
    pub fn from_appointment(appointment: &Appointment) -> Self {
        Self {
            patient_id: appointment.patient_id.to_string(),
            dentist_id: appointment.dentist_id.to_string(),
            appointment_date: appointment
                .appointment_date
                .get(..16)
                .unwrap_or(&appointment.appointment_date)
                .to_string(),
            duration_minutes: appointment.duration_minutes,
            treatment_type: appointment.treatment_type.clone().unwrap_or_default(),
            notes: appointment.notes.clone().unwrap_or_default(),
        }
    }

    /// Full validation including the rules that depend on the current time.
    pub fn validate_at(&self, now: NaiveDateTime) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        if self.appointment_date.trim().is_empty() {
            errors.add(
                "appointment_date",
                invalid("date_required", "Selecione uma data e hora"),
            );
        } else {
            match parse_datetime_input(&self.appointment_date) {
                Some(start) if start > now => {}
                Some(_) => errors.add(
                    "appointment_date",
                    invalid("date_in_past", "Data deve ser futura"),
                ),
                None => errors.add(
                    "appointment_date",
                    invalid("date_format", "Data inválida"),
                ),
            }
        }

        if self.duration_minutes < 15 {
            errors.add(
                "duration_minutes",
                invalid("duration_min", "Duração mínima de 15 minutos"),
            );
        } else if self.duration_minutes > 480 {
            errors.add(
                "duration_minutes",
                invalid("duration_max", "Duração máxima de 8 horas"),
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn parse(&self) -> Result<(PatientId, DentistId, NaiveDateTime), FormError> {
        let patient_id =
            PatientId::from_str(self.patient_id.trim()).map_err(|_| FormError::InvalidPatientId)?;
        let dentist_id =
            DentistId::from_str(self.dentist_id.trim()).map_err(|_| FormError::InvalidDentistId)?;
        let start = parse_datetime_input(&self.appointment_date)
            .ok_or_else(|| FormError::InvalidDate(self.appointment_date.clone()))?;
        Ok((patient_id, dentist_id, start))
    }

    /// Builds the create payload: integer ids and `end_time` derived from the duration.
    pub fn to_new_appointment(&self) -> Result<NewAppointment, FormError> {
        let (patient_id, dentist_id, start) = self.parse()?;
        Ok(NewAppointment::new(
            patient_id,
            dentist_id,
            start,
            self.duration_minutes,
            optional(&self.treatment_type),
            optional(&self.notes),
        ))
    }

    pub fn to_update_appointment(&self) -> Result<UpdateAppointment, FormError> {
        let (patient_id, dentist_id, start) = self.parse()?;
        Ok(UpdateAppointment {
            patient_id: Some(patient_id),
            dentist_id: Some(dentist_id),
            appointment_date: Some(start),
            duration_minutes: Some(self.duration_minutes),
            status: None,
            notes: optional(&self.notes),
            treatment_type: optional(&self.treatment_type),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FieldErrors;
    use chrono::NaiveDate;
    use serde_json::json;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 10)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn valid_form() -> AppointmentForm {
        AppointmentForm {
            patient_id: "3".into(),
            dentist_id: "7".into(),
            appointment_date: "2025-06-11T14:30".into(),
            duration_minutes: 45,
            treatment_type: "Limpeza".into(),
            notes: String::new(),
        }
    }

    #[test]
    fn payload_converts_ids_and_derives_end_time() {
        let form = valid_form();
        assert!(form.validate_at(now()).is_ok());

        let payload = serde_json::to_value(form.to_new_appointment().unwrap()).unwrap();
        assert_eq!(
            payload,
            json!({
                "patient_id": 3,
                "dentist_id": 7,
                "appointment_date": "2025-06-11T14:30:00",
                "end_time": "2025-06-11T15:15:00",
                "duration_minutes": 45,
                "treatment_type": "Limpeza"
            })
        );
    }

    #[test]
    fn missing_selections_and_past_date() {
        let form = AppointmentForm {
            patient_id: String::new(),
            dentist_id: "abc".into(),
            appointment_date: "2025-06-10T08:59".into(),
            ..valid_form()
        };
        let fields = FieldErrors::from(&form.validate_at(now()).unwrap_err());

        assert_eq!(fields.get("patient_id"), Some("Selecione um paciente"));
        assert_eq!(fields.get("dentist_id"), Some("Selecione um dentista"));
        assert_eq!(fields.get("appointment_date"), Some("Data deve ser futura"));
    }

    #[test]
    fn date_must_be_strictly_future() {
        let form = AppointmentForm {
            appointment_date: "2025-06-10T09:00".into(),
            ..valid_form()
        };
        assert!(form.validate_at(now()).is_err());

        let form = AppointmentForm {
            appointment_date: String::new(),
            ..valid_form()
        };
        let fields = FieldErrors::from(&form.validate_at(now()).unwrap_err());
        assert_eq!(fields.get("appointment_date"), Some("Selecione uma data e hora"));
    }

    #[test]
    fn duration_bounds() {
        let short = AppointmentForm {
            duration_minutes: 10,
            ..valid_form()
        };
        let fields = FieldErrors::from(&short.validate_at(now()).unwrap_err());
        assert_eq!(fields.get("duration_minutes"), Some("Duração mínima de 15 minutos"));

        let long = AppointmentForm {
            duration_minutes: 481,
            ..valid_form()
        };
        let fields = FieldErrors::from(&long.validate_at(now()).unwrap_err());
        assert_eq!(fields.get("duration_minutes"), Some("Duração máxima de 8 horas"));

        let edge = AppointmentForm {
            duration_minutes: 480,
            ..valid_form()
        };
        assert!(edge.validate_at(now()).is_ok());
    }

    #[test]
    fn unparseable_ids_fail_conversion() {
        let form = AppointmentForm {
            patient_id: "x".into(),
            ..valid_form()
        };
        assert!(matches!(
            form.to_new_appointment(),
            Err(FormError::InvalidPatientId)
        ));
    }
}
