use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::dentist::Dentist;
use crate::domain::patient::Patient;
use crate::domain::types::{AppointmentId, DentistId, PatientId, TypeConstraintError};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 6] = [
        AppointmentStatus::Scheduled,
        AppointmentStatus::Confirmed,
        AppointmentStatus::InProgress,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
        AppointmentStatus::NoShow,
    ];

    /// Wire representation, also used as the status filter value.
    pub fn as_str(self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::InProgress => "in_progress",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::NoShow => "no_show",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "Agendada",
            AppointmentStatus::Confirmed => "Confirmada",
            AppointmentStatus::InProgress => "Em andamento",
            AppointmentStatus::Completed => "Concluída",
            AppointmentStatus::Cancelled => "Cancelada",
            AppointmentStatus::NoShow => "Não compareceu",
        }
    }
}

impl Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AppointmentStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| TypeConstraintError::InvalidValue(format!("status {s}")))
    }
}

/// Appointment record as returned by `/api/appointments/`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: AppointmentId,
    pub patient_id: PatientId,
    pub dentist_id: DentistId,
    /// Start of the appointment as sent by the backend (ISO 8601 text).
    pub appointment_date: String,
    #[serde(default)]
    pub end_time: Option<String>,
    pub duration_minutes: u32,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub treatment_type: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub patient: Option<Patient>,
    #[serde(default)]
    pub dentist: Option<Dentist>,
}

impl Appointment {
    /// `YYYY-MM-DD` part of the start date, used for date-string comparisons.
    pub fn day(&self) -> &str {
        self.appointment_date
            .get(..10)
            .unwrap_or(&self.appointment_date)
    }

    /// `HH:MM` part of the start date, empty when the backend sent a bare date.
    pub fn time(&self) -> &str {
        self.appointment_date.get(11..16).unwrap_or("")
    }
}

/// Wire payload for `POST /api/appointments/`.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NewAppointment {
    pub patient_id: PatientId,
    pub dentist_id: DentistId,
    pub appointment_date: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub duration_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewAppointment {
    /// Builds the payload deriving `end_time` from the start and the duration.
    #[must_use]
    pub fn new(
        patient_id: PatientId,
        dentist_id: DentistId,
        start: NaiveDateTime,
        duration_minutes: u32,
        treatment_type: Option<String>,
        notes: Option<String>,
    ) -> Self {
        Self {
            patient_id,
            dentist_id,
            appointment_date: start,
            end_time: start + chrono::Duration::minutes(i64::from(duration_minutes)),
            duration_minutes,
            treatment_type: treatment_type
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            notes: notes.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct UpdateAppointment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<PatientId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dentist_id: Option<DentistId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AppointmentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment_type: Option<String>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct AppointmentStatusUpdate {
    pub status: AppointmentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn new_appointment_derives_end_time() {
        let start = NaiveDate::from_ymd_opt(2030, 1, 10)
            .unwrap()
            .and_hms_opt(23, 30, 0)
            .unwrap();
        let new = NewAppointment::new(
            PatientId::new(3).unwrap(),
            DentistId::new(4).unwrap(),
            start,
            45,
            Some("Limpeza".into()),
            Some("   ".into()),
        );

        let body = serde_json::to_value(&new).unwrap();
        assert_eq!(
            body,
            json!({
                "patient_id": 3,
                "dentist_id": 4,
                "appointment_date": "2030-01-10T23:30:00",
                "end_time": "2030-01-11T00:15:00",
                "duration_minutes": 45,
                "treatment_type": "Limpeza"
            })
        );
    }

    #[test]
    fn day_and_time_slices() {
        let appointment: Appointment = serde_json::from_value(json!({
            "id": 1,
            "patient_id": "2",
            "dentist_id": 3,
            "appointment_date": "2025-12-15T09:00:00Z",
            "duration_minutes": 30,
            "status": "in_progress"
        }))
        .unwrap();

        assert_eq!(appointment.day(), "2025-12-15");
        assert_eq!(appointment.time(), "09:00");
        assert_eq!(appointment.status.label(), "Em andamento");
    }

    #[test]
    fn status_round_trips_through_filter_values() {
        for status in AppointmentStatus::ALL {
            assert_eq!(status.as_str().parse::<AppointmentStatus>().unwrap(), status);
        }
        assert!("pending".parse::<AppointmentStatus>().is_err());
    }
}
