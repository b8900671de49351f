//! Rows of the "Agendamentos" table.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::appointment::Appointment;
use crate::domain::dentist::Dentist;
use crate::domain::patient::Patient;
use crate::domain::types::{AppointmentId, DentistId, PatientId};

/// Shown when a name cannot be resolved.
pub const UNKNOWN_NAME: &str = "—";

/// Display names by id, built from the master lists loaded on mount.
#[derive(Debug, Clone, Default)]
pub struct NameDirectory {
    patients: HashMap<PatientId, String>,
    dentists: HashMap<DentistId, String>,
}

impl NameDirectory {
    pub fn new(patients: &[Patient], dentists: &[Dentist]) -> Self {
        Self {
            patients: patients.iter().map(|p| (p.id, p.name.clone())).collect(),
            dentists: dentists.iter().map(|d| (d.id, d.name.clone())).collect(),
        }
    }

    pub fn patient_name(&self, id: PatientId) -> &str {
        self.patients.get(&id).map_or(UNKNOWN_NAME, String::as_str)
    }

    pub fn dentist_name(&self, id: DentistId) -> &str {
        self.dentists.get(&id).map_or(UNKNOWN_NAME, String::as_str)
    }

    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    pub fn dentist_count(&self) -> usize {
        self.dentists.len()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AppointmentRow {
    pub id: AppointmentId,
    pub patient_name: String,
    pub dentist_name: String,
    /// `dd/mm/yyyy`.
    pub date: String,
    pub time: String,
    pub treatment_type: String,
    pub status: &'static str,
}

impl AppointmentRow {
    /// Embedded patient/dentist records win over the directory.
    pub fn new(appointment: &Appointment, names: &NameDirectory) -> Self {
        let patient_name = appointment
            .patient
            .as_ref()
            .map_or_else(|| names.patient_name(appointment.patient_id), |p| p.name.as_str());
        let dentist_name = appointment
            .dentist
            .as_ref()
            .map_or_else(|| names.dentist_name(appointment.dentist_id), |d| d.name.as_str());

        Self {
            id: appointment.id,
            patient_name: patient_name.to_string(),
            dentist_name: dentist_name.to_string(),
            date: display_day(appointment.day()),
            time: appointment.time().to_string(),
            treatment_type: appointment.treatment_type.clone().unwrap_or_default(),
            status: appointment.status.label(),
        }
    }
}

/// `2025-12-15` → `15/12/2025`; anything unparseable is shown as is.
pub fn display_day(day: &str) -> String {
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map(|date| date.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|_| day.to_string())
}
