use serde::{Deserialize, Serialize};

use crate::domain::appointment::AppointmentStatus;
use crate::domain::types::AppointmentId;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_patients: u64,
    pub total_dentists: u64,
    pub total_appointments: u64,
    pub appointments_today: u64,
    pub appointments_this_week: u64,
    pub appointments_this_month: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RecentAppointment {
    pub id: AppointmentId,
    pub patient_name: String,
    pub dentist_name: String,
    pub appointment_date: String,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub treatment_type: Option<String>,
}

/// One calendar day bucket from `/api/dashboard/monthly`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MonthlyAppointment {
    /// `YYYY-MM-DD`.
    pub date: String,
    pub count: u32,
    #[serde(default)]
    pub appointments: Vec<MonthlyAppointmentEntry>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MonthlyAppointmentEntry {
    pub id: AppointmentId,
    pub patient_name: String,
    pub dentist_name: String,
    pub time: String,
    pub status: AppointmentStatus,
}
