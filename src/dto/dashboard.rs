use serde::Serialize;

use crate::domain::dashboard::{DashboardStats, RecentAppointment};

/// Cards and the "Consultas recentes" table of the dashboard.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardPageData {
    pub stats: DashboardStats,
    pub recent_appointments: Vec<RecentAppointment>,
}
