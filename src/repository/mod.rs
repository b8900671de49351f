use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::{
    domain::{
        appointment::{
            Appointment, AppointmentStatusUpdate, NewAppointment, UpdateAppointment,
        },
        auth::{AuthResponse, ChangePasswordRequest, LoginRequest, RegisterRequest},
        dashboard::{DashboardStats, MonthlyAppointment, RecentAppointment},
        dentist::{Dentist, NewDentist, UpdateDentist},
        notification::{
            BulkSendResult, NewNotificationTemplate, NotificationChannel, NotificationLog,
            NotificationSettings, NotificationTemplate, SendNotificationRequest,
            TestNotificationResult,
        },
        patient::{NewPatient, Patient, UpdatePatient},
        types::{AppointmentId, DentistId, NotificationLogId, PatientId, TemplateId},
    },
    pagination::ListResponse,
    repository::errors::RepositoryResult,
};

#[cfg(feature = "client")]
pub mod appointment;
#[cfg(feature = "client")]
pub mod auth;
#[cfg(feature = "client")]
pub mod dashboard;
#[cfg(feature = "client")]
pub mod dentist;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
#[cfg(feature = "client")]
pub mod notification;
#[cfg(feature = "client")]
pub mod patient;

#[cfg(feature = "client")]
use crate::api::ApiClient;

/// Query parameters accepted by every list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub skip: usize,
    pub limit: usize,
    pub search: Option<String>,
    /// Resource-specific server-side filters, e.g. `is_active` or `patient_id`.
    pub filters: BTreeMap<String, String>,
}

impl ListParams {
    pub fn new(skip: usize, limit: usize) -> Self {
        Self {
            skip,
            limit,
            ..Default::default()
        }
    }

    /// Converts a 1-based page number into `skip`/`limit`.
    pub fn paginate(page: usize, per_page: usize) -> Self {
        Self::new(page.max(1).saturating_sub(1) * per_page, per_page)
    }

    /// Sets the search term; blank terms are not sent.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into().trim().to_string();
        self.search = (!term.is_empty()).then_some(term);
        self
    }

    pub fn filter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(name.into(), value.into());
        self
    }

    /// Flattens the parameters into URL query pairs.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("skip".to_string(), self.skip.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];
        if let Some(search) = &self.search {
            pairs.push(("search".to_string(), search.clone()));
        }
        pairs.extend(
            self.filters
                .iter()
                .map(|(name, value)| (name.clone(), value.clone())),
        );
        pairs
    }
}

#[async_trait]
pub trait PatientReader: Send + Sync {
    async fn get_patient(&self, id: PatientId) -> RepositoryResult<Patient>;
    async fn list_patients(&self, params: &ListParams)
    -> RepositoryResult<ListResponse<Patient>>;
}

#[async_trait]
pub trait PatientWriter: Send + Sync {
    async fn create_patient(&self, new_patient: &NewPatient) -> RepositoryResult<Patient>;
    async fn update_patient(
        &self,
        id: PatientId,
        updates: &UpdatePatient,
    ) -> RepositoryResult<Patient>;
    async fn delete_patient(&self, id: PatientId, reason: Option<String>)
    -> RepositoryResult<()>;
}

#[async_trait]
pub trait DentistReader: Send + Sync {
    async fn get_dentist(&self, id: DentistId) -> RepositoryResult<Dentist>;
    async fn list_dentists(&self, params: &ListParams)
    -> RepositoryResult<ListResponse<Dentist>>;
}

#[async_trait]
pub trait DentistWriter: Send + Sync {
    async fn create_dentist(&self, new_dentist: &NewDentist) -> RepositoryResult<Dentist>;
    async fn update_dentist(
        &self,
        id: DentistId,
        updates: &UpdateDentist,
    ) -> RepositoryResult<Dentist>;
    async fn delete_dentist(&self, id: DentistId, reason: Option<String>)
    -> RepositoryResult<()>;
}

#[async_trait]
pub trait AppointmentReader: Send + Sync {
    async fn get_appointment(&self, id: AppointmentId) -> RepositoryResult<Appointment>;
    async fn list_appointments(
        &self,
        params: &ListParams,
    ) -> RepositoryResult<ListResponse<Appointment>>;
}

#[async_trait]
pub trait AppointmentWriter: Send + Sync {
    async fn create_appointment(
        &self,
        new_appointment: &NewAppointment,
    ) -> RepositoryResult<Appointment>;
    async fn update_appointment(
        &self,
        id: AppointmentId,
        updates: &UpdateAppointment,
    ) -> RepositoryResult<Appointment>;
    async fn update_appointment_status(
        &self,
        id: AppointmentId,
        update: AppointmentStatusUpdate,
    ) -> RepositoryResult<Appointment>;
    async fn cancel_appointment(
        &self,
        id: AppointmentId,
        reason: Option<String>,
    ) -> RepositoryResult<()>;
}

#[async_trait]
pub trait NotificationReader: Send + Sync {
    async fn list_templates(&self) -> RepositoryResult<Vec<NotificationTemplate>>;
    async fn get_template(&self, id: TemplateId) -> RepositoryResult<NotificationTemplate>;
    async fn list_notification_logs(
        &self,
        params: &ListParams,
    ) -> RepositoryResult<ListResponse<NotificationLog>>;
    async fn get_notification_log(
        &self,
        id: NotificationLogId,
    ) -> RepositoryResult<NotificationLog>;
    async fn get_notification_settings(&self) -> RepositoryResult<NotificationSettings>;
    async fn unread_count(&self) -> RepositoryResult<u64>;
    async fn list_in_app(
        &self,
        params: &ListParams,
    ) -> RepositoryResult<ListResponse<NotificationLog>>;
}

#[async_trait]
pub trait NotificationWriter: Send + Sync {
    async fn create_template(
        &self,
        template: &NewNotificationTemplate,
    ) -> RepositoryResult<NotificationTemplate>;
    async fn update_template(
        &self,
        id: TemplateId,
        template: &NewNotificationTemplate,
    ) -> RepositoryResult<NotificationTemplate>;
    async fn delete_template(&self, id: TemplateId) -> RepositoryResult<()>;
    async fn send_notification(
        &self,
        request: &SendNotificationRequest,
    ) -> RepositoryResult<NotificationLog>;
    async fn send_bulk_notifications(
        &self,
        appointment_ids: &[AppointmentId],
        channel: NotificationChannel,
    ) -> RepositoryResult<BulkSendResult>;
    async fn update_notification_settings(
        &self,
        settings: &NotificationSettings,
    ) -> RepositoryResult<NotificationSettings>;
    async fn test_notification(
        &self,
        channel: NotificationChannel,
        recipient: &str,
    ) -> RepositoryResult<TestNotificationResult>;
    async fn mark_notification_read(&self, id: NotificationLogId) -> RepositoryResult<()>;
    async fn mark_all_notifications_read(&self) -> RepositoryResult<()>;
}

#[async_trait]
pub trait DashboardReader: Send + Sync {
    async fn get_stats(&self) -> RepositoryResult<DashboardStats>;
    async fn recent_appointments(&self) -> RepositoryResult<Vec<RecentAppointment>>;
    /// Day buckets for a month; `None` lets the backend pick the current month.
    async fn monthly_appointments(
        &self,
        month: Option<(i32, u32)>,
    ) -> RepositoryResult<Vec<MonthlyAppointment>>;
}

#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> RepositoryResult<AuthResponse>;
    async fn register(&self, request: &RegisterRequest) -> RepositoryResult<AuthResponse>;
    async fn forgot_password(&self, email: &str) -> RepositoryResult<()>;
    async fn change_password(&self, request: &ChangePasswordRequest) -> RepositoryResult<()>;
}

/// Resource clients for every endpoint, sharing one [`ApiClient`].
#[cfg(feature = "client")]
#[derive(Clone)]
pub struct RestRepository {
    api: ApiClient,
}

#[cfg(feature = "client")]
impl RestRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}
