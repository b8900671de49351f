//! Mock repository implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::appointment::{
    Appointment, AppointmentStatusUpdate, NewAppointment, UpdateAppointment,
};
use crate::domain::auth::{AuthResponse, ChangePasswordRequest, LoginRequest, RegisterRequest};
use crate::domain::dashboard::{DashboardStats, MonthlyAppointment, RecentAppointment};
use crate::domain::dentist::{Dentist, NewDentist, UpdateDentist};
use crate::domain::notification::{
    BulkSendResult, NewNotificationTemplate, NotificationChannel, NotificationLog,
    NotificationSettings, NotificationTemplate, SendNotificationRequest, TestNotificationResult,
};
use crate::domain::patient::{NewPatient, Patient, UpdatePatient};
use crate::domain::types::{AppointmentId, DentistId, NotificationLogId, PatientId, TemplateId};
use crate::pagination::ListResponse;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    AppointmentReader, AppointmentWriter, AuthGateway, DashboardReader, DentistReader,
    DentistWriter, ListParams, NotificationReader, NotificationWriter, PatientReader,
    PatientWriter,
};

mock! {
    pub Repository {}

    #[async_trait]
    impl PatientReader for Repository {
        async fn get_patient(&self, id: PatientId) -> RepositoryResult<Patient>;
        async fn list_patients(&self, params: &ListParams) -> RepositoryResult<ListResponse<Patient>>;
    }

    #[async_trait]
    impl PatientWriter for Repository {
        async fn create_patient(&self, new_patient: &NewPatient) -> RepositoryResult<Patient>;
        async fn update_patient(
            &self,
            id: PatientId,
            updates: &UpdatePatient,
        ) -> RepositoryResult<Patient>;
        async fn delete_patient(&self, id: PatientId, reason: Option<String>) -> RepositoryResult<()>;
    }

    #[async_trait]
    impl DentistReader for Repository {
        async fn get_dentist(&self, id: DentistId) -> RepositoryResult<Dentist>;
        async fn list_dentists(&self, params: &ListParams) -> RepositoryResult<ListResponse<Dentist>>;
    }

    #[async_trait]
    impl DentistWriter for Repository {
        async fn create_dentist(&self, new_dentist: &NewDentist) -> RepositoryResult<Dentist>;
        async fn update_dentist(
            &self,
            id: DentistId,
            updates: &UpdateDentist,
        ) -> RepositoryResult<Dentist>;
        async fn delete_dentist(&self, id: DentistId, reason: Option<String>) -> RepositoryResult<()>;
    }

    #[async_trait]
    impl AppointmentReader for Repository {
        async fn get_appointment(&self, id: AppointmentId) -> RepositoryResult<Appointment>;
        async fn list_appointments(
            &self,
            params: &ListParams,
        ) -> RepositoryResult<ListResponse<Appointment>>;
    }

    #[async_trait]
    impl AppointmentWriter for Repository {
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
    impl NotificationReader for Repository {
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
    impl NotificationWriter for Repository {
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
    impl DashboardReader for Repository {
        async fn get_stats(&self) -> RepositoryResult<DashboardStats>;
        async fn recent_appointments(&self) -> RepositoryResult<Vec<RecentAppointment>>;
        async fn monthly_appointments(
            &self,
            month: Option<(i32, u32)>,
        ) -> RepositoryResult<Vec<MonthlyAppointment>>;
    }

    #[async_trait]
    impl AuthGateway for Repository {
        async fn login(&self, request: &LoginRequest) -> RepositoryResult<AuthResponse>;
        async fn register(&self, request: &RegisterRequest) -> RepositoryResult<AuthResponse>;
        async fn forgot_password(&self, email: &str) -> RepositoryResult<()>;
        async fn change_password(&self, request: &ChangePasswordRequest) -> RepositoryResult<()>;
    }
}
