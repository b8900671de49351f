use async_trait::async_trait;
use serde_json::json;

use crate::domain::appointment::{
    Appointment, AppointmentStatusUpdate, NewAppointment, UpdateAppointment,
};
use crate::domain::types::AppointmentId;
use crate::pagination::ListResponse;
use crate::repository::errors::RepositoryResult;
use crate::repository::{AppointmentReader, AppointmentWriter, ListParams, RestRepository};

const APPOINTMENTS: &str = "/api/appointments/";

#[async_trait]
impl AppointmentReader for RestRepository {
    async fn get_appointment(&self, id: AppointmentId) -> RepositoryResult<Appointment> {
        self.api
            .get_json(&format!("/api/appointments/{id}"), &[])
            .await
    }

    async fn list_appointments(
        &self,
        params: &ListParams,
    ) -> RepositoryResult<ListResponse<Appointment>> {
        let body = self
            .api
            .get_value(APPOINTMENTS, &params.query_pairs())
            .await?;
        Ok(ListResponse::from_json(body)?)
    }
}

#[async_trait]
impl AppointmentWriter for RestRepository {
    async fn create_appointment(
        &self,
        new_appointment: &NewAppointment,
    ) -> RepositoryResult<Appointment> {
        self.api.post_json(APPOINTMENTS, new_appointment).await
    }

    async fn update_appointment(
        &self,
        id: AppointmentId,
        updates: &UpdateAppointment,
    ) -> RepositoryResult<Appointment> {
        self.api
            .put_json(&format!("/api/appointments/{id}"), updates)
            .await
    }

    async fn update_appointment_status(
        &self,
        id: AppointmentId,
        update: AppointmentStatusUpdate,
    ) -> RepositoryResult<Appointment> {
        self.api
            .patch_json(&format!("/api/appointments/{id}/status"), &update)
            .await
    }

    async fn cancel_appointment(
        &self,
        id: AppointmentId,
        reason: Option<String>,
    ) -> RepositoryResult<()> {
        self.api
            .delete(
                &format!("/api/appointments/{id}"),
                Some(&json!({ "reason": reason })),
            )
            .await
    }
}
