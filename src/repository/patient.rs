use async_trait::async_trait;
use serde_json::json;

use crate::domain::patient::{NewPatient, Patient, UpdatePatient};
use crate::domain::types::PatientId;
use crate::pagination::ListResponse;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ListParams, PatientReader, PatientWriter, RestRepository};

const PATIENTS: &str = "/api/patients/";

#[async_trait]
impl PatientReader for RestRepository {
    async fn get_patient(&self, id: PatientId) -> RepositoryResult<Patient> {
        self.api.get_json(&format!("/api/patients/{id}"), &[]).await
    }

    async fn list_patients(
        &self,
        params: &ListParams,
    ) -> RepositoryResult<ListResponse<Patient>> {
        let body = self.api.get_value(PATIENTS, &params.query_pairs()).await?;
        Ok(ListResponse::from_json(body)?)
    }
}

#[async_trait]
impl PatientWriter for RestRepository {
    async fn create_patient(&self, new_patient: &NewPatient) -> RepositoryResult<Patient> {
        self.api.post_json(PATIENTS, new_patient).await
    }

    async fn update_patient(
        &self,
        id: PatientId,
        updates: &UpdatePatient,
    ) -> RepositoryResult<Patient> {
        self.api
            .put_json(&format!("/api/patients/{id}"), updates)
            .await
    }

    async fn delete_patient(&self, id: PatientId, reason: Option<String>) -> RepositoryResult<()> {
        self.api
            .delete(&format!("/api/patients/{id}"), Some(&json!({ "reason": reason })))
            .await
    }
}
