use async_trait::async_trait;
use serde_json::json;

use crate::domain::dentist::{Dentist, NewDentist, UpdateDentist};
use crate::domain::types::DentistId;
use crate::pagination::ListResponse;
use crate::repository::errors::RepositoryResult;
use crate::repository::{DentistReader, DentistWriter, ListParams, RestRepository};

const DENTISTS: &str = "/api/dentists/";

#[async_trait]
impl DentistReader for RestRepository {
    async fn get_dentist(&self, id: DentistId) -> RepositoryResult<Dentist> {
        self.api.get_json(&format!("/api/dentists/{id}"), &[]).await
    }

    async fn list_dentists(
        &self,
        params: &ListParams,
    ) -> RepositoryResult<ListResponse<Dentist>> {
        let body = self.api.get_value(DENTISTS, &params.query_pairs()).await?;
        Ok(ListResponse::from_json(body)?)
    }
}

#[async_trait]
impl DentistWriter for RestRepository {
    async fn create_dentist(&self, new_dentist: &NewDentist) -> RepositoryResult<Dentist> {
        self.api.post_json(DENTISTS, new_dentist).await
    }

    async fn update_dentist(
        &self,
        id: DentistId,
        updates: &UpdateDentist,
    ) -> RepositoryResult<Dentist> {
        self.api
            .put_json(&format!("/api/dentists/{id}"), updates)
            .await
    }

    async fn delete_dentist(&self, id: DentistId, reason: Option<String>) -> RepositoryResult<()> {
        self.api
            .delete(&format!("/api/dentists/{id}"), Some(&json!({ "reason": reason })))
            .await
    }
}
