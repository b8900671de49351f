//! Operations behind the "Pacientes" page.

use validator::Validate;

use crate::domain::patient::{Patient, UpdatePatient};
use crate::domain::types::PatientId;
use crate::forms::patient::PatientForm;
use crate::list::ListConfig;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, ListResponse};
use crate::repository::{ListParams, PatientReader, PatientWriter};
use crate::services::{ServiceError, ServiceResult};

/// Upper bound used when a page needs every patient, e.g. for a select.
pub const MASTER_LIST_LIMIT: usize = 1000;

/// Search is server-side; `is_active` is the only filter and is sent as a parameter.
pub fn list_config() -> ListConfig<Patient> {
    ListConfig::new(DEFAULT_ITEMS_PER_PAGE)
        .server_filters(&["is_active"])
        .error_message("Erro ao carregar pacientes")
}

pub async fn list_patients<R>(repo: &R, params: &ListParams) -> ServiceResult<ListResponse<Patient>>
where
    R: PatientReader + ?Sized,
{
    repo.list_patients(params).await.map_err(|err| {
        log::error!("Failed to list patients: {err}");
        ServiceError::from(err)
    })
}

/// Every patient, for resolving names by id.
pub async fn load_all_patients<R>(repo: &R) -> ServiceResult<Vec<Patient>>
where
    R: PatientReader + ?Sized,
{
    let params = ListParams::new(0, MASTER_LIST_LIMIT);
    Ok(list_patients(repo, &params).await?.normalize().items)
}

pub async fn get_patient<R>(repo: &R, id: PatientId) -> ServiceResult<Patient>
where
    R: PatientReader + ?Sized,
{
    repo.get_patient(id).await.map_err(|err| {
        log::error!("Failed to load patient {id}: {err}");
        ServiceError::from(err)
    })
}

/// Validates the dialog form and creates the patient.
pub async fn create_patient<R>(repo: &R, form: &PatientForm) -> ServiceResult<Patient>
where
    R: PatientWriter + ?Sized,
{
    form.validate()?;

    repo.create_patient(&form.to_new_patient())
        .await
        .map_err(|err| {
            log::error!("Failed to create patient: {err}");
            ServiceError::from(err)
        })
}

pub async fn update_patient<R>(repo: &R, id: PatientId, form: &PatientForm) -> ServiceResult<Patient>
where
    R: PatientWriter + ?Sized,
{
    form.validate()?;

    let updates: UpdatePatient = form.to_update_patient();
    repo.update_patient(id, &updates).await.map_err(|err| {
        log::error!("Failed to update patient {id}: {err}");
        ServiceError::from(err)
    })
}

pub async fn delete_patient<R>(repo: &R, id: PatientId, reason: Option<String>) -> ServiceResult<()>
where
    R: PatientWriter + ?Sized,
{
    let reason = reason
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty());
    repo.delete_patient(id, reason).await.map_err(|err| {
        log::error!("Failed to delete patient {id}: {err}");
        ServiceError::from(err)
    })
}
