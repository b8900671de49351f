//! Operations behind the "Doutores" page.

use validator::Validate;

use crate::domain::dentist::Dentist;
use crate::domain::types::DentistId;
use crate::forms::dentist::DentistForm;
use crate::list::ListConfig;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, ListResponse};
use crate::repository::{DentistReader, DentistWriter, ListParams};
use crate::services::patients::MASTER_LIST_LIMIT;
use crate::services::{ServiceError, ServiceResult};

pub fn list_config() -> ListConfig<Dentist> {
    ListConfig::new(DEFAULT_ITEMS_PER_PAGE)
        .server_filters(&["is_active"])
        .error_message("Erro ao carregar dentistas")
}

pub async fn list_dentists<R>(repo: &R, params: &ListParams) -> ServiceResult<ListResponse<Dentist>>
where
    R: DentistReader + ?Sized,
{
    repo.list_dentists(params).await.map_err(|err| {
        log::error!("Failed to list dentists: {err}");
        ServiceError::from(err)
    })
}

pub async fn load_all_dentists<R>(repo: &R) -> ServiceResult<Vec<Dentist>>
where
    R: DentistReader + ?Sized,
{
    let params = ListParams::new(0, MASTER_LIST_LIMIT);
    Ok(list_dentists(repo, &params).await?.normalize().items)
}

pub async fn get_dentist<R>(repo: &R, id: DentistId) -> ServiceResult<Dentist>
where
    R: DentistReader + ?Sized,
{
    repo.get_dentist(id).await.map_err(|err| {
        log::error!("Failed to load dentist {id}: {err}");
        ServiceError::from(err)
    })
}

pub async fn create_dentist<R>(repo: &R, form: &DentistForm) -> ServiceResult<Dentist>
where
    R: DentistWriter + ?Sized,
{
    form.validate()?;

    repo.create_dentist(&form.to_new_dentist())
        .await
        .map_err(|err| {
            log::error!("Failed to create dentist: {err}");
            ServiceError::from(err)
        })
}

pub async fn update_dentist<R>(repo: &R, id: DentistId, form: &DentistForm) -> ServiceResult<Dentist>
where
    R: DentistWriter + ?Sized,
{
    form.validate()?;

    repo.update_dentist(id, &form.to_update_dentist())
        .await
        .map_err(|err| {
            log::error!("Failed to update dentist {id}: {err}");
            ServiceError::from(err)
        })
}

pub async fn delete_dentist<R>(repo: &R, id: DentistId, reason: Option<String>) -> ServiceResult<()>
where
    R: DentistWriter + ?Sized,
{
    let reason = reason
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty());
    repo.delete_dentist(id, reason).await.map_err(|err| {
        log::error!("Failed to delete dentist {id}: {err}");
        ServiceError::from(err)
    })
}
