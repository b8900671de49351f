//! Operations behind the "Agendamentos" page.

use chrono::NaiveDateTime;

use crate::domain::appointment::{Appointment, AppointmentStatus, AppointmentStatusUpdate};
use crate::domain::types::AppointmentId;
use crate::dto::appointments::{AppointmentRow, NameDirectory};
use crate::forms::appointment::AppointmentForm;
use crate::list::{ListConfig, ListFilters};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, ListResponse};
use crate::repository::{
    AppointmentReader, AppointmentWriter, DentistReader, ListParams, PatientReader,
};
use crate::services::dentists::load_all_dentists;
use crate::services::patients::load_all_patients;
use crate::services::{ServiceError, ServiceResult};

pub const STATUS_FILTER: &str = "status";
pub const DATE_FILTER: &str = "date";

/// Patient and dentist go to the server; status and exact date filter the fetched page.
pub fn list_config() -> ListConfig<Appointment> {
    ListConfig::new(DEFAULT_ITEMS_PER_PAGE)
        .server_filters(&["patient_id", "dentist_id"])
        .client_filter(matches_client_filters)
        .error_message("Erro ao carregar agendamentos")
}

/// Status compares the wire value; date compares the `YYYY-MM-DD` prefix.
pub fn matches_client_filters(appointment: &Appointment, filters: &ListFilters) -> bool {
    let status_ok = filters
        .get(STATUS_FILTER)
        .is_none_or(|status| appointment.status.as_str() == status);
    let date_ok = filters
        .get(DATE_FILTER)
        .is_none_or(|date| appointment.day() == date);
    status_ok && date_ok
}

pub async fn list_appointments<R>(
    repo: &R,
    params: &ListParams,
) -> ServiceResult<ListResponse<Appointment>>
where
    R: AppointmentReader + ?Sized,
{
    repo.list_appointments(params).await.map_err(|err| {
        log::error!("Failed to list appointments: {err}");
        ServiceError::from(err)
    })
}

/// Loads both master lists so rows can show names instead of ids.
pub async fn load_name_directory<R>(repo: &R) -> ServiceResult<NameDirectory>
where
    R: PatientReader + DentistReader + ?Sized,
{
    let patients = load_all_patients(repo).await?;
    let dentists = load_all_dentists(repo).await?;
    Ok(NameDirectory::new(&patients, &dentists))
}

pub fn rows(appointments: &[Appointment], names: &NameDirectory) -> Vec<AppointmentRow> {
    appointments
        .iter()
        .map(|appointment| AppointmentRow::new(appointment, names))
        .collect()
}

pub async fn get_appointment<R>(repo: &R, id: AppointmentId) -> ServiceResult<Appointment>
where
    R: AppointmentReader + ?Sized,
{
    repo.get_appointment(id).await.map_err(|err| {
        log::error!("Failed to load appointment {id}: {err}");
        ServiceError::from(err)
    })
}

/// Validates against `now` and books the appointment.
pub async fn create_appointment<R>(
    repo: &R,
    form: &AppointmentForm,
    now: NaiveDateTime,
) -> ServiceResult<Appointment>
where
    R: AppointmentWriter + ?Sized,
{
    form.validate_at(now)?;
    let new_appointment = form.to_new_appointment()?;

    repo.create_appointment(&new_appointment)
        .await
        .map_err(|err| {
            log::error!("Failed to create appointment: {err}");
            ServiceError::from(err)
        })
}

pub async fn update_appointment<R>(
    repo: &R,
    id: AppointmentId,
    form: &AppointmentForm,
    now: NaiveDateTime,
) -> ServiceResult<Appointment>
where
    R: AppointmentWriter + ?Sized,
{
    form.validate_at(now)?;
    let updates = form.to_update_appointment()?;

    repo.update_appointment(id, &updates).await.map_err(|err| {
        log::error!("Failed to update appointment {id}: {err}");
        ServiceError::from(err)
    })
}

pub async fn change_status<R>(
    repo: &R,
    id: AppointmentId,
    status: AppointmentStatus,
) -> ServiceResult<Appointment>
where
    R: AppointmentWriter + ?Sized,
{
    repo.update_appointment_status(id, AppointmentStatusUpdate { status })
        .await
        .map_err(|err| {
            log::error!("Failed to set appointment {id} to {status}: {err}");
            ServiceError::from(err)
        })
}

pub async fn cancel_appointment<R>(
    repo: &R,
    id: AppointmentId,
    reason: Option<String>,
) -> ServiceResult<()>
where
    R: AppointmentWriter + ?Sized,
{
    let reason = reason
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty());
    repo.cancel_appointment(id, reason).await.map_err(|err| {
        log::error!("Failed to cancel appointment {id}: {err}");
        ServiceError::from(err)
    })
}

#[cfg(test)]
mod filter_tests {
    use super::*;
    use serde_json::json;

    fn appointment(status: &str, date: &str) -> Appointment {
        serde_json::from_value(json!({
            "id": 1,
            "patient_id": 1,
            "dentist_id": 1,
            "appointment_date": date,
            "duration_minutes": 30,
            "status": status
        }))
        .unwrap()
    }

    #[test]
    fn status_and_date_filters() {
        let mut filters = ListFilters::new();
        let apt = appointment("confirmed", "2025-12-15T09:00:00");
        assert!(matches_client_filters(&apt, &filters));

        filters.set(STATUS_FILTER, "confirmed");
        filters.set(DATE_FILTER, "2025-12-15");
        assert!(matches_client_filters(&apt, &filters));

        filters.set(DATE_FILTER, "2025-12-16");
        assert!(!matches_client_filters(&apt, &filters));

        filters.set(DATE_FILTER, "all");
        filters.set(STATUS_FILTER, "cancelled");
        assert!(!matches_client_filters(&apt, &filters));
    }
}
