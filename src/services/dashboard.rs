//! Dashboard cards and the calendar counts.

use crate::calendar::{DayCounts, MonthView};
use crate::dto::dashboard::DashboardPageData;
use crate::repository::DashboardReader;
use crate::services::{ServiceError, ServiceResult};

pub async fn load_dashboard<R>(repo: &R) -> ServiceResult<DashboardPageData>
where
    R: DashboardReader + ?Sized,
{
    let stats = repo.get_stats().await.map_err(|err| {
        log::error!("Failed to load dashboard stats: {err}");
        ServiceError::from(err)
    })?;
    let recent_appointments = repo.recent_appointments().await.map_err(|err| {
        log::error!("Failed to load recent appointments: {err}");
        ServiceError::from(err)
    })?;

    Ok(DashboardPageData {
        stats,
        recent_appointments,
    })
}

/// Per-day counts for `view`.
pub async fn load_month_counts<R>(repo: &R, view: MonthView) -> ServiceResult<DayCounts>
where
    R: DashboardReader + ?Sized,
{
    let days = repo
        .monthly_appointments(Some((view.year(), view.month())))
        .await
        .map_err(|err| {
            log::error!("Failed to load appointments for {view}: {err}");
            ServiceError::from(err)
        })?;
    Ok(DayCounts::from_monthly(&days))
}
