use async_trait::async_trait;

use crate::domain::dashboard::{DashboardStats, MonthlyAppointment, RecentAppointment};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DashboardReader, RestRepository};

#[async_trait]
impl DashboardReader for RestRepository {
    async fn get_stats(&self) -> RepositoryResult<DashboardStats> {
        self.api.get_json("/api/dashboard/stats", &[]).await
    }

    async fn recent_appointments(&self) -> RepositoryResult<Vec<RecentAppointment>> {
        self.api
            .get_json("/api/dashboard/recent-appointments", &[])
            .await
    }

    async fn monthly_appointments(
        &self,
        month: Option<(i32, u32)>,
    ) -> RepositoryResult<Vec<MonthlyAppointment>> {
        let query = month
            .map(|(year, month)| {
                vec![
                    ("year".to_string(), year.to_string()),
                    ("month".to_string(), month.to_string()),
                ]
            })
            .unwrap_or_default();
        self.api.get_json("/api/dashboard/monthly", &query).await
    }
}
