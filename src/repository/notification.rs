use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::domain::notification::{
    BulkSendResult, NewNotificationTemplate, NotificationChannel, NotificationLog,
    NotificationSettings, NotificationTemplate, SendNotificationRequest, TestNotificationResult,
};
use crate::domain::types::{AppointmentId, NotificationLogId, TemplateId};
use crate::pagination::ListResponse;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ListParams, NotificationReader, NotificationWriter, RestRepository};

const TEMPLATES: &str = "/api/notifications/templates";

#[derive(Deserialize)]
struct UnreadCount {
    count: u64,
}

#[async_trait]
impl NotificationReader for RestRepository {
    async fn list_templates(&self) -> RepositoryResult<Vec<NotificationTemplate>> {
        self.api.get_json(TEMPLATES, &[]).await
    }

    async fn get_template(&self, id: TemplateId) -> RepositoryResult<NotificationTemplate> {
        self.api.get_json(&format!("{TEMPLATES}/{id}"), &[]).await
    }

    async fn list_notification_logs(
        &self,
        params: &ListParams,
    ) -> RepositoryResult<ListResponse<NotificationLog>> {
        let body = self
            .api
            .get_value("/api/notifications/logs", &params.query_pairs())
            .await?;
        Ok(ListResponse::from_json(body)?)
    }

    async fn get_notification_log(
        &self,
        id: NotificationLogId,
    ) -> RepositoryResult<NotificationLog> {
        self.api
            .get_json(&format!("/api/notifications/logs/{id}"), &[])
            .await
    }

    async fn get_notification_settings(&self) -> RepositoryResult<NotificationSettings> {
        self.api.get_json("/api/notifications/settings", &[]).await
    }

    async fn unread_count(&self) -> RepositoryResult<u64> {
        let unread: UnreadCount = self
            .api
            .get_json("/api/notifications/in-app/unread-count", &[])
            .await?;
        Ok(unread.count)
    }

    async fn list_in_app(
        &self,
        params: &ListParams,
    ) -> RepositoryResult<ListResponse<NotificationLog>> {
        let body = self
            .api
            .get_value("/api/notifications/in-app", &params.query_pairs())
            .await?;
        Ok(ListResponse::from_json(body)?)
    }
}

#[async_trait]
impl NotificationWriter for RestRepository {
    async fn create_template(
        &self,
        template: &NewNotificationTemplate,
    ) -> RepositoryResult<NotificationTemplate> {
        self.api.post_json(TEMPLATES, template).await
    }

    async fn update_template(
        &self,
        id: TemplateId,
        template: &NewNotificationTemplate,
    ) -> RepositoryResult<NotificationTemplate> {
        self.api
            .put_json(&format!("{TEMPLATES}/{id}"), template)
            .await
    }

    async fn delete_template(&self, id: TemplateId) -> RepositoryResult<()> {
        self.api
            .delete::<Value>(&format!("{TEMPLATES}/{id}"), None)
            .await
    }

    async fn send_notification(
        &self,
        request: &SendNotificationRequest,
    ) -> RepositoryResult<NotificationLog> {
        self.api.post_json("/api/notifications/send", request).await
    }

    async fn send_bulk_notifications(
        &self,
        appointment_ids: &[AppointmentId],
        channel: NotificationChannel,
    ) -> RepositoryResult<BulkSendResult> {
        self.api
            .post_json(
                "/api/notifications/send-bulk",
                &json!({ "appointment_ids": appointment_ids, "channel": channel }),
            )
            .await
    }

    async fn update_notification_settings(
        &self,
        settings: &NotificationSettings,
    ) -> RepositoryResult<NotificationSettings> {
        self.api
            .put_json("/api/notifications/settings", settings)
            .await
    }

    async fn test_notification(
        &self,
        channel: NotificationChannel,
        recipient: &str,
    ) -> RepositoryResult<TestNotificationResult> {
        self.api
            .post_json(
                "/api/notifications/test",
                &json!({ "channel": channel, "recipient": recipient }),
            )
            .await
    }

    async fn mark_notification_read(&self, id: NotificationLogId) -> RepositoryResult<()> {
        self.api
            .post_unit::<Value>(&format!("/api/notifications/in-app/{id}/read"), None)
            .await
    }

    async fn mark_all_notifications_read(&self) -> RepositoryResult<()> {
        self.api
            .post_unit::<Value>("/api/notifications/in-app/read-all", None)
            .await
    }
}
