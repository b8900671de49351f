//! Templates, delivery logs and in-app notifications.

use validator::Validate;

use crate::domain::notification::{
    BulkSendResult, NotificationChannel, NotificationLog, NotificationTemplate,
    SendNotificationRequest,
};
use crate::domain::types::{AppointmentId, NotificationLogId, TemplateId};
use crate::forms::notification::NotificationTemplateForm;
use crate::list::ListConfig;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, ListResponse};
use crate::repository::{ListParams, NotificationReader, NotificationWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn logs_list_config() -> ListConfig<NotificationLog> {
    ListConfig::new(DEFAULT_ITEMS_PER_PAGE)
        .server_filters(&["channel", "status"])
        .error_message("Erro ao carregar histórico de notificações")
}

pub async fn list_templates<R>(repo: &R) -> ServiceResult<Vec<NotificationTemplate>>
where
    R: NotificationReader + ?Sized,
{
    repo.list_templates().await.map_err(|err| {
        log::error!("Failed to list notification templates: {err}");
        ServiceError::from(err)
    })
}

/// Creates the template, or updates it when `id` is given.
pub async fn save_template<R>(
    repo: &R,
    id: Option<TemplateId>,
    form: &NotificationTemplateForm,
) -> ServiceResult<NotificationTemplate>
where
    R: NotificationWriter + ?Sized,
{
    form.validate()?;
    let payload = form.to_payload();

    let result = match id {
        Some(id) => repo.update_template(id, &payload).await,
        None => repo.create_template(&payload).await,
    };
    result.map_err(|err| {
        log::error!("Failed to save notification template: {err}");
        ServiceError::from(err)
    })
}

pub async fn delete_template<R>(repo: &R, id: TemplateId) -> ServiceResult<()>
where
    R: NotificationWriter + ?Sized,
{
    repo.delete_template(id).await.map_err(|err| {
        log::error!("Failed to delete notification template {id}: {err}");
        ServiceError::from(err)
    })
}

pub async fn list_logs<R>(
    repo: &R,
    params: &ListParams,
) -> ServiceResult<ListResponse<NotificationLog>>
where
    R: NotificationReader + ?Sized,
{
    repo.list_notification_logs(params).await.map_err(|err| {
        log::error!("Failed to list notification logs: {err}");
        ServiceError::from(err)
    })
}

pub async fn send_notification<R>(
    repo: &R,
    request: &SendNotificationRequest,
) -> ServiceResult<NotificationLog>
where
    R: NotificationWriter + ?Sized,
{
    repo.send_notification(request).await.map_err(|err| {
        log::error!(
            "Failed to send notification for appointment {}: {err}",
            request.appointment_id
        );
        ServiceError::from(err)
    })
}

pub async fn send_bulk<R>(
    repo: &R,
    appointment_ids: &[AppointmentId],
    channel: NotificationChannel,
) -> ServiceResult<BulkSendResult>
where
    R: NotificationWriter + ?Sized,
{
    if appointment_ids.is_empty() {
        return Err(ServiceError::Form(
            "Selecione ao menos um agendamento".to_string(),
        ));
    }

    repo.send_bulk_notifications(appointment_ids, channel)
        .await
        .map_err(|err| {
            log::error!("Failed to send bulk notifications: {err}");
            ServiceError::from(err)
        })
}

/// Sends a test message, returning the confirmation text.
pub async fn send_test<R>(
    repo: &R,
    channel: NotificationChannel,
    recipient: &str,
) -> ServiceResult<String>
where
    R: NotificationWriter + ?Sized,
{
    let recipient = recipient.trim();
    if recipient.is_empty() {
        return Err(ServiceError::Form(
            "Informe o destinatário para teste".to_string(),
        ));
    }

    let result = repo
        .test_notification(channel, recipient)
        .await
        .map_err(|err| {
            log::error!("Failed to send test {channel:?} notification: {err}");
            ServiceError::from(err)
        })?;

    if result.success {
        Ok("Notificação de teste enviada com sucesso!".to_string())
    } else if result.message.is_empty() {
        Err(ServiceError::Form(
            "Erro ao enviar notificação de teste".to_string(),
        ))
    } else {
        Err(ServiceError::Form(result.message))
    }
}

pub async fn unread_count<R>(repo: &R) -> ServiceResult<u64>
where
    R: NotificationReader + ?Sized,
{
    repo.unread_count().await.map_err(|err| {
        log::error!("Failed to load unread notification count: {err}");
        ServiceError::from(err)
    })
}

pub async fn list_in_app<R>(
    repo: &R,
    params: &ListParams,
) -> ServiceResult<ListResponse<NotificationLog>>
where
    R: NotificationReader + ?Sized,
{
    repo.list_in_app(params).await.map_err(|err| {
        log::error!("Failed to list in-app notifications: {err}");
        ServiceError::from(err)
    })
}

pub async fn mark_read<R>(repo: &R, id: NotificationLogId) -> ServiceResult<()>
where
    R: NotificationWriter + ?Sized,
{
    repo.mark_notification_read(id).await.map_err(|err| {
        log::error!("Failed to mark notification {id} as read: {err}");
        ServiceError::from(err)
    })
}

pub async fn mark_all_read<R>(repo: &R) -> ServiceResult<()>
where
    R: NotificationWriter + ?Sized,
{
    repo.mark_all_notifications_read().await.map_err(|err| {
        log::error!("Failed to mark all notifications as read: {err}");
        ServiceError::from(err)
    })
}
