use serde::Deserialize;
use validator::Validate;

use crate::domain::notification::{
    NewNotificationTemplate, NotificationChannel, NotificationTemplate, NotificationTrigger,
};
use crate::forms::optional;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NotificationTemplateForm {
    #[validate(length(min = 1, message = "Nome é obrigatório"))]
    pub name: String,
    pub channel: NotificationChannel,
    pub trigger: NotificationTrigger,
    #[serde(default)]
    pub subject: String,
    /// Body with `{paciente}`, `{data}` style placeholders filled in by the backend.
    #[validate(length(min = 1, message = "Mensagem é obrigatória"))]
    pub message: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl NotificationTemplateForm {
    pub fn from_template(template: &NotificationTemplate) -> Self {
        Self {
            name: template.name.clone(),
            channel: template.channel,
            trigger: template.trigger,
            subject: template.subject.clone().unwrap_or_default(),
            message: template.message.clone(),
            is_active: template.is_active,
        }
    }

    /// Subject is only kept for e-mail templates.
    pub fn to_payload(&self) -> NewNotificationTemplate {
        NewNotificationTemplate {
            name: self.name.trim().to_string(),
            channel: self.channel,
            trigger: self.trigger,
            subject: match self.channel {
                NotificationChannel::Email => optional(&self.subject),
                _ => None,
            },
            message: self.message.trim().to_string(),
            is_active: self.is_active,
        }
    }
}
