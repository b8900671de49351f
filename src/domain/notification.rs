//! Notification templates, delivery logs and clinic-wide settings.

use serde::{Deserialize, Serialize};

use crate::domain::types::{AppointmentId, NotificationLogId, PatientId, TemplateId};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NotificationChannel {
    Whatsapp,
    Sms,
    Email,
    InApp,
}

impl NotificationChannel {
    pub fn label(self) -> &'static str {
        match self {
            NotificationChannel::Whatsapp => "WhatsApp",
            NotificationChannel::Sms => "SMS",
            NotificationChannel::Email => "E-mail",
            NotificationChannel::InApp => "Sistema",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum NotificationTrigger {
    #[serde(rename = "manual")]
    Manual,
    #[serde(rename = "24h_before")]
    DayBefore,
    #[serde(rename = "2h_before")]
    TwoHoursBefore,
    #[serde(rename = "on_confirm")]
    OnConfirm,
    #[serde(rename = "on_cancel")]
    OnCancel,
}

impl NotificationTrigger {
    pub fn label(self) -> &'static str {
        match self {
            NotificationTrigger::Manual => "Manual",
            NotificationTrigger::DayBefore => "24h antes",
            NotificationTrigger::TwoHoursBefore => "2h antes",
            NotificationTrigger::OnConfirm => "Ao confirmar",
            NotificationTrigger::OnCancel => "Ao cancelar",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NotificationTemplate {
    pub id: TemplateId,
    pub name: String,
    pub channel: NotificationChannel,
    pub trigger: NotificationTrigger,
    /// Only meaningful for e-mail templates.
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Payload for both template creation and full template updates.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NewNotificationTemplate {
    pub name: String,
    pub channel: NotificationChannel,
    pub trigger: NotificationTrigger,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
    pub is_active: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NotificationLog {
    pub id: NotificationLogId,
    #[serde(default)]
    pub appointment_id: Option<AppointmentId>,
    #[serde(default)]
    pub patient_id: Option<PatientId>,
    pub channel: NotificationChannel,
    #[serde(default)]
    pub recipient: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub sent_at: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

/// Clinic-wide notification switches.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationSettings {
    pub id: String,
    pub whatsapp_enabled: bool,
    pub sms_enabled: bool,
    pub email_enabled: bool,
    pub notification_24h_enabled: bool,
    pub notification_2h_enabled: bool,
    pub notification_on_confirm_enabled: bool,
    #[serde(default)]
    pub updated_at: String,
}

impl Default for NotificationSettings {
    /// Channels off, reminders on: what the clinic gets before anything is configured.
    fn default() -> Self {
        Self {
            id: "default".to_string(),
            whatsapp_enabled: false,
            sms_enabled: false,
            email_enabled: false,
            notification_24h_enabled: true,
            notification_2h_enabled: true,
            notification_on_confirm_enabled: true,
            updated_at: String::new(),
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct SendNotificationRequest {
    pub appointment_id: AppointmentId,
    pub channel: NotificationChannel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<TemplateId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BulkSendResult {
    pub success: u32,
    pub failed: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestNotificationResult {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_wire_names() {
        assert_eq!(
            serde_json::to_string(&NotificationTrigger::DayBefore).unwrap(),
            "\"24h_before\""
        );
        let trigger: NotificationTrigger = serde_json::from_str("\"on_cancel\"").unwrap();
        assert_eq!(trigger.label(), "Ao cancelar");
        assert_eq!(
            serde_json::to_string(&NotificationChannel::InApp).unwrap(),
            "\"in_app\""
        );
    }

    #[test]
    fn default_settings_enable_reminders_only() {
        let settings = NotificationSettings::default();
        assert!(!settings.whatsapp_enabled && !settings.sms_enabled && !settings.email_enabled);
        assert!(settings.notification_24h_enabled);
        assert!(settings.notification_2h_enabled);
        assert!(settings.notification_on_confirm_enabled);
    }
}
