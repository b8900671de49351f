//! Plan list and notification settings, both backed by the local store.

use crate::domain::notification::NotificationSettings;
use crate::domain::types::PlanName;
use crate::repository::{NotificationReader, NotificationWriter};
use crate::store::{LocalStore, NOTIFICATION_SETTINGS_KEY, PLANS_KEY};

pub const DEFAULT_PLANS: [&str; 3] = ["Particular", "Plano A", "Plano B"];

/// Stored plans, or the defaults when nothing readable is stored.
pub fn load_plans(store: &LocalStore) -> Vec<String> {
    store
        .get::<Vec<String>>(PLANS_KEY)
        .unwrap_or_else(|| DEFAULT_PLANS.iter().map(ToString::to_string).collect())
}

/// Appends a plan; blank names and duplicates leave the list unchanged.
pub fn add_plan(store: &LocalStore, name: &str) -> Vec<String> {
    let mut plans = load_plans(store);
    let Ok(name) = PlanName::new(name) else {
        return plans;
    };
    if plans.iter().any(|plan| plan == name.as_str()) {
        return plans;
    }
    plans.push(name.into_inner());
    store.set(PLANS_KEY, &plans);
    plans
}

pub fn remove_plan(store: &LocalStore, name: &str) -> Vec<String> {
    let mut plans = load_plans(store);
    plans.retain(|plan| plan != name);
    store.set(PLANS_KEY, &plans);
    plans
}

/// Where the settings shown on screen came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsSource {
    Remote,
    Local,
    Default,
}

impl SettingsSource {
    /// Toast shown after loading, if any.
    pub fn notice(self) -> Option<&'static str> {
        match self {
            SettingsSource::Remote => None,
            SettingsSource::Local => Some("Configurações carregadas localmente"),
            SettingsSource::Default => Some("API não disponível. Configurações em modo local."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSettings {
    pub settings: NotificationSettings,
    pub source: SettingsSource,
}

/// Backend first, then the local copy, then defaults. Never fails.
pub async fn load_notification_settings<R>(repo: &R, store: &LocalStore) -> LoadedSettings
where
    R: NotificationReader + ?Sized,
{
    match repo.get_notification_settings().await {
        Ok(settings) => {
            store.set(NOTIFICATION_SETTINGS_KEY, &settings);
            LoadedSettings {
                settings,
                source: SettingsSource::Remote,
            }
        }
        Err(err) => {
            log::warn!("Notification settings unavailable, using local copy: {err}");
            match store.get::<NotificationSettings>(NOTIFICATION_SETTINGS_KEY) {
                Some(settings) => LoadedSettings {
                    settings,
                    source: SettingsSource::Local,
                },
                None => LoadedSettings {
                    settings: NotificationSettings::default(),
                    source: SettingsSource::Default,
                },
            }
        }
    }
}

/// Saves to the backend, falling back to a local-only write.
///
/// Returns the settings now in effect and whether the backend accepted them.
pub async fn save_notification_settings<R>(
    repo: &R,
    store: &LocalStore,
    settings: &NotificationSettings,
) -> (NotificationSettings, SettingsSource)
where
    R: NotificationWriter + ?Sized,
{
    match repo.update_notification_settings(settings).await {
        Ok(saved) => {
            store.set(NOTIFICATION_SETTINGS_KEY, &saved);
            (saved, SettingsSource::Remote)
        }
        Err(err) => {
            log::warn!("Saving notification settings locally only: {err}");
            store.set(NOTIFICATION_SETTINGS_KEY, settings);
            (settings.clone(), SettingsSource::Local)
        }
    }
}

/// Toast after [`save_notification_settings`].
pub fn save_notice(source: SettingsSource) -> &'static str {
    match source {
        SettingsSource::Remote => "Configurações salvas com sucesso!",
        _ => "Configurações salvas localmente (API não disponível)",
    }
}

#[cfg(test)]
mod plan_tests {
    use super::*;

    #[test]
    fn plans_default_add_and_remove() {
        let store = LocalStore::in_memory();
        assert_eq!(load_plans(&store), DEFAULT_PLANS);

        let plans = add_plan(&store, "  Unimed ");
        assert_eq!(plans.last().map(String::as_str), Some("Unimed"));

        assert_eq!(add_plan(&store, "Plano A").len(), 4);
        assert_eq!(add_plan(&store, "   ").len(), 4);

        let plans = remove_plan(&store, "Particular");
        assert_eq!(plans, vec!["Plano A", "Plano B", "Unimed"]);
        assert_eq!(load_plans(&store), plans);
    }
}
