//! Small persisted key-value store for non-critical settings.
//!
//! Every write goes straight to disk and every failure is logged and swallowed:
//! the store is a fallback cache, never the source of truth.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub const PLANS_KEY: &str = "plans_list_v1";
pub const NOTIFICATION_SETTINGS_KEY: &str = "notification_settings";
pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const USER_KEY: &str = "user";
pub const SUPPORT_TICKETS_KEY: &str = "support_tickets";

/// JSON-file backed store; `in_memory` skips the file entirely.
#[derive(Debug)]
pub struct LocalStore {
    path: Option<PathBuf>,
    entries: RwLock<BTreeMap<String, Value>>,
}

impl LocalStore {
    /// Opens the store at `path`, starting empty if the file is missing or unreadable.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
                log::warn!("Ignoring corrupt local store {}: {err}", path.display());
                BTreeMap::new()
            }),
            Err(err) => {
                log::debug!("Local store {} not loaded: {err}", path.display());
                BTreeMap::new()
            }
        };

        Self {
            path: Some(path),
            entries: RwLock::new(entries),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            path: None,
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    /// Reads `key`, returning `None` when it is absent or does not decode as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let value = entries.get(key)?.clone();
        match serde_json::from_value(value) {
            Ok(decoded) => Some(decoded),
            Err(err) => {
                log::warn!("Ignoring unreadable local value `{key}`: {err}");
                None
            }
        }
    }

    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let value = match serde_json::to_value(value) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("Failed to encode local value `{key}`: {err}");
                return;
            }
        };
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value);
        self.persist(&entries);
    }

    pub fn remove(&self, key: &str) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if entries.remove(key).is_some() {
            self.persist(&entries);
        }
    }

    fn persist(&self, entries: &BTreeMap<String, Value>) {
        let Some(path) = &self.path else {
            return;
        };

        let result = serde_json::to_string_pretty(entries)
            .map_err(std::io::Error::other)
            .and_then(|contents| {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)?;
                }
                let tmp = path.with_extension("tmp");
                fs::write(&tmp, contents)?;
                fs::rename(&tmp, path)
            });

        if let Err(err) = result {
            log::warn!("Failed to write local store {}: {err}", path.display());
        }
    }
}
