use crate::db::sqlite::Store;
use crate::error::DesignerError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Key/value map of text overrides, ordered for stable serialization.
pub type TextMap = BTreeMap<String, String>;

const SMTP_KEY: &str = "smtpConfig";
const TRANSLATIONS_PREFIX: &str = "customTranslations_";

/// Known setting identities and their storage keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingKey {
    Smtp,
    TranslationOverrides(String),
}

impl SettingKey {
    pub fn translations(locale: impl Into<String>) -> Self {
        SettingKey::TranslationOverrides(locale.into())
    }

    pub fn storage_key(&self) -> String {
        match self {
            SettingKey::Smtp => SMTP_KEY.to_string(),
            SettingKey::TranslationOverrides(locale) => format!("{TRANSLATIONS_PREFIX}{locale}"),
        }
    }
}

/// Outbound mail configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub secure: bool,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    pub from_address: String,
}

impl SmtpConfig {
    pub fn validate(&self) -> Result<(), DesignerError> {
        if self.host.trim().is_empty() {
            return Err(DesignerError::Validation("SMTP host must not be empty".into()));
        }
        if self.port == 0 {
            return Err(DesignerError::Validation("SMTP port must be non-zero".into()));
        }
        if !self.from_address.contains('@') {
            return Err(DesignerError::Validation(
                "SMTP from address must be an email address".into(),
            ));
        }
        Ok(())
    }
}

/// Typed settings documents, one variant per known key.
#[derive(Debug, Clone, PartialEq)]
pub enum Setting {
    Smtp(SmtpConfig),
    TranslationOverrides { locale: String, overrides: TextMap },
}

impl Setting {
    pub fn key(&self) -> SettingKey {
        match self {
            Setting::Smtp(_) => SettingKey::Smtp,
            Setting::TranslationOverrides { locale, .. } => {
                SettingKey::TranslationOverrides(locale.clone())
            }
        }
    }

    pub fn validate(&self) -> Result<(), DesignerError> {
        match self {
            Setting::Smtp(cfg) => cfg.validate(),
            Setting::TranslationOverrides { overrides, .. } => {
                if overrides.keys().any(|k| k.is_empty()) {
                    return Err(DesignerError::Validation(
                        "translation keys must not be empty".into(),
                    ));
                }
                Ok(())
            }
        }
    }

    pub fn to_document(&self) -> Result<Value, DesignerError> {
        let doc = match self {
            Setting::Smtp(cfg) => serde_json::to_value(cfg)?,
            Setting::TranslationOverrides { overrides, .. } => serde_json::to_value(overrides)?,
        };
        Ok(doc)
    }

    pub fn from_document(key: &SettingKey, doc: Value) -> Result<Self, DesignerError> {
        let setting = match key {
            SettingKey::Smtp => Setting::Smtp(serde_json::from_value(doc)?),
            SettingKey::TranslationOverrides(locale) => Setting::TranslationOverrides {
                locale: locale.clone(),
                overrides: serde_json::from_value(doc)?,
            },
        };
        Ok(setting)
    }
}

/// Generic upsert store over the `settings` table.
#[derive(Clone)]
pub struct SettingsStore {
    store: Store,
}

impl SettingsStore {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// `None` when no row exists for `key`.
    pub async fn get(&self, key: &str) -> Result<Option<Value>, DesignerError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM settings WHERE key = ?")
            .bind(key)
            .fetch_optional(self.store.pool())
            .await?;
        match row {
            Some((raw,)) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Insert, or replace the whole value of an existing key.
    pub async fn put(&self, key: &str, value: &Value) -> Result<(), DesignerError> {
        let raw = serde_json::to_string(value)?;
        sqlx::query(
            r#"
            INSERT INTO settings (key, value) VALUES (?, ?)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
        )
        .bind(key)
        .bind(raw)
        .execute(self.store.pool())
        .await?;
        Ok(())
    }

    /// Returns whether a row was removed.
    pub async fn delete(&self, key: &str) -> Result<bool, DesignerError> {
        let done = sqlx::query("DELETE FROM settings WHERE key = ?")
            .bind(key)
            .execute(self.store.pool())
            .await?;
        Ok(done.rows_affected() > 0)
    }

    pub async fn load(&self, key: &SettingKey) -> Result<Option<Setting>, DesignerError> {
        match self.get(&key.storage_key()).await? {
            Some(doc) => Ok(Some(Setting::from_document(key, doc)?)),
            None => Ok(None),
        }
    }

    /// Validate, then upsert under the setting's own key.
    pub async fn save(&self, setting: &Setting) -> Result<(), DesignerError> {
        setting.validate()?;
        let doc = setting.to_document()?;
        self.put(&setting.key().storage_key(), &doc).await
    }

    pub async fn load_smtp(&self) -> Result<Option<SmtpConfig>, DesignerError> {
        match self.load(&SettingKey::Smtp).await? {
            Some(Setting::Smtp(cfg)) => Ok(Some(cfg)),
            _ => Ok(None),
        }
    }
}
