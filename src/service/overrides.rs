use crate::error::DesignerError;
use crate::i18n::Baselines;
use crate::service::settings::{Setting, SettingKey, SettingsStore, TextMap};
use std::sync::Arc;
use tracing::{debug, info};

/// Keys of `submitted` whose value differs from `baseline`.
///
/// Keys with no baseline counterpart are always kept.
pub fn diff_against(baseline: &TextMap, submitted: &TextMap) -> TextMap {
    submitted
        .iter()
        .filter(|(key, value)| baseline.get(*key) != Some(*value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// `baseline` with every key in `overrides` replaced.
pub fn merge_over(baseline: &TextMap, overrides: &TextMap) -> TextMap {
    let mut effective = baseline.clone();
    effective.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
    effective
}

/// Persists only the delta between operator-submitted text and a baseline.
#[derive(Clone)]
pub struct OverrideEngine {
    settings: SettingsStore,
    baselines: Arc<Baselines>,
}

impl OverrideEngine {
    pub fn new(settings: SettingsStore, baselines: Arc<Baselines>) -> Self {
        Self {
            settings,
            baselines,
        }
    }

    pub fn baseline(&self, name: &str) -> Result<&TextMap, DesignerError> {
        self.baselines.get(name)
    }

    /// The stored delta for `name`; empty when nothing is overridden.
    pub async fn get_overrides(&self, name: &str) -> Result<TextMap, DesignerError> {
        self.baseline(name)?;
        match self.settings.load(&SettingKey::translations(name)).await? {
            Some(Setting::TranslationOverrides { overrides, .. }) => Ok(overrides),
            _ => Ok(TextMap::new()),
        }
    }

    pub async fn get_effective(&self, name: &str) -> Result<TextMap, DesignerError> {
        let overrides = self.get_overrides(name).await?;
        Ok(merge_over(self.baseline(name)?, &overrides))
    }

    /// Replace the stored delta with the minimal diff of `submitted`.
    /// Returns what was persisted.
    pub async fn set_overrides(
        &self,
        name: &str,
        submitted: &TextMap,
    ) -> Result<TextMap, DesignerError> {
        let baseline = self.baseline(name)?;
        let overrides = diff_against(baseline, submitted);
        let unknown = overrides
            .keys()
            .filter(|k| !baseline.contains_key(*k))
            .count();
        if unknown > 0 {
            debug!(name, unknown, "persisting keys without a baseline value");
        }

        self.settings
            .save(&Setting::TranslationOverrides {
                locale: name.to_string(),
                overrides: overrides.clone(),
            })
            .await?;
        info!(
            name,
            submitted = submitted.len(),
            persisted = overrides.len(),
            "overrides updated"
        );
        Ok(overrides)
    }

    /// Drop the stored delta; a missing row is not an error.
    pub async fn clear_overrides(&self, name: &str) -> Result<(), DesignerError> {
        self.baseline(name)?;
        let removed = self
            .settings
            .delete(&SettingKey::translations(name).storage_key())
            .await?;
        info!(name, removed, "overrides cleared");
        Ok(())
    }
}
