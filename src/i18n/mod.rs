//! Code-defined baseline text sets that overrides are diffed against.

pub mod fa;

use crate::error::DesignerError;
use crate::service::settings::TextMap;
use std::collections::HashMap;

/// Registry of named baselines, e.g. one per locale.
#[derive(Debug, Clone, Default)]
pub struct Baselines {
    sets: HashMap<String, TextMap>,
}

impl Baselines {
    /// The baselines shipped with the binary.
    pub fn builtin() -> Self {
        let mut baselines = Self::default();
        baselines.insert("fa", to_map(fa::ENTRIES));
        baselines
    }

    pub fn insert(&mut self, name: impl Into<String>, baseline: TextMap) {
        self.sets.insert(name.into(), baseline);
    }

    pub fn get(&self, name: &str) -> Result<&TextMap, DesignerError> {
        self.sets
            .get(name)
            .ok_or_else(|| DesignerError::UnknownBaseline(name.to_string()))
    }
}

fn to_map(entries: &[(&str, &str)]) -> TextMap {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
