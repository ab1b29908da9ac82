pub mod backup;
pub mod overrides;
pub mod password;
pub mod settings;

pub use backup::{BackupArtifact, BackupExporter};
pub use overrides::OverrideEngine;
pub use password::{Argon2Hasher, CredentialHasher};
pub use settings::{Setting, SettingKey, SettingsStore, SmtpConfig, TextMap};
