use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::LazyLock;

/// Process-wide configuration, resolved once on first access.
pub static CONFIG: LazyLock<Config> =
    LazyLock::new(|| Config::load().expect("invalid pol-designer configuration"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub listen_addr: String,
    /// SQLite file backing every table; the parent directory is created on open.
    pub database_path: PathBuf,
    pub loglevel: String,
    /// Bearer key accepted by the admin auth gate.
    pub admin_key: String,
    pub seed_admin_email: String,
    pub seed_admin_password: String,
    pub backup_prefix: String,
    pub connect_retries: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:4001".to_string(),
            database_path: PathBuf::from("database/pol_designer.db"),
            loglevel: "info".to_string(),
            admin_key: "changeme".to_string(),
            seed_admin_email: "admin@pol.designer".to_string(),
            seed_admin_password: "admin123".to_string(),
            backup_prefix: "pol_designer_backup".to_string(),
            connect_retries: 3,
        }
    }
}

impl Config {
    /// Defaults, then `config.toml` if present, then `POL_*` environment variables.
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("POL_"))
    }
}
