#![allow(dead_code)]

use pol_designer::db::{SchemaManager, SeedAdmin, Store};
use pol_designer::error::DesignerError;
use pol_designer::i18n::Baselines;
use pol_designer::middleware::StaticKeyGate;
use pol_designer::router::DesignerState;
use pol_designer::service::{CredentialHasher, TextMap};
use std::{
    fs,
    path::PathBuf,
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

pub const ADMIN_KEY: &str = "test-admin-key";
pub const SEED_EMAIL: &str = "admin@pol.designer";
pub const SEED_PASSWORD: &str = "admin123";
pub const TEST_PORT: u16 = 4001;

/// Deterministic stand-in for argon2 so tests stay fast.
pub struct ReversedHasher;

impl CredentialHasher for ReversedHasher {
    fn hash(&self, password: &str) -> Result<String, DesignerError> {
        Ok(format!("rev${}", password.chars().rev().collect::<String>()))
    }

    fn verify(&self, password: &str, stored_hash: &str) -> Result<bool, DesignerError> {
        Ok(self.hash(password)? == stored_hash)
    }
}

/// Hasher that always fails, to make seeding of `users` error out.
pub struct FailingHasher;

impl CredentialHasher for FailingHasher {
    fn hash(&self, _password: &str) -> Result<String, DesignerError> {
        Err(DesignerError::PasswordHash("hasher unavailable".into()))
    }

    fn verify(&self, _password: &str, _stored_hash: &str) -> Result<bool, DesignerError> {
        Err(DesignerError::PasswordHash("hasher unavailable".into()))
    }
}

/// A unique, not-yet-existing database path; removed on drop.
pub struct TempDb {
    pub path: PathBuf,
}

impl TempDb {
    pub fn new(label: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!(
            "pol-designer-{label}-{}-{}.sqlite",
            std::process::id(),
            nanos
        ));
        Self { path }
    }
}

impl Drop for TempDb {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
        let mut journal = self.path.clone().into_os_string();
        journal.push("-journal");
        let _ = fs::remove_file(journal);
    }
}

pub fn seed_admin() -> SeedAdmin {
    SeedAdmin {
        email: SEED_EMAIL.to_string(),
        password: SEED_PASSWORD.to_string(),
    }
}

pub async fn open_store(db: &TempDb) -> Store {
    Store::open(&db.path).await.expect("failed to open store")
}

pub fn schema_manager(store: &Store) -> SchemaManager {
    SchemaManager::new(store.clone(), Arc::new(ReversedHasher), seed_admin())
}

/// Store with every table initialized.
pub async fn initialized_store(db: &TempDb) -> (Store, SchemaManager) {
    let store = open_store(db).await;
    let schema = schema_manager(&store);
    schema.initialize().await.expect("initialize failed");
    (store, schema)
}

pub fn text_map(pairs: &[(&str, &str)]) -> TextMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Baselines used across override tests: `t` = {a:"1", b:"2"}.
pub fn test_baselines() -> Baselines {
    let mut baselines = Baselines::builtin();
    baselines.insert("t", text_map(&[("a", "1"), ("b", "2")]));
    baselines
}

pub async fn test_state(db: &TempDb) -> DesignerState {
    let (store, schema) = initialized_store(db).await;
    DesignerState::new(
        store,
        schema,
        test_baselines(),
        "pol_designer_backup",
        Arc::new(StaticKeyGate::new(ADMIN_KEY)),
        TEST_PORT,
    )
}
