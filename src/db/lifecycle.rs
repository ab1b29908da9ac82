use crate::db::schema::Table;
use crate::db::seed::{self, SeedAdmin};
use crate::db::sqlite::{Store, table_exists};
use crate::error::DesignerError;
use crate::service::password::CredentialHasher;
use sqlx::SqliteConnection;
use std::sync::Arc;
use tracing::{info, warn};

/// Tables created (and seeded, where applicable) by one lifecycle call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitReport {
    pub created: Vec<Table>,
}

impl InitReport {
    pub fn is_noop(&self) -> bool {
        self.created.is_empty()
    }
}

/// Creates, seeds and resets the schema.
#[derive(Clone)]
pub struct SchemaManager {
    store: Store,
    hasher: Arc<dyn CredentialHasher>,
    seed_admin: SeedAdmin,
}

impl SchemaManager {
    pub fn new(store: Store, hasher: Arc<dyn CredentialHasher>, seed_admin: SeedAdmin) -> Self {
        Self {
            store,
            hasher,
            seed_admin,
        }
    }

    /// Create every missing table and seed the ones that were just created.
    ///
    /// Each table is handled in its own transaction: the existence check,
    /// the `CREATE TABLE` and its seed rows commit together, so a table is
    /// never left created but unseeded. Calling this with every table
    /// present performs no writes.
    pub async fn initialize(&self) -> Result<InitReport, DesignerError> {
        let mut report = InitReport::default();
        for table in Table::ALL {
            let mut tx = self.store.pool().begin().await?;
            let created = self.ensure_table(&mut tx, table).await?;
            tx.commit().await?;
            if created {
                report.created.push(table);
            }
        }

        if report.is_noop() {
            info!("Database schema already initialized");
        } else {
            info!(created = ?report.created, "Database initialized successfully");
        }
        Ok(report)
    }

    /// Drop all five tables and re-initialize them, atomically.
    ///
    /// Runs in a single transaction, so a failure rolls back to the state
    /// before the call. Errors are never retried here.
    pub async fn reset(&self) -> Result<InitReport, DesignerError> {
        warn!(path = %self.store.path().display(), "Resetting database");

        let mut tx = self.store.pool().begin().await?;
        for table in Table::ALL.iter().rev() {
            sqlx::query(&format!("DROP TABLE IF EXISTS {}", table.name()))
                .execute(&mut *tx)
                .await?;
        }
        info!("All tables dropped");

        let mut report = InitReport::default();
        for table in Table::ALL {
            if self.ensure_table(&mut tx, table).await? {
                report.created.push(table);
            }
        }
        tx.commit().await?;

        info!(created = ?report.created, "Database reset completed");
        Ok(report)
    }

    /// Returns `true` if the table was absent and has now been created.
    async fn ensure_table(
        &self,
        conn: &mut SqliteConnection,
        table: Table,
    ) -> Result<bool, DesignerError> {
        if table_exists(&mut *conn, table).await? {
            return Ok(false);
        }

        sqlx::query(table.ddl()).execute(&mut *conn).await?;
        info!(table = %table, "table created");

        if table.is_seeded() {
            self.seed(conn, table).await?;
        }
        Ok(true)
    }

    async fn seed(&self, conn: &mut SqliteConnection, table: Table) -> Result<(), DesignerError> {
        match table {
            Table::Users => {
                let password_hash = self.hash_seed_password().await?;
                seed::insert_admin(conn, &self.seed_admin.email, &password_hash).await?;
                info!(table = %table, email = %self.seed_admin.email, "seed admin created");
            }
            Table::Olts => {
                let count = seed::insert_olts(conn).await?;
                info!(table = %table, count, "seed catalog inserted");
            }
            Table::Onts => {
                let count = seed::insert_onts(conn).await?;
                info!(table = %table, count, "seed catalog inserted");
            }
            Table::VerificationCodes | Table::Settings => {}
        }
        Ok(())
    }

    async fn hash_seed_password(&self) -> Result<String, DesignerError> {
        let hasher = self.hasher.clone();
        let password = self.seed_admin.password.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DesignerError::PasswordHash(format!("hashing task failed: {e}")))?
    }
}
