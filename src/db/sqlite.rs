use crate::db::models::{DbUser, OltDevice, OntDevice, PonTechnology, Role};
use crate::db::schema::Table;
use crate::error::DesignerError;
use serde::de::DeserializeOwned;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite, SqliteConnection};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub type SqlitePool = Pool<Sqlite>;

/// The single handle onto the SQLite file. Cheap to clone; every component
/// holds its own clone instead of reaching for a global.
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
    path: Arc<PathBuf>,
}

impl Store {
    /// Open (creating if missing) the database file at `path`.
    ///
    /// The journal is kept in `DELETE` mode so the main file is always the
    /// whole database, which is what the backup exporter copies.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, DesignerError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let connect_opts = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Delete)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect_with(connect_opts)
            .await?;

        Ok(Self {
            pool,
            path: Arc::new(path),
        })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Connectivity check.
    pub async fn ping(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }

    pub async fn table_exists(&self, table: Table) -> Result<bool, DesignerError> {
        let mut conn = self.pool.acquire().await?;
        table_exists(&mut conn, table).await
    }

    /// Run a raw statement outside of any transaction.
    pub async fn execute(&self, sql: &str) -> Result<u64, DesignerError> {
        let done = sqlx::query(sql).execute(&self.pool).await?;
        Ok(done.rows_affected())
    }

    pub async fn list_tables(&self) -> Result<Vec<String>, DesignerError> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(|r| r.0).collect())
    }

    pub async fn list_users(&self) -> Result<Vec<DbUser>, DesignerError> {
        let rows = sqlx::query(
            "SELECT id, email, password_hash, role, verified FROM users ORDER BY email",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_user).collect()
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<DbUser>, DesignerError> {
        let row = sqlx::query(
            "SELECT id, email, password_hash, role, verified FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Self::row_to_user).transpose()
    }

    pub async fn list_olts(&self) -> Result<Vec<OltDevice>, DesignerError> {
        let rows = sqlx::query(
            r#"SELECT id, model, description, technology, pon_ports,
               uplink_ports, sfp_options, components
               FROM olts ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_olt).collect()
    }

    pub async fn list_onts(&self) -> Result<Vec<OntDevice>, DesignerError> {
        let rows = sqlx::query(
            r#"SELECT id, model, description, technology, rx_sensitivity,
               ethernet_ports, fxs_ports, wifi
               FROM onts ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_ont).collect()
    }

    fn row_to_user(row: SqliteRow) -> Result<DbUser, DesignerError> {
        let verified_i: i64 = row.try_get("verified")?;
        let role: String = row.try_get("role")?;
        Ok(DbUser {
            id: row.try_get("id")?,
            email: row.try_get("email")?,
            password_hash: row.try_get("password_hash")?,
            role: Role::from(role),
            verified: verified_i != 0,
        })
    }

    fn row_to_olt(row: SqliteRow) -> Result<OltDevice, DesignerError> {
        let technology: String = row.try_get("technology")?;
        let pon_ports: i64 = row.try_get("pon_ports")?;
        Ok(OltDevice {
            id: row.try_get("id")?,
            model: row.try_get("model")?,
            description: row.try_get("description")?,
            technology: parse_technology(&technology)?,
            pon_ports: decode_count(pon_ports)?,
            uplink_ports: decode_json(&row, "uplink_ports")?,
            sfp_options: decode_json(&row, "sfp_options")?,
            components: decode_json(&row, "components")?,
        })
    }

    fn row_to_ont(row: SqliteRow) -> Result<OntDevice, DesignerError> {
        let technology: String = row.try_get("technology")?;
        let fxs_ports: i64 = row.try_get("fxs_ports")?;
        let wifi_json: Option<String> = row.try_get("wifi")?;
        let wifi = match wifi_json {
            Some(s) => Some(serde_json::from_str(&s)?),
            None => None,
        };
        Ok(OntDevice {
            id: row.try_get("id")?,
            model: row.try_get("model")?,
            description: row.try_get("description")?,
            technology: parse_technology(&technology)?,
            rx_sensitivity: row.try_get("rx_sensitivity")?,
            ethernet_ports: decode_json(&row, "ethernet_ports")?,
            fxs_ports: decode_count(fxs_ports)?,
            wifi,
        })
    }
}

/// Existence check usable inside a transaction.
pub async fn table_exists(conn: &mut SqliteConnection, table: Table) -> Result<bool, DesignerError> {
    let (exists,): (bool,) = sqlx::query_as(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?)",
    )
    .bind(table.name())
    .fetch_one(conn)
    .await?;
    Ok(exists)
}

fn decode_json<T: DeserializeOwned>(row: &SqliteRow, column: &str) -> Result<T, DesignerError> {
    let raw: String = row.try_get(column)?;
    Ok(serde_json::from_str(&raw)?)
}

fn decode_count(v: i64) -> Result<u32, DesignerError> {
    u32::try_from(v).map_err(|e| sqlx::Error::Decode(Box::new(e)).into())
}

fn parse_technology(s: &str) -> Result<PonTechnology, DesignerError> {
    s.parse::<PonTechnology>()
        .map_err(|e| sqlx::Error::Decode(e.into()).into())
}
