//! SQL DDL for the five tables backing the designer.
//! SQLite-first: structured sub-fields are JSON serialized into TEXT columns.

use std::fmt;

/// Every table owned by the store, in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Users,
    VerificationCodes,
    Olts,
    Onts,
    Settings,
}

impl Table {
    pub const ALL: [Table; 5] = [
        Table::Users,
        Table::VerificationCodes,
        Table::Olts,
        Table::Onts,
        Table::Settings,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Table::Users => "users",
            Table::VerificationCodes => "verification_codes",
            Table::Olts => "olts",
            Table::Onts => "onts",
            Table::Settings => "settings",
        }
    }

    pub fn ddl(self) -> &'static str {
        match self {
            Table::Users => USERS_DDL,
            Table::VerificationCodes => VERIFICATION_CODES_DDL,
            Table::Olts => OLTS_DDL,
            Table::Onts => ONTS_DDL,
            Table::Settings => SETTINGS_DDL,
        }
    }

    /// Whether creating this table is followed by inserting seed rows.
    pub fn is_seeded(self) -> bool {
        matches!(self, Table::Users | Table::Olts | Table::Onts)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `verified` is stored as INTEGER 0/1.
const USERS_DDL: &str = r#"
CREATE TABLE users (
    id TEXT PRIMARY KEY,
    email TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    role TEXT NOT NULL,
    verified INTEGER NOT NULL DEFAULT 0
)
"#;

const VERIFICATION_CODES_DDL: &str = r#"
CREATE TABLE verification_codes (
    email TEXT PRIMARY KEY,
    code TEXT NOT NULL,
    expires_at TEXT NOT NULL -- RFC3339
)
"#;

const OLTS_DDL: &str = r#"
CREATE TABLE olts (
    id TEXT PRIMARY KEY,
    model TEXT NOT NULL,
    description TEXT NULL,
    technology TEXT NOT NULL,
    pon_ports INTEGER NOT NULL,
    uplink_ports TEXT NOT NULL, -- JSON array
    sfp_options TEXT NOT NULL, -- JSON array
    components TEXT NOT NULL -- JSON array
)
"#;

const ONTS_DDL: &str = r#"
CREATE TABLE onts (
    id TEXT PRIMARY KEY,
    model TEXT NOT NULL,
    description TEXT NULL,
    technology TEXT NOT NULL,
    rx_sensitivity REAL NOT NULL,
    ethernet_ports TEXT NOT NULL, -- JSON array
    fxs_ports INTEGER NOT NULL,
    wifi TEXT NULL -- JSON object
)
"#;

const SETTINGS_DDL: &str = r#"
CREATE TABLE settings (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL -- JSON document
)
"#;
