//! Fixed rows inserted the first time their table is created.

use crate::db::models::{
    EthernetPort, OltComponent, OltDevice, OntDevice, PonTechnology, SfpOption, UplinkPort,
    WifiSpec,
};
use crate::error::DesignerError;
use sqlx::SqliteConnection;

pub const SEED_ADMIN_ID: &str = "00000000-0000-0000-0000-000000000001";

/// Credentials for the one admin account created with the `users` table.
#[derive(Clone)]
pub struct SeedAdmin {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for SeedAdmin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedAdmin")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

pub(crate) async fn insert_admin(
    conn: &mut SqliteConnection,
    email: &str,
    password_hash: &str,
) -> Result<(), DesignerError> {
    sqlx::query(
        "INSERT INTO users (id, email, password_hash, role, verified) VALUES (?, ?, ?, 'admin', 1)",
    )
    .bind(SEED_ADMIN_ID)
    .bind(email)
    .bind(password_hash)
    .execute(conn)
    .await?;
    Ok(())
}

pub(crate) async fn insert_olts(conn: &mut SqliteConnection) -> Result<usize, DesignerError> {
    let devices = baseline_olts();
    for olt in &devices {
        sqlx::query(
            r#"
            INSERT INTO olts (
                id, model, description, technology, pon_ports,
                uplink_ports, sfp_options, components
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&olt.id)
        .bind(&olt.model)
        .bind(olt.description.as_deref())
        .bind(olt.technology.as_str())
        .bind(i64::from(olt.pon_ports))
        .bind(serde_json::to_string(&olt.uplink_ports)?)
        .bind(serde_json::to_string(&olt.sfp_options)?)
        .bind(serde_json::to_string(&olt.components)?)
        .execute(&mut *conn)
        .await?;
    }
    Ok(devices.len())
}

pub(crate) async fn insert_onts(conn: &mut SqliteConnection) -> Result<usize, DesignerError> {
    let devices = baseline_onts();
    for ont in &devices {
        let wifi_json = ont.wifi.as_ref().map(serde_json::to_string).transpose()?;
        sqlx::query(
            r#"
            INSERT INTO onts (
                id, model, description, technology, rx_sensitivity,
                ethernet_ports, fxs_ports, wifi
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&ont.id)
        .bind(&ont.model)
        .bind(ont.description.as_deref())
        .bind(ont.technology.as_str())
        .bind(ont.rx_sensitivity)
        .bind(serde_json::to_string(&ont.ethernet_ports)?)
        .bind(i64::from(ont.fxs_ports))
        .bind(wifi_json)
        .execute(&mut *conn)
        .await?;
    }
    Ok(devices.len())
}

fn uplink(speed: &str, count: u32, media: &str) -> UplinkPort {
    UplinkPort {
        speed: speed.to_string(),
        count,
        media: media.to_string(),
    }
}

fn sfp(name: &str, class: &str, tx_power_dbm: f64) -> SfpOption {
    SfpOption {
        name: name.to_string(),
        class: class.to_string(),
        tx_power_dbm,
    }
}

fn component(name: &str, kind: &str, quantity: u32) -> OltComponent {
    OltComponent {
        name: name.to_string(),
        kind: kind.to_string(),
        quantity,
    }
}

fn eth(speed: &str, count: u32) -> EthernetPort {
    EthernetPort {
        speed: speed.to_string(),
        count,
    }
}

pub fn baseline_olts() -> Vec<OltDevice> {
    vec![
        OltDevice {
            id: "olt-huawei-ma5800-x2".to_string(),
            model: "Huawei MA5800-X2".to_string(),
            description: Some("Compact 2-slot OLT for small campus deployments".to_string()),
            technology: PonTechnology::Gpon,
            pon_ports: 32,
            uplink_ports: vec![uplink("10G", 4, "SFP+"), uplink("1G", 4, "RJ45")],
            sfp_options: vec![
                sfp("GPON SFP Class B+", "B+", 3.0),
                sfp("GPON SFP Class C+", "C+", 5.0),
            ],
            components: vec![
                component("MPSC control board", "control", 1),
                component("GPHF 16-port GPON board", "service", 2),
                component("PISB DC power board", "power", 1),
            ],
        },
        OltDevice {
            id: "olt-huawei-ma5800-x7".to_string(),
            model: "Huawei MA5800-X7".to_string(),
            description: Some("Mid-size 7-slot OLT with XGS-PON combo boards".to_string()),
            technology: PonTechnology::XgsPon,
            pon_ports: 112,
            uplink_ports: vec![uplink("10G", 8, "SFP+"), uplink("40G", 2, "QSFP+")],
            sfp_options: vec![
                sfp("XGS-PON Combo SFP+ C+", "C+", 5.0),
                sfp("XGS-PON SFP+ N1", "N1", 4.0),
            ],
            components: vec![
                component("MPLB control board", "control", 2),
                component("CSHF 16-port combo board", "service", 7),
                component("PILA power board", "power", 2),
                component("FCBB fan tray", "cooling", 1),
            ],
        },
        OltDevice {
            id: "olt-zte-c320".to_string(),
            model: "ZTE ZXA10 C320".to_string(),
            description: Some("Compact GPON OLT".to_string()),
            technology: PonTechnology::Gpon,
            pon_ports: 32,
            uplink_ports: vec![uplink("10G", 2, "SFP+"), uplink("1G", 4, "SFP")],
            sfp_options: vec![sfp("GPON SFP Class C+", "C+", 5.0)],
            components: vec![
                component("SMXA control board", "control", 1),
                component("GTGH 16-port GPON board", "service", 2),
            ],
        },
    ]
}

pub fn baseline_onts() -> Vec<OntDevice> {
    vec![
        OntDevice {
            id: "ont-huawei-hg8245h".to_string(),
            model: "Huawei HG8245H".to_string(),
            description: Some("Home gateway with 2.4GHz wireless and telephony".to_string()),
            technology: PonTechnology::Gpon,
            rx_sensitivity: -27.0,
            ethernet_ports: vec![eth("1G", 4)],
            fxs_ports: 2,
            wifi: Some(WifiSpec {
                standard: "802.11n".to_string(),
                bands: vec!["2.4GHz".to_string()],
                max_rate_mbps: 300,
            }),
        },
        OntDevice {
            id: "ont-huawei-hg8010h".to_string(),
            model: "Huawei HG8010H".to_string(),
            description: Some("Single-port bridge ONT".to_string()),
            technology: PonTechnology::Gpon,
            rx_sensitivity: -27.0,
            ethernet_ports: vec![eth("1G", 1)],
            fxs_ports: 0,
            wifi: None,
        },
        OntDevice {
            id: "ont-zte-f670l".to_string(),
            model: "ZTE F670L".to_string(),
            description: Some("Dual-band wireless ONT".to_string()),
            technology: PonTechnology::Gpon,
            rx_sensitivity: -28.0,
            ethernet_ports: vec![eth("1G", 4)],
            fxs_ports: 1,
            wifi: Some(WifiSpec {
                standard: "802.11ac".to_string(),
                bands: vec!["2.4GHz".to_string(), "5GHz".to_string()],
                max_rate_mbps: 1200,
            }),
        },
        OntDevice {
            id: "ont-nokia-xs-010x-q".to_string(),
            model: "Nokia XS-010X-Q".to_string(),
            description: Some("10G symmetric bridge ONT".to_string()),
            technology: PonTechnology::XgsPon,
            rx_sensitivity: -28.5,
            ethernet_ports: vec![eth("10G", 1)],
            fxs_ports: 0,
            wifi: None,
        },
    ]
}
