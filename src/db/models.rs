use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Admin,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::Other(r) => r.as_str(),
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        if s == "admin" { Role::Admin } else { Role::Other(s) }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A row of `users`. The hash is an opaque PHC string.
#[derive(Debug, Clone, PartialEq)]
pub struct DbUser {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub verified: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PonTechnology {
    #[serde(rename = "GPON")]
    Gpon,
    #[serde(rename = "XG-PON")]
    XgPon,
    #[serde(rename = "XGS-PON")]
    XgsPon,
    #[serde(rename = "EPON")]
    Epon,
}

impl PonTechnology {
    pub fn as_str(self) -> &'static str {
        match self {
            PonTechnology::Gpon => "GPON",
            PonTechnology::XgPon => "XG-PON",
            PonTechnology::XgsPon => "XGS-PON",
            PonTechnology::Epon => "EPON",
        }
    }
}

impl FromStr for PonTechnology {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GPON" => Ok(PonTechnology::Gpon),
            "XG-PON" => Ok(PonTechnology::XgPon),
            "XGS-PON" => Ok(PonTechnology::XgsPon),
            "EPON" => Ok(PonTechnology::Epon),
            other => Err(format!("unknown PON technology `{other}`")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UplinkPort {
    pub speed: String,
    pub count: u32,
    pub media: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SfpOption {
    pub name: String,
    /// Optical budget class, e.g. `B+` or `C+`.
    pub class: String,
    pub tx_power_dbm: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OltComponent {
    pub name: String,
    pub kind: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OltDevice {
    pub id: String,
    pub model: String,
    pub description: Option<String>,
    pub technology: PonTechnology,
    pub pon_ports: u32,
    pub uplink_ports: Vec<UplinkPort>,
    pub sfp_options: Vec<SfpOption>,
    pub components: Vec<OltComponent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthernetPort {
    pub speed: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WifiSpec {
    pub standard: String,
    pub bands: Vec<String>,
    pub max_rate_mbps: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OntDevice {
    pub id: String,
    pub model: String,
    pub description: Option<String>,
    pub technology: PonTechnology,
    pub rx_sensitivity: f64,
    pub ethernet_ports: Vec<EthernetPort>,
    pub fxs_ports: u32,
    pub wifi: Option<WifiSpec>,
}
