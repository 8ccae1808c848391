use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::size::SizeCode;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelCode(pub String);

impl ModelCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl fmt::Display for ModelCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Skylight,
    RoofWindow,
    SunTunnel,
}

impl ProductCategory {
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Skylight => "Skylight",
            Self::RoofWindow => "Roof Window",
            Self::SunTunnel => "Sun Tunnel",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpeningType {
    Fixed,
    Manual,
    Electric,
    Solar,
}

impl OpeningType {
    pub const ALL: [OpeningType; 4] = [Self::Fixed, Self::Manual, Self::Electric, Self::Solar];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Fixed => "Fixed (Non-opening)",
            Self::Manual => "Manual Opening",
            Self::Electric => "Electric Opening",
            Self::Solar => "Solar Powered",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoofType {
    Pitched,
    Flat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TunnelKind {
    Rigid,
    Flexible,
    FlatUniversal,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub model: ModelCode,
    pub name: String,
    pub category: ProductCategory,
    pub tunnel_kind: Option<TunnelKind>,
    pub roof_types: Vec<RoofType>,
    pub opening: OpeningType,
    pub compatible_sizes: Vec<SizeCode>,
    pub prices: BTreeMap<SizeCode, Decimal>,
}

impl Product {
    pub fn supports_roof(&self, roof: RoofType) -> bool {
        self.roof_types.contains(&roof)
    }

    pub fn price_for(&self, code: &SizeCode) -> Option<Decimal> {
        self.prices.get(code).copied()
    }

    /// Tunnels ship with a single manufacturer-fixed size code.
    pub fn fixed_size(&self) -> Option<&SizeCode> {
        match self.compatible_sizes.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }
}
