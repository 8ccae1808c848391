use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::product::ModelCode;
use crate::domain::size::SizeCode;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlindId(pub String);

impl BlindId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccessoryId(pub String);

impl AccessoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlindKind {
    Darkening,
    Translucent,
    /// Screens sold through the blind table (insect screens).
    Accessory,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Blind {
    pub id: BlindId,
    pub model: ModelCode,
    pub name: String,
    pub subtitle: Option<String>,
    pub kind: BlindKind,
    pub compatible_models: Vec<ModelCode>,
    pub prices: BTreeMap<SizeCode, Decimal>,
}

impl Blind {
    pub fn fits(&self, model: &ModelCode) -> bool {
        self.compatible_models.contains(model)
    }

    pub fn price_for(&self, code: &SizeCode) -> Option<Decimal> {
        self.prices.get(code).copied()
    }
}

/// The single flashing table. Applies to pitched tile/corrugated installs only;
/// every other roof context gets a custom-flashing advisory instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Flashing {
    pub id: String,
    pub model: ModelCode,
    pub name: String,
    pub prices: BTreeMap<SizeCode, Decimal>,
}

impl Flashing {
    pub fn price_for(&self, code: &SizeCode) -> Option<Decimal> {
        self.prices.get(code).copied()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessoryKind {
    BlindTray,
    TunnelExtension,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Accessory {
    pub id: AccessoryId,
    pub name: String,
    pub kind: AccessoryKind,
    pub compatible_models: Vec<ModelCode>,
    pub prices: BTreeMap<SizeCode, Decimal>,
}

impl Accessory {
    pub fn fits(&self, model: &ModelCode) -> bool {
        self.compatible_models.contains(model)
    }

    pub fn price_for(&self, code: &SizeCode) -> Option<Decimal> {
        self.prices.get(code).copied()
    }
}
