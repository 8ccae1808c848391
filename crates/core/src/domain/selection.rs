use serde::{Deserialize, Serialize};

use crate::domain::extras::{AccessoryId, BlindId};
use crate::domain::product::{OpeningType, ProductCategory, ProductId};
use crate::domain::size::SizeCode;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoofPitch {
    Pitched,
    Flat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoofMaterial {
    TiledCorrugated,
    WideMetal,
}

/// Computed from pitch and material, never stored independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivedRoofType {
    Tiled,
    WideMetal,
    Flat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructuralSpacing {
    Mm600,
    Mm900,
    Mm1200,
    Unspecified,
}

impl StructuralSpacing {
    pub const ALL: [StructuralSpacing; 4] =
        [Self::Mm600, Self::Mm900, Self::Mm1200, Self::Unspecified];

    /// Pitched size codes carry a single-letter series prefix per spacing.
    pub fn pitched_prefix(&self) -> Option<&'static str> {
        match self {
            Self::Mm600 => Some("C"),
            Self::Mm900 => Some("M"),
            Self::Mm1200 => Some("S"),
            Self::Unspecified => None,
        }
    }

    /// Flat size codes encode the curb width in their leading digits.
    pub fn flat_prefixes(&self) -> Option<&'static [&'static str]> {
        match self {
            Self::Mm600 => Some(&["14", "22"]),
            Self::Mm900 => Some(&["30", "34"]),
            Self::Mm1200 => Some(&["46"]),
            Self::Unspecified => None,
        }
    }

    /// Roof-window codes use the pitched series letter followed by "K".
    pub fn window_prefix(&self) -> Option<&'static str> {
        match self {
            Self::Mm600 => Some("CK"),
            Self::Mm900 => Some("MK"),
            Self::Mm1200 => Some("SK"),
            Self::Unspecified => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Mm600 => "600mm",
            Self::Mm900 => "900mm",
            Self::Mm1200 => "1200mm",
            Self::Unspecified => "Unsure / Not specified",
        }
    }
}

/// One user session's accumulated choices. Mutated only by returning a new
/// value from a flow transition; the session layer owns the live copy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    pub category: Option<ProductCategory>,
    pub roof_pitch: Option<RoofPitch>,
    pub roof_material: Option<RoofMaterial>,
    pub opening: Option<OpeningType>,
    pub orientation: Orientation,
    pub spacing: Option<StructuralSpacing>,
    pub size_code: Option<SizeCode>,
    pub selected_product: Option<ProductId>,
    pub selected_blind: Option<BlindId>,
    pub insect_screen: bool,
    pub selected_addon: Option<AccessoryId>,
}

impl SelectionState {
    pub fn derived_roof_type(&self) -> Option<DerivedRoofType> {
        match (self.roof_pitch?, self.roof_material) {
            (RoofPitch::Flat, _) => Some(DerivedRoofType::Flat),
            (RoofPitch::Pitched, Some(RoofMaterial::TiledCorrugated)) => {
                Some(DerivedRoofType::Tiled)
            }
            (RoofPitch::Pitched, Some(RoofMaterial::WideMetal)) => Some(DerivedRoofType::WideMetal),
            (RoofPitch::Pitched, None) => None,
        }
    }

    pub fn is_flat_roof(&self) -> bool {
        matches!(self.derived_roof_type(), Some(DerivedRoofType::Flat))
    }
}

#[cfg(test)]
mod tests {
    use super::{DerivedRoofType, RoofMaterial, RoofPitch, SelectionState};

    #[test]
    fn flat_pitch_derives_flat_regardless_of_material() {
        let state = SelectionState {
            roof_pitch: Some(RoofPitch::Flat),
            roof_material: Some(RoofMaterial::WideMetal),
            ..SelectionState::default()
        };
        assert_eq!(state.derived_roof_type(), Some(DerivedRoofType::Flat));
        assert!(state.is_flat_roof());
    }

    #[test]
    fn pitched_without_material_has_no_derived_type() {
        let state =
            SelectionState { roof_pitch: Some(RoofPitch::Pitched), ..SelectionState::default() };
        assert_eq!(state.derived_roof_type(), None);
        assert!(!state.is_flat_roof());
    }

    #[test]
    fn pitched_materials_map_to_tiled_and_wide_metal() {
        let tiled = SelectionState {
            roof_pitch: Some(RoofPitch::Pitched),
            roof_material: Some(RoofMaterial::TiledCorrugated),
            ..SelectionState::default()
        };
        let wide = SelectionState {
            roof_material: Some(RoofMaterial::WideMetal),
            ..tiled.clone()
        };
        assert_eq!(tiled.derived_roof_type(), Some(DerivedRoofType::Tiled));
        assert_eq!(wide.derived_roof_type(), Some(DerivedRoofType::WideMetal));
    }
}
