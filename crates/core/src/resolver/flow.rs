//! Step flow controller: a finite-state machine over step ids. Every
//! transition is a pure function from (step, state, choice) to a new state and
//! the next step; forced fields (tunnel SKU and size assignments) travel in
//! the returned state so callers and tests can assert on them directly.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::domain::extras::{AccessoryId, BlindId};
use crate::domain::product::{
    OpeningType, Product, ProductCategory, ProductId, TunnelKind,
};
use crate::domain::selection::{
    Orientation, RoofMaterial, RoofPitch, SelectionState, StructuralSpacing,
};
use crate::domain::size::SizeCode;
use crate::errors::ResolverError;
use crate::resolver::filter::{
    eligible_opening_types, eligible_products, eligible_size_codes, LANDSCAPE_EXCLUDED_CODES,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
    ProductType,
    Pitch,
    Material,
    Opening,
    SunTunnelType,
    RoofWindowModel,
    Truss,
    Size,
    Results,
    Blinds,
    Addon,
    Summary,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Choice {
    Category(ProductCategory),
    Pitch(RoofPitch),
    Material(RoofMaterial),
    Opening(OpeningType),
    TunnelType(TunnelKind),
    WindowModel(ProductId),
    Spacing(StructuralSpacing),
    Orientation(Orientation),
    Size(SizeCode),
    Product(ProductId),
    /// Results entry when spacing was left unspecified and no size has been
    /// chosen: commits product and size together so the terminal state is
    /// always complete.
    ProductAtSize(ProductId, SizeCode),
    Blind(Option<BlindId>),
    InsectScreen(bool),
    Addon(Option<AccessoryId>),
    Continue,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepOption {
    pub choice: Choice,
    pub label: String,
}

impl StepOption {
    fn new(choice: Choice, label: impl Into<String>) -> Self {
        Self { choice, label: label.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionOutcome {
    pub from: StepId,
    pub to: StepId,
    pub state: SelectionState,
}

/// Applies one choice. Rejects out-of-domain choices with `InvalidChoice`
/// without producing a new state.
pub fn apply_choice(
    catalog: &Catalog,
    step: StepId,
    state: &SelectionState,
    choice: &Choice,
) -> Result<TransitionOutcome, ResolverError> {
    let mut next = state.clone();

    let to = match (step, choice) {
        (StepId::ProductType, Choice::Category(category)) => {
            next.category = Some(*category);
            match category {
                // Roof windows only exist for pitched roofs; the pitch
                // question is skipped and the answer forced.
                ProductCategory::RoofWindow => {
                    next.roof_pitch = Some(RoofPitch::Pitched);
                    StepId::Material
                }
                _ => StepId::Pitch,
            }
        }

        (StepId::Pitch, Choice::Pitch(pitch)) => {
            next.roof_pitch = Some(*pitch);
            match (*pitch, state.category) {
                (RoofPitch::Flat, Some(ProductCategory::Skylight)) => StepId::Opening,
                (RoofPitch::Pitched, Some(ProductCategory::Skylight)) => StepId::Material,
                (RoofPitch::Flat, Some(ProductCategory::SunTunnel)) => {
                    force_tunnel(catalog, step, choice, &mut next, TunnelKind::FlatUniversal)?;
                    StepId::Results
                }
                (RoofPitch::Pitched, Some(ProductCategory::SunTunnel)) => StepId::Material,
                _ => return Err(invalid(step, choice)),
            }
        }

        (StepId::Material, Choice::Material(material)) => {
            next.roof_material = Some(*material);
            match (*material, state.category) {
                (RoofMaterial::WideMetal, Some(ProductCategory::SunTunnel)) => {
                    force_tunnel(catalog, step, choice, &mut next, TunnelKind::FlatUniversal)?;
                    StepId::Results
                }
                (RoofMaterial::TiledCorrugated, Some(ProductCategory::SunTunnel)) => {
                    StepId::SunTunnelType
                }
                (_, Some(ProductCategory::RoofWindow)) => StepId::RoofWindowModel,
                (_, Some(ProductCategory::Skylight)) => StepId::Opening,
                _ => return Err(invalid(step, choice)),
            }
        }

        (StepId::SunTunnelType, Choice::TunnelType(kind))
            if matches!(kind, TunnelKind::Rigid | TunnelKind::Flexible) =>
        {
            force_tunnel(catalog, step, choice, &mut next, *kind)?;
            StepId::Results
        }

        (StepId::RoofWindowModel, Choice::WindowModel(id)) => {
            let window = catalog
                .product(id)
                .filter(|product| product.category == ProductCategory::RoofWindow)
                .ok_or_else(|| invalid(step, choice))?;
            next.selected_product = Some(window.id.clone());
            StepId::Truss
        }

        (StepId::Opening, Choice::Opening(opening)) => {
            if !eligible_opening_types(catalog, state).contains(opening) {
                return Err(invalid(step, choice));
            }
            next.opening = Some(*opening);
            next.orientation = Orientation::Portrait;
            StepId::Truss
        }

        (StepId::Truss, Choice::Spacing(spacing)) => {
            next.spacing = Some(*spacing);
            match (*spacing, state.category) {
                (StructuralSpacing::Unspecified, Some(ProductCategory::RoofWindow)) => StepId::Size,
                (StructuralSpacing::Unspecified, _) => StepId::Results,
                _ => StepId::Size,
            }
        }

        (StepId::Size, Choice::Orientation(orientation)) if state.is_flat_roof() => {
            next.orientation = *orientation;
            StepId::Size
        }

        (StepId::Size, Choice::Size(code)) => {
            if !eligible_size_codes(catalog, state).iter().any(|size| &size.code == code) {
                return Err(invalid(step, choice));
            }
            next.size_code = Some(code.clone());
            StepId::Results
        }

        (StepId::Results, Choice::Product(id)) => {
            let product = results_products(catalog, state)
                .into_iter()
                .find(|product| &product.id == id)
                .ok_or_else(|| invalid(step, choice))?;
            if state.size_code.is_none() {
                return Err(invalid(step, choice));
            }
            let after = step_after_results(product);
            next.selected_product = Some(product.id.clone());
            after
        }

        (StepId::Results, Choice::ProductAtSize(id, code)) => {
            if state.size_code.is_some() {
                return Err(invalid(step, choice));
            }
            let product = results_products(catalog, state)
                .into_iter()
                .find(|product| &product.id == id)
                .ok_or_else(|| invalid(step, choice))?;
            if !size_offered_for(product, code, state) {
                return Err(invalid(step, choice));
            }
            let after = step_after_results(product);
            next.selected_product = Some(product.id.clone());
            next.size_code = Some(code.clone());
            after
        }

        (StepId::Blinds, Choice::Blind(blind)) => {
            if let Some(id) = blind {
                let orderable = selected_product(catalog, state)
                    .zip(state.size_code.as_ref())
                    .map(|(product, code)| {
                        catalog.blinds_for(&product.model, code).iter().any(|b| &b.id == id)
                    })
                    .unwrap_or(false);
                if !orderable {
                    return Err(invalid(step, choice));
                }
            }
            next.selected_blind = blind.clone();
            match state.category {
                // Roof-window blind picks are toggles; Continue advances.
                Some(ProductCategory::RoofWindow) => StepId::Blinds,
                // A skylight blind click records the choice and advances.
                _ => StepId::Summary,
            }
        }

        (StepId::Blinds, Choice::InsectScreen(requested))
            if state.category == Some(ProductCategory::RoofWindow) =>
        {
            next.insect_screen = *requested;
            StepId::Blinds
        }

        (StepId::Blinds, Choice::Continue)
            if state.category == Some(ProductCategory::RoofWindow) =>
        {
            StepId::Summary
        }

        (StepId::Addon, Choice::Addon(addon)) => {
            if let Some(id) = addon {
                let offered = selected_product(catalog, state)
                    .and_then(|product| catalog.tunnel_extension_for(&product.model))
                    .is_some_and(|extension| &extension.id == id);
                if !offered {
                    return Err(invalid(step, choice));
                }
            }
            next.selected_addon = addon.clone();
            StepId::Addon
        }

        (StepId::Addon, Choice::Continue) => StepId::Summary,

        _ => return Err(invalid(step, choice)),
    };

    Ok(TransitionOutcome { from: step, to, state: next })
}

/// Options presented at a step for the current state. An empty list outside
/// the terminal step is a dead-end the caller must surface.
pub fn step_options(catalog: &Catalog, step: StepId, state: &SelectionState) -> Vec<StepOption> {
    match step {
        StepId::ProductType => vec![
            StepOption::new(Choice::Category(ProductCategory::Skylight), "Skylight"),
            StepOption::new(Choice::Category(ProductCategory::RoofWindow), "Roof Window"),
            StepOption::new(Choice::Category(ProductCategory::SunTunnel), "Sun Tunnel"),
        ],
        StepId::Pitch => vec![
            StepOption::new(Choice::Pitch(RoofPitch::Pitched), "Pitched Roof"),
            StepOption::new(Choice::Pitch(RoofPitch::Flat), "Flat Roof"),
        ],
        StepId::Material => vec![
            StepOption::new(
                Choice::Material(RoofMaterial::TiledCorrugated),
                "Tiled / Corrugated Metal",
            ),
            StepOption::new(
                Choice::Material(RoofMaterial::WideMetal),
                "Wide-span Metal (Trimdek / Klip-Lok)",
            ),
        ],
        StepId::Opening => eligible_opening_types(catalog, state)
            .into_iter()
            .map(|opening| StepOption::new(Choice::Opening(opening), opening.label()))
            .collect(),
        StepId::SunTunnelType => vec![
            StepOption::new(Choice::TunnelType(TunnelKind::Rigid), "Rigid Tunnel"),
            StepOption::new(Choice::TunnelType(TunnelKind::Flexible), "Flexible Tunnel"),
        ],
        StepId::RoofWindowModel => catalog
            .products()
            .iter()
            .filter(|product| product.category == ProductCategory::RoofWindow)
            .map(|product| {
                StepOption::new(Choice::WindowModel(product.id.clone()), product.name.clone())
            })
            .collect(),
        StepId::Truss => StructuralSpacing::ALL
            .into_iter()
            .map(|spacing| StepOption::new(Choice::Spacing(spacing), spacing.label()))
            .collect(),
        StepId::Size => size_options(catalog, state),
        StepId::Results => results_options(catalog, state),
        StepId::Blinds => blind_options(catalog, state),
        StepId::Addon => addon_options(catalog, state),
        StepId::Summary => Vec::new(),
    }
}

fn size_options(catalog: &Catalog, state: &SelectionState) -> Vec<StepOption> {
    let sizes = eligible_size_codes(catalog, state);
    if sizes.is_empty() {
        // Dead-end: nothing to offer, not even the orientation toggle.
        return Vec::new();
    }

    let mut options: Vec<StepOption> = sizes
        .into_iter()
        .map(|size| {
            StepOption::new(
                Choice::Size(size.code.clone()),
                format!("{} mm ({})", size.label, size.code),
            )
        })
        .collect();

    if state.is_flat_roof() {
        let (flip, label) = match state.orientation {
            Orientation::Portrait => (Orientation::Landscape, "Switch to Landscape Mounting"),
            Orientation::Landscape => (Orientation::Portrait, "Switch to Portrait Mounting"),
        };
        options.push(StepOption::new(Choice::Orientation(flip), label));
    }
    options
}

fn results_products<'a>(catalog: &'a Catalog, state: &SelectionState) -> Vec<&'a Product> {
    let products = eligible_products(catalog, state);
    match &state.size_code {
        Some(code) => products
            .into_iter()
            .filter(|product| product.compatible_sizes.contains(code))
            .collect(),
        None => products,
    }
}

/// Whether a size may be offered alongside a product on the unfiltered-by-size
/// results view. Spacing is unspecified on that path; only the landscape
/// exclusion still applies.
fn size_offered_for(product: &Product, code: &SizeCode, state: &SelectionState) -> bool {
    if !product.compatible_sizes.contains(code) {
        return false;
    }
    state.orientation != Orientation::Landscape
        || !LANDSCAPE_EXCLUDED_CODES.contains(&code.0.as_str())
}

fn results_options(catalog: &Catalog, state: &SelectionState) -> Vec<StepOption> {
    let products = results_products(catalog, state);
    match &state.size_code {
        Some(code) => products
            .into_iter()
            .map(|product| {
                StepOption::new(
                    Choice::Product(product.id.clone()),
                    format!("{} — {}", product.name, code),
                )
            })
            .collect(),
        None => products
            .into_iter()
            .flat_map(|product| {
                product
                    .compatible_sizes
                    .iter()
                    .filter(|code| size_offered_for(product, code, state))
                    .map(|code| {
                        StepOption::new(
                            Choice::ProductAtSize(product.id.clone(), code.clone()),
                            format!("{} — {}", product.name, code),
                        )
                    })
                    .collect::<Vec<_>>()
            })
            .collect(),
    }
}

fn step_after_results(product: &Product) -> StepId {
    match product.tunnel_kind {
        Some(TunnelKind::Rigid) | Some(TunnelKind::FlatUniversal) => StepId::Addon,
        // The flexible tunnel takes no extension and no blinds.
        Some(TunnelKind::Flexible) => StepId::Summary,
        None => StepId::Blinds,
    }
}

fn blind_options(catalog: &Catalog, state: &SelectionState) -> Vec<StepOption> {
    let Some((product, code)) =
        selected_product(catalog, state).zip(state.size_code.as_ref())
    else {
        return Vec::new();
    };

    let mut options: Vec<StepOption> = catalog
        .blinds_for(&product.model, code)
        .into_iter()
        .map(|blind| {
            let label = match &blind.subtitle {
                Some(subtitle) => format!("{} {} ({})", blind.name, subtitle, blind.model),
                None => format!("{} ({})", blind.name, blind.model),
            };
            StepOption::new(Choice::Blind(Some(blind.id.clone())), label)
        })
        .collect();
    options.push(StepOption::new(Choice::Blind(None), "No Blinds"));

    if state.category == Some(ProductCategory::RoofWindow) {
        if let Some(screen) = catalog.insect_screen_for(&product.model) {
            if screen.price_for(code).is_some() {
                let (flip, label) = if state.insect_screen {
                    (false, format!("Remove {} ({})", screen.name, screen.model))
                } else {
                    (true, format!("Add {} ({})", screen.name, screen.model))
                };
                options.push(StepOption::new(Choice::InsectScreen(flip), label));
            }
        }
        options.push(StepOption::new(Choice::Continue, "Continue to Summary"));
    }
    options
}

fn addon_options(catalog: &Catalog, state: &SelectionState) -> Vec<StepOption> {
    let Some(extension) = selected_product(catalog, state)
        .and_then(|product| catalog.tunnel_extension_for(&product.model))
    else {
        return vec![StepOption::new(Choice::Continue, "Continue to Summary")];
    };

    vec![
        StepOption::new(Choice::Addon(Some(extension.id.clone())), extension.name.clone()),
        StepOption::new(Choice::Addon(None), "No Extension"),
        StepOption::new(Choice::Continue, "Continue to Summary"),
    ]
}

fn selected_product<'a>(catalog: &'a Catalog, state: &SelectionState) -> Option<&'a Product> {
    state.selected_product.as_ref().and_then(|id| catalog.product(id))
}

fn force_tunnel(
    catalog: &Catalog,
    step: StepId,
    choice: &Choice,
    state: &mut SelectionState,
    kind: TunnelKind,
) -> Result<(), ResolverError> {
    let tunnel = catalog.tunnel(kind).ok_or_else(|| invalid(step, choice))?;
    state.selected_product = Some(tunnel.id.clone());
    state.size_code = tunnel.fixed_size().cloned();
    Ok(())
}

fn invalid(step: StepId, choice: &Choice) -> ResolverError {
    ResolverError::InvalidChoice { step, choice: choice.clone() }
}

#[cfg(test)]
mod tests {
    use super::{apply_choice, step_options, Choice, StepId};
    use crate::catalog::Catalog;
    use crate::domain::extras::{AccessoryId, BlindId};
    use crate::domain::product::{OpeningType, ProductCategory, ProductId};
    use crate::domain::selection::{
        RoofMaterial, RoofPitch, SelectionState, StructuralSpacing,
    };
    use crate::domain::size::SizeCode;
    use crate::errors::ResolverError;

    fn catalog() -> Catalog {
        Catalog::builtin().expect("builtin catalog")
    }

    fn walk(catalog: &Catalog, moves: &[(StepId, Choice)]) -> (SelectionState, StepId) {
        let mut state = SelectionState::default();
        let mut step = StepId::ProductType;
        for (expected, choice) in moves {
            assert_eq!(step, *expected, "unexpected step before {choice:?}");
            let outcome =
                apply_choice(catalog, step, &state, choice).expect("transition should apply");
            state = outcome.state;
            step = outcome.to;
        }
        (state, step)
    }

    #[test]
    fn flat_sun_tunnel_forces_product_and_size_without_later_steps() {
        let catalog = catalog();
        let (state, step) = walk(
            &catalog,
            &[
                (StepId::ProductType, Choice::Category(ProductCategory::SunTunnel)),
                (StepId::Pitch, Choice::Pitch(RoofPitch::Flat)),
            ],
        );

        assert_eq!(step, StepId::Results);
        assert_eq!(state.selected_product, Some(ProductId::new("tcr")));
        assert_eq!(state.size_code, Some(SizeCode::new("014")));
        assert_eq!(state.opening, None);
        assert_eq!(state.spacing, None);
    }

    #[test]
    fn rigid_tunnel_path_reaches_addon_step() {
        let catalog = catalog();
        let (state, step) = walk(
            &catalog,
            &[
                (StepId::ProductType, Choice::Category(ProductCategory::SunTunnel)),
                (StepId::Pitch, Choice::Pitch(RoofPitch::Pitched)),
                (StepId::Material, Choice::Material(RoofMaterial::TiledCorrugated)),
                (
                    StepId::SunTunnelType,
                    Choice::TunnelType(crate::domain::product::TunnelKind::Rigid),
                ),
                (StepId::Results, Choice::Product(ProductId::new("twr"))),
            ],
        );

        assert_eq!(step, StepId::Addon);
        assert_eq!(state.size_code, Some(SizeCode::new("0K14")));

        let outcome = apply_choice(
            &catalog,
            step,
            &state,
            &Choice::Addon(Some(AccessoryId::new("ztr0k14"))),
        )
        .expect("addon toggle");
        assert_eq!(outcome.to, StepId::Addon);

        let done = apply_choice(&catalog, StepId::Addon, &outcome.state, &Choice::Continue)
            .expect("continue to summary");
        assert_eq!(done.to, StepId::Summary);
        assert_eq!(done.state.selected_addon, Some(AccessoryId::new("ztr0k14")));
    }

    #[test]
    fn flexible_tunnel_goes_straight_to_summary() {
        let catalog = catalog();
        let (_, step) = walk(
            &catalog,
            &[
                (StepId::ProductType, Choice::Category(ProductCategory::SunTunnel)),
                (StepId::Pitch, Choice::Pitch(RoofPitch::Pitched)),
                (StepId::Material, Choice::Material(RoofMaterial::TiledCorrugated)),
                (
                    StepId::SunTunnelType,
                    Choice::TunnelType(crate::domain::product::TunnelKind::Flexible),
                ),
                (StepId::Results, Choice::Product(ProductId::new("twf"))),
            ],
        );
        assert_eq!(step, StepId::Summary);
    }

    #[test]
    fn wide_metal_sun_tunnel_forces_the_universal_sku() {
        let catalog = catalog();
        let (state, step) = walk(
            &catalog,
            &[
                (StepId::ProductType, Choice::Category(ProductCategory::SunTunnel)),
                (StepId::Pitch, Choice::Pitch(RoofPitch::Pitched)),
                (StepId::Material, Choice::Material(RoofMaterial::WideMetal)),
            ],
        );
        assert_eq!(step, StepId::Results);
        assert_eq!(state.selected_product, Some(ProductId::new("tcr")));
    }

    #[test]
    fn roof_window_category_forces_pitched_and_skips_the_pitch_step() {
        let catalog = catalog();
        let (state, step) = walk(
            &catalog,
            &[(StepId::ProductType, Choice::Category(ProductCategory::RoofWindow))],
        );
        assert_eq!(step, StepId::Material);
        assert_eq!(state.roof_pitch, Some(RoofPitch::Pitched));
    }

    #[test]
    fn skylight_pitched_walkthrough_reaches_summary() {
        let catalog = catalog();
        let (state, step) = walk(
            &catalog,
            &[
                (StepId::ProductType, Choice::Category(ProductCategory::Skylight)),
                (StepId::Pitch, Choice::Pitch(RoofPitch::Pitched)),
                (StepId::Material, Choice::Material(RoofMaterial::TiledCorrugated)),
                (StepId::Opening, Choice::Opening(OpeningType::Manual)),
                (StepId::Truss, Choice::Spacing(StructuralSpacing::Mm600)),
                (StepId::Size, Choice::Size(SizeCode::new("C04"))),
                (StepId::Results, Choice::Product(ProductId::new("vs"))),
                (StepId::Blinds, Choice::Blind(Some(BlindId::new("fsch")))),
            ],
        );

        assert_eq!(step, StepId::Summary);
        assert_eq!(state.selected_blind, Some(BlindId::new("fsch")));
    }

    #[test]
    fn unspecified_spacing_for_skylight_lists_product_size_pairs() {
        let catalog = catalog();
        let (state, step) = walk(
            &catalog,
            &[
                (StepId::ProductType, Choice::Category(ProductCategory::Skylight)),
                (StepId::Pitch, Choice::Pitch(RoofPitch::Flat)),
                (StepId::Opening, Choice::Opening(OpeningType::Fixed)),
                (StepId::Truss, Choice::Spacing(StructuralSpacing::Unspecified)),
            ],
        );
        assert_eq!(step, StepId::Results);
        assert!(state.size_code.is_none());

        let options = step_options(&catalog, step, &state);
        assert_eq!(options.len(), 14, "every FCM size appears as a pair");
        assert!(options
            .iter()
            .all(|option| matches!(option.choice, Choice::ProductAtSize(_, _))));

        let outcome = apply_choice(
            &catalog,
            step,
            &state,
            &Choice::ProductAtSize(ProductId::new("fcm"), SizeCode::new("2222")),
        )
        .expect("pair choice applies");
        assert_eq!(outcome.state.size_code, Some(SizeCode::new("2222")));
        assert_eq!(outcome.to, StepId::Blinds);
    }

    #[test]
    fn unspecified_spacing_for_roof_window_still_asks_for_size() {
        let catalog = catalog();
        let (_, step) = walk(
            &catalog,
            &[
                (StepId::ProductType, Choice::Category(ProductCategory::RoofWindow)),
                (StepId::Material, Choice::Material(RoofMaterial::TiledCorrugated)),
                (StepId::RoofWindowModel, Choice::WindowModel(ProductId::new("ggl"))),
                (StepId::Truss, Choice::Spacing(StructuralSpacing::Unspecified)),
            ],
        );
        assert_eq!(step, StepId::Size);
    }

    #[test]
    fn roof_window_blind_choices_toggle_until_continue() {
        let catalog = catalog();
        let (state, step) = walk(
            &catalog,
            &[
                (StepId::ProductType, Choice::Category(ProductCategory::RoofWindow)),
                (StepId::Material, Choice::Material(RoofMaterial::TiledCorrugated)),
                (StepId::RoofWindowModel, Choice::WindowModel(ProductId::new("ggl"))),
                (StepId::Truss, Choice::Spacing(StructuralSpacing::Mm900)),
                (StepId::Size, Choice::Size(SizeCode::new("MK04"))),
                (StepId::Results, Choice::Product(ProductId::new("ggl"))),
                (StepId::Blinds, Choice::Blind(Some(BlindId::new("fhc")))),
                (StepId::Blinds, Choice::InsectScreen(true)),
            ],
        );
        assert_eq!(step, StepId::Blinds, "toggles stay on the blinds step");
        assert!(state.insect_screen);

        let done = apply_choice(&catalog, step, &state, &Choice::Continue)
            .expect("explicit continue");
        assert_eq!(done.to, StepId::Summary);
    }

    #[test]
    fn invalid_choice_is_rejected_and_produces_no_state() {
        let catalog = catalog();
        let state = SelectionState::default();

        let error = apply_choice(
            &catalog,
            StepId::ProductType,
            &state,
            &Choice::Size(SizeCode::new("C01")),
        )
        .expect_err("size choice is meaningless at the category step");
        assert!(matches!(error, ResolverError::InvalidChoice { step: StepId::ProductType, .. }));
    }

    #[test]
    fn out_of_domain_size_is_rejected() {
        let catalog = catalog();
        let (state, step) = walk(
            &catalog,
            &[
                (StepId::ProductType, Choice::Category(ProductCategory::Skylight)),
                (StepId::Pitch, Choice::Pitch(RoofPitch::Pitched)),
                (StepId::Material, Choice::Material(RoofMaterial::TiledCorrugated)),
                (StepId::Opening, Choice::Opening(OpeningType::Manual)),
                (StepId::Truss, Choice::Spacing(StructuralSpacing::Mm600)),
            ],
        );
        assert_eq!(step, StepId::Size);

        // M04 exists but the 600mm spacing restricts the domain to C codes.
        let error =
            apply_choice(&catalog, step, &state, &Choice::Size(SizeCode::new("M04")))
                .expect_err("spacing-excluded size must be rejected");
        assert!(matches!(error, ResolverError::InvalidChoice { .. }));
    }

    #[test]
    fn zero_priced_blind_is_not_selectable() {
        let catalog = catalog();
        let (state, step) = walk(
            &catalog,
            &[
                (StepId::ProductType, Choice::Category(ProductCategory::Skylight)),
                (StepId::Pitch, Choice::Pitch(RoofPitch::Pitched)),
                (StepId::Material, Choice::Material(RoofMaterial::TiledCorrugated)),
                (StepId::Opening, Choice::Opening(OpeningType::Fixed)),
                (StepId::Truss, Choice::Spacing(StructuralSpacing::Mm600)),
                (StepId::Size, Choice::Size(SizeCode::new("C12"))),
                (StepId::Results, Choice::Product(ProductId::new("fs"))),
            ],
        );
        assert_eq!(step, StepId::Blinds);

        // FSLD carries a zero C12 price: not orderable in that size.
        let error = apply_choice(
            &catalog,
            step,
            &state,
            &Choice::Blind(Some(BlindId::new("fsld"))),
        )
        .expect_err("zero-priced blind must be rejected");
        assert!(matches!(error, ResolverError::InvalidChoice { .. }));
    }

    #[test]
    fn every_offered_option_is_accepted_by_apply_choice() {
        let catalog = catalog();
        let (state, step) = walk(
            &catalog,
            &[
                (StepId::ProductType, Choice::Category(ProductCategory::Skylight)),
                (StepId::Pitch, Choice::Pitch(RoofPitch::Flat)),
                (StepId::Opening, Choice::Opening(OpeningType::Fixed)),
                (StepId::Truss, Choice::Spacing(StructuralSpacing::Mm600)),
            ],
        );

        for option in step_options(&catalog, step, &state) {
            apply_choice(&catalog, step, &state, &option.choice)
                .expect("offered options must always apply");
        }
    }
}
