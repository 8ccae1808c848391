//! Pure domain narrowing: given the catalog and the choices confirmed so far,
//! compute what remains selectable. Filters driven by a not-yet-set field are
//! no-ops, so earlier steps can be presented before later constraints exist.

use std::collections::BTreeSet;

use crate::catalog::Catalog;
use crate::domain::product::{OpeningType, Product, ProductCategory, RoofType};
use crate::domain::selection::{DerivedRoofType, Orientation, SelectionState};
use crate::domain::size::{Size, SizeCode, SizeUniverse};

/// Flat-roof codes that must not be mounted in landscape orientation,
/// regardless of any other constraint.
pub const LANDSCAPE_EXCLUDED_CODES: [&str; 3] = ["2270", "3072", "4672"];

pub fn eligible_products<'a>(catalog: &'a Catalog, state: &SelectionState) -> Vec<&'a Product> {
    catalog
        .products()
        .iter()
        .filter(|product| {
            category_allows(product, state)
                && roof_allows(product, state)
                && opening_allows(product, state)
        })
        .collect()
}

fn category_allows(product: &Product, state: &SelectionState) -> bool {
    let Some(category) = state.category else {
        return true;
    };
    if product.category != category {
        return false;
    }
    // Once a roof-window model is committed, only that SKU remains in play.
    if category == ProductCategory::RoofWindow {
        if let Some(chosen) = &state.selected_product {
            return &product.id == chosen;
        }
    }
    true
}

fn roof_allows(product: &Product, state: &SelectionState) -> bool {
    match state.derived_roof_type() {
        None => true,
        Some(DerivedRoofType::Flat) => product.supports_roof(RoofType::Flat),
        Some(_) => product.supports_roof(RoofType::Pitched),
    }
}

fn opening_allows(product: &Product, state: &SelectionState) -> bool {
    match state.opening {
        None => true,
        Some(opening) => product.opening == opening,
    }
}

/// The initial menu for the opening step: opening types present among products
/// surviving the category and roof filters, ignoring any opening already set.
pub fn eligible_opening_types(catalog: &Catalog, state: &SelectionState) -> Vec<OpeningType> {
    let mut unconstrained = state.clone();
    unconstrained.opening = None;
    let products = eligible_products(catalog, &unconstrained);

    OpeningType::ALL
        .into_iter()
        .filter(|opening| products.iter().any(|product| product.opening == *opening))
        .collect()
}

/// The size universe the current selection draws from.
pub fn size_universe_for(state: &SelectionState) -> SizeUniverse {
    match state.category {
        Some(ProductCategory::RoofWindow) => SizeUniverse::RoofWindow,
        Some(ProductCategory::SunTunnel) => SizeUniverse::Tunnel,
        _ if state.is_flat_roof() => SizeUniverse::Flat,
        _ => SizeUniverse::Pitched,
    }
}

/// Sizes still legal under every confirmed constraint, in universe order.
/// An empty result is a dead-end the controller must surface, not an error.
pub fn eligible_size_codes<'a>(catalog: &'a Catalog, state: &SelectionState) -> Vec<&'a Size> {
    let mut accumulated: BTreeSet<SizeCode> = eligible_products(catalog, state)
        .iter()
        .flat_map(|product| product.compatible_sizes.iter().cloned())
        .collect();

    accumulated = restrict_by_spacing(accumulated, state);

    if state.orientation == Orientation::Landscape {
        for code in LANDSCAPE_EXCLUDED_CODES {
            accumulated.remove(&SizeCode::new(code));
        }
    }

    let universe = size_universe_for(state);
    if universe == SizeUniverse::RoofWindow {
        if let Some(prefix) = state.spacing.and_then(|spacing| spacing.window_prefix()) {
            accumulated.retain(|code| code.has_prefix(prefix));
        }
    }

    catalog.universe(universe).iter().filter(|size| accumulated.contains(&size.code)).collect()
}

/// Intersection filter against the accumulated set; never a fresh query.
fn restrict_by_spacing(codes: BTreeSet<SizeCode>, state: &SelectionState) -> BTreeSet<SizeCode> {
    let Some(spacing) = state.spacing else {
        return codes;
    };

    if state.is_flat_roof() {
        match spacing.flat_prefixes() {
            None => codes,
            Some(prefixes) => codes
                .into_iter()
                .filter(|code| prefixes.iter().any(|prefix| code.has_prefix(prefix)))
                .collect(),
        }
    } else {
        match spacing.pitched_prefix() {
            None => codes,
            Some(prefix) => codes.into_iter().filter(|code| code.has_prefix(prefix)).collect(),
        }
    }
}
