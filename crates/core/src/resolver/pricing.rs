//! Price composition over a completed selection. Each rule contributes at
//! most one line item; the total is the strict sum of every amount emitted.
//! Sparse blind/accessory tables are tolerated as zero, never as errors.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::domain::product::{Product, ProductCategory, TunnelKind};
use crate::domain::selection::{DerivedRoofType, SelectionState};
use crate::domain::size::SizeCode;
use crate::errors::ResolverError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    pub amount: Decimal,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteSummary {
    pub currency: String,
    pub line_items: Vec<LineItem>,
    pub total: Decimal,
}

pub fn compose_summary(
    catalog: &Catalog,
    state: &SelectionState,
    currency: &str,
) -> Result<QuoteSummary, ResolverError> {
    let (product, code, roof) = terminal_fields(catalog, state)?;

    let mut line_items = Vec::new();

    // 1. Base product, always present for a valid terminal state.
    line_items.push(LineItem {
        label: format!("{} {} {}", product.model, code, product.category.noun()),
        amount: product.price_for(code).unwrap_or(Decimal::ZERO),
    });

    // 2. Flashing: catalog lookup only for pitched tile/corrugated installs;
    //    every other roof context gets an advisory line at no charge.
    line_items.push(flashing_line(catalog, product, code, roof));

    // 3. Blind, priced per size; a sparse entry contributes zero.
    if let Some(blind) = state.selected_blind.as_ref().and_then(|id| catalog.blind(id)) {
        let label = match &blind.subtitle {
            Some(subtitle) => format!("{} {} {} {}", blind.model, code, blind.name, subtitle),
            None => format!("{} {} {}", blind.model, code, blind.name),
        };
        line_items.push(LineItem { label, amount: blind.price_for(code).unwrap_or(Decimal::ZERO) });
    }

    // 4. Insect screen, only when requested and priced for this size.
    if state.insect_screen {
        if let Some(screen) = catalog.insect_screen_for(&product.model) {
            if let Some(amount) = screen.price_for(code) {
                line_items.push(LineItem {
                    label: format!("{} {} {}", screen.model, code, screen.name),
                    amount,
                });
            }
        }
    }

    // 5. Blind-support tray: required only to carry a blind on a flat curb.
    if roof == DerivedRoofType::Flat && state.selected_blind.is_some() {
        if let Some(tray) = catalog.blind_tray_for(&product.model) {
            if let Some(amount) = tray.price_for(code) {
                line_items.push(LineItem { label: format!("{} ({})", tray.name, code), amount });
            }
        }
    }

    // 6. Tunnel extension, keyed by the tunnel's own fixed code.
    if matches!(product.tunnel_kind, Some(TunnelKind::Rigid) | Some(TunnelKind::FlatUniversal)) {
        if let Some(extension) =
            state.selected_addon.as_ref().and_then(|id| catalog.accessory(id))
        {
            line_items.push(LineItem {
                label: extension.name.clone(),
                amount: extension.price_for(code).unwrap_or(Decimal::ZERO),
            });
        }
    }

    let total = line_items.iter().map(|item| item.amount).sum();
    Ok(QuoteSummary { currency: currency.to_owned(), line_items, total })
}

fn flashing_line(
    catalog: &Catalog,
    product: &Product,
    code: &SizeCode,
    roof: DerivedRoofType,
) -> LineItem {
    if product.category == ProductCategory::SunTunnel {
        return match roof {
            DerivedRoofType::Tiled => LineItem {
                label: "Integrated Flashing (Included)".to_owned(),
                amount: Decimal::ZERO,
            },
            _ => LineItem {
                label: "Custom Flashing Required (Not Included)".to_owned(),
                amount: Decimal::ZERO,
            },
        };
    }

    match roof {
        DerivedRoofType::Tiled => {
            let flashing = catalog.flashing();
            LineItem {
                label: format!("{} {} {}", flashing.model, code, "Flashing (Tile/Corrugated)"),
                amount: flashing.price_for(code).unwrap_or(Decimal::ZERO),
            }
        }
        DerivedRoofType::WideMetal => LineItem {
            label: "Custom Flashing Required (Not Included)".to_owned(),
            amount: Decimal::ZERO,
        },
        DerivedRoofType::Flat => LineItem {
            label: "Custom Curb Flashing Required (Not Included)".to_owned(),
            amount: Decimal::ZERO,
        },
    }
}

/// Contract check: the controller must never reach the summary with these
/// unset; report every missing field rather than the first.
fn terminal_fields<'a>(
    catalog: &'a Catalog,
    state: &'a SelectionState,
) -> Result<(&'a Product, &'a SizeCode, DerivedRoofType), ResolverError> {
    let mut missing_fields = Vec::new();
    let product = match &state.selected_product {
        Some(id) => {
            let found = catalog.product(id);
            if found.is_none() {
                missing_fields.push(format!("selected_product (unknown id {id:?})"));
            }
            found
        }
        None => {
            missing_fields.push("selected_product".to_owned());
            None
        }
    };
    if state.size_code.is_none() {
        missing_fields.push("size_code".to_owned());
    }
    if state.derived_roof_type().is_none() {
        missing_fields.push("roof_pitch/roof_material".to_owned());
    }

    match (product, &state.size_code, state.derived_roof_type()) {
        (Some(product), Some(code), Some(roof)) => Ok((product, code, roof)),
        _ => Err(ResolverError::IncompleteState { missing_fields }),
    }
}
