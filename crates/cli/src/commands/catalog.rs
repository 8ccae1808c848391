use serde::Serialize;
use skyfit_core::{Catalog, SizeUniverse};

use crate::commands::CommandResult;

#[derive(Debug, Serialize)]
struct SizeCounts {
    pitched: usize,
    flat: usize,
    roof_window: usize,
    tunnel: usize,
}

#[derive(Debug, Serialize)]
struct CatalogReport {
    command: &'static str,
    status: &'static str,
    products: usize,
    blinds: usize,
    accessories: usize,
    flashing_sizes: usize,
    sizes: SizeCounts,
}

pub fn run() -> CommandResult {
    let catalog = match Catalog::builtin() {
        Ok(catalog) => catalog,
        Err(error) => {
            return CommandResult::failure("catalog", "catalog_validation", error.to_string(), 2)
        }
    };

    CommandResult::success(CatalogReport {
        command: "catalog",
        status: "ok",
        products: catalog.products().len(),
        blinds: catalog.blinds().len(),
        accessories: catalog.accessories().len(),
        flashing_sizes: catalog.flashing().prices.len(),
        sizes: SizeCounts {
            pitched: catalog.universe(SizeUniverse::Pitched).len(),
            flat: catalog.universe(SizeUniverse::Flat).len(),
            roof_window: catalog.universe(SizeUniverse::RoofWindow).len(),
            tunnel: catalog.universe(SizeUniverse::Tunnel).len(),
        },
    })
}
