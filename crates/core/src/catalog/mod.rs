mod data;

use std::collections::HashSet;

use crate::domain::extras::{
    Accessory, AccessoryId, AccessoryKind, Blind, BlindId, BlindKind, Flashing,
};
use crate::domain::product::{ModelCode, Product, ProductCategory, ProductId, TunnelKind};
use crate::domain::size::{Size, SizeCode, SizeUniverse};
use crate::errors::CatalogError;

#[derive(Clone, Debug, Default)]
pub struct SizeTables {
    pub pitched: Vec<Size>,
    pub flat: Vec<Size>,
    pub roof_window: Vec<Size>,
    pub tunnel: Vec<Size>,
}

/// Immutable product data. Constructed once through `validated`, queried
/// everywhere else; nothing here mutates after load.
#[derive(Clone, Debug)]
pub struct Catalog {
    products: Vec<Product>,
    sizes: SizeTables,
    flashing: Flashing,
    blinds: Vec<Blind>,
    accessories: Vec<Accessory>,
}

impl Catalog {
    /// Runs the load-time invariant checks so per-lookup code can stay total:
    /// product price keys and compatible sizes must match exactly, and every
    /// compatible size must exist in one of the size tables. Blind and
    /// accessory price tables are sparse by design and are not checked.
    pub fn validated(
        products: Vec<Product>,
        sizes: SizeTables,
        flashing: Flashing,
        blinds: Vec<Blind>,
        accessories: Vec<Accessory>,
    ) -> Result<Self, CatalogError> {
        let known_codes: HashSet<&SizeCode> = sizes
            .pitched
            .iter()
            .chain(&sizes.flat)
            .chain(&sizes.roof_window)
            .chain(&sizes.tunnel)
            .map(|size| &size.code)
            .collect();

        let mut seen_ids: HashSet<&ProductId> = HashSet::new();
        for product in &products {
            if !seen_ids.insert(&product.id) {
                return Err(CatalogError::DuplicateProduct(product.id.clone()));
            }

            for code in &product.compatible_sizes {
                if !known_codes.contains(code) {
                    return Err(CatalogError::UnknownSizeCode {
                        product: product.id.clone(),
                        size: code.clone(),
                    });
                }
                if !product.prices.contains_key(code) {
                    return Err(CatalogError::UnpricedSize {
                        product: product.id.clone(),
                        size: code.clone(),
                    });
                }
            }
            for code in product.prices.keys() {
                if !product.compatible_sizes.contains(code) {
                    return Err(CatalogError::OrphanPrice {
                        product: product.id.clone(),
                        size: code.clone(),
                    });
                }
            }
        }

        Ok(Self { products, sizes, flashing, blinds, accessories })
    }

    /// The static catalog shipped with the selector.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::validated(
            data::products(),
            data::size_tables(),
            data::flashing(),
            data::blinds(),
            data::accessories(),
        )
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }

    pub fn tunnel(&self, kind: TunnelKind) -> Option<&Product> {
        self.products.iter().find(|product| {
            product.category == ProductCategory::SunTunnel && product.tunnel_kind == Some(kind)
        })
    }

    pub fn universe(&self, universe: SizeUniverse) -> &[Size] {
        match universe {
            SizeUniverse::Pitched => &self.sizes.pitched,
            SizeUniverse::Flat => &self.sizes.flat,
            SizeUniverse::RoofWindow => &self.sizes.roof_window,
            SizeUniverse::Tunnel => &self.sizes.tunnel,
        }
    }

    pub fn size(&self, code: &SizeCode) -> Option<&Size> {
        self.sizes
            .pitched
            .iter()
            .chain(&self.sizes.flat)
            .chain(&self.sizes.roof_window)
            .chain(&self.sizes.tunnel)
            .find(|size| &size.code == code)
    }

    pub fn flashing(&self) -> &Flashing {
        &self.flashing
    }

    pub fn blinds(&self) -> &[Blind] {
        &self.blinds
    }

    pub fn blind(&self, id: &BlindId) -> Option<&Blind> {
        self.blinds.iter().find(|blind| &blind.id == id)
    }

    /// Darkening/translucent blinds orderable for the given model and size.
    /// A zero price means "not orderable in this size" and is filtered out.
    pub fn blinds_for(&self, model: &ModelCode, code: &SizeCode) -> Vec<&Blind> {
        self.blinds
            .iter()
            .filter(|blind| {
                blind.kind != BlindKind::Accessory
                    && blind.fits(model)
                    && blind.price_for(code).is_some_and(|price| !price.is_zero())
            })
            .collect()
    }

    pub fn insect_screen_for(&self, model: &ModelCode) -> Option<&Blind> {
        self.blinds
            .iter()
            .find(|blind| blind.kind == BlindKind::Accessory && blind.fits(model))
    }

    pub fn accessories(&self) -> &[Accessory] {
        &self.accessories
    }

    pub fn accessory(&self, id: &AccessoryId) -> Option<&Accessory> {
        self.accessories.iter().find(|accessory| &accessory.id == id)
    }

    pub fn blind_tray_for(&self, model: &ModelCode) -> Option<&Accessory> {
        self.accessories
            .iter()
            .find(|accessory| accessory.kind == AccessoryKind::BlindTray && accessory.fits(model))
    }

    pub fn tunnel_extension_for(&self, model: &ModelCode) -> Option<&Accessory> {
        self.accessories.iter().find(|accessory| {
            accessory.kind == AccessoryKind::TunnelExtension && accessory.fits(model)
        })
    }
}
