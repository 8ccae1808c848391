pub mod catalog;
pub mod domain;
pub mod errors;
pub mod resolver;

pub use catalog::{Catalog, SizeTables};
pub use domain::extras::{
    Accessory, AccessoryId, AccessoryKind, Blind, BlindId, BlindKind, Flashing,
};
pub use domain::product::{
    ModelCode, OpeningType, Product, ProductCategory, ProductId, RoofType, TunnelKind,
};
pub use domain::selection::{
    DerivedRoofType, Orientation, RoofMaterial, RoofPitch, SelectionState, StructuralSpacing,
};
pub use domain::size::{Size, SizeCode, SizeUniverse};
pub use errors::{CatalogError, ResolverError};
pub use resolver::filter::{eligible_opening_types, eligible_products, eligible_size_codes};
pub use resolver::flow::{apply_choice, step_options, Choice, StepId, StepOption, TransitionOutcome};
pub use resolver::pricing::{compose_summary, LineItem, QuoteSummary};
pub use resolver::session::Session;
