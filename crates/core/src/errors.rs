use thiserror::Error;

use crate::domain::product::ProductId;
use crate::domain::size::SizeCode;
use crate::resolver::flow::{Choice, StepId};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ResolverError {
    #[error("choice {choice:?} is not available at step {step:?}")]
    InvalidChoice { step: StepId, choice: Choice },
    #[error("summary requested before required fields were set: {missing_fields:?}")]
    IncompleteState { missing_fields: Vec<String> },
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate product id {0:?}")]
    DuplicateProduct(ProductId),
    #[error("product {product:?} prices size {size:?} outside its compatible set")]
    OrphanPrice { product: ProductId, size: SizeCode },
    #[error("product {product:?} lists compatible size {size:?} without a price")]
    UnpricedSize { product: ProductId, size: SizeCode },
    #[error("product {product:?} references size code {size:?} missing from every size table")]
    UnknownSizeCode { product: ProductId, size: SizeCode },
}
