pub mod extras;
pub mod product;
pub mod selection;
pub mod size;
