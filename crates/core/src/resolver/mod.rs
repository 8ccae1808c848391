pub mod filter;
pub mod flow;
pub mod pricing;
pub mod session;
