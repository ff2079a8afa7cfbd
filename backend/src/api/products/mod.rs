//! Product API route handlers and module exports.

mod query_products;
pub use query_products::query_products;

mod get_product;
pub use get_product::get_product;

mod suggest_names;
pub use suggest_names::suggest_names;

pub mod mongo_filter;
