//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod catalog_const;
pub mod catalog_query;
pub mod product;
pub mod text_highlight;
