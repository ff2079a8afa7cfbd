//! API route handlers and module exports.

pub mod products;
