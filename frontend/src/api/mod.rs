pub mod products_api;
