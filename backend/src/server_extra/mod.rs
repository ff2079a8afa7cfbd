pub mod product_json;
