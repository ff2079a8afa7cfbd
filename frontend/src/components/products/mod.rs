pub mod empty_state;
pub mod product_card;
pub mod product_card_skeleton;
pub mod product_details;
pub mod product_details_skeleton;
pub mod product_grid;
