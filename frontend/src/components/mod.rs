pub mod accordion;
pub mod error_boundary;
pub mod navbar;
pub mod products;
pub mod searchbar;
pub mod sidebar;
pub mod slider;
