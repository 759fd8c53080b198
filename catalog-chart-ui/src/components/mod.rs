//! Reusable Dioxus RSX components for the catalog page.

mod admin_panel;
mod catalog_header;
mod category_card;
mod error_display;
mod item_card;
mod loading_spinner;

pub use admin_panel::{CategoryAdminPanel, ItemAdminPanel};
pub use catalog_header::CatalogHeader;
pub use category_card::CategoryCard;
pub use error_display::ErrorDisplay;
pub use item_card::ItemCard;
pub use loading_spinner::LoadingSpinner;
