//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use crate::hover::PanelState;
use catalog_core::catalog::{Category, Item};
use dioxus::prelude::*;

/// Shared application state for the catalog page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the app is still loading the embedded fixtures
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Catalog categories
    pub categories: Signal<Vec<Category>>,
    /// Catalog items
    pub items: Signal<Vec<Item>>,
    /// Which item/category admin panels are currently shown (hover)
    pub panels: Signal<PanelState>,
    /// Whether the stock-bar render pass has already run
    pub bars_rendered: Signal<bool>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            categories: Signal::new(Vec::new()),
            items: Signal::new(Vec::new()),
            panels: Signal::new(PanelState::new()),
            bars_rendered: Signal::new(false),
        }
    }
}
