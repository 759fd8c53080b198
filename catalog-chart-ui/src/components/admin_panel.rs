//! Hover-revealed admin panels for items and categories.
//!
//! Visibility is nothing but class membership driven by the shared
//! [`crate::hover::PanelState`]; the panels themselves are cosmetic
//! overlays with no wired-up actions.

use crate::state::AppState;
use dioxus::prelude::*;

const PANEL_STYLE: &str = "position: absolute; top: 4px; right: 4px; padding: 4px 8px; \
    background: #f5f5f5; border: 1px solid #ccc; border-radius: 3px;";

/// Admin overlay for one catalog item. Revealed when its row is entered,
/// alongside any other panels already revealed; leaving any item panel
/// hides them all.
#[component]
pub fn ItemAdminPanel(item_id: i64) -> Element {
    let mut state = use_context::<AppState>();
    let shown = state.panels.read().item_panel_shown(item_id);

    rsx! {
        div {
            class: "admin-panel admin-panel--item",
            class: if shown { "admin-panel--item--shown" },
            style: if shown { "{PANEL_STYLE}" } else { "display: none;" },
            onmouseleave: move |_| state.panels.write().leave_item_panel(),
            button { "Edit" }
            button { "Delete" }
        }
    }
}

/// Admin overlay for one category entry. Category panels are exclusive:
/// at most one carries the shown class at a time.
#[component]
pub fn CategoryAdminPanel(category_id: i64) -> Element {
    let state = use_context::<AppState>();
    let shown = state.panels.read().category_panel_shown(category_id);

    rsx! {
        div {
            class: "admin-panel admin-panel--category",
            class: if shown { "admin-panel--category--shown" },
            style: if shown { "{PANEL_STYLE}" } else { "display: none;" },
            button { "Edit" }
            button { "Delete" }
            button { "Add Item" }
        }
    }
}
