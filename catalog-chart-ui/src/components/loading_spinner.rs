//! Loading placeholder shown while the embedded fixtures are parsed.

use dioxus::prelude::*;

/// Centered placeholder, classed `spinner` for page styling. The parse is
/// synchronous and fast, so this flashes at most one frame.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            class: "spinner spinner--catalog",
            style: "text-align: center; padding: 32px 0; color: #888; \
                font-size: 13px; letter-spacing: 0.5px;",
            "Loading the catalog\u{2026}"
        }
    }
}
