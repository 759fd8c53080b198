//! Error notice for the catalog page.
//!
//! Failures here are cosmetic-feature failures (fixtures missing, document
//! unreachable), so the notice is a quiet inline strip rather than a modal.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Inline error strip, classed `error` for page styling.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            class: "error error--catalog",
            style: "padding: 10px 14px; margin: 8px 0; background: #fdecea; \
                color: #b3261e; border-left: 3px solid #b3261e; font-size: 14px;",
            "Something went wrong: {props.message}"
        }
    }
}
