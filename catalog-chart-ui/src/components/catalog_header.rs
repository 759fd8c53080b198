//! Page header component with title and optional subheading.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CatalogHeaderProps {
    /// Page title
    pub title: String,
    /// Subheading shown under the title (e.g. the active category)
    #[props(default = String::new())]
    pub subheading: String,
}

/// Header for the catalog page showing title and optional subheading.
#[component]
pub fn CatalogHeader(props: CatalogHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 12px;",
            h2 {
                style: "margin: 0 0 4px 0; font-size: 20px;",
                "{props.title}"
            }
            if !props.subheading.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{props.subheading}"
                }
            }
        }
    }
}
