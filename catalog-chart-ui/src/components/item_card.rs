//! One catalog item row.
//!
//! Carries the DOM id the stock-bar pass targets (`item-<id>`) and an empty
//! `.item__stock` cell the renderer fills with an SVG bar after mount.

use crate::components::ItemAdminPanel;
use crate::state::AppState;
use catalog_core::catalog::Item;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ItemCardProps {
    pub item: Item,
}

/// A single item row: name, price, description, stock cell, admin panel.
#[component]
pub fn ItemCard(props: ItemCardProps) -> Element {
    let mut state = use_context::<AppState>();
    let item = props.item;
    let item_id = item.id;
    let dom_id = item.dom_id();

    rsx! {
        li {
            id: "{dom_id}",
            class: "list__item list__item--items item",
            style: "position: relative; display: flex; gap: 12px; align-items: center; \
                padding: 6px 8px; border-bottom: 1px solid #eee;",
            // Entering a row only ever reveals this row's panel; other
            // panels stay up until a panel mouseleave hides them all.
            onmouseenter: move |_| state.panels.write().enter_item_row(item_id),

            span {
                style: "flex: 1; font-weight: bold;",
                "{item.name}"
            }
            span {
                style: "width: 70px; color: #333;",
                "{item.price}"
            }
            span {
                style: "flex: 2; font-size: 12px; color: #666;",
                "{item.description}"
            }
            // The stock-bar render pass appends the SVG bar here.
            span {
                class: "item__stock",
                style: "width: 50px;",
            }

            ItemAdminPanel { item_id }
        }
    }
}
