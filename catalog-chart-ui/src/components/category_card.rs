//! One category entry with its hover-revealed admin panel.
//!
//! Hover semantics mirror the legacy page: entering a category hides every
//! other category panel and toggles this one's, and the category image
//! toggles its active class on both enter and leave (so it reads as
//! "active while hovered").

use crate::components::CategoryAdminPanel;
use crate::state::AppState;
use catalog_core::catalog::Category;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CategoryCardProps {
    pub category: Category,
}

/// A single category entry: image placeholder, name, admin panel.
#[component]
pub fn CategoryCard(props: CategoryCardProps) -> Element {
    let mut state = use_context::<AppState>();
    let mut image_active = use_signal(|| false);
    let category = props.category;
    let category_id = category.id;

    let on_enter = move |_: Event<MouseData>| {
        state.panels.write().enter_category(category_id);
        image_active.set(!image_active());
    };
    let on_leave = move |_: Event<MouseData>| {
        state.panels.write().leave_category();
        image_active.set(!image_active());
    };

    rsx! {
        li {
            class: "list__item list__item--categories",
            style: "position: relative; display: inline-flex; flex-direction: column; \
                align-items: center; gap: 4px; padding: 8px; margin: 4px; \
                border: 1px solid #ddd; border-radius: 4px; min-width: 110px;",
            onmouseenter: on_enter,
            onmouseleave: on_leave,

            div {
                class: "list__item--categories__img",
                class: if image_active() { "list__item--categories__img--active" },
                style: if image_active() {
                    "width: 64px; height: 48px; background: #cfe8cf; border-radius: 3px;"
                } else {
                    "width: 64px; height: 48px; background: #e8e8e8; border-radius: 3px;"
                },
                title: "{category.image}",
            }
            span {
                style: "font-size: 13px;",
                "{category.name}"
            }

            CategoryAdminPanel { category_id }
        }
    }
}
