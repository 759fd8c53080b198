//! Catalog storefront page.
//!
//! Data flow:
//! 1. `include_str!` embeds the category and item CSV fixtures into the
//!    WASM binary (via `catalog-core`).
//! 2. On mount: parse both fixtures into typed records and populate state.
//! 3. After the page structure exists: run the stock-bar pass once, drawing
//!    one animated SVG bar into each item row's `.item__stock` cell.
//!
//! Admin panels are hover overlays driven entirely by signals; see
//! `catalog-chart-ui::components`.

use catalog_chart_ui::components::{
    CatalogHeader, CategoryCard, ErrorDisplay, ItemCard, LoadingSpinner,
};
use catalog_chart_ui::dom_surface::DomSurface;
use catalog_chart_ui::renderer::{StockBarRenderer, StockLevel};
use catalog_chart_ui::state::AppState;
use catalog_core::catalog;
use catalog_core::stock_bar::StockBarConfig;
use dioxus::prelude::*;
use log::info;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("catalog-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Parse embedded fixtures once on mount ───
    use_effect(move || {
        let categories = catalog::parse_categories(catalog::CATEGORIES_CSV).unwrap_or_default();
        let items = catalog::parse_items(catalog::CATALOG_CSV).unwrap_or_default();

        if items.is_empty() {
            state
                .error_msg
                .set(Some("No catalog data available.".to_string()));
        }
        info!(
            "catalog loaded: {} categories, {} items",
            categories.len(),
            items.len()
        );

        state.categories.set(categories);
        state.items.set(items);
        state.loading.set(false);
    });

    // ─── Effect 2: Stock-bar pass, once the page structure exists ───
    // Re-runs when loading flips; guarded so the bars are only drawn once.
    use_effect(move || {
        let loading = (state.loading)();
        let rendered = (state.bars_rendered)();
        if loading || rendered {
            return;
        }

        let items = state.items.read().clone();
        if items.is_empty() {
            return;
        }
        let levels: Vec<StockLevel> = items.iter().map(StockLevel::of_item).collect();

        match DomSurface::new() {
            Ok(mut surface) => {
                let renderer = StockBarRenderer::new(StockBarConfig::default());
                renderer.render_all(&mut surface, &levels);
                state.bars_rendered.set(true);
            }
            Err(e) => {
                state
                    .error_msg
                    .set(Some(format!("Could not reach the document: {e}")));
            }
        }
    });

    // ─── Render ───
    let categories = state.categories.read().clone();
    let items = state.items.read().clone();

    rsx! {
        div {
            class: "main",
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                CatalogHeader {
                    title: "Item Catalog".to_string(),
                    subheading: "Hover a category or item for admin controls.".to_string(),
                }

                ul {
                    class: "list list--categories",
                    style: "list-style: none; padding: 0; margin: 0 0 16px 0;",
                    for category in categories.iter() {
                        CategoryCard {
                            key: "{category.id}",
                            category: category.clone(),
                        }
                    }
                }

                for category in categories.iter() {
                    section {
                        key: "{category.id}",
                        h3 {
                            style: "margin: 12px 0 4px 0; font-size: 15px;",
                            "{category.name}"
                        }
                        ul {
                            class: "list list--items",
                            style: "list-style: none; padding: 0; margin: 0;",
                            for item in items.iter().filter(|i| i.category_id == category.id) {
                                ItemCard {
                                    key: "{item.id}",
                                    item: item.clone(),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
