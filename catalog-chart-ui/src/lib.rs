//! Shared Dioxus components and stock-bar rendering for the catalog app.
//!
//! This crate provides:
//! - `surface`: the `RenderSurface` capability trait the bar renderer draws
//!   through, so the scale math can be tested without a document
//! - `dom_surface`: the `web-sys`-backed surface used in the browser
//! - `renderer`: the `StockBarRenderer` page-load render pass
//! - `hover`: admin-panel visibility semantics as plain data
//! - `state`: reactive `AppState` with Dioxus Signals
//! - `components`: reusable RSX components (cards, panels, header, etc.)

pub mod components;
pub mod dom_surface;
pub mod hover;
pub mod renderer;
pub mod state;
pub mod surface;
