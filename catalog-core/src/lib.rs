//! Domain types and pure algorithms for the catalog web UI.
//!
//! This crate has no DOM or WASM dependency:
//! - `catalog`: `Category`/`Item` records and CSV fixture parsing
//! - `scale`: linear and banded color scales (d3 `scaleLinear` semantics)
//! - `stock_bar`: stock-bar configuration and geometry computation

pub mod catalog;
pub mod scale;
pub mod stock_bar;
