//! The capability interface between the stock-bar renderer and its target.
//!
//! The renderer never touches the document directly; it draws through this
//! trait. The browser build uses [`crate::dom_surface::DomSurface`], tests use
//! an in-memory recording implementation.

use anyhow::Result;
use catalog_core::stock_bar::AnimationSchedule;

/// A rendering surface that can host stock bars.
pub trait RenderSurface {
    /// Opaque handle to a node on the surface.
    type Node: Clone;

    /// Resolve the stock cell for an item's DOM id (the equivalent of the
    /// `#<id> .item__stock` selector). `None` means the item has no stock
    /// cell on the page and its bar is skipped.
    fn find_container(&self, item_id: &str) -> Option<Self::Node>;

    /// Create the fixed-size bar container (an SVG element classed
    /// `stock-bar` with a white background) as a child of `target`.
    fn create_container(&mut self, target: &Self::Node, width: f64, height: f64)
        -> Result<Self::Node>;

    /// Insert the fill rect: full height, zero initial width, the given
    /// CSS fill color.
    fn insert_rect(&mut self, container: &Self::Node, height: f64, fill: &str)
        -> Result<Self::Node>;

    /// Schedule the rect's width animation from zero to `target_width`.
    fn animate_width(
        &mut self,
        rect: &Self::Node,
        target_width: f64,
        schedule: &AnimationSchedule,
    ) -> Result<()>;
}
