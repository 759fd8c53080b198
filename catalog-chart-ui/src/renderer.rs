//! The page-load stock-bar render pass.

use catalog_core::catalog::Item;
use catalog_core::stock_bar::StockBarConfig;

use crate::surface::RenderSurface;

/// The (DOM id, stock) pair read from one catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct StockLevel {
    pub dom_id: String,
    pub stock: f64,
}

impl StockLevel {
    pub fn of_item(item: &Item) -> Self {
        Self {
            dom_id: item.dom_id(),
            stock: item.stock,
        }
    }
}

/// Renders one stock bar per catalog entry onto a [`RenderSurface`].
#[derive(Debug, Clone, Default)]
pub struct StockBarRenderer {
    config: StockBarConfig,
}

impl StockBarRenderer {
    pub fn new(config: StockBarConfig) -> Self {
        Self { config }
    }

    /// Render bars for all items, in order. Runs once per page load.
    ///
    /// Items whose container is missing are skipped, and a failed surface
    /// mutation abandons that item's bar without touching the rest. No
    /// errors are reported; a stock bar is cosmetic.
    pub fn render_all<S: RenderSurface>(&self, surface: &mut S, items: &[StockLevel]) {
        let mut drawn = 0usize;
        for item in items {
            let Some(target) = surface.find_container(&item.dom_id) else {
                continue;
            };
            let geometry = self.config.geometry(item.stock);
            let Ok(svg) =
                surface.create_container(&target, self.config.bar_width, self.config.bar_height)
            else {
                continue;
            };
            let Ok(rect) =
                surface.insert_rect(&svg, self.config.bar_height, &geometry.fill.to_string())
            else {
                continue;
            };
            let _ = surface.animate_width(&rect, geometry.width, &self.config.schedule);
            drawn += 1;
        }
        log::debug!("stock bars drawn: {drawn} of {}", items.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{bail, Result};
    use catalog_core::stock_bar::AnimationSchedule;

    /// In-memory surface that records every mutation.
    #[derive(Default)]
    struct RecordingSurface {
        /// Item ids that resolve to a container.
        known_ids: Vec<String>,
        /// One entry per created svg: (width, height).
        svgs: Vec<(f64, f64)>,
        /// One entry per inserted rect: (svg node, height, fill).
        rects: Vec<(usize, f64, String)>,
        /// One entry per scheduled animation: (rect node, target width, schedule).
        animations: Vec<(usize, f64, AnimationSchedule)>,
        fail_create: bool,
        next_node: usize,
    }

    impl RecordingSurface {
        fn with_containers(ids: &[&str]) -> Self {
            Self {
                known_ids: ids.iter().map(|s| s.to_string()).collect(),
                ..Self::default()
            }
        }

        fn alloc(&mut self) -> usize {
            self.next_node += 1;
            self.next_node
        }
    }

    impl RenderSurface for RecordingSurface {
        type Node = usize;

        fn find_container(&self, item_id: &str) -> Option<usize> {
            self.known_ids.iter().position(|id| id == item_id)
        }

        fn create_container(&mut self, _target: &usize, width: f64, height: f64)
            -> Result<usize> {
            if self.fail_create {
                bail!("container creation refused");
            }
            self.svgs.push((width, height));
            Ok(self.alloc())
        }

        fn insert_rect(&mut self, container: &usize, height: f64, fill: &str)
            -> Result<usize> {
            self.rects.push((*container, height, fill.to_string()));
            Ok(self.alloc())
        }

        fn animate_width(
            &mut self,
            rect: &usize,
            target_width: f64,
            schedule: &AnimationSchedule,
        ) -> Result<()> {
            self.animations.push((*rect, target_width, *schedule));
            Ok(())
        }
    }

    fn level(dom_id: &str, stock: f64) -> StockLevel {
        StockLevel {
            dom_id: dom_id.to_string(),
            stock,
        }
    }

    #[test]
    fn renders_one_svg_and_rect_per_matched_item() {
        let mut surface = RecordingSurface::with_containers(&["sku-1"]);
        let renderer = StockBarRenderer::default();

        renderer.render_all(&mut surface, &[level("sku-1", 15.0)]);

        assert_eq!(surface.svgs, vec![(50.0, 24.0)]);
        assert_eq!(surface.rects.len(), 1);
        assert_eq!(surface.animations.len(), 1);
        // Initial fill is the blended color at stock 15.
        assert_eq!(surface.rects[0].2, "rgb(200, 202, 72)");
        // Final width is 15/100 * 50.
        assert_eq!(surface.animations[0].1, 7.5);
        assert_eq!(
            surface.animations[0].2,
            AnimationSchedule {
                delay_ms: 100,
                duration_ms: 1000
            }
        );
    }

    #[test]
    fn unmatched_items_are_skipped_silently() {
        let mut surface = RecordingSurface::with_containers(&["item-1"]);
        let renderer = StockBarRenderer::default();

        renderer.render_all(
            &mut surface,
            &[level("item-1", 40.0), level("item-404", 40.0)],
        );

        assert_eq!(surface.svgs.len(), 1);
        assert_eq!(surface.rects.len(), 1);
    }

    #[test]
    fn empty_item_list_inserts_nothing() {
        let mut surface = RecordingSurface::default();
        StockBarRenderer::default().render_all(&mut surface, &[]);
        assert!(surface.svgs.is_empty());
        assert!(surface.rects.is_empty());
        assert!(surface.animations.is_empty());
    }

    #[test]
    fn surface_failure_abandons_only_that_bar() {
        let mut surface = RecordingSurface::with_containers(&["item-1", "item-2"]);
        surface.fail_create = true;
        StockBarRenderer::default().render_all(
            &mut surface,
            &[level("item-1", 5.0), level("item-2", 5.0)],
        );
        assert!(surface.svgs.is_empty());
        assert!(surface.rects.is_empty());
    }

    #[test]
    fn bars_render_in_document_order() {
        let mut surface = RecordingSurface::with_containers(&["item-1", "item-2", "item-3"]);
        let renderer = StockBarRenderer::default();
        renderer.render_all(
            &mut surface,
            &[level("item-1", 0.0), level("item-2", 50.0), level("item-3", 100.0)],
        );
        let widths: Vec<f64> = surface.animations.iter().map(|a| a.1).collect();
        assert_eq!(widths, vec![0.0, 25.0, 50.0]);
    }

    #[test]
    fn stock_above_domain_cap_extrapolates() {
        let mut surface = RecordingSurface::with_containers(&["item-1"]);
        StockBarRenderer::default().render_all(&mut surface, &[level("item-1", 150.0)]);
        assert_eq!(surface.animations[0].1, 75.0);
    }

    #[test]
    fn of_item_uses_the_item_dom_id() {
        let items = catalog_core::catalog::parse_items("7,Fielding Glove,,$74.99,26,g.jpg,3")
            .unwrap();
        let stock_level = StockLevel::of_item(&items[0]);
        assert_eq!(stock_level.dom_id, "item-7");
        assert_eq!(stock_level.stock, 26.0);
    }
}
