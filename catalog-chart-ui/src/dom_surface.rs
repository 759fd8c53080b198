//! `web-sys`-backed [`RenderSurface`] used in the browser.
//!
//! Bars are plain SVG: a `<svg class="stock-bar">` container, a `<rect>`
//! fill, and a SMIL `<animate>` child driving the width from zero to its
//! target on a fixed schedule with cubic ease-in-out. No JS interop is
//! involved; everything goes through typed DOM calls.

use anyhow::{anyhow, Context, Result};
use catalog_core::stock_bar::{AnimationSchedule, EASE_CUBIC_SPLINE};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::surface::RenderSurface;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// The live document as a render surface.
pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    pub fn new() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .context("no document available")?;
        Ok(Self { document })
    }

    fn create_svg_element(&self, name: &str) -> Result<Element> {
        self.document
            .create_element_ns(Some(SVG_NS), name)
            .map_err(js_err)
    }
}

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("DOM call failed: {:?}", e)
}

fn set_attr(el: &Element, name: &str, value: &str) -> Result<()> {
    el.set_attribute(name, value).map_err(js_err)
}

impl RenderSurface for DomSurface {
    type Node = Element;

    fn find_container(&self, item_id: &str) -> Option<Element> {
        let selector = format!("#{item_id} .item__stock");
        // An invalid selector behaves like a missing container: no bar.
        self.document.query_selector(&selector).ok().flatten()
    }

    fn create_container(&mut self, target: &Element, width: f64, height: f64)
        -> Result<Element> {
        let svg = self.create_svg_element("svg")?;
        set_attr(&svg, "class", "stock-bar")?;
        set_attr(&svg, "width", &width.to_string())?;
        set_attr(&svg, "height", &height.to_string())?;
        set_attr(&svg, "style", "background: #fff;")?;
        target.append_child(&svg).map_err(js_err)?;
        Ok(svg)
    }

    fn insert_rect(&mut self, container: &Element, height: f64, fill: &str)
        -> Result<Element> {
        let rect = self.create_svg_element("rect")?;
        set_attr(&rect, "width", "0")?;
        set_attr(&rect, "height", &height.to_string())?;
        set_attr(&rect, "fill", fill)?;
        container.append_child(&rect).map_err(js_err)?;
        Ok(rect)
    }

    fn animate_width(
        &mut self,
        rect: &Element,
        target_width: f64,
        schedule: &AnimationSchedule,
    ) -> Result<()> {
        let animate = self.create_svg_element("animate")?;
        set_attr(&animate, "attributeName", "width")?;
        set_attr(&animate, "from", "0")?;
        set_attr(&animate, "to", &target_width.to_string())?;
        set_attr(&animate, "begin", &format!("{}ms", schedule.delay_ms))?;
        set_attr(&animate, "dur", &format!("{}ms", schedule.duration_ms))?;
        set_attr(&animate, "calcMode", "spline")?;
        set_attr(&animate, "keyTimes", "0;1")?;
        set_attr(&animate, "keySplines", EASE_CUBIC_SPLINE)?;
        set_attr(&animate, "fill", "freeze")?;
        rect.append_child(&animate).map_err(js_err)?;
        Ok(())
    }
}
