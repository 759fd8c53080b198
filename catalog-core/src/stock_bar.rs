//! Stock-bar configuration and geometry.
//!
//! A stock bar is a fixed-size horizontal gauge: the filled width is the
//! stock quantity passed through a linear scale, the fill color comes from
//! the banded color scale, and the fill animates from zero width to its
//! target on page load. All knobs live in [`StockBarConfig`] so callers pass
//! explicit configuration instead of reaching for ambient globals.

use crate::scale::{BandMode, ColorScale, LinearScale, Rgb};

/// Timing for the fill-width animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSchedule {
    pub delay_ms: u32,
    pub duration_ms: u32,
}

impl Default for AnimationSchedule {
    fn default() -> Self {
        Self {
            delay_ms: 100,
            duration_ms: 1000,
        }
    }
}

/// Cubic ease-in-out control points (CSS/SMIL spline form of `easeCubic`).
pub const EASE_CUBIC_SPLINE: &str = "0.65 0 0.35 1";

/// Immutable configuration for rendering stock bars.
#[derive(Debug, Clone, PartialEq)]
pub struct StockBarConfig {
    /// Maximum bar width in SVG units.
    pub bar_width: f64,
    /// Bar height in SVG units.
    pub bar_height: f64,
    /// Stock domain mapped onto `[0, bar_width]`. Stock above the upper
    /// bound extrapolates past the bar width; it is never clamped.
    pub stock_domain: [f64; 2],
    /// Ordered (threshold, color) anchors for the fill color.
    pub color_stops: Vec<(f64, Rgb)>,
    pub band_mode: BandMode,
    pub schedule: AnimationSchedule,
}

impl Default for StockBarConfig {
    fn default() -> Self {
        Self {
            bar_width: 50.0,
            bar_height: 24.0,
            stock_domain: [0.0, 100.0],
            color_stops: vec![
                (0.0, Rgb::RED),
                (10.0, Rgb::ORANGE),
                (20.0, Rgb::LIGHTGREEN),
                (9999.0, Rgb::GREEN),
            ],
            band_mode: BandMode::Blended,
            schedule: AnimationSchedule::default(),
        }
    }
}

/// The computed visual attributes of one bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    /// Target fill width after the animation completes.
    pub width: f64,
    pub fill: Rgb,
}

impl StockBarConfig {
    pub fn width_scale(&self) -> LinearScale {
        LinearScale::new(
            self.stock_domain.to_vec(),
            vec![0.0, self.bar_width],
        )
    }

    pub fn color_scale(&self) -> ColorScale {
        let (domain, range): (Vec<f64>, Vec<Rgb>) = self.color_stops.iter().copied().unzip();
        ColorScale::new(domain, range, self.band_mode)
    }

    /// Compute the bar geometry for a raw stock value.
    ///
    /// Malformed stock arrives here as NaN and flows through both scales
    /// unchanged; the result is a degenerate bar, never a panic.
    pub fn geometry(&self, stock: f64) -> BarGeometry {
        BarGeometry {
            width: self.width_scale().scale(stock),
            fill: self.color_scale().color(stock),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_is_proportional_on_domain() {
        let config = StockBarConfig::default();
        assert_eq!(config.geometry(0.0).width, 0.0);
        assert_eq!(config.geometry(50.0).width, 25.0);
        assert_eq!(config.geometry(100.0).width, 50.0);
        // stock 15 -> 15/100 * 50
        assert_eq!(config.geometry(15.0).width, 7.5);
    }

    #[test]
    fn width_extrapolates_above_domain_cap() {
        let config = StockBarConfig::default();
        assert_eq!(config.geometry(150.0).width, 75.0);
        assert_eq!(config.geometry(200.0).width, 100.0);
    }

    #[test]
    fn fill_matches_band_anchors() {
        let config = StockBarConfig::default();
        assert_eq!(config.geometry(0.0).fill, Rgb::RED);
        assert_eq!(config.geometry(10.0).fill, Rgb::ORANGE);
        assert_eq!(config.geometry(20.0).fill, Rgb::LIGHTGREEN);
        assert_eq!(config.geometry(9999.0).fill, Rgb::GREEN);
    }

    #[test]
    fn fill_blends_between_anchors_by_default() {
        let config = StockBarConfig::default();
        assert_eq!(config.geometry(5.0).fill, Rgb { r: 255, g: 83, b: 0 });
    }

    #[test]
    fn nan_stock_yields_degenerate_geometry() {
        let config = StockBarConfig::default();
        let geometry = config.geometry(f64::NAN);
        assert!(geometry.width.is_nan());
    }

    #[test]
    fn default_schedule_matches_page_load_animation() {
        let schedule = AnimationSchedule::default();
        assert_eq!(schedule.delay_ms, 100);
        assert_eq!(schedule.duration_ms, 1000);
    }
}
