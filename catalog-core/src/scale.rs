//! Numeric and color scales for the stock-level bars.
//!
//! These mirror the d3 `scaleLinear` semantics the legacy front end was built
//! on: a piecewise-linear mapping over ordered domain stops, with values
//! outside the domain extrapolated along the outermost segment rather than
//! clamped. The color scale additionally supports a genuine step mode, since
//! the legacy scale expressed four discrete stock bands through a continuous
//! interpolator (see `BandMode`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Piecewise-linear scale over ordered domain stops.
///
/// Requires at least two stops and equally many domain and range values.
/// Inputs below the first or above the last stop extrapolate linearly along
/// the first or last segment.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScale {
    domain: Vec<f64>,
    range: Vec<f64>,
}

impl LinearScale {
    pub fn new(domain: Vec<f64>, range: Vec<f64>) -> Self {
        assert!(domain.len() >= 2, "scale needs at least two domain stops");
        assert_eq!(
            domain.len(),
            range.len(),
            "domain and range must have equal length"
        );
        Self { domain, range }
    }

    /// Map an input value into the range. NaN inputs yield NaN.
    pub fn scale(&self, x: f64) -> f64 {
        let (i, t) = segment(&self.domain, x);
        let (r0, r1) = (self.range[i], self.range[i + 1]);
        r0 + (r1 - r0) * t
    }
}

/// Locate the segment an input falls into and its interpolation parameter.
///
/// Returns the index of the segment's lower stop and the (unclamped)
/// parameter `t`, so out-of-domain inputs produce `t` outside `[0, 1]`.
fn segment(domain: &[f64], x: f64) -> (usize, f64) {
    let last = domain.len() - 2;
    let mut i = last;
    for k in 0..last {
        if x < domain[k + 1] {
            i = k;
            break;
        }
    }
    let (d0, d1) = (domain[i], domain[i + 1]);
    (i, (x - d0) / (d1 - d0))
}

/// An 8-bit RGB color, displayed in CSS `rgb(r, g, b)` notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    // The four CSS named colors the stock bands use.
    pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    pub const ORANGE: Rgb = Rgb { r: 255, g: 165, b: 0 };
    pub const LIGHTGREEN: Rgb = Rgb {
        r: 144,
        g: 238,
        b: 144,
    };
    pub const GREEN: Rgb = Rgb { r: 0, g: 128, b: 0 };

    /// Channel-wise linear interpolation toward `other`.
    ///
    /// `t` is not clamped, so extrapolation past either anchor is possible;
    /// each channel rounds half-away-from-zero and saturates at 0..=255.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        Rgb {
            r: mix(self.r, other.r, t),
            g: mix(self.g, other.g, t),
            b: mix(self.b, other.b, t),
        }
    }
}

fn mix(a: u8, b: u8, t: f64) -> u8 {
    let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
    // NaN casts to 0, so a NaN parameter degrades to black instead of panicking.
    v.round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// How a [`ColorScale`] treats inputs between two anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BandMode {
    /// Linear blend between the surrounding anchors. This replicates the
    /// legacy behavior, where a continuous scale was used for what is
    /// conceptually a discrete classification.
    Blended,
    /// Genuine step bands: each input takes the color of the highest anchor
    /// at or below it.
    Stepped,
}

/// Banded color scale over ordered numeric thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    domain: Vec<f64>,
    range: Vec<Rgb>,
    mode: BandMode,
}

impl ColorScale {
    pub fn new(domain: Vec<f64>, range: Vec<Rgb>, mode: BandMode) -> Self {
        assert!(domain.len() >= 2, "scale needs at least two domain stops");
        assert_eq!(
            domain.len(),
            range.len(),
            "domain and range must have equal length"
        );
        Self { domain, range, mode }
    }

    /// Map an input value to a color according to the band mode.
    pub fn color(&self, x: f64) -> Rgb {
        match self.mode {
            BandMode::Blended => {
                let (i, t) = segment(&self.domain, x);
                self.range[i].lerp(self.range[i + 1], t)
            }
            BandMode::Stepped => {
                let mut color = self.range[0];
                for (threshold, anchor) in self.domain.iter().zip(self.range.iter()) {
                    if x >= *threshold {
                        color = *anchor;
                    }
                }
                color
            }
        }
    }
}
