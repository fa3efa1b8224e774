//! Automatic font sizing against a target box.

use serde::{Deserialize, Serialize};
use tracing::debug;

use engravekit_core::constants::{FIT_MAX_SIZE, FIT_MIN_SIZE};
use engravekit_core::Result;

use crate::outliner::TextOutliner;

/// Target box and search bounds for automatic font sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitRequest {
    pub text: String,
    pub font_family: String,
    /// Maximum outline width after scaling, mm.
    pub max_width_mm: f64,
    /// Maximum outline height after scaling, mm.
    pub max_height_mm: f64,
    /// Inclusive lower bound of the size search, points.
    pub min_size: u32,
    /// Inclusive upper bound of the size search, points.
    pub max_size: u32,
    /// Multiplier from font design units to millimeters.
    pub unit_scale: f64,
}

impl FitRequest {
    /// Builds a request with the default search range.
    pub fn new(
        text: impl Into<String>,
        font_family: impl Into<String>,
        max_width_mm: f64,
        max_height_mm: f64,
        unit_scale: f64,
    ) -> Self {
        Self {
            text: text.into(),
            font_family: font_family.into(),
            max_width_mm,
            max_height_mm,
            min_size: FIT_MIN_SIZE,
            max_size: FIT_MAX_SIZE,
            unit_scale,
        }
    }
}

/// Finds the largest integer font size whose outline fits the target box.
///
/// Binary search over `[min_size, max_size]`, relying on outline width and
/// height being non-decreasing in font size. When no tested size fits, the
/// caller's `starting_size` comes back unchanged: an impossible box degrades
/// to the size the user already had instead of failing.
pub fn fit_font_size<O>(outliner: &O, request: &FitRequest, starting_size: u32) -> Result<u32>
where
    O: TextOutliner + ?Sized,
{
    let mut lo = i64::from(request.min_size);
    let mut hi = i64::from(request.max_size);
    let mut optimal = starting_size;

    while lo <= hi {
        let mid = (lo + hi) / 2;
        let outline = outliner.outline(&request.text, &request.font_family, mid as f64)?;
        let bounds = outline.bounds();
        let width_mm = bounds.width * request.unit_scale;
        let height_mm = bounds.height * request.unit_scale;

        if width_mm <= request.max_width_mm && height_mm <= request.max_height_mm {
            optimal = mid as u32;
            lo = mid + 1;
        } else {
            hi = mid - 1;
        }
        debug!(mid, width_mm, height_mm, "size bisection step");
    }

    debug!(optimal, "fitted font size");
    Ok(optimal)
}
