//! Viewport projection for outline previews.
//!
//! The preview draws in the rasterizer's coordinate space (Y down), so no
//! axis flip happens here; only the G-code serializer inverts Y for the
//! machine.

use engravekit_core::constants::VIEW_FIT_MARGIN;
use engravekit_core::{Outline, Point, Rect};

/// Uniform scale-and-center transform that fits an outline into a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    view_scale: f64,
    viewport_width: f64,
    viewport_height: f64,
    content_center: Point,
}

impl ViewTransform {
    /// Computes the transform that centers `outline` in the viewport at the
    /// largest uniform scale leaving a 10% margin.
    ///
    /// Returns `None` when the outline's bounds are degenerate (empty or
    /// whitespace-only text, a single point, a flat run) — there is no
    /// defined scale and the caller should skip drawing.
    pub fn fit(outline: &Outline, viewport_width: f64, viewport_height: f64) -> Option<Self> {
        Self::fit_bounds(outline.bounds(), viewport_width, viewport_height)
    }

    /// Same as [`ViewTransform::fit`], from a precomputed bounding box.
    pub fn fit_bounds(bounds: Rect, viewport_width: f64, viewport_height: f64) -> Option<Self> {
        if bounds.is_degenerate() {
            return None;
        }

        let view_scale = (viewport_width / bounds.width).min(viewport_height / bounds.height)
            * VIEW_FIT_MARGIN;

        Some(Self {
            view_scale,
            viewport_width,
            viewport_height,
            content_center: bounds.center(),
        })
    }

    /// The uniform geometry scale.
    pub fn view_scale(&self) -> f64 {
        self.view_scale
    }

    /// Maps a design-space point to viewport coordinates: translate to the
    /// viewport center, scale, translate by the negated content center.
    pub fn apply(&self, p: Point) -> (f64, f64) {
        (
            self.viewport_width / 2.0 + (p.x - self.content_center.x) * self.view_scale,
            self.viewport_height / 2.0 + (p.y - self.content_center.y) * self.view_scale,
        )
    }

    /// Pen width to hand the renderer for a stroke that should appear
    /// `line_width_mm` wide on the machine.
    ///
    /// The transform scales geometry but not the rendering pen, and the
    /// line width is given in millimeters while geometry is in design
    /// units, so the width is divided out through both scales.
    pub fn stroke_width(&self, line_width_mm: f64, gcode_scale: f64) -> f64 {
        line_width_mm / gcode_scale / self.view_scale
    }
}
