//! Glyph outline extraction.

use rusttype::{point as rt_point, OutlineBuilder, Scale};
use tracing::debug;

use engravekit_core::{Outline, PathSegment, Point, Result};

use crate::font_catalog;

/// Capability boundary to the font engine: one method, text in, pen-motion
/// outline out. The bounding box is derived on the [`Outline`] itself.
pub trait TextOutliner {
    /// Renders `text` in the given family at `font_size_pt` points and
    /// returns its outline in design units. Empty text yields an empty
    /// outline; an unknown family is substituted, not rejected.
    fn outline(&self, text: &str, font_family: &str, font_size_pt: f64) -> Result<Outline>;
}

/// Production outliner backed by the system font catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct FontOutliner;

impl FontOutliner {
    /// Creates the outliner. Stateless; the font cache is process-wide.
    pub fn new() -> Self {
        Self
    }
}

impl TextOutliner for FontOutliner {
    fn outline(&self, text: &str, font_family: &str, font_size_pt: f64) -> Result<Outline> {
        if text.is_empty() {
            return Ok(Outline::default());
        }

        let font = font_catalog::get_font_for(font_family)?;
        let scale = Scale::uniform(font_size_pt as f32);
        let v_metrics = font.v_metrics(scale);
        // Baseline sits one ascent below the origin so the outline starts
        // near y = 0 and grows downward, matching raster conventions.
        let start = rt_point(0.0, v_metrics.ascent);

        let mut sink = SegmentSink::default();
        for glyph in font.layout(text, scale, start) {
            glyph.build_outline(&mut sink);
        }

        debug!(
            chars = text.chars().count(),
            segments = sink.segments.len(),
            "extracted text outline"
        );
        Ok(Outline::new(sink.segments))
    }
}

/// Collects rasterizer callbacks into path segments. Quadratic and cubic
/// curve points degrade to their end point, so every contour comes out as a
/// move followed by a line chain.
#[derive(Default)]
struct SegmentSink {
    segments: Vec<PathSegment>,
    contour_start: Point,
}

impl OutlineBuilder for SegmentSink {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = Point::new(f64::from(x), f64::from(y));
        self.segments.push(PathSegment::MoveTo(p));
        self.contour_start = p;
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = Point::new(f64::from(x), f64::from(y));
        self.segments.push(PathSegment::LineTo(p));
    }

    fn quad_to(&mut self, _x1: f32, _y1: f32, x: f32, y: f32) {
        self.line_to(x, y);
    }

    fn curve_to(&mut self, _x1: f32, _y1: f32, _x2: f32, _y2: f32, x: f32, y: f32) {
        self.line_to(x, y);
    }

    fn close(&mut self) {
        self.segments
            .push(PathSegment::LineTo(self.contour_start));
    }
}
