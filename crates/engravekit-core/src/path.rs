//! Pen-motion path model.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};

/// One step of a pen traversal. Order within an [`Outline`] is significant:
/// it is the order the machine visits the points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathSegment {
    /// Pen-up reposition to the start of a new contour.
    MoveTo(Point),
    /// Pen-down move to the given point. Curves arrive from the rasterizer
    /// already sampled into line chains, so there is no curve variant.
    LineTo(Point),
}

impl PathSegment {
    /// The segment's target point.
    pub fn point(&self) -> Point {
        match self {
            Self::MoveTo(p) | Self::LineTo(p) => *p,
        }
    }

    /// True for pen-up repositioning segments.
    pub fn is_move(&self) -> bool {
        matches!(self, Self::MoveTo(_))
    }
}

/// An ordered sequence of pen motions describing glyph outlines, with its
/// bounding box computed at construction. Immutable once produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    segments: Vec<PathSegment>,
    bounds: Rect,
}

impl Outline {
    /// Builds an outline and derives its bounds from every segment point.
    pub fn new(segments: Vec<PathSegment>) -> Self {
        let bounds = Rect::from_points(segments.iter().map(PathSegment::point));
        Self { segments, bounds }
    }

    /// The segments in traversal order.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Bounding box of all segment points; [`Rect::ZERO`] when empty.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True for the outline of empty text.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
