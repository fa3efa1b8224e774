//! Geometry primitives.
//!
//! Coordinates follow the text rasterizer's convention: X grows right,
//! Y grows down. The G-code serializer is the only place where the axis
//! flip to machine coordinates happens.

use serde::{Deserialize, Serialize};

/// A 2D point in font design units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// The empty box, used as the bounds of an empty outline.
    pub const ZERO: Rect = Rect {
        min_x: 0.0,
        min_y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Creates a box from its minimum corner and extent.
    pub fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }

    /// Tightest box around the given points. An empty iterator yields
    /// [`Rect::ZERO`].
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        let mut iter = points.into_iter();
        let Some(first) = iter.next() else {
            return Self::ZERO;
        };

        let mut min_x = first.x;
        let mut min_y = first.y;
        let mut max_x = first.x;
        let mut max_y = first.y;

        for p in iter {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        Self {
            min_x,
            min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }

    /// Maximum X coordinate.
    pub fn max_x(&self) -> f64 {
        self.min_x + self.width
    }

    /// Maximum Y coordinate.
    pub fn max_y(&self) -> f64 {
        self.min_y + self.height
    }

    /// Center point of the box.
    pub fn center(&self) -> Point {
        Point::new(
            self.min_x + self.width / 2.0,
            self.min_y + self.height / 2.0,
        )
    }

    /// True when the box has no area (whitespace-only text, single points,
    /// purely horizontal or vertical runs). Degenerate boxes cannot be
    /// projected into a viewport.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_spans_extremes() {
        let rect = Rect::from_points(vec![
            Point::new(2.0, -1.0),
            Point::new(-3.0, 4.0),
            Point::new(0.5, 0.5),
        ]);
        assert_eq!(rect.min_x, -3.0);
        assert_eq!(rect.min_y, -1.0);
        assert_eq!(rect.width, 5.0);
        assert_eq!(rect.height, 5.0);
        assert_eq!(rect.max_x(), 2.0);
        assert_eq!(rect.max_y(), 4.0);
    }

    #[test]
    fn from_points_empty_is_zero() {
        let rect = Rect::from_points(std::iter::empty());
        assert_eq!(rect, Rect::ZERO);
        assert!(rect.is_degenerate());
    }

    #[test]
    fn center_is_midpoint() {
        let rect = Rect::new(10.0, 20.0, 4.0, 6.0);
        let c = rect.center();
        assert_eq!(c.x, 12.0);
        assert_eq!(c.y, 23.0);
    }

    #[test]
    fn single_point_is_degenerate() {
        let rect = Rect::from_points(vec![Point::new(1.0, 1.0)]);
        assert!(rect.is_degenerate());
    }

    #[test]
    fn horizontal_run_is_degenerate() {
        let rect = Rect::from_points(vec![Point::new(0.0, 5.0), Point::new(9.0, 5.0)]);
        assert_eq!(rect.width, 9.0);
        assert_eq!(rect.height, 0.0);
        assert!(rect.is_degenerate());
    }
}
