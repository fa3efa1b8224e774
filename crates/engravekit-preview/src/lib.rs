//! # EngraveKit Preview
//!
//! Projection math for rendering an outline inside a viewport: uniform
//! scale with margin, centering, and the stroke-width compensation the
//! rendering pen needs once geometry is transformed.

pub mod projection;

pub use projection::ViewTransform;
