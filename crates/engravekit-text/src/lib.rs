//! # EngraveKit Text
//!
//! Turns text into pen-motion outlines and sizes them to fit a target box.
//!
//! The font engine is a capability boundary: everything downstream of
//! [`TextOutliner`] works against the trait, so the fitter and the pipeline
//! are testable with deterministic stubs while production code uses
//! [`FontOutliner`] on top of the system font database.

pub mod fit;
pub mod font_catalog;
pub mod outliner;

pub use fit::{fit_font_size, FitRequest};
pub use font_catalog::list_font_families;
pub use outliner::{FontOutliner, TextOutliner};
