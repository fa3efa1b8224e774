//! # EngraveKit
//!
//! Text engraving toolpaths for CNC machines and pen plotters: render a
//! string in a system font, optionally fit it to a target box, and emit a
//! G-code program plus the projection a preview needs.
//!
//! ## Architecture
//!
//! EngraveKit is organized as a workspace with multiple crates:
//!
//! 1. **engravekit-core** - Geometry, path model, errors, shared defaults
//! 2. **engravekit-text** - Font catalog, outline extraction, size fitting
//! 3. **engravekit-gcode** - G-code serialization and file output
//! 4. **engravekit-preview** - Fit-to-viewport projection math
//! 5. **engravekit** - This facade, re-exports plus the Generate pipeline
//!
//! The UI shell (widgets, dialogs, clipboard, theming) lives outside this
//! workspace and talks to it with plain data: an [`EngraveRequest`] in, an
//! [`EngraveResult`] out.

pub mod pipeline;

pub use engravekit_core::{
    constants, Error, FontError, OutputError, Outline, PathSegment, Point, Rect, Result,
};

pub use engravekit_text::{
    fit_font_size, list_font_families, FitRequest, FontOutliner, TextOutliner,
};

pub use engravekit_gcode::{
    default_file_name, serialize, GcodeParams, GcodeProgram, PREAMBLE, PROGRAM_END,
};

pub use engravekit_preview::ViewTransform;

pub use pipeline::{generate, EngraveRequest, EngraveResult, MaxDimensions};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output and `RUST_LOG`
/// environment variable support.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(env_filter)
        .try_init()?;

    Ok(())
}
