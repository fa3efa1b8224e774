//! The Generate pipeline: the sequence a single user action runs.
//!
//! Synchronous and stateless — fit (when a target box is set), extract,
//! serialize, measure. Each call owns its inputs and outputs; nothing is
//! shared across calls.

use serde::{Deserialize, Serialize};
use tracing::info;

use engravekit_core::constants::{
    DEFAULT_FONT_SIZE, DEFAULT_MAX_HEIGHT_MM, DEFAULT_MAX_WIDTH_MM,
};
use engravekit_core::{Outline, Result};
use engravekit_gcode::{serialize, GcodeParams, GcodeProgram};
use engravekit_text::{fit_font_size, FitRequest, TextOutliner};

/// Target box for automatic sizing, mm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaxDimensions {
    pub width_mm: f64,
    pub height_mm: f64,
}

impl Default for MaxDimensions {
    fn default() -> Self {
        Self {
            width_mm: DEFAULT_MAX_WIDTH_MM,
            height_mm: DEFAULT_MAX_HEIGHT_MM,
        }
    }
}

/// Plain-data request from the UI shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngraveRequest {
    pub text: String,
    pub font_family: String,
    /// Requested font size, points. When `max_dimensions` is set this is
    /// only the fallback the fitter returns if nothing fits.
    pub font_size: u32,
    /// When set, the font size is fitted to this box before extraction.
    pub max_dimensions: Option<MaxDimensions>,
    pub gcode: GcodeParams,
}

impl EngraveRequest {
    /// Builds a request with default size and machine parameters.
    pub fn new(text: impl Into<String>, font_family: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_family: font_family.into(),
            font_size: DEFAULT_FONT_SIZE,
            max_dimensions: None,
            gcode: GcodeParams::default(),
        }
    }
}

/// Everything one Generate action produces.
#[derive(Debug, Clone)]
pub struct EngraveResult {
    /// The outline the preview draws.
    pub outline: Outline,
    /// The serialized program.
    pub program: GcodeProgram,
    /// The effective font size — fitted when a target box was set.
    pub font_size: u32,
    /// Outline width after scaling, mm (the dimensions label).
    pub width_mm: f64,
    /// Outline height after scaling, mm.
    pub height_mm: f64,
}

/// Runs one Generate action: optional fit, extraction, serialization, and
/// the measured dimensions the UI displays.
pub fn generate<O>(outliner: &O, request: &EngraveRequest) -> Result<EngraveResult>
where
    O: TextOutliner + ?Sized,
{
    let mut font_size = request.font_size;
    if let Some(max) = request.max_dimensions {
        let fit = FitRequest::new(
            request.text.clone(),
            request.font_family.clone(),
            max.width_mm,
            max.height_mm,
            request.gcode.scale,
        );
        font_size = fit_font_size(outliner, &fit, font_size)?;
    }

    let outline = outliner.outline(&request.text, &request.font_family, f64::from(font_size))?;
    let program = serialize(&outline, &request.gcode);

    let bounds = outline.bounds();
    let width_mm = bounds.width * request.gcode.scale;
    let height_mm = bounds.height * request.gcode.scale;

    info!(
        font_size,
        width_mm,
        height_mm,
        lines = program.len(),
        "generated G-code program"
    );

    Ok(EngraveResult {
        outline,
        program,
        font_size,
        width_mm,
        height_mm,
    })
}
