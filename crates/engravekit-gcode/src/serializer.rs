//! Outline to G-code serialization.

use serde::{Deserialize, Serialize};
use tracing::debug;

use engravekit_core::constants::{
    DEFAULT_CUT_Z_MM, DEFAULT_FEEDRATE_MM_MIN, DEFAULT_GCODE_SCALE, DEFAULT_SAFE_Z_MM,
};
use engravekit_core::{Outline, PathSegment, Point};

use crate::program::GcodeProgram;

/// Fixed first lines of every program: millimeter units, absolute
/// positioning.
pub const PREAMBLE: [&str; 2] = ["G21 ; mm mode", "G90 ; absolute positioning"];

/// Fixed last line of every program.
pub const PROGRAM_END: &str = "M2 ; Program end";

/// Machine parameters for serialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GcodeParams {
    /// Multiplier from font design units to millimeters.
    pub scale: f64,
    /// Z height for pen-up rapids, mm.
    pub safe_z: f64,
    /// Z height while cutting, mm.
    pub cut_z: f64,
    /// Feed rate for cutting moves, mm/min.
    pub feedrate: u32,
}

impl Default for GcodeParams {
    fn default() -> Self {
        Self {
            scale: DEFAULT_GCODE_SCALE,
            safe_z: DEFAULT_SAFE_Z_MM,
            cut_z: DEFAULT_CUT_Z_MM,
            feedrate: DEFAULT_FEEDRATE_MM_MIN,
        }
    }
}

/// Tool state tracked while emitting motion commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PenState {
    Up,
    Down,
}

/// Serializes an outline into a complete G-code program.
///
/// `MoveTo` segments become pen-up rapids, `LineTo` segments become cutting
/// moves at the configured feed rate, with Z transitions emitted only when
/// the pen state actually changes. The Y axis is inverted on the way out:
/// glyph outlines grow downward, the machine's Y grows upward. Coordinates
/// carry exactly two decimals so output is reproducible byte for byte.
pub fn serialize(outline: &Outline, params: &GcodeParams) -> GcodeProgram {
    let mut lines: Vec<String> = PREAMBLE.iter().map(|s| (*s).to_string()).collect();

    if outline.is_empty() {
        lines.push(PROGRAM_END.to_string());
        return GcodeProgram::from_lines(lines);
    }

    let mut pen = PenState::Up;
    for segment in outline.segments() {
        match segment {
            PathSegment::MoveTo(p) => {
                if pen == PenState::Down {
                    lines.push(format!("G0 Z{:.2}", params.safe_z));
                    pen = PenState::Up;
                }
                let (x, y) = machine_coords(*p, params.scale);
                lines.push(format!("G0 X{:.2} Y{:.2}", x, y));
            }
            PathSegment::LineTo(p) => {
                if pen == PenState::Up {
                    lines.push(format!("G1 Z{:.2} F{}", params.cut_z, params.feedrate));
                    pen = PenState::Down;
                }
                let (x, y) = machine_coords(*p, params.scale);
                lines.push(format!("G1 X{:.2} Y{:.2} F{}", x, y, params.feedrate));
            }
        }
    }

    if pen == PenState::Down {
        lines.push(format!("G0 Z{:.2}", params.safe_z));
    }
    lines.push(PROGRAM_END.to_string());

    debug!(
        segments = outline.len(),
        lines = lines.len(),
        "serialized outline"
    );
    GcodeProgram::from_lines(lines)
}

fn machine_coords(p: Point, scale: f64) -> (f64, f64) {
    (p.x * scale, -p.y * scale)
}
