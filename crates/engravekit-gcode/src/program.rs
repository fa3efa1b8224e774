//! Program container and file output.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use engravekit_core::{OutputError, Result};

/// An assembled G-code program, one command per line. Built only by the
/// serializer, so the preamble/end-marker invariants hold by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GcodeProgram {
    lines: Vec<String>,
}

impl GcodeProgram {
    pub(crate) fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// The program's lines in emission order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines, preamble and end marker included.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True only for a program with no lines at all; even an empty outline
    /// serializes to preamble plus end marker.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Writes the program to `path` as newline-joined plain text.
    ///
    /// Failures (missing directory, permissions, full disk) surface as a
    /// recoverable [`OutputError`] carrying the target path; the in-memory
    /// program is unaffected and the caller may retry elsewhere.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_string()).map_err(|source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }
}

impl fmt::Display for GcodeProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

/// Suggested output file name for a program generated from `text`: the
/// trimmed text with a `.g` extension, or `gcode.g` when the text is blank.
pub fn default_file_name(text: &str) -> String {
    let stem = text.trim();
    if stem.is_empty() {
        "gcode.g".to_string()
    } else {
        format!("{stem}.g")
    }
}
