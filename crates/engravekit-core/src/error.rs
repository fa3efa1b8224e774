//! Error handling for EngraveKit
//!
//! Provides error types for the two layers that can actually fail:
//! - Font errors (discovery/parsing of system fonts)
//! - Output errors (writing generated programs to disk)
//!
//! All error types use `thiserror` for ergonomic error handling. Outline
//! extraction, fitting, serialization, and projection are pure given their
//! preconditions and define no failure modes of their own; an unavailable
//! font family is silently substituted, not an error.

use std::path::PathBuf;

use thiserror::Error;

/// Font error type
///
/// Raised only when no usable font can be produced at all. Family
/// substitution has already happened by the time one of these is built.
#[derive(Error, Debug)]
pub enum FontError {
    /// The system font database contains no faces
    #[error("No fonts available on this system")]
    NoFontsAvailable,

    /// Faces exist but none could be parsed
    #[error("No usable font could be loaded for family '{family}'")]
    Unusable {
        /// The family the caller asked for.
        family: String,
    },
}

/// Output error type
///
/// Represents failures while persisting a generated program. Always
/// recoverable: the caller keeps the in-memory program and may retry.
#[derive(Error, Debug)]
pub enum OutputError {
    /// Writing the program file failed
    #[error("Failed to write G-code to {path}: {source}")]
    Write {
        /// The target path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Main error type for EngraveKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Font error
    #[error(transparent)]
    Font(#[from] FontError),

    /// Output error
    #[error(transparent)]
    Output(#[from] OutputError),
}

impl Error {
    /// Check if this is a font error
    pub fn is_font_error(&self) -> bool {
        matches!(self, Error::Font(_))
    }

    /// Check if this is an output error
    pub fn is_output_error(&self) -> bool {
        matches!(self, Error::Output(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
