//! # EngraveKit G-code
//!
//! Serializes pen-motion outlines into G-code programs: millimeter/absolute
//! preamble, rapid pen-up repositioning, feed-rate cutting moves, and a
//! fixed program-end marker. Also owns the program container and its file
//! output.

pub mod program;
pub mod serializer;

pub use program::{default_file_name, GcodeProgram};
pub use serializer::{serialize, GcodeParams, PREAMBLE, PROGRAM_END};
