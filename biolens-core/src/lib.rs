//! Core file emission for the BioLens scaffold generator.
//!
//! This crate provides the write primitive and the generator traits used
//! across the workspace.

mod codegen;
mod file;

pub use codegen::{Event, GenerateResult, PreviewFile, Scaffold};
// File operations
pub use file::{GeneratedFile, WrittenFile, normalize, write_file};
