//! Generator traits shared by the scaffold crates.

use std::path::Path;

use eyre::Result;

use crate::WrittenFile;

/// Trait for scaffold generators.
///
/// A generator owns a fixed set of files and knows how to preview them or
/// emit them under an output directory.
pub trait Scaffold {
    /// Human readable name of the generated project
    fn name(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files into the specified output directory.
    ///
    /// Progress is reported through `on_event` as files are written, so a
    /// caller sees every file emitted before a failure.
    fn generate(
        &self,
        output_dir: &Path,
        on_event: &mut dyn FnMut(Event<'_>),
    ) -> Result<GenerateResult>;
}

/// Progress notification emitted during generation
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    /// A group of related files is about to be written
    GroupStarted { name: &'a str },
    /// A file was written
    FileWritten {
        /// Path relative to the output directory
        relative: &'a str,
        file: &'a WrittenFile,
    },
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Relative paths of the files written, in emission order
    pub written: Vec<String>,
    /// Total bytes written
    pub bytes: usize,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content, exactly as it would be written
    pub content: String,
}
