//! Generate command report data structures.

use std::path::PathBuf;

use biolens_templates::{Event, PreviewFile};

use super::output::{Output, Report};

/// Header printed before any file is written.
#[derive(Debug)]
pub struct Banner {
    /// Name of the generated project.
    pub project: String,
    /// One-line description under the title.
    pub tagline: String,
}

impl Report for Banner {
    fn render(&self, out: &mut dyn Output) {
        out.title(&format!("{} Code Generator", self.project));
        out.preformatted(&self.tagline);
        out.newline();
    }
}

/// Renders generation events as they arrive.
pub struct Progress<'a> {
    out: &'a mut dyn Output,
}

impl<'a> Progress<'a> {
    pub fn new(out: &'a mut dyn Output) -> Self {
        Self { out }
    }

    pub fn event(&mut self, event: Event<'_>) {
        match event {
            Event::GroupStarted { name } => {
                self.out.section(&format!("Generating {} layer", name));
            }
            Event::FileWritten { relative, file } => {
                self.out
                    .added_item(&format!("Created: {} ({} bytes)", relative, file.bytes));
            }
        }
    }
}

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Base directory.
    pub output_dir: PathBuf,
    /// Number of files written.
    pub files: usize,
    /// Total bytes written.
    pub bytes: usize,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.newline();
        out.key_value(
            "Generated",
            &format!("{} files ({} bytes)", written.files, written.bytes),
        );
        out.key_value("Files created in", &written.output_dir.display().to_string());
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.raw(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}
