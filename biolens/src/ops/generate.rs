//! Generate operation - write the template tree to disk.

use std::path::Path;

use biolens_templates::{Event, Scaffold};
use eyre::{Context, Result};

use crate::reports::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Base directory for generated files.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Progress is forwarded to `on_event` while files are written; nothing is
/// reported for a dry run.
pub fn generate(
    generator: &dyn Scaffold,
    opts: GenerateOptions,
    on_event: &mut dyn FnMut(Event<'_>),
) -> Result<GenerateReport> {
    let result = if opts.dry_run {
        GenerationResult::Preview(PreviewResult {
            files: generator.preview(),
        })
    } else {
        let gen_result = generator
            .generate(opts.output_dir, on_event)
            .wrap_err_with(|| {
                format!("Failed to generate {} sources", generator.name())
            })?;

        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            files: gen_result.written.len(),
            bytes: gen_result.bytes,
        })
    };

    Ok(GenerateReport { result })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use biolens_templates::{Generator, Layer, catalog};
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_generate_reports_written_files() {
        let temp = TempDir::new().unwrap();
        let mut events = 0;

        let report = generate(
            &Generator::new(),
            GenerateOptions {
                output_dir: temp.path(),
                dry_run: false,
            },
            &mut |_| events += 1,
        )
        .unwrap();

        let GenerationResult::Written(written) = report.result else {
            panic!("expected written result");
        };
        assert_eq!(written.files, catalog().len());
        assert_eq!(written.output_dir, temp.path());
        assert_eq!(events, catalog().len() + Layer::ALL.len());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("out");

        let report = generate(
            &Generator::new().layers([Layer::Tests]),
            GenerateOptions {
                output_dir: &base,
                dry_run: true,
            },
            &mut |_| panic!("no events expected in dry run"),
        )
        .unwrap();

        let GenerationResult::Preview(preview) = report.result else {
            panic!("expected preview result");
        };
        assert_eq!(preview.files.len(), 2);
        assert!(!base.exists());
        assert!(fs::read_dir(temp.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_failure_carries_context() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("taken");
        fs::write(&base, "a file, not a directory").unwrap();

        let err = generate(
            &Generator::new(),
            GenerateOptions {
                output_dir: &base,
                dry_run: false,
            },
            &mut |_| {},
        )
        .unwrap_err();

        let message = format!("{:?}", err);
        assert!(message.contains("Failed to generate BioLens sources"));
        assert!(message.contains("domain/enums"));
    }
}
