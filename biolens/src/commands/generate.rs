use std::path::PathBuf;

use biolens_templates::{DEFAULT_BASE_DIR, Generator, Layer, Scaffold};
use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Banner, Progress, Report, TerminalOutput},
};

const TAGLINE: &str = "Agentic AI Healthcare Diagnostic Assistant";

#[derive(Args)]
pub struct GenerateCommand {
    /// Base directory to write the solution into
    #[arg(short, long, default_value = DEFAULT_BASE_DIR)]
    pub output: PathBuf,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Only generate these layers (repeatable)
    #[arg(short, long = "layer", value_name = "LAYER")]
    pub layers: Vec<Layer>,
}

impl Default for GenerateCommand {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_BASE_DIR),
            dry_run: false,
            layers: Vec::new(),
        }
    }
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let generator = Generator::new().layers(self.layers.iter().copied());
        let mut out = TerminalOutput::new();

        if !self.dry_run {
            Banner {
                project: generator.name().to_string(),
                tagline: TAGLINE.to_string(),
            }
            .render(&mut out);
        }

        let mut progress = Progress::new(&mut out);
        let report = ops::generate(
            &generator,
            ops::generate::GenerateOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
            },
            &mut |event| progress.event(event),
        )?;

        report.render(&mut out);
        Ok(())
    }
}
