use biolens_templates::{Catalog, Layer};
use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Only list these layers (repeatable)
    #[arg(short, long = "layer", value_name = "LAYER")]
    pub layers: Vec<Layer>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::list(
            &Catalog::new(),
            ops::list::ListOptions {
                layers: &self.layers,
                json: self.json,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
