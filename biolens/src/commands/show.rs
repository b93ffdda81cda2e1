use biolens_templates::Catalog;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ShowCommand {
    /// Template key, e.g. domain/enums (see `biolens list`)
    pub key: String,
}

impl ShowCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::show(&Catalog::new(), &self.key).unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
