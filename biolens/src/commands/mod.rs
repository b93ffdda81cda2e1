mod completions;
mod generate;
mod list;
mod show;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use list::ListCommand;
use show::ShowCommand;

/// Extension trait for exiting on catalog errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for biolens_templates::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "biolens")]
#[command(version)]
#[command(about = "Generate the BioLens diagnostic assistant .NET solution")]
#[command(long_about = "Generate the BioLens diagnostic assistant .NET solution.\n\n\
    Run without a subcommand to write every template into the default base directory.")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            None => GenerateCommand::default().run(),
            Some(Commands::Generate(cmd)) => cmd.run(),
            Some(Commands::List(cmd)) => cmd.run(),
            Some(Commands::Show(cmd)) => cmd.run(),
            Some(Commands::Completions(cmd)) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write the template tree to disk (the default)
    Generate(GenerateCommand),

    /// List the built-in templates
    List(ListCommand),

    /// Print one template as it would be written
    Show(ShowCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
