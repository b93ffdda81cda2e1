//! Report data structures for commands.
//!
//! This module separates data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod generate;
mod list;
mod output;
mod show;

pub use generate::{
    Banner, GenerateReport, GenerationResult, PreviewResult, Progress, WrittenResult,
};
pub use list::{LayerGroup, ListReport, Listing, TemplateInfo};
pub use output::{Report, TerminalOutput};
pub use show::ShowReport;
