//! Show command report.

use super::output::{Output, Report};

/// A single template's content, exactly as it would be written.
#[derive(Debug)]
pub struct ShowReport {
    pub content: String,
}

impl Report for ShowReport {
    fn render(&self, out: &mut dyn Output) {
        out.raw(&self.content);
    }
}
