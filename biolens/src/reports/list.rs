//! List command report data structures.

use biolens_templates::Layer;
use serde::Serialize;

use super::output::{Output, Report};

/// Report data for the template listing.
#[derive(Debug)]
pub struct ListReport {
    /// Number of templates listed.
    pub total: usize,
    /// Rendered listing.
    pub listing: Listing,
}

/// How the listing is presented.
#[derive(Debug)]
pub enum Listing {
    /// Human readable, grouped by layer.
    Table(Vec<LayerGroup>),
    /// Pretty-printed JSON array.
    Json(String),
}

/// Templates of one layer.
#[derive(Debug)]
pub struct LayerGroup {
    pub layer: Layer,
    pub templates: Vec<TemplateInfo>,
}

/// One catalog entry as shown to the user.
#[derive(Debug, Serialize)]
pub struct TemplateInfo {
    pub key: String,
    pub layer: Layer,
    pub path: String,
    /// Size of the file as written.
    pub bytes: usize,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.listing {
            Listing::Json(json) => out.preformatted(json),
            Listing::Table(groups) => {
                let width = groups
                    .iter()
                    .flat_map(|g| &g.templates)
                    .map(|t| t.key.len())
                    .max()
                    .unwrap_or(0);

                for group in groups {
                    out.section(&format!(
                        "{} ({})",
                        group.layer.label(),
                        group.templates.len()
                    ));
                    for template in &group.templates {
                        out.list_item(&format!(
                            "{:<width$}  {}",
                            template.key,
                            template.path,
                            width = width
                        ));
                    }
                    out.newline();
                }

                out.preformatted(&format!("{} templates", self.total));
            }
        }
    }
}
