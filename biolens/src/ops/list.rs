//! List operation - describe the template catalog.

use biolens_templates::{Catalog, Layer};
use eyre::{Context, Result};

use crate::reports::{LayerGroup, ListReport, Listing, TemplateInfo};

/// Options for the list operation.
pub struct ListOptions<'a> {
    /// Only list these layers (all when empty).
    pub layers: &'a [Layer],
    /// Emit JSON instead of a table.
    pub json: bool,
}

/// Execute the list operation.
pub fn list(catalog: &Catalog, opts: ListOptions) -> Result<ListReport> {
    let groups: Vec<LayerGroup> = catalog
        .layers()
        .into_iter()
        .filter(|layer| opts.layers.is_empty() || opts.layers.contains(layer))
        .map(|layer| LayerGroup {
            layer,
            templates: catalog
                .by_layer(layer)
                .map(|t| TemplateInfo {
                    key: t.key.to_string(),
                    layer: t.layer,
                    path: t.path.to_string(),
                    bytes: t.normalized().len(),
                })
                .collect(),
        })
        .collect();

    let total = groups.iter().map(|g| g.templates.len()).sum();

    let listing = if opts.json {
        let templates: Vec<&TemplateInfo> = groups.iter().flat_map(|g| &g.templates).collect();
        let json = serde_json::to_string_pretty(&templates)
            .wrap_err("Failed to serialize template listing")?;
        Listing::Json(json)
    } else {
        Listing::Table(groups)
    };

    Ok(ListReport { total, listing })
}
