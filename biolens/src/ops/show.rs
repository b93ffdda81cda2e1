//! Show operation - print one template as it would be written.

use biolens_templates::Catalog;

use crate::reports::ShowReport;

/// Execute the show operation.
pub fn show(catalog: &Catalog, key: &str) -> biolens_templates::Result<ShowReport> {
    let template = catalog.get(key)?;
    Ok(ShowReport {
        content: template.normalized(),
    })
}
