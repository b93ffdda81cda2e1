//! Generator that emits the template catalog under a base directory.

use std::path::Path;

use biolens_core::{Event, GenerateResult, GeneratedFile, PreviewFile, Scaffold};
use eyre::{Context, Result};

use crate::{Catalog, Layer, Template};

/// Base directory used when none is given.
pub const DEFAULT_BASE_DIR: &str = "/home/claude/BioLens";

/// Writes every selected template, layer by layer, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    catalog: Catalog,
    only: Vec<Layer>,
}

impl Generator {
    /// Create a generator over the built-in catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict generation to the given layers. An empty selection means all.
    pub fn layers(mut self, layers: impl IntoIterator<Item = Layer>) -> Self {
        self.only = layers.into_iter().collect();
        self
    }

    /// The catalog this generator draws from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Layers that will be generated, in order.
    pub fn selected_layers(&self) -> Vec<Layer> {
        self.catalog
            .layers()
            .into_iter()
            .filter(|layer| self.only.is_empty() || self.only.contains(layer))
            .collect()
    }

    /// Templates that will be generated, in order.
    pub fn selected(&self) -> Vec<&'static Template> {
        self.selected_layers()
            .into_iter()
            .flat_map(|layer| self.catalog.by_layer(layer))
            .collect()
    }
}

impl Scaffold for Generator {
    fn name(&self) -> &'static str {
        "BioLens"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.selected()
            .into_iter()
            .map(|t| PreviewFile {
                path: t.path.to_string(),
                content: t.normalized(),
            })
            .collect()
    }

    fn generate(
        &self,
        output_dir: &Path,
        on_event: &mut dyn FnMut(Event<'_>),
    ) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();

        for layer in self.selected_layers() {
            on_event(Event::GroupStarted {
                name: layer.label(),
            });

            for template in self.catalog.by_layer(layer) {
                let file = template
                    .write(output_dir)
                    .wrap_err_with(|| format!("Failed to generate template '{}'", template.key))?;

                on_event(Event::FileWritten {
                    relative: template.path,
                    file: &file,
                });
                result.written.push(template.path.to_string());
                result.bytes += file.bytes;
            }
        }

        Ok(result)
    }
}
