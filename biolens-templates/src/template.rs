use std::path::{Path, PathBuf};

use biolens_core::{GeneratedFile, normalize};
use serde::Serialize;

use crate::Layer;

/// A fixed template: one output file of the BioLens solution.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Template {
    /// Logical name, e.g. `domain/enums`
    pub key: &'static str,
    /// Layer used to group progress output
    pub layer: Layer,
    /// Destination relative to the base directory, `/`-separated
    pub path: &'static str,
    /// Literal content, embedded at compile time
    #[serde(skip)]
    pub content: &'static str,
}

impl Template {
    /// Content exactly as it is written to disk.
    pub fn normalized(&self) -> String {
        normalize(self.content)
    }
}

impl GeneratedFile for Template {
    fn path(&self, base: &Path) -> PathBuf {
        self.path.split('/').fold(base.to_path_buf(), |acc, part| acc.join(part))
    }

    fn render(&self) -> String {
        self.content.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: Template = Template {
        key: "domain/sample",
        layer: Layer::Domain,
        path: "src/BioLens.Domain/Sample.cs",
        content: "\nnamespace BioLens.Domain;\n\npublic class Sample { }\n\n",
    };

    #[test]
    fn test_path_joins_segments() {
        let path = SAMPLE.path(Path::new("/tmp/out"));
        assert_eq!(
            path,
            Path::new("/tmp/out")
                .join("src")
                .join("BioLens.Domain")
                .join("Sample.cs")
        );
    }

    #[test]
    fn test_normalized() {
        assert_eq!(
            SAMPLE.normalized(),
            "namespace BioLens.Domain;\n\npublic class Sample { }\n"
        );
    }

    #[test]
    fn test_serialize_skips_content() {
        let json = serde_json::to_value(SAMPLE).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "key": "domain/sample",
                "layer": "domain",
                "path": "src/BioLens.Domain/Sample.cs",
            })
        );
    }
}
