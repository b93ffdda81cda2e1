//! Template catalog and generator for the BioLens solution scaffold.
//!
//! The catalog is a fixed, ordered table of C# source files grouped by
//! architectural layer. [`Generator`] writes them under a base directory.

mod catalog;
mod error;
mod generator;
mod layer;
mod template;

pub use biolens_core::{Event, GenerateResult, PreviewFile, Scaffold, WrittenFile};
pub use catalog::{Catalog, catalog};
pub use error::{Error, Result};
pub use generator::{DEFAULT_BASE_DIR, Generator};
pub use layer::Layer;
pub use template::Template;
