//! Core operations.
//!
//! This module contains the business logic for biolens commands,
//! separated from CLI argument parsing and output rendering.

pub mod generate;
pub mod list;
pub mod show;

pub use generate::generate;
pub use list::list;
pub use show::show;
