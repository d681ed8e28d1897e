//! Template catalog and materialization
//!
//! This module provides:
//! - The static catalog of template families and variants
//! - Copying a bundled template into the project directory
//! - package.json renaming and the SWC patches

pub mod catalog;
pub mod copier;
pub mod manifest;

pub use catalog::{split_swc, TemplateCatalog, TemplateFamily, TemplateVariant, VariantKind};
pub use copier::copy_template;
