//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface that each scaffolding product must implement
//! to configure the scaffolding behavior for its templates.

use crate::templates::TemplateCatalog;
use std::path::PathBuf;

/// Configuration trait for scaffolding products
///
/// Each product implements this trait to define:
/// - Product identity (name, display name)
/// - The template catalog and where bundled templates live
/// - The environment variables it reads
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Directory (and project name) used when the user gives none
    fn default_target_dir(&self) -> &'static str;

    /// Templates offered by the prompts
    fn catalog(&self) -> TemplateCatalog;

    /// Environment variable name for overriding the template root
    fn template_dir_env(&self) -> &'static str;

    /// Directory holding the `template-<id>` trees when not overridden
    fn default_template_root(&self) -> PathBuf;

    /// Environment variable carrying the invoking package manager's user agent
    fn user_agent_env(&self) -> &'static str {
        "npm_config_user_agent"
    }
}
