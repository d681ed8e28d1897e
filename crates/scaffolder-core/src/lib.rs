//! Scaffolder Core - Shared library for Vite project scaffolding CLIs
//!
//! The library walks the user through a chain of dependent questions, then
//! either copies a bundled template into the target directory or hands off
//! to an external generator command adapted to the invoking package manager.
//!
//! # Architecture
//!
//! - **Core operations**: package-name rules, directory probing and
//!   preparation, the template catalog, template copying, command synthesis
//! - **Workflow**: the [`flow`] question chain and the [`scaffold`]
//!   orchestrator, driven through the [`flow::Prompter`] and
//!   [`runtime::CommandRunner`] capabilities
//! - **CLI/TUI interface**: cliclack-backed prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffolder_core::{scaffold, FlowInputs, ProcessRunner, ScaffoldSettings};
//!
//! let settings = ScaffoldSettings::from_env(&MyConfig, None)?;
//! let outcome = scaffold(&MyConfig, &settings, FlowInputs::default(), &mut my_prompter, &ProcessRunner).await?;
//! ```

pub mod config;
pub mod error;
pub mod flow;
pub mod product;
pub mod project;
pub mod runtime;
pub mod scaffold;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::ScaffoldSettings;
pub use error::{Result, ScaffoldError};
pub use flow::{FlowInputs, OverwriteDecision, Prompter};
pub use product::ProductConfig;
pub use runtime::{CommandRunner, PackageManagerInfo, ProcessRunner};
pub use scaffold::{scaffold, ScaffoldOutcome};
pub use templates::{TemplateCatalog, TemplateFamily, TemplateVariant};

#[cfg(feature = "tui")]
pub use tui::run;
