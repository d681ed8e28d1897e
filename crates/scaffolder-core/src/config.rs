//! Per-run settings resolved from flags and the environment

use crate::product::ProductConfig;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Everything a run needs from its surroundings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldSettings {
    pub cwd: PathBuf,
    /// Raw package-manager user agent, if any
    pub user_agent: Option<String>,
    /// Directory containing the `template-<id>` trees
    pub template_root: PathBuf,
}

impl ScaffoldSettings {
    /// Resolve settings for `config`.
    /// Template root precedence: `template_dir` flag, environment, product default.
    pub fn from_env<C: ProductConfig>(config: &C, template_dir: Option<PathBuf>) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read the current directory")?;

        let template_root = template_dir
            .or_else(|| non_empty_env(config.template_dir_env()).map(PathBuf::from))
            .unwrap_or_else(|| config.default_template_root());
        let template_root = if template_root.is_absolute() {
            template_root
        } else {
            cwd.join(template_root)
        };

        Ok(Self {
            user_agent: non_empty_env(config.user_agent_env()),
            cwd,
            template_root,
        })
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
