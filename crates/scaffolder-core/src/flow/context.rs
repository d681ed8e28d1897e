//! Answers accumulated across the question chain

use crate::error::{Result, ScaffoldError};
use crate::project::directory::{format_target_dir, project_root};
use crate::templates::catalog::{split_swc, TemplateCatalog, TemplateFamily, TemplateVariant};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// What to do with a target directory that already has content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwriteDecision {
    RemoveAndContinue,
    Cancel,
    IgnoreAndContinue,
}

impl OverwriteDecision {
    /// Wire value shared by the prompt and the `--overwrite` flag
    pub fn as_value(&self) -> &'static str {
        match self {
            OverwriteDecision::RemoveAndContinue => "yes",
            OverwriteDecision::Cancel => "no",
            OverwriteDecision::IgnoreAndContinue => "ignore",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OverwriteDecision::RemoveAndContinue => "Remove existing files and continue",
            OverwriteDecision::Cancel => "Cancel operation",
            OverwriteDecision::IgnoreAndContinue => "Ignore files and continue",
        }
    }

    pub const ALL: [OverwriteDecision; 3] = [
        OverwriteDecision::RemoveAndContinue,
        OverwriteDecision::Cancel,
        OverwriteDecision::IgnoreAndContinue,
    ];
}

impl FromStr for OverwriteDecision {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_value() == s)
            .ok_or_else(|| format!("expected one of yes, no, ignore (got '{}')", s))
    }
}

impl fmt::Display for OverwriteDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value())
    }
}

/// Answers known before any question is asked (command-line arguments)
#[derive(Debug, Clone, Default)]
pub struct FlowInputs {
    pub target_dir: Option<String>,
    pub template: Option<String>,
    pub overwrite: Option<OverwriteDecision>,
}

/// Mutable record threaded through every step
#[derive(Debug)]
pub struct FlowContext<'a> {
    pub catalog: &'a TemplateCatalog,
    pub cwd: &'a Path,
    pub default_target_dir: &'a str,
    pub inputs: FlowInputs,

    pub target_dir: String,
    pub overwrite: Option<OverwriteDecision>,
    pub package_name: Option<String>,
    pub framework: Option<&'static TemplateFamily>,
    pub variant: Option<&'static TemplateVariant>,
}

impl<'a> FlowContext<'a> {
    pub fn new(
        catalog: &'a TemplateCatalog,
        cwd: &'a Path,
        default_target_dir: &'a str,
        mut inputs: FlowInputs,
    ) -> Self {
        inputs.target_dir = inputs
            .target_dir
            .as_deref()
            .map(format_target_dir)
            .filter(|dir| !dir.is_empty());
        inputs.template = inputs.template.filter(|t| !t.is_empty());

        let target_dir = inputs
            .target_dir
            .clone()
            .unwrap_or_else(|| default_target_dir.to_string());

        Self {
            catalog,
            cwd,
            default_target_dir,
            inputs,
            target_dir,
            overwrite: None,
            package_name: None,
            framework: None,
            variant: None,
        }
    }

    /// Where the project will be written
    pub fn root(&self) -> PathBuf {
        project_root(self.cwd, &self.target_dir)
    }

    /// The working directory name when targeting `.`, else the target itself
    pub fn project_name(&self) -> String {
        if self.target_dir == "." {
            self.cwd
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.default_target_dir.to_string())
        } else {
            self.target_dir.clone()
        }
    }

    /// `--template` value when it names a catalog entry
    pub fn valid_template_arg(&self) -> Option<&str> {
        self.inputs
            .template
            .as_deref()
            .filter(|t| self.catalog.contains(t))
    }

    /// Collapse the answers into the final selection
    pub fn into_selection(self) -> Result<ResolvedSelection> {
        let chosen = self
            .variant
            .map(|v| v.id.to_string())
            .or_else(|| self.framework.map(|f| f.id.to_string()))
            .or_else(|| self.inputs.template.clone())
            .ok_or_else(|| ScaffoldError::InvalidTemplate(String::new()))?;

        let (template_id, is_swc) = split_swc(&chosen);
        if !self.catalog.contains(&template_id) {
            return Err(ScaffoldError::InvalidTemplate(chosen));
        }

        let package_name = self
            .package_name
            .clone()
            .unwrap_or_else(|| self.project_name());

        Ok(ResolvedSelection {
            root: self.root(),
            target_dir: self.target_dir,
            package_name,
            template_id,
            is_swc,
            overwrite: self.overwrite,
        })
    }
}

/// Fully resolved answers for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSelection {
    /// Target directory as the user typed it (relative to the working directory)
    pub target_dir: String,
    pub root: PathBuf,
    pub package_name: String,
    /// Catalog id with the SWC marker removed
    pub template_id: String,
    pub is_swc: bool,
    pub overwrite: Option<OverwriteDecision>,
}
