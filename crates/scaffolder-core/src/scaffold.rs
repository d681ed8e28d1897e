//! End-to-end scaffolding: questions, directory preparation, then either a
//! delegated generator or a template copy.

use crate::config::ScaffoldSettings;
use crate::error::{Result, ScaffoldError};
use crate::flow::{self, FlowContext, FlowInputs, OverwriteDecision, Prompter, ResolvedSelection};
use crate::product::ProductConfig;
use crate::project::directory;
use crate::runtime::{synthesize, CommandRunner, PackageManagerInfo, SynthesizedCommand};
use crate::templates::copier;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// How a run ended, when it did not fail or get cancelled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    /// An external generator ran; its exit status is the run's status
    Delegated {
        command: SynthesizedCommand,
        status: i32,
    },
    /// Files were written into `root`
    Created {
        root: PathBuf,
        files: Vec<PathBuf>,
        /// Commands for the user to run next, in order
        next_steps: Vec<String>,
    },
}

impl ScaffoldOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldOutcome::Delegated { status, .. } => *status,
            ScaffoldOutcome::Created { .. } => 0,
        }
    }
}

/// Ask the questions, prepare the directory, and produce the project
pub async fn scaffold<C, P, R>(
    config: &C,
    settings: &ScaffoldSettings,
    inputs: FlowInputs,
    prompter: &mut P,
    runner: &R,
) -> Result<ScaffoldOutcome>
where
    C: ProductConfig,
    P: Prompter,
    R: CommandRunner,
{
    let catalog = config.catalog();
    let ctx = FlowContext::new(&catalog, &settings.cwd, config.default_target_dir(), inputs);
    let selection = flow::resolve(ctx, prompter)?;
    debug!(?selection, "answers resolved");

    let remove_existing = selection.overwrite == Some(OverwriteDecision::RemoveAndContinue);
    directory::prepare(&selection.root, remove_existing).await?;

    let package_manager = PackageManagerInfo::detect(settings.user_agent.as_deref());
    debug!(%package_manager, "package manager");

    let delegating = catalog
        .find_variant(&selection.template_id)
        .and_then(|v| v.delegating_command());
    if let Some(template) = delegating {
        let command = synthesize(template, &package_manager, &selection.target_dir);
        info!(%command, "delegating to external generator");
        let status = runner.run(&command).await?.unwrap_or(0);
        return Ok(ScaffoldOutcome::Delegated { command, status });
    }

    prompter
        .step(&format!(
            "Scaffolding project in {}...",
            selection.root.display()
        ))
        .map_err(ScaffoldError::from_prompt)?;

    let files = copier::copy_template(
        &settings.template_root,
        &selection.template_id,
        selection.is_swc,
        &selection.root,
        &selection.package_name,
    )
    .await?;

    Ok(ScaffoldOutcome::Created {
        next_steps: next_steps(&selection, &settings.cwd, &package_manager),
        root: selection.root,
        files,
    })
}

/// `cd` into the project (unless already there), then install and run
pub fn next_steps(
    selection: &ResolvedSelection,
    cwd: &Path,
    package_manager: &PackageManagerInfo,
) -> Vec<String> {
    let mut steps = Vec::new();

    if selection.root != cwd {
        let relative = selection
            .root
            .strip_prefix(cwd)
            .unwrap_or(selection.root.as_path());
        let relative = relative.display().to_string();
        if relative.contains(' ') {
            steps.push(format!("cd \"{}\"", relative));
        } else {
            steps.push(format!("cd {}", relative));
        }
    }

    steps.extend(package_manager.next_step_commands());
    steps
}
