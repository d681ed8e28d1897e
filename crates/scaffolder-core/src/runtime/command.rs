//! Delegating command synthesis and execution
//!
//! Some catalog entries hand off to an external generator (`npm create vue@latest`).
//! The command is rewritten for the package manager that launched us, split into
//! program and arguments, and only then has `TARGET_DIR` substituted so that a
//! directory name containing spaces stays a single argument.

use crate::error::{Result, ScaffoldError};
use crate::runtime::package_manager::PackageManagerInfo;
use std::fmt;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;
use tracing::debug;

/// Placeholder replaced with the target directory
pub const TARGET_DIR_PLACEHOLDER: &str = "TARGET_DIR";

const LATEST_MARKER: &str = "@latest";

/// A concrete command line ready to spawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl fmt::Display for SynthesizedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Rewrite a delegating command template for the detected package manager
pub fn synthesize(
    template: &str,
    package_manager: &PackageManagerInfo,
    target_dir: &str,
) -> SynthesizedCommand {
    let mut command = template.to_string();

    if let Some(rest) = command.strip_prefix("npm create ") {
        command = if package_manager.is("bun") {
            format!("bun x create-{}", rest)
        } else {
            format!("{} create {}", package_manager.name, rest)
        };
    }

    if package_manager.is_yarn1() {
        command = command.replace(LATEST_MARKER, "");
    }

    if let Some(rest) = command.strip_prefix("npm exec") {
        let runner = if package_manager.is("pnpm") {
            "pnpm dlx"
        } else if package_manager.is("yarn") && !package_manager.is_yarn1() {
            "yarn dlx"
        } else if package_manager.is("bun") {
            "bun x"
        } else {
            "npm exec"
        };
        command = format!("{}{}", runner, rest);
    }

    let mut parts = command.split(' ').map(str::to_string);
    let program = parts.next().unwrap_or_default();
    let args = parts
        .map(|arg| arg.replace(TARGET_DIR_PLACEHOLDER, target_dir))
        .collect();

    SynthesizedCommand { program, args }
}

/// Capability for running a delegated generator to completion
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run the command with inherited stdio. Returns the exit code, or None
    /// when the platform reports none (e.g. killed by a signal).
    async fn run(&self, command: &SynthesizedCommand) -> Result<Option<i32>>;
}

/// Spawns real child processes
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    async fn run(&self, command: &SynthesizedCommand) -> Result<Option<i32>> {
        debug!(%command, "spawning delegated generator");

        let status = TokioCommand::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| ScaffoldError::Spawn {
                program: command.program.clone(),
                source,
            })?;

        debug!(code = ?status.code(), "delegated generator finished");
        Ok(status.code())
    }
}
