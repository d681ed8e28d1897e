//! Charm-style CLI prompts using cliclack

use crate::config::ScaffoldSettings;
use crate::flow::{FlowInputs, OverwriteDecision, Prompter, SelectQuestion, TextQuestion};
use crate::product::ProductConfig;
use crate::runtime::ProcessRunner;
use crate::scaffold::{scaffold, ScaffoldOutcome};
use anyhow::Result;
use std::io;
use std::path::PathBuf;

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Directory holding `template-<id>` trees, overriding the product default
    pub template_dir: Option<PathBuf>,

    /// Template id to use
    pub template: Option<String>,

    /// Project directory to create, relative to the working directory
    pub directory: Option<String>,

    /// Answer for the overwrite prompt
    pub overwrite: Option<OverwriteDecision>,
}

impl From<&CreateArgs> for FlowInputs {
    fn from(args: &CreateArgs) -> Self {
        FlowInputs {
            target_dir: args.directory.clone(),
            template: args.template.clone(),
            overwrite: args.overwrite,
        }
    }
}

/// Asks questions on the terminal through cliclack
#[derive(Debug, Default)]
pub struct CliclackPrompter;

impl Prompter for CliclackPrompter {
    fn text(&mut self, question: &TextQuestion) -> io::Result<String> {
        let mut input = cliclack::input(&question.message)
            .placeholder(&question.initial)
            .default_input(&question.initial);
        if let Some(validate) = question.validate {
            input = input.validate(move |value: &String| validate(value));
        }
        input.interact()
    }

    fn select(&mut self, question: &SelectQuestion) -> io::Result<String> {
        let mut select = cliclack::select(&question.message);
        for choice in &question.choices {
            select = select.item(choice.value.clone(), &choice.label, "");
        }
        if let Some(initial) = question.choices.get(question.initial) {
            select = select.initial_value(initial.value.clone());
        }
        select.interact()
    }

    fn invalid(&mut self, message: &str) -> io::Result<()> {
        cliclack::log::warning(message)
    }

    fn step(&mut self, message: &str) -> io::Result<()> {
        cliclack::log::step(message)
    }
}

/// Run the CLI with interactive prompts; returns the process exit code
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<i32> {
    let settings = ScaffoldSettings::from_env(config, args.template_dir.clone())?;
    tracing::debug!(?settings, "resolved settings");

    cliclack::intro(config.display_name())?;

    let outcome = scaffold(
        config,
        &settings,
        FlowInputs::from(&args),
        &mut CliclackPrompter,
        &ProcessRunner,
    )
    .await;

    match outcome {
        Ok(ScaffoldOutcome::Created {
            root, next_steps, ..
        }) => {
            print_next_steps(&root, &next_steps)?;
            Ok(0)
        }
        Ok(outcome @ ScaffoldOutcome::Delegated { .. }) => Ok(outcome.exit_code()),
        Err(e) if e.is_cancelled() => {
            cliclack::outro_cancel(e.to_string())?;
            Ok(1)
        }
        Err(e) => Err(e.into()),
    }
}

fn print_next_steps(root: &std::path::Path, steps: &[String]) -> Result<()> {
    cliclack::log::success(format!("Created project in {}", root.display()))?;

    println!();
    println!("  Done. Now run:");
    println!();

    for step in steps {
        println!("  {}", step);
    }
    println!();

    cliclack::outro("Happy hacking!")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_args_become_flow_inputs() {
        let args = CreateArgs {
            template_dir: None,
            template: Some("vue".to_string()),
            directory: Some("app".to_string()),
            overwrite: Some(OverwriteDecision::IgnoreAndContinue),
        };
        let inputs = FlowInputs::from(&args);
        assert_eq!(inputs.target_dir.as_deref(), Some("app"));
        assert_eq!(inputs.template.as_deref(), Some("vue"));
        assert_eq!(inputs.overwrite, Some(OverwriteDecision::IgnoreAndContinue));
    }
}
