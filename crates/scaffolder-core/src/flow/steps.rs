//! The question chain, in the order it is asked

use super::context::{FlowContext, OverwriteDecision};
use super::prompter::{Choice, Question, SelectQuestion, TextQuestion};
use super::Step;
use crate::error::{Result, ScaffoldError};
use crate::project::directory::{classify, format_target_dir, DirectoryState};
use crate::project::name::{is_valid_package_name, to_valid_package_name};

pub const STEPS: &[Step] = &[
    Step {
        name: "projectName",
        ask: ask_project_name,
        preset: no_preset,
        reduce: reduce_project_name,
    },
    Step {
        name: "overwrite",
        ask: ask_overwrite,
        preset: preset_overwrite,
        reduce: reduce_overwrite,
    },
    Step {
        name: "overwriteChecker",
        ask: check_overwrite,
        preset: no_preset,
        reduce: ignore_answer,
    },
    Step {
        name: "packageName",
        ask: ask_package_name,
        preset: no_preset,
        reduce: reduce_package_name,
    },
    Step {
        name: "framework",
        ask: ask_framework,
        preset: no_preset,
        reduce: reduce_framework,
    },
    Step {
        name: "variant",
        ask: ask_variant,
        preset: no_preset,
        reduce: reduce_variant,
    },
];

fn no_preset(_: &FlowContext<'_>) -> Option<String> {
    None
}

fn ignore_answer(_: &mut FlowContext<'_>, _: String) -> Result<()> {
    Ok(())
}

fn ask_project_name(ctx: &FlowContext<'_>) -> Result<Option<Question>> {
    if ctx.inputs.target_dir.is_some() {
        return Ok(None);
    }

    Ok(Some(Question::Text(TextQuestion {
        message: "Project name:".to_string(),
        initial: ctx.default_target_dir.to_string(),
        validate: None,
    })))
}

fn reduce_project_name(ctx: &mut FlowContext<'_>, answer: String) -> Result<()> {
    let formatted = format_target_dir(&answer);
    ctx.target_dir = if formatted.is_empty() {
        ctx.default_target_dir.to_string()
    } else {
        formatted
    };
    Ok(())
}

fn ask_overwrite(ctx: &FlowContext<'_>) -> Result<Option<Question>> {
    if classify(&ctx.root()) != DirectoryState::NonEmpty {
        return Ok(None);
    }

    let subject = if ctx.target_dir == "." {
        "Current directory".to_string()
    } else {
        format!("Target directory \"{}\"", ctx.target_dir)
    };

    Ok(Some(Question::Select(SelectQuestion {
        message: format!("{} is not empty. Please choose how to proceed:", subject),
        choices: OverwriteDecision::ALL
            .iter()
            .map(|d| Choice {
                value: d.as_value().to_string(),
                label: d.description().to_string(),
            })
            .collect(),
        initial: 0,
    })))
}

fn preset_overwrite(ctx: &FlowContext<'_>) -> Option<String> {
    ctx.inputs.overwrite.map(|d| d.as_value().to_string())
}

fn reduce_overwrite(ctx: &mut FlowContext<'_>, answer: String) -> Result<()> {
    let decision = answer
        .parse::<OverwriteDecision>()
        .map_err(|_| ScaffoldError::InvalidAnswer {
            step: "overwrite",
            value: answer,
        })?;
    ctx.overwrite = Some(decision);
    Ok(())
}

/// Zero-input gate: stops the chain when the user declined to overwrite
fn check_overwrite(ctx: &FlowContext<'_>) -> Result<Option<Question>> {
    if ctx.overwrite == Some(OverwriteDecision::Cancel) {
        return Err(ScaffoldError::UserCancelled);
    }
    Ok(None)
}

fn validate_package_name(name: &str) -> std::result::Result<(), &'static str> {
    if is_valid_package_name(name) {
        Ok(())
    } else {
        Err("Invalid package.json name")
    }
}

fn ask_package_name(ctx: &FlowContext<'_>) -> Result<Option<Question>> {
    let project_name = ctx.project_name();
    if is_valid_package_name(&project_name) {
        return Ok(None);
    }

    Ok(Some(Question::Text(TextQuestion {
        message: "Package name:".to_string(),
        initial: to_valid_package_name(&project_name),
        validate: Some(validate_package_name),
    })))
}

fn reduce_package_name(ctx: &mut FlowContext<'_>, answer: String) -> Result<()> {
    ctx.package_name = Some(answer);
    Ok(())
}

fn ask_framework(ctx: &FlowContext<'_>) -> Result<Option<Question>> {
    if ctx.valid_template_arg().is_some() {
        return Ok(None);
    }

    let message = match ctx.inputs.template.as_deref() {
        Some(invalid) => {
            tracing::warn!(template = invalid, "unknown template requested");
            format!(
                "\"{}\" isn't a valid template. Please choose from below: ",
                invalid
            )
        }
        None => "Select a framework:".to_string(),
    };

    Ok(Some(Question::Select(SelectQuestion {
        message,
        choices: ctx
            .catalog
            .families()
            .iter()
            .map(|f| Choice {
                value: f.id.to_string(),
                label: f.label(),
            })
            .collect(),
        initial: 0,
    })))
}

fn reduce_framework(ctx: &mut FlowContext<'_>, answer: String) -> Result<()> {
    let family = ctx
        .catalog
        .family(&answer)
        .ok_or(ScaffoldError::InvalidAnswer {
            step: "framework",
            value: answer,
        })?;
    ctx.framework = Some(family);
    Ok(())
}

fn ask_variant(ctx: &FlowContext<'_>) -> Result<Option<Question>> {
    let Some(family) = ctx.framework.filter(|f| f.has_variant_choice()) else {
        return Ok(None);
    };

    Ok(Some(Question::Select(SelectQuestion {
        message: "Select a variant:".to_string(),
        choices: family
            .variants
            .iter()
            .map(|v| Choice {
                value: v.id.to_string(),
                label: v.label(),
            })
            .collect(),
        initial: 0,
    })))
}

fn reduce_variant(ctx: &mut FlowContext<'_>, answer: String) -> Result<()> {
    let variant = ctx
        .framework
        .and_then(|f| f.variant(&answer))
        .ok_or(ScaffoldError::InvalidAnswer {
            step: "variant",
            value: answer,
        })?;
    ctx.variant = Some(variant);
    Ok(())
}
