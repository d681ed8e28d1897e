//! Dependent question chain
//!
//! Each [`Step`] looks at the answers gathered so far and either asks a
//! question or is skipped. Steps run strictly in order; a step can only see
//! answers from the steps before it. Any step may cancel, which aborts the
//! whole chain before anything touches the filesystem.

pub mod context;
pub mod prompter;
pub mod steps;

pub use context::{FlowContext, FlowInputs, OverwriteDecision, ResolvedSelection};
pub use prompter::{Choice, Prompter, Question, SelectQuestion, TextQuestion};

use crate::error::{Result, ScaffoldError};
use tracing::debug;

/// One question in the chain
pub struct Step {
    /// Answer key, used in diagnostics
    pub name: &'static str,
    /// The question to ask, `None` to skip, `Err` to abort the chain
    pub ask: fn(&FlowContext<'_>) -> Result<Option<Question>>,
    /// Answer supplied up front (e.g. by a flag); bypasses the prompt
    pub preset: fn(&FlowContext<'_>) -> Option<String>,
    /// Fold the answer into the context
    pub reduce: fn(&mut FlowContext<'_>, String) -> Result<()>,
}

/// Run `steps` in order against `ctx`
pub fn run_chain<P: Prompter>(
    steps: &[Step],
    ctx: &mut FlowContext<'_>,
    prompter: &mut P,
) -> Result<()> {
    for step in steps {
        let Some(question) = (step.ask)(ctx)? else {
            debug!(step = step.name, "skipped");
            continue;
        };

        let answer = match (step.preset)(ctx) {
            Some(preset) => {
                debug!(step = step.name, answer = %preset, "answered from arguments");
                preset
            }
            None => {
                debug!(step = step.name, message = question.message(), "asking");
                ask(prompter, &question)?
            }
        };

        debug!(step = step.name, answer = %answer, "answered");
        (step.reduce)(ctx, answer)?;
    }

    Ok(())
}

/// Run the full question chain and resolve the selection
pub fn resolve<P: Prompter>(
    mut ctx: FlowContext<'_>,
    prompter: &mut P,
) -> Result<ResolvedSelection> {
    run_chain(steps::STEPS, &mut ctx, prompter)?;
    ctx.into_selection()
}

fn ask<P: Prompter>(prompter: &mut P, question: &Question) -> Result<String> {
    match question {
        Question::Text(text) => loop {
            let answer = prompter.text(text).map_err(ScaffoldError::from_prompt)?;
            match text.validate.map(|validate| validate(&answer)) {
                Some(Err(message)) => prompter
                    .invalid(message)
                    .map_err(ScaffoldError::from_prompt)?,
                _ => return Ok(answer),
            }
        },
        Question::Select(select) => prompter.select(select).map_err(ScaffoldError::from_prompt),
    }
}
