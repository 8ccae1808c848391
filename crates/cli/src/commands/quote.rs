use serde::Serialize;
use skyfit_core::{Catalog, QuoteSummary, StepId};

use crate::commands::CommandResult;
use crate::script::{drive, ScriptArgs};

#[derive(Debug, Serialize)]
struct QuoteReport {
    command: &'static str,
    status: &'static str,
    summary: QuoteSummary,
}

pub fn run(script: &ScriptArgs, currency: &str) -> CommandResult {
    let catalog = match Catalog::builtin() {
        Ok(catalog) => catalog,
        Err(error) => {
            return CommandResult::failure("quote", "catalog_validation", error.to_string(), 2)
        }
    };

    let session = match drive(&catalog, script) {
        Ok(session) => session,
        Err(error) => {
            return CommandResult::failure("quote", "invalid_choice", format!("{error:#}"), 2)
        }
    };

    if session.is_dead_end(&catalog) {
        return CommandResult::failure(
            "quote",
            "dead_end",
            format!("no options remain at step {:?}; step back and loosen a constraint", session.step()),
            3,
        );
    }
    if session.step() != StepId::Summary {
        return CommandResult::failure(
            "quote",
            "incomplete_script",
            format!("selection stopped at step {:?}; pass the missing flags", session.step()),
            3,
        );
    }

    match session.summary(&catalog, currency) {
        Ok(summary) => {
            CommandResult::success(QuoteReport { command: "quote", status: "ok", summary })
        }
        Err(error) => CommandResult::failure("quote", "incomplete_state", error.to_string(), 3),
    }
}
