use serde::Serialize;
use skyfit_core::{Catalog, StepId, StepOption};

use crate::commands::CommandResult;
use crate::script::{drive, ScriptArgs};

#[derive(Debug, Serialize)]
struct OptionsReport {
    command: &'static str,
    status: &'static str,
    step: StepId,
    dead_end: bool,
    options: Vec<StepOption>,
}

pub fn run(script: &ScriptArgs) -> CommandResult {
    let catalog = match Catalog::builtin() {
        Ok(catalog) => catalog,
        Err(error) => {
            return CommandResult::failure("options", "catalog_validation", error.to_string(), 2)
        }
    };

    let session = match drive(&catalog, script) {
        Ok(session) => session,
        Err(error) => {
            return CommandResult::failure("options", "invalid_choice", format!("{error:#}"), 2)
        }
    };

    let dead_end = session.is_dead_end(&catalog);
    CommandResult::success(OptionsReport {
        command: "options",
        status: if dead_end { "dead_end" } else { "ok" },
        step: session.step(),
        dead_end,
        options: session.options(&catalog),
    })
}
