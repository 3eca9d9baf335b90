//! Implementation of `stratus check`.

use stratus_adapters::InMemoryCatalog;
use stratus_core::{application::StackService, domain::DomainValidator};

use crate::{cli::CheckArgs, config::AppConfig, error::CliResult, output::OutputManager};

/// Build the stack, render it in memory, and report problems.
///
/// Dangling references fail the command; unused parameters only warn.
pub fn execute(args: CheckArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let stack = args.stack.unwrap_or_else(|| config.defaults.stack.clone());

    let service = StackService::new(Box::new(InMemoryCatalog::with_builtin()?));
    let template = service.check(&stack)?;

    for unused in DomainValidator::unused_parameters(&template) {
        output.warning(&format!("Parameter '{unused}' is never referenced"))?;
    }

    output.success(&format!(
        "Stack '{}' is valid ({} parameters, {} resources)",
        stack,
        template.parameters().len(),
        template.resources().len(),
    ))?;
    Ok(())
}
