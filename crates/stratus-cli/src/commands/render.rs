//! Implementation of `stratus render` (and the bare `stratus` invocation).
//!
//! Responsibility: pick the stack, style and sink from arguments and config,
//! call the render service, and report where the document went.

use std::io::IsTerminal as _;
use std::path::Path;

use tracing::{debug, instrument};

use stratus_adapters::{FileSink, InMemoryCatalog, StdoutSink};
use stratus_core::{application::RenderService, domain::JsonStyle};

use crate::{
    cli::RenderArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the render command.
///
/// Dispatch sequence:
/// 1. Resolve stack name and JSON style (flags over config)
/// 2. Choose the sink: stdout, or a file guarded by `--force`
/// 3. Confirm an overwrite on a terminal unless `--yes` or `--quiet`
/// 4. Render via `RenderService`
#[instrument(skip_all, fields(stack = tracing::field::Empty))]
pub fn execute(args: RenderArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let stack = args
        .stack
        .clone()
        .unwrap_or_else(|| config.defaults.stack.clone());
    tracing::Span::current().record("stack", stack.as_str());

    let style = json_style(&args, config);
    debug!(?style, "Render style resolved");

    let catalog = Box::new(InMemoryCatalog::with_builtin()?);

    let Some(path) = args.output.as_deref() else {
        // stdout carries the document; nothing else may be printed there.
        RenderService::new(catalog, Box::new(StdoutSink::new())).render_stack(&stack, style)?;
        return Ok(());
    };

    if path.exists() && args.force && !args.yes && !output.is_quiet() && !confirm_overwrite(path)? {
        return Err(CliError::Cancelled);
    }

    let sink = FileSink::new(path).overwrite(args.force);
    let summary = RenderService::new(catalog, Box::new(sink)).render_stack(&stack, style)?;

    output.success(&format!(
        "Rendered '{}' to {} ({} parameters, {} resources, {} bytes)",
        summary.stack, summary.destination, summary.parameters, summary.resources, summary.bytes,
    ))?;
    Ok(())
}

fn json_style(args: &RenderArgs, config: &AppConfig) -> JsonStyle {
    if args.compact || config.output.compact {
        JsonStyle::Compact
    } else {
        JsonStyle::Pretty {
            indent: config.output.indent,
        }
    }
}

/// Ask before replacing a file. Non-interactive sessions proceed, since
/// `--force` was already given.
fn confirm_overwrite(path: &Path) -> CliResult<bool> {
    if !std::io::stdin().is_terminal() {
        return Ok(true);
    }
    prompt(&format!("Overwrite {}?", path.display()))
}

#[cfg(feature = "interactive")]
fn prompt(question: &str) -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt(question)
        .default(false)
        .interact()
        .map_err(|e| CliError::InvalidInput {
            message: "failed to read confirmation input".into(),
            source: Some(Box::new(e)),
        })
}

#[cfg(not(feature = "interactive"))]
fn prompt(question: &str) -> CliResult<bool> {
    use std::io::{self, Write};

    use crate::error::IntoCli as _;

    print!("{question} [y/N] ");
    io::stdout()
        .flush()
        .with_cli_context(|| "failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .with_cli_context(|| "failed to read confirmation input")?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input == "y" || input == "yes")
}
