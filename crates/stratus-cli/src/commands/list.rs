//! Implementation of the `stratus list` command.

use stratus_adapters::InMemoryCatalog;
use stratus_core::{application::StackService, domain::StackInfo};

use crate::{
    cli::{ListArgs, ListFormat, OutputFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: &OutputManager) -> CliResult<()> {
    let service = StackService::new(Box::new(InMemoryCatalog::with_builtin()?));
    let stacks = service.list()?;

    // A global `--output-format json` implies JSON here too.
    let format = if output.format() == OutputFormat::Json {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Available Stacks:")?;
            for line in table_rows(&stacks) {
                output.print(&line)?;
            }
        }

        // Machine-readable formats bypass quiet mode so pipes always work.
        ListFormat::Json => output.json(&stacks)?,

        ListFormat::List => {
            for stack in &stacks {
                println!("{}", stack.name);
            }
        }

        ListFormat::Csv => {
            for line in csv_rows(&stacks) {
                println!("{line}");
            }
        }
    }

    Ok(())
}

fn table_rows(stacks: &[StackInfo]) -> Vec<String> {
    let width = stacks.iter().map(|s| s.name.len()).max().unwrap_or(0);
    stacks
        .iter()
        .map(|s| {
            format!(
                "  {:<width$}  {:>3} params  {:>3} resources  {}",
                s.name, s.parameters, s.resources, s.summary
            )
        })
        .collect()
}

const CSV_HEADER: &str = "name,parameters,resources,summary";

/// Header plus one row per stack; the summary is always quoted.
fn csv_rows(stacks: &[StackInfo]) -> Vec<String> {
    std::iter::once(CSV_HEADER.to_string())
        .chain(stacks.iter().map(|s| {
            format!(
                "{},{},{},\"{}\"",
                s.name,
                s.parameters,
                s.resources,
                s.summary.replace('"', "\"\"")
            )
        }))
        .collect()
}
