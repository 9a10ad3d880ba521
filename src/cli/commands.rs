//! Mode selection and dispatch

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::shell::{render_assignments, render_projects};
use crate::cli::args::Cli;
use crate::cli::output;
use crate::cli::CliResult;
use crate::config::Settings;
use crate::infrastructure::di::ServiceContainer;

/// Top-level run mode, chosen once from the settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Print `id<TAB>path` for every visible project
    List,
    /// Print merged group and project variables
    Variables,
}

impl RunMode {
    pub fn select(settings: &Settings) -> Self {
        if settings.list {
            RunMode::List
        } else {
            RunMode::Variables
        }
    }
}

/// Entry point used by `main`: build settings and services, run, print.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = cli.to_settings()?;
    let container = ServiceContainer::new(settings, Arc::new(output::TerminalTrace))?;
    run(&container)
}

/// Run the selected mode and print its lines to stdout.
pub fn run(container: &ServiceContainer) -> CliResult<()> {
    for line in render(container)? {
        output::info(&line);
    }
    Ok(())
}

/// Run the selected mode and return its output lines.
///
/// All requests complete before any line is produced, so a failure leaves
/// stdout untouched.
#[instrument(level = "debug", skip(container))]
pub fn render(container: &ServiceContainer) -> CliResult<Vec<String>> {
    let settings = &container.settings;
    let mode = RunMode::select(settings);
    info!("mode: {:?}, project: {}", mode, settings.project.raw());

    let lines = match mode {
        RunMode::List => {
            let projects = container.projects.list()?;
            render_projects(&projects)
        }
        RunMode::Variables => {
            let vars = container.variables.collect()?;
            debug!("render: {} merged variables, clear={}", vars.len(), settings.clear);
            render_assignments(&vars, settings.clear)
        }
    };
    Ok(lines)
}
