//! AOC CLI - Command-line interface for running Advent of Code solvers

mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod logging;
mod output;

// Import aoc-2024 to link the solver plugins
use aoc_2024 as _;

use aoc_solver::SolverRegistryBuilder;
use clap::Parser;
use cli::Args;
use config::{Config, InputSource};
use error::CliError;
use executor::Executor;
use itertools::Itertools;
use output::OutputFormatter;
use tracing::debug;

fn main() {
    logging::init();
    let args = Args::parse();

    match run(args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Returns whether every selected part produced an answer
fn run(args: Args) -> Result<bool, CliError> {
    let config = Config::from_args(args);
    let registry = build_registry(&config.tags)?;
    let executor = Executor::new(registry, &config);

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        eprintln!("No solvers found matching the specified filters.");
        return Ok(true);
    }
    debug!(
        solvers = %work_items.iter().map(|w| format!("{}/{:02}", w.year, w.day)).join(", "),
        "selected solvers"
    );

    if let InputSource::File(path) = &config.source
        && work_items.len() != 1
    {
        return Err(CliError::Config(format!(
            "input file {} needs exactly one selected solver, but {} match; narrow the selection with --year/--day",
            path.display(),
            work_items.len()
        )));
    }

    let formatter = OutputFormatter::new(
        config.source.part_label(),
        config.quiet,
        config.timings,
        work_items.len() > 1,
    );
    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();

    let mut reports = Vec::with_capacity(work_items.len());
    for work in &work_items {
        let report = executor.run(work);
        formatter.write_report(&mut stdout, &mut stderr, &report)?;
        reports.push(report);
    }
    formatter.write_summary(&mut stdout, &reports)?;

    Ok(reports.iter().all(|r| r.failures() == 0))
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
