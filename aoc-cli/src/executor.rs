//! Sequential executor for running solvers

use crate::config::{Config, InputSource};
use crate::error::CliError;
use crate::inputs::read_input;
use aoc_solver::{SolverError, SolverRegistry};
use chrono::TimeDelta;
use std::borrow::Cow;
use std::ops::RangeInclusive;
use tracing::{debug, info, warn};

/// Result of a single part
#[derive(Debug)]
pub struct PartResult {
    pub part: u8,
    pub answer: Result<String, SolverError>,
    pub solve_duration: TimeDelta,
}

/// Everything one solver produced for its selected parts
///
/// `outcome` is an error when the input could not be loaded or parsed; every
/// selected part then counts as failed.
#[derive(Debug)]
pub struct SolverReport {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
    pub parse_duration: Option<TimeDelta>,
    pub outcome: Result<Vec<PartResult>, CliError>,
}

impl SolverReport {
    /// Number of selected parts that did not produce an answer
    pub fn failures(&self) -> usize {
        match &self.outcome {
            Ok(results) => results.iter().filter(|r| r.answer.is_err()).count(),
            Err(_) => self.parts.clone().count(),
        }
    }
}

/// Work item representing a solver to execute
#[derive(Debug, Clone)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
    pub example: Option<&'static str>,
}

/// Runs selected solvers one after another on the main thread
pub struct Executor<'c> {
    registry: SolverRegistry,
    config: &'c Config,
}

impl<'c> Executor<'c> {
    pub fn new(registry: SolverRegistry, config: &'c Config) -> Self {
        Self { registry, config }
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = self.config;
        self.registry
            .iter_info()
            .filter(|info| cfg.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
                example: info.example,
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on config.part_filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.config.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    fn load_input(&self, work: &WorkItem) -> Result<Cow<'static, str>, CliError> {
        match &self.config.source {
            InputSource::Examples => work.example.map(Cow::Borrowed).ok_or_else(|| {
                CliError::Input(format!(
                    "no example input registered for {} day {}",
                    work.year, work.day
                ))
            }),
            InputSource::File(path) => read_input(path).map(Cow::Owned),
            InputSource::Dir(store) => store.get(work.year, work.day).map(Cow::Owned),
        }
    }

    /// Parse the input once, then solve each selected part in order
    pub fn run(&self, work: &WorkItem) -> SolverReport {
        let mut report = SolverReport {
            year: work.year,
            day: work.day,
            parts: work.parts.clone(),
            parse_duration: None,
            outcome: Ok(Vec::new()),
        };

        let input = match self.load_input(work) {
            Ok(input) => input,
            Err(e) => {
                warn!(year = work.year, day = work.day, "{}", e);
                report.outcome = Err(e);
                return report;
            }
        };
        debug!(year = work.year, day = work.day, bytes = input.len(), "input loaded");

        let mut solver = match self.registry.create_solver(work.year, work.day, &input) {
            Ok(solver) => solver,
            Err(e) => {
                report.outcome = Err(e.into());
                return report;
            }
        };
        report.parse_duration = Some(solver.parse_duration());

        let results = work
            .parts
            .clone()
            .map(|part| match solver.solve(part) {
                Ok(result) => {
                    info!(year = work.year, day = work.day, part, elapsed = %result.duration(), "solved");
                    PartResult {
                        part,
                        solve_duration: result.duration(),
                        answer: Ok(result.answer),
                    }
                }
                Err(e) => PartResult {
                    part,
                    answer: Err(e.into()),
                    solve_duration: TimeDelta::zero(),
                },
            })
            .collect();
        report.outcome = Ok(results);
        report
    }
}
