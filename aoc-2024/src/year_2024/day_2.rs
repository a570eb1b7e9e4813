use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

const EXAMPLE: &str = "\
7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 2, example = EXAMPLE, tags = ["lists"])]
pub struct Solver;

pub type Report = Vec<i32>;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Report>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                line.split_whitespace()
                    .map(|level| {
                        level
                            .parse::<i32>()
                            .map_err(|e| anyhow!("bad level {:?}: {}", level, e))
                    })
                    .collect::<anyhow::Result<Report>>()
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e)))
            })
            .collect()
    }
}

/// Levels all increase or all decrease, by 1 to 3 each step
///
/// A step too large to represent is unsafe.
fn is_safe(levels: impl Iterator<Item = i32>) -> bool {
    let mut diffs = levels.tuple_windows().map(|(a, b)| b.checked_sub(a)).peekable();
    let sign = match diffs.peek() {
        None => return true,
        Some(None) => return false,
        Some(Some(first)) => first.signum(),
    };
    diffs.all(|d| d.is_some_and(|d| (1..=3).contains(&d.unsigned_abs()) && d.signum() == sign))
}

fn is_safe_dampened(report: &[i32]) -> bool {
    is_safe(report.iter().copied())
        || (0..report.len()).any(|skip| {
            is_safe(
                report
                    .iter()
                    .enumerate()
                    .filter(move |&(i, _)| i != skip)
                    .map(|(_, &level)| level),
            )
        })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let safe = shared
            .iter()
            .filter(|report| is_safe(report.iter().copied()))
            .count();
        Ok(safe.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let safe = shared
            .iter()
            .filter(|report| is_safe_dampened(report))
            .count();
        Ok(safe.to_string())
    }
}
