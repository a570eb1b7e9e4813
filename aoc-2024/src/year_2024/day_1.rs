use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

const EXAMPLE: &str = "\
3   4
4   3
2   5
1   3
3   9
3   3";

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 1, example = EXAMPLE, tags = ["lists"])]
pub struct Solver;

/// Both columns of location IDs, each sorted ascending
#[derive(Debug)]
pub struct LocationLists {
    left: Vec<u32>,
    right: Vec<u32>,
}

fn parse_line(line: &str) -> anyhow::Result<(u32, u32)> {
    let (left, right) = line
        .split_whitespace()
        .collect_tuple()
        .ok_or_else(|| anyhow!("expected exactly two location IDs"))?;
    let left = left.parse().with_context(|| format!("bad location ID {left:?}"))?;
    let right = right.parse().with_context(|| format!("bad location ID {right:?}"))?;
    Ok((left, right))
}

impl AocParser for Solver {
    type SharedData<'a> = LocationLists;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let (mut left, mut right): (Vec<u32>, Vec<u32>) = input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                parse_line(line).map_err(|e| {
                    ParseError::InvalidFormat(format!("(line {}) {:#}", line_idx + 1, e))
                })
            })
            .process_results(|pairs| pairs.unzip())?;

        if left.is_empty() {
            return Err(ParseError::MissingData("no location IDs".into()));
        }

        left.sort_unstable();
        right.sort_unstable();
        Ok(LocationLists { left, right })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let distance: u64 = shared
            .left
            .iter()
            .zip(&shared.right)
            .map(|(&l, &r)| u64::from(l.abs_diff(r)))
            .sum();
        Ok(distance.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let counts = shared.right.iter().counts();
        let similarity: u64 = shared
            .left
            .iter()
            .map(|l| u64::from(*l) * counts.get(l).copied().unwrap_or(0) as u64)
            .sum();
        Ok(similarity.to_string())
    }
}
