use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::{HashMap, HashSet};

const EXAMPLE: &str = "\
47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61
47|29
75|13
53|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47
";

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 5, example = EXAMPLE, tags = ["ordering"])]
pub struct Solver;

#[derive(Debug, Default)]
pub struct PrintQueue {
    /// Page -> pages that have to be printed before it
    must_precede: HashMap<u32, HashSet<u32>>,
    updates: Vec<Vec<u32>>,
}

impl PrintQueue {
    fn precedes(&self, before: u32, after: u32) -> bool {
        self.must_precede
            .get(&after)
            .is_some_and(|befores| befores.contains(&before))
    }

    /// Once a page is printed, none of the pages required before it may follow
    fn is_ordered(&self, update: &[u32]) -> bool {
        let mut forbidden = HashSet::<u32>::new();
        for page in update {
            if forbidden.contains(page) {
                return false;
            }
            if let Some(befores) = self.must_precede.get(page) {
                forbidden.extend(befores);
            }
        }
        true
    }

    /// Topological order of `update` under the rules, stable for unrelated pages
    fn reorder(&self, update: &[u32]) -> anyhow::Result<Vec<u32>> {
        let mut remaining = update.to_vec();
        let mut ordered = Vec::with_capacity(update.len());
        while !remaining.is_empty() {
            let next = remaining
                .iter()
                .position(|&page| !remaining.iter().any(|&other| self.precedes(other, page)))
                .ok_or_else(|| anyhow!("ordering rules for {:?} contain a cycle", update))?;
            ordered.push(remaining.remove(next));
        }
        Ok(ordered)
    }
}

fn middle(update: &[u32]) -> u64 {
    u64::from(update[update.len() / 2])
}

fn parse_rule(line: &str) -> anyhow::Result<(u32, u32)> {
    let (before, after) = line
        .split_once('|')
        .ok_or_else(|| anyhow!("expected rule `X|Y`, found {line:?}"))?;
    Ok((
        before.trim().parse().context("bad page in rule")?,
        after.trim().parse().context("bad page in rule")?,
    ))
}

fn parse_update(line: &str) -> anyhow::Result<Vec<u32>> {
    let pages = line
        .split(',')
        .map(|page| page.trim().parse().with_context(|| format!("bad page {page:?}")))
        .collect::<anyhow::Result<Vec<u32>>>()?;
    if pages.is_empty() {
        return Err(anyhow!("update has no pages"));
    }
    Ok(pages)
}

impl AocParser for Solver {
    type SharedData<'a> = PrintQueue;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let invalid = |line_idx: usize, e: anyhow::Error| {
            ParseError::InvalidFormat(format!("(line {}) {:#}", line_idx + 1, e))
        };

        let mut queue = PrintQueue::default();
        let mut lines = input.lines().enumerate();

        let mut separated = false;
        for (line_idx, line) in lines.by_ref() {
            if line.trim().is_empty() {
                separated = true;
                break;
            }
            let (before, after) = parse_rule(line).map_err(|e| invalid(line_idx, e))?;
            queue.must_precede.entry(after).or_default().insert(before);
        }
        if !separated {
            return Err(ParseError::MissingData(
                "expected a blank line between rules and updates".into(),
            ));
        }

        for (line_idx, line) in lines {
            if line.trim().is_empty() {
                continue;
            }
            queue
                .updates
                .push(parse_update(line).map_err(|e| invalid(line_idx, e))?);
        }
        Ok(queue)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared
            .updates
            .iter()
            .filter(|update| shared.is_ordered(update))
            .map(|update| middle(update))
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut total = 0u64;
        for update in shared.updates.iter().filter(|u| !shared.is_ordered(u)) {
            let fixed = shared.reorder(update).map_err(SolveError::failed)?;
            total += middle(&fixed);
        }
        Ok(total.to_string())
    }
}
