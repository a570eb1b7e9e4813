use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

const EXAMPLE: &str = "\
190: 10 19
3267: 81 40 27
83: 17 5
156: 15 6
7290: 6 8 6 15
161011: 16 10 13
192: 17 8 14
21037: 9 7 18 13
292: 11 6 16 20
";

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 7, example = EXAMPLE, tags = ["search"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    target: u64,
    operands: Vec<u64>,
}

#[derive(Debug, Clone, Copy)]
enum Operator {
    Add,
    Mul,
    Concat,
}

impl Operator {
    /// `None` when the result does not fit in a u64
    fn apply(self, lhs: u64, rhs: u64) -> Option<u64> {
        match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Mul => lhs.checked_mul(rhs),
            Operator::Concat => {
                let mut shift = 10u64;
                while shift <= rhs {
                    shift = shift.checked_mul(10)?;
                }
                lhs.checked_mul(shift)?.checked_add(rhs)
            }
        }
    }
}

impl Equation {
    /// Operators are applied strictly left to right
    fn is_solvable(&self, operators: &[Operator]) -> bool {
        let Some((&first, rest)) = self.operands.split_first() else {
            return false;
        };
        // With a zero operand the accumulator can shrink again
        let monotonic = !rest.contains(&0);
        self.search(first, rest, operators, monotonic)
    }

    fn search(&self, acc: u64, rest: &[u64], operators: &[Operator], monotonic: bool) -> bool {
        let Some((&next, rest)) = rest.split_first() else {
            return acc == self.target;
        };
        if monotonic && acc > self.target {
            return false;
        }
        operators.iter().any(|op| {
            op.apply(acc, next)
                .is_some_and(|acc| self.search(acc, rest, operators, monotonic))
        })
    }
}

fn parse_equation(line: &str) -> anyhow::Result<Equation> {
    let (target, operands) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("expected `target: operands`"))?;
    let target = target
        .trim()
        .parse()
        .with_context(|| format!("bad target {target:?}"))?;
    let operands = operands
        .split_whitespace()
        .map(|n| n.parse().with_context(|| format!("bad operand {n:?}")))
        .collect::<anyhow::Result<Vec<u64>>>()?;
    if operands.is_empty() {
        return Err(anyhow!("equation has no operands"));
    }
    Ok(Equation { target, operands })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Equation>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                parse_equation(line)
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {:#}", line_idx + 1, e)))
            })
            .collect()
    }
}

fn calibration(equations: &[Equation], operators: &[Operator]) -> Result<String, SolveError> {
    equations
        .iter()
        .filter(|eq| eq.is_solvable(operators))
        .try_fold(0u64, |total, eq| {
            total
                .checked_add(eq.target)
                .ok_or_else(|| SolveError::failed(anyhow!("calibration total overflows")))
        })
        .map(|total| total.to_string())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        calibration(shared, &[Operator::Add, Operator::Mul])
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        calibration(shared, &[Operator::Add, Operator::Mul, Operator::Concat])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use proptest::prelude::*;

    fn solve<const N: u8>(input: &str) -> String
    where
        Solver: PartSolver<N>,
    {
        let mut shared = Solver::parse(input).unwrap();
        <Solver as PartSolver<N>>::solve(&mut shared).unwrap()
    }

    #[test]
    fn test_example() {
        assert_eq!(solve::<1>(EXAMPLE), "3749");
        assert_eq!(solve::<2>(EXAMPLE), "11387");
    }

    #[test]
    fn test_concat() {
        assert_eq!(Operator::Concat.apply(12, 345), Some(12345));
        assert_eq!(Operator::Concat.apply(7, 0), Some(70));
        assert_eq!(Operator::Concat.apply(u64::MAX, 1), None);
    }

    #[test]
    fn test_single_operand() {
        assert_eq!(solve::<1>("5: 5\n6: 5"), "5");
    }

    #[test]
    fn test_zero_operand_after_overshoot() {
        // 9 overshoots 4 but 9 * 0 + 4 lands on it
        assert_eq!(solve::<1>("4: 9 0 4"), "4");
    }

    #[test]
    fn test_overflow_prunes_branch() {
        let input = format!("{}: {} 2", u64::MAX, u64::MAX);
        assert_eq!(solve::<1>(&input), "0");
    }

    #[test]
    fn test_parse_errors() {
        let err = Solver::parse("190: 10 19\n3267 81 40").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.starts_with("(line 2)")));
        assert!(matches!(Solver::parse("12:"), Err(ParseError::InvalidFormat(_))));
    }

    proptest! {
        #[test]
        fn concatenation_never_loses_equations(
            equations in prop::collection::vec((1u64..5000, prop::collection::vec(1u64..20, 1..5)), 1..15)
        ) {
            let input = equations
                .iter()
                .map(|(target, operands)| format!("{}: {}", target, operands.iter().join(" ")))
                .join("\n");
            let part1: u64 = solve::<1>(&input).parse().unwrap();
            let part2: u64 = solve::<2>(&input).parse().unwrap();
            prop_assert!(part2 >= part1);
        }
    }
}
