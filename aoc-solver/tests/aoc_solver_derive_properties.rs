//! Property-based tests for the `AocSolver` derive and the dynamic solver wrapper

use aoc_solver::{
    AocParser, AocSolver, DynSolver, ParseError, PartSolver, SolveError, Solver, SolverInstance,
};
use proptest::prelude::*;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct MinMaxSolver;

#[derive(Debug)]
struct Readings {
    values: Vec<i64>,
    sorted: bool,
}

impl AocParser for MinMaxSolver {
    type SharedData<'a> = Readings;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let values = input
            .split_whitespace()
            .map(|v| {
                v.parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("bad reading {v:?}")))
            })
            .collect::<Result<Vec<i64>, _>>()?;
        if values.is_empty() {
            return Err(ParseError::MissingData("no readings".into()));
        }
        Ok(Readings {
            values,
            sorted: false,
        })
    }
}

fn ensure_sorted(shared: &mut Readings) {
    if !shared.sorted {
        shared.values.sort_unstable();
        shared.sorted = true;
    }
}

impl PartSolver<1> for MinMaxSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        ensure_sorted(shared);
        Ok(shared.values[0].to_string())
    }
}

impl PartSolver<2> for MinMaxSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        ensure_sorted(shared);
        Ok(shared.values[shared.values.len() - 1].to_string())
    }
}

fn render(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// `Solver::solve_part(N)` matches `PartSolver<N>::solve`.
    #[test]
    fn solve_part_dispatches_to_part_solver(
        values in prop::collection::vec(-1000i64..1000, 1..20),
        part in 1u8..=2,
    ) {
        let input = render(&values);
        let mut via_dispatch = MinMaxSolver::parse(&input).unwrap();
        let mut direct = MinMaxSolver::parse(&input).unwrap();

        let dispatched = MinMaxSolver::solve_part(&mut via_dispatch, part).unwrap();
        let expected = match part {
            1 => <MinMaxSolver as PartSolver<1>>::solve(&mut direct).unwrap(),
            _ => <MinMaxSolver as PartSolver<2>>::solve(&mut direct).unwrap(),
        };
        prop_assert_eq!(dispatched, expected);
    }

    /// Parts outside the declared range are `PartNotImplemented` from the derive.
    #[test]
    fn invalid_part_returns_not_implemented(part in prop_oneof![Just(0u8), 3u8..=255]) {
        let mut shared = MinMaxSolver::parse("1 2 3").unwrap();
        match MinMaxSolver::solve_part(&mut shared, part) {
            Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, part),
            other => prop_assert!(false, "Expected PartNotImplemented, got {:?}", other),
        }
    }

    /// Mutation by one part is visible to the next, through the dynamic wrapper too.
    #[test]
    fn dyn_solver_keeps_shared_state(values in prop::collection::vec(-1000i64..1000, 1..20)) {
        let input = render(&values);
        let mut solver = SolverInstance::<MinMaxSolver>::new(2024, 3, &input).unwrap();

        let min = solver.solve(1).unwrap();
        let max = solver.solve(2).unwrap();

        prop_assert!(min.duration() >= chrono::TimeDelta::zero());
        prop_assert_eq!(&min.answer, &values.iter().min().unwrap().to_string());
        prop_assert_eq!(&max.answer, &values.iter().max().unwrap().to_string());
    }
}

#[test]
fn test_dyn_solver_metadata() {
    let solver = SolverInstance::<MinMaxSolver>::new(2024, 3, "4 5").unwrap();
    assert_eq!(solver.year(), 2024);
    assert_eq!(solver.day(), 3);
    assert_eq!(solver.parts(), 2);
    assert!(solver.parse_end() >= solver.parse_start());
}

#[test]
fn test_dyn_solver_rejects_out_of_range_part() {
    let mut solver = SolverInstance::<MinMaxSolver>::new(2024, 3, "4 5").unwrap();
    assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
}

#[test]
fn test_parse_error_surfaces_from_instance() {
    let err = SolverInstance::<MinMaxSolver>::new(2024, 3, "").err();
    assert_eq!(err, Some(ParseError::MissingData("no readings".into())));
}
