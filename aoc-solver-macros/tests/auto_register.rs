use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError,
    SolverRegistryBuilder,
};

const EXAMPLE: &str = "2\n3\n4";

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2019, day = 7, example = EXAMPLE, tags = ["macro-test", "numbers"])]
struct TaggedSolver;

impl AocParser for TaggedSolver {
    type SharedData<'a> = Vec<u64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("not a number: {line}")))
            })
            .collect()
    }
}

impl PartSolver<1> for TaggedSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<u64>().to_string())
    }
}

impl PartSolver<2> for TaggedSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<u64>().to_string())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2019, day = 8)]
struct UntaggedSolver;

impl AocParser for UntaggedSolver {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input)
    }
}

impl PartSolver<1> for UntaggedSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.lines().count().to_string())
    }
}

#[test]
fn test_plugins_are_registered_with_metadata() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .expect("no duplicate plugins")
        .build();

    let info = registry.get_info(2019, 7).expect("tagged solver registered");
    assert_eq!(info.parts, 2);
    assert_eq!(info.tags, &["macro-test", "numbers"]);
    assert_eq!(info.example, Some(EXAMPLE));

    let info = registry.get_info(2019, 8).expect("untagged solver registered");
    assert_eq!(info.parts, 1);
    assert!(info.tags.is_empty());
    assert_eq!(info.example, None);
}

#[test]
fn test_registered_plugin_solves_its_example() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let mut solver = registry.create_solver(2019, 7, EXAMPLE).unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "9");
    assert_eq!(solver.solve(2).unwrap().answer, "24");
}

#[test]
fn test_plugin_filter_by_tag() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"numbers"))
        .unwrap()
        .build();

    assert!(registry.contains(2019, 7));
    assert!(!registry.contains(2019, 8));
    assert_eq!(registry.len(), 1);
}
