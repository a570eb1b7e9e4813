use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::{Captures, Regex};
use std::sync::LazyLock;

const EXAMPLE: &str = "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";

static MUL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"mul\((\d+),(\d+)\)").expect("mul pattern compiles"));
static INSTRUCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"mul\((\d+),(\d+)\)|do\(\)|don't\(\)").expect("instruction pattern compiles")
});

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 3, example = EXAMPLE, tags = ["regex"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = &'a str;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input)
    }
}

fn product(caps: &Captures<'_>) -> Result<u64, SolveError> {
    let operand = |i: usize| {
        caps[i]
            .parse::<u64>()
            .with_context(|| format!("operand {:?} out of range", &caps[i]))
    };
    operand(1)
        .and_then(|a| {
            let b = operand(2)?;
            a.checked_mul(b).with_context(|| format!("{a} * {b} overflows"))
        })
        .map_err(SolveError::failed)
}

fn add(total: u64, product: u64) -> Result<u64, SolveError> {
    total
        .checked_add(product)
        .ok_or_else(|| SolveError::failed(anyhow!("sum of products overflows")))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total = MUL
            .captures_iter(*shared)
            .try_fold(0u64, |total, caps| add(total, product(&caps)?))?;
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut enabled = true;
        let mut total = 0u64;
        for caps in INSTRUCTION.captures_iter(*shared) {
            match &caps[0] {
                "do()" => enabled = true,
                "don't()" => enabled = false,
                _ if enabled => total = add(total, product(&caps)?)?,
                _ => {}
            }
        }
        Ok(total.to_string())
    }
}
