use crate::utils::grid::{Grid, Point};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

const EXAMPLE: &str = "\
MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX";

const DIRECTIONS: [Point; 8] = [
    Point::new(1, 0),
    Point::new(1, 1),
    Point::new(0, 1),
    Point::new(-1, 1),
    Point::new(-1, 0),
    Point::new(-1, -1),
    Point::new(0, -1),
    Point::new(1, -1),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 4, example = EXAMPLE, tags = ["grid"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse(input)
    }
}

fn spells(grid: &Grid, start: Point, step: Point, word: &[u8]) -> bool {
    word.iter()
        .enumerate()
        .all(|(i, &b)| grid.get(start + step * i as i64) == Some(b))
}

/// Both diagonals through `center` read MAS in either direction
fn is_x_mas(grid: &Grid, center: Point) -> bool {
    let diagonal = |from: Point, to: Point| {
        matches!(
            (grid.get(center + from), grid.get(center + to)),
            (Some(b'M'), Some(b'S')) | (Some(b'S'), Some(b'M'))
        )
    };
    diagonal(Point::new(-1, -1), Point::new(1, 1)) && diagonal(Point::new(1, -1), Point::new(-1, 1))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid: &Grid = shared;
        let count: usize = grid
            .find_all(|b| b == b'X')
            .into_iter()
            .map(|start| {
                DIRECTIONS
                    .iter()
                    .filter(|&&step| spells(grid, start, step, b"XMAS"))
                    .count()
            })
            .sum();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid: &Grid = shared;
        let count = grid
            .find_all(|b| b == b'A')
            .into_iter()
            .filter(|&center| is_x_mas(grid, center))
            .count();
        Ok(count.to_string())
    }
}
