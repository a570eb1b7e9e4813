use crate::utils::grid::{Grid, Point};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use std::collections::{BTreeMap, HashSet};
use tracing::trace;

const EXAMPLE: &str = "\
............
........0...
.....0......
.......0....
....0.......
......A.....
............
............
........A...
.........A..
............
............";

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 8, example = EXAMPLE, tags = ["grid"])]
pub struct Solver;

#[derive(Debug)]
pub struct Roof {
    grid: Grid,
    /// Antenna positions grouped by frequency
    antennas: BTreeMap<u8, Vec<Point>>,
}

impl Roof {
    fn pairs(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.antennas
            .values()
            .flat_map(|points| points.iter().copied().tuple_combinations())
    }

    /// Points from `from` onward in steps of `step` that stay on the roof
    fn ray(&self, from: Point, step: Point) -> impl Iterator<Item = Point> + '_ {
        std::iter::successors(Some(from), move |&p| Some(p + step)).take_while(|&p| self.grid.contains(p))
    }

    fn count(&self, antinodes: HashSet<Point>) -> String {
        trace!(
            "antinodes:\n{}",
            self.grid
                .render_with(|p, b| (b == b'.' && antinodes.contains(&p)).then_some(b'#'))
        );
        antinodes.len().to_string()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Roof;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        let antennas = grid
            .iter()
            .filter(|&(_, b)| b != b'.')
            .map(|(p, b)| (b, p))
            .into_group_map()
            .into_iter()
            .collect();
        Ok(Roof { grid, antennas })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let roof: &Roof = shared;
        let antinodes = roof
            .pairs()
            .flat_map(|(a, b)| [b + (b - a), a - (b - a)])
            .filter(|&p| roof.grid.contains(p))
            .collect();
        Ok(roof.count(antinodes))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let roof: &Roof = shared;
        let antinodes = roof
            .pairs()
            .flat_map(|(a, b)| {
                let delta = b - a;
                roof.ray(b, delta).chain(roof.ray(a, Point::new(-delta.x, -delta.y)))
            })
            .collect();
        Ok(roof.count(antinodes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve<const N: u8>(input: &str) -> String
    where
        Solver: PartSolver<N>,
    {
        let mut shared = Solver::parse(input).unwrap();
        <Solver as PartSolver<N>>::solve(&mut shared).unwrap()
    }

    #[test]
    fn test_example() {
        assert_eq!(solve::<1>(EXAMPLE), "14");
        assert_eq!(solve::<2>(EXAMPLE), "34");
    }

    #[test]
    fn test_two_antennas() {
        let input = "\
..........
..........
..........
....a.....
..........
.....a....
..........
..........
..........
..........";
        assert_eq!(solve::<1>(input), "2");
    }

    #[test]
    fn test_resonant_harmonics() {
        let input = "\
T.........
...T......
.T........
..........
..........
..........
..........
..........
..........
..........";
        assert_eq!(solve::<2>(input), "9");
    }

    #[test]
    fn test_frequencies_do_not_mix() {
        assert_eq!(solve::<1>("a..\n...\n..b"), "0");
        assert_eq!(solve::<2>("a..\n...\n..b"), "0");
    }

    #[test]
    fn test_antinode_on_antenna_counts() {
        // neighbouring pairs put their antinodes on the outer antennas
        assert_eq!(solve::<1>("a.a.a"), "2");
    }
}
