use crate::utils::grid::{Grid, Point};
use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::{debug, trace};

const EXAMPLE: &str = "\
....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...";

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 6, example = EXAMPLE, tags = ["grid", "simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Heading {
    Up,
    Right,
    Down,
    Left,
}

impl Heading {
    fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'^' => Some(Heading::Up),
            b'>' => Some(Heading::Right),
            b'v' => Some(Heading::Down),
            b'<' => Some(Heading::Left),
            _ => None,
        }
    }

    fn turn_right(self) -> Self {
        match self {
            Heading::Up => Heading::Right,
            Heading::Right => Heading::Down,
            Heading::Down => Heading::Left,
            Heading::Left => Heading::Up,
        }
    }

    fn step(self) -> Point {
        match self {
            Heading::Up => Point::new(0, -1),
            Heading::Right => Point::new(1, 0),
            Heading::Down => Point::new(0, 1),
            Heading::Left => Point::new(-1, 0),
        }
    }

    /// One bit per heading, for the per-cell visited mask
    fn bit(self) -> u8 {
        1 << self as u8
    }
}

enum Patrol {
    /// Guard walked off the map; per-cell mask of headings seen
    Exits(Vec<u8>),
    /// Guard returned to a cell with a heading it already had there
    Loops,
}

#[derive(Debug)]
pub struct Lab {
    grid: Grid,
    start: usize,
    heading: Heading,
    /// Cells on the unobstructed route, filled by whichever part runs first
    route: Option<Vec<usize>>,
}

impl Lab {
    /// Anything other than floor blocks the guard, except the guard's own start cell
    fn is_blocked(&self, index: usize) -> bool {
        index != self.start && self.grid.cells()[index] != b'.'
    }

    fn patrol(&self, extra_obstruction: Option<usize>) -> Patrol {
        let mut seen = vec![0u8; self.grid.cells().len()];
        let mut index = self.start;
        let mut heading = self.heading;

        loop {
            if seen[index] & heading.bit() != 0 {
                return Patrol::Loops;
            }
            seen[index] |= heading.bit();

            let ahead = self.grid.point_of(index) + heading.step();
            match self.grid.index_of(ahead) {
                None => return Patrol::Exits(seen),
                Some(next) if Some(next) == extra_obstruction || self.is_blocked(next) => {
                    heading = heading.turn_right();
                }
                Some(next) => index = next,
            }
        }
    }

    fn route(&mut self) -> Result<&[usize], SolveError> {
        if self.route.is_none() {
            let seen = match self.patrol(None) {
                Patrol::Exits(seen) => seen,
                Patrol::Loops => return Err(SolveError::failed(anyhow!("guard never leaves the lab"))),
            };
            trace!(
                "patrol route:\n{}",
                self.grid
                    .render_with(|p, _| self.grid.index_of(p).filter(|&i| seen[i] != 0).map(|_| b'X'))
            );
            self.route = Some(
                seen.iter()
                    .enumerate()
                    .filter(|&(_, &mask)| mask != 0)
                    .map(|(i, _)| i)
                    .collect(),
            );
        }
        Ok(self.route.as_deref().unwrap_or_default())
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Lab;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        let guards = grid.find_all(|b| Heading::from_byte(b).is_some());
        let start = match guards.as_slice() {
            [] => return Err(ParseError::MissingData("no guard in the lab".into())),
            [guard] => *guard,
            [first, second, ..] => {
                return Err(ParseError::InvalidFormat(format!(
                    "expected one guard, found guards at ({}, {}) and ({}, {})",
                    first.x, first.y, second.x, second.y
                )));
            }
        };

        let (start, heading) = grid
            .index_of(start)
            .and_then(|i| Some((i, Heading::from_byte(grid.cells()[i])?)))
            .ok_or_else(|| ParseError::Other("guard position outside the grid".into()))?;

        Ok(Lab {
            grid,
            start,
            heading,
            route: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.route()?.len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let route = shared.route()?.to_vec();
        let lab: &Lab = shared;

        // An obstruction off the route never meets the guard
        let loops = route
            .iter()
            .filter(|&&candidate| candidate != lab.start)
            .filter(|&&candidate| matches!(lab.patrol(Some(candidate)), Patrol::Loops))
            .count();
        debug!(candidates = route.len() - 1, loops, "obstruction search finished");
        Ok(loops.to_string())
    }
}
