//! Flat rectangular byte grid shared by the grid puzzles

use aoc_solver::ParseError;
use std::ops::{Add, Mul, Sub};

/// Signed grid coordinate; `x` grows right, `y` grows down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i64> for Point {
    type Output = Point;

    fn mul(self, rhs: i64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// Row-major byte grid
///
/// Built from newline separated rows of equal width. Trailing blank lines
/// are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<u8>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut rows: Vec<&[u8]> = input.lines().map(str::as_bytes).collect();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }

        let width = match rows.first() {
            None => return Err(ParseError::MissingData("grid is empty".into())),
            Some(row) => row.len(),
        };

        let mut cells = Vec::with_capacity(width * rows.len());
        for (line_idx, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(ParseError::InvalidFormat(format!(
                    "(line {}) expected {} columns, found {}",
                    line_idx + 1,
                    width,
                    row.len()
                )));
            }
            cells.extend_from_slice(row);
        }

        Ok(Self {
            cells,
            width,
            height: rows.len(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn contains(&self, p: Point) -> bool {
        (0..self.width as i64).contains(&p.x) && (0..self.height as i64).contains(&p.y)
    }

    /// Flat index of `p`, `None` outside the grid
    pub fn index_of(&self, p: Point) -> Option<usize> {
        self.contains(p)
            .then(|| p.y as usize * self.width + p.x as usize)
    }

    pub fn point_of(&self, index: usize) -> Point {
        Point::new((index % self.width) as i64, (index / self.width) as i64)
    }

    pub fn get(&self, p: Point) -> Option<u8> {
        self.index_of(p).map(|i| self.cells[i])
    }

    /// Every cell with its coordinate, row by row
    pub fn iter(&self) -> impl Iterator<Item = (Point, u8)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &b)| (self.point_of(i), b))
    }

    /// Points whose byte satisfies `pred`, row by row
    pub fn find_all(&self, pred: impl Fn(u8) -> bool) -> Vec<Point> {
        self.iter()
            .filter(|&(_, b)| pred(b))
            .map(|(p, _)| p)
            .collect()
    }

    /// Render the grid as text, letting `overlay` replace any cell byte
    pub fn render_with(&self, overlay: impl Fn(Point, u8) -> Option<u8>) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for (i, (p, b)) in self.iter().enumerate() {
            out.push(char::from(overlay(p, b).unwrap_or(b)));
            if (i + 1) % self.width == 0 {
                out.push('\n');
            }
        }
        out
    }
}
