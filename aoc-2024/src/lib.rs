//! Advent of Code 2024 puzzle solutions with automatic registration
//!
//! Each day lives in its own module and registers itself with the solver
//! framework through the `AutoRegisterSolver` derive macro, carrying the
//! published example input so the runner can execute it without a file.

pub mod utils;
pub mod year_2024;
