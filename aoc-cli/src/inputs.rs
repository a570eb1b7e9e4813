//! Puzzle input files on disk

use crate::error::CliError;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory of puzzle inputs
///
/// Directory structure: `{dir}/{year}_day{day:02}.txt`
#[derive(Debug, Clone)]
pub struct InputStore {
    dir: PathBuf,
}

impl InputStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Get the input path for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.dir.join(format!("{}_day{:02}.txt", year, day))
    }

    /// Check if an input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).exists()
    }

    /// Read the input for a year/day
    pub fn get(&self, year: u16, day: u8) -> Result<String, CliError> {
        let path = self.input_path(year, day);
        if !self.contains(year, day) {
            return Err(CliError::Input(format!(
                "no input for {} day {} (expected {})",
                year,
                day,
                path.display()
            )));
        }
        read_input(&path)
    }
}

/// Read a whole input file into memory
pub fn read_input(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path)
        .map_err(|e| CliError::Input(format!("cannot read {}: {}", path.display(), e)))
}
