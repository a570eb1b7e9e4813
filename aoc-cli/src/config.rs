//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::inputs::InputStore;
use std::path::{Path, PathBuf};

/// Where puzzle inputs come from
#[derive(Debug)]
pub enum InputSource {
    /// The example embedded with each solver
    Examples,
    /// A single file for exactly one solver
    File(PathBuf),
    /// A directory of `{year}_day{dd}.txt` files
    Dir(InputStore),
}

impl InputSource {
    /// Label printed in front of each answer
    pub fn part_label(&self) -> &'static str {
        match self {
            InputSource::Examples => "test part",
            InputSource::File(_) | InputSource::Dir(_) => "part",
        }
    }
}

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    pub source: InputSource,
    pub timings: bool,
    pub quiet: bool,
}

impl Config {
    pub fn from_args(args: Args) -> Self {
        let source = match (args.input, args.input_dir) {
            (Some(file), _) => InputSource::File(expand_tilde(&file)),
            (None, Some(dir)) => InputSource::Dir(InputStore::new(expand_tilde(&dir))),
            (None, None) => InputSource::Examples,
        };

        Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags.into_iter().filter(|t| !t.is_empty()).collect(),
            source,
            timings: args.timings,
            quiet: args.quiet,
        }
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(args: &[&str]) -> Config {
        Config::from_args(Args::parse_from(std::iter::once("aoc").chain(args.iter().copied())))
    }

    #[test]
    fn test_expand_tilde() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(expand_tilde(Path::new("~")), home);
        assert_eq!(expand_tilde(Path::new("~/inputs")), home.join("inputs"));
        assert_eq!(expand_tilde(Path::new("inputs/~")), PathBuf::from("inputs/~"));
        assert_eq!(expand_tilde(Path::new("/tmp/x")), PathBuf::from("/tmp/x"));
    }

    #[test]
    fn test_input_file_wins_over_dir() {
        let cfg = config(&["--input-dir", "/tmp/inputs", "-d", "3", "day3.txt"]);
        assert!(matches!(&cfg.source, InputSource::File(p) if p == Path::new("day3.txt")));
        assert_eq!(cfg.day_filter, Some(3));
        assert_eq!(cfg.source.part_label(), "part");
    }

    #[test]
    fn test_tags_split() {
        let cfg = config(&["-t", "grid,,simulation", "--input-dir", "/tmp/inputs"]);
        assert_eq!(cfg.tags, vec!["grid", "simulation"]);
        assert!(matches!(cfg.source, InputSource::Dir(_)));
    }
}
