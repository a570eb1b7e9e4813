use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const DAY_1_INPUT: &str = "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n";

fn aoc() -> Command {
    let mut cmd = Command::cargo_bin("aoc").unwrap();
    cmd.env_remove("AOC_INPUT_DIR").env_remove("RUST_LOG");
    cmd
}

#[test]
fn example_run_prints_test_answers() {
    aoc()
        .args(["-d", "1"])
        .assert()
        .success()
        .stdout("test part 1: 11\ntest part 2: 31\n");
}

#[test]
fn all_examples_run_with_headers() {
    aoc()
        .assert()
        .success()
        .stdout(predicate::str::contains("== 2024 day 1 =="))
        .stdout(predicate::str::contains("== 2024 day 9 ==\ntest part 1: 1928\ntest part 2: 2858\n"))
        .stdout(predicate::str::contains("test part 2: 11387"));
}

#[test]
fn quiet_prints_answers_only() {
    aoc()
        .args(["-y", "2024", "-d", "6", "-p", "2", "-q"])
        .assert()
        .success()
        .stdout("6\n");
}

#[test]
fn tags_select_grid_days() {
    aoc()
        .args(["-t", "grid", "-p", "1"])
        .assert()
        .success()
        .stdout("== 2024 day 4 ==\ntest part 1: 18\n== 2024 day 6 ==\ntest part 1: 41\n== 2024 day 8 ==\ntest part 1: 14\n");
}

#[test]
fn input_file_prints_real_answers() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("input.txt");
    fs::write(&path, DAY_1_INPUT).unwrap();

    aoc()
        .args(["-d", "1"])
        .arg(&path)
        .assert()
        .success()
        .stdout("part 1: 11\npart 2: 31\n");
}

#[test]
fn input_file_needs_single_solver() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("input.txt");
    fs::write(&path, DAY_1_INPUT).unwrap();

    aoc()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly one selected solver"));
}

#[test]
fn input_dir_reads_named_files() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("2024_day03.txt"),
        "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))",
    )
    .unwrap();

    aoc()
        .args(["-d", "3", "--input-dir"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout("part 1: 161\npart 2: 48\n");

    aoc()
        .args(["-d", "3"])
        .env("AOC_INPUT_DIR", temp.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("part 1: 161"));
}

#[test]
fn missing_input_fails_each_part() {
    let temp = TempDir::new().unwrap();

    aoc()
        .args(["-d", "2", "--input-dir"])
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("part 1: error:"))
        .stderr(predicate::str::contains("part 2: error:"))
        .stderr(predicate::str::contains("2024_day02.txt"));
}

#[test]
fn malformed_input_reports_line() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("input.txt");
    fs::write(&path, "3   4\n4 3 7\n").unwrap();

    aoc()
        .args(["-d", "1", "-p", "1"])
        .arg(&path)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("part 1: error:").and(predicate::str::contains("line 2")));
}

#[test]
fn day_out_of_range_is_rejected() {
    aoc().args(["-d", "26"]).assert().failure();
}

#[test]
fn no_matching_solver_is_not_an_error() {
    aoc()
        .args(["-y", "2015"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("No solvers found"));
}
