//! Output formatting for solver results

use crate::executor::SolverReport;
use chrono::TimeDelta;
use std::io::{self, Write};
use std::time::Instant;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    timings: bool,
    headers: bool,
    label: &'static str,
    start_time: Instant,
}

impl OutputFormatter {
    /// `label` prefixes each answer, `headers` separates the output of several solvers
    pub fn new(label: &'static str, quiet: bool, timings: bool, headers: bool) -> Self {
        Self {
            quiet,
            timings,
            headers: headers && !quiet,
            label,
            start_time: Instant::now(),
        }
    }

    /// Write one solver's answers to `out` and its failures to `err`
    pub fn write_report(
        &self,
        out: &mut impl Write,
        err: &mut impl Write,
        report: &SolverReport,
    ) -> io::Result<()> {
        if self.headers {
            writeln!(out, "== {} day {} ==", report.year, report.day)?;
        }

        let results = match &report.outcome {
            Ok(results) => results,
            Err(e) => {
                for part in report.parts.clone() {
                    writeln!(err, "part {}: error: {}", part, e)?;
                }
                return Ok(());
            }
        };

        for result in results {
            match &result.answer {
                Ok(answer) if self.quiet => writeln!(out, "{}", answer)?,
                Ok(answer) if self.timings => {
                    let parse_timing = report
                        .parse_duration
                        .map(|d| format!("parse: {}, ", format_duration(d)))
                        .unwrap_or_default();
                    writeln!(
                        out,
                        "{} {}: {} ({}solve: {})",
                        self.label,
                        result.part,
                        answer,
                        parse_timing,
                        format_duration(result.solve_duration)
                    )?
                }
                Ok(answer) => writeln!(out, "{} {}: {}", self.label, result.part, answer)?,
                Err(e) => writeln!(err, "part {}: error: {}", result.part, e)?,
            }
        }
        Ok(())
    }

    /// Write a summary after all results
    ///
    /// Only printed with timings enabled.
    pub fn write_summary(&self, out: &mut impl Write, reports: &[SolverReport]) -> io::Result<()> {
        if self.quiet || !self.timings {
            return Ok(());
        }

        let total: usize = reports.iter().map(|r| r.parts.clone().count()).sum();
        let failures: usize = reports.iter().map(SolverReport::failures).sum();

        let total_parse_time: TimeDelta = reports.iter().filter_map(|r| r.parse_duration).sum();
        let total_solve_time: TimeDelta = reports
            .iter()
            .filter_map(|r| r.outcome.as_ref().ok())
            .flatten()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();
        let elapsed = TimeDelta::from_std(self.start_time.elapsed()).unwrap_or(TimeDelta::MAX);

        writeln!(out)?;
        writeln!(out, "--- Summary ---")?;
        writeln!(out, "Parts: {} solved, {} failed", total - failures, failures)?;
        writeln!(out, "Total parse time: {}", format_duration(total_parse_time))?;
        writeln!(out, "Total solve time: {}", format_duration(total_solve_time))?;
        writeln!(out, "Elapsed wall-clock time: {}", format_duration(elapsed))?;
        Ok(())
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use crate::executor::PartResult;
    use aoc_solver::{SolveError, SolverError};
    use proptest::prelude::*;

    fn report(outcome: Result<Vec<PartResult>, CliError>) -> SolverReport {
        SolverReport {
            year: 2024,
            day: 7,
            parts: 1..=2,
            parse_duration: Some(TimeDelta::microseconds(1500)),
            outcome,
        }
    }

    fn answered() -> SolverReport {
        report(Ok(vec![
            PartResult {
                part: 1,
                answer: Ok("3749".into()),
                solve_duration: TimeDelta::microseconds(42),
            },
            PartResult {
                part: 2,
                answer: Err(SolverError::SolveError(SolveError::PartNotImplemented(2))),
                solve_duration: TimeDelta::zero(),
            },
        ]))
    }

    fn render(formatter: &OutputFormatter, report: &SolverReport) -> (String, String) {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        formatter.write_report(&mut out, &mut err, report).unwrap();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-20)), "-20µs");
        assert_eq!(format_duration(TimeDelta::MAX), "N/A");
    }

    #[test]
    fn test_labels_and_errors() {
        let (out, err) = render(&OutputFormatter::new("test part", false, false, false), &answered());
        assert_eq!(out, "test part 1: 3749\n");
        assert!(err.starts_with("part 2: error: "));

        let (out, _) = render(&OutputFormatter::new("part", false, false, true), &answered());
        assert_eq!(out, "== 2024 day 7 ==\npart 1: 3749\n");
    }

    #[test]
    fn test_quiet_and_timings() {
        let (out, _) = render(&OutputFormatter::new("part", true, true, true), &answered());
        assert_eq!(out, "3749\n");

        let (out, _) = render(&OutputFormatter::new("part", false, true, false), &answered());
        assert_eq!(out, "part 1: 3749 (parse: 1.50ms, solve: 42µs)\n");
    }

    #[test]
    fn test_failed_input_reports_every_part() {
        let failed = report(Err(CliError::Input("missing".into())));
        let (out, err) = render(&OutputFormatter::new("part", false, false, false), &failed);
        assert!(out.is_empty());
        assert_eq!(err, "part 1: error: Input error: missing\npart 2: error: Input error: missing\n");
    }

    #[test]
    fn test_summary_counts() {
        let formatter = OutputFormatter::new("part", false, true, false);
        let mut out = Vec::new();
        formatter.write_summary(&mut out, &[answered()]).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Parts: 1 solved, 1 failed"));
        assert!(out.contains("Total parse time: 1.50ms"));
        assert!(out.contains("Total solve time: 42µs"));

        let mut out = Vec::new();
        OutputFormatter::new("part", false, false, false)
            .write_summary(&mut out, &[answered()])
            .unwrap();
        assert!(out.is_empty());
    }

    proptest! {
        #[test]
        fn formatted_durations_carry_a_unit(micros in 0i64..10_000_000_000) {
            let s = format_duration(TimeDelta::microseconds(micros));
            prop_assert!(s.ends_with("µs") || s.ends_with("ms") || s.ends_with('s'));
            prop_assert!(!s.starts_with('-'));
        }
    }
}
