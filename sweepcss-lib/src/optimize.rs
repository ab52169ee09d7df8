use std::fs;
use std::path::Path;

use crate::error::SweepError;
use crate::refine::{rule, selector};
use crate::report::Report;
use crate::split;

/// Full text pipeline: split, refine the plain region, refine the at-rule
/// blocks, concatenate with a blank line between the two halves.
pub fn optimize(source: &str, report: &mut Report) -> String {
    let (plain, rule_blocks) = split::split(source, report);
    let sorted_plain = selector::refine(&plain, report);
    let sorted_rules = rule::refine(&rule_blocks, report);
    format!("{sorted_plain}\n\n{sorted_rules}")
}

/// Read `input`, optimize it, write the result to `output`.
///
/// The input path is checked before reading so a missing file reports as
/// `FileNotFound` rather than a bare I/O error. In strict mode any
/// warning collected during the transform aborts the run and nothing is
/// written; otherwise warnings go to the log and the write proceeds.
/// The output file is overwritten unconditionally.
pub fn run(input: &Path, output: &Path, strict: bool) -> Result<(), SweepError> {
    if !input.exists() {
        return Err(SweepError::FileNotFound(input.to_path_buf()));
    }
    let source = fs::read_to_string(input)?;

    let mut report = Report::new();
    let optimized = optimize(&source, &mut report);

    if report.has_warnings() {
        if strict {
            return Err(SweepError::Malformed(report.summary()));
        }
        for warning in report.warnings() {
            log::warn!("{warning}");
        }
    }

    fs::write(output, optimized)?;
    Ok(())
}
