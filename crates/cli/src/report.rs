use std::io::{self, Write};

use halve_solvers::bisection::{Event, Sign, Solution};

use crate::cli::Format;

/// Writes the solved root in the requested format.
///
/// # Errors
///
/// Returns an error if writing or JSON encoding fails.
pub fn write_solution(
    out: &mut impl Write,
    heading: &str,
    solution: &Solution,
    format: Format,
) -> io::Result<()> {
    match format {
        Format::Text => {
            writeln!(out, "{heading}")?;
            writeln!(out, "{solution}")?;
            writeln!(out, "iterations: {}", solution.iters)
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, solution)?;
            writeln!(out)
        }
    }
}

/// Writes one line per evaluation, in the order the solver made them.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_trace(out: &mut impl Write, events: &[Event]) -> io::Result<()> {
    for event in events {
        match event {
            Event::Low { x, value } => writeln!(out, "low   f({x}) = {value}")?,
            Event::High { x, value } => writeln!(out, "high  f({x}) = {value}")?,
            Event::Midpoint {
                iter,
                x,
                value,
                bracket,
            } => {
                #[allow(clippy::float_cmp)]
                let moves = if *value == 0.0 {
                    "exact root"
                } else if Sign::of(*value) == bracket.low_sign() {
                    "midpoint is new low"
                } else {
                    "midpoint is new high"
                };
                writeln!(
                    out,
                    "{iter:>4}  [{}, {}]  f({x}) = {value}  -> {moves}",
                    bracket.low(),
                    bracket.high(),
                )?;
            }
        }
    }
    Ok(())
}
