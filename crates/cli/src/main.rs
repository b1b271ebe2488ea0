//! Command-line front end for the Halve bisection solver.
//!
//! # Usage
//!
//! ```text
//! halve cubic
//! halve --low -1 --high 1 --epsilon 1e-6 linear --slope 2 --intercept 0.5
//! halve --low 0 --high 1 --decimal-places 4 --trace cos-minus-x
//! halve --format json -vv cubic --scale 1 --shift 0 --offset -8
//! ```
//!
//! # Exit codes
//!
//! | code | meaning |
//! |------|---------|
//! | 0    | root found |
//! | 1    | output could not be written |
//! | 2    | invalid command-line usage (reported by clap) |
//! | 3    | the bracket is invalid |
//! | 4    | the tolerance is invalid |
//! | 5    | the iteration budget ran out |
//! | 6    | the function returned a non-finite value |

mod cli;
mod demo;
mod report;

use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use halve_core::Observer;
use halve_observers::{LogObserver, Recorder, ValueTolerance};
use halve_solvers::bisection::{self, Action, Event};
use log::info;
use thiserror::Error;

use cli::Cli;

/// Failures that end the program with a nonzero exit code.
#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Solve(#[from] bisection::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl RunError {
    fn exit_code(&self) -> u8 {
        match self {
            RunError::Output(_) => 1,
            RunError::Solve(err) => match err {
                bisection::Error::InvalidBracket(_) => 3,
                bisection::Error::InvalidTolerance(_) => 4,
                bisection::Error::Convergence { .. } => 5,
                bisection::Error::NonFiniteValue { .. } => 6,
            },
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<(), RunError> {
    let config = cli.config().map_err(bisection::Error::from)?;

    info!(
        "solving {} on [{}, {}] with epsilon {}",
        cli.function, cli.low, cli.high, cli.epsilon
    );

    let mut narrator = LogObserver::new();
    let mut recorder = Recorder::new();
    let mut value_tol = cli.value_tol.map(ValueTolerance::new);

    let result = bisection::solve(
        &cli.function,
        [cli.low, cli.high],
        &config,
        |event: &Event| -> Option<Action> {
            let _: Option<Action> = narrator.observe(event);
            if cli.trace {
                let _: Option<Action> = recorder.observe(event);
            }
            value_tol.as_mut().and_then(|observer| observer.observe(event))
        },
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.trace {
        report::write_trace(&mut out, recorder.events())?;
    }

    let solution = result?;
    info!(
        "finished after {} evaluations with status {:?}",
        narrator.evals(),
        solution.status
    );

    report::write_solution(&mut out, &cli.function.to_string(), &solution, cli.format)?;
    out.flush()?;
    Ok(())
}
