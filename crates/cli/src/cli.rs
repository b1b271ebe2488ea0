use clap::{ArgAction, Parser, ValueEnum};
use halve_solvers::bisection::{Config, ConfigError};

use crate::demo::Demo;

/// Find a root of a built-in function with the bisection method.
#[derive(Debug, Parser)]
#[command(name = "halve", version, about)]
pub struct Cli {
    /// Lower end of the starting bracket.
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub low: f64,

    /// Upper end of the starting bracket.
    #[arg(long, default_value_t = 200.0, allow_negative_numbers = true)]
    pub high: f64,

    /// Stop once the bracket is narrower than this.
    #[arg(long, default_value_t = 0.01, allow_negative_numbers = true)]
    pub epsilon: f64,

    /// Fail after this many midpoint evaluations.
    #[arg(long, default_value_t = Config::DEFAULT_MAX_ITERS)]
    pub max_iters: usize,

    /// Round the reported root to this many decimal places.
    #[arg(long)]
    pub decimal_places: Option<u32>,

    /// Stop early once |f(x)| at a midpoint is at most this value.
    #[arg(long)]
    pub value_tol: Option<f64>,

    /// Print every evaluation after solving.
    #[arg(long)]
    pub trace: bool,

    /// Output format for the result.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub function: Demo,
}

/// How the result is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

impl Cli {
    /// Builds the solver config from the command-line flags.
    ///
    /// # Errors
    ///
    /// Returns an error if `--epsilon` is not finite and positive.
    pub fn config(&self) -> Result<Config, ConfigError> {
        let config = Config::new(self.epsilon, self.max_iters)?;
        Ok(match self.decimal_places {
            Some(places) => config.with_decimal_places(places),
            None => config,
        })
    }

    /// Returns the log filter implied by `-v` flags.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_classic_demo() {
        let cli = Cli::try_parse_from(["halve", "cubic"]).expect("valid args");

        assert_eq!(cli.function.to_string(), "f(x) = -2 (x - 3)^3 + 5");
        assert_eq!(cli.format, Format::Text);
        assert_eq!(cli.log_level(), log::LevelFilter::Warn);

        let config = cli.config().expect("valid config");
        assert_eq!(config.max_iters(), 1000);
        assert_eq!(config.decimal_places(), None);
    }

    #[test]
    fn parses_negative_values() {
        let cli = Cli::try_parse_from([
            "halve", "--low", "-1", "--high", "1", "-vv", "linear", "--slope", "-3",
        ])
        .expect("valid args");

        assert!((cli.low + 1.0).abs() < f64::EPSILON);
        assert_eq!(cli.log_level(), log::LevelFilter::Debug);
        assert_eq!(
            cli.function,
            Demo::Linear {
                slope: -3.0,
                intercept: 0.0
            }
        );
    }

    #[test]
    fn rejects_bad_epsilon() {
        let cli = Cli::try_parse_from(["halve", "--epsilon", "-1", "cubic"]).expect("valid args");
        assert_eq!(cli.config(), Err(ConfigError::Epsilon));
    }
}
