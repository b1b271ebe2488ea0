use std::fmt;

use clap::Subcommand;
use halve_core::Function;

/// Built-in functions the command line can solve.
#[derive(Debug, Clone, Copy, PartialEq, Subcommand)]
pub enum Demo {
    /// The cubic `m (x - h)^3 + c`, by default the classic `-2 (x - 3)^3 + 5`.
    Cubic {
        /// Leading coefficient `m`.
        #[arg(long, default_value_t = -2.0, allow_negative_numbers = true)]
        scale: f64,

        /// Horizontal shift `h`.
        #[arg(long, default_value_t = 3.0, allow_negative_numbers = true)]
        shift: f64,

        /// Vertical offset `c`.
        #[arg(long, default_value_t = 5.0, allow_negative_numbers = true)]
        offset: f64,
    },

    /// The line `m x + c`.
    Linear {
        /// Slope `m`.
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        slope: f64,

        /// Intercept `c`.
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        intercept: f64,
    },

    /// `cos(x) - x`, whose root is the Dottie number.
    CosMinusX,
}

impl Function for Demo {
    fn eval(&self, x: f64) -> f64 {
        match *self {
            Demo::Cubic {
                scale,
                shift,
                offset,
            } => scale * (x - shift).powi(3) + offset,
            Demo::Linear { slope, intercept } => slope * x + intercept,
            Demo::CosMinusX => x.cos() - x,
        }
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Demo::Cubic {
                scale,
                shift,
                offset,
            } => write!(f, "f(x) = {scale} (x - {shift})^3 + {offset}"),
            Demo::Linear { slope, intercept } => write!(f, "f(x) = {slope} x + {intercept}"),
            Demo::CosMinusX => write!(f, "f(x) = cos(x) - x"),
        }
    }
}
