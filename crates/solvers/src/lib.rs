//! Root finders for the Halve workspace.
//!
//! # Solvers
//!
//! - [`bisection`]: guaranteed convergence on a bracketed sign change
//!
//! # Features
//!
//! - `serde`: derives `Serialize` for solver results.

pub mod bisection;
