//! Core traits for the Halve workspace.
//!
//! This crate defines the seams that solvers and observers build on:
//!
//! - [`Function`]: a pure scalar mapping `f64 -> f64` that solvers evaluate
//! - [`Observer`]: receives solver events and optionally returns control actions

mod function;
mod observer;

pub use function::Function;
pub use observer::Observer;
