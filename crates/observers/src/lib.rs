//! Reusable observers for the Halve workspace.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any solver event exposing the right capabilities.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasValue`], [`HasBracket`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogObserver`]: narrates each evaluation through the `log` facade
//! - [`Recorder`]: keeps a copy of every event for later inspection
//! - [`ValueTolerance`]: stops once `|f(x)|` is small enough
//!
//! [`Observer`]: halve_core::Observer
//! [`HasValue`]: traits::HasValue
//! [`HasBracket`]: traits::HasBracket
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod narrate;
mod record;
mod stop;

pub use narrate::LogObserver;
pub use record::Recorder;
pub use stop::ValueTolerance;
