//! Shared primitives for the rocstat diagnostic-statistics crates.
//!
//! `rocstat-core` provides the foundation the other rocstat crates build on:
//!
//! - **Error types**: [`RocError`] and [`Result`] for structured error handling
//! - **Traits**: [`Scored`], [`Summarizable`], [`Identified`] for result types

pub mod error;
pub mod traits;

pub use error::{Result, RocError};
pub use traits::*;
