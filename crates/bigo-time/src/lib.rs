//! Big-O Time - Timing harness and growth estimation
//!
//! This crate measures and compares the reference functions:
//! - Clock sources (monotonic, system, manual)
//! - Single-call timing harness with optional logging
//! - Growth-rate classification from operation counts or timings
//!
//! Resolution is whatever the platform clock offers; `Instant` is usually
//! sub-microsecond but only millisecond resolution is guaranteed everywhere.

pub mod clock;
pub mod growth;
pub mod harness;

pub use clock::*;
pub use growth::*;
pub use harness::*;
