//! Big-O Core - Reference functions and complexity classes
//!
//! This crate defines the fixtures used to study algorithmic complexity:
//! - Complexity classes (constant, logarithmic, linear, quadratic)
//! - Reference functions with known time and space classes
//! - Simple-operation count models for each function
//! - Output sinks for functions whose result is an emitted stream
//! - The immutable catalog tying names to functions

pub mod catalog;
pub mod class;
pub mod error;
pub mod functions;
pub mod ops;
pub mod sink;

pub use catalog::*;
pub use class::*;
pub use error::*;
pub use functions::*;
pub use sink::*;
