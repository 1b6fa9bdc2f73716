//! matriz: a dense, real-valued matrix library.
//!
//! This crate provides a single row-major matrix type with checked
//! construction, bounds-checked element access, bulk import/export through
//! borrowed slices, elementwise and structural arithmetic, and an exact
//! cofactor-expansion solver for determinant, adjugate, and inverse.
//!
//! The design favors small, testable modules and explicit `Result`-based
//! error reporting: every operation either returns a fully initialized
//! result or fails without side effects. Equality is exact IEEE-754
//! comparison throughout; there is no tolerance anywhere in the crate.
pub mod cofactor;
pub mod error;
pub mod matrix;
pub mod ops;
pub mod shape;

pub use error::MatrixError;
pub use matrix::Matrix;
