//! # Simplex dictionaries over an external LP engine
//!
//! A dictionary is a symbolic view of the basis of a linear program: a partition of the problem
//! and slack variables into basic and nonbasic ones, together with the constant terms and
//! objective coefficients of the expansion of the basic variables in the nonbasic ones. The
//! numerical work is done by an engine implementing the `Backend` trait; this crate translates
//! between the engine's row/column basis-status model and the symbolic dictionary, performs
//! basis exchanges (pivots) and extends the problem with new constraint rows.
#![warn(missing_docs)]

pub mod backend;
pub mod data;
pub mod dictionary;

#[cfg(test)]
mod tests;
