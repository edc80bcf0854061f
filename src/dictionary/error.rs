//! # Error reporting for dictionary operations
//!
//! A collection of enums describing any problems encountered while constructing a dictionary,
//! selecting a pivot pair, committing a basis exchange or extending the problem with a row.
use std::error::Error;
use std::fmt;
use std::fmt::Display;

use crate::backend::WarmUpError;

/// Which of the two pivot selections an operation was missing.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Selection {
    /// The nonbasic variable chosen to become basic.
    Entering,
    /// The basic variable chosen to become nonbasic.
    Leaving,
}

impl Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Entering => write!(f, "entering"),
            Self::Leaving => write!(f, "leaving"),
        }
    }
}

/// A `DictionaryError` is created when a dictionary operation can not be carried out.
///
/// All variants are reported synchronously to the caller; nothing is retried internally.
#[derive(Clone, Debug, PartialEq)]
pub enum DictionaryError {
    /// The engine's problem is not in the canonical form the dictionary model supports.
    ///
    /// Every constraint row must be a pure upper bounded inequality and every structural
    /// variable must have a finite lower bound. Fatal to construction.
    StandardFormViolation(String),
    /// A coefficient extraction or a commit was attempted without the required selection.
    ///
    /// The caller should select the named variable and retry.
    MissingSelection(Selection),
    /// A selection named a variable on the wrong side of the basis partition.
    InvalidSelection(String),
    /// The selected entering/leaving pair has a zero pivot coefficient.
    ///
    /// The engine is left untouched and both selections remain set; the caller should choose a
    /// different pair.
    IncompatiblePivot,
    /// The engine failed to recompute its tableau after a basis exchange.
    ///
    /// The basis statuses have already been mutated and no rollback is attempted; this condition
    /// is not recoverable.
    WarmStartFailure(WarmUpError),
    /// A dense coefficient vector had the wrong length.
    DimensionMismatch {
        /// Required length: the current number of structural variables.
        expected: usize,
        /// Provided length.
        actual: usize,
    },
    /// A variable name is already taken.
    ///
    /// The contained `String` is the offending name.
    NameConflict(String),
}

impl Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::StandardFormViolation(description) => {
                write!(f, "standard form violation: {}", description)
            },
            Self::MissingSelection(selection) => {
                write!(f, "no {} variable has been selected", selection)
            },
            Self::InvalidSelection(description) => {
                write!(f, "invalid selection: {}", description)
            },
            Self::IncompatiblePivot => {
                write!(f, "the pivot coefficient of the selected pair is zero")
            },
            Self::WarmStartFailure(error) => {
                write!(f, "the engine failed to recompute its tableau: {}", error)
            },
            Self::DimensionMismatch { expected, actual } => {
                write!(f, "expected {} coefficients, got {}", expected, actual)
            },
            Self::NameConflict(name) => {
                write!(f, "the variable name \"{}\" is already taken", name)
            },
        }
    }
}

impl Error for DictionaryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::WarmStartFailure(error) => Some(error),
            _ => None,
        }
    }
}
