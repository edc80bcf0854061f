//! # The variable index space
//!
//! An ordered catalogue of the variables of a dictionary. Structural variables come first and
//! keep the engine's column indices; auxiliary variables follow, offset by the number of
//! columns. Indices are dense, unique and stable: only a row extension changes the catalogue,
//! by appending exactly one auxiliary variable at the end.
use std::fmt;
use std::fmt::Display;

/// A variable is either structural or auxiliary.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum VariableKind {
    /// A problem variable, corresponding to an engine column.
    Structural,
    /// A slack variable, corresponding to an engine row: the gap between the row's upper bound
    /// and its current value.
    Auxiliary,
}

/// A single variable of a dictionary.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Variable {
    name: String,
    index: usize,
    kind: VariableKind,
}

impl Variable {
    pub(crate) fn new(name: String, index: usize, kind: VariableKind) -> Self {
        Self { name, index, kind }
    }

    /// Human-readable name, unique within a dictionary.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position in the dictionary's variable catalogue.
    ///
    /// Structural variables have indices below the number of columns, auxiliary variables at or
    /// above it.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether this is a problem or a slack variable.
    pub fn kind(&self) -> VariableKind {
        self.kind
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Name for column `j` when the engine has no label for it.
pub(crate) fn synthesized_column_name(j: usize) -> String {
    format!("x_{}", j)
}

/// Name for the slack of row `i` when the engine has no label for it.
pub(crate) fn synthesized_row_name(i: usize) -> String {
    format!("w_{}", i)
}

#[cfg(test)]
mod test {
    use crate::dictionary::variable::{synthesized_column_name, synthesized_row_name};

    #[test]
    fn synthesized_names() {
        assert_eq!(synthesized_column_name(0), "x_0");
        assert_eq!(synthesized_column_name(12), "x_12");
        assert_eq!(synthesized_row_name(3), "w_3");
    }
}
