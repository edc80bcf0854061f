//! # Dense square matrices
//!
//! A minimal dense square matrix used for maintaining a basis inverse. Problems this crate views
//! symbolically are small, so no factorization is kept; the inverse is recomputed from scratch
//! whenever the basis changes.
use std::slice::Iter;

/// Pivot elements smaller than this are considered zero during elimination.
const PIVOT_TOLERANCE: f64 = 1e-11;

/// Uses a `Vec<Vec<f64>>` as underlying data structure. Dimensions are fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct SquareMatrix {
    data: Vec<Vec<f64>>,
    size: usize,
}

impl SquareMatrix {
    /// Create a dense square identity matrix of dimension `size`.
    pub fn identity(size: usize) -> Self {
        let mut data = vec![vec![0_f64; size]; size];
        for (i, row) in data.iter_mut().enumerate() {
            row[i] = 1_f64;
        }

        Self { data, size }
    }

    /// Create a matrix from its columns.
    ///
    /// # Arguments
    ///
    /// * `columns`: Square collection of columns; each inner `Vec` is one column and should have
    /// the same length as the number of columns.
    pub fn from_columns(columns: &[Vec<f64>]) -> Self {
        let size = columns.len();
        debug_assert!(columns.iter().all(|column| column.len() == size));

        let mut data = vec![vec![0_f64; size]; size];
        for (j, column) in columns.iter().enumerate() {
            for (i, &value) in column.iter().enumerate() {
                data[i][j] = value;
            }
        }

        Self { data, size }
    }

    /// Dimension of the matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn get_value(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.size && j < self.size);

        self.data[i][j]
    }

    /// Iterate over the values in row `i`.
    pub fn row(&self, i: usize) -> Iter<'_, f64> {
        debug_assert!(i < self.size);

        self.data[i].iter()
    }

    /// Multiply this matrix with a dense vector of matching length.
    pub fn multiply_vector(&self, vector: &[f64]) -> Vec<f64> {
        debug_assert_eq!(vector.len(), self.size);

        self.data.iter()
            .map(|row| row.iter().zip(vector).map(|(coefficient, value)| coefficient * value).sum())
            .collect()
    }

    /// Invert the matrix by Gauss-Jordan elimination with partial pivoting.
    ///
    /// # Return value
    ///
    /// The inverse, or `None` if the matrix is (numerically) singular.
    pub fn inverse(&self) -> Option<Self> {
        let size = self.size;
        let mut work = self.data.clone();
        let mut inverse = Self::identity(size).data;

        for pivot in 0..size {
            let mut pivot_row = pivot;
            for candidate in (pivot + 1)..size {
                if work[candidate][pivot].abs() > work[pivot_row][pivot].abs() {
                    pivot_row = candidate;
                }
            }
            if work[pivot_row][pivot].abs() < PIVOT_TOLERANCE {
                return None;
            }
            work.swap(pivot, pivot_row);
            inverse.swap(pivot, pivot_row);

            let factor = work[pivot][pivot];
            for j in 0..size {
                work[pivot][j] /= factor;
                inverse[pivot][j] /= factor;
            }

            for i in 0..size {
                if i == pivot || work[i][pivot] == 0_f64 {
                    continue;
                }
                let factor = work[i][pivot];
                for j in 0..size {
                    work[i][j] -= factor * work[pivot][j];
                    inverse[i][j] -= factor * inverse[pivot][j];
                }
            }
        }

        Some(Self { data: inverse, size })
    }
}

#[cfg(test)]
mod test {
    use crate::data::matrix::SquareMatrix;

    #[test]
    fn identity_is_its_own_inverse() {
        let identity = SquareMatrix::identity(3);
        assert_eq!(identity.inverse(), Some(identity));
    }

    #[test]
    fn inverse() {
        let matrix = SquareMatrix::from_columns(&[vec![-1_f64, -2_f64], vec![-1_f64, -1_f64]]);
        let inverse = matrix.inverse().unwrap();

        let expected = SquareMatrix::from_columns(&[vec![1_f64, -2_f64], vec![-1_f64, 1_f64]]);
        for i in 0..2 {
            for j in 0..2 {
                assert!((inverse.get_value(i, j) - expected.get_value(i, j)).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        let matrix = SquareMatrix::from_columns(&[vec![-1_f64, -1_f64], vec![0_f64, 0_f64]]);
        assert_eq!(matrix.inverse(), None);
    }

    #[test]
    fn multiply_vector() {
        let matrix = SquareMatrix::from_columns(&[vec![1_f64, 3_f64], vec![2_f64, 4_f64]]);
        assert_eq!(matrix.multiply_vector(&[1_f64, 1_f64]), vec![3_f64, 7_f64]);
    }
}
