//! Shape and value classification predicates.
//!
//! All predicates are read-only and use exact comparisons, consistent with
//! the crate's equality contract. A matrix containing `NaN` fails every
//! value-based predicate, since `NaN` compares unequal to everything.

use crate::matrix::Matrix;

impl Matrix<f64> {
    /// True iff the row and column counts are equal.
    pub fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }

    /// True iff the matrix has exactly one row.
    pub fn is_row_vector(&self) -> bool {
        self.nrows() == 1
    }

    /// True iff the matrix has exactly one column.
    pub fn is_column_vector(&self) -> bool {
        self.ncols() == 1
    }

    /// True iff the row and column counts differ.
    pub fn is_rectangular(&self) -> bool {
        self.nrows() != self.ncols()
    }

    /// True iff every entry is exactly `0.0`.
    pub fn is_zero(&self) -> bool {
        self.as_slice().iter().all(|&v| v == 0.0)
    }

    /// True iff the matrix is square and every off-diagonal entry is
    /// exactly `0.0`.
    pub fn is_diagonal(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        for i in 0..self.nrows() {
            for j in 0..self.ncols() {
                if i != j && self[(i, j)] != 0.0 {
                    return false;
                }
            }
        }
        true
    }

    /// True iff the matrix is diagonal with every diagonal entry exactly
    /// `1.0`.
    pub fn is_identity(&self) -> bool {
        self.is_diagonal() && (0..self.nrows()).all(|i| self[(i, i)] == 1.0)
    }

    /// True iff the matrix is diagonal and all diagonal entries share one
    /// common value. The common value may be `0.0`, so every square zero
    /// matrix is scalar.
    pub fn is_scalar(&self) -> bool {
        self.is_diagonal() && (1..self.nrows()).all(|i| self[(i, i)] == self[(0, 0)])
    }

    /// True iff the matrix is square and equals its own transpose. The
    /// diagonal is compared against itself, so a `NaN` diagonal entry makes
    /// the matrix non-symmetric, consistent with `==`.
    pub fn is_symmetric(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        for i in 0..self.nrows() {
            for j in i..self.ncols() {
                if self[(i, j)] != self[(j, i)] {
                    return false;
                }
            }
        }
        true
    }

    /// True iff every entry below the main diagonal is exactly `0.0`.
    pub fn is_upper_triangular(&self) -> bool {
        for i in 0..self.nrows() {
            for j in 0..i.min(self.ncols()) {
                if self[(i, j)] != 0.0 {
                    return false;
                }
            }
        }
        true
    }

    /// True iff every entry above the main diagonal is exactly `0.0`.
    pub fn is_lower_triangular(&self) -> bool {
        for i in 0..self.nrows() {
            for j in (i + 1)..self.ncols() {
                if self[(i, j)] != 0.0 {
                    return false;
                }
            }
        }
        true
    }

    /// True iff the matrix is upper-triangular or lower-triangular.
    pub fn is_triangular(&self) -> bool {
        self.is_upper_triangular() || self.is_lower_triangular()
    }
}
