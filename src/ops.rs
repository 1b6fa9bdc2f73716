//! Elementwise, structural, and multiplicative operations.
//!
//! All operations leave their operands untouched and return a freshly
//! allocated result. Shape checks run before any allocation, so a failing
//! call has no side effects. Equality is exact IEEE-754 comparison: `NaN`
//! entries never compare equal, and no tolerance is applied.

use crate::error::MatrixError;
use crate::matrix::{checked_vec, Matrix};

impl Matrix<f64> {
    fn check_same_shape(&self, other: &Self) -> Result<(), MatrixError> {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }

    /// Elementwise sum.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` unless both operands have identical shape.
    pub fn add(&self, other: &Self) -> Result<Self, MatrixError> {
        self.check_same_shape(other)?;
        let mut data = checked_vec(self.as_slice().len())?;
        data.extend(
            self.as_slice()
                .iter()
                .zip(other.as_slice())
                .map(|(a, b)| a + b),
        );
        Ok(Self::from_parts(self.nrows(), self.ncols(), data))
    }

    /// Elementwise difference.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` unless both operands have identical shape.
    pub fn sub(&self, other: &Self) -> Result<Self, MatrixError> {
        self.check_same_shape(other)?;
        let mut data = checked_vec(self.as_slice().len())?;
        data.extend(
            self.as_slice()
                .iter()
                .zip(other.as_slice())
                .map(|(a, b)| a - b),
        );
        Ok(Self::from_parts(self.nrows(), self.ncols(), data))
    }

    /// Returns a new matrix with every entry negated.
    pub fn negated(&self) -> Result<Self, MatrixError> {
        self.map(|v| -v)
    }

    /// Multiplies every entry by `factor`.
    pub fn scale(&self, factor: f64) -> Result<Self, MatrixError> {
        self.map(|v| v * factor)
    }

    /// Returns the transpose: a `cols x rows` matrix with
    /// `result[(j, i)] == self[(i, j)]`.
    pub fn transpose(&self) -> Result<Self, MatrixError> {
        let mut out = Self::zeros(self.ncols(), self.nrows())?;
        for i in 0..self.nrows() {
            for j in 0..self.ncols() {
                out[(j, i)] = self[(i, j)];
            }
        }
        Ok(out)
    }

    /// Returns true iff `other` equals the transpose of `self`. Compares in
    /// place without allocating.
    pub fn is_transpose_of(&self, other: &Self) -> bool {
        if other.shape() != (self.ncols(), self.nrows()) {
            return false;
        }
        for i in 0..self.nrows() {
            for j in 0..self.ncols() {
                if self[(i, j)] != other[(j, i)] {
                    return false;
                }
            }
        }
        true
    }

    /// Returns true iff the matrix has the declared shape and matches the
    /// first `rows * cols` elements of `data` exactly.
    pub fn eq_slice(&self, data: &[f64], rows: usize, cols: usize) -> bool {
        if self.shape() != (rows, cols) {
            return false;
        }
        match rows.checked_mul(cols).and_then(|len| data.get(..len)) {
            Some(source) => self
                .as_slice()
                .iter()
                .zip(source)
                .all(|(a, b)| a == b),
            None => false,
        }
    }

    /// Matrix product. Entry `(i, j)` is the dot product of row `i` of
    /// `self` and column `j` of `other`, accumulated in double precision.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` unless `self.ncols() == other.nrows()`.
    pub fn matmul(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.ncols() != other.nrows() {
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        let mut out = Self::zeros(self.nrows(), other.ncols())?;
        for i in 0..self.nrows() {
            for j in 0..other.ncols() {
                let mut sum = 0.0;
                for k in 0..self.ncols() {
                    sum += self[(i, k)] * other[(k, j)];
                }
                out[(i, j)] = sum;
            }
        }
        Ok(out)
    }

    /// Matrix product with the right operand supplied as a row-major slice
    /// of declared shape `rows x cols`.
    ///
    /// # Errors
    ///
    /// `InvalidDimension` for a zero declared dimension, `DimensionMismatch`
    /// unless `self.ncols() == rows`, `BufferTooSmall` if the slice holds
    /// fewer than `rows * cols` elements.
    pub fn matmul_slice(
        &self,
        data: &[f64],
        rows: usize,
        cols: usize,
    ) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimension {
                rows,
                columns: cols,
            });
        }
        if self.ncols() != rows {
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: (rows, cols),
            });
        }
        let len = rows.checked_mul(cols).ok_or(MatrixError::AllocationFailure)?;
        let source = data.get(..len).ok_or(MatrixError::BufferTooSmall {
            required: len,
            capacity: data.len(),
        })?;
        let mut out = Self::zeros(self.nrows(), cols)?;
        for i in 0..self.nrows() {
            for j in 0..cols {
                let mut sum = 0.0;
                for k in 0..rows {
                    sum += self[(i, k)] * source[k * cols + j];
                }
                out[(i, j)] = sum;
            }
        }
        Ok(out)
    }
}
