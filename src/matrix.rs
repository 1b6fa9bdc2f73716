//! Core matrix type: storage, lifecycle, and bounds-checked access.
//!
//! `Matrix<T>` owns its entries in a single contiguous row-major buffer.
//! Construction is checked (`InvalidDimension`, `AllocationFailure`), deep
//! copies come from `Clone`, and release is handled by `Drop`. Bulk import
//! and export go through borrowed slices with explicit declared dimensions;
//! the crate never reads or writes past a slice boundary.

use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::error::MatrixError;

/// A dense matrix stored in row-major order.
///
/// Deserialization is validated: a payload whose `data` length disagrees
/// with the declared shape is rejected instead of producing a matrix that
/// violates the storage invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix<T>")]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

/// Unvalidated wire form of [`Matrix`]; converted through `TryFrom` so the
/// `data.len() == rows * cols` invariant holds for every live matrix.
#[derive(Deserialize)]
struct RawMatrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> TryFrom<RawMatrix<T>> for Matrix<T> {
    type Error = MatrixError;

    fn try_from(mut raw: RawMatrix<T>) -> Result<Self, MatrixError> {
        let len = checked_len(raw.rows, raw.cols)?;
        if raw.data.len() < len {
            return Err(MatrixError::BufferTooSmall {
                required: len,
                capacity: raw.data.len(),
            });
        }
        // same contract as from_slice: exactly rows * cols entries are kept
        raw.data.truncate(len);
        Ok(Self::from_parts(raw.rows, raw.cols, raw.data))
    }
}

/// Allocates a vector of capacity `len`, surfacing allocation failure as an
/// error instead of aborting the process.
pub(crate) fn checked_vec<T>(len: usize) -> Result<Vec<T>, MatrixError> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| MatrixError::AllocationFailure)?;
    Ok(data)
}

fn checked_len(rows: usize, cols: usize) -> Result<usize, MatrixError> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::InvalidDimension {
            rows,
            columns: cols,
        });
    }
    rows.checked_mul(cols)
        .ok_or(MatrixError::AllocationFailure)
}

impl<T> Matrix<T> {
    /// Assembles a matrix from a buffer already known to hold `rows * cols`
    /// elements. Internal constructor; callers validate first.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    /// Returns the number of rows.
    pub fn nrows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// Returns the shape as `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the backing storage as a row-major slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check_row(&self, row: usize) -> Result<(), MatrixError> {
        if row >= self.rows {
            return Err(MatrixError::IndexOutOfRange {
                index: row,
                bound: self.rows,
            });
        }
        Ok(())
    }

    fn check_col(&self, col: usize) -> Result<(), MatrixError> {
        if col >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                index: col,
                bound: self.cols,
            });
        }
        Ok(())
    }

    /// Returns a borrowed view of one row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    /// Applies `f` to every entry, producing a new matrix of the same shape.
    pub fn map<U, F>(&self, mut f: F) -> Result<Matrix<U>, MatrixError>
    where
        F: FnMut(&T) -> U,
    {
        let mut data = checked_vec(self.data.len())?;
        data.extend(self.data.iter().map(|v| f(v)));
        Ok(Matrix::from_parts(self.rows, self.cols, data))
    }
}

impl<T: Clone> Matrix<T> {
    /// Creates a `rows x cols` matrix with every entry set to `value`.
    ///
    /// # Errors
    ///
    /// `InvalidDimension` if either dimension is zero, `AllocationFailure`
    /// if the backing storage cannot be obtained.
    pub fn from_elem(rows: usize, cols: usize, value: T) -> Result<Self, MatrixError> {
        let len = checked_len(rows, cols)?;
        let mut data = checked_vec(len)?;
        data.resize(len, value);
        Ok(Self::from_parts(rows, cols, data))
    }

    /// Deep-copies the first `rows * cols` elements of `data`, laid out as
    /// `rows` rows of `cols` values.
    ///
    /// # Errors
    ///
    /// `InvalidDimension` if either dimension is zero, `BufferTooSmall` if
    /// the slice holds fewer than `rows * cols` elements.
    pub fn from_slice(rows: usize, cols: usize, data: &[T]) -> Result<Self, MatrixError> {
        let len = checked_len(rows, cols)?;
        let source = data.get(..len).ok_or(MatrixError::BufferTooSmall {
            required: len,
            capacity: data.len(),
        })?;
        let mut values = checked_vec(len)?;
        values.extend_from_slice(source);
        Ok(Self::from_parts(rows, cols, values))
    }

    /// Returns all entries as a row-major `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }
}

impl<T: Clone + Zero> Matrix<T> {
    /// Creates a `rows x cols` matrix of zeros.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Matrix::from_elem`].
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        Self::from_elem(rows, cols, T::zero())
    }
}

impl<T: Clone + Zero + One> Matrix<T> {
    /// Creates the `n x n` identity matrix.
    ///
    /// # Errors
    ///
    /// `InvalidDimension` if `n` is zero, `AllocationFailure` if storage
    /// cannot be obtained.
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        Ok(m)
    }
}

impl<T: Copy> Matrix<T> {
    /// Returns the entry at `(row, col)`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        self.check_row(row)?;
        self.check_col(col)?;
        Ok(self.data[self.offset(row, col)])
    }

    /// Overwrites the entry at `(row, col)`. The only in-place mutation the
    /// type offers; every other operation produces a fresh matrix.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if either index is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MatrixError> {
        self.check_row(row)?;
        self.check_col(col)?;
        let offset = self.offset(row, col);
        self.data[offset] = value;
        Ok(())
    }

    /// Copies one full row into `dest` and returns the number of elements
    /// copied (the column count).
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` for a bad row index, `BufferTooSmall` if `dest`
    /// holds fewer than `ncols()` elements.
    pub fn copy_row_into(&self, row: usize, dest: &mut [T]) -> Result<usize, MatrixError> {
        self.check_row(row)?;
        let capacity = dest.len();
        let target = dest
            .get_mut(..self.cols)
            .ok_or(MatrixError::BufferTooSmall {
                required: self.cols,
                capacity,
            })?;
        target.copy_from_slice(self.row_slice(row));
        Ok(self.cols)
    }

    /// Copies one full column into `dest` and returns the number of elements
    /// copied (the row count).
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` for a bad column index, `BufferTooSmall` if `dest`
    /// holds fewer than `nrows()` elements.
    pub fn copy_column_into(&self, col: usize, dest: &mut [T]) -> Result<usize, MatrixError> {
        self.check_col(col)?;
        let capacity = dest.len();
        let target = dest
            .get_mut(..self.rows)
            .ok_or(MatrixError::BufferTooSmall {
                required: self.rows,
                capacity,
            })?;
        for (row, slot) in target.iter_mut().enumerate() {
            *slot = self.data[self.offset(row, col)];
        }
        Ok(self.rows)
    }

    /// Copies every entry into `dest`, laid out exactly as
    /// [`Matrix::from_slice`] expects its input.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` unless `(rows, cols)` equals the matrix's own
    /// shape, `BufferTooSmall` if `dest` cannot hold all entries.
    pub fn copy_into(&self, dest: &mut [T], rows: usize, cols: usize) -> Result<(), MatrixError> {
        if (rows, cols) != self.shape() {
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: (rows, cols),
            });
        }
        let capacity = dest.len();
        let target = dest
            .get_mut(..self.data.len())
            .ok_or(MatrixError::BufferTooSmall {
                required: self.data.len(),
                capacity,
            })?;
        target.copy_from_slice(&self.data);
        Ok(())
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows {
            write!(f, "[")?;
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.data[self.offset(row, col)])?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
