//! Determinant, adjugate, and inverse via cofactor expansion.
//!
//! The determinant uses Laplace expansion along the first row, recursing on
//! minors. This is exponential in the matrix order and numerically naive
//! (no pivoting), which is the intended contract: results are exactly those
//! of the textbook cofactor method. Callers needing large or ill-conditioned
//! systems solved should reach for a decomposition-based library instead.

use crate::error::MatrixError;
use crate::matrix::Matrix;

impl Matrix<f64> {
    fn check_square(&self) -> Result<usize, MatrixError> {
        if self.nrows() != self.ncols() {
            return Err(MatrixError::NotSquare {
                rows: self.nrows(),
                columns: self.ncols(),
            });
        }
        Ok(self.nrows())
    }

    /// The submatrix obtained by deleting `row` and `col`, preserving the
    /// relative order of the remaining rows and columns. Only called for
    /// square matrices of order two or more.
    fn minor(&self, row: usize, col: usize) -> Result<Self, MatrixError> {
        let n = self.nrows();
        let mut out = Self::zeros(n - 1, n - 1)?;
        for i in 0..n {
            if i == row {
                continue;
            }
            let oi = if i > row { i - 1 } else { i };
            for j in 0..n {
                if j == col {
                    continue;
                }
                let oj = if j > col { j - 1 } else { j };
                out[(oi, oj)] = self[(i, j)];
            }
        }
        Ok(out)
    }

    /// Computes the determinant by recursive Laplace expansion along row 0.
    ///
    /// Base cases: a `1x1` matrix yields its single entry, a `2x2` matrix
    /// yields `ad - bc`.
    ///
    /// # Errors
    ///
    /// `NotSquare` unless `nrows() == ncols()`.
    pub fn determinant(&self) -> Result<f64, MatrixError> {
        let n = self.check_square()?;
        match n {
            1 => Ok(self[(0, 0)]),
            2 => Ok(self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]),
            _ => {
                log::trace!("expanding {}x{} determinant along row 0", n, n);
                let mut det = 0.0;
                let mut sign = 1.0;
                for j in 0..n {
                    det += sign * self[(0, j)] * self.minor(0, j)?.determinant()?;
                    sign = -sign;
                }
                Ok(det)
            }
        }
    }

    /// Returns the adjugate: the transpose of the cofactor matrix, where
    /// cofactor `(i, j)` is `(-1)^(i+j)` times the determinant of the minor
    /// at `(i, j)`.
    ///
    /// The adjugate of a `1x1` matrix is `[[1.0]]` by convention, regardless
    /// of the entry.
    ///
    /// # Errors
    ///
    /// `NotSquare` unless `nrows() == ncols()`.
    pub fn adjugate(&self) -> Result<Self, MatrixError> {
        let n = self.check_square()?;
        if n == 1 {
            return Self::from_elem(1, 1, 1.0);
        }
        let mut out = Self::zeros(n, n)?;
        for i in 0..n {
            for j in 0..n {
                let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
                out[(j, i)] = sign * self.minor(i, j)?.determinant()?;
            }
        }
        Ok(out)
    }

    /// Returns the inverse: the adjugate scaled by the reciprocal of the
    /// determinant.
    ///
    /// # Errors
    ///
    /// `NotSquare` unless the matrix is square, `Singular` if the
    /// determinant is exactly `0.0`.
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        let n = self.check_square()?;
        let det = self.determinant()?;
        if det == 0.0 {
            return Err(MatrixError::Singular);
        }
        log::trace!("inverting {}x{} matrix, determinant = {}", n, n, det);
        self.adjugate()?.scale(1.0 / det)
    }
}
