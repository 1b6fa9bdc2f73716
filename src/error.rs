use std::error::Error;
use std::fmt;

/// Errors reported by matrix construction and linear-algebra operations.
///
/// Every failure is detected synchronously by the call that produces it and
/// never leaves a partially constructed matrix behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// A constructor was asked for a matrix with zero rows or zero columns.
    InvalidDimension { rows: usize, columns: usize },
    /// Two operands (or a matrix and a declared buffer shape) have
    /// incompatible dimensions for the requested operation.
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// An element, row, or column index lies outside the matrix bounds.
    IndexOutOfRange { index: usize, bound: usize },
    /// A caller-provided buffer cannot hold the requested number of elements.
    BufferTooSmall { required: usize, capacity: usize },
    /// Determinant, adjugate, or inverse was requested on a non-square matrix.
    NotSquare { rows: usize, columns: usize },
    /// Inverse was requested on a matrix whose determinant is exactly zero.
    Singular,
    /// Backing storage could not be obtained.
    AllocationFailure,
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::InvalidDimension { rows, columns } => {
                write!(f, "invalid matrix dimensions {}x{}", rows, columns)
            }
            MatrixError::DimensionMismatch { left, right } => write!(
                f,
                "dimension mismatch: {}x{} is incompatible with {}x{}",
                left.0, left.1, right.0, right.1
            ),
            MatrixError::IndexOutOfRange { index, bound } => {
                write!(f, "index {} out of range for axis of length {}", index, bound)
            }
            MatrixError::BufferTooSmall { required, capacity } => write!(
                f,
                "buffer of capacity {} cannot hold {} elements",
                capacity, required
            ),
            MatrixError::NotSquare { rows, columns } => {
                write!(f, "{}x{} matrix is not square", rows, columns)
            }
            MatrixError::Singular => write!(f, "matrix is singular (determinant is zero)"),
            MatrixError::AllocationFailure => write!(f, "failed to allocate matrix storage"),
        }
    }
}

impl Error for MatrixError {}
