//! Integration tests for construction, accessors, and bulk import/export.

use matriz::{Matrix, MatrixError};

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn from_elem_fills_every_entry() {
    let m = Matrix::from_elem(2, 3, 7.5).unwrap();
    assert_eq!(m.shape(), (2, 3));
    for v in m.as_slice() {
        assert_eq!(*v, 7.5);
    }
}

#[test]
fn zeros_and_identity() {
    let z = Matrix::<f64>::zeros(2, 2).unwrap();
    assert_eq!(z.as_slice(), &[0.0, 0.0, 0.0, 0.0]);

    let i = Matrix::<f64>::identity(3).unwrap();
    assert_eq!(i.get(0, 0).unwrap(), 1.0);
    assert_eq!(i.get(1, 1).unwrap(), 1.0);
    assert_eq!(i.get(0, 1).unwrap(), 0.0);
    assert_eq!(i.get(2, 0).unwrap(), 0.0);
}

#[test]
fn zero_dimensions_are_rejected() {
    assert_eq!(
        Matrix::<f64>::zeros(0, 3),
        Err(MatrixError::InvalidDimension { rows: 0, columns: 3 })
    );
    assert_eq!(
        Matrix::from_elem(2, 0, 1.0),
        Err(MatrixError::InvalidDimension { rows: 2, columns: 0 })
    );
    assert_eq!(
        Matrix::<f64>::identity(0),
        Err(MatrixError::InvalidDimension { rows: 0, columns: 0 })
    );
}

#[test]
fn from_slice_copies_row_major() {
    let m = Matrix::from_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(m[(0, 0)], 1.0);
    assert_eq!(m[(0, 1)], 2.0);
    assert_eq!(m[(1, 0)], 3.0);
    assert_eq!(m[(1, 1)], 4.0);
}

#[test]
fn from_slice_reads_exactly_the_declared_count() {
    // extra trailing elements are ignored
    let m = Matrix::from_slice(1, 2, &[1.0, 2.0, 99.0]).unwrap();
    assert_eq!(m.to_vec(), vec![1.0, 2.0]);

    let short = Matrix::from_slice(2, 2, &[1.0, 2.0, 3.0]);
    assert_eq!(
        short,
        Err(MatrixError::BufferTooSmall {
            required: 4,
            capacity: 3
        })
    );
}

#[test]
fn clone_is_a_deep_copy() {
    let mut a = Matrix::from_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    let b = a.clone();
    a.set(0, 0, 100.0).unwrap();
    assert_eq!(b[(0, 0)], 1.0);
    assert_eq!(a[(0, 0)], 100.0);
}

// ---------------------------------------------------------------------------
// Element access
// ---------------------------------------------------------------------------

#[test]
fn get_and_set_round_trip() {
    let mut m = Matrix::<f64>::zeros(3, 3).unwrap();
    m.set(1, 2, -4.25).unwrap();
    assert_eq!(m.get(1, 2).unwrap(), -4.25);
    assert_eq!(m.get(2, 1).unwrap(), 0.0);
}

#[test]
fn out_of_range_indices_are_rejected() {
    let mut m = Matrix::<f64>::zeros(2, 3).unwrap();
    assert_eq!(
        m.get(2, 0),
        Err(MatrixError::IndexOutOfRange { index: 2, bound: 2 })
    );
    assert_eq!(
        m.get(0, 3),
        Err(MatrixError::IndexOutOfRange { index: 3, bound: 3 })
    );
    assert_eq!(
        m.set(5, 0, 1.0),
        Err(MatrixError::IndexOutOfRange { index: 5, bound: 2 })
    );
}

#[test]
fn dimension_counters() {
    let m = Matrix::<f64>::zeros(4, 2).unwrap();
    assert_eq!(m.nrows(), 4);
    assert_eq!(m.ncols(), 2);
    assert_eq!(m.shape(), (4, 2));
}

// ---------------------------------------------------------------------------
// Row / column / bulk extraction
// ---------------------------------------------------------------------------

#[test]
fn copy_row_into_buffer() {
    let m = Matrix::from_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    let mut buf = [0.0; 3];
    let copied = m.copy_row_into(1, &mut buf).unwrap();
    assert_eq!(copied, 3);
    assert_eq!(buf, [4.0, 5.0, 6.0]);
}

#[test]
fn copy_column_into_buffer() {
    let m = Matrix::from_slice(3, 2, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    let mut buf = [0.0; 4];
    let copied = m.copy_column_into(1, &mut buf).unwrap();
    assert_eq!(copied, 3);
    assert_eq!(&buf[..3], &[2.0, 4.0, 6.0]);
    // untouched past the copied count
    assert_eq!(buf[3], 0.0);
}

#[test]
fn extraction_rejects_short_buffers() {
    let m = Matrix::from_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    let mut buf = [0.0; 2];
    assert_eq!(
        m.copy_row_into(0, &mut buf),
        Err(MatrixError::BufferTooSmall {
            required: 3,
            capacity: 2
        })
    );

    let mut col = [0.0; 1];
    assert_eq!(
        m.copy_column_into(0, &mut col),
        Err(MatrixError::BufferTooSmall {
            required: 2,
            capacity: 1
        })
    );
}

#[test]
fn extraction_rejects_bad_indices() {
    let m = Matrix::<f64>::zeros(2, 2).unwrap();
    let mut buf = [0.0; 2];
    assert_eq!(
        m.copy_row_into(2, &mut buf),
        Err(MatrixError::IndexOutOfRange { index: 2, bound: 2 })
    );
    assert_eq!(
        m.copy_column_into(9, &mut buf),
        Err(MatrixError::IndexOutOfRange { index: 9, bound: 2 })
    );
}

#[test]
fn copy_into_requires_matching_shape() {
    let m = Matrix::from_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    let mut buf = [0.0; 4];
    m.copy_into(&mut buf, 2, 2).unwrap();
    assert_eq!(buf, [1.0, 2.0, 3.0, 4.0]);

    assert_eq!(
        m.copy_into(&mut buf, 4, 1),
        Err(MatrixError::DimensionMismatch {
            left: (2, 2),
            right: (4, 1)
        })
    );

    let mut short = [0.0; 3];
    assert_eq!(
        m.copy_into(&mut short, 2, 2),
        Err(MatrixError::BufferTooSmall {
            required: 4,
            capacity: 3
        })
    );
}

#[test]
fn copy_into_round_trips_with_from_slice() {
    let m = Matrix::from_slice(2, 3, &[1.0, -2.0, 3.5, 0.0, 5.0, -6.25]).unwrap();
    let mut buf = [0.0; 6];
    m.copy_into(&mut buf, 2, 3).unwrap();
    let back = Matrix::from_slice(2, 3, &buf).unwrap();
    assert_eq!(back, m);
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn serde_round_trip_preserves_the_matrix() {
    let m = Matrix::from_slice(2, 3, &[1.0, -2.0, 3.5, 0.0, 5.0, -6.25]).unwrap();
    let json = serde_json::to_string(&m).unwrap();
    let back: Matrix<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);
}

#[test]
fn deserialization_rejects_understated_data() {
    // a payload whose data cannot fill the declared shape must not produce
    // a live matrix
    let result = serde_json::from_str::<Matrix<f64>>(r#"{"data":[1.0],"rows":5,"cols":5}"#);
    assert!(result.is_err());
}

#[test]
fn deserialization_rejects_zero_dimensions() {
    let result = serde_json::from_str::<Matrix<f64>>(r#"{"data":[],"rows":0,"cols":3}"#);
    assert!(result.is_err());
}

#[test]
fn deserialization_keeps_exactly_the_declared_count() {
    let m: Matrix<f64> =
        serde_json::from_str(r#"{"data":[1.0,2.0,3.0,4.0,99.0],"rows":2,"cols":2}"#).unwrap();
    assert_eq!(m.to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(m.get(1, 1).unwrap(), 4.0);
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

#[test]
fn display_renders_rows() {
    let m = Matrix::from_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(m.to_string(), "[1 2]\n[3 4]\n");
}
