//! Uniform handling of 0-, 1- and 2-dimensional inputs
//!
//! Functions written for matrices can be lifted to scalars and vectors with
//! [`atmost_2d`]: the input is broadened to a matrix on entry and axes of
//! length one are squeezed out of the output.

use nalgebra::{DMatrix, DVector, Scalar};

use crate::error::MathError;

/// A value of dimensionality 0, 1 or 2
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T: Scalar> {
    Scalar(T),
    Vector(DVector<T>),
    Matrix(DMatrix<T>),
}

impl<T: Scalar> Field<T> {
    /// Number of axes (0, 1 or 2)
    pub fn ndim(&self) -> usize {
        match self {
            Field::Scalar(_) => 0,
            Field::Vector(_) => 1,
            Field::Matrix(_) => 2,
        }
    }

    /// Axis lengths, one entry per axis
    pub fn shape(&self) -> Vec<usize> {
        match self {
            Field::Scalar(_) => Vec::new(),
            Field::Vector(v) => vec![v.len()],
            Field::Matrix(m) => vec![m.nrows(), m.ncols()],
        }
    }

    /// Total number of elements
    pub fn size(&self) -> usize {
        self.shape().iter().product()
    }
}

impl<T: Scalar> From<DVector<T>> for Field<T> {
    fn from(v: DVector<T>) -> Self {
        Field::Vector(v)
    }
}

impl<T: Scalar> From<DMatrix<T>> for Field<T> {
    fn from(m: DMatrix<T>) -> Self {
        Field::Matrix(m)
    }
}

impl From<f64> for Field<f64> {
    fn from(x: f64) -> Self {
        Field::Scalar(x)
    }
}

impl From<f32> for Field<f32> {
    fn from(x: f32) -> Self {
        Field::Scalar(x)
    }
}

/// True if `x` holds exactly one element (scalar, length-1 vector, 1×1 matrix)
pub fn is_scalar<T: Scalar>(x: &Field<T>) -> bool {
    x.size() == 1
}

/// True if at most one axis of `x` is longer than one
pub fn is_1d<T: Scalar>(x: &Field<T>) -> bool {
    x.shape().iter().filter(|&&len| len > 1).count() <= 1
}

/// View a vector as an n × 1 column matrix
pub fn as_column<T: Scalar>(v: &DVector<T>) -> DMatrix<T> {
    DMatrix::from_column_slice(v.len(), 1, v.as_slice())
}

/// Broaden `x` to two dimensions; a vector of length n becomes a 1 × n row
pub fn atleast_2d<T: Scalar>(x: Field<T>) -> DMatrix<T> {
    match x {
        Field::Scalar(s) => DMatrix::from_element(1, 1, s),
        Field::Vector(v) => DMatrix::from_row_slice(1, v.len(), v.as_slice()),
        Field::Matrix(m) => m,
    }
}

/// Drop the axes of length one
pub fn squeeze<T: Scalar>(m: DMatrix<T>) -> Field<T> {
    match m.shape() {
        (1, 1) => Field::Scalar(m[(0, 0)].clone()),
        (1, n) => Field::Vector(DVector::from_iterator(n, m.iter().cloned())),
        (n, 1) => Field::Vector(DVector::from_iterator(n, m.iter().cloned())),
        _ => Field::Matrix(m),
    }
}

/// Apply a matrix function to a 0-, 1- or 2-dimensional input
///
/// `x` is passed to `f` as a matrix (see [`atleast_2d`]) and the result is
/// squeezed.
pub fn atmost_2d<T, F, E>(x: impl Into<Field<T>>, f: F) -> Result<Field<T>, E>
where
    T: Scalar,
    F: FnOnce(DMatrix<T>) -> Result<DMatrix<T>, E>,
{
    f(atleast_2d(x.into())).map(squeeze)
}

/// Append copies of `val` to `v` until it has `length` entries
pub fn pad0<T: Scalar + Copy>(v: &DVector<T>, length: usize, val: T) -> Result<DVector<T>, MathError> {
    if length < v.len() {
        return Err(MathError::dimension_mismatch(format!(
            "cannot pad vector of length {} to {}",
            v.len(),
            length
        )));
    }
    Ok(DVector::from_fn(length, |i, _| if i < v.len() { v[i] } else { val }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tsvd::tsvd_f64;

    #[test]
    fn test_field_shapes() {
        let s = Field::Scalar(2.0);
        let v = Field::from(DVector::from_vec(vec![1.0, 2.0, 3.0]));
        let m = Field::from(DMatrix::<f64>::zeros(2, 4));

        assert_eq!((s.ndim(), s.size()), (0, 1));
        assert_eq!(v.shape(), vec![3]);
        assert_eq!(m.shape(), vec![2, 4]);
        assert_eq!(m.size(), 8);
    }

    #[test]
    fn test_is_scalar() {
        assert!(is_scalar(&Field::Scalar(1.5)));
        assert!(is_scalar(&Field::from(DVector::from_vec(vec![1.5]))));
        assert!(is_scalar(&Field::from(DMatrix::from_element(1, 1, 1.5))));
        assert!(!is_scalar(&Field::from(DVector::from_vec(vec![1.0, 2.0]))));
    }

    #[test]
    fn test_is_1d() {
        assert!(is_1d(&Field::Scalar(3.0)));
        assert!(is_1d(&Field::from(DVector::<f64>::zeros(5))));
        assert!(is_1d(&Field::from(DMatrix::<f64>::zeros(1, 5))));
        assert!(is_1d(&Field::from(DMatrix::<f64>::zeros(5, 1))));
        assert!(!is_1d(&Field::from(DMatrix::<f64>::zeros(2, 5))));
    }

    #[test]
    fn test_as_column() {
        let v = DVector::from_vec(vec![1.0, 2.0, 3.0]);
        let col = as_column(&v);
        assert_eq!(col.shape(), (3, 1));
        assert_eq!(col[(2, 0)], 3.0);
    }

    #[test]
    fn test_atleast_2d_vector_is_row() {
        let m = atleast_2d(Field::from(DVector::from_vec(vec![1.0, 2.0])));
        assert_eq!(m.shape(), (1, 2));
        assert_eq!(m[(0, 1)], 2.0);
    }

    #[test]
    fn test_squeeze() {
        assert_eq!(squeeze(DMatrix::from_element(1, 1, 4.0)), Field::Scalar(4.0));
        assert_eq!(
            squeeze(DMatrix::from_row_slice(1, 2, &[1.0, 2.0])),
            Field::Vector(DVector::from_vec(vec![1.0, 2.0]))
        );
        assert_eq!(
            squeeze(DMatrix::from_column_slice(2, 1, &[3.0, 4.0])),
            Field::Vector(DVector::from_vec(vec![3.0, 4.0]))
        );
        assert_eq!(squeeze(DMatrix::<f64>::zeros(2, 2)).ndim(), 2);
    }

    #[test]
    fn test_atmost_2d_restores_dimensionality() {
        let double = |m: DMatrix<f64>| -> Result<DMatrix<f64>, MathError> { Ok(m * 2.0) };

        assert_eq!(atmost_2d(3.0_f64, double).unwrap(), Field::Scalar(6.0));
        assert_eq!(
            atmost_2d(DVector::from_vec(vec![1.0, 2.0]), double).unwrap(),
            Field::Vector(DVector::from_vec(vec![2.0, 4.0]))
        );
        assert_eq!(atmost_2d(DMatrix::<f64>::identity(2, 2), double).unwrap().ndim(), 2);
    }

    #[test]
    fn test_atmost_2d_with_tsvd_recompose() {
        let v = DVector::from_vec(vec![3.0, 4.0]);

        let out = atmost_2d(v.clone(), |m| tsvd_f64(&m, 1.0)?.recompose()).unwrap();

        match out {
            Field::Vector(w) => approx::assert_abs_diff_eq!(w, v, epsilon = 1e-12),
            other => panic!("expected vector, got {:?}", other),
        }
    }

    #[test]
    fn test_atmost_2d_propagates_error() {
        let result = atmost_2d(1.0_f64, |_m: DMatrix<f64>| Err(MathError::SingularMatrix));
        assert_eq!(result, Err(MathError::SingularMatrix));
    }

    #[test]
    fn test_pad0() {
        let v = DVector::from_vec(vec![1, 2]);
        assert_eq!(pad0(&v, 4, 0).unwrap().as_slice(), &[1, 2, 0, 0]);
        assert!(pad0(&v, 1, 0).is_err());
    }
}
