//! Left and right matrix division via LU

use nalgebra::{DMatrix, RealField};

use crate::error::MathError;

fn check_square<T: RealField>(a: &DMatrix<T>) -> Result<usize, MathError> {
    let (n, m) = a.shape();
    if n != m {
        return Err(MathError::dimension_mismatch(format!(
            "expected a square matrix, got {}x{}",
            n, m
        )));
    }
    if n == 0 {
        return Err(MathError::EmptyMatrix);
    }
    Ok(n)
}

/// Left division `A \ b`, the solution `x` of `A x = b`
pub fn mldiv<T>(a: &DMatrix<T>, b: &DMatrix<T>) -> Result<DMatrix<T>, MathError>
where
    T: RealField + Copy,
{
    let n = check_square(a)?;
    if b.nrows() != n {
        return Err(MathError::dimension_mismatch(format!(
            "A is {}x{} but b has {} rows",
            n,
            n,
            b.nrows()
        )));
    }
    a.clone().lu().solve(b).ok_or(MathError::SingularMatrix)
}

/// Right division `b / A`, the solution `x` of `x A = b`
pub fn mrdiv<T>(b: &DMatrix<T>, a: &DMatrix<T>) -> Result<DMatrix<T>, MathError>
where
    T: RealField + Copy,
{
    Ok(mldiv(&a.transpose(), &b.transpose())?.transpose())
}
