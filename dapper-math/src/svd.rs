//! Reduced SVD decomposition using nalgebra

use std::cmp::Ordering;

use nalgebra::{DMatrix, DVector, RealField};

use crate::error::MathError;

/// Result of a reduced SVD, `A = U * diag(s) * VT`
#[derive(Debug, Clone)]
pub struct SVDResult<T> {
    /// Left singular vectors (m × k)
    pub u: DMatrix<T>,
    /// Singular values (k), non-negative and descending
    pub s: DVector<T>,
    /// Right singular vectors, transposed (k × n)
    pub vt: DMatrix<T>,
}

impl<T> SVDResult<T> {
    /// Number of singular triplets, `k = min(m, n)`
    pub fn len(&self) -> usize {
        self.s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.s.is_empty()
    }
}

/// Perform the reduced SVD of `matrix` using nalgebra
///
/// NaN or infinite entries are rejected with [`MathError::NonFinite`].
///
/// # Arguments
/// * `matrix` - Input matrix (m × n)
///
/// # Returns
/// * `SVDResult` with `k = min(m, n)` components, singular values sorted
///   in descending order and `U`/`VT` permuted accordingly
pub fn svd_decompose<T>(matrix: &DMatrix<T>) -> Result<SVDResult<T>, MathError>
where
    T: RealField + Copy,
{
    let (m, n) = matrix.shape();
    if m == 0 || n == 0 {
        return Err(MathError::EmptyMatrix);
    }

    if !matrix.iter().all(|x| x.is_finite()) {
        return Err(MathError::NonFinite);
    }

    // max_niter = 0 iterates until convergence; None means the QR sweep broke down
    let svd = matrix
        .clone()
        .try_svd_unordered(true, true, T::default_epsilon(), 0)
        .ok_or(MathError::SvdNotConverged)?;

    let u = svd.u.ok_or(MathError::SvdNotConverged)?;
    let vt = svd.v_t.ok_or(MathError::SvdNotConverged)?;
    let s = svd.singular_values;

    Ok(sort_descending(u, s, vt))
}

/// Reorder singular triplets so that `s` is non-increasing
fn sort_descending<T>(u: DMatrix<T>, s: DVector<T>, vt: DMatrix<T>) -> SVDResult<T>
where
    T: RealField + Copy,
{
    let k = s.len();
    let mut order: Vec<usize> = (0..k).collect();
    order.sort_by(|&a, &b| s[b].partial_cmp(&s[a]).unwrap_or(Ordering::Equal));

    if order.iter().enumerate().all(|(i, &j)| i == j) {
        return SVDResult { u, s, vt };
    }

    let u_sorted = DMatrix::from_fn(u.nrows(), k, |i, j| u[(i, order[j])]);
    let s_sorted = DVector::from_fn(k, |i, _| s[order[i]]);
    let vt_sorted = DMatrix::from_fn(k, vt.ncols(), |i, j| vt[(order[i], j)]);

    SVDResult {
        u: u_sorted,
        s: s_sorted,
        vt: vt_sorted,
    }
}
