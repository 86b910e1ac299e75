//! Ensemble anomalies, centering and inflation
//!
//! An ensemble is an N × M matrix with one member per row and one state
//! variable per column.

use nalgebra::{DMatrix, DVector, RealField};

use crate::error::MathError;

/// Axis along which the mean is taken
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Average over rows (ensemble members); one mean per column
    Rows,
    /// Average over columns (state variables); one mean per row
    Columns,
}

/// Subtract the mean along `axis`
///
/// # Returns
/// * `(A, mu)` where `A` has the shape of `ensemble` and `mu` holds one mean
///   per column (`Axis::Rows`) or per row (`Axis::Columns`)
pub fn anom<T>(ensemble: &DMatrix<T>, axis: Axis) -> Result<(DMatrix<T>, DVector<T>), MathError>
where
    T: RealField + Copy,
{
    let (n, m) = ensemble.shape();
    match axis {
        Axis::Rows => {
            if n == 0 {
                return Err(MathError::EmptyMatrix);
            }
            let mu = DVector::from_fn(m, |j, _| ensemble.column(j).mean());
            let a = DMatrix::from_fn(n, m, |i, j| ensemble[(i, j)] - mu[j]);
            Ok((a, mu))
        }
        Axis::Columns => {
            if m == 0 {
                return Err(MathError::EmptyMatrix);
            }
            let mu = DVector::from_fn(n, |i, _| ensemble.row(i).mean());
            let a = DMatrix::from_fn(n, m, |i, j| ensemble[(i, j)] - mu[i]);
            Ok((a, mu))
        }
    }
}

/// Center the ensemble on its mean
///
/// With `rescale`, the anomalies are multiplied by `sqrt(N / (N - 1))` so that
/// the sample keeps its expected variance.
pub fn center<T>(ensemble: &DMatrix<T>, rescale: bool) -> Result<DMatrix<T>, MathError>
where
    T: RealField + Copy,
{
    let n = ensemble.nrows();
    if rescale && n < 2 {
        return Err(MathError::InsufficientMembers {
            required: 2,
            actual: n,
        });
    }

    let (mut a, _) = anom(ensemble, Axis::Rows)?;
    if rescale {
        let n_t = nalgebra::convert::<f64, T>(n as f64);
        a *= (n_t / (n_t - T::one())).sqrt();
    }
    Ok(a)
}

/// Scale the anomalies around the ensemble mean by `factor`
pub fn inflate_ens<T>(ensemble: &DMatrix<T>, factor: T) -> Result<DMatrix<T>, MathError>
where
    T: RealField + Copy,
{
    let (a, mu) = anom(ensemble, Axis::Rows)?;
    log::trace!("inflating {} members by {:?}", ensemble.nrows(), factor);
    Ok(DMatrix::from_fn(a.nrows(), a.ncols(), |i, j| {
        mu[j] + a[(i, j)] * factor
    }))
}
