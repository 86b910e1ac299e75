//! Truncated SVD (TSVD) with energy-threshold rank selection
//!
//! The retained rank `r` is the number of leading singular values whose
//! cumulative share of the total singular-value sum does not exceed
//! `threshold`. From the truncated factors this module also rebuilds the
//! low-rank approximation and the truncated Moore-Penrose pseudo-inverse.

use nalgebra::{DMatrix, DVector, RealField};

use crate::error::MathError;
use crate::svd::{svd_decompose, SVDResult};

/// Rule used to choose the retained rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TruncationPolicy {
    /// Keep every component whose cumulative energy ratio is `<= threshold`
    #[default]
    EnergyThreshold,
    /// Heuristic that avoids chopping the tail of near-identity spectra.
    /// Reserved, always fails with [`MathError::NotImplemented`].
    AvoidPathological,
}

/// Configuration for TSVD computation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TsvdConfig<T> {
    /// Fraction of the singular-value sum to retain, in `(0, 1]`
    pub threshold: T,
    /// Rank selection rule
    pub policy: TruncationPolicy,
}

impl<T> TsvdConfig<T> {
    pub fn new(threshold: T) -> Self {
        Self {
            threshold,
            policy: TruncationPolicy::EnergyThreshold,
        }
    }

    pub fn with_policy(mut self, policy: TruncationPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl<T: RealField + Copy> Default for TsvdConfig<T> {
    fn default() -> Self {
        Self::new(nalgebra::convert::<f64, T>(0.99))
    }
}

/// Truncated singular triple, `A ≈ U * diag(s) * VT`
#[derive(Debug, Clone)]
pub struct TruncatedSvd<T> {
    /// Left singular vectors (m × r)
    pub u: DMatrix<T>,
    /// Retained singular values (r), descending
    pub s: DVector<T>,
    /// Right singular vectors, transposed (r × n)
    pub vt: DMatrix<T>,
}

impl<T: RealField + Copy> TruncatedSvd<T> {
    /// Retained rank
    pub fn rank(&self) -> usize {
        self.s.len()
    }

    /// Low-rank approximation `(U * s) @ VT`
    pub fn recompose(&self) -> Result<DMatrix<T>, MathError> {
        recompose(&self.u, &self.s, &self.vt)
    }

    /// Pseudo-inverse `(VT^T / s) @ U^T`, shape n × m
    ///
    /// A retained singular value equal to zero is a fatal error.
    pub fn pinv(&self) -> Result<DMatrix<T>, MathError> {
        if let Some(index) = self.s.iter().position(|&sv| sv == T::zero()) {
            return Err(MathError::ZeroSingularValue { index });
        }

        if self.s.is_empty() {
            return Ok(DMatrix::zeros(self.vt.ncols(), self.u.nrows()));
        }

        let mut v_scaled = self.vt.transpose();
        for (j, mut col) in v_scaled.column_iter_mut().enumerate() {
            col /= self.s[j];
        }
        Ok(v_scaled * self.u.transpose())
    }
}

/// Number of leading components whose cumulative energy ratio is `<= threshold`
///
/// An all-zero spectrum has no energy to distribute and yields rank 0.
pub fn energy_rank<T>(s: &DVector<T>, threshold: T) -> Result<usize, MathError>
where
    T: RealField + Copy,
{
    let total = s.iter().fold(T::zero(), |acc, &x| acc + x);
    if !total.is_finite() {
        return Err(MathError::NonFinite);
    }
    if total == T::zero() {
        log::debug!("tsvd: singular values sum to zero, keeping rank 0");
        return Ok(0);
    }

    let k = s.len();
    let mut cumsum = T::zero();
    let mut rank = 0;
    for (i, &sv) in s.iter().enumerate() {
        cumsum += sv;
        // The last ratio is 1 exactly; rounding in cumsum must not exclude it
        let ratio = if i + 1 == k { T::one() } else { cumsum / total };
        if ratio <= threshold {
            rank += 1;
        }
    }

    Ok(rank)
}

fn validate_threshold<T>(threshold: T) -> Result<(), MathError>
where
    T: RealField + Copy,
{
    if threshold > T::zero() && threshold <= T::one() {
        Ok(())
    } else {
        Err(MathError::InvalidThreshold(format!(
            "Threshold must be in (0, 1], got {:?}",
            threshold
        )))
    }
}

/// Truncated SVD
///
/// Computes the truncated SVD using the algorithm:
/// 1. Compute the reduced SVD of A
/// 2. Form the cumulative energy ratios `c[i] = sum(s[..=i]) / sum(s)`
/// 3. Retain `r = #{i : c[i] <= threshold}` components
///
/// # Arguments
/// * `matrix` - Input matrix (m × n)
/// * `config` - TSVD configuration
///
/// # Returns
/// * `TruncatedSvd` with `U` m × r, `s` r, `VT` r × n
pub fn tsvd<T>(matrix: &DMatrix<T>, config: TsvdConfig<T>) -> Result<TruncatedSvd<T>, MathError>
where
    T: RealField + Copy,
{
    if config.policy == TruncationPolicy::AvoidPathological {
        return Err(MathError::NotImplemented(
            "avoid_pathological truncation policy",
        ));
    }
    validate_threshold(config.threshold)?;

    let SVDResult { u, s, vt } = svd_decompose(matrix)?;
    let k = s.len();
    let r = energy_rank(&s, config.threshold)?;

    log::debug!(
        "tsvd: {}x{} matrix, kept {} of {} components (threshold {:?})",
        matrix.nrows(),
        matrix.ncols(),
        r,
        k,
        config.threshold
    );

    Ok(TruncatedSvd {
        u: u.columns(0, r).into_owned(),
        s: s.rows(0, r).into_owned(),
        vt: vt.rows(0, r).into_owned(),
    })
}

/// Rebuild `(U * s) @ VT` from (possibly truncated) factors
///
/// `recompose(tsvd(A, 1.0))` reproduces `A`.
pub fn recompose<T>(
    u: &DMatrix<T>,
    s: &DVector<T>,
    vt: &DMatrix<T>,
) -> Result<DMatrix<T>, MathError>
where
    T: RealField + Copy,
{
    if u.ncols() != s.len() || vt.nrows() != s.len() {
        return Err(MathError::dimension_mismatch(format!(
            "u is {}x{}, s has {} entries, vt is {}x{}",
            u.nrows(),
            u.ncols(),
            s.len(),
            vt.nrows(),
            vt.ncols()
        )));
    }

    if s.is_empty() {
        return Ok(DMatrix::zeros(u.nrows(), vt.ncols()));
    }

    let mut us = u.clone();
    for (j, mut col) in us.column_iter_mut().enumerate() {
        col *= s[j];
    }
    Ok(us * vt)
}

/// Truncated pseudo-inverse of `matrix` (n × m for an m × n input)
pub fn tinv<T>(matrix: &DMatrix<T>, config: TsvdConfig<T>) -> Result<DMatrix<T>, MathError>
where
    T: RealField + Copy,
{
    tsvd(matrix, config)?.pinv()
}

/// Convenience function for f64 TSVD
pub fn tsvd_f64(matrix: &DMatrix<f64>, threshold: f64) -> Result<TruncatedSvd<f64>, MathError> {
    tsvd(matrix, TsvdConfig::new(threshold))
}

/// Convenience function for f64 truncated pseudo-inverse
pub fn tinv_f64(matrix: &DMatrix<f64>, threshold: f64) -> Result<DMatrix<f64>, MathError> {
    tinv(matrix, TsvdConfig::new(threshold))
}
