//! Numerical helpers for ensemble data assimilation using nalgebra
//!
//! This library provides energy-truncated SVD, the matching pseudo-inverse,
//! ensemble anomaly statistics, an RK4 stepper and small rounding and
//! indexing utilities.

pub mod ensemble;
pub mod error;
pub mod integrate;
pub mod rounding;
pub mod seq;
pub mod shape;
pub mod solve;
pub mod svd;
pub mod tsvd;

// Re-export main types
pub use error::MathError;
pub use nalgebra::{DMatrix, DVector};

// Re-export main functions
pub use ensemble::{anom, center, inflate_ens, Axis};
pub use integrate::rk4;
pub use rounding::{round2, round2sigfig, validate_int};
pub use seq::{equi_spaced_integers, find_1st_ind};
pub use shape::{as_column, atleast_2d, atmost_2d, is_1d, is_scalar, pad0, squeeze, Field};
pub use solve::{mldiv, mrdiv};
pub use svd::{svd_decompose, SVDResult};
pub use tsvd::{
    energy_rank, recompose, tinv, tinv_f64, tsvd, tsvd_f64, TruncatedSvd, TruncationPolicy,
    TsvdConfig,
};

// Type aliases for convenience
pub type Matrix = DMatrix<f64>;
pub type Vector = DVector<f64>;
