//! Rounding to a precision or to significant figures

use crate::error::MathError;

const ISCLOSE_RTOL: f64 = 1e-5;
const ISCLOSE_ATOL: f64 = 1e-8;

/// Round `x` to the nearest multiple of `prec`, ties to even
pub fn round2(x: f64, prec: f64) -> f64 {
    prec * (x / prec).round_ties_even()
}

/// Round `x` to `nfig` significant figures
pub fn round2sigfig(x: f64, nfig: i32) -> f64 {
    if x == 0.0 {
        return x;
    }
    let magnitude = x.abs();
    let prec = 10f64.powi(magnitude.log10().floor() as i32 - nfig + 1);
    x.signum() * round2(magnitude, prec)
}

/// Truncate `x` to an integer, requiring that it was (numerically) one already
pub fn validate_int(x: f64) -> Result<i64, MathError> {
    if !x.is_finite() {
        return Err(MathError::NotAnInteger { value: x });
    }
    let x_int = x.trunc();
    // `as` saturates; 2^63 itself is already out of range
    if x_int < i64::MIN as f64 || x_int >= i64::MAX as f64 {
        return Err(MathError::NotAnInteger { value: x });
    }
    if (x - x_int).abs() <= ISCLOSE_ATOL + ISCLOSE_RTOL * x_int.abs() {
        Ok(x_int as i64)
    } else {
        Err(MathError::NotAnInteger { value: x })
    }
}
