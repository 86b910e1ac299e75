//! Reference initial conditions

use dapper_math::{MathError, Matrix, Vector};

use crate::layout::N_VARIABLES;

/// State after a ten-year spin-up from [`x0`] with time step 0.1
const SPUN_UP_STATE: [f64; N_VARIABLES] = [
    3.96282335e-02, -1.17090354e-02, -4.17830342e-02, 3.77819324e-02, -9.83993620e-03,
    -3.04146911e-03, 1.02147629e-02, 3.91911160e-03, 1.97539021e-02, 3.23147052e-02,
    3.17206885e-02, -6.25536744e-03, -1.94112294e-02, 4.95809422e-03, -9.07757336e-03,
    -4.64571480e-05, 1.83484278e-03, 4.33499786e-03, 1.22257621e-02, 1.15499818e-02,
    -7.82795976e-07, -1.44505604e-05, 2.26732690e-07, -3.20988502e-08, 2.45639934e-06,
    -4.91550364e-06, -6.66040970e-07, -1.96839184e-08, -2.28392595e-03, 2.18919847e-01,
    2.19888119e-03, 7.20819584e-02, -3.51634484e-04, -9.02060876e-03, -5.30086228e-05,
    3.85312299e-06,
];

/// Default initial condition: rest state with a weak zonal atmospheric flow
pub fn x0() -> Vector {
    let mut x = Vector::zeros(N_VARIABLES);
    x[0] = 0.03; // ψ_a, type A, (0, 1)
    x[1] = 0.005; // ψ_a, type K, (1, 1)
    x
}

/// Spun-up initial condition on the model attractor
pub fn x1() -> Vector {
    Vector::from_vec(SPUN_UP_STATE.to_vec())
}

/// Stack states into an ensemble matrix, one member per row
pub fn stack_members(members: &[Vector]) -> Result<Matrix, MathError> {
    let first = members.first().ok_or(MathError::EmptyMatrix)?;
    let dim = first.len();
    if let Some(bad) = members.iter().find(|m| m.len() != dim) {
        return Err(MathError::DimensionMismatch {
            message: format!("member of length {} in ensemble of dimension {}", bad.len(), dim),
        });
    }
    Ok(Matrix::from_fn(members.len(), dim, |i, j| members[i][j]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_x0_is_sparse() {
        let x = x0();
        assert_eq!(x.len(), N_VARIABLES);
        assert_eq!(x[0], 0.03);
        assert_eq!(x[1], 0.005);
        assert_eq!(x.iter().filter(|&&v| v != 0.0).count(), 2);
    }

    #[test]
    fn test_x1_values() {
        let x = x1();
        assert_eq!(x.len(), N_VARIABLES);
        assert_abs_diff_eq!(x[0], 3.96282335e-02);
        assert_abs_diff_eq!(x[29], 2.18919847e-01);
        assert_abs_diff_eq!(x[35], 3.85312299e-06);
    }

    #[test]
    fn test_stack_members() {
        let e = stack_members(&[x0(), x1()]).unwrap();
        assert_eq!(e.shape(), (2, N_VARIABLES));
        assert_eq!(e[(1, 29)], x1()[29]);
    }

    #[test]
    fn test_stack_members_errors() {
        assert_eq!(stack_members(&[]).unwrap_err(), MathError::EmptyMatrix);
        assert!(matches!(
            stack_members(&[x0(), Vector::zeros(3)]),
            Err(MathError::DimensionMismatch { .. })
        ));
    }
}
