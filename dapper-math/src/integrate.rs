//! Fixed-step Runge-Kutta integration

use nalgebra::{DVector, RealField};

/// One classical fourth-order Runge-Kutta step of `dx/dt = f(t, x)`
///
/// # Arguments
/// * `f` - Right-hand side, evaluated at `(t, x)`
/// * `x0` - State at time `t`
/// * `t` - Current time
/// * `dt` - Step size
///
/// # Returns
/// * State at time `t + dt`
pub fn rk4<T, F>(f: F, x0: &DVector<T>, t: T, dt: T) -> DVector<T>
where
    T: RealField + Copy,
    F: Fn(T, &DVector<T>) -> DVector<T>,
{
    let two = nalgebra::convert::<f64, T>(2.0);
    let six = nalgebra::convert::<f64, T>(6.0);
    let half_dt = dt / two;

    let k1 = f(t, x0) * dt;
    let k2 = f(t + half_dt, &(x0 + &k1 / two)) * dt;
    let k3 = f(t + half_dt, &(x0 + &k2 / two)) * dt;
    let k4 = f(t + dt, &(x0 + &k3)) * dt;

    log::trace!("rk4 step t={:?} dt={:?}", t, dt);

    x0 + (k1 + (k2 + k3) * two + k4) / six
}
