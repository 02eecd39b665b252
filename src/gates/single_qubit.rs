//! Single-qubit gates as 2x2 complex matrices.

use crate::statevector::{Operator, ONE, ZERO};
use ndarray::array;
use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

const I: Complex64 = Complex64::new(0.0, 1.0);

pub fn identity() -> Operator {
    array![[ONE, ZERO], [ZERO, ONE]]
}

/// Pauli X (bit flip).
pub fn x() -> Operator {
    array![[ZERO, ONE], [ONE, ZERO]]
}

/// Pauli Y.
pub fn y() -> Operator {
    array![[ZERO, -I], [I, ZERO]]
}

/// Pauli Z (phase flip).
pub fn z() -> Operator {
    array![[ONE, ZERO], [ZERO, -ONE]]
}

/// Hadamard.
pub fn h() -> Operator {
    let s = Complex64::new(FRAC_1_SQRT_2, 0.0);
    array![[s, s], [s, -s]]
}

/// Rotation about X by `theta`.
pub fn rx(theta: f64) -> Operator {
    let cos_half = Complex64::new((theta / 2.0).cos(), 0.0);
    let i_sin_half = Complex64::new(0.0, -(theta / 2.0).sin());
    array![[cos_half, i_sin_half], [i_sin_half, cos_half]]
}

/// Rotation about Y by `theta`.
pub fn ry(theta: f64) -> Operator {
    let cos_half = Complex64::new((theta / 2.0).cos(), 0.0);
    let sin_half = Complex64::new((theta / 2.0).sin(), 0.0);
    array![[cos_half, -sin_half], [sin_half, cos_half]]
}

/// Rotation about Z by `theta`: diag(e^(-i theta/2), e^(i theta/2)).
pub fn rz(theta: f64) -> Operator {
    let phase_0 = Complex64::new(0.0, -theta / 2.0).exp();
    let phase_1 = Complex64::new(0.0, theta / 2.0).exp();
    array![[phase_0, ZERO], [ZERO, phase_1]]
}
