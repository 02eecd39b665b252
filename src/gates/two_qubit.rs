//! Two-qubit gates as 4x4 complex matrices. Qubit 0 is the most-significant
//! bit of the basis index and is the control for CNOT, CZ and controlled-U.

use crate::error::{QuantumError, Result};
use crate::statevector::{identity, Operator, ONE, ZERO};
use ndarray::array;

pub fn cnot() -> Operator {
    array![
        [ONE, ZERO, ZERO, ZERO],
        [ZERO, ONE, ZERO, ZERO],
        [ZERO, ZERO, ZERO, ONE],
        [ZERO, ZERO, ONE, ZERO],
    ]
}

pub fn cz() -> Operator {
    array![
        [ONE, ZERO, ZERO, ZERO],
        [ZERO, ONE, ZERO, ZERO],
        [ZERO, ZERO, ONE, ZERO],
        [ZERO, ZERO, ZERO, -ONE],
    ]
}

pub fn swap() -> Operator {
    array![
        [ONE, ZERO, ZERO, ZERO],
        [ZERO, ZERO, ONE, ZERO],
        [ZERO, ONE, ZERO, ZERO],
        [ZERO, ZERO, ZERO, ONE],
    ]
}

/// Controlled-U: `u` placed in the bottom-right block of a 4x4 identity.
///
/// Fails with [`QuantumError::InvalidGateShape`] unless `u` is exactly 2x2.
pub fn controlled(u: &Operator) -> Result<Operator> {
    let (rows, cols) = u.dim();
    if rows != 2 || cols != 2 {
        return Err(QuantumError::InvalidGateShape { rows, cols });
    }
    let mut gate = identity(4);
    gate.slice_mut(ndarray::s![2.., 2..]).assign(u);
    Ok(gate)
}
