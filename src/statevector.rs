//! Statevector engine.
//!
//! Pure value-in/value-out transforms on complex amplitude vectors and
//! operator matrices. Basis index `i` is the n-bit binary expansion of `i`,
//! most-significant bit first, so qubit 0 is the leftmost tensor factor.
//!
//! Nothing here mutates its inputs or keeps state between calls.

use crate::config::DEFAULT_TOLERANCE;
use crate::error::{QuantumError, Result};
use itertools::iproduct;
use ndarray::{Array1, Array2};
use num_complex::Complex64;
use rayon::prelude::*;
use std::borrow::Borrow;

/// Amplitudes of an n-qubit pure state, length 2^n.
pub type StateVector = Array1<Complex64>;

/// Square complex matrix acting on a statevector.
pub type Operator = Array2<Complex64>;

pub const ZERO: Complex64 = Complex64::new(0.0, 0.0);
pub const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// Largest register this engine will allocate.
pub const MAX_QUBITS: usize = 24;

/// Largest register a dense 2^n x 2^n operator is built for.
pub const MAX_OPERATOR_QUBITS: usize = 12;

fn capped_dimension(num_qubits: usize, max: usize) -> Result<usize> {
    if num_qubits > max {
        return Err(QuantumError::qubit_count(format!(
            "{} qubits exceeds the supported maximum of {}",
            num_qubits, max
        )));
    }
    Ok(1usize << num_qubits)
}

// 2^num_qubits, rejecting registers that would not fit in memory
pub fn dimension_for(num_qubits: usize) -> Result<usize> {
    capped_dimension(num_qubits, MAX_QUBITS)
}

/// Side length of a dense operator on `num_qubits`, capped at [`MAX_OPERATOR_QUBITS`].
pub fn operator_dimension_for(num_qubits: usize) -> Result<usize> {
    capped_dimension(num_qubits, MAX_OPERATOR_QUBITS)
}

/// Qubit count of a vector or operator dimension. Fails unless `len` is a power of two.
pub fn num_qubits_for_len(len: usize) -> Result<usize> {
    if len == 0 || !len.is_power_of_two() {
        return Err(QuantumError::dimension_mismatch(len.next_power_of_two(), len));
    }
    Ok(len.trailing_zeros() as usize)
}

/// Computational basis state |index> on `num_qubits` qubits.
///
/// Out-of-range indices are rejected rather than left to panic on indexing.
pub fn basis_state(index: usize, num_qubits: usize) -> Result<StateVector> {
    let dimension = dimension_for(num_qubits)?;
    if index >= dimension {
        return Err(QuantumError::BasisIndexOutOfRange { index, dimension });
    }
    let mut state = Array1::from_elem(dimension, ZERO);
    state[index] = ONE;
    Ok(state)
}

fn norm_sqr(state: &StateVector) -> f64 {
    state.par_iter().map(|a| a.norm_sqr()).sum()
}

/// Divides `state` by the square root of <state|state>.
pub fn normalize(state: &StateVector) -> Result<StateVector> {
    let norm_sqr = norm_sqr(state);
    if !(norm_sqr > 0.0) || !norm_sqr.is_finite() {
        return Err(QuantumError::DegenerateNormalization);
    }
    let norm = norm_sqr.sqrt();
    Ok(state.mapv(|a| a / norm))
}

/// True when the squared magnitudes sum to 1 within [`DEFAULT_TOLERANCE`].
pub fn is_normalized(state: &StateVector) -> bool {
    is_normalized_within(state, DEFAULT_TOLERANCE)
}

pub fn is_normalized_within(state: &StateVector, tolerance: f64) -> bool {
    (norm_sqr(state) - 1.0).abs() < tolerance
}

fn kron_vectors(a: &StateVector, b: &StateVector) -> StateVector {
    iproduct!(a.iter(), b.iter()).map(|(x, y)| x * y).collect()
}

/// Kronecker product of `states`, left to right, re-normalized.
///
/// `states[0]` becomes the most-significant factor. A single state is
/// returned normalized; an empty slice is an error, as is any factor whose
/// length is not a power of two.
pub fn tensor<S: Borrow<StateVector>>(states: &[S]) -> Result<StateVector> {
    let (first, rest) = states.split_first().ok_or(QuantumError::EmptyTensor)?;
    let total_qubits = states.iter().try_fold(0usize, |acc, s| {
        num_qubits_for_len(s.borrow().len()).map(|q| acc + q)
    })?;
    dimension_for(total_qubits)?;
    let product = rest
        .iter()
        .fold(first.borrow().clone(), |acc, next| kron_vectors(&acc, next.borrow()));
    log::trace!("tensor of {} states -> dimension {}", states.len(), product.len());
    normalize(&product)
}

/// Matrix-vector product `operator * state`, followed by re-normalization.
///
/// The re-normalization only absorbs floating-point drift. It is not a
/// measurement and does not make a non-unitary operator physical.
pub fn apply_operator(state: &StateVector, operator: &Operator) -> Result<StateVector> {
    num_qubits_for_len(state.len())?;
    let (rows, cols) = operator.dim();
    if rows != cols {
        return Err(QuantumError::dimension_mismatch(cols, rows));
    }
    if cols != state.len() {
        return Err(QuantumError::dimension_mismatch(state.len(), cols));
    }
    log::trace!("applying {}x{} operator", rows, cols);
    normalize(&operator.dot(state))
}

/// Probability of each computational basis outcome.
pub fn measurement_probabilities(state: &StateVector) -> Result<Vec<f64>> {
    let normalized = normalize(state)?;
    Ok(normalized.iter().map(|a| a.norm_sqr()).collect())
}

/// <psi|phi>, conjugate-linear in `psi`.
pub fn inner_product(psi: &StateVector, phi: &StateVector) -> Result<Complex64> {
    if psi.len() != phi.len() {
        return Err(QuantumError::dimension_mismatch(psi.len(), phi.len()));
    }
    Ok(psi.iter().zip(phi.iter()).map(|(a, b)| a.conj() * b).sum())
}

pub fn identity(dimension: usize) -> Operator {
    Array2::eye(dimension)
}

fn kron_pair(a: &Operator, b: &Operator) -> Operator {
    let (ra, ca) = a.dim();
    let (rb, cb) = b.dim();
    Array2::from_shape_fn((ra * rb, ca * cb), |(i, j)| {
        a[[i / rb, j / cb]] * b[[i % rb, j % cb]]
    })
}

/// Kronecker product of operators, left to right. An empty slice gives the 1x1 identity.
pub fn kron_operators<O: Borrow<Operator>>(operators: &[O]) -> Operator {
    operators
        .iter()
        .fold(identity(1), |acc, op| kron_pair(&acc, op.borrow()))
}

/// Conjugate transpose.
pub fn dagger(operator: &Operator) -> Operator {
    operator.t().mapv(|a| a.conj())
}

/// Checks U^dagger U = I entry-wise within `tolerance`.
pub fn is_unitary(operator: &Operator, tolerance: f64) -> bool {
    let (rows, cols) = operator.dim();
    if rows != cols {
        return false;
    }
    let product = dagger(operator).dot(operator);
    product.indexed_iter().all(|((i, j), value)| {
        let expected = if i == j { ONE } else { ZERO };
        (value - expected).norm() < tolerance
    })
}
