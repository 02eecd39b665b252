//! Reversible oracles for classical boolean functions.
//!
//! The oracle for `f` on n input qubits is the 2^(n+1) x 2^(n+1) permutation
//! |x>|y> -> |x>|y XOR f(x)>, with the ancilla `y` as the least-significant bit.

use crate::error::{QuantumError, Result};
use crate::statevector::{dimension_for, operator_dimension_for, Operator, ONE, ZERO};
use clap::ValueEnum;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// A classical function from input patterns to a single bit (0 or 1).
pub trait ClassicalFunction {
    fn evaluate(&self, x: usize) -> u8;
}

impl<F> ClassicalFunction for F
where
    F: Fn(usize) -> u8,
{
    fn evaluate(&self, x: usize) -> u8 {
        self(x)
    }
}

/// Named example functions, selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum BooleanFunction {
    /// f(x) = 0
    ConstantZero,
    /// f(x) = 1
    ConstantOne,
    /// f(x) = x mod 2
    Balanced,
    /// f(x) = parity of the set bits of x
    XorAll,
}

impl ClassicalFunction for BooleanFunction {
    fn evaluate(&self, x: usize) -> u8 {
        match self {
            BooleanFunction::ConstantZero => 0,
            BooleanFunction::ConstantOne => 1,
            BooleanFunction::Balanced => balanced_function(x),
            BooleanFunction::XorAll => (x.count_ones() % 2) as u8,
        }
    }
}

pub fn constant_function(_x: usize) -> u8 {
    0
}

pub fn balanced_function(x: usize) -> u8 {
    (x % 2) as u8
}

/// Parses a string of '0'/'1' digits, most-significant first, into an index.
pub fn bitstring_to_index(bits: &str) -> Result<usize> {
    if bits.is_empty() {
        return Err(QuantumError::InvalidBitstring("empty bitstring".to_string()));
    }
    if bits.len() > usize::BITS as usize {
        return Err(QuantumError::InvalidBitstring(format!(
            "{} bits do not fit in an index",
            bits.len()
        )));
    }
    bits.chars().try_fold(0usize, |acc, c| match c {
        '0' => Ok(acc << 1),
        '1' => Ok((acc << 1) | 1),
        other => Err(QuantumError::InvalidBitstring(format!(
            "unexpected character {:?} in {:?}",
            other, bits
        ))),
    })
}

/// Truth table of `f` over all 2^n input patterns, validated to contain only 0 and 1.
pub fn truth_table<F: ClassicalFunction + ?Sized>(f: &F, n: usize) -> Result<Vec<u8>> {
    let inputs = dimension_for(n)?;
    (0..inputs)
        .map(|x| match f.evaluate(x) {
            bit @ (0 | 1) => Ok(bit),
            output => Err(QuantumError::InvalidClassicalOutput { input: x, output }),
        })
        .collect()
}

/// Builds the oracle unitary for `f` on `n` input qubits.
///
/// Each column gets exactly one 1, so the result is a permutation matrix
/// and unitary by construction.
pub fn build_oracle<F: ClassicalFunction + ?Sized>(f: &F, n: usize) -> Result<Operator> {
    if n == 0 {
        return Err(QuantumError::qubit_count(
            "oracle needs at least one input qubit",
        ));
    }
    let dim = operator_dimension_for(n + 1)?;
    let table = truth_table(f, n)?;
    let mut oracle = Array2::from_elem((dim, dim), ZERO);

    for (x, &fx) in table.iter().enumerate() {
        for y in 0..2usize {
            let in_index = (x << 1) | y;
            let out_index = (x << 1) | (y ^ fx as usize);
            oracle[[out_index, in_index]] = ONE;
        }
    }

    log::debug!(
        "built {}x{} oracle for {} input qubits ({} ones in truth table)",
        dim,
        dim,
        n,
        table.iter().filter(|&&b| b == 1).count()
    );
    Ok(oracle)
}
