//! Deutsch-Jozsa over n input qubits plus one ancilla.
//!
//! The pipeline is prepare -> superpose -> oracle -> interfere -> measure.
//! Which qubits receive a Hadamard in the superpose and interfere stages is
//! an explicit [`QubitMask`] rather than a hard-coded convention:
//!
//! * [`PipelineConfig::standard`] puts H on every qubit before the oracle
//!   (the ancilla goes from |1> to |->, enabling phase kickback) and on the
//!   inputs only afterwards. Constant functions then measure |0...0> with
//!   certainty and balanced ones never do.
//! * [`PipelineConfig::inputs_only`] leaves the ancilla in |1>. The oracle
//!   then flips the ancilla instead of kicking back a phase, and balanced
//!   functions are no longer separated from constant ones.

use crate::algorithms::oracle::{build_oracle, truth_table, ClassicalFunction};
use crate::config::DEFAULT_TOLERANCE;
use crate::error::{QuantumError, Result};
use crate::gates::single_qubit;
use crate::statevector::{
    apply_operator, basis_state, dimension_for, kron_operators, measurement_probabilities,
    normalize, num_qubits_for_len, operator_dimension_for, tensor, Operator, StateVector,
};
use serde::{Deserialize, Serialize};

/// Selects qubits of a register, qubit 0 (most significant) first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QubitMask(Vec<bool>);

impl QubitMask {
    pub fn new(selected: Vec<bool>) -> Self {
        QubitMask(selected)
    }

    /// Every one of `len` qubits.
    pub fn all(len: usize) -> Self {
        QubitMask(vec![true; len])
    }

    /// The first `count` of `len` qubits.
    pub fn leading(count: usize, len: usize) -> Self {
        QubitMask((0..len).map(|q| q < count).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, qubit: usize) -> bool {
        self.0.get(qubit).copied().unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }
}

/// H on each selected qubit, identity elsewhere.
///
/// The layer is a dense matrix, so scopes wider than
/// [`MAX_OPERATOR_QUBITS`](crate::statevector::MAX_OPERATOR_QUBITS) are rejected.
pub fn hadamard_layer(scope: &QubitMask) -> Result<Operator> {
    operator_dimension_for(scope.len())?;
    let factors: Vec<Operator> = scope
        .iter()
        .map(|selected| {
            if selected {
                single_qubit::h()
            } else {
                single_qubit::identity()
            }
        })
        .collect();
    Ok(kron_operators(&factors))
}

/// Hadamard scopes for the two interference stages and the verdict tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub superpose_scope: QubitMask,
    pub interfere_scope: QubitMask,
    pub tolerance: f64,
}

impl PipelineConfig {
    pub fn standard(n: usize) -> Self {
        PipelineConfig {
            superpose_scope: QubitMask::all(n + 1),
            interfere_scope: QubitMask::leading(n, n + 1),
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    pub fn inputs_only(n: usize) -> Self {
        PipelineConfig {
            superpose_scope: QubitMask::leading(n, n + 1),
            interfere_scope: QubitMask::leading(n, n + 1),
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Constant,
    Balanced,
    /// Probability of |0...0> is neither ~1 nor ~0.
    Inconclusive,
}

impl Verdict {
    pub fn from_zero_probability(p0: f64, tolerance: f64) -> Self {
        if (p0 - 1.0).abs() < tolerance {
            Verdict::Constant
        } else if p0.abs() < tolerance {
            Verdict::Balanced
        } else {
            Verdict::Inconclusive
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeutschJozsaOutcome {
    pub input_qubits: usize,
    /// Marginal distribution over the input register, length 2^n.
    pub probabilities: Vec<f64>,
    pub zero_probability: f64,
    pub verdict: Verdict,
}

fn check_input_qubits(n: usize) -> Result<()> {
    if n == 0 {
        return Err(QuantumError::qubit_count(
            "Deutsch-Jozsa needs at least one input qubit",
        ));
    }
    Ok(())
}

fn check_scope(register: &StateVector, scope: &QubitMask) -> Result<()> {
    let qubits = num_qubits_for_len(register.len())?;
    if scope.len() != qubits {
        return Err(QuantumError::dimension_mismatch(qubits, scope.len()));
    }
    Ok(())
}

/// |0...0> on the n inputs tensored with |1> on the ancilla.
pub fn prepare_register(n: usize) -> Result<StateVector> {
    check_input_qubits(n)?;
    let inputs = basis_state(0, n)?;
    let ancilla = basis_state(1, 1)?;
    normalize(&tensor(&[inputs, ancilla])?)
}

pub fn superpose(register: &StateVector, scope: &QubitMask) -> Result<StateVector> {
    check_scope(register, scope)?;
    apply_operator(register, &hadamard_layer(scope)?)
}

pub fn apply_oracle<F: ClassicalFunction + ?Sized>(
    register: &StateVector,
    f: &F,
    n: usize,
) -> Result<StateVector> {
    apply_operator(register, &build_oracle(f, n)?)
}

pub fn interfere(register: &StateVector, scope: &QubitMask) -> Result<StateVector> {
    check_scope(register, scope)?;
    apply_operator(register, &hadamard_layer(scope)?)
}

/// Distribution over the n input qubits, summing out the ancilla.
pub fn measure_input_register(register: &StateVector, n: usize) -> Result<Vec<f64>> {
    let expected = dimension_for(n + 1)?;
    if register.len() != expected {
        return Err(QuantumError::dimension_mismatch(expected, register.len()));
    }
    let probabilities = measurement_probabilities(register)?;
    // ancilla is the low bit: entries 2x and 2x+1 share input pattern x
    Ok(probabilities.chunks(2).map(|pair| pair[0] + pair[1]).collect())
}

pub fn run_deutsch_jozsa<F: ClassicalFunction + ?Sized>(
    f: &F,
    n: usize,
) -> Result<DeutschJozsaOutcome> {
    run_deutsch_jozsa_with(f, n, &PipelineConfig::standard(n))
}

pub fn run_deutsch_jozsa_with<F: ClassicalFunction + ?Sized>(
    f: &F,
    n: usize,
    config: &PipelineConfig,
) -> Result<DeutschJozsaOutcome> {
    check_input_qubits(n)?;
    // every stage builds a dense operator over the n + 1 qubits
    operator_dimension_for(n + 1)?;

    let register = prepare_register(n)?;
    log::debug!("prepared {}-qubit register", n + 1);
    let register = superpose(&register, &config.superpose_scope)?;
    log::debug!("superposed with scope {:?}", config.superpose_scope);
    let register = apply_oracle(&register, f, n)?;
    log::debug!("applied oracle");
    let register = interfere(&register, &config.interfere_scope)?;
    log::debug!("interfered with scope {:?}", config.interfere_scope);
    let probabilities = measure_input_register(&register, n)?;

    let zero_probability = probabilities[0];
    let verdict = Verdict::from_zero_probability(zero_probability, config.tolerance);
    log::info!(
        "deutsch-jozsa on {} input qubits: p(0) = {:.6}, verdict {:?}",
        n,
        zero_probability,
        verdict
    );

    Ok(DeutschJozsaOutcome {
        input_qubits: n,
        probabilities,
        zero_probability,
        verdict,
    })
}

/// Classifies `f` by evaluating its whole truth table.
///
/// Returns `None` when `f` is neither constant nor balanced, so the
/// promise Deutsch-Jozsa relies on does not hold.
pub fn classify_classically<F: ClassicalFunction + ?Sized>(
    f: &F,
    n: usize,
) -> Result<Option<Verdict>> {
    let table = truth_table(f, n)?;
    let ones = table.iter().filter(|&&bit| bit == 1).count();
    Ok(if ones == 0 || ones == table.len() {
        Some(Verdict::Constant)
    } else if 2 * ones == table.len() {
        Some(Verdict::Balanced)
    } else {
        None
    })
}
