// finite-shot sampling of measurement distributions

use crate::error::{QuantumError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded rng when `seed` is given, entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Draws `shots` outcomes from `probabilities` and returns per-index counts.
///
/// Weights need not sum exactly to 1; they are rescaled by their total.
pub fn sample_counts<R: Rng>(
    probabilities: &[f64],
    shots: usize,
    rng: &mut R,
) -> Result<Vec<usize>> {
    if probabilities.iter().any(|p| !p.is_finite() || *p < 0.0) {
        return Err(QuantumError::EmptyDistribution);
    }
    let total: f64 = probabilities.iter().sum();
    if probabilities.is_empty() || !(total > 0.0) {
        return Err(QuantumError::EmptyDistribution);
    }

    let mut counts = vec![0usize; probabilities.len()];
    // last index with non-zero weight, catches rounding at the top of the cdf
    let fallback = probabilities
        .iter()
        .rposition(|&p| p > 0.0)
        .unwrap_or(probabilities.len() - 1);

    for _ in 0..shots {
        let r: f64 = rng.gen::<f64>() * total;
        let mut cumulative = 0.0;
        let mut outcome = fallback;
        for (i, &p) in probabilities.iter().enumerate() {
            cumulative += p;
            if r < cumulative {
                outcome = i;
                break;
            }
        }
        counts[outcome] += 1;
    }
    Ok(counts)
}

/// `index` as `width` binary digits, most-significant first.
pub fn format_bitstring(index: usize, width: usize) -> String {
    format!("{:0width$b}", index, width = width)
}
