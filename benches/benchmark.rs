use criterion::measurement::WallTime;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use qfoundations::algorithms::deutsch_jozsa::{hadamard_layer, run_deutsch_jozsa, QubitMask};
use qfoundations::algorithms::oracle::{build_oracle, BooleanFunction};
use qfoundations::statevector::{apply_operator, basis_state, measurement_probabilities, tensor};

// custom criterion configuration for all benchmarks
fn custom_criterion_config() -> Criterion<WallTime> {
    Criterion::default()
        .sample_size(100)
        .measurement_time(std::time::Duration::from_secs(5))
        .warm_up_time(std::time::Duration::from_secs(1))
}

fn engine_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("statevector");

    // dense operators grow as 4^n, keep registers small
    #[cfg(debug_assertions)]
    let qubit_counts = vec![2, 4];

    #[cfg(not(debug_assertions))]
    let qubit_counts = vec![2, 4, 6];

    for &num_qubits in &qubit_counts {
        let size = 1usize << num_qubits;
        group.throughput(Throughput::Elements(size as u64));

        let zero = basis_state(0, 1).unwrap();
        let factors = vec![zero; num_qubits];
        group.bench_function(format!("tensor_{}_qubits", num_qubits), |b| {
            b.iter(|| tensor(black_box(&factors)).unwrap());
        });

        let state = basis_state(0, num_qubits).unwrap();
        let layer = hadamard_layer(&QubitMask::all(num_qubits)).unwrap();
        group.bench_function(format!("hadamard_layer_{}_qubits", num_qubits), |b| {
            b.iter(|| apply_operator(black_box(&state), black_box(&layer)).unwrap());
        });

        let superposed = apply_operator(&state, &layer).unwrap();
        group.bench_function(format!("probabilities_{}_qubits", num_qubits), |b| {
            b.iter(|| measurement_probabilities(black_box(&superposed)).unwrap());
        });
    }

    group.finish();
}

fn algorithm_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("deutsch_jozsa");

    for &n in &[1usize, 3, 5] {
        group.bench_function(format!("build_oracle_{}_inputs", n), |b| {
            b.iter(|| build_oracle(black_box(&BooleanFunction::XorAll), n).unwrap());
        });
        group.bench_function(format!("pipeline_{}_inputs", n), |b| {
            b.iter(|| run_deutsch_jozsa(black_box(&BooleanFunction::Balanced), n).unwrap());
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = custom_criterion_config();
    targets = engine_benchmarks, algorithm_benchmarks
}
criterion_main!(benches);
