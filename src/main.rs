use clap::{Parser, Subcommand};
use qfoundations::algorithms::deutsch_jozsa::{
    classify_classically, run_deutsch_jozsa, run_deutsch_jozsa_with, DeutschJozsaOutcome,
    PipelineConfig,
};
use qfoundations::algorithms::oracle::{balanced_function, constant_function, BooleanFunction};
use qfoundations::config::SimConfig;
use qfoundations::gates::{named_gates, rotation_gates};
use qfoundations::sampling::{format_bitstring, make_rng, sample_counts};
use qfoundations::statevector::is_unitary;

const QFOUND_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "qfound", version = QFOUND_VERSION,
    about = "qfound - statevector primer: gates, oracles and the Deutsch-Jozsa algorithm.\n\
             Use 'qfound help <command>' for more information on a specific command.",
    long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Runs Deutsch-Jozsa for a named classical function.
    Dj {
        /// Number of input qubits (the ancilla is added automatically).
        #[arg(long, short = 'n', default_value_t = 2)]
        qubits: usize,
        /// Classical function to query.
        #[arg(long, short = 'f', value_enum, default_value_t = BooleanFunction::Balanced)]
        function: BooleanFunction,
        /// Also draw this many measurement shots from the final distribution.
        /// Overrides `shots` from the config file, which enables sampling on its own.
        #[arg(long)]
        shots: Option<usize>,
        /// Seed for shot sampling.
        #[arg(long)]
        seed: Option<u64>,
        /// JSON file with tolerance, unitarity_tolerance, shots and seed.
        #[arg(long, value_name = "FILE")]
        config: Option<String>,
        /// Apply the first Hadamard layer to the input qubits only, leaving the ancilla in |1>.
        #[arg(long)]
        inputs_only: bool,
        /// Print the outcome as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Runs the two-qubit demonstration for a balanced and a constant function.
    Demo,
    /// Checks unitarity of every gate in the library.
    Gates {
        /// Angle used for the rotation gates.
        #[arg(long, default_value_t = 0.5, allow_hyphen_values = true)]
        theta: f64,
        /// JSON file with tolerance, unitarity_tolerance, shots and seed.
        #[arg(long, value_name = "FILE")]
        config: Option<String>,
    },
    /// Prints the qfound version.
    Version,
}

fn load_config(path: Option<&str>) -> Result<SimConfig, String> {
    match path {
        Some(path) => SimConfig::from_json_file(path)
            .map_err(|e| format!("error loading config {}: {}", path, e)),
        None => Ok(SimConfig::default()),
    }
}

fn print_distribution(outcome: &DeutschJozsaOutcome) {
    for (index, p) in outcome.probabilities.iter().enumerate() {
        println!("  |{}>  {:.6}", format_bitstring(index, outcome.input_qubits), p);
    }
}

fn run_dj(
    qubits: usize,
    function: BooleanFunction,
    shots: Option<usize>,
    seed: Option<u64>,
    config_path: Option<String>,
    inputs_only: bool,
    json: bool,
) -> Result<(), String> {
    let mut config = load_config(config_path.as_deref())?;
    if let Some(seed) = seed {
        config.seed = Some(seed);
    }
    if shots.is_some() {
        config.shots = shots;
    }

    let pipeline = if inputs_only {
        PipelineConfig::inputs_only(qubits)
    } else {
        PipelineConfig::standard(qubits)
    }
    .with_tolerance(config.tolerance);

    let outcome = run_deutsch_jozsa_with(&function, qubits, &pipeline).map_err(|e| e.to_string())?;

    if json {
        let text = serde_json::to_string_pretty(&outcome).map_err(|e| e.to_string())?;
        println!("{}", text);
        return Ok(());
    }

    println!("deutsch-jozsa, {} input qubits, function {:?}", qubits, function);
    print_distribution(&outcome);
    println!("verdict: {:?}", outcome.verdict);
    match classify_classically(&function, qubits).map_err(|e| e.to_string())? {
        Some(expected) => println!("classical check: {:?}", expected),
        None => println!("classical check: neither constant nor balanced"),
    }

    if let Some(shots) = config.shots {
        let mut rng = make_rng(config.seed);
        let counts =
            sample_counts(&outcome.probabilities, shots, &mut rng).map_err(|e| e.to_string())?;
        println!("sampled {} shots:", shots);
        for (index, count) in counts.iter().enumerate().filter(|(_, count)| **count > 0) {
            println!("  |{}>  {}", format_bitstring(index, qubits), count);
        }
    }
    Ok(())
}

fn run_demo() -> Result<(), String> {
    let balanced = run_deutsch_jozsa(&balanced_function, 2).map_err(|e| e.to_string())?;
    println!("measurement probabilities for balanced function: {:?}", balanced.probabilities);
    let constant = run_deutsch_jozsa(&constant_function, 2).map_err(|e| e.to_string())?;
    println!("measurement probabilities for constant function: {:?}", constant.probabilities);
    Ok(())
}

fn run_gates(theta: f64, config_path: Option<String>) -> Result<(), String> {
    let config = load_config(config_path.as_deref())?;
    let mut all_unitary = true;

    let gates = named_gates()
        .into_iter()
        .map(|(name, op)| (name.to_string(), op))
        .chain(rotation_gates(theta));
    for (name, op) in gates {
        let unitary = is_unitary(&op, config.unitarity_tolerance);
        all_unitary &= unitary;
        println!("{:<12} {}x{}  unitary: {}", name, op.nrows(), op.ncols(), unitary);
    }

    if all_unitary {
        Ok(())
    } else {
        Err("one or more gates failed the unitarity check".to_string())
    }
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Dj {
            qubits,
            function,
            shots,
            seed,
            config,
            inputs_only,
            json,
        } => run_dj(qubits, function, shots, seed, config, inputs_only, json),
        Commands::Demo => run_demo(),
        Commands::Gates { theta, config } => run_gates(theta, config),
        Commands::Version => {
            println!("qfound version {}", QFOUND_VERSION);
            Ok(())
        }
    };

    if let Err(e) = &result {
        log::error!("{}", e);
    }
    result
}
