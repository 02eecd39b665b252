// qfoundations: statevectors, gates and the Deutsch-Jozsa algorithm

pub mod algorithms; // oracles and deutsch-jozsa
pub mod config; // tolerances and run settings
pub mod error; // error type
pub mod gates; // single and two qubit gate matrices
pub mod sampling; // shot sampling
pub mod statevector; // statevector engine

pub use error::{QuantumError, Result};
pub use statevector::{Operator, StateVector};
